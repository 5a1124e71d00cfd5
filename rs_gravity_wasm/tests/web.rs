#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use rs_gravity_wasm::{barnes_hut_accelerations, brute_force_accelerations, WasmGravity};

#[wasm_bindgen_test]
fn test_unit_pair_brute_force() {
    let accs = brute_force_accelerations(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0], &[1.0, 1.0], 1.0, 0.0).unwrap();
    assert_eq!(accs.to_vec(), vec![1.0, 0.0, 0.0, -1.0, 0.0, 0.0]);
}

#[wasm_bindgen_test]
fn test_unit_pair_barnes_hut() {
    let accs = barnes_hut_accelerations(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0], &[1.0, 1.0], 1.0, 0.0, 0.5).unwrap();
    assert_eq!(accs.to_vec(), vec![1.0, 0.0, 0.0, -1.0, 0.0, 0.0]);
}

#[wasm_bindgen_test]
fn test_ragged_positions_are_rejected() {
    assert!(brute_force_accelerations(&[0.0, 0.0], &[1.0], 1.0, 0.0).is_err());
}

#[wasm_bindgen_test]
fn test_handle_validates_config() {
    assert!(WasmGravity::new(1.0, -1.0, 0.5).is_err());
    let gravity = WasmGravity::new(1.0, 1.0e-3, 0.5).unwrap();
    assert_eq!(gravity.theta(), 0.5);
    let accs = gravity.barnes_hut(&[0.0, 0.0, 0.0], &[1.0]).unwrap();
    assert_eq!(accs.to_vec(), vec![0.0, 0.0, 0.0]);
}

#[wasm_bindgen_test]
fn test_errors_carry_the_library_message() {
    let err = match brute_force_accelerations(&[0.0, 0.0, 0.0], &[-1.0], 1.0, 0.0) {
        Ok(_) => panic!("negative mass must be rejected"),
        Err(err) => err,
    };
    assert_eq!(err.as_string().as_deref(), Some("Invalid mass value -1 for particle 0"));
}
