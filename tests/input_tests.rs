// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn client_to_local_subtracts_origin() {
    let p = client_to_local(Vec2::new(120.0, 80.0), 20.0, 30.0);
    assert_eq!(p, Vec2::new(100.0, 50.0));
}

#[test]
fn client_to_local_at_origin_is_identity() {
    let p = client_to_local(Vec2::new(7.5, 3.0), 0.0, 0.0);
    assert_eq!(p, Vec2::new(7.5, 3.0));
}

#[test]
fn pointer_left_of_canvas_is_negative() {
    let p = client_to_local(Vec2::new(5.0, 5.0), 10.0, 0.0);
    assert!(p.x < 0.0);
}

#[test]
fn now_ms_is_positive() {
    assert!(now_ms() > 0.0);
}
