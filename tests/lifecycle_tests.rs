// Host-side tests for page lifecycle decisions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod lifecycle {
    include!("../src/lifecycle.rs");
}

use lifecycle::*;

#[test]
fn cached_page_keeps_its_frame_loop() {
    // Navigating back restores a bfcache page without re-running init.
    assert_eq!(page_hide_action(true, true), PageHideAction::Keep);
}

#[test]
fn unloading_page_stops_a_running_loop() {
    assert_eq!(page_hide_action(false, true), PageHideAction::Stop);
}

#[test]
fn stopped_loop_is_left_alone() {
    assert_eq!(page_hide_action(false, false), PageHideAction::Keep);
    assert_eq!(page_hide_action(true, false), PageHideAction::Keep);
}
