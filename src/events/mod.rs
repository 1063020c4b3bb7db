pub mod pointer;
pub mod viewport;

pub use pointer::wire_pointer_tracking;
pub use viewport::{wire_debounced_refresh, wire_field_resize, wire_teardown};
