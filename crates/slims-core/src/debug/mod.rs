//! Debug utilities for inspecting raw save data.
//!
//! Requires the `debug-tools` feature.

mod hexdump;

pub use hexdump::format_hexdump;
