//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Monotonic frame time in milliseconds
//! - Seeding the table RNG
//! - The wasm host binding (`web`)

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Milliseconds on a clock that only moves forward within one process
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> u64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static START: OnceLock<Instant> = OnceLock::new();
    let start = START.get_or_init(Instant::now);
    start.elapsed().as_millis() as u64
}

#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// A fresh seed for tables created without one
#[cfg(not(target_arch = "wasm32"))]
pub fn fresh_seed() -> u64 {
    rand::random()
}

#[cfg(target_arch = "wasm32")]
pub fn fresh_seed() -> u64 {
    js_sys::Date::now() as u64
}
