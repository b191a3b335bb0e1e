//! Browser bindings for clicktrail.
//!
//! Everything here targets `wasm32-unknown-unknown`; native builds compile to
//! an empty library and the behavior lives in `clicktrail-common`.

#[cfg(target_arch = "wasm32")]
pub mod banner;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod logging;
#[cfg(target_arch = "wasm32")]
pub mod ready;
#[cfg(target_arch = "wasm32")]
pub mod tracker;
#[cfg(target_arch = "wasm32")]
pub mod transport;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
