//! Browser frontend for the calculator.
//!
//! The keypad definition and the headless [`WasmCalculator`] compile on
//! every target so the button wiring can be tested without a browser; the
//! wasm-bindgen entry points live in `browser` behind the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod calculator;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use calculator::WasmCalculator;
pub use keypad::{KeypadButtonDef, WasmKeypad, DISPLAY_ID};
