//! Calculadora - a four-function accumulator calculator.
//!
//! The core is a small, fully enumerable state machine: a display string,
//! a committed left-hand operand, and a pending operator, advanced one
//! button press at a time with strict left-to-right evaluation and no
//! operator precedence. Two frontends host it - a ratatui terminal UI and
//! a wasm-bindgen browser build - and a static-site exporter packages the
//! browser build for deployment under a configurable path prefix.
//!
//! # Example
//!
//! ```rust
//! use calculadora::prelude::*;
//!
//! let state = "2+3×4="
//!     .chars()
//!     .filter_map(Input::from_char)
//!     .fold(State::new(), State::press);
//!
//! // Left to right, no precedence: (2 + 3) × 4.
//! assert_eq!(state.display(), "20");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod export;

#[cfg(feature = "tui")]
pub mod tui;

/// Browser frontend. The keypad layout and the headless calculator are
/// always available so they can be tested without a browser; the actual
/// wasm-bindgen bindings are behind the `wasm` feature.
pub mod wasm;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::SiteConfig;
    pub use crate::core::{format_number, Input, Operator, State};
    pub use crate::driver::CalculatorDriver;
    pub use crate::wasm::WasmCalculator;

    #[cfg(feature = "tui")]
    pub use crate::tui::CalculatorApp;
}
