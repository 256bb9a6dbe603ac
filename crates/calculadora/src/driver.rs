//! Unified driver over the calculator surfaces.
//!
//! The TUI app and the browser calculator both reduce to the same thing:
//! feed presses in, read the display out. This trait captures that seam so
//! the behavioural checks are written once and run against every frontend.

use crate::core::Input;

/// Abstract interface over any calculator frontend.
pub trait CalculatorDriver {
    /// Feeds one press into the frontend.
    fn tap(&mut self, input: Input);

    /// The current readout text.
    fn readout(&self) -> String;

    /// Puts the frontend back into its initial state.
    fn reset(&mut self);

    /// Taps a sequence of keypad labels, e.g. `"2+3×4="`. Characters that
    /// are not on the keypad are ignored, matching an input surface that
    /// cannot produce them.
    fn tap_sequence(&mut self, keys: &str) {
        for input in keys.chars().filter_map(Input::from_char) {
            self.tap(input);
        }
    }
}

impl CalculatorDriver for crate::wasm::WasmCalculator {
    fn tap(&mut self, input: Input) {
        self.press(input);
    }

    fn readout(&self) -> String {
        self.display().to_string()
    }

    fn reset(&mut self) {
        Self::reset(self);
    }
}

#[cfg(feature = "tui")]
impl CalculatorDriver for crate::tui::CalculatorApp {
    fn tap(&mut self, input: Input) {
        self.press(input);
    }

    fn readout(&self) -> String {
        self.display().to_string()
    }

    fn reset(&mut self) {
        self.clear();
    }
}

// ===== Shared behavioural checks =====
// Each function encodes one observable property of the accumulator and is
// run against every driver implementation.

/// Digit entries concatenate, with the leading zero suppressed.
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.tap_sequence("408");
    assert_eq!(driver.readout(), "408");

    driver.reset();
    driver.tap_sequence("007");
    assert_eq!(driver.readout(), "7");
}

/// Clear always restores the initial readout, whatever came before.
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    for prefix in ["123", "1+2", "9÷0=", "3.."] {
        driver.reset();
        driver.tap_sequence(prefix);
        driver.tap(Input::Clear);
        assert_eq!(driver.readout(), "0", "after {prefix:?}");
    }
}

/// A second decimal point in a row changes nothing.
pub fn verify_decimal_idempotence<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.tap_sequence("1.");
    let once = driver.readout();
    driver.tap(Input::Decimal);
    assert_eq!(driver.readout(), once);
}

/// Strict left-to-right evaluation: 2 + 3 × 4 = 20, not 14.
pub fn verify_left_to_right<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.tap_sequence("2+3×4=");
    assert_eq!(driver.readout(), "20");
}

/// Division by zero silently yields zero.
pub fn verify_divide_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.tap_sequence("5÷0=");
    assert_eq!(driver.readout(), "0");
}

/// Repeated equals replays `=` against the displayed value, which keeps it.
pub fn verify_repeated_equals<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.tap_sequence("6-2=");
    assert_eq!(driver.readout(), "4");
    driver.tap_sequence("=");
    assert_eq!(driver.readout(), "4");
}

/// A leading decimal point produces `0.`-prefixed entry.
pub fn verify_decimal_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    driver.tap_sequence(".5");
    assert_eq!(driver.readout(), "0.5");
}

/// Runs every check against the given driver.
pub fn run_full_suite<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_clear(driver);
    verify_decimal_idempotence(driver);
    verify_left_to_right(driver);
    verify_divide_by_zero(driver);
    verify_repeated_equals(driver);
    verify_decimal_entry(driver);
}
