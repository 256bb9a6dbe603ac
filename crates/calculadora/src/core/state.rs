//! The accumulator state machine.
//!
//! One running accumulator driven by button presses, no expression tree and
//! no operator precedence: each operator press collapses the pending
//! computation against the operand on screen, strictly left to right.
//!
//! The machine is a tagged enum rather than a bundle of optional fields, so
//! an operator can never be recorded without the accumulator that goes with
//! it, and every transition is a pure function `(State, Input) -> State`.

use super::op::Operator;

/// One press on the input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A digit key, 0 through 9.
    Digit(u8),
    /// The decimal point key.
    Decimal,
    /// An operator key (`+ - × ÷ =`).
    Operator(Operator),
    /// The clear key.
    Clear,
}

impl Input {
    /// Maps a keypad label to an input, if the character is one.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if let Some(d) = c.to_digit(10) {
            return Some(Self::Digit(d as u8));
        }
        match c {
            '.' => Some(Self::Decimal),
            'C' | 'c' => Some(Self::Clear),
            _ => Operator::from_char(c).map(Self::Operator),
        }
    }

    /// The label printed on the key for this input.
    #[must_use]
    pub fn legend(self) -> char {
        match self {
            Self::Digit(d) => digit_char(d),
            Self::Decimal => '.',
            Self::Clear => 'C',
            Self::Operator(op) => op.symbol(),
        }
    }
}

/// The fixed trigger set, laid out the way the surfaces present it: four
/// columns with the wide zero on its own row.
pub const KEYPAD_ROWS: &[&[Input]] = &[
    &[
        Input::Clear,
        Input::Operator(Operator::Divide),
        Input::Operator(Operator::Multiply),
        Input::Operator(Operator::Subtract),
    ],
    &[
        Input::Digit(7),
        Input::Digit(8),
        Input::Digit(9),
        Input::Operator(Operator::Add),
    ],
    &[
        Input::Digit(4),
        Input::Digit(5),
        Input::Digit(6),
        Input::Operator(Operator::Equals),
    ],
    &[
        Input::Digit(1),
        Input::Digit(2),
        Input::Digit(3),
        Input::Decimal,
    ],
    &[Input::Digit(0)],
];

/// The calculator state. Each variant carries only the fields that are
/// meaningful in it.
#[derive(Debug, Clone, PartialEq)]
pub enum State {
    /// No operator chosen since the last clear; the display is the operand
    /// being edited.
    Idle {
        /// Current readout text.
        display: String,
    },
    /// An operator was just chosen; the next digit or decimal point starts
    /// a fresh operand. The display still shows the text that was on screen
    /// when the operator was pressed.
    OperatorPending {
        /// Committed left-hand operand.
        acc: f64,
        /// The pending operator.
        op: Operator,
        /// Current readout text.
        display: String,
    },
    /// Editing the right-hand operand of a pending operation.
    Accumulating {
        /// Committed left-hand operand.
        acc: f64,
        /// The pending operator.
        op: Operator,
        /// Current readout text.
        display: String,
    },
}

impl Default for State {
    fn default() -> Self {
        Self::Idle {
            display: "0".to_string(),
        }
    }
}

impl State {
    /// Creates the initial state: `"0"` on the display, nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current readout text.
    #[must_use]
    pub fn display(&self) -> &str {
        match self {
            Self::Idle { display }
            | Self::OperatorPending { display, .. }
            | Self::Accumulating { display, .. } => display,
        }
    }

    /// Advances the machine by one press. Total: every input is accepted in
    /// every state.
    #[must_use]
    pub fn press(self, input: Input) -> Self {
        match input {
            Input::Clear => Self::default(),
            Input::Digit(d) => self.press_digit(d),
            Input::Decimal => self.press_decimal(),
            Input::Operator(op) => self.press_operator(op),
        }
    }

    fn press_digit(self, d: u8) -> Self {
        match self {
            Self::Idle { display } => Self::Idle {
                display: push_digit(display, d),
            },
            // Fresh operand: the digit replaces the display.
            Self::OperatorPending { acc, op, .. } => Self::Accumulating {
                acc,
                op,
                display: digit_char(d).to_string(),
            },
            Self::Accumulating { acc, op, display } => Self::Accumulating {
                acc,
                op,
                display: push_digit(display, d),
            },
        }
    }

    fn press_decimal(self) -> Self {
        match self {
            Self::Idle { display } => Self::Idle {
                display: push_decimal(display),
            },
            Self::OperatorPending { acc, op, .. } => Self::Accumulating {
                acc,
                op,
                display: "0.".to_string(),
            },
            Self::Accumulating { acc, op, display } => Self::Accumulating {
                acc,
                op,
                display: push_decimal(display),
            },
        }
    }

    fn press_operator(self, next: Operator) -> Self {
        match self {
            // First operand of the expression: capture it, record the
            // operator, leave the display untouched.
            Self::Idle { display } => {
                let acc = display.parse().unwrap_or(0.0);
                Self::OperatorPending {
                    acc,
                    op: next,
                    display,
                }
            }
            // A pending computation exists: collapse it against whatever is
            // on screen, then record the new operator.
            Self::OperatorPending { acc, op, display }
            | Self::Accumulating { acc, op, display } => {
                let operand = display.parse().unwrap_or(0.0);
                let value = op.apply(acc, operand);
                Self::OperatorPending {
                    acc: value,
                    op: next,
                    display: format_number(value),
                }
            }
        }
    }
}

/// Appends a digit to the readout, suppressing the leading `"0"`.
fn push_digit(mut display: String, d: u8) -> String {
    if display == "0" {
        digit_char(d).to_string()
    } else {
        display.push(digit_char(d));
        display
    }
}

/// Appends a decimal point unless the readout already has one.
fn push_decimal(mut display: String) -> String {
    if !display.contains('.') {
        display.push('.');
    }
    display
}

fn digit_char(d: u8) -> char {
    char::from_digit(u32::from(d), 10).unwrap_or('0')
}

/// Formats a computed value the way the display shows it: shortest text
/// that round-trips, no fixed precision, artifacts of binary floating point
/// left verbatim. Negative zero loses its sign, so the readout shows `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Runs a sequence of keypad labels through a fresh machine.
    fn run(keys: &str) -> State {
        keys.chars().fold(State::new(), |state, c| {
            state.press(Input::from_char(c).unwrap_or_else(|| panic!("bad key {c:?}")))
        })
    }

    // ===== Input mapping =====

    #[test]
    fn test_input_from_char_digits() {
        for (i, c) in ('0'..='9').enumerate() {
            assert_eq!(Input::from_char(c), Some(Input::Digit(i as u8)));
        }
    }

    #[test]
    fn test_legend_roundtrip() {
        for row in KEYPAD_ROWS {
            for &input in *row {
                assert_eq!(Input::from_char(input.legend()), Some(input));
            }
        }
    }

    #[test]
    fn test_keypad_rows_cover_alphabet() {
        let all: Vec<Input> = KEYPAD_ROWS.iter().flat_map(|r| r.iter().copied()).collect();
        assert_eq!(all.len(), 17);
        for d in 0..=9 {
            assert!(all.contains(&Input::Digit(d)), "digit {d}");
        }
        assert!(all.contains(&Input::Decimal));
        assert!(all.contains(&Input::Clear));
    }

    #[test]
    fn test_input_from_char_special() {
        assert_eq!(Input::from_char('.'), Some(Input::Decimal));
        assert_eq!(Input::from_char('C'), Some(Input::Clear));
        assert_eq!(Input::from_char('c'), Some(Input::Clear));
        assert_eq!(
            Input::from_char('÷'),
            Some(Input::Operator(Operator::Divide))
        );
        assert_eq!(Input::from_char('?'), None);
    }

    // ===== Initial state =====

    #[test]
    fn test_initial_state() {
        let state = State::new();
        assert_eq!(state.display(), "0");
        assert!(matches!(state, State::Idle { .. }));
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(State::default(), State::new());
    }

    // ===== Digit entry =====

    #[test]
    fn test_digit_replaces_leading_zero() {
        assert_eq!(run("7").display(), "7");
    }

    #[test]
    fn test_digits_concatenate() {
        assert_eq!(run("123").display(), "123");
        assert_eq!(run("90210").display(), "90210");
    }

    #[test]
    fn test_zero_stays_zero() {
        assert_eq!(run("000").display(), "0");
    }

    #[test]
    fn test_zero_then_digit() {
        assert_eq!(run("007").display(), "7");
    }

    #[test]
    fn test_unbounded_digit_growth() {
        // No length cap on the readout.
        let long: String = "9".repeat(40);
        assert_eq!(run(&long).display(), long);
    }

    // ===== Decimal point =====

    #[test]
    fn test_decimal_on_zero() {
        assert_eq!(run(".").display(), "0.");
    }

    #[test]
    fn test_decimal_entry() {
        assert_eq!(run(".5").display(), "0.5");
        assert_eq!(run("3.25").display(), "3.25");
    }

    #[test]
    fn test_second_decimal_is_noop() {
        let once = run("1.5");
        let twice = run("1.5").press(Input::Decimal);
        assert_eq!(once.display(), twice.display());
        assert_eq!(run("1..5").display(), "1.5");
    }

    #[test]
    fn test_decimal_after_operator_starts_fresh_operand() {
        assert_eq!(run("8+.").display(), "0.");
        assert_eq!(run("8+.5").display(), "0.5");
    }

    // ===== Clear =====

    #[test]
    fn test_clear_resets_from_idle() {
        assert_eq!(run("123C"), State::new());
    }

    #[test]
    fn test_clear_resets_pending_operator() {
        assert_eq!(run("12+C"), State::new());
    }

    #[test]
    fn test_clear_resets_mid_accumulation() {
        assert_eq!(run("12+34C"), State::new());
    }

    // ===== Operator sequencing =====

    #[test]
    fn test_operator_captures_first_operand() {
        let state = run("12+");
        assert_eq!(state.display(), "12");
        assert!(
            matches!(state, State::OperatorPending { acc, op: Operator::Add, .. } if acc == 12.0)
        );
    }

    #[test]
    fn test_digit_after_operator_starts_fresh_operand() {
        assert_eq!(run("12+3").display(), "3");
    }

    #[test]
    fn test_simple_addition() {
        assert_eq!(run("2+3=").display(), "5");
    }

    #[test]
    fn test_simple_subtraction() {
        assert_eq!(run("10-4=").display(), "6");
    }

    #[test]
    fn test_simple_multiplication() {
        assert_eq!(run("6×7=").display(), "42");
    }

    #[test]
    fn test_simple_division() {
        assert_eq!(run("20÷4=").display(), "5");
        assert_eq!(run("7÷2=").display(), "3.5");
    }

    #[test]
    fn test_left_to_right_no_precedence() {
        // (2 + 3) × 4 = 20, not 2 + 12.
        assert_eq!(run("2+3×4=").display(), "20");
    }

    #[test]
    fn test_divide_by_zero_displays_zero() {
        assert_eq!(run("5÷0=").display(), "0");
    }

    #[test]
    fn test_repeated_equals_keeps_result() {
        // `=` is stored as the pending operator, so the second press
        // replays apply(4, 4, '=') and the display stays 4.
        assert_eq!(run("6-2=").display(), "4");
        assert_eq!(run("6-2==").display(), "4");
        assert_eq!(run("6-2===").display(), "4");
    }

    #[test]
    fn test_double_operator_collapses_against_display() {
        // Second `+` with no new operand: the on-screen value is reused as
        // the right-hand operand, so 2 + 2 = 4.
        assert_eq!(run("2++").display(), "4");
    }

    #[test]
    fn test_chaining_after_equals() {
        // Result of 6-2 becomes the left operand of the next operation.
        assert_eq!(run("6-2=+1=").display(), "5");
    }

    #[test]
    fn test_decimal_arithmetic_artifacts_are_verbatim() {
        // 0.1 + 0.2 prints the full binary-float artifact, unrounded.
        assert_eq!(run("0.1+0.2=").display(), "0.30000000000000004");
    }

    #[test]
    fn test_negative_result() {
        assert_eq!(run("3-5=").display(), "-2");
    }

    #[test]
    fn test_negative_zero_loses_sign() {
        // -2 × 0 is -0.0 in f64; the readout drops the sign.
        assert_eq!(run("3-5=×0=").display(), "0");
        assert_eq!(run("0-0=").display(), "0");
    }

    // ===== Invariants =====

    #[test]
    fn test_display_never_empty() {
        for keys in ["", "C", ".", "0", "1+", "1+2=", "5÷0=C"] {
            assert!(!run(keys).display().is_empty(), "keys {keys:?}");
        }
    }

    #[test]
    fn test_display_parses_as_f64() {
        for keys in ["", "00.", "1.25", "9+9×9=", "5÷0=", "..1"] {
            let state = run(keys);
            assert!(
                state.display().parse::<f64>().is_ok(),
                "display {:?} after {keys:?}",
                state.display()
            );
        }
    }

    // ===== Formatting =====

    #[test]
    fn test_format_number_integer() {
        assert_eq!(format_number(20.0), "20");
        assert_eq!(format_number(-5.0), "-5");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_number_decimal() {
        assert_eq!(format_number(3.5), "3.5");
        assert_eq!(format_number(0.125), "0.125");
    }
}
