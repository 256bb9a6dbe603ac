//! The operator alphabet and its evaluation rule.

/// The operators the keypad can produce. `=` is an ordinary member of the
/// set: it flows through the same accumulation path as the arithmetic
/// operators and its evaluation rule simply keeps the right-hand operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
    /// Equals (=) - keeps the right-hand operand
    Equals,
}

impl Operator {
    /// Returns the display symbol, as printed on the keypad.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
            Self::Equals => '=',
        }
    }

    /// Parses a keypad glyph or its ASCII alias.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '×' | '*' | 'x' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            '=' => Some(Self::Equals),
            _ => None,
        }
    }

    /// Evaluates the operator on two operands.
    ///
    /// Total over all inputs: division by zero yields `0` rather than an
    /// error, and `=` returns `b` unchanged. The closed enum means there is
    /// no fallback arm to reach.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    0.0
                } else {
                    a / b
                }
            }
            Self::Equals => b,
        }
    }
}
