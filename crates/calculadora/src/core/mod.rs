//! The calculator core: a pure accumulator state machine.
//!
//! Nothing in here does I/O or rendering. The frontends translate their
//! events into [`Input`] presses and read the display back out.

mod op;
mod state;

pub use op::Operator;
pub use state::{format_number, Input, State, KEYPAD_ROWS};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports_work_together() {
        let state = State::new()
            .press(Input::Digit(4))
            .press(Input::Operator(Operator::Multiply))
            .press(Input::Digit(5))
            .press(Input::Operator(Operator::Equals));
        assert_eq!(state.display(), "20");
    }
}
