//! Answers from the people at the table.

extern crate alloc;

use alloc::string::String;

/// Source of player decisions.
///
/// Implementations own parsing and validation of raw input; the engine
/// trusts the returned values. Every call blocks until an answer is ready.
pub trait InputProvider {
    /// Asks a yes/no question.
    fn ask_yes_no(&mut self, prompt: &str) -> bool;

    /// Asks for a whole number.
    fn ask_number(&mut self, prompt: &str) -> i64;

    /// Asks for free text.
    fn ask_string(&mut self, prompt: &str) -> String;
}

impl<I: InputProvider + ?Sized> InputProvider for &mut I {
    fn ask_yes_no(&mut self, prompt: &str) -> bool {
        (**self).ask_yes_no(prompt)
    }

    fn ask_number(&mut self, prompt: &str) -> i64 {
        (**self).ask_number(prompt)
    }

    fn ask_string(&mut self, prompt: &str) -> String {
        (**self).ask_string(prompt)
    }
}
