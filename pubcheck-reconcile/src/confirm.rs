//! Operator confirmation for the publish step.

use std::io::BufRead;

/// Outcome of the confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// The operator answered "yes": run the publish step.
    Proceed,
    /// Any other answer, empty input, or a failed read: save nothing.
    Abort,
}

/// Read one line from `reader` and interpret it as the publish confirmation.
///
/// Only a case-insensitive "yes" (after trimming surrounding whitespace)
/// proceeds. Shorthand like "y" aborts, as does a read error.
pub fn read_confirmation(reader: &mut impl BufRead) -> Confirmation {
    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(_) if line.trim().eq_ignore_ascii_case("yes") => Confirmation::Proceed,
        _ => Confirmation::Abort,
    }
}
