//! Terminal output for results and fatal errors.

use crate::outcome::LookupOutcome;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message); // Red color
}

/// Print the captured output of a failed subprocess verbatim.
pub fn display_command_output(output: &str) {
    println!("{}", output);
}

/// Print the lookup result on stdout.
///
/// The line is plain text so scripts can consume it.
pub fn display_outcome(outcome: &LookupOutcome) {
    println!("{}", outcome);
}
