//! Console output helpers.
//!
//! Status messages go to stdout wrapped in bracketed blocks:
//!
//! ```text
//! ------------------------------------
//! Installed successfully.
//! ------------------------------------
//! ```
//!
//! Human-readable only; there is no machine-parseable output mode.

const FENCE: &str = "------------------------------------";

/// Print each line wrapped in a fenced block.
pub fn wrap_outputs<S: AsRef<str>>(outputs: &[S]) {
    println!("{}", FENCE);
    for output in outputs {
        println!("{}", output.as_ref());
    }
    println!("{}", FENCE);
}

/// Blank line between blocks.
pub fn spacer() {
    println!();
}
