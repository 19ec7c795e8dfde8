//! Error types for the tape machine.
//!
//! All execution errors are fatal for the current run: the engine aborts and
//! reports the condition to the caller, with no retries and no partial output.

use std::fmt;


/// Errors raised while configuring or running the virtual machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {

    /// The tape must hold at least one cell.
    InvalidConfiguration { tape_size: usize },

    /// A `]` was reached with no open `[` on the loop stack, or a forward
    /// scan for a loop close ran off the end of the program.
    UnbalancedLoop { index: usize },

}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionError::InvalidConfiguration { tape_size } => {
                write!(f, "Invalid tape size: {} (must be at least 1 cell)", tape_size)
            }
            ExecutionError::UnbalancedLoop { index } => {
                write!(f, "Unbalanced loop at program index {}", index)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
