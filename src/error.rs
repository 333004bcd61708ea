use thiserror::Error;

use crate::core::state::{Pid, Ticks};

pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("invalid process {pid}: {reason}")]
    InvalidProcess { pid: Pid, reason: &'static str },

    /// The engine asked a process to burn more burst than it has left.
    /// Slice sizing is the engine's job, so hitting this is a bug.
    #[error("process {pid} overconsumed its burst: requested {amount} with {remaining} remaining")]
    Overconsumption {
        pid: Pid,
        amount: Ticks,
        remaining: Ticks,
    },

    #[error("unknown scheduling algorithm `{0}` (expected one of: fcfs, sjf, pp)")]
    InvalidAlgorithm(String),

    #[error("invalid argument {name}: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },
}
