pub mod fcfs;
pub mod pp;
pub mod sjf;

use std::fmt;
use std::str::FromStr;

use crate::core::state::{Pid, SchedCtx};
use crate::error::SimError;
pub use fcfs::FcfsScheduler;
pub use pp::PpScheduler;
pub use sjf::SjfScheduler;

/// A scheduling policy. The engine owns the clock, the process table, and the
/// CPU; the policy only decides who runs next. `enqueue` is called once per
/// admission and once per preemption, `pick_next` whenever the CPU is free.
pub trait Scheduler {
    fn init() -> Self;

    fn enqueue(&mut self, ctx: &SchedCtx, pid: Pid);

    /// The process `pick_next` would return, without removing it.
    fn peek_next(&self) -> Option<Pid>;

    fn pick_next(&mut self) -> Option<Pid>;

    /// Whether `candidate` should kick `running` off the CPU right now.
    /// Non-preemptive policies keep the default.
    fn preempts(&self, _ctx: &SchedCtx, _candidate: Pid, _running: Pid) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Fcfs,
    Sjf,
    Pp,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::Sjf => "sjf",
            Algorithm::Pp => "pp",
        }
    }
}

impl FromStr for Algorithm {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Algorithm::Fcfs),
            "sjf" => Ok(Algorithm::Sjf),
            "pp" => Ok(Algorithm::Pp),
            _ => Err(SimError::InvalidAlgorithm(s.to_owned())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_parses_case_insensitively() {
        assert_eq!("fcfs".parse::<Algorithm>().unwrap(), Algorithm::Fcfs);
        assert_eq!("SJF".parse::<Algorithm>().unwrap(), Algorithm::Sjf);
        assert_eq!("Pp".parse::<Algorithm>().unwrap(), Algorithm::Pp);
    }

    #[test]
    fn algorithm_rejects_unknown_names() {
        let err = "rr".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, SimError::InvalidAlgorithm("rr".to_owned()));
    }
}
