use rustc_hash::FxHashSet;

use crate::core::state::{Pid, Priority, Ticks};
use crate::error::{Result, SimError};

/// Static description of one process, fixed before the simulation starts.
/// `priority` only matters to priority-aware policies; everyone else
/// carries it unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSpec {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub priority: Priority,
}

impl ProcessSpec {
    pub fn new(pid: Pid, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.pid == 0 {
            return Err(SimError::InvalidProcess {
                pid: self.pid,
                reason: "pid must be nonzero",
            });
        }
        if self.burst_time == 0 {
            return Err(SimError::InvalidProcess {
                pid: self.pid,
                reason: "burst time must be nonzero",
            });
        }
        Ok(())
    }
}

/// Check every spec and reject duplicate pids.
pub fn validate_workload(workload: &[ProcessSpec]) -> Result<()> {
    let mut seen = FxHashSet::default();
    for spec in workload {
        spec.validate()?;
        if !seen.insert(spec.pid) {
            return Err(SimError::InvalidProcess {
                pid: spec.pid,
                reason: "duplicate pid",
            });
        }
    }
    Ok(())
}
