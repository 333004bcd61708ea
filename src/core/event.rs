use crate::core::state::{Pid, Ticks};

/// One maximal contiguous run of a process on the CPU. Emitted when the run
/// ends (completion or preemption), so `burst` is the ticks actually consumed
/// in this run, not the process's total burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionSlice {
    pub pid: Pid,
    pub start_time: Ticks,
    pub burst: Ticks,
}

/// Everything observable the engine does, in the order it does it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedEvent {
    /// A process reached its arrival time and entered the ready queue.
    Admitted { pid: Pid, at: Ticks },
    /// A process was dispatched onto the CPU. Fires for first dispatch and
    /// for every resume after a preemption.
    Started { pid: Pid, at: Ticks },
    Slice(ExecutionSlice),
    /// The running process was kicked off the CPU by `by`.
    Preempted { pid: Pid, by: Pid, at: Ticks },
    Completed { pid: Pid, at: Ticks },
    /// The CPU had nothing runnable from `from` until `to`.
    Idle { from: Ticks, to: Ticks },
}
