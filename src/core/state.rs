use rustc_hash::FxHashMap;

use crate::core::clock::SimClock;
use crate::error::{Result, SimError};
use crate::sim::process::ProcessSpec;

pub type Pid = u32;
pub type Ticks = u64;

// Lower value = higher priority, matching classic Unix niceness direction.
pub type Priority = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcState {
    Ready,
    Running,
    Completed,
}

/// Runtime record for one admitted process. The spec fields are fixed at
/// admission; only `remaining`, `state`, and the bookkeeping timestamps
/// change while the simulation runs.
#[derive(Debug, Clone)]
pub struct Pcb {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub priority: Priority,
    pub remaining: Ticks,
    pub state: ProcState,
    pub first_run_time: Option<Ticks>,
    pub completion_time: Option<Ticks>,
}

impl Pcb {
    fn from_spec(spec: &ProcessSpec) -> Self {
        Self {
            pid: spec.pid,
            arrival_time: spec.arrival_time,
            burst_time: spec.burst_time,
            priority: spec.priority,
            remaining: spec.burst_time,
            state: ProcState::Ready,
            first_run_time: None,
            completion_time: None,
        }
    }

    /// Burn `amount` ticks of the remaining burst. Asking for more than is
    /// left means the engine mis-sized a slice, which is a fatal bug.
    pub fn consume(&mut self, amount: Ticks) -> Result<()> {
        if amount > self.remaining {
            return Err(SimError::Overconsumption {
                pid: self.pid,
                amount,
                remaining: self.remaining,
            });
        }
        self.remaining -= amount;
        Ok(())
    }

    pub fn is_completed(&self) -> bool {
        self.state == ProcState::Completed
    }

    /// Completion - arrival. Only meaningful once the process completed.
    pub fn turnaround_time(&self) -> Option<Ticks> {
        self.completion_time.map(|t| t - self.arrival_time)
    }

    /// Turnaround minus burst: time spent ready but not running.
    pub fn waiting_time(&self) -> Option<Ticks> {
        self.turnaround_time().map(|t| t - self.burst_time)
    }

    /// First dispatch - arrival.
    pub fn response_time(&self) -> Option<Ticks> {
        self.first_run_time.map(|t| t - self.arrival_time)
    }
}

/// All state owned by one engine instance: the clock, the table of admitted
/// processes, and the (single) CPU slot. Policies get a shared reference to
/// read process fields; only the engine mutates anything here.
#[derive(Debug, Default)]
pub struct SchedCtx {
    clock: SimClock,
    procs: FxHashMap<Pid, Pcb>,
    running: Option<Pid>,
}

impl SchedCtx {
    pub fn new() -> Self {
        Self {
            clock: SimClock::new(),
            procs: FxHashMap::default(),
            running: None,
        }
    }

    pub fn now(&self) -> Ticks {
        self.clock.now()
    }

    pub(crate) fn advance_to(&mut self, t: Ticks) {
        self.clock.advance_to(t);
    }

    pub(crate) fn advance_by(&mut self, dt: Ticks) {
        self.clock.advance_by(dt);
    }

    /// Admit an arrived process into the table in `Ready` state.
    pub(crate) fn admit(&mut self, spec: &ProcessSpec) {
        debug_assert!(
            spec.arrival_time <= self.now(),
            "process {} admitted before its arrival time",
            spec.pid
        );
        let prev = self.procs.insert(spec.pid, Pcb::from_spec(spec));
        assert!(prev.is_none(), "process {} admitted twice", spec.pid);
    }

    pub fn proc(&self, pid: Pid) -> &Pcb {
        self.procs.get(&pid).expect("unknown pid in process table")
    }

    pub(crate) fn proc_mut(&mut self, pid: Pid) -> &mut Pcb {
        self.procs.get_mut(&pid).expect("unknown pid in process table")
    }

    /// All admitted processes, in no particular order.
    pub fn procs(&self) -> impl Iterator<Item = &Pcb> {
        self.procs.values()
    }

    pub fn running(&self) -> Option<Pid> {
        self.running
    }

    pub(crate) fn set_running(&mut self, pid: Pid) {
        debug_assert!(
            self.running.is_none(),
            "CPU already running {:?} when dispatching {pid}",
            self.running
        );
        let now = self.now();
        let pcb = self.proc_mut(pid);
        debug_assert_eq!(
            pcb.state,
            ProcState::Ready,
            "process {pid} must be Ready when dispatched"
        );
        pcb.state = ProcState::Running;
        pcb.first_run_time.get_or_insert(now);
        self.running = Some(pid);
    }

    /// Preemption path: the running process goes back to `Ready` with its
    /// remaining burst preserved.
    pub(crate) fn mark_ready(&mut self, pid: Pid) {
        debug_assert_eq!(self.running, Some(pid), "preempting a process that is not running");
        let pcb = self.proc_mut(pid);
        debug_assert!(pcb.remaining > 0, "process {pid} has no work left to resume");
        pcb.state = ProcState::Ready;
        self.running = None;
    }

    pub(crate) fn mark_completed(&mut self, pid: Pid) {
        debug_assert_eq!(self.running, Some(pid), "completing a process that is not running");
        let now = self.now();
        let pcb = self.proc_mut(pid);
        debug_assert_eq!(pcb.remaining, 0, "process {pid} completed with burst left");
        pcb.state = ProcState::Completed;
        pcb.completion_time = Some(now);
        self.running = None;
    }
}
