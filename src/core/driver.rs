use tracing::{debug, trace};

use super::{
    event::{ExecutionSlice, SchedEvent},
    observer::Observer,
    state::{Pid, SchedCtx, Ticks},
};
use crate::error::Result;
use crate::scheduler::Scheduler;
use crate::sim::process::ProcessSpec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing on the CPU, but arrivals or ready processes remain.
    Idle,
    Running(Pid),
    /// Every admitted process completed and no arrivals remain.
    Completed,
}

// A contiguous run being accumulated. Stays open across steps until the
// running process completes or is preempted.
struct OpenSlice {
    pid: Pid,
    start: Ticks,
    burst: Ticks,
}

pub struct SchedCore<S: Scheduler> {
    ctx: SchedCtx,
    scheduler: S,
    pending: Vec<ProcessSpec>,
    cursor: usize,
    slice: Option<OpenSlice>,
    observer: Observer,
}

impl<S: Scheduler> SchedCore<S> {
    /// Workload validation is the caller's job; the engine assumes specs are
    /// well-formed and pids unique.
    pub fn new(mut workload: Vec<ProcessSpec>) -> Self {
        workload.sort_by_key(|spec| (spec.arrival_time, spec.pid));
        Self {
            ctx: SchedCtx::new(),
            scheduler: S::init(),
            pending: workload,
            cursor: 0,
            slice: None,
            observer: Observer::new(),
        }
    }

    pub fn ctx(&self) -> &SchedCtx {
        &self.ctx
    }

    pub fn now(&self) -> Ticks {
        self.ctx.now()
    }

    pub fn phase(&self) -> Phase {
        if let Some(pid) = self.ctx.running() {
            Phase::Running(pid)
        } else if self.cursor < self.pending.len() || self.scheduler.peek_next().is_some() {
            Phase::Idle
        } else {
            Phase::Completed
        }
    }

    pub fn is_completed(&self) -> bool {
        self.phase() == Phase::Completed
    }

    /// Advance the simulation by one decision: run the chosen process until
    /// it completes or the next arrival forces a re-check, whichever comes
    /// first. Returns the events produced, in order. An empty return with
    /// `is_completed()` true means the simulation is over.
    pub fn step(&mut self) -> Result<Vec<SchedEvent>> {
        let mut events = Vec::new();
        self.admit_due(&mut events);

        // Put someone on the CPU:
        // 1. The process already running (mid-burst from an earlier step)
        // 2. The policy's pick from the ready queue
        // 3. Jump the clock to the next arrival and retry
        let pid = loop {
            if let Some(pid) = self.ctx.running() {
                break pid;
            }
            if let Some(pid) = self.scheduler.pick_next() {
                let at = self.ctx.now();
                self.ctx.set_running(pid);
                events.push(SchedEvent::Started { pid, at });
                debug!(pid, at, "dispatched");
                break pid;
            }
            match self.next_arrival() {
                Some(at) => {
                    let from = self.ctx.now();
                    debug_assert!(at > from, "due arrival was not admitted");
                    events.push(SchedEvent::Idle { from, to: at });
                    trace!(from, to = at, "cpu idle");
                    self.ctx.advance_to(at);
                    self.admit_due(&mut events);
                }
                None => {
                    self.observer.observe(&self.ctx);
                    return Ok(events);
                }
            }
        };

        // Run up to the next arrival boundary so newly admitted processes
        // get a preemption check. Completion wins a tie with an arrival;
        // the arrival is admitted on the next step.
        let now = self.ctx.now();
        let remaining = self.ctx.proc(pid).remaining;
        debug_assert!(remaining > 0, "process {pid} dispatched with no work left");
        let horizon = match self.next_arrival() {
            Some(at) if at > now => remaining.min(at - now),
            _ => remaining,
        };

        self.ctx.proc_mut(pid).consume(horizon)?;
        self.ctx.advance_by(horizon);
        let slice = self.slice.get_or_insert(OpenSlice {
            pid,
            start: now,
            burst: 0,
        });
        debug_assert_eq!(slice.pid, pid, "open slice belongs to another process");
        slice.burst += horizon;

        if self.ctx.proc(pid).remaining == 0 {
            let at = self.ctx.now();
            events.push(SchedEvent::Slice(self.close_slice()));
            events.push(SchedEvent::Completed { pid, at });
            self.ctx.mark_completed(pid);
            debug!(pid, at, "completed");
        } else {
            self.admit_due(&mut events);
            if let Some(top) = self.scheduler.peek_next() {
                if self.scheduler.preempts(&self.ctx, top, pid) {
                    let at = self.ctx.now();
                    events.push(SchedEvent::Slice(self.close_slice()));
                    events.push(SchedEvent::Preempted { pid, by: top, at });
                    self.ctx.mark_ready(pid);
                    self.scheduler.enqueue(&self.ctx, pid);
                    debug!(pid, by = top, at, "preempted");
                }
            }
        }

        self.observer.observe(&self.ctx);
        Ok(events)
    }

    // Admit every pending process whose arrival time has come. The run
    // horizon never crosses an arrival, so admission always happens at
    // exactly the arrival time.
    fn admit_due(&mut self, events: &mut Vec<SchedEvent>) {
        let now = self.ctx.now();
        while let Some(spec) = self.pending.get(self.cursor) {
            if spec.arrival_time > now {
                break;
            }
            let spec = *spec;
            self.cursor += 1;
            self.ctx.admit(&spec);
            self.scheduler.enqueue(&self.ctx, spec.pid);
            events.push(SchedEvent::Admitted {
                pid: spec.pid,
                at: spec.arrival_time,
            });
            debug!(pid = spec.pid, at = spec.arrival_time, "admitted");
        }
    }

    fn next_arrival(&self) -> Option<Ticks> {
        self.pending.get(self.cursor).map(|spec| spec.arrival_time)
    }

    fn close_slice(&mut self) -> ExecutionSlice {
        let slice = self.slice.take().expect("no open slice to close");
        ExecutionSlice {
            pid: slice.pid,
            start_time: slice.start,
            burst: slice.burst,
        }
    }
}
