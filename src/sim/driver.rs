use super::process::{validate_workload, ProcessSpec};
use super::stats::RunStats;
use crate::{
    core::{
        driver::{Phase, SchedCore},
        event::{ExecutionSlice, SchedEvent},
        state::SchedCtx,
    },
    error::Result,
    scheduler::Scheduler,
};

/// One simulation run: a freshly constructed engine plus the slices it has
/// produced so far. Construct a new `Sim` per run; nothing is reusable.
pub struct Sim<S: Scheduler> {
    core: SchedCore<S>,
    slices: Vec<ExecutionSlice>,
}

impl<S: Scheduler> Sim<S> {
    pub fn new(workload: Vec<ProcessSpec>) -> Result<Self> {
        validate_workload(&workload)?;
        Ok(Self {
            core: SchedCore::new(workload),
            slices: Vec::new(),
        })
    }

    /// One engine decision. Closed slices are collected as a side effect.
    pub fn step(&mut self) -> Result<Vec<SchedEvent>> {
        let events = self.core.step()?;
        for event in &events {
            if let SchedEvent::Slice(slice) = event {
                self.slices.push(*slice);
            }
        }
        Ok(events)
    }

    /// Drive the simulation to completion, discarding events.
    pub fn run(&mut self) -> Result<()> {
        self.run_with(|_| {})
    }

    /// Drive the simulation to completion, handing every event to `f` in
    /// emission order.
    pub fn run_with(&mut self, mut f: impl FnMut(&SchedEvent)) -> Result<()> {
        while !self.completed() {
            for event in self.step()? {
                f(&event);
            }
        }
        Ok(())
    }

    pub fn completed(&self) -> bool {
        self.core.is_completed()
    }

    pub fn phase(&self) -> Phase {
        self.core.phase()
    }

    pub fn ctx(&self) -> &SchedCtx {
        self.core.ctx()
    }

    pub fn slices(&self) -> &[ExecutionSlice] {
        &self.slices
    }

    pub fn stats(&self) -> RunStats {
        RunStats::from_ctx(self.core.ctx())
    }
}
