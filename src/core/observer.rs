use super::state::{ProcState, SchedCtx};

/// Cross-checks the process table after every engine step. All checks are
/// `debug_assert`s: free in release builds, fatal under `cargo test`.
#[derive(Debug)]
pub struct Observer {
    step: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    pub fn observe(&mut self, ctx: &SchedCtx) {
        self.step += 1;
        let step = self.step;

        if let Some(pid) = ctx.running() {
            let pcb = ctx.proc(pid);
            debug_assert_eq!(
                pcb.state,
                ProcState::Running,
                "step {step}: running process {pid} must be in Running state"
            );
        }

        for pcb in ctx.procs() {
            let pid = pcb.pid;
            debug_assert!(
                pcb.remaining <= pcb.burst_time,
                "step {step}: process {pid} remaining exceeds its burst"
            );
            debug_assert!(
                pcb.arrival_time <= ctx.now(),
                "step {step}: process {pid} admitted before arrival"
            );
            if pcb.state == ProcState::Running {
                debug_assert_eq!(
                    ctx.running(),
                    Some(pid),
                    "step {step}: process {pid} marked Running but not on the CPU"
                );
            }
            if pcb.state == ProcState::Completed {
                debug_assert_eq!(
                    pcb.remaining, 0,
                    "step {step}: completed process {pid} has burst left"
                );
                debug_assert!(
                    pcb.completion_time.is_some(),
                    "step {step}: completed process {pid} missing completion time"
                );
            } else {
                debug_assert!(
                    pcb.completion_time.is_none(),
                    "step {step}: process {pid} has a completion time but is not Completed"
                );
            }
            if let (Some(first_run), Some(completion)) = (pcb.first_run_time, pcb.completion_time) {
                debug_assert!(
                    first_run < completion,
                    "step {step}: process {pid} completed before it first ran"
                );
            }
        }
    }
}
