use std::collections::VecDeque;

use crate::core::state::{Pid, SchedCtx};
use crate::scheduler::Scheduler;

/// First-Come-First-Served: run processes in admission order. The engine
/// admits arrivals in (arrival_time, pid) order, so the queue order is
/// exactly that.
#[derive(Debug)]
pub struct FcfsScheduler {
    queue: VecDeque<Pid>,
}

impl Scheduler for FcfsScheduler {
    fn init() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    fn enqueue(&mut self, _ctx: &SchedCtx, pid: Pid) {
        self.queue.push_back(pid);
    }

    fn peek_next(&self) -> Option<Pid> {
        self.queue.front().copied()
    }

    fn pick_next(&mut self) -> Option<Pid> {
        self.queue.pop_front()
    }
}
