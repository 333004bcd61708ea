use keyed_priority_queue::KeyedPriorityQueue;

use crate::core::state::{Pid, Priority, SchedCtx, Ticks};
use crate::scheduler::Scheduler;

/// Rank for Preemptive-Priority: lowest priority value wins, ties broken by
/// earlier arrival, then lower pid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrioRank {
    priority: Priority,
    arrival: Ticks,
    pid: Pid,
}

// KeyedPriorityQueue is a max-heap, so we need to flip-flop the rank's Ord
impl PartialOrd for PrioRank {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PrioRank {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (other.priority, other.arrival, other.pid).cmp(&(self.priority, self.arrival, self.pid))
    }
}

#[derive(Debug)]
pub struct PpScheduler {
    queue: KeyedPriorityQueue<Pid, PrioRank>,
}

impl Scheduler for PpScheduler {
    fn init() -> Self {
        Self {
            queue: KeyedPriorityQueue::new(),
        }
    }

    fn enqueue(&mut self, ctx: &SchedCtx, pid: Pid) {
        let pcb = ctx.proc(pid);
        self.queue.push(
            pid,
            PrioRank {
                priority: pcb.priority,
                arrival: pcb.arrival_time,
                pid,
            },
        );
    }

    fn peek_next(&self) -> Option<Pid> {
        self.queue.peek().map(|(pid, _)| *pid)
    }

    fn pick_next(&mut self) -> Option<Pid> {
        self.queue.pop().map(|(pid, _)| pid)
    }

    // Strictly better only. An equal-priority arrival waits its turn.
    fn preempts(&self, ctx: &SchedCtx, candidate: Pid, running: Pid) -> bool {
        ctx.proc(candidate).priority < ctx.proc(running).priority
    }
}
