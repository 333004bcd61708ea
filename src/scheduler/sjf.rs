use keyed_priority_queue::KeyedPriorityQueue;

use crate::core::state::{Pid, SchedCtx, Ticks};
use crate::scheduler::Scheduler;

/// Rank for Shortest-Job-First: least remaining burst wins, ties broken by
/// earlier arrival, then lower pid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SjfRank {
    remaining: Ticks,
    arrival: Ticks,
    pid: Pid,
}

// KeyedPriorityQueue is a max-heap, so we need to flip-flop the rank's Ord
impl PartialOrd for SjfRank {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SjfRank {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (other.remaining, other.arrival, other.pid).cmp(&(self.remaining, self.arrival, self.pid))
    }
}

#[derive(Debug)]
pub struct SjfScheduler {
    queue: KeyedPriorityQueue<Pid, SjfRank>,
}

impl Scheduler for SjfScheduler {
    fn init() -> Self {
        Self {
            queue: KeyedPriorityQueue::new(),
        }
    }

    fn enqueue(&mut self, ctx: &SchedCtx, pid: Pid) {
        let pcb = ctx.proc(pid);
        self.queue.push(
            pid,
            SjfRank {
                remaining: pcb.remaining,
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
}
