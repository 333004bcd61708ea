use rand::prelude::*;

use crate::core::state::Ticks;
use crate::error::{Result, SimError};
use crate::sim::process::ProcessSpec;

pub const DEFAULT_PROCESS_COUNT: u32 = 5;
pub const DEFAULT_MAX_BURST: Ticks = 5;

// Arrivals are staggered across a small window so every policy sees some
// processes arrive while another runs.
const MAX_ARRIVAL: Ticks = 9;
const PRIORITY_LEVELS: i32 = 10;

#[derive(Debug, Clone, Copy)]
pub struct GenConfig {
    pub count: u32,
    pub max_burst: Ticks,
    pub seed: u64,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_PROCESS_COUNT,
            max_burst: DEFAULT_MAX_BURST,
            seed: 0,
        }
    }
}

/// Generate a random workload of `count` processes with pids `1..=count`.
/// The same config always yields the same workload.
pub fn generate(config: &GenConfig) -> Result<Vec<ProcessSpec>> {
    if config.max_burst == 0 {
        return Err(SimError::InvalidArgument {
            name: "max_burst_time",
            reason: "must be at least 1",
        });
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut workload = Vec::with_capacity(config.count as usize);
    for pid in 1..=config.count {
        let arrival_time = rng.random_range(0..=MAX_ARRIVAL);
        let burst_time = rng.random_range(1..=config.max_burst);
        let priority = rng.random_range(0..PRIORITY_LEVELS);
        workload.push(ProcessSpec::new(pid, arrival_time, burst_time).with_priority(priority));
    }
    Ok(workload)
}
