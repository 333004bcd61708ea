use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use schedsim::sim::workload::{DEFAULT_MAX_BURST, DEFAULT_PROCESS_COUNT};
use schedsim::{
    generate, Algorithm, FcfsScheduler, GenConfig, PpScheduler, ProcessSpec, Scheduler, Sim,
    SjfScheduler, TraceWriter,
};
use tracing::debug;

#[derive(Debug, Parser)]
#[command(about = "Deterministic CPU-scheduling simulator (fcfs, sjf, pp)")]
struct Args {
    /// Scheduling policy: fcfs, sjf, or pp.
    algorithm: Algorithm,

    /// Number of synthetic processes to generate.
    #[arg(default_value_t = DEFAULT_PROCESS_COUNT)]
    num_processes: u32,

    /// Upper bound on generated burst times (at least 1).
    #[arg(default_value_t = DEFAULT_MAX_BURST, value_parser = clap::value_parser!(u64).range(1..))]
    max_burst_time: u64,

    /// Workload RNG seed. The same seed always yields the same run.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only the trace contract.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    debug!(
        algorithm = %args.algorithm,
        processes = args.num_processes,
        seed = args.seed,
        "starting run"
    );
    let workload = generate(&GenConfig {
        count: args.num_processes,
        max_burst: args.max_burst_time,
        seed: args.seed,
    })
    .context("generating workload")?;

    match args.algorithm {
        Algorithm::Fcfs => run::<FcfsScheduler>(workload),
        Algorithm::Sjf => run::<SjfScheduler>(workload),
        Algorithm::Pp => run::<PpScheduler>(workload),
    }
}

fn run<S: Scheduler>(workload: Vec<ProcessSpec>) -> Result<()> {
    let mut sim = Sim::<S>::new(workload).context("invalid workload")?;
    let mut trace = TraceWriter::new(io::stdout().lock());

    while !sim.completed() {
        for event in sim.step().context("simulation step failed")? {
            trace.emit(&event).context("writing trace")?;
        }
    }

    let mut out = trace.into_inner();
    write!(out, "{}", sim.stats())?;
    out.flush()?;
    Ok(())
}
