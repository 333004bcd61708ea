//! Discrete-event CPU-scheduling simulator: FCFS, SJF, and
//! Preemptive-Priority policies over a single CPU, with a deterministic
//! line-oriented trace for external consumers and a structured event
//! stream for in-process ones.

pub mod core;
pub mod error;
pub mod scheduler;
pub mod sim;
pub mod trace;

pub use crate::core::{ExecutionSlice, Phase, SchedCore, SchedEvent};
pub use error::{Result, SimError};
pub use scheduler::{Algorithm, FcfsScheduler, PpScheduler, Scheduler, SjfScheduler};
pub use sim::{generate, GenConfig, ProcessSpec, RunStats, Sim};
pub use trace::TraceWriter;
