pub mod driver;
pub mod process;
pub mod stats;
pub mod workload;

pub use driver::Sim;
pub use process::{validate_workload, ProcessSpec};
pub use stats::{ProcReport, RunStats};
pub use workload::{generate, GenConfig};
