pub mod clock;
pub mod driver;
pub mod event;
pub mod observer;
pub mod state;

pub use clock::SimClock;
pub use driver::{Phase, SchedCore};
pub use event::{ExecutionSlice, SchedEvent};
pub use state::{Pcb, Pid, Priority, ProcState, SchedCtx, Ticks};
