use std::io::{self, Write};

use crate::core::event::{ExecutionSlice, SchedEvent};

/// Renders structured events into the line-oriented format the external
/// front-end parses. Line shapes are a compatibility contract; do not
/// reword them. Slice, preemption, and completion events produce text;
/// the rest are internal only.
pub struct TraceWriter<W: Write> {
    out: W,
}

impl<W: Write> TraceWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the textual form of `event`, if it has one, and flush so a
    /// polling consumer sees lines as they happen.
    pub fn emit(&mut self, event: &SchedEvent) -> io::Result<()> {
        match event {
            SchedEvent::Slice(ExecutionSlice {
                pid,
                start_time,
                burst,
            }) => {
                writeln!(self.out, "Current Time: {start_time}")?;
                writeln!(self.out, "Executing process with PID {pid}, Burst Time: {burst}")?;
            }
            SchedEvent::Completed { pid, .. } => {
                writeln!(self.out, "Process with PID {pid} finished execution.")?;
            }
            SchedEvent::Preempted { pid, by, .. } => {
                writeln!(self.out, "Preempting Process {pid} with Process {by}")?;
            }
            SchedEvent::Admitted { .. } | SchedEvent::Started { .. } | SchedEvent::Idle { .. } => {
                return Ok(());
            }
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
