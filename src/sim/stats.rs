use std::fmt;

use average::Estimate;

use crate::core::state::{Pcb, Pid, SchedCtx, Ticks};

/// One row of the post-run report. All fields are derived from a completed
/// process's timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcReport {
    pub pid: Pid,
    pub completion_time: Ticks,
    pub turnaround_time: Ticks,
    pub waiting_time: Ticks,
    pub response_time: Ticks,
}

impl ProcReport {
    fn from_pcb(pcb: &Pcb) -> Option<Self> {
        Some(Self {
            pid: pcb.pid,
            completion_time: pcb.completion_time?,
            turnaround_time: pcb.turnaround_time()?,
            waiting_time: pcb.waiting_time()?,
            response_time: pcb.response_time()?,
        })
    }
}

/// Aggregated end-of-run statistics, rows sorted by pid. `Display` renders
/// the report block; the averages are omitted for an empty run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStats {
    rows: Vec<ProcReport>,
}

impl RunStats {
    pub fn from_ctx(ctx: &SchedCtx) -> Self {
        let mut rows: Vec<ProcReport> = ctx.procs().filter_map(ProcReport::from_pcb).collect();
        rows.sort_by_key(|row| row.pid);
        Self { rows }
    }

    pub fn rows(&self) -> &[ProcReport] {
        &self.rows
    }

    pub fn avg_turnaround_time(&self) -> f64 {
        avg(self.rows.iter().map(|r| r.turnaround_time as f64))
    }

    pub fn avg_waiting_time(&self) -> f64 {
        avg(self.rows.iter().map(|r| r.waiting_time as f64))
    }

    /// Time from arrival to first dispatch, averaged. Not part of the
    /// textual report.
    pub fn avg_response_time(&self) -> f64 {
        avg(self.rows.iter().map(|r| r.response_time as f64))
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Process Execution Statistics:")?;
        writeln!(f, "PID\tCompletion Time\tTurnaround Time\tWaiting Time")?;
        for row in &self.rows {
            writeln!(
                f,
                "{}\t{}\t\t{}\t\t{}",
                row.pid, row.completion_time, row.turnaround_time, row.waiting_time
            )?;
        }
        if !self.rows.is_empty() {
            writeln!(f)?;
            writeln!(f, "Average Turnaround Time: {:.2}", self.avg_turnaround_time())?;
            writeln!(f, "Average Waiting Time: {:.2}", self.avg_waiting_time())?;
        }
        Ok(())
    }
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<average::Mean>().estimate()
}
