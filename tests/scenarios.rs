use schedsim::{
    ExecutionSlice, FcfsScheduler, Phase, PpScheduler, ProcessSpec, SchedEvent, Scheduler, Sim,
    SjfScheduler, TraceWriter,
};

fn slice(pid: u32, start_time: u64, burst: u64) -> ExecutionSlice {
    ExecutionSlice {
        pid,
        start_time,
        burst,
    }
}

// Run to completion, returning the rendered trace and every event emitted.
fn run_traced<S: Scheduler>(workload: Vec<ProcessSpec>) -> (Sim<S>, String, Vec<SchedEvent>) {
    let mut sim = Sim::<S>::new(workload).unwrap();
    let mut trace = TraceWriter::new(Vec::new());
    let mut events = Vec::new();
    while !sim.completed() {
        for event in sim.step().unwrap() {
            trace.emit(&event).unwrap();
            events.push(event);
        }
    }
    let text = String::from_utf8(trace.into_inner()).unwrap();
    (sim, text, events)
}

#[test]
fn fcfs_runs_in_arrival_order() {
    let workload = vec![ProcessSpec::new(1, 0, 5), ProcessSpec::new(2, 2, 3)];
    let (sim, text, _) = run_traced::<FcfsScheduler>(workload);

    assert_eq!(sim.slices(), &[slice(1, 0, 5), slice(2, 5, 3)]);
    assert_eq!(
        text,
        "Current Time: 0\n\
         Executing process with PID 1, Burst Time: 5\n\
         Process with PID 1 finished execution.\n\
         Current Time: 5\n\
         Executing process with PID 2, Burst Time: 3\n\
         Process with PID 2 finished execution.\n"
    );
}

#[test]
fn sjf_matches_fcfs_when_the_long_process_is_already_running() {
    let workload = vec![ProcessSpec::new(1, 0, 5), ProcessSpec::new(2, 2, 3)];
    let (_, fcfs_text, _) = run_traced::<FcfsScheduler>(workload.clone());
    let (sim, sjf_text, _) = run_traced::<SjfScheduler>(workload);

    // Non-preemptive: by the time the shorter job arrives, the CPU is taken.
    assert_eq!(sim.slices(), &[slice(1, 0, 5), slice(2, 5, 3)]);
    assert_eq!(sjf_text, fcfs_text);
}

#[test]
fn sjf_picks_shortest_ready_when_cpu_frees() {
    let workload = vec![
        ProcessSpec::new(1, 0, 5),
        ProcessSpec::new(2, 1, 2),
        ProcessSpec::new(3, 2, 1),
    ];
    let (sim, _, _) = run_traced::<SjfScheduler>(workload);
    assert_eq!(
        sim.slices(),
        &[slice(1, 0, 5), slice(3, 5, 1), slice(2, 6, 2)]
    );
}

#[test]
fn pp_preempts_on_strictly_better_priority() {
    let workload = vec![
        ProcessSpec::new(1, 0, 5).with_priority(2),
        ProcessSpec::new(2, 1, 2).with_priority(1),
    ];
    let (sim, text, events) = run_traced::<PpScheduler>(workload);

    assert_eq!(
        sim.slices(),
        &[slice(1, 0, 1), slice(2, 1, 2), slice(1, 3, 4)]
    );
    assert!(events.contains(&SchedEvent::Preempted { pid: 1, by: 2, at: 1 }));

    // The preemptor starts at exactly its arrival tick.
    assert_eq!(sim.ctx().proc(2).first_run_time, Some(1));
    assert_eq!(sim.ctx().proc(2).response_time(), Some(0));
    assert_eq!(sim.ctx().proc(1).first_run_time, Some(0));

    assert_eq!(
        text,
        "Current Time: 0\n\
         Executing process with PID 1, Burst Time: 1\n\
         Preempting Process 1 with Process 2\n\
         Current Time: 1\n\
         Executing process with PID 2, Burst Time: 2\n\
         Process with PID 2 finished execution.\n\
         Current Time: 3\n\
         Executing process with PID 1, Burst Time: 4\n\
         Process with PID 1 finished execution.\n"
    );
}

#[test]
fn pp_equal_priority_does_not_preempt() {
    let workload = vec![
        ProcessSpec::new(1, 0, 4).with_priority(1),
        ProcessSpec::new(2, 1, 2).with_priority(1),
    ];
    let (sim, _, events) = run_traced::<PpScheduler>(workload);

    assert_eq!(sim.slices(), &[slice(1, 0, 4), slice(2, 4, 2)]);
    assert!(!events
        .iter()
        .any(|event| matches!(event, SchedEvent::Preempted { .. })));
}

#[test]
fn empty_workload_completes_immediately() {
    let (sim, text, events) = run_traced::<FcfsScheduler>(Vec::new());

    assert!(sim.completed());
    assert_eq!(sim.phase(), Phase::Completed);
    assert!(sim.slices().is_empty());
    assert!(events.is_empty());
    assert!(text.is_empty());
    assert_eq!(
        sim.stats().to_string(),
        "\nProcess Execution Statistics:\nPID\tCompletion Time\tTurnaround Time\tWaiting Time\n"
    );
}

#[test]
fn idle_gap_jumps_to_the_next_arrival() {
    let workload = vec![ProcessSpec::new(1, 0, 2), ProcessSpec::new(2, 5, 1)];
    let (sim, _, events) = run_traced::<FcfsScheduler>(workload);

    assert_eq!(sim.slices(), &[slice(1, 0, 2), slice(2, 5, 1)]);
    assert!(events.contains(&SchedEvent::Idle { from: 2, to: 5 }));
}

#[test]
fn simultaneous_arrivals_resolve_by_pid() {
    let workload = vec![ProcessSpec::new(2, 0, 3), ProcessSpec::new(1, 0, 3)];
    let (sim, _, _) = run_traced::<FcfsScheduler>(workload);
    assert_eq!(sim.slices(), &[slice(1, 0, 3), slice(2, 3, 3)]);
}

#[test]
fn identical_runs_produce_byte_identical_traces() {
    let workload = vec![
        ProcessSpec::new(1, 0, 5).with_priority(3),
        ProcessSpec::new(2, 1, 2).with_priority(1),
        ProcessSpec::new(3, 2, 4).with_priority(2),
    ];
    let (_, first, _) = run_traced::<PpScheduler>(workload.clone());
    let (_, second, _) = run_traced::<PpScheduler>(workload);
    assert_eq!(first, second);
}

#[test]
fn phase_tracks_the_run() {
    let workload = vec![ProcessSpec::new(1, 0, 5), ProcessSpec::new(2, 2, 3)];
    let mut sim = Sim::<FcfsScheduler>::new(workload).unwrap();
    assert_eq!(sim.phase(), Phase::Idle);

    // First step stops at the arrival boundary mid-burst.
    sim.step().unwrap();
    assert_eq!(sim.phase(), Phase::Running(1));

    while !sim.completed() {
        sim.step().unwrap();
    }
    assert_eq!(sim.phase(), Phase::Completed);
}

#[test]
fn statistics_report_for_a_full_run() {
    let workload = vec![ProcessSpec::new(1, 0, 5), ProcessSpec::new(2, 2, 3)];
    let (sim, _, _) = run_traced::<FcfsScheduler>(workload);

    let stats = sim.stats();
    let rows = stats.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(
        (rows[0].pid, rows[0].completion_time, rows[0].turnaround_time, rows[0].waiting_time),
        (1, 5, 5, 0)
    );
    assert_eq!(
        (rows[1].pid, rows[1].completion_time, rows[1].turnaround_time, rows[1].waiting_time),
        (2, 8, 6, 3)
    );

    // P1 is dispatched on arrival, P2 waits out the rest of P1's burst.
    assert_eq!((rows[0].response_time, rows[1].response_time), (0, 3));
    assert_eq!(stats.avg_response_time(), 1.5);

    assert_eq!(
        stats.to_string(),
        "\nProcess Execution Statistics:\n\
         PID\tCompletion Time\tTurnaround Time\tWaiting Time\n\
         1\t5\t\t5\t\t0\n\
         2\t8\t\t6\t\t3\n\
         \n\
         Average Turnaround Time: 5.50\n\
         Average Waiting Time: 1.50\n"
    );
}
