use caseload::roster::{sample_roster, FamilyRecord};
use caseload::telemetry::event::MetricName;
use caseload::telemetry::generator::{
    generate_logs, generate_metrics, generate_run, generate_spans, generate_traces,
    FN_BATCH, FN_CATEGORIZE, LOGGER_CATEGORIZER, LOGGER_INTAKE,
};
use caseload::telemetry::recorder::{summarize, RunRecorder};
use chrono::{DateTime, Duration, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap()
}

#[test]
fn test_empty_roster_degenerates_to_brackets() {
    let logs = generate_logs(&[], start());
    let traces = generate_traces(&[], start());
    let spans = generate_spans(&[], start());

    // Batch bracket only: started + records_found(0) + complete.
    assert_eq!(logs.len(), 3);
    assert!(logs.iter().all(|l| l.logger_name == LOGGER_INTAKE));
    assert!(logs[1].message.contains("\"count\":0"));

    assert_eq!(traces.len(), 2);
    assert_eq!(traces[0].event_name, "batch_processing_started");
    assert_eq!(traces[1].event_name, "batch_processing_complete");

    assert_eq!(spans.len(), 2);
    assert!(spans.iter().all(|s| s.function_name == FN_BATCH));

    // Completion bracket lands at (2*0 + 5)s.
    assert_eq!(logs[2].timestamp, start() + Duration::seconds(5));
}

#[test]
fn test_counts_for_sample_roster() {
    let roster = sample_roster();
    let logs = generate_logs(&roster, start());
    let traces = generate_traces(&roster, start());
    let spans = generate_spans(&roster, start());

    // Triplet per record for logs, pair per record for traces, one span
    // per record, plus the brackets.
    assert_eq!(logs.len(), 2 + roster.len() * 3 + 1);
    assert_eq!(traces.len(), 1 + roster.len() * 2 + 1);
    assert_eq!(spans.len(), 1 + roster.len() + 1);
}

#[test]
fn test_timestamps_strictly_increasing() {
    let roster = sample_roster();

    let logs = generate_logs(&roster, start());
    for pair in logs.windows(2) {
        assert!(
            pair[0].timestamp < pair[1].timestamp,
            "log timestamps must strictly increase"
        );
    }

    let traces = generate_traces(&roster, start());
    for pair in traces.windows(2) {
        assert!(pair[0].timestamp < pair[1].timestamp);
    }

    let spans = generate_spans(&roster, start());
    for pair in spans.windows(2) {
        assert!(pair[0].timestamp < pair[1].timestamp);
    }
}

#[test]
fn test_per_record_anchor_and_substeps() {
    let roster = sample_roster();
    let logs = generate_logs(&roster, start());

    for (idx, family) in roster.iter().enumerate() {
        let anchor = start() + Duration::seconds(2 + 2 * idx as i64);
        let triplet = &logs[2 + idx * 3..2 + idx * 3 + 3];

        assert_eq!(triplet[0].timestamp, anchor);
        assert_eq!(triplet[0].logger_name, LOGGER_CATEGORIZER);
        assert!(triplet[0].message.contains("categorization_started"));

        assert_eq!(triplet[1].timestamp, anchor + Duration::milliseconds(500));
        assert!(triplet[1].message.contains("categorization_complete"));

        assert_eq!(triplet[2].timestamp, anchor + Duration::seconds(1));
        assert_eq!(triplet[2].logger_name, LOGGER_INTAKE);
        assert!(
            triplet[2].message.contains(&family.family_name),
            "records are narrated in input order"
        );
    }

    // Completion bracket is always after the last per-record event.
    let complete = logs.last().unwrap();
    assert_eq!(
        complete.timestamp,
        start() + Duration::seconds(2 * roster.len() as i64 + 5)
    );
    assert!(complete.message.contains("batch_complete"));
}

#[test]
fn test_spans_embed_classifier_output() {
    let roster = sample_roster();
    let spans = generate_spans(&roster, start());

    // Garcia Family (85/90/88) is the third record; spans[0] is the
    // opening bracket.
    let garcia: serde_json::Value = serde_json::from_str(&spans[3].custom_attributes).unwrap();
    assert_eq!(garcia["input.reading_score"], 85.0);
    assert_eq!(garcia["output.result"], "Light Touch: General Support");

    // Wilson Family (40/35/45) is the fourth.
    let wilson: serde_json::Value = serde_json::from_str(&spans[4].custom_attributes).unwrap();
    assert_eq!(wilson["output.result"], "Intensive: Reading, Math, Focus");
}

#[test]
fn test_traces_embed_tier_and_area_count() {
    let roster = sample_roster();
    let traces = generate_traces(&roster, start());

    // Wilson Family pair starts at index 1 + 3*2.
    let details: serde_json::Value = serde_json::from_str(&traces[7].event_details).unwrap();
    assert_eq!(details["level"], "Intensive");
    assert_eq!(details["areas_count"], 3);
    assert_eq!(details["avg_score"], 40.0);

    let last: serde_json::Value =
        serde_json::from_str(&traces.last().unwrap().event_details).unwrap();
    assert_eq!(last["total_processed"], roster.len());
}

#[test]
fn test_metric_counts_bounds_and_cadence() {
    let mut rng = StdRng::seed_from_u64(42);
    let metrics = generate_metrics(start(), &mut rng);

    assert_eq!(metrics.len(), 30, "10 + 5 cadence points, two samples each");

    for sample in &metrics {
        match (sample.function_name.as_str(), sample.metric_name) {
            (FN_CATEGORIZE, MetricName::CpuUtilization) => {
                assert!(sample.metric_value >= 0.05 && sample.metric_value <= 0.25);
            }
            (FN_CATEGORIZE, MetricName::MemoryUsage) => {
                assert_eq!(sample.metric_value.fract(), 0.0, "memory is an integer count");
                assert!(sample.metric_value >= 40_000_000.0);
                assert!(sample.metric_value <= 80_000_000.0);
            }
            (FN_BATCH, MetricName::CpuUtilization) => {
                assert!(sample.metric_value >= 0.10 && sample.metric_value <= 0.35);
            }
            (FN_BATCH, MetricName::MemoryUsage) => {
                assert!(sample.metric_value >= 60_000_000.0);
                assert!(sample.metric_value <= 120_000_000.0);
            }
            other => panic!("unexpected sample attribution: {:?}", other),
        }
    }

    // CPU and memory pair up on the same cadence point.
    assert_eq!(metrics[0].timestamp, metrics[1].timestamp);
    assert_eq!(
        metrics[2].timestamp - metrics[0].timestamp,
        Duration::milliseconds(1500)
    );
    // The second loop runs on a 3s cadence.
    assert_eq!(
        metrics[22].timestamp - metrics[20].timestamp,
        Duration::seconds(3)
    );
}

#[test]
fn test_structure_deterministic_across_rng_streams() {
    let roster = sample_roster();
    let mut rng_a = StdRng::seed_from_u64(1);
    let mut rng_b = StdRng::seed_from_u64(2);

    let run_a = generate_run(&roster, start(), &mut rng_a);
    let run_b = generate_run(&roster, start(), &mut rng_b);

    // Everything but metric values is identical regardless of RNG stream.
    assert_eq!(run_a.logs, run_b.logs);
    assert_eq!(run_a.traces, run_b.traces);
    assert_eq!(run_a.spans, run_b.spans);
    assert_eq!(run_a.total_events(), run_b.total_events());

    for (a, b) in run_a.metrics.iter().zip(&run_b.metrics) {
        assert_eq!(a.timestamp, b.timestamp);
        assert_eq!(a.function_name, b.function_name);
        assert_eq!(a.metric_name, b.metric_name);
    }
}

#[test]
fn test_recorder_keeps_only_latest_run() {
    let roster = sample_roster();
    let mut rng = StdRng::seed_from_u64(7);
    let first = generate_run(&roster, start(), &mut rng);
    let second = generate_run(&roster, start(), &mut rng);
    let second_id = second.run_id;

    let mut recorder = RunRecorder::new();
    assert!(recorder.current().is_none());
    assert!(recorder.summary().is_none());

    recorder.record(first);
    recorder.record(second);
    assert_eq!(
        recorder.current().unwrap().run_id,
        second_id,
        "a new run replaces the previous one"
    );

    recorder.clear();
    assert!(recorder.current().is_none());
}

#[test]
fn test_run_summary_aggregates() {
    let roster = sample_roster();
    let mut rng = StdRng::seed_from_u64(9);
    let run = generate_run(&roster, start(), &mut rng);
    let summary = summarize(&run);

    assert_eq!(summary.log_count, 18);
    assert_eq!(summary.trace_count, 12);
    assert_eq!(summary.span_count, 7);
    assert_eq!(summary.metric_count, 30);
    assert_eq!(summary.total_events, 67);

    assert_eq!(summary.logs_by_logger[LOGGER_INTAKE], 8);
    assert_eq!(summary.logs_by_logger[LOGGER_CATEGORIZER], 10);

    assert_eq!(summary.traces_by_event["batch_processing_started"], 1);
    assert_eq!(summary.traces_by_event["categorization_complete"], 5);
    assert_eq!(summary.traces_by_event["family_processed"], 5);
    assert_eq!(summary.traces_by_event["batch_processing_complete"], 1);

    assert_eq!(summary.spans_by_function[FN_BATCH], 2);
    assert_eq!(summary.spans_by_function[FN_CATEGORIZE], 5);

    let cpu = summary.avg_cpu_by_function[FN_CATEGORIZE];
    assert!(cpu >= 0.05 && cpu <= 0.25);
    let cpu = summary.avg_cpu_by_function[FN_BATCH];
    assert!(cpu >= 0.10 && cpu <= 0.35);
}

#[test]
fn test_run_filter_helpers() {
    let roster = sample_roster();
    let mut rng = StdRng::seed_from_u64(11);
    let run = generate_run(&roster, start(), &mut rng);

    assert_eq!(run.logs_for_logger(LOGGER_CATEGORIZER).len(), 10);
    assert_eq!(run.logs_for_logger(LOGGER_INTAKE).len(), 8);
    assert_eq!(run.spans_for_function(FN_CATEGORIZE).len(), 5);
    assert_eq!(run.spans_for_function("NO_SUCH_FUNCTION").len(), 0);
}

#[test]
fn test_single_record_roster() {
    let roster = vec![FamilyRecord {
        family_id: 9,
        family_name: "Rivera Family".to_string(),
        child_age: 6,
        reading_score: 55.0,
        math_score: 60.0,
        focus_score: 65.0,
    }];

    let logs = generate_logs(&roster, start());
    assert_eq!(logs.len(), 6);
    // Completion at (2*1 + 5)s, after the record's last sub-step at 3s.
    assert_eq!(
        logs.last().unwrap().timestamp,
        start() + Duration::seconds(7)
    );

    let traces = generate_traces(&roster, start());
    assert_eq!(traces.len(), 4);
    let details: serde_json::Value = serde_json::from_str(&traces[1].event_details).unwrap();
    assert_eq!(details["level"], "Moderate");
    assert_eq!(details["avg_score"], 60.0);
}
