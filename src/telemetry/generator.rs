use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use super::event::{LogLevel, LogRecord, MetricName, MetricSample, SpanRecord, TraceEvent};
use crate::roster::FamilyRecord;

pub const LOGGER_INTAKE: &str = "intake_processor";
pub const LOGGER_CATEGORIZER: &str = "support_categorizer";
pub const FN_BATCH: &str = "PROCESS_FAMILY_INTAKES";
pub const FN_CATEGORIZE: &str = "CATEGORIZE_SUPPORT_LEVEL";

// Per-record events anchor at start + (2*i + 2)s with sub-steps at
// +0ms / +500ms / +1s. The batch-complete bracket lands at (2*n + 5)s,
// which is always after the last per-record event (2*n + 1)s.
fn record_anchor(start: DateTime<Utc>, index: usize) -> DateTime<Utc> {
    start + Duration::seconds(2 + 2 * index as i64)
}

fn batch_complete_at(start: DateTime<Utc>, record_count: usize) -> DateTime<Utc> {
    start + Duration::seconds(2 * record_count as i64 + 5)
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Fabricate the log lines a batch run over `roster` would emit.
pub fn generate_logs(roster: &[FamilyRecord], start: DateTime<Utc>) -> Vec<LogRecord> {
    let mut logs = Vec::with_capacity(roster.len() * 3 + 3);

    logs.push(LogRecord {
        timestamp: start,
        logger_name: LOGGER_INTAKE.to_string(),
        log_level: LogLevel::Info,
        message: json!({"event": "batch_started"}).to_string(),
    });
    logs.push(LogRecord {
        timestamp: start + Duration::seconds(1),
        logger_name: LOGGER_INTAKE.to_string(),
        log_level: LogLevel::Info,
        message: json!({"event": "records_found", "count": roster.len()}).to_string(),
    });

    for (idx, family) in roster.iter().enumerate() {
        let t = record_anchor(start, idx);
        logs.push(LogRecord {
            timestamp: t,
            logger_name: LOGGER_CATEGORIZER.to_string(),
            log_level: LogLevel::Info,
            message: json!({
                "event": "categorization_started",
                "reading": family.reading_score,
                "math": family.math_score,
                "focus": family.focus_score,
            })
            .to_string(),
        });
        logs.push(LogRecord {
            timestamp: t + Duration::milliseconds(500),
            logger_name: LOGGER_CATEGORIZER.to_string(),
            log_level: LogLevel::Info,
            message: json!({
                "event": "categorization_complete",
                "result": family.assess().label(),
            })
            .to_string(),
        });
        logs.push(LogRecord {
            timestamp: t + Duration::seconds(1),
            logger_name: LOGGER_INTAKE.to_string(),
            log_level: LogLevel::Info,
            message: json!({
                "event": "family_processed",
                "family_id": family.family_id,
                "family_name": family.family_name,
            })
            .to_string(),
        });
    }

    logs.push(LogRecord {
        timestamp: batch_complete_at(start, roster.len()),
        logger_name: LOGGER_INTAKE.to_string(),
        log_level: LogLevel::Info,
        message: json!({"event": "batch_complete", "total": roster.len()}).to_string(),
    });

    logs
}

/// Fabricate the trace milestone events for a batch run.
pub fn generate_traces(roster: &[FamilyRecord], start: DateTime<Utc>) -> Vec<TraceEvent> {
    let mut traces = Vec::with_capacity(roster.len() * 2 + 2);

    traces.push(TraceEvent {
        timestamp: start,
        event_name: "batch_processing_started".to_string(),
        event_details: json!({}).to_string(),
    });

    for (idx, family) in roster.iter().enumerate() {
        let t = record_anchor(start, idx);
        let assessment = family.assess();
        let avg = (family.reading_score + family.math_score + family.focus_score) / 3.0;

        traces.push(TraceEvent {
            timestamp: t + Duration::milliseconds(500),
            event_name: "categorization_complete".to_string(),
            event_details: json!({
                "level": assessment.tier.to_string(),
                "areas_count": assessment.weak_areas.len(),
                "avg_score": round_to(avg, 1),
            })
            .to_string(),
        });
        traces.push(TraceEvent {
            timestamp: t + Duration::seconds(1),
            event_name: "family_processed".to_string(),
            event_details: json!({
                "family_id": family.family_id,
                "category": assessment.label(),
            })
            .to_string(),
        });
    }

    traces.push(TraceEvent {
        timestamp: batch_complete_at(start, roster.len()),
        event_name: "batch_processing_complete".to_string(),
        event_details: json!({"total_processed": roster.len()}).to_string(),
    });

    traces
}

/// Fabricate the span-attribute records for a batch run.
pub fn generate_spans(roster: &[FamilyRecord], start: DateTime<Utc>) -> Vec<SpanRecord> {
    let mut spans = Vec::with_capacity(roster.len() + 2);

    spans.push(SpanRecord {
        timestamp: start,
        function_name: FN_BATCH.to_string(),
        custom_attributes: json!({
            "batch.status": "started",
            "batch.record_count": roster.len(),
        })
        .to_string(),
    });

    for (idx, family) in roster.iter().enumerate() {
        spans.push(SpanRecord {
            timestamp: record_anchor(start, idx),
            function_name: FN_CATEGORIZE.to_string(),
            custom_attributes: json!({
                "input.reading_score": family.reading_score,
                "input.math_score": family.math_score,
                "input.focus_score": family.focus_score,
                "output.result": family.assess().label(),
            })
            .to_string(),
        });
    }

    spans.push(SpanRecord {
        timestamp: batch_complete_at(start, roster.len()),
        function_name: FN_BATCH.to_string(),
        custom_attributes: json!({
            "batch.status": "completed",
            "batch.processed_count": roster.len(),
        })
        .to_string(),
    });

    spans
}

/// Fabricate CPU/memory samples. Independent of the roster; values come
/// from the injected RNG, cadence and counts are fixed.
pub fn generate_metrics<R: Rng>(start: DateTime<Utc>, rng: &mut R) -> Vec<MetricSample> {
    let mut metrics = Vec::with_capacity(30);

    for i in 0..10 {
        let t = start + Duration::milliseconds(1500 * i);
        metrics.push(MetricSample {
            timestamp: t,
            function_name: FN_CATEGORIZE.to_string(),
            metric_name: MetricName::CpuUtilization,
            metric_value: round_to(rng.gen_range(0.05..0.25), 3),
        });
        metrics.push(MetricSample {
            timestamp: t,
            function_name: FN_CATEGORIZE.to_string(),
            metric_name: MetricName::MemoryUsage,
            metric_value: rng.gen_range(40_000_000..=80_000_000u64) as f64,
        });
    }

    for i in 0..5 {
        let t = start + Duration::seconds(3 * i);
        metrics.push(MetricSample {
            timestamp: t,
            function_name: FN_BATCH.to_string(),
            metric_name: MetricName::CpuUtilization,
            metric_value: round_to(rng.gen_range(0.10..0.35), 3),
        });
        metrics.push(MetricSample {
            timestamp: t,
            function_name: FN_BATCH.to_string(),
            metric_name: MetricName::MemoryUsage,
            metric_value: rng.gen_range(60_000_000..=120_000_000u64) as f64,
        });
    }

    metrics
}

/// One fabricated batch run: the four sequences plus identity.
/// Exists only in memory; a new run replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRun {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub logs: Vec<LogRecord>,
    pub traces: Vec<TraceEvent>,
    pub spans: Vec<SpanRecord>,
    pub metrics: Vec<MetricSample>,
}

impl TelemetryRun {
    pub fn total_events(&self) -> usize {
        self.logs.len() + self.traces.len() + self.spans.len() + self.metrics.len()
    }

    /// Logs from one logger, in emission order. Mirrors the dashboard's
    /// logger filter.
    pub fn logs_for_logger(&self, logger_name: &str) -> Vec<&LogRecord> {
        self.logs
            .iter()
            .filter(|l| l.logger_name == logger_name)
            .collect()
    }

    /// Spans attributed to one function, in emission order.
    pub fn spans_for_function(&self, function_name: &str) -> Vec<&SpanRecord> {
        self.spans
            .iter()
            .filter(|s| s.function_name == function_name)
            .collect()
    }
}

/// Fabricate a complete run over `roster` anchored at `start`.
pub fn generate_run<R: Rng>(
    roster: &[FamilyRecord],
    start: DateTime<Utc>,
    rng: &mut R,
) -> TelemetryRun {
    TelemetryRun {
        run_id: Uuid::new_v4(),
        started_at: start,
        logs: generate_logs(roster, start),
        traces: generate_traces(roster, start),
        spans: generate_spans(roster, start),
        metrics: generate_metrics(start, rng),
    }
}
