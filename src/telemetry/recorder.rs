use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::event::MetricName;
use super::generator::TelemetryRun;

/// Holds the latest fabricated run. Recording a new run discards the
/// previous one; `clear` resets to empty.
#[derive(Debug, Default)]
pub struct RunRecorder {
    current: Option<TelemetryRun>,
}

impl RunRecorder {
    pub fn new() -> Self {
        Self { current: None }
    }

    pub fn record(&mut self, run: TelemetryRun) {
        self.current = Some(run);
    }

    pub fn current(&self) -> Option<&TelemetryRun> {
        self.current.as_ref()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn summary(&self) -> Option<RunSummary> {
        self.current.as_ref().map(summarize)
    }
}

/// Display aggregates over one run: overall counts plus the groupings the
/// dashboard panels key on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total_events: usize,
    pub log_count: usize,
    pub trace_count: usize,
    pub span_count: usize,
    pub metric_count: usize,
    pub logs_by_logger: BTreeMap<String, usize>,
    pub traces_by_event: BTreeMap<String, usize>,
    pub spans_by_function: BTreeMap<String, usize>,
    pub avg_cpu_by_function: BTreeMap<String, f64>,
}

/// Pure fold over a run's four sequences.
pub fn summarize(run: &TelemetryRun) -> RunSummary {
    let mut summary = RunSummary {
        total_events: run.total_events(),
        log_count: run.logs.len(),
        trace_count: run.traces.len(),
        span_count: run.spans.len(),
        metric_count: run.metrics.len(),
        ..RunSummary::default()
    };

    for log in &run.logs {
        *summary
            .logs_by_logger
            .entry(log.logger_name.clone())
            .or_insert(0) += 1;
    }
    for trace in &run.traces {
        *summary
            .traces_by_event
            .entry(trace.event_name.clone())
            .or_insert(0) += 1;
    }
    for span in &run.spans {
        *summary
            .spans_by_function
            .entry(span.function_name.clone())
            .or_insert(0) += 1;
    }

    let mut cpu_totals: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for sample in &run.metrics {
        if sample.metric_name == MetricName::CpuUtilization {
            let entry = cpu_totals
                .entry(sample.function_name.clone())
                .or_insert((0.0, 0));
            entry.0 += sample.metric_value;
            entry.1 += 1;
        }
    }
    for (function, (total, count)) in cpu_totals {
        summary
            .avg_cpu_by_function
            .insert(function, total / count as f64);
    }

    summary
}
