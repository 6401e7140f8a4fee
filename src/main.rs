use std::time::Duration;

use caseload::donations::DonationLedger;
use caseload::roster::sample_roster;
use caseload::telemetry::generator::generate_run;
use caseload::telemetry::recorder::RunRecorder;
use caseload::tracker::{InMemoryTracker, StudentRecord, SupportTracker, SupportType, TrackerStatus};
use chrono::Utc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("Caseload demo starting");

    // 1. Intake pass: categorize each family, paced for demo effect.
    // The pacing is presentation only; the classifier itself is instant.
    let roster = sample_roster();
    tracing::info!(families = roster.len(), "families in queue");

    for family in &roster {
        let assessment = family.assess();
        tracing::info!(
            family = %family.family_name,
            category = %assessment,
            "processed"
        );
        tokio::time::sleep(Duration::from_millis(300)).await;
    }

    // 2. Fabricate the telemetry a real batch run would have emitted.
    // Anchored five minutes back so the frames read as recent history.
    let start = Utc::now() - chrono::Duration::minutes(5);
    let run = generate_run(&roster, start, &mut rand::thread_rng());
    tracing::info!(run_id = %run.run_id, events = run.total_events(), "telemetry run generated");

    let mut recorder = RunRecorder::new();
    recorder.record(run);

    if let Some(summary) = recorder.summary() {
        tracing::info!(
            logs = summary.log_count,
            traces = summary.trace_count,
            spans = summary.span_count,
            metrics = summary.metric_count,
            "run summary"
        );
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    // 3. Support tracker: seed roster plus one newly enrolled student.
    let today = Utc::now().date_naive();
    let mut tracker = InMemoryTracker::seeded(today);
    tracker.upsert(StudentRecord {
        student_id: "S004".to_string(),
        name: "Taylor Smith".to_string(),
        support_type: SupportType::WritingSupport,
        status: TrackerStatus::NotStarted,
        notes: String::new(),
        last_updated: today,
    })?;
    for student in tracker.all() {
        tracing::info!(
            id = %student.student_id,
            name = %student.name,
            support = %student.support_type,
            status = %student.status,
            "tracked student"
        );
    }

    // 4. Donation ledger and its summary aggregate.
    let mut ledger = DonationLedger::seeded(today);
    ledger.add("David Lee", 100.0, today)?;
    let summary = ledger.summary();
    tracing::info!(
        donors = summary.total_donors,
        raised = summary.total_raised,
        avg = summary.avg_donation,
        "donation summary"
    );

    tracing::info!("Caseload demo complete");
    Ok(())
}
