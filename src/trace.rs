//! Human-readable rendering of scheduling events and reports.

use std::io::{self, Write};

use crate::models::{EventKind, SchedEvent};
use crate::runner::PolicyReport;

/// Renders one event as a trace line.
pub fn format_event(event: &SchedEvent) -> String {
    let what = match event.kind {
        EventKind::Arrived => "added to the queue",
        EventKind::Started => "started execution",
        EventKind::Preempted => "requeued",
        EventKind::Completed => "completed",
    };
    format!("Process {} {} at time {}", event.task_id, what, event.time)
}

/// Writes a policy report: header, event trace and averages.
pub fn write_report<W: Write>(out: &mut W, report: &PolicyReport) -> io::Result<()> {
    writeln!(out, "\n--- {} Scheduling ---", report.description)?;
    for event in &report.schedule.events {
        writeln!(out, "{}", format_event(event))?;
    }
    writeln!(
        out,
        "Average Response Time: {:.2}",
        report.metrics.avg_response_time
    )?;
    writeln!(
        out,
        "Average Turnaround Time: {:.2}",
        report.metrics.avg_turnaround_time
    )
}

/// Writes every report in order.
pub fn write_reports<W: Write>(out: &mut W, reports: &[PolicyReport]) -> io::Result<()> {
    reports.iter().try_for_each(|r| write_report(out, r))
}
