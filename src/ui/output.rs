use crate::models::{Job, JobStatus};
use crate::view::{StatusCounts, ViewState};
use colored::*;
use terminal_size::{terminal_size, Width};

const MAX_BAR_WIDTH: usize = 40;

fn status_label(status: JobStatus) -> ColoredString {
    match status {
        JobStatus::Applied => status.as_str().blue(),
        JobStatus::Interview => status.as_str().yellow(),
        JobStatus::Offer => status.as_str().green(),
        JobStatus::Rejected => status.as_str().red(),
    }
}

fn bar_width() -> usize {
    match terminal_size() {
        // Leave room for the label, count and padding
        Some((Width(w), _)) if (w as usize) > 30 => MAX_BAR_WIDTH.min(w as usize - 25),
        _ => MAX_BAR_WIDTH,
    }
}

/// The row of stat tiles above the chart
pub fn display_stats(counts: &StatusCounts) {
    println!(
        "{}  {}  {}  {}  {}",
        format!("Total: {}", counts.total).bold(),
        format!("Applied: {}", counts.applied).blue(),
        format!("Interview: {}", counts.interview).yellow(),
        format!("Offer: {}", counts.offer).green(),
        format!("Rejected: {}", counts.rejected).red(),
    );
}

/// Horizontal bar chart of the per-status counts. Renders a placeholder
/// when there is nothing to chart.
pub fn display_chart(counts: &StatusCounts) {
    println!("{}", "Application analytics".bold());

    if counts.total == 0 {
        println!("{}", "No data available".dimmed());
        return;
    }

    let width = bar_width();
    let max = JobStatus::ALL
        .iter()
        .map(|&s| counts.of(s))
        .max()
        .unwrap_or(0)
        .max(1);

    for status in JobStatus::ALL {
        let count = counts.of(status);
        let filled = count * width / max;
        let bar = "█".repeat(filled);
        let colored_bar = match status {
            JobStatus::Applied => bar.blue(),
            JobStatus::Interview => bar.yellow(),
            JobStatus::Offer => bar.green(),
            JobStatus::Rejected => bar.red(),
        };
        println!("{:>9} {} {}", status.as_str(), colored_bar, count);
    }
}

/// The filtered job list, one line per job
pub fn display_jobs(jobs: &[Job]) {
    if jobs.is_empty() {
        println!("{}", "No jobs found.".dimmed());
        println!("{}", "Start tracking your applications.".dimmed());
        return;
    }

    for job in jobs {
        println!(
            "{}  {} at {}  [{}]",
            job.id.dimmed(),
            job.role.bold(),
            job.company,
            status_label(job.status),
        );
    }
}

/// Full dashboard: tiles, chart, then the filtered list
pub fn display_dashboard(view: &ViewState) {
    display_stats(&view.counts);
    println!();
    display_chart(&view.counts);
    println!();
    display_jobs(&view.filtered);
}

pub fn display_notice(message: &str) {
    eprintln!("{}", message.dimmed());
}

pub fn display_success(message: &str) {
    println!("{}", message.green());
}

pub fn display_error(message: &str) {
    eprintln!("{} {}", "Error:".red(), message);
}

pub fn display_warning(message: &str) {
    eprintln!("{} {}", "Warning:".yellow(), message);
}
