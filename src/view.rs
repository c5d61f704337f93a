use crate::models::{Job, JobStatus};
use std::str::FromStr;

/// Status filter selected on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(JobStatus),
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(StatusFilter::All)
        } else {
            JobStatus::from_str(s).map(StatusFilter::Only).map_err(|_| {
                format!(
                    "unknown filter '{}' (expected All, Applied, Interview, Offer or Rejected)",
                    s
                )
            })
        }
    }
}

/// Aggregates over the full (unfiltered) job list, feeding the stat
/// tiles and the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub applied: usize,
    pub interview: usize,
    pub offer: usize,
    pub rejected: usize,
}

impl StatusCounts {
    pub fn of(&self, status: JobStatus) -> usize {
        match status {
            JobStatus::Applied => self.applied,
            JobStatus::Interview => self.interview,
            JobStatus::Offer => self.offer,
            JobStatus::Rejected => self.rejected,
        }
    }
}

/// What the dashboard renders: the filtered list plus the aggregates
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub filtered: Vec<Job>,
    pub counts: StatusCounts,
}

/// Current status of a job in the fetched list, keyed by id. This is
/// the pre-fill for an edit that does not name a new status: omitting
/// the status must never reset it.
pub fn status_of(jobs: &[Job], id: &str) -> Option<JobStatus> {
    jobs.iter().find(|job| job.id == id).map(|job| job.status)
}

/// Derive the dashboard view from the fetched job list.
///
/// A job is kept iff it passes the status filter and its company name
/// contains the search text case-insensitively. Input order is
/// preserved. The counts always cover the whole input list, so
/// changing the filter or search never moves the stat tiles or chart.
pub fn compute_view(jobs: &[Job], filter: StatusFilter, search: &str) -> ViewState {
    let needle = search.to_lowercase();

    let filtered = jobs
        .iter()
        .filter(|job| match filter {
            StatusFilter::All => true,
            StatusFilter::Only(status) => job.status == status,
        })
        .filter(|job| needle.is_empty() || job.company.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    let count_of = |status: JobStatus| jobs.iter().filter(|j| j.status == status).count();
    let counts = StatusCounts {
        total: jobs.len(),
        applied: count_of(JobStatus::Applied),
        interview: count_of(JobStatus::Interview),
        offer: count_of(JobStatus::Offer),
        rejected: count_of(JobStatus::Rejected),
    };

    ViewState { filtered, counts }
}
