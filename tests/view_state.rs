use jobtrack::models::{Job, JobStatus};
use jobtrack::view::{compute_view, status_of, StatusFilter};
use std::str::FromStr;

fn job(id: &str, company: &str, status: JobStatus) -> Job {
    Job {
        id: id.to_string(),
        company: company.to_string(),
        role: "Engineer".to_string(),
        status,
    }
}

fn sample_jobs() -> Vec<Job> {
    vec![
        job("1", "Acme", JobStatus::Applied),
        job("2", "Globex Corp", JobStatus::Applied),
        job("3", "Initech", JobStatus::Interview),
        job("4", "Hooli", JobStatus::Offer),
        job("5", "Umbrella", JobStatus::Rejected),
    ]
}

#[test]
fn test_no_filter_returns_everything_in_order() {
    let jobs = sample_jobs();
    let view = compute_view(&jobs, StatusFilter::All, "");

    assert_eq!(view.filtered, jobs);
}

#[test]
fn test_status_filter_preserves_order() {
    let jobs = sample_jobs();
    let view = compute_view(&jobs, StatusFilter::Only(JobStatus::Applied), "");

    let ids: Vec<&str> = view.filtered.iter().map(|j| j.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let jobs = sample_jobs();

    let view = compute_view(&jobs, StatusFilter::All, "globex");
    assert_eq!(view.filtered.len(), 1);
    assert_eq!(view.filtered[0].company, "Globex Corp");

    let view = compute_view(&jobs, StatusFilter::All, "CORP");
    assert_eq!(view.filtered.len(), 1);
    assert_eq!(view.filtered[0].company, "Globex Corp");
}

#[test]
fn test_filter_and_search_combine() {
    let jobs = sample_jobs();

    // "e" appears in Acme, Globex Corp, Initech and Umbrella; only the
    // first two are Applied
    let view = compute_view(&jobs, StatusFilter::Only(JobStatus::Applied), "e");
    let ids: Vec<&str> = view.filtered.iter().map(|j| j.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn test_filtered_is_subset_of_input() {
    let jobs = sample_jobs();
    let view = compute_view(&jobs, StatusFilter::Only(JobStatus::Offer), "o");

    for item in &view.filtered {
        assert!(jobs.contains(item));
        assert_eq!(item.status, JobStatus::Offer);
        assert!(item.company.to_lowercase().contains('o'));
    }
}

#[test]
fn test_counts_cover_unfiltered_list() {
    let jobs = sample_jobs();
    let view = compute_view(&jobs, StatusFilter::All, "");

    assert_eq!(view.counts.total, 5);
    assert_eq!(view.counts.applied, 2);
    assert_eq!(view.counts.interview, 1);
    assert_eq!(view.counts.offer, 1);
    assert_eq!(view.counts.rejected, 1);
}

#[test]
fn test_counts_invariant_under_filter_and_search() {
    let jobs = sample_jobs();
    let baseline = compute_view(&jobs, StatusFilter::All, "").counts;

    let combinations = [
        (StatusFilter::All, "globex"),
        (StatusFilter::Only(JobStatus::Applied), ""),
        (StatusFilter::Only(JobStatus::Rejected), "no-such-company"),
        (StatusFilter::Only(JobStatus::Interview), "CORP"),
    ];

    for (filter, search) in combinations {
        let view = compute_view(&jobs, filter, search);
        assert_eq!(view.counts, baseline);
    }
}

#[test]
fn test_empty_input_yields_zero_counts() {
    let view = compute_view(&[], StatusFilter::All, "");

    assert_eq!(view.counts.total, 0);
    assert!(view.filtered.is_empty());
}

#[test]
fn test_edit_prefill_keeps_current_status() {
    // Editing without naming a status must reuse the job's stored
    // status, not fall back to Applied
    let jobs = sample_jobs();

    assert_eq!(status_of(&jobs, "3"), Some(JobStatus::Interview));
    assert_eq!(status_of(&jobs, "5"), Some(JobStatus::Rejected));
    assert_ne!(status_of(&jobs, "3"), Some(JobStatus::Applied));
}

#[test]
fn test_status_of_missing_id_is_none() {
    let jobs = sample_jobs();
    assert_eq!(status_of(&jobs, "no-such-id"), None);
    assert_eq!(status_of(&[], "1"), None);
}

#[test]
fn test_status_filter_parses_all_case_insensitively() {
    assert_eq!(StatusFilter::from_str("all").unwrap(), StatusFilter::All);
    assert_eq!(StatusFilter::from_str("ALL").unwrap(), StatusFilter::All);
    assert_eq!(
        StatusFilter::from_str("offer").unwrap(),
        StatusFilter::Only(JobStatus::Offer)
    );
}

#[test]
fn test_status_filter_error_names_all() {
    let err = StatusFilter::from_str("hired").unwrap_err();
    assert!(err.contains("All"));
    assert!(err.contains("hired"));
}

#[test]
fn test_no_match_leaves_counts_intact() {
    let jobs = sample_jobs();
    let view = compute_view(&jobs, StatusFilter::All, "zzz");

    assert!(view.filtered.is_empty());
    assert_eq!(view.counts.total, 5);
}
