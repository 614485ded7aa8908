// src/dedup.rs
//! Duplicate removal for job listings collected from several boards

use std::collections::HashSet;

use crate::types::JobRecord;

pub struct JobDeduplicator;

impl JobDeduplicator {
    /// Keep the first listing for every `title::company` key, in input order
    pub fn deduplicate<I>(jobs: I) -> Vec<JobRecord>
    where
        I: IntoIterator<Item = JobRecord>,
    {
        let mut seen = HashSet::new();
        let mut unique = Vec::new();

        for job in jobs {
            if seen.insert(job.dedup_key()) {
                unique.push(job);
            }
        }

        unique
    }

    /// Concatenate the sources in order, then deduplicate the whole run
    pub fn merge_and_deduplicate<S>(sources: S) -> Vec<JobRecord>
    where
        S: IntoIterator,
        S::Item: IntoIterator<Item = JobRecord>,
    {
        Self::deduplicate(sources.into_iter().flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str, company: &str) -> JobRecord {
        JobRecord::new(title, company)
    }

    fn titles(jobs: &[JobRecord]) -> Vec<(&str, &str)> {
        jobs.iter().map(|j| (j.title(), j.company())).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(JobDeduplicator::deduplicate(Vec::new()).is_empty());
        assert!(JobDeduplicator::merge_and_deduplicate(Vec::<Vec<JobRecord>>::new()).is_empty());
    }

    #[test]
    fn test_case_insensitive_first_seen_wins() {
        let input = vec![
            job("Engineer", "Acme"),
            job("engineer", "ACME"),
            job("Engineer", "Other"),
        ];

        let out = JobDeduplicator::deduplicate(input);
        assert_eq!(titles(&out), vec![("Engineer", "Acme"), ("Engineer", "Other")]);
    }

    #[test]
    fn test_first_record_keeps_its_extra_fields() {
        let input = vec![
            job("Dev", "Acme").with_field("source", "adzuna"),
            job("DEV", "acme").with_field("source", "apify"),
        ];

        let out = JobDeduplicator::deduplicate(input);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].field_text("source").as_deref(), Some("adzuna"));
    }

    #[test]
    fn test_whitespace_is_significant() {
        let out = JobDeduplicator::deduplicate(vec![job("Dev", "Acme"), job("Dev ", "Acme")]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_missing_fields_share_a_key() {
        let out = JobDeduplicator::deduplicate(vec![
            JobRecord::default(),
            JobRecord::default().with_field("id", 2),
            job("", ""),
        ]);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_idempotent() {
        let input = vec![
            job("A", "X"),
            job("b", "y"),
            job("a", "x"),
            job("B", "Y"),
            job("C", "Z"),
        ];

        let once = JobDeduplicator::deduplicate(input);
        let twice = JobDeduplicator::deduplicate(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_duplicate_keys_and_stable_order() {
        let input = vec![
            job("Rust Dev", "Acme"),
            job("Go Dev", "Initech"),
            job("rust dev", "acme"),
            job("Ops", "Hooli"),
            job("GO DEV", "INITECH"),
        ];

        let out = JobDeduplicator::deduplicate(input.clone());
        assert!(out.len() <= input.len());

        let keys: HashSet<String> = out.iter().map(JobRecord::dedup_key).collect();
        assert_eq!(keys.len(), out.len());

        let positions: Vec<usize> = out
            .iter()
            .map(|o| input.iter().position(|i| i == o).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_merge_matches_flat_dedup() {
        let a = vec![job("Dev", "Acme"), job("Ops", "Acme")];
        let b = vec![job("ops", "acme"), job("QA", "Hooli"), job("dev", "ACME")];

        let merged = JobDeduplicator::merge_and_deduplicate(vec![a.clone(), b.clone()]);
        let flat = JobDeduplicator::deduplicate(a.into_iter().chain(b));

        assert_eq!(merged, flat);
        assert_eq!(
            titles(&merged),
            vec![("Dev", "Acme"), ("Ops", "Acme"), ("QA", "Hooli")]
        );
    }

    #[test]
    fn test_merge_source_order_decides_winner() {
        let board = vec![job("Dev", "Acme").with_field("source", "board")];
        let scraper = vec![job("dev", "acme").with_field("source", "scraper")];

        let out = JobDeduplicator::merge_and_deduplicate([scraper, board]);
        assert_eq!(out[0].field_text("source").as_deref(), Some("scraper"));
    }
}
