//! Ordered filter composition
//!
//! Filters are consulted in insertion order. Evaluation stops at the first
//! filter that ignores the record; an empty chain forwards everything.
//! A nested chain reports the inner filter that dropped the record, not
//! its own name.

use scrobbler_common::SubmissionRecord;
use tracing::debug;

use crate::filter::{FilterVerdict, SubmissionFilter};

/// Ordered list of filters
#[derive(Default)]
pub struct FilterChain {
    filters: Vec<Box<dyn SubmissionFilter>>,
}

impl FilterChain {
    pub const NAME: &'static str = "chain";

    pub fn new() -> Self {
        Self::default()
    }

    /// Append a filter
    pub fn push(&mut self, filter: impl SubmissionFilter + 'static) {
        self.filters.push(Box::new(filter));
    }

    /// Append an already boxed filter
    pub fn push_boxed(&mut self, filter: Box<dyn SubmissionFilter>) {
        self.filters.push(filter);
    }

    /// Builder-style append
    pub fn with(mut self, filter: impl SubmissionFilter + 'static) -> Self {
        self.push(filter);
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Filter names in evaluation order
    pub fn names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Run the record through every filter until one ignores it
    pub fn evaluate(&self, record: &SubmissionRecord) -> FilterVerdict {
        for filter in &self.filters {
            let verdict = filter.verdict(record);
            if let FilterVerdict::Ignore { filter: dropped_by } = &verdict {
                debug!("Submission dropped by filter '{}'", dropped_by);
                return verdict;
            }
        }
        FilterVerdict::Forward
    }
}

impl SubmissionFilter for FilterChain {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn ignore(&self, record: &SubmissionRecord) -> bool {
        self.evaluate(record).is_ignored()
    }

    fn verdict(&self, record: &SubmissionRecord) -> FilterVerdict {
        self.evaluate(record)
    }
}

impl std::fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterChain")
            .field("filters", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::musicbrainz::TrackIdentifierFilter;
    use scrobbler_common::record::fields;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Test filter that ignores records containing a given field and counts calls
    struct FieldPresentFilter {
        name: &'static str,
        field: &'static str,
        calls: Arc<AtomicUsize>,
    }

    impl FieldPresentFilter {
        fn new(name: &'static str, field: &'static str) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    name,
                    field,
                    calls: Arc::clone(&calls),
                },
                calls,
            )
        }
    }

    impl SubmissionFilter for FieldPresentFilter {
        fn name(&self) -> &str {
            self.name
        }

        fn ignore(&self, record: &SubmissionRecord) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            record.contains(self.field)
        }
    }

    #[test]
    fn test_empty_chain_forwards() {
        let chain = FilterChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.evaluate(&SubmissionRecord::new()), FilterVerdict::Forward);
        assert!(!chain.ignore(&SubmissionRecord::new()));
    }

    #[test]
    fn test_musicbrainz_verdicts() {
        let chain = FilterChain::new().with(TrackIdentifierFilter::new());

        assert_eq!(
            chain.evaluate(&SubmissionRecord::new()),
            FilterVerdict::Ignore {
                filter: "musicbrainz".to_string()
            }
        );
        assert_eq!(
            chain.evaluate(&SubmissionRecord::new().with(fields::TRACK_ID, "abc123")),
            FilterVerdict::Forward
        );
    }

    #[test]
    fn test_stops_at_first_ignoring_filter() {
        let (podcasts, podcast_calls) = FieldPresentFilter::new("podcasts", "podcast");
        let (later, later_calls) = FieldPresentFilter::new("later", "podcast");
        let chain = FilterChain::new().with(podcasts).with(later);

        let record = SubmissionRecord::new().with("podcast", true);
        assert_eq!(
            chain.evaluate(&record),
            FilterVerdict::Ignore {
                filter: "podcasts".to_string()
            }
        );
        assert_eq!(podcast_calls.load(Ordering::SeqCst), 1);
        assert_eq!(later_calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_forward_consults_every_filter() {
        let (first, first_calls) = FieldPresentFilter::new("first", "a");
        let (second, second_calls) = FieldPresentFilter::new("second", "b");
        let chain = FilterChain::new().with(first).with(second);

        assert_eq!(chain.evaluate(&SubmissionRecord::new()), FilterVerdict::Forward);
        assert_eq!(first_calls.load(Ordering::SeqCst), 1);
        assert_eq!(second_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_names_in_order() {
        let (other, _) = FieldPresentFilter::new("other", "x");
        let chain = FilterChain::new()
            .with(TrackIdentifierFilter::new())
            .with(other);

        assert_eq!(chain.len(), 2);
        assert_eq!(chain.names(), vec!["musicbrainz", "other"]);
        assert_eq!(chain.name(), "chain");
        assert_eq!(format!("{:?}", chain), r#"FilterChain { filters: ["musicbrainz", "other"] }"#);
    }

    #[test]
    fn test_nested_chain_reports_inner_filter() {
        let (podcasts, _) = FieldPresentFilter::new("podcasts", "podcast");
        let inner = FilterChain::new()
            .with(podcasts)
            .with(TrackIdentifierFilter::new());
        let outer = FilterChain::new().with(FilterChain::new().with(inner));

        assert_eq!(
            outer.evaluate(&SubmissionRecord::new()),
            FilterVerdict::Ignore {
                filter: "musicbrainz".to_string()
            }
        );
        assert_eq!(
            outer.evaluate(&SubmissionRecord::new().with("podcast", true)),
            FilterVerdict::Ignore {
                filter: "podcasts".to_string()
            }
        );
        assert_eq!(
            outer.evaluate(&SubmissionRecord::new().with(fields::TRACK_ID, "abc123")),
            FilterVerdict::Forward
        );
    }

    #[test]
    fn test_boxed_filter_keeps_inner_verdict() {
        let boxed: Box<dyn SubmissionFilter> =
            Box::new(FilterChain::new().with(TrackIdentifierFilter::new()));

        assert_eq!(
            boxed.verdict(&SubmissionRecord::new()),
            FilterVerdict::Ignore {
                filter: "musicbrainz".to_string()
            }
        );
    }
}
