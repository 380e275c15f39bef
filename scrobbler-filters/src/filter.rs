//! Shared filter capability

use scrobbler_common::SubmissionRecord;
use std::sync::Arc;

/// Outcome of running a record through a filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterVerdict {
    /// No filter objected; hand the record to the next stage
    Forward,
    /// Dropped by the named filter
    Ignore { filter: String },
}

impl FilterVerdict {
    pub fn is_ignored(&self) -> bool {
        matches!(self, FilterVerdict::Ignore { .. })
    }
}

/// A predicate over submission records
///
/// Implementations are stateless with respect to records: `ignore` takes
/// the record by shared reference and must return the same answer for the
/// same record. Filters are `Send + Sync` so one instance can be shared
/// across worker threads.
pub trait SubmissionFilter: Send + Sync {
    /// Stable identifier used in logs and verdicts
    fn name(&self) -> &str;

    /// `true` if the record should be excluded from submission
    fn ignore(&self, record: &SubmissionRecord) -> bool;

    /// `ignore` plus the name of the filter responsible
    ///
    /// Composite filters override this to report the innermost filter
    /// that dropped the record instead of their own name.
    fn verdict(&self, record: &SubmissionRecord) -> FilterVerdict {
        if self.ignore(record) {
            FilterVerdict::Ignore {
                filter: self.name().to_string(),
            }
        } else {
            FilterVerdict::Forward
        }
    }
}

impl<F: SubmissionFilter + ?Sized> SubmissionFilter for Box<F> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn ignore(&self, record: &SubmissionRecord) -> bool {
        (**self).ignore(record)
    }

    fn verdict(&self, record: &SubmissionRecord) -> FilterVerdict {
        (**self).verdict(record)
    }
}

impl<F: SubmissionFilter + ?Sized> SubmissionFilter for Arc<F> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn ignore(&self, record: &SubmissionRecord) -> bool {
        (**self).ignore(record)
    }

    fn verdict(&self, record: &SubmissionRecord) -> FilterVerdict {
        (**self).verdict(record)
    }
}
