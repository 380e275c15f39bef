//! MusicBrainz track identifier filter
//!
//! Drops submissions that carry no MusicBrainz track identifier. A missing
//! field, a null value and the empty string are all treated as "no
//! identifier". Whitespace is not trimmed: `" "` counts as present.
//!
//! Non-string values (numbers, booleans, lists) count as present. The
//! filter never fails on an unexpected type.

use scrobbler_common::record::fields;
use scrobbler_common::SubmissionRecord;
use tracing::debug;

use crate::filter::SubmissionFilter;

/// Drops submissions lacking a MusicBrainz track identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackIdentifierFilter {
    /// Record field holding the identifier
    field: String,
}

impl TrackIdentifierFilter {
    /// Filter name reported in verdicts and logs
    pub const NAME: &'static str = "musicbrainz";

    /// Filter on the standard `track_id` field
    pub fn new() -> Self {
        Self::for_field(fields::TRACK_ID)
    }

    /// Filter on a different identifier field
    pub fn for_field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

impl Default for TrackIdentifierFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionFilter for TrackIdentifierFilter {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn ignore(&self, record: &SubmissionRecord) -> bool {
        match record.get(&self.field) {
            None => {
                debug!("Ignoring submission: no '{}' field", self.field);
                true
            }
            Some(value) if value.is_blank() => {
                debug!(
                    "Ignoring submission: '{}' is blank ({})",
                    self.field,
                    value.type_name()
                );
                true
            }
            Some(_) => false,
        }
    }
}
