//! # Scrobbler Submission Filters
//!
//! Predicates that decide whether a reported track play is dropped before
//! it reaches the submission queue.
//!
//! - [`SubmissionFilter`]: the capability every filter implements
//! - [`TrackIdentifierFilter`]: drops plays without a MusicBrainz track id
//! - [`FilterChain`]: ordered composition of filters
//! - [`registry`]: builds filters from `FilterConfig`

pub mod chain;
pub mod filter;
pub mod musicbrainz;
pub mod registry;

pub use chain::FilterChain;
pub use filter::{FilterVerdict, SubmissionFilter};
pub use musicbrainz::TrackIdentifierFilter;
pub use registry::{build_chain, build_filter};
