//! Builds filters from configuration

use scrobbler_common::config::{FilterConfig, FilterKind, FilterSpec};
use tracing::info;

use crate::chain::FilterChain;
use crate::filter::SubmissionFilter;
use crate::musicbrainz::TrackIdentifierFilter;

/// Instantiate the filter described by one config entry
///
/// The `enabled` flag is not consulted here; see [`build_chain`].
pub fn build_filter(spec: &FilterSpec) -> Box<dyn SubmissionFilter> {
    match spec.kind {
        FilterKind::MusicBrainz => match &spec.field {
            Some(field) => Box::new(TrackIdentifierFilter::for_field(field.as_str())),
            None => Box::new(TrackIdentifierFilter::new()),
        },
    }
}

/// Build the chain of enabled filters, in config order
pub fn build_chain(config: &FilterConfig) -> FilterChain {
    let mut chain = FilterChain::new();

    for spec in &config.filters {
        if !spec.enabled {
            info!("Skipping disabled filter {:?}", spec.kind);
            continue;
        }

        let filter = build_filter(spec);
        info!("Registering filter '{}'", filter.name());
        chain.push_boxed(filter);
    }

    chain
}
