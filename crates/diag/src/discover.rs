//! Dashboards Discover deep links.
//!
//! Responsibilities:
//! - Build a `data-explorer/discover` URL whose fragment carries the
//!   rison-encoded global, query, and app state Dashboards expects.
//!
//! Explicitly does NOT handle:
//! - Validating that the query is well-formed Lucene or that the index
//!   pattern id exists; Dashboards reports those problems itself.
//!
//! Invariants / assumptions:
//! - Parameter values are spliced verbatim into the rison literals before
//!   encoding. A single quote inside the query therefore terminates the
//!   rison string early in Dashboards; callers pass rison-compatible
//!   values.
//! - The fragment parameters always appear in `_g`, `_q`, `_a` order.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters that survive fragment encoding unescaped.
///
/// Rison state strings lean on `(),:` heavily; escaping them would make the
/// generated links unreadable, and Dashboards accepts them raw. Spaces are
/// kept here and rewritten to `+` afterwards, form-encoding style.
const DISCOVER_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'(')
    .remove(b')')
    .remove(b',')
    .remove(b':')
    .remove(b' ');

fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, DISCOVER_COMPONENT)
        .to_string()
        .replace(' ', "+")
}

/// Inputs for a Discover deep link.
#[derive(Debug, Clone)]
pub struct DiscoverUrlParams {
    /// Lucene query to prefill, e.g. `level:ERROR`.
    pub query: String,
    /// Saved index pattern id (see `list_index_patterns`), not its title.
    pub index_pattern_id: String,
    /// Start of the time window, e.g. `now-15m`.
    pub from_time: String,
    /// End of the time window, e.g. `now`.
    pub to_time: String,
}

/// Build a Discover view URL against `base_url`.
///
/// `base_url` is the Dashboards origin, with or without a trailing slash.
/// This never fails; a nonsense query yields a URL Dashboards will reject,
/// not an error here.
pub fn build_discover_url(base_url: &str, params: &DiscoverUrlParams) -> String {
    let global_state = format!(
        "(filters:!(),refreshInterval:(pause:!t,value:0),time:(from:'{}',to:'{}'))",
        params.from_time, params.to_time
    );
    let query_state = format!(
        "(filters:!(),query:(language:lucene,query:'{}'))",
        params.query
    );
    let app_state = format!(
        "(discover:(columns:!(_source),isDirty:!f,sort:!()),metadata:(indexPattern:'{}',view:discover))",
        params.index_pattern_id
    );

    format!(
        "{}/app/data-explorer/discover#?_g={}&_q={}&_a={}",
        base_url.trim_end_matches('/'),
        encode_component(&global_state),
        encode_component(&query_state),
        encode_component(&app_state),
    )
}
