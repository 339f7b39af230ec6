//! Click event model for asynchronous click counting.

/// A pending click increment, passed from the resolver to the background
/// worker via a bounded channel.
///
/// Dispatch is fire-and-forget: the resolver `try_send`s and moves on, so a
/// full queue drops the event rather than delaying the redirect. Click counts
/// are analytics, not billing-grade accounting; undercounting under load is
/// accepted.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub slug: String,
}

impl ClickEvent {
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }
}
