//! Tag normalization for lesson descriptors.
//!
//! Raw `tags` structures arrive in whatever shape the descriptor author wrote;
//! [`cleanse_tags`] repairs or drops malformed entries so every catalog entry
//! carries a well-formed category → values mapping.

pub mod cleanse;

pub use cleanse::cleanse_tags;
