//! The memoized catalog accessor and read-only query API.

pub mod index;

pub use index::CatalogIndex;
