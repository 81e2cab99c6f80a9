pub mod environment;

pub use environment::{CONTENT_ROOT_ENV, resolve_content_root};
