//! YAML parsing for lesson descriptor files
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach:
//!
//! - **Field-level issues**: A wrongly-typed `level`, `license`, or tag shape degrades
//!   to its default with a stderr warning; it never fails the descriptor.
//!
//! - **File-level issues**: Unreadable files or invalid YAML are returned as errors to
//!   the descriptor source, which warns and skips that one lesson. A single broken
//!   descriptor never aborts catalog building.
//!
//! - **Error propagation**: Uses `anyhow::Result` with context naming the descriptor,
//!   so a warning line always identifies the offending `<course>/<lesson>/lesson.yml`.

pub mod descriptor;

pub use descriptor::{parse_descriptor, parse_descriptor_file};
