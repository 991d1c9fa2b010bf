//! Shared building blocks for the herald pipeline.
//!
//! This crate provides the diagnostic types used for non-fatal reporting
//! (discovery skips, ordering hints pointing nowhere) and the filesystem
//! helpers shared by module hooks and the export step.

mod diagnostic;
mod fsutil;

pub use diagnostic::{Diagnostic, Severity};
pub use fsutil::{copy_recursively, write_file};
