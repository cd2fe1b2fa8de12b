//! # entrychk-sem
//!
//! **Tier 2 (Semantic Validation)**
//!
//! The table-driven semantic validation engine: a depth-first tree walker
//! dispatching to per-field predicates through declarative schema tables,
//! plus the ignore-code registry that filters diagnostics before they
//! reach the driver.
//!
//! ## What belongs here
//! * Schema tables for the info/author documents ([`schema`])
//! * The walker and error accumulation ([`validate`], [`validate_with`])
//! * Field-level predicates and their value policies ([`checks`])
//! * The ignore-code registry ([`ignore_code`], [`is_ignored`])
//!
//! ## What does NOT belong here
//! * Parsing (see `entrychk-json`)
//! * File I/O, exit codes, report formatting (the CLI's job)
//!
//! A predicate never aborts a walk; the verdict of [`validate`] is simply
//! whether the returned error vector is empty. Validation is pure over
//! the tree and idempotent: the same tree and schema yield the same
//! errors every time.

pub mod checks;
pub mod schema;

mod ignore;
mod sink;
mod walk;

pub use ignore::{ignore_code, is_ignored, registry_snapshot, IgnoreSet};
pub use schema::{
    CheckFn, DocumentKind, JsonType, Schema, SchemaField, AUTHOR_ELEMENT_SCHEMA, AUTHOR_SCHEMA,
    INFO_SCHEMA,
};
pub use sink::ErrorSink;
pub use walk::{validate, validate_with, WALK_MAX_DEPTH};
