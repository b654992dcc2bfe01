//! Evalcheck Core Library
//!
//! Core validation logic for the evalcheck consistency checker: record
//! loading, per-record schema checks, cross-layer reference checks, and
//! report aggregation, plus the text-structure lints for benchmark
//! criteria and judge prompts.

pub mod criteria;
pub mod error;
pub mod layout;
pub mod logging;
pub mod logic;
pub mod orphans;
pub mod prompt_lint;
pub mod record;
pub mod refs;
pub mod report;
pub mod schema;
pub mod shared;
