//! # colf-query
//!
//! Post-read query evaluator for COLF files.
//!
//! This is the primary public API surface for the COLF project. It builds
//! on [`colf_store::Reader`] to filter, project, limit, and aggregate
//! materialized rows through a fluent builder.
//!
//! ## Laziness
//!
//! A [`Query`] loads nothing until the first terminal operation (`rows`,
//! `count`, an aggregation, or `show`) and then caches the materialized row
//! set, so chained terminals over the same query re-use one read.
//!
//! ## Example
//!
//! ```rust,ignore
//! use colf_query::{Predicate, QueryExt};
//! use colf_store::Reader;
//!
//! let reader = Reader::open("employees.colf")?;
//! let rows = reader
//!     .query()
//!     .filter(Predicate::equals("active", true))
//!     .filter(Predicate::greater_than("age", 25))
//!     .select(["name", "age"])
//!     .rows()?;
//!
//! let headcount = Reader::open("employees.colf")?
//!     .query()
//!     .group_by_count("department")?;
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod predicate;
pub mod query;

pub use colf_store::{Result, StoreError};
pub use predicate::Predicate;
pub use query::{Query, QueryExt};
