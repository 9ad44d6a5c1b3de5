//! # colf-testing
//!
//! Shared fixtures and instrumented IO doubles for the COLF crate suite.
//!
//! This crate is dev-only (`publish = false`). It provides the canonical
//! employee dataset used across integration tests and [`TrackingFile`], a
//! `Read + Seek` wrapper that records which byte ranges of a file were
//! actually touched.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod fixtures;
pub mod tracking;

pub use fixtures::{employee_rows, employee_schema, write_employees};
pub use tracking::{ReadLog, TrackingFile};
