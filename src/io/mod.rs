//! IO module for format-specific reading and writing operations.
//!
//! # Format Modules
//!
//! - `csv` - CSV format for county tables and scored exports
//! - `json` - JSON format for table exports consumed by charting front ends

pub(crate) mod csv;
pub(crate) mod json;
