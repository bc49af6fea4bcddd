//! # report-tool
//!
//! Command line front end for `report-flow`
#![warn(missing_docs)]

pub mod cli;
