//! Terminal front end for the health contribution comparator.
//!
//! This crate is a thin caller of `skladka-core`: it validates raw input,
//! runs the comparison and renders the result.

pub mod app;
pub mod csv_loader;
pub mod report;
