//! Test utilities for the scalaps crates.
//!
//! This crate provides deterministic sample data: a small forum-post dataset in
//! CSV form, and a parser that turns it back into records. It is intended for
//! use from the test suites only.

pub mod data_gen;
