//! Normalization of raw cells and column names.
//!
//! Raw fields from metric spreadsheets carry presentation suffixes (`20.8x`,
//! `29%`) and placeholder markers (`N/A`). This crate turns them into typed
//! [`delim_model::Value`]s and turns display headers into SQL column names.
//!
//! # Example
//!
//! ```
//! use delim_model::Value;
//! use delim_transform::normalization::{normalize_cell, normalize_column_name};
//!
//! assert_eq!(normalize_cell(1, " 20.8x "), Value::Decimal(20.8));
//! assert_eq!(normalize_cell(1, "N/A"), Value::Null);
//! assert_eq!(normalize_cell(0, " Acme "), Value::text("Acme"));
//! assert_eq!(normalize_column_name("Current ARR Multiple"), "current_arr_multiple");
//! ```
//!
//! # Design Principles
//!
//! - **Lenient cells**: a malformed cell becomes `Null`, it never aborts a file
//! - **Stateless functions**: pure functions for easy testing and composition
//! - **Data-driven suffixes**: suffix handling is an ordered rule list

pub mod normalization;

pub use normalization::{
    SUFFIX_RULES, SuffixRule, normalize_cell, normalize_column_name, normalize_identifier,
    normalize_numeric, parse_decimal,
};
