//! Salary and contribution-period extraction for Brazilian pension statements
//!
//! This crate reads the text layer of two fixed PDF layouts, the INSS
//! contribution certificate (CTC) and the Florianópolis municipal payroll
//! statement, extracts their salary and contribution-period tables, and
//! exports them as `.xlsx` workbooks through a small upload service.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod extraction;
pub mod models;
