//! Payroll Preview Engine for Philippine payroll
//!
//! This crate computes a live payroll preview from a monthly basic salary and
//! overtime hours: hourly rate, overtime pay, SSS, PhilHealth and Pag-IBIG
//! contributions, withholding tax and net pay. It also produces full payroll
//! breakdowns with holiday and night-differential pay, payslip numbers and
//! run summaries, and serves all of them over HTTP.

#![warn(missing_docs)]

pub mod alerts;
pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
