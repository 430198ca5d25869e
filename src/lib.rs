//! PAYE engine for Zimbabwean payroll
//!
//! This crate computes statutory payroll deductions under the ZIMRA 2025
//! PAYE schedule for USD and ZiG earnings: pension (NSSA), council levy,
//! progressive income tax, the AIDS solidarity levy and the employer's
//! standards-fund cost. It also reconciles a year's withholding against the
//! annual schedule and validates payroll records before calculation.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
