//! Cost simulation engine for shared nanny employment (garde partagée).
//!
//! This crate computes the monthly net cost of a nanny shared between
//! households under the 2025 French rules: payroll conversion, employer
//! social contributions, the means-tested CMG childcare subsidy, and the
//! home-employment tax credit. Values are acknowledged approximations of
//! the official URSSAF/Pajemploi schedules.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
