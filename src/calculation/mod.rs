//! Calculation logic for the CMG simulation engine.
//!
//! This module contains all the calculation functions of the pipeline:
//! weekly hours decomposition, net/gross payroll conversion, effort-rate
//! lookup, employer charges, the means-tested CMG subsidy, the annual
//! tax credit, and the orchestrator that composes them per household.
//!
//! Every function here is pure and total over its numeric inputs; only
//! the configuration surface in [`crate::config`] can fail.

mod cmg;
mod effort_rate;
mod employer_charges;
mod hours;
mod payroll;
mod simulation;
mod tax_credit;

pub use cmg::{CmgAssessment, compute_cmg};
pub use effort_rate::get_effort_rate;
pub use employer_charges::{EmployerCharges, compute_employer_charges};
pub use hours::{
    MONTHS_PER_YEAR, WEEKLY_NORMAL_CAP, WEEKLY_PLUS25_SPAN, WEEKLY_PLUS50_SPAN,
    WEEKLY_PLUS50_THRESHOLD, WEEKS_PER_YEAR, compute_hours_breakdown,
};
pub use payroll::{
    PLUS25_MULTIPLIER, PLUS50_MULTIPLIER, PayrollTotals, compute_monthly_payroll, gross_to_net,
    net_to_gross,
};
pub use simulation::compute_simulation;
pub use tax_credit::{TAX_CREDIT_RATE, TaxCreditResult, compute_tax_credit, compute_tax_credit_cap};
