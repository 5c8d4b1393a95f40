//! Employer social contributions on a household's payroll share.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PayrollRates;

/// Employer contributions for one household's share of the payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerCharges {
    /// Contributions at the employer rate on the gross share.
    pub gross: Decimal,
    /// Occupational-health contribution, capped.
    pub health_contribution: Decimal,
    /// Charges after the flat per-hour deduction, floored at zero.
    pub after_deduction: Decimal,
}

/// Computes the employer charges on a household's prorated payroll.
///
/// The charges are the employer rate applied to the gross share, plus the
/// capped occupational-health contribution, minus the flat home-employment
/// deduction per declared hour. Small contracts can drive the deduction
/// past the charges; the result is floored at zero, and the negative
/// intermediate is a normal transient, not an error.
pub fn compute_employer_charges(
    monthly_gross_share: Decimal,
    monthly_hours_share: Decimal,
    payroll: &PayrollRates,
) -> EmployerCharges {
    let gross = monthly_gross_share * payroll.employer_social_rate;

    let health_contribution = (monthly_gross_share * payroll.health_contribution_rate)
        .min(payroll.health_contribution_cap);

    let deduction = payroll.employer_deduction_per_hour * monthly_hours_share;
    let after_deduction = (gross + health_contribution - deduction).max(Decimal::ZERO);

    EmployerCharges {
        gross,
        health_contribution,
        after_deduction,
    }
}
