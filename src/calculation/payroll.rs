//! Net/gross payroll conversion.
//!
//! One flat employee contribution rate drives both conversion directions.
//! This is an intentional simplification of the tiered URSSAF schedule;
//! replace with a finer rate table if exact payslips are required.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::PayrollRates;
use crate::models::HoursBreakdown;

/// Wage multiplier for the +25 % band.
pub const PLUS25_MULTIPLIER: Decimal = Decimal::from_parts(125, 0, 0, false, 2);

/// Wage multiplier for the +50 % band.
pub const PLUS50_MULTIPLIER: Decimal = Decimal::from_parts(150, 0, 0, false, 2);

/// Monthly payroll totals across all wage bands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Total monthly gross payroll.
    pub gross_monthly: Decimal,
    /// Total monthly net payroll.
    pub net_monthly: Decimal,
}

/// Converts a net hourly wage to its gross equivalent.
///
/// Inverse of [`gross_to_net`] under the same flat employee rate:
/// `net ÷ (1 − employee_social_rate)`.
pub fn net_to_gross(net_hourly: Decimal, payroll: &PayrollRates) -> Decimal {
    net_hourly / (Decimal::ONE - payroll.employee_social_rate)
}

/// Converts a gross monthly amount to its net equivalent.
///
/// `gross × (1 − employee_social_rate)`.
pub fn gross_to_net(gross_monthly: Decimal, payroll: &PayrollRates) -> Decimal {
    gross_monthly * (Decimal::ONE - payroll.employee_social_rate)
}

/// Computes the monthly gross and net payroll for the full contract.
///
/// Each monthly band is paid at the gross hourly wage times its band
/// multiplier (1 / 1.25 / 1.50); the net total is derived from the gross
/// total with the flat employee rate.
///
/// # Example
///
/// ```
/// use cmg_engine::calculation::{compute_hours_breakdown, compute_monthly_payroll};
/// use cmg_engine::config::PolicyConfig;
/// use rust_decimal::Decimal;
///
/// let policy = PolicyConfig::france_2025();
/// let hours = compute_hours_breakdown(Decimal::from(40));
/// let totals = compute_monthly_payroll(Decimal::from(11), &hours, policy.payroll());
/// assert!(totals.gross_monthly > totals.net_monthly);
/// ```
pub fn compute_monthly_payroll(
    net_hourly_wage: Decimal,
    hours: &HoursBreakdown,
    payroll: &PayrollRates,
) -> PayrollTotals {
    let gross_hourly = net_to_gross(net_hourly_wage, payroll);

    let gross_normal = gross_hourly * hours.monthly_normal;
    let gross_plus25 = gross_hourly * PLUS25_MULTIPLIER * hours.monthly_plus25;
    let gross_plus50 = gross_hourly * PLUS50_MULTIPLIER * hours.monthly_plus50;

    let gross_monthly = gross_normal + gross_plus25 + gross_plus50;
    let net_monthly = gross_to_net(gross_monthly, payroll);

    PayrollTotals {
        gross_monthly,
        net_monthly,
    }
}
