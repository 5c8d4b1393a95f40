//! Result models produced by the simulation pipeline.
//!
//! Every intermediate monetary figure is surfaced so a presentation layer
//! can explain the computation step by step. Results are values: they are
//! recomputed wholesale from the inputs and never mutated in place.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FamilyInput;

/// Weekly hours split into wage bands, with their monthly equivalents.
///
/// The contractual convention pays up to 40 h/week at the normal rate, the
/// next 8 h at +25 % and the next 2 h at +50 %. Each weekly band is
/// mensualized independently (weekly × 52 ÷ 12, rounded up), so
/// `monthly_total` is always the sum of the three rounded bands and can
/// exceed a single rounding of the weekly total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursBreakdown {
    /// Weekly hours paid at the normal rate (capped at 40).
    pub weekly_normal: Decimal,
    /// Weekly hours paid at +25 % (hours 40–48).
    pub weekly_plus25: Decimal,
    /// Weekly hours paid at +50 % (hours 48–50).
    pub weekly_plus50: Decimal,
    /// Monthly normal-rate hours, rounded up.
    pub monthly_normal: Decimal,
    /// Monthly +25 % hours, rounded up.
    pub monthly_plus25: Decimal,
    /// Monthly +50 % hours, rounded up.
    pub monthly_plus50: Decimal,
    /// Sum of the three monthly bands.
    pub monthly_total: Decimal,
}

/// Every intermediate and final monetary figure for one household.
///
/// All amounts are in euros; monthly unless the field name says annual.
/// The after-subsidy and after-credit costs are deliberately not clamped
/// at zero: a negative value means the benefits exceed the raw cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyResult {
    /// The input this result was derived from.
    pub family: FamilyInput,
    /// This household's share of the monthly gross payroll.
    pub monthly_gross_share: Decimal,
    /// This household's share of the monthly net payroll.
    pub monthly_net_share: Decimal,
    /// This household's share of the monthly hours.
    pub monthly_hours_share: Decimal,
    /// Employer social contributions on the gross share, before deductions.
    pub employer_charges_gross: Decimal,
    /// Occupational-health contribution (rate applied to gross, capped).
    pub health_contribution: Decimal,
    /// Employer charges after the flat per-hour deduction, floored at 0.
    pub employer_charges_after_deduction: Decimal,
    /// CMG component subsidizing the wage itself.
    pub cmg_wage_subsidy: Decimal,
    /// CMG component subsidizing the employer contributions.
    pub cmg_contribution_subsidy: Decimal,
    /// Total monthly CMG subsidy for this household.
    pub cmg_total: Decimal,
    /// Monthly countable resources after the statutory floor/ceiling clamp.
    pub monthly_resources: Decimal,
    /// Effort rate applied to this household's resources.
    pub effort_rate: Decimal,
    /// Monthly cost before any subsidy (net share + employer charges).
    pub monthly_cost_before_cmg: Decimal,
    /// Monthly cost once the CMG is deducted. May be negative.
    pub monthly_cost_after_cmg: Decimal,
    /// Annualized cost before the CMG.
    pub annual_cost_before_cmg: Decimal,
    /// Annualized CMG total.
    pub annual_cmg_total: Decimal,
    /// Annual out-of-pocket nanny expense (cost before CMG minus CMG, ≥ 0).
    pub annual_nanny_net_expenses: Decimal,
    /// Annual expenses eligible for the tax credit (nanny + other home
    /// employment).
    pub annual_eligible_expenses_total: Decimal,
    /// Annual tax credit on all eligible home-employment expenses.
    pub annual_tax_credit_total: Decimal,
    /// The part of the annual tax credit attributable to the nanny.
    pub annual_tax_credit_nanny: Decimal,
    /// Monthly cost after CMG and the nanny's share of the tax credit.
    /// May be negative.
    pub monthly_cost_after_tax_credit: Decimal,
}

/// The aggregate result of one simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// The hours decomposition shared by all households.
    pub hours: HoursBreakdown,
    /// Total monthly gross payroll across all bands.
    pub total_gross_monthly: Decimal,
    /// Total monthly net payroll.
    pub total_net_monthly: Decimal,
    /// Per-household results, in input order.
    pub families: Vec<FamilyResult>,
}
