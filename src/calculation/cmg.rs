//! CMG means-tested subsidy calculation for one household.
//!
//! The CMG (complément de libre choix du mode de garde) has two
//! components: one subsidizing the wage itself and one subsidizing the
//! employer contributions. Both are scaled by a single means-testing
//! factor derived from the household's resources, the effort-rate table,
//! and the reference hourly cost, following the linear formula of decree
//! 2025-515.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::CmgRules;

use super::effort_rate::get_effort_rate;
use super::hours::MONTHS_PER_YEAR;

/// The CMG assessment for one household.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CmgAssessment {
    /// Monthly countable resources after the statutory clamp.
    pub monthly_resources: Decimal,
    /// Effort rate resolved from the children-count table.
    pub effort_rate: Decimal,
    /// Shared means-testing scale factor in [0, 1].
    pub scale: Decimal,
    /// Subsidy on the wage itself.
    pub wage_subsidy: Decimal,
    /// Subsidy on the employer contributions.
    pub contribution_subsidy: Decimal,
    /// Total monthly CMG.
    pub total: Decimal,
}

/// Computes the CMG for one household.
///
/// Steps, per the 2025 rules:
/// 1. The eligible hourly cost is the net wage capped at the policy
///    ceiling, applied to the household's monthly hours.
/// 2. Countable resources are the annual taxable income over twelve
///    months, clamped between the statutory floor and ceiling.
/// 3. The scale factor is `1 − resources × effort_rate ÷ reference cost`,
///    clamped to [0, 1]. The same factor applies to both components.
/// 4. The wage subsidy is the eligible cost times the scale; the
///    contribution subsidy is the employer charges times the flat
///    contribution-subsidy rate times the scale.
///
/// High-income households drive the scale to zero and receive nothing;
/// that is the intended shape of the means-testing curve, not a fallback.
pub fn compute_cmg(
    net_hourly_wage: Decimal,
    monthly_hours_share: Decimal,
    employer_charges_after_deduction: Decimal,
    taxable_income: Decimal,
    children_count: u32,
    rules: &CmgRules,
) -> CmgAssessment {
    let eligible_hourly_cost = net_hourly_wage.min(rules.hourly_cap);
    let eligible_guard_cost = eligible_hourly_cost * monthly_hours_share;

    let monthly_resources = (taxable_income / MONTHS_PER_YEAR)
        .max(rules.min_monthly_resources)
        .min(rules.max_monthly_resources);

    let effort_rate = get_effort_rate(children_count, &rules.effort_rates);

    let scale = (Decimal::ONE - monthly_resources * effort_rate / rules.reference_hourly_cost)
        .max(Decimal::ZERO)
        .min(Decimal::ONE);

    let wage_subsidy = eligible_guard_cost * scale;
    let contribution_subsidy =
        employer_charges_after_deduction * rules.contribution_subsidy_rate * scale;
    let total = wage_subsidy + contribution_subsidy;

    CmgAssessment {
        monthly_resources,
        effort_rate,
        scale,
        wage_subsidy,
        contribution_subsidy,
        total,
    }
}
