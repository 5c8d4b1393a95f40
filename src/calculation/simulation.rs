//! Simulation orchestrator composing the full pipeline.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::PolicyConfig;
use crate::models::{FamilyInput, FamilyResult, HoursBreakdown, SimulationInputs, SimulationResult};

use super::cmg::compute_cmg;
use super::employer_charges::compute_employer_charges;
use super::hours::{MONTHS_PER_YEAR, compute_hours_breakdown};
use super::payroll::{PayrollTotals, compute_monthly_payroll};
use super::tax_credit::compute_tax_credit;

/// Runs one full simulation.
///
/// Decomposes the weekly hours once, converts the payroll once, then maps
/// the subsidy and tax-credit pipeline over each household independently.
/// The function is pure and total: identical inputs always produce the
/// identical result, out-of-domain numeric inputs propagate as-is, and the
/// household order of the output matches the input.
///
/// # Example
///
/// ```
/// use cmg_engine::calculation::compute_simulation;
/// use cmg_engine::config::PolicyConfig;
/// use cmg_engine::models::SimulationInputs;
///
/// let policy = PolicyConfig::france_2025();
/// let result = compute_simulation(&SimulationInputs::demo(), &policy);
/// assert_eq!(result.families.len(), 2);
/// ```
pub fn compute_simulation(inputs: &SimulationInputs, policy: &PolicyConfig) -> SimulationResult {
    debug!(
        families = inputs.families.len(),
        weekly_hours = %inputs.weekly_hours,
        "computing simulation"
    );

    let hours = compute_hours_breakdown(inputs.weekly_hours);
    let totals = compute_monthly_payroll(inputs.net_hourly_wage, &hours, policy.payroll());

    let families = inputs
        .families
        .iter()
        .map(|family| compute_family_result(family, inputs.net_hourly_wage, &hours, &totals, policy))
        .collect();

    SimulationResult {
        hours,
        total_gross_monthly: totals.gross_monthly,
        total_net_monthly: totals.net_monthly,
        families,
    }
}

/// Runs the per-household part of the pipeline: proration, employer
/// charges, CMG, then the tax credit on the annualized figures.
fn compute_family_result(
    family: &FamilyInput,
    net_hourly_wage: Decimal,
    hours: &HoursBreakdown,
    totals: &PayrollTotals,
    policy: &PolicyConfig,
) -> FamilyResult {
    let monthly_gross_share = totals.gross_monthly * family.share;
    let monthly_net_share = totals.net_monthly * family.share;
    let monthly_hours_share = hours.monthly_total * family.share;

    let charges = compute_employer_charges(monthly_gross_share, monthly_hours_share, policy.payroll());

    let cmg = compute_cmg(
        net_hourly_wage,
        monthly_hours_share,
        charges.after_deduction,
        family.taxable_income,
        family.children_count,
        policy.cmg(),
    );

    let monthly_cost_before_cmg = monthly_net_share + charges.after_deduction;
    // Not clamped: a subsidy larger than the raw cost shows as negative.
    let monthly_cost_after_cmg = monthly_cost_before_cmg - cmg.total;

    let annual_cost_before_cmg = monthly_cost_before_cmg * MONTHS_PER_YEAR;
    let annual_cmg_total = cmg.total * MONTHS_PER_YEAR;
    let annual_nanny_net_expenses = (annual_cost_before_cmg - annual_cmg_total).max(Decimal::ZERO);

    let credit = compute_tax_credit(annual_nanny_net_expenses, family, policy.tax_credit());

    let monthly_cost_after_tax_credit =
        monthly_cost_after_cmg - credit.annual_credit_nanny / MONTHS_PER_YEAR;

    FamilyResult {
        family: family.clone(),
        monthly_gross_share,
        monthly_net_share,
        monthly_hours_share,
        employer_charges_gross: charges.gross,
        health_contribution: charges.health_contribution,
        employer_charges_after_deduction: charges.after_deduction,
        cmg_wage_subsidy: cmg.wage_subsidy,
        cmg_contribution_subsidy: cmg.contribution_subsidy,
        cmg_total: cmg.total,
        monthly_resources: cmg.monthly_resources,
        effort_rate: cmg.effort_rate,
        monthly_cost_before_cmg,
        monthly_cost_after_cmg,
        annual_cost_before_cmg,
        annual_cmg_total,
        annual_nanny_net_expenses,
        annual_eligible_expenses_total: credit.annual_eligible_expenses_total,
        annual_tax_credit_total: credit.annual_credit_total,
        annual_tax_credit_nanny: credit.annual_credit_nanny,
        monthly_cost_after_tax_credit,
    }
}
