//! Home-employment tax credit calculation for one household.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::TaxCreditRules;
use crate::models::FamilyInput;

/// The credit covers half of the eligible annual expenses.
pub const TAX_CREDIT_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// The annual tax-credit figures for one household.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCreditResult {
    /// Annual expenses eligible for the credit (nanny + other declared
    /// home employment).
    pub annual_eligible_expenses_total: Decimal,
    /// The cap applied to the eligible expenses.
    pub cap: Decimal,
    /// The credit on all home-employment expenses.
    pub annual_credit_total: Decimal,
    /// The part of the credit attributable to the nanny, prorated by
    /// expense composition.
    pub annual_credit_nanny: Decimal,
}

/// Computes the annual expense cap for a household.
///
/// The base cap (raised during the first year of home employment) grows by
/// a fixed amount per dependent child, children counted up to a limit, and
/// the result is re-clamped to the absolute ceiling for the year.
///
/// # Example
///
/// ```
/// use cmg_engine::calculation::compute_tax_credit_cap;
/// use cmg_engine::config::PolicyConfig;
/// use cmg_engine::models::SimulationInputs;
/// use rust_decimal::Decimal;
///
/// let policy = PolicyConfig::france_2025();
/// let family = &SimulationInputs::demo().families[0];
/// // 12000 base + 1500 for one child.
/// assert_eq!(
///     compute_tax_credit_cap(family, policy.tax_credit()),
///     Decimal::from(13_500)
/// );
/// ```
pub fn compute_tax_credit_cap(family: &FamilyInput, rules: &TaxCreditRules) -> Decimal {
    let base = if family.first_year_employment {
        rules.first_year_base_cap
    } else {
        rules.base_cap
    };

    let counted_children = family.children_count.min(rules.children_counted_max);
    let increase = rules.per_child_increase * Decimal::from(counted_children);

    let ceiling = if family.first_year_employment {
        rules.first_year_max_cap
    } else {
        rules.max_cap
    };

    (base + increase).min(ceiling)
}

/// Computes the annual tax credit and its nanny-attributable part.
///
/// The credit is half of the eligible expenses up to the household's cap.
/// It is then prorated between the nanny and the other home-employment
/// expenses by expense composition, so the nanny expense is never credited
/// beyond its share of the spend. A zero eligible total defines the nanny
/// share as zero; no division by zero can occur.
pub fn compute_tax_credit(
    annual_nanny_net_expenses: Decimal,
    family: &FamilyInput,
    rules: &TaxCreditRules,
) -> TaxCreditResult {
    let annual_eligible_expenses_total = (annual_nanny_net_expenses
        + family.other_household_employment_per_year)
        .max(Decimal::ZERO);

    let cap = compute_tax_credit_cap(family, rules);

    let credit_base = annual_eligible_expenses_total.min(cap);
    let annual_credit_total = TAX_CREDIT_RATE * credit_base;

    let nanny_share = if annual_eligible_expenses_total == Decimal::ZERO {
        Decimal::ZERO
    } else {
        (annual_nanny_net_expenses / annual_eligible_expenses_total).min(Decimal::ONE)
    };
    let annual_credit_nanny = annual_credit_total * nanny_share;

    TaxCreditResult {
        annual_eligible_expenses_total,
        cap,
        annual_credit_total,
        annual_credit_nanny,
    }
}
