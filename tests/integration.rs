//! Integration tests for the CMG simulation engine.
//!
//! This suite covers the end-to-end scenarios and cross-component
//! properties:
//! - the reference two-family shared-care scenario
//! - means-testing monotonicity and the high-income extreme
//! - the tax-credit proration law
//! - per-band mensualization rounding
//! - policy loaded from YAML versus the compiled-in rule set

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use cmg_engine::calculation::{
    compute_cmg, compute_hours_breakdown, compute_simulation, gross_to_net, net_to_gross,
};
use cmg_engine::config::{ConfigLoader, PolicyConfig};
use cmg_engine::models::{FamilyInput, SimulationInputs};

// =============================================================================
// Test Helpers
// =============================================================================

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn family(id: &str, share: &str, income: &str, children: u32) -> FamilyInput {
    FamilyInput {
        id: id.to_string(),
        label: id.to_string(),
        share: dec(share),
        taxable_income: dec(income),
        other_household_employment_per_year: Decimal::ZERO,
        children_count: children,
        single_parent: false,
        first_year_employment: false,
    }
}

fn two_family_inputs() -> SimulationInputs {
    SimulationInputs {
        net_hourly_wage: dec("11"),
        weekly_hours: dec("40"),
        families: vec![
            family("fam1", "0.5", "60000", 1),
            family("fam2", "0.5", "35000", 1),
        ],
    }
}

// =============================================================================
// End-to-end scenarios
// =============================================================================

#[test]
fn test_reference_two_family_scenario() {
    let policy = PolicyConfig::france_2025();
    let result = compute_simulation(&two_family_inputs(), &policy);

    assert!(result.total_gross_monthly > Decimal::ZERO);
    assert!(result.total_net_monthly > Decimal::ZERO);
    assert_eq!(result.families.len(), 2);

    let share_sum: Decimal = result.families.iter().map(|f| f.family.share).sum();
    assert!((share_sum - Decimal::ONE).abs() < dec("0.000001"));

    // 40 h/week mensualize to 174 h at the normal rate only.
    assert_eq!(result.hours.monthly_total, dec("174"));
    assert_eq!(result.hours.weekly_plus25, Decimal::ZERO);

    // Both households go through the whole pipeline.
    for fam in &result.families {
        assert!(fam.monthly_cost_before_cmg > Decimal::ZERO);
        assert!(fam.cmg_total >= Decimal::ZERO);
        assert!(fam.annual_tax_credit_nanny >= Decimal::ZERO);
        assert!(fam.monthly_cost_after_tax_credit < fam.monthly_cost_before_cmg);
    }
}

#[test]
fn test_high_income_household_gets_no_cmg() {
    let policy = PolicyConfig::france_2025();
    let inputs = SimulationInputs {
        net_hourly_wage: dec("11"),
        weekly_hours: dec("40"),
        families: vec![family("rich", "1", "180000", 1)],
    };

    let result = compute_simulation(&inputs, &policy);
    let fam = &result.families[0];

    assert!(fam.cmg_total.abs() < dec("0.01"));
    // Without a subsidy the cost only moves through the tax credit.
    assert_eq!(fam.monthly_cost_after_cmg, fam.monthly_cost_before_cmg);
}

#[test]
fn test_uneven_shares_split_the_cost() {
    let policy = PolicyConfig::france_2025();
    let inputs = SimulationInputs {
        net_hourly_wage: dec("11"),
        weekly_hours: dec("45"),
        families: vec![
            family("large", "0.7", "40000", 2),
            family("small", "0.3", "40000", 2),
        ],
    };

    let result = compute_simulation(&inputs, &policy);

    let gross_sum: Decimal = result.families.iter().map(|f| f.monthly_gross_share).sum();
    assert!((gross_sum - result.total_gross_monthly).abs() < dec("0.000001"));

    // Same income and family size: the larger share costs more.
    assert!(
        result.families[0].monthly_cost_after_tax_credit
            > result.families[1].monthly_cost_after_tax_credit
    );
}

#[test]
fn test_first_year_employment_raises_the_credit() {
    let policy = PolicyConfig::france_2025();

    let mut base = SimulationInputs {
        net_hourly_wage: dec("15"),
        weekly_hours: dec("50"),
        families: vec![family("fam", "1", "100000", 2)],
    };
    let regular = compute_simulation(&base, &policy);

    base.families[0].first_year_employment = true;
    let first_year = compute_simulation(&base, &policy);

    // A high-expense household hits the regular cap, so the raised
    // first-year cap strictly increases the credit.
    assert!(
        first_year.families[0].annual_tax_credit_nanny
            > regular.families[0].annual_tax_credit_nanny
    );
}

#[test]
fn test_loaded_policy_matches_compiled_in_results() {
    let loader = ConfigLoader::load("./config/cmg/2025.yaml").unwrap();
    let compiled = PolicyConfig::france_2025();

    let from_file = compute_simulation(&two_family_inputs(), loader.config());
    let from_code = compute_simulation(&two_family_inputs(), &compiled);

    assert_eq!(from_file, from_code);
}

#[test]
fn test_result_serializes_to_json() {
    let policy = PolicyConfig::france_2025();
    let result = compute_simulation(&two_family_inputs(), &policy);

    let json = serde_json::to_string(&result).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["families"].as_array().unwrap().len(), 2);
    assert_eq!(value["hours"]["monthly_total"].as_str().unwrap(), "174");
}

// =============================================================================
// Proration law
// =============================================================================

#[test]
fn test_tax_credit_proration_law() {
    let policy = PolicyConfig::france_2025();
    let mut inputs = two_family_inputs();
    inputs.families[0].other_household_employment_per_year = dec("2000");
    inputs.families[1].other_household_employment_per_year = dec("1000");

    let result = compute_simulation(&inputs, &policy);

    for fam in &result.families {
        assert!(fam.annual_tax_credit_total > Decimal::ZERO);
        assert!(fam.annual_eligible_expenses_total > Decimal::ZERO);

        let credit_ratio = fam.annual_tax_credit_nanny / fam.annual_tax_credit_total;
        let expense_ratio = fam.annual_nanny_net_expenses / fam.annual_eligible_expenses_total;

        assert!(
            (credit_ratio - expense_ratio).abs() < dec("0.000001"),
            "proration broken for {}: credit ratio {} vs expense ratio {}",
            fam.family.id,
            credit_ratio,
            expense_ratio
        );
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Hours at or below 40 stay entirely in the normal band.
    #[test]
    fn prop_hours_below_40_have_no_upper_bands(hundredths in 0u32..=4000) {
        let weekly = Decimal::new(hundredths as i64, 2);
        let hours = compute_hours_breakdown(weekly);

        prop_assert_eq!(hours.weekly_normal, weekly);
        prop_assert_eq!(hours.weekly_plus25, Decimal::ZERO);
        prop_assert_eq!(hours.weekly_plus50, Decimal::ZERO);
    }

    /// The monthly total is always the sum of the per-band ceilings, and
    /// the weekly bands always reassemble the weekly hours (up to 50 h).
    #[test]
    fn prop_bands_are_consistent(hundredths in 0u32..=5000) {
        let weekly = Decimal::new(hundredths as i64, 2);
        let hours = compute_hours_breakdown(weekly);

        prop_assert_eq!(
            hours.monthly_total,
            hours.monthly_normal + hours.monthly_plus25 + hours.monthly_plus50
        );
        prop_assert_eq!(
            hours.weekly_normal + hours.weekly_plus25 + hours.weekly_plus50,
            weekly
        );
        prop_assert!(hours.monthly_total >= Decimal::ZERO);
    }

    /// Increasing income never increases the CMG total.
    #[test]
    fn prop_cmg_monotonic_non_increasing_in_income(
        income_a in 0u32..=250_000,
        income_b in 0u32..=250_000,
        children in 0u32..=9,
    ) {
        let policy = PolicyConfig::france_2025();
        let (low, high) = if income_a <= income_b {
            (income_a, income_b)
        } else {
            (income_b, income_a)
        };

        let cmg_low = compute_cmg(
            dec("11"),
            dec("87"),
            dec("200"),
            Decimal::from(low),
            children,
            policy.cmg(),
        );
        let cmg_high = compute_cmg(
            dec("11"),
            dec("87"),
            dec("200"),
            Decimal::from(high),
            children,
            policy.cmg(),
        );

        prop_assert!(cmg_high.total <= cmg_low.total);
    }

    /// The two payroll conversions invert each other under the shared rate.
    #[test]
    fn prop_payroll_conversions_are_inverse(cents in 0u32..=10_000) {
        let policy = PolicyConfig::france_2025();
        let net = Decimal::new(cents as i64, 2);

        let round_trip = gross_to_net(net_to_gross(net, policy.payroll()), policy.payroll());

        prop_assert!((round_trip - net).abs() < dec("0.0000000001"));
    }

    /// The subsidy never exceeds the cost it offsets by more than the
    /// contribution component allows, and every household result keeps
    /// the stage identities.
    #[test]
    fn prop_stage_identities_hold(
        income in 0u32..=200_000,
        share_percent in 0u32..=100,
        children in 0u32..=5,
    ) {
        let policy = PolicyConfig::france_2025();
        let inputs = SimulationInputs {
            net_hourly_wage: dec("11"),
            weekly_hours: dec("42"),
            families: vec![FamilyInput {
                id: "prop".to_string(),
                label: "prop".to_string(),
                share: Decimal::new(share_percent as i64, 2),
                taxable_income: Decimal::from(income),
                other_household_employment_per_year: Decimal::ZERO,
                children_count: children,
                single_parent: false,
                first_year_employment: false,
            }],
        };

        let result = compute_simulation(&inputs, &policy);
        let fam = &result.families[0];

        prop_assert_eq!(
            fam.monthly_cost_after_cmg,
            fam.monthly_cost_before_cmg - fam.cmg_total
        );
        prop_assert_eq!(fam.cmg_total, fam.cmg_wage_subsidy + fam.cmg_contribution_subsidy);
        prop_assert_eq!(fam.annual_cost_before_cmg, fam.monthly_cost_before_cmg * dec("12"));
        prop_assert!(fam.annual_nanny_net_expenses >= Decimal::ZERO);
        prop_assert!(fam.annual_tax_credit_nanny <= fam.annual_tax_credit_total);
    }
}
