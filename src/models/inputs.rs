//! Input models describing the employment terms and the households.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fiscal and household data for one family sharing the employment.
///
/// The core does not validate these fields; the input-collection layer is
/// expected to clamp values to their business domain before calling in
/// (shares in `[0, 1]`, non-negative incomes and expenses).
///
/// # Example
///
/// ```
/// use cmg_engine::models::FamilyInput;
/// use rust_decimal::Decimal;
///
/// let family = FamilyInput {
///     id: "fam1".to_string(),
///     label: "Famille 1".to_string(),
///     share: Decimal::new(5, 1),
///     taxable_income: Decimal::from(60_000),
///     other_household_employment_per_year: Decimal::from(2_000),
///     children_count: 1,
///     single_parent: false,
///     first_year_employment: false,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyInput {
    /// Unique key identifying this family within a simulation.
    pub id: String,
    /// Display label for the family.
    pub label: String,
    /// Fraction of the total cost and hours borne by this household (0–1).
    ///
    /// Across all families in a simulation the shares are expected to sum
    /// to 1, but the core does not enforce this.
    pub share: Decimal,
    /// Annual reference taxable income (revenu fiscal de référence), in euros.
    pub taxable_income: Decimal,
    /// Annual expenses for other declared home employment (cleaning,
    /// gardening, ...), in euros. Counts toward the tax-credit cap.
    pub other_household_employment_per_year: Decimal,
    /// Number of dependent children in the CAF sense.
    pub children_count: u32,
    /// Single-parent household. Informational only in the current rules.
    pub single_parent: bool,
    /// First year of home employment, which raises the tax-credit caps.
    pub first_year_employment: bool,
}

/// The full set of inputs for one simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationInputs {
    /// Net hourly wage paid to the nanny, in euros.
    pub net_hourly_wage: Decimal,
    /// Contractual hours worked per week (expected domain 0–50).
    pub weekly_hours: Decimal,
    /// The households sharing the contract, in display order.
    pub families: Vec<FamilyInput>,
}

impl SimulationInputs {
    /// Returns the demo scenario: an 11 €/h, 40 h/week nanny shared evenly
    /// between two one-child families.
    pub fn demo() -> Self {
        Self {
            net_hourly_wage: Decimal::from(11),
            weekly_hours: Decimal::from(40),
            families: vec![
                FamilyInput {
                    id: "fam1".to_string(),
                    label: "Famille 1".to_string(),
                    share: Decimal::new(5, 1),
                    taxable_income: Decimal::from(60_000),
                    other_household_employment_per_year: Decimal::from(2_000),
                    children_count: 1,
                    single_parent: false,
                    first_year_employment: false,
                },
                FamilyInput {
                    id: "fam2".to_string(),
                    label: "Famille 2".to_string(),
                    share: Decimal::new(5, 1),
                    taxable_income: Decimal::from(35_000),
                    other_household_employment_per_year: Decimal::from(1_000),
                    children_count: 1,
                    single_parent: false,
                    first_year_employment: false,
                },
            ],
        }
    }
}
