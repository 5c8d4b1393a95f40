//! Configuration types for the simulation rule set.
//!
//! These structures hold every policy constant used by the calculations.
//! They are deserialized from YAML policy files or built from the
//! compiled-in 2025 rule set.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Metadata about a policy rule set.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyMetadata {
    /// The human-readable name of the rule set.
    pub name: String,
    /// The version or applicable year of the rules.
    pub version: String,
    /// The date from which these rules apply.
    pub effective_date: NaiveDate,
    /// URL to the official documentation the values were taken from.
    pub source_url: String,
}

/// Social-contribution rates for household employment payroll.
///
/// These are flat approximations of the URSSAF schedules: one employee rate
/// covering net/gross conversion in both directions, and one employer rate
/// plus the occupational-health contribution and the flat per-hour
/// deduction for home employment.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollRates {
    /// Employer contributions as a fraction of gross pay.
    pub employer_social_rate: Decimal,
    /// Employee contributions as a fraction of gross pay. Must be < 1.
    pub employee_social_rate: Decimal,
    /// Flat home-employment deduction per declared hour, in euros.
    pub employer_deduction_per_hour: Decimal,
    /// Occupational-health contribution as a fraction of gross pay.
    pub health_contribution_rate: Decimal,
    /// Monthly cap on the occupational-health contribution, in euros.
    pub health_contribution_cap: Decimal,
}

/// One tier of the effort-rate table.
///
/// The table maps a children count to the coefficient scaling how strongly
/// household resources reduce the CMG. Tiers are ordered by ascending
/// `max_children`; the final tier leaves `max_children` unset and catches
/// every larger household.
#[derive(Debug, Clone, Deserialize)]
pub struct EffortRateTier {
    /// Upper bound (inclusive) on the children count for this tier, or
    /// `None` for the unbounded final tier.
    #[serde(default)]
    pub max_children: Option<u32>,
    /// The effort rate applied to monthly resources.
    pub rate: Decimal,
}

/// Parameters of the CMG means-tested subsidy.
#[derive(Debug, Clone, Deserialize)]
pub struct CmgRules {
    /// Ceiling on the net hourly wage eligible for the wage subsidy.
    pub hourly_cap: Decimal,
    /// Reference hourly cost, the denominator of the means-testing formula.
    /// Must be nonzero.
    pub reference_hourly_cost: Decimal,
    /// Fraction of employer charges covered by the contribution subsidy.
    pub contribution_subsidy_rate: Decimal,
    /// Statutory floor on countable monthly resources, in euros.
    pub min_monthly_resources: Decimal,
    /// Statutory ceiling on countable monthly resources, in euros.
    pub max_monthly_resources: Decimal,
    /// The effort-rate table, ordered by ascending children count.
    pub effort_rates: Vec<EffortRateTier>,
}

/// Caps for the home-employment tax credit.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxCreditRules {
    /// Base annual expense cap, in euros.
    pub base_cap: Decimal,
    /// Absolute ceiling on the cap after per-child increases, in euros.
    pub max_cap: Decimal,
    /// Base cap during the first year of home employment, in euros.
    pub first_year_base_cap: Decimal,
    /// Absolute first-year ceiling, in euros.
    pub first_year_max_cap: Decimal,
    /// Cap increase per dependent child, in euros.
    pub per_child_increase: Decimal,
    /// Maximum number of children counted for the increase.
    pub children_counted_max: u32,
}

/// A complete, validated policy rule set.
///
/// One immutable `PolicyConfig` is threaded into every computation entry
/// point; there is no ambient or global rule state. Build one with
/// [`PolicyConfig::france_2025`] or load one from YAML with
/// [`crate::config::ConfigLoader`].
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    /// Rule-set metadata.
    metadata: PolicyMetadata,
    /// Payroll contribution rates.
    payroll: PayrollRates,
    /// CMG subsidy parameters.
    cmg: CmgRules,
    /// Tax-credit caps.
    tax_credit: TaxCreditRules,
}

impl PolicyConfig {
    /// Creates a validated `PolicyConfig` from its component parts.
    ///
    /// Effort-rate tiers are sorted by ascending `max_children` with the
    /// unbounded tier last.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPolicy` if:
    /// - the effort-rate table is empty or has no unbounded final tier
    /// - `employee_social_rate` is not strictly below 1 (the net/gross
    ///   conversion would divide by zero)
    /// - `reference_hourly_cost` is zero
    pub fn new(
        metadata: PolicyMetadata,
        payroll: PayrollRates,
        cmg: CmgRules,
        tax_credit: TaxCreditRules,
    ) -> EngineResult<Self> {
        if payroll.employee_social_rate >= Decimal::ONE {
            return Err(EngineError::InvalidPolicy {
                field: "employee_social_rate".to_string(),
                message: format!(
                    "must be below 1, got {}",
                    payroll.employee_social_rate
                ),
            });
        }

        if cmg.reference_hourly_cost == Decimal::ZERO {
            return Err(EngineError::InvalidPolicy {
                field: "reference_hourly_cost".to_string(),
                message: "must be nonzero".to_string(),
            });
        }

        if cmg.effort_rates.is_empty() {
            return Err(EngineError::InvalidPolicy {
                field: "effort_rates".to_string(),
                message: "table is empty".to_string(),
            });
        }

        let mut cmg = cmg;
        cmg.effort_rates.sort_by_key(|tier| match tier.max_children {
            Some(max) => (0, max),
            None => (1, 0),
        });

        let last_is_bounded = cmg
            .effort_rates
            .last()
            .is_some_and(|tier| tier.max_children.is_some());
        if last_is_bounded {
            return Err(EngineError::InvalidPolicy {
                field: "effort_rates".to_string(),
                message: "final tier must leave max_children unset".to_string(),
            });
        }

        Ok(Self {
            metadata,
            payroll,
            cmg,
            tax_credit,
        })
    }

    /// Returns the compiled-in 2025 French rule set.
    ///
    /// Values mirror `config/cmg/2025.yaml` and are simplified
    /// approximations of the published 2025 schedules.
    pub fn france_2025() -> Self {
        Self {
            metadata: PolicyMetadata {
                name: "CMG garde partagée".to_string(),
                version: "2025".to_string(),
                // Static literal, known valid.
                effective_date: NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date"),
                source_url: "https://www.service-public.fr/particuliers/vosdroits/F345"
                    .to_string(),
            },
            payroll: PayrollRates {
                employer_social_rate: Decimal::new(42, 2),
                employee_social_rate: Decimal::new(22, 2),
                employer_deduction_per_hour: Decimal::from(2),
                health_contribution_rate: Decimal::new(27, 3),
                health_contribution_cap: Decimal::from(5),
            },
            cmg: CmgRules {
                hourly_cap: Decimal::from(15),
                reference_hourly_cost: Decimal::new(1038, 2),
                contribution_subsidy_rate: Decimal::new(5, 1),
                // Floor: single-parent RSA amount; ceiling per the 2025 decree.
                min_monthly_resources: Decimal::new(83021, 2),
                max_monthly_resources: Decimal::from(8500),
                effort_rates: vec![
                    EffortRateTier {
                        max_children: Some(1),
                        rate: Decimal::new(1238, 6),
                    },
                    EffortRateTier {
                        max_children: Some(2),
                        rate: Decimal::new(1032, 6),
                    },
                    EffortRateTier {
                        max_children: Some(3),
                        rate: Decimal::new(826, 6),
                    },
                    EffortRateTier {
                        max_children: Some(7),
                        rate: Decimal::new(620, 6),
                    },
                    EffortRateTier {
                        max_children: None,
                        rate: Decimal::new(412, 6),
                    },
                ],
            },
            tax_credit: TaxCreditRules {
                base_cap: Decimal::from(12_000),
                max_cap: Decimal::from(15_000),
                first_year_base_cap: Decimal::from(15_000),
                first_year_max_cap: Decimal::from(18_000),
                per_child_increase: Decimal::from(1_500),
                children_counted_max: 2,
            },
        }
    }

    /// Returns the rule-set metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns the payroll contribution rates.
    pub fn payroll(&self) -> &PayrollRates {
        &self.payroll
    }

    /// Returns the CMG subsidy parameters.
    pub fn cmg(&self) -> &CmgRules {
        &self.cmg
    }

    /// Returns the tax-credit caps.
    pub fn tax_credit(&self) -> &TaxCreditRules {
        &self.tax_credit
    }
}
