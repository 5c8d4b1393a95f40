//! Effort-rate lookup on the children-count tier table.

use rust_decimal::Decimal;

use crate::config::EffortRateTier;

/// Looks up the effort rate for a household's children count.
///
/// The table is consulted in order; the first tier whose `max_children`
/// bound covers the count wins, and an unbounded tier matches any count.
/// Tables built through [`crate::config::PolicyConfig::new`] are ordered
/// and end with an unbounded tier, so the lookup always resolves. Called
/// on an empty slice it returns zero, keeping the pipeline total.
///
/// # Example
///
/// ```
/// use cmg_engine::calculation::get_effort_rate;
/// use cmg_engine::config::PolicyConfig;
/// use rust_decimal::Decimal;
///
/// let policy = PolicyConfig::france_2025();
/// let rate = get_effort_rate(2, &policy.cmg().effort_rates);
/// assert_eq!(rate, Decimal::new(1032, 6));
/// ```
pub fn get_effort_rate(children_count: u32, tiers: &[EffortRateTier]) -> Decimal {
    tiers
        .iter()
        .find(|tier| match tier.max_children {
            Some(max) => children_count <= max,
            None => true,
        })
        .map(|tier| tier.rate)
        .unwrap_or(Decimal::ZERO)
}
