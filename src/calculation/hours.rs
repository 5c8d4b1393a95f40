//! Weekly hours decomposition and mensualization.
//!
//! Splits the contractual weekly hours into the three wage bands of the
//! garde partagée convention and converts each band to its monthly
//! equivalent.

use rust_decimal::Decimal;

use crate::models::HoursBreakdown;

/// Weekly hours paid at the normal rate before the +25 % band starts.
pub const WEEKLY_NORMAL_CAP: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Width of the +25 % band (hours 40–48).
pub const WEEKLY_PLUS25_SPAN: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Weekly hours after which the +50 % band starts.
pub const WEEKLY_PLUS50_THRESHOLD: Decimal = Decimal::from_parts(48, 0, 0, false, 0);

/// Width of the +50 % band (hours 48–50).
pub const WEEKLY_PLUS50_SPAN: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Weeks per year used for mensualization.
pub const WEEKS_PER_YEAR: Decimal = Decimal::from_parts(52, 0, 0, false, 0);

/// Months per year used for mensualization and annualization.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Decomposes weekly hours into wage bands and mensualizes each band.
///
/// Band split: up to 40 h at the normal rate, the next 8 h at +25 %, the
/// next 2 h at +50 %. Each weekly band is converted to a monthly figure as
/// weekly × 52 ÷ 12, rounded up to the next whole hour independently per
/// band. The per-band ceiling favors the worker and is the convention used
/// by the mensualization references; it must not be replaced by a single
/// rounding of the weekly total.
///
/// This is a total function: inputs above 50 h simply saturate the upper
/// bands (the +50 % band never exceeds 2 h), and inputs are not otherwise
/// validated.
///
/// # Examples
///
/// ```
/// use cmg_engine::calculation::compute_hours_breakdown;
/// use rust_decimal::Decimal;
///
/// let hours = compute_hours_breakdown(Decimal::from(45));
/// assert_eq!(hours.weekly_normal, Decimal::from(40));
/// assert_eq!(hours.weekly_plus25, Decimal::from(5));
/// assert_eq!(hours.weekly_plus50, Decimal::ZERO);
/// ```
pub fn compute_hours_breakdown(weekly_hours: Decimal) -> HoursBreakdown {
    let weekly_normal = weekly_hours.min(WEEKLY_NORMAL_CAP);
    let weekly_plus25 = (weekly_hours - WEEKLY_NORMAL_CAP)
        .max(Decimal::ZERO)
        .min(WEEKLY_PLUS25_SPAN);
    let weekly_plus50 = (weekly_hours - WEEKLY_PLUS50_THRESHOLD)
        .max(Decimal::ZERO)
        .min(WEEKLY_PLUS50_SPAN);

    let factor = WEEKS_PER_YEAR / MONTHS_PER_YEAR;

    let monthly_normal = (weekly_normal * factor).ceil();
    let monthly_plus25 = (weekly_plus25 * factor).ceil();
    let monthly_plus50 = (weekly_plus50 * factor).ceil();

    let monthly_total = monthly_normal + monthly_plus25 + monthly_plus50;

    HoursBreakdown {
        weekly_normal,
        weekly_plus25,
        weekly_plus50,
        monthly_normal,
        monthly_plus25,
        monthly_plus50,
        monthly_total,
    }
}
