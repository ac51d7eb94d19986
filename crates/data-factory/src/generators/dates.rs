//! Calendar dates and random instants.
//!
//! Dates are [`NaiveDateTime`] values: wall-clock time without a zone, so
//! day offsets never shift the time of day.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use crate::error::GenerationError;
use crate::random::RandomSource;

/// Days either side of the epoch covered by [`birth_date`].
pub const BIRTH_DATE_SPREAD_DAYS: i32 = 15 * 365;

/// Builds a date at midnight. `month` is one-based.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidDate`] when the date does not exist.
///
/// # Example
///
/// ```
/// use data_factory::generators::dates::date;
///
/// let value = date(2020, 1, 15).expect("valid date");
/// assert_eq!(value.to_string(), "2020-01-15 00:00:00");
/// ```
pub fn date(year: i32, month: u32, day: u32) -> Result<NaiveDateTime, GenerationError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|value| value.and_hms_opt(0, 0, 0))
        .ok_or(GenerationError::InvalidDate { year, month, day })
}

/// Offsets `base` by a whole number of days drawn from
/// `[min_days, max_days)`.
///
/// The upper bound is exclusive. Equal bounds return `base + min_days`
/// without drawing. The time of day of `base` is kept.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidRange`] when `max_days < min_days` or
/// the result is outside the representable range.
pub fn date_offset<R>(
    random: &mut R,
    base: NaiveDateTime,
    min_days: i32,
    max_days: i32,
) -> Result<NaiveDateTime, GenerationError>
where
    R: RandomSource + ?Sized,
{
    if max_days < min_days {
        return Err(GenerationError::invalid_range(format!(
            "minimum days must not exceed maximum days (min={min_days}, max={max_days})"
        )));
    }

    let offset = if max_days == min_days {
        i64::from(min_days)
    } else {
        let span = usize::try_from(i64::from(max_days) - i64::from(min_days))
            .map_err(|_| GenerationError::invalid_range("day span exceeds platform range"))?;
        let draw = i64::try_from(random.next_int(span)?)
            .map_err(|_| GenerationError::invalid_range("day offset exceeds i64"))?;
        i64::from(min_days) + draw
    };

    TimeDelta::try_days(offset)
        .and_then(|delta| base.checked_add_signed(delta))
        .ok_or_else(|| GenerationError::invalid_range(format!("{base} + {offset} days overflows")))
}

/// Returns an instant between `min` and `max` at one-second resolution.
///
/// The whole-second span is scaled by a `[0, 1)` draw, truncated, and added
/// to `min`, so sub-second precision of `min` is kept and `max` itself is
/// only returned when the bounds are equal.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidRange`] when `max < min`.
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::float_arithmetic,
    reason = "the span is scaled by a unit-interval draw and truncated to whole seconds"
)]
pub fn date_between<R>(
    random: &mut R,
    min: NaiveDateTime,
    max: NaiveDateTime,
) -> Result<NaiveDateTime, GenerationError>
where
    R: RandomSource + ?Sized,
{
    if max < min {
        return Err(GenerationError::invalid_range(format!(
            "minimum date must not be after maximum date (min={min}, max={max})"
        )));
    }

    let span_seconds = (max - min).num_seconds();
    let offset_seconds = (random.next_double() * span_seconds as f64) as i64;

    TimeDelta::try_seconds(offset_seconds)
        .and_then(|delta| min.checked_add_signed(delta))
        .ok_or_else(|| GenerationError::invalid_range("instant overflows"))
}

/// Returns a date within fifteen years either side of 1970-01-01.
///
/// # Errors
///
/// Propagates failures from the random source.
pub fn birth_date<R>(random: &mut R) -> Result<NaiveDateTime, GenerationError>
where
    R: RandomSource + ?Sized,
{
    let epoch = date(1970, 1, 1)?;
    date_offset(random, epoch, -BIRTH_DATE_SPREAD_DAYS, BIRTH_DATE_SPREAD_DAYS)
}
