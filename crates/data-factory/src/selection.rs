//! Probability-gated selection over candidate lists.
//!
//! Every function validates the candidate list before consulting the gate,
//! so an absent or empty list is reported even when the probability would
//! have skipped selection.

use crate::error::GenerationError;
use crate::random::RandomSource;

/// Probability that always passes the gate.
pub const ALWAYS: i32 = 100;

const GATE_BOUND: usize = 100;

/// Returns `true` with a `probability` percent chance.
///
/// Draws once from `[0, 100)` and passes when the draw is below
/// `probability`; values of 100 or more always pass and values of zero or
/// less never do.
///
/// # Errors
///
/// Propagates failures from the random source.
pub fn chance<R>(random: &mut R, probability: i32) -> Result<bool, GenerationError>
where
    R: RandomSource + ?Sized,
{
    let draw = random.next_int(GATE_BOUND)?;
    Ok(i64::try_from(draw).is_ok_and(|value| value < i64::from(probability)))
}

/// Picks one element uniformly.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidInput`] when `items` is absent or empty.
///
/// # Example
///
/// ```
/// use data_factory::{SeededRandom, selection};
///
/// let mut random = SeededRandom::new(3);
/// let colours = ["red", "green", "blue"];
/// let picked = selection::choose(&mut random, &colours[..]).expect("non-empty");
///
/// assert!(colours.contains(picked));
/// ```
pub fn choose<'a, R, T>(
    random: &mut R,
    items: impl Into<Option<&'a [T]>>,
) -> Result<&'a T, GenerationError>
where
    R: RandomSource + ?Sized,
{
    let candidates = validate(items.into())?;
    pick(random, candidates)
}

/// Picks one element with a `probability` percent chance, otherwise `None`.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidInput`] when `items` is absent or empty,
/// regardless of `probability`.
pub fn choose_with_probability<'a, R, T>(
    random: &mut R,
    items: impl Into<Option<&'a [T]>>,
    probability: i32,
) -> Result<Option<&'a T>, GenerationError>
where
    R: RandomSource + ?Sized,
{
    let candidates = validate(items.into())?;
    if chance(random, probability)? {
        pick(random, candidates).map(Some)
    } else {
        Ok(None)
    }
}

/// Picks one element with a `probability` percent chance, otherwise returns
/// `default`.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidInput`] when `items` is absent or empty,
/// regardless of `probability`.
///
/// # Example
///
/// ```
/// use data_factory::{SeededRandom, selection};
///
/// let mut random = SeededRandom::new(3);
/// let suffixes = ["Jr.", "Sr."];
/// let picked = selection::choose_or(&mut random, &suffixes[..], 0, &"")
///     .expect("non-empty");
///
/// assert_eq!(*picked, "");
/// ```
pub fn choose_or<'a, R, T>(
    random: &mut R,
    items: impl Into<Option<&'a [T]>>,
    probability: i32,
    default: &'a T,
) -> Result<&'a T, GenerationError>
where
    R: RandomSource + ?Sized,
{
    choose_with_probability(random, items, probability).map(|picked| picked.unwrap_or(default))
}

fn validate<T>(items: Option<&[T]>) -> Result<&[T], GenerationError> {
    let candidates = items.ok_or(GenerationError::InvalidInput {
        message: "list cannot be null",
    })?;
    if candidates.is_empty() {
        return Err(GenerationError::InvalidInput {
            message: "list cannot be empty",
        });
    }
    Ok(candidates)
}

fn pick<'a, R, T>(random: &mut R, candidates: &'a [T]) -> Result<&'a T, GenerationError>
where
    R: RandomSource + ?Sized,
{
    let index = random.next_int(candidates.len())?;
    candidates
        .get(index)
        .ok_or_else(|| GenerationError::invalid_range(format!("index {index} out of bounds")))
}
