//! Random letters and CJK ideographs.

use crate::error::GenerationError;
use crate::random::RandomSource;
use crate::selection;

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// First code point of the CJK Unified Ideographs block.
pub const CJK_START: u32 = 0x4E00;

/// Number of code points drawn from, starting at [`CJK_START`].
pub const CJK_SPAN: usize = 0x51A5;

/// Returns one lowercase ASCII letter.
///
/// # Errors
///
/// Propagates failures from the random source.
pub fn random_char<R>(random: &mut R) -> Result<char, GenerationError>
where
    R: RandomSource + ?Sized,
{
    selection::choose(random, &ALPHABET[..]).map(|letter| char::from(*letter))
}

/// Returns between `min_len` and `max_len` lowercase letters, inclusive.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidRange`] when either bound is negative or
/// `max_len < min_len`.
///
/// # Example
///
/// ```
/// use data_factory::SeededRandom;
/// use data_factory::generators::text::random_chars;
///
/// let mut random = SeededRandom::new(11);
/// let value = random_chars(&mut random, 4, 4).expect("valid range");
///
/// assert_eq!(value.len(), 4);
/// assert!(value.chars().all(|c| c.is_ascii_lowercase()));
/// ```
pub fn random_chars<R>(random: &mut R, min_len: i32, max_len: i32) -> Result<String, GenerationError>
where
    R: RandomSource + ?Sized,
{
    let length = pick_length(random, min_len, max_len)?;
    (0..length).map(|_| random_char(random)).collect()
}

/// Returns one ideograph from the CJK Unified Ideographs block.
///
/// # Errors
///
/// Propagates failures from the random source.
pub fn random_unicode_char<R>(random: &mut R) -> Result<char, GenerationError>
where
    R: RandomSource + ?Sized,
{
    let offset = random.next_int(CJK_SPAN)?;
    u32::try_from(offset)
        .ok()
        .and_then(|offset_u32| char::from_u32(CJK_START + offset_u32))
        .ok_or_else(|| GenerationError::invalid_range(format!("offset {offset} outside block")))
}

/// Returns between `min_len` and `max_len` ideographs, inclusive.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidRange`] when either bound is negative or
/// `max_len < min_len`.
pub fn random_unicode_chars<R>(
    random: &mut R,
    min_len: i32,
    max_len: i32,
) -> Result<String, GenerationError>
where
    R: RandomSource + ?Sized,
{
    let length = pick_length(random, min_len, max_len)?;
    (0..length).map(|_| random_unicode_char(random)).collect()
}

/// Validates a length range and picks a length uniformly within it.
///
/// Equal bounds return the bound without drawing.
fn pick_length<R>(random: &mut R, min_len: i32, max_len: i32) -> Result<usize, GenerationError>
where
    R: RandomSource + ?Sized,
{
    let lower = usize::try_from(min_len).map_err(|_| {
        GenerationError::invalid_range("minimum length must be a non-negative number")
    })?;
    let upper = usize::try_from(max_len).map_err(|_| {
        GenerationError::invalid_range("maximum length must be a non-negative number")
    })?;
    if upper < lower {
        return Err(GenerationError::invalid_range(format!(
            "minimum length must not exceed maximum length (min={min_len}, max={max_len})"
        )));
    }
    if upper == lower {
        return Ok(lower);
    }

    Ok(lower + random.next_int(upper - lower + 1)?)
}

#[cfg(test)]
mod tests {
    //! Covers length validation and character ranges.

    use rstest::{fixture, rstest};

    use super::*;
    use crate::random::SeededRandom;

    #[fixture]
    fn random() -> SeededRandom {
        SeededRandom::new(2026)
    }

    fn is_cjk(c: char) -> bool {
        let offset = u32::from(c).checked_sub(CJK_START);
        offset.is_some_and(|value| usize::try_from(value).is_ok_and(|index| index < CJK_SPAN))
    }

    #[rstest]
    fn random_char_is_lowercase(mut random: SeededRandom) {
        for _ in 0..500 {
            let c = random_char(&mut random).expect("char");
            assert!(c.is_ascii_lowercase(), "unexpected char {c:?}");
        }
    }

    #[rstest]
    fn random_char_covers_the_alphabet(mut random: SeededRandom) {
        let seen: std::collections::BTreeSet<char> = (0..2_000)
            .map(|_| random_char(&mut random).expect("char"))
            .collect();
        assert_eq!(seen.len(), 26);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(17)]
    #[case(64)]
    fn equal_bounds_give_exact_length(mut random: SeededRandom, #[case] length: i32) {
        let value = random_chars(&mut random, length, length).expect("valid range");
        assert_eq!(value.chars().count(), usize::try_from(length).expect("non-negative"));
        assert!(value.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[rstest]
    fn lengths_stay_within_inclusive_bounds(mut random: SeededRandom) {
        let lengths: std::collections::BTreeSet<usize> = (0..500)
            .map(|_| random_chars(&mut random, 2, 5).expect("valid range").len())
            .collect();
        assert_eq!(lengths.into_iter().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
    }

    #[rstest]
    #[case::negative_min(-1, 5)]
    #[case::negative_max(0, -1)]
    #[case::inverted(6, 5)]
    fn rejects_invalid_ranges(mut random: SeededRandom, #[case] min: i32, #[case] max: i32) {
        assert!(matches!(
            random_chars(&mut random, min, max),
            Err(GenerationError::InvalidRange { .. })
        ));
        assert!(matches!(
            random_unicode_chars(&mut random, min, max),
            Err(GenerationError::InvalidRange { .. })
        ));
    }

    #[test]
    fn inverted_range_message_names_both_bounds() {
        let mut random = SeededRandom::default();
        let err = random_chars(&mut random, 9, 3).expect_err("inverted");
        assert_eq!(
            err.to_string(),
            "invalid range: minimum length must not exceed maximum length (min=9, max=3)"
        );
    }

    #[rstest]
    fn unicode_chars_come_from_the_cjk_block(mut random: SeededRandom) {
        let value = random_unicode_chars(&mut random, 50, 50).expect("valid range");
        assert_eq!(value.chars().count(), 50);
        assert!(value.chars().all(is_cjk), "unexpected value {value}");
    }

    #[rstest]
    fn unicode_lengths_stay_within_bounds(mut random: SeededRandom) {
        for _ in 0..100 {
            let count = random_unicode_chars(&mut random, 2, 50)
                .expect("valid range")
                .chars()
                .count();
            assert!((2..=50).contains(&count), "length {count}");
        }
    }
}
