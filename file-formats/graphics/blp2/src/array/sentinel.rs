//! Fixed length arrays whose unused tail is filled with a sentinel value

use super::error::Error;

/// How the end of the used part of a sentinel array is detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum SentinelMode {
    /// The array ends at the first sentinel
    #[default]
    Strict,
    /// One sentinel may appear inside the used part, the array ends at the
    /// second sentinel. If there is no second sentinel the whole array is
    /// used.
    LegacyTolerant,
}

/// Trim a fixed array down to its used part.
pub fn decode_sentinel_array<T>(values: &[T], sentinel: &T, mode: SentinelMode) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let first = values.iter().position(|v| v == sentinel);
    let end = match (mode, first) {
        (_, None) => None,
        (SentinelMode::Strict, Some(first)) => Some(first),
        (SentinelMode::LegacyTolerant, Some(first)) => values[first + 1..]
            .iter()
            .position(|v| v == sentinel)
            .map(|second| first + 1 + second),
    };
    let end = end.unwrap_or(values.len());
    values[..end].to_vec()
}

/// Pad the used part back to the fixed length with the sentinel.
pub fn encode_sentinel_array<T>(values: &[T], length: usize, sentinel: &T) -> Result<Vec<T>, Error>
where
    T: Clone,
{
    if values.len() > length {
        return Err(Error::TooManyEntries {
            len: values.len(),
            capacity: length,
        });
    }
    let mut array = Vec::with_capacity(length);
    array.extend_from_slice(values);
    array.resize(length, sentinel.clone());
    Ok(array)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_strict_stops_at_first_sentinel() {
        let table = [148, 212, 0, 0, 0];
        assert_eq!(
            decode_sentinel_array(&table, &0, SentinelMode::Strict),
            vec![148, 212]
        );
        assert_eq!(
            decode_sentinel_array(&[0u32, 5, 0], &0, SentinelMode::Strict),
            Vec::<u32>::new()
        );
        assert_eq!(
            decode_sentinel_array(&[1, 2, 3], &0, SentinelMode::Strict),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_legacy_keeps_one_sentinel() {
        let table = [148, 0, 500, 0, 0];
        assert_eq!(
            decode_sentinel_array(&table, &0, SentinelMode::LegacyTolerant),
            vec![148, 0, 500]
        );
        // A lone sentinel keeps the whole array
        assert_eq!(
            decode_sentinel_array(&[3, 0, 4], &0, SentinelMode::LegacyTolerant),
            vec![3, 0, 4]
        );
    }

    #[test]
    fn test_legacy_with_composite_values() {
        let palette = [[1, 2, 3, 0], [0, 0, 0, 0], [4, 5, 6, 0], [0, 0, 0, 0]];
        let used = decode_sentinel_array(&palette, &[0; 4], SentinelMode::LegacyTolerant);
        assert_eq!(used.len(), 3);
    }

    #[test]
    fn test_encode_pads_with_sentinel() {
        assert_eq!(
            encode_sentinel_array(&[148u32, 212], 4, &0).unwrap(),
            vec![148, 212, 0, 0]
        );
        assert_eq!(
            encode_sentinel_array(&[1u32; 5], 4, &0),
            Err(Error::TooManyEntries {
                len: 5,
                capacity: 4
            })
        );
    }

    proptest! {
        #[test]
        fn prop_offsets_survive_round_trip(offsets in proptest::collection::vec(1u32.., 0..=16)) {
            let array = encode_sentinel_array(&offsets, 16, &0).unwrap();
            prop_assert_eq!(array.len(), 16);
            let decoded = decode_sentinel_array(&array, &0, SentinelMode::Strict);
            prop_assert_eq!(decoded, offsets);
        }
    }
}
