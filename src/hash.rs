//! The string hash which decides where a word lives in a [`crate::Table`].
//!
//! Tables don't use a `BuildHasher`: the slot a word lands in is part of the table's observable
//! behavior (it decides which words collide and so how probe sequences look), so the hash must be
//! the same on every platform and in every process.

const MULTIPLIER: i32 = 41;

/// Maps `word` to a bucket index in `0..capacity`.
///
/// The word's characters are folded left to right as `hash = 41 * hash + ch` using wrapping
/// 32-bit signed arithmetic. The folded value is then reduced modulo `capacity`, adding
/// `capacity` back if the remainder is negative.
///
/// `capacity` must be non-zero.
pub fn hash(word: &str, capacity: usize) -> usize {
    debug_assert!(capacity > 0, "cannot hash into a table with no slots");

    let folded = word.chars().fold(0i32, |hash, ch| {
        hash.wrapping_mul(MULTIPLIER)
            .wrapping_add(u32::from(ch) as i32)
    });

    // The remainder of a negative fold is negative: `rem_euclid` adds `capacity` back in that
    // case. Widening to i64 keeps capacities above `i32::MAX` exact.
    i64::from(folded).rem_euclid(capacity as i64) as usize
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_word_hashes_to_zero() {
        assert_eq!(0, hash("", 17));
        assert_eq!(0, hash("", 37));
    }

    #[test]
    fn single_characters_hash_to_their_codepoint() {
        // 'a' is 97 and 97 % 17 = 12.
        assert_eq!(12, hash("a", 17));
        assert_eq!(23, hash("a", 37));
        // 'r' is 114 and collides with 'a' in a table of 17.
        assert_eq!(12, hash("r", 17));
    }

    #[test]
    fn fold_is_polynomial() {
        // 41 * 97 + 98 = 4075
        assert_eq!(4075 % 17, hash("ab", 17));
        // 41 * (41 * 99 + 97) + 116 = 170512
        assert_eq!(170512 % 37, hash("cat", 37));
    }

    #[test]
    fn wrapped_negative_fold_is_normalized() {
        // This word overflows i32 and folds to -1283608081.
        assert_eq!(5, hash("antidisestablishment", 17));
        assert_eq!(26, hash("antidisestablishment", 37));
    }

    #[test]
    fn non_ascii_characters_use_their_codepoint() {
        // 'ï' is U+00EF. Folding "naïve" gives 317925745.
        assert_eq!(7, hash("naïve", 17));
        assert_eq!(26, hash("naïve", 37));
    }

    #[test]
    fn hash_is_always_in_bounds() {
        for capacity in [1, 2, 3, 17, 37, 79, 1_000_003] {
            for word in ["", "a", "spellchecking", "antidisestablishment", "hello world"] {
                assert!(hash(word, capacity) < capacity);
            }
        }
    }
}
