use core::{hash::BuildHasher, iter};

use hashbrown::hash_table::{Entry, HashTable};

use crate::{
    alloc::{string::String, vec::Vec},
    Table,
};

/// The characters tried when suggesting a forgotten character, in the order they are tried.
///
/// Lowercase ASCII letters, then uppercase ASCII letters, then the apostrophe: the characters
/// that survive the usual "strip everything but letters and apostrophes" normalization of input
/// words.
pub const ALPHABET: [char; 53] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L',
    'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '\'',
];

pub(crate) struct Suggester<'a, S: BuildHasher> {
    table: &'a Table,
    build_hasher: S,
}

impl<'a, S: BuildHasher> Suggester<'a, S> {
    pub fn new(table: &'a Table, build_hasher: S) -> Self {
        Self {
            table,
            build_hasher,
        }
    }

    pub fn suggest(&self, word: &str, out: &mut Vec<String>) {
        out.clear();
        log::trace!("suggesting corrections for {word:?}");

        let mut found = Found {
            words: out,
            index: HashTable::new(),
        };

        // Positions are character positions, never byte offsets into a multi-byte character.
        self.forgotten_char_suggest(word, &mut found);
        self.extra_char_suggest(word, &mut found);
        self.adjacent_swap_suggest(word, &mut found);

        log::trace!("found {} suggestions for {word:?}", found.words.len());
    }

    /// Adds the word to the suggestions if it's in the table and hasn't been suggested yet.
    fn add_suggestion_if_correct(&self, word: &str, found: &mut Found) -> bool {
        if !self.table.contains(word) {
            return false;
        }

        let Found { words, index } = found;
        let hash = self.build_hasher.hash_one(word);
        match index.entry(
            hash,
            |&idx| words[idx] == word,
            |&idx| self.build_hasher.hash_one(words[idx].as_str()),
        ) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(words.len());
                words.push(String::from(word));
                true
            }
        }
    }

    /// Suggests edits to the word which add one character of [`ALPHABET`], at every position
    /// including both ends.
    ///
    /// You might skip a key: "at" for "cat".
    fn forgotten_char_suggest(&self, word: &str, found: &mut Found) {
        let mut scratch = String::with_capacity(word.len() + 1);
        scratch.push_str(word);

        let positions = word
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(iter::once(word.len()));
        for idx in positions {
            for ch in ALPHABET {
                scratch.insert(idx, ch);
                self.add_suggestion_if_correct(&scratch, found);
                scratch.remove(idx);
            }
        }

        debug_assert_eq!(&scratch, word);
    }

    /// Suggests edits to the word to drop any character.
    ///
    /// Intuitively you might double-tap a character key on your keyboard.
    fn extra_char_suggest(&self, word: &str, found: &mut Found) {
        let mut scratch = String::from(word);

        for (idx, ch) in word.char_indices() {
            scratch.remove(idx);
            self.add_suggestion_if_correct(&scratch, found);
            scratch.insert(idx, ch);
        }

        debug_assert_eq!(&scratch, word);
    }

    /// Suggests edits to the word which swap two neighboring characters, for every pair.
    ///
    /// "cta" for "cat".
    fn adjacent_swap_suggest(&self, word: &str, found: &mut Found) {
        let mut scratch = String::from(word);

        let mut chars = word.char_indices().peekable();
        while let Some((idx, first)) = chars.next() {
            let Some(&(_, second)) = chars.peek() else {
                break;
            };
            // Swapping equal characters gives back the word itself.
            if first == second {
                continue;
            }

            // Move `first` from before `second` to after it.
            let swapped = idx + second.len_utf8();
            scratch.remove(idx);
            scratch.insert(swapped, first);
            self.add_suggestion_if_correct(&scratch, found);
            scratch.remove(swapped);
            scratch.insert(idx, first);
        }

        debug_assert_eq!(&scratch, word);
    }
}

/// Suggestions collected so far, in the order they were found.
struct Found<'out> {
    words: &'out mut Vec<String>,
    /// Positions in `words`, hashed by the word at that position.
    index: HashTable<usize>,
}
