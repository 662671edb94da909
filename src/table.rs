//! The word table: a set of strings stored in an open-addressing hash table.
//!
//! Words live directly in a prime-length array of slots. A word's home is the bucket given
//! by [`crate::hash::hash`]. When that slot is taken by another word the probe moves on by
//! increasing odd offsets (1, 3, 5, ...) so that the `i`th probe lands `i²` slots past the home
//! bucket. With a prime length and at most half of the slots in use, the first half of a probe
//! sequence never visits the same slot twice, so a probe always finds either the word or an
//! empty slot.
//!
//! Removing a word can't empty its slot: another word's probe sequence may pass through it. The
//! slot becomes a _tombstone_ instead, which keeps the removed word. Probes walk past tombstones
//! of other words and stop at a tombstone of the word they look for, so re-inserting a removed
//! word revives its old slot.
//!
//! Tombstones are only cleared by a rebuild. The table counts every successful insertion since
//! the last rebuild in `occupied`, including revivals of tombstones, and rebuilds once that
//! count exceeds half of the capacity. A rebuild moves the live words into a fresh array of
//! (at least) twice the length and drops the tombstones.

use core::{fmt, hash::BuildHasher, iter::FusedIterator, mem, slice};

use crate::{
    alloc::{boxed::Box, string::String, vec::Vec},
    hash::hash,
    prime::next_prime,
    suggester::Suggester,
    TableError,
};

/// The capacity of a table created with [`Table::new`].
pub const DEFAULT_CAPACITY: usize = 17;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
enum Slot {
    /// Never written since the last rebuild. Ends every probe sequence which reaches it.
    #[default]
    Empty,
    /// Held a word which was removed. The word is kept so that probes for it stop here.
    Tombstone(Box<str>),
    Live(Box<str>),
}

impl Slot {
    fn word(&self) -> Option<&str> {
        match self {
            Self::Empty => None,
            Self::Tombstone(word) | Self::Live(word) => Some(word),
        }
    }

    fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }
}

/// A set of words with quadratic probing, lazy deletion and automatic growth.
///
/// The capacity is always prime. Once more than half of the slots have been used since the
/// last rebuild, counting slots of removed words which were used again, the table rebuilds
/// itself with at least twice as many slots.
#[derive(Clone)]
pub struct Table {
    slots: Vec<Slot>,
    /// Successful insertions since the last rebuild or `make_empty`.
    ///
    /// This is an upper bound on the number of non-empty slots. Reviving a tombstone counts as
    /// an insertion even though it doesn't use up an empty slot.
    occupied: usize,
    /// Number of live slots.
    size: usize,
}

impl Table {
    /// Creates an empty table with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty table with at least `capacity` slots.
    ///
    /// The capacity is rounded up to the next odd prime.
    ///
    /// # Panics
    ///
    /// Panics if the slot array can't be allocated. See [`Table::try_with_capacity`].
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(table) => table,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates an empty table with at least `capacity` slots, returning an error if the slot
    /// array can't be sized or allocated.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, TableError> {
        let capacity = next_prime(capacity.max(1)).ok_or(TableError::CapacityOverflow)?;

        Ok(Self {
            slots: allocate_slots(capacity)?,
            occupied: 0,
            size: 0,
        })
    }

    /// Inserts a word into the table.
    ///
    /// Returns `true` if the word was inserted and `false` if it was already in the table, in
    /// which case the table is not changed.
    ///
    /// # Panics
    ///
    /// Panics if the insertion triggers a rebuild and the bigger slot array can't be allocated.
    /// See [`Table::try_insert`].
    pub fn insert(&mut self, word: &str) -> bool {
        match self.try_insert(word) {
            Ok(inserted) => inserted,
            Err(err) => panic!("{err}"),
        }
    }

    /// Inserts a word into the table, returning an error if the insertion would trigger a
    /// rebuild and the bigger slot array can't be sized or allocated.
    ///
    /// On error the table is left unchanged and the word is not inserted.
    pub fn try_insert(&mut self, word: &str) -> Result<bool, TableError> {
        let pos = self.find_pos(word);
        if self.slots[pos].is_live() {
            return Ok(false);
        }

        // The rebuild happens after the insertion below but its slots are allocated first:
        // nothing is written until allocation has succeeded.
        let grown = if self.occupied + 1 > self.capacity() / 2 {
            let capacity = grown_capacity(self.capacity())?;
            Some(allocate_slots(capacity)?)
        } else {
            None
        };

        let slot = &mut self.slots[pos];
        let stored = match mem::take(slot) {
            // Revive the tombstone, reusing its allocation.
            Slot::Tombstone(stored) => stored,
            _ => Box::from(word),
        };
        *slot = Slot::Live(stored);
        self.size += 1;
        self.occupied += 1;

        if let Some(slots) = grown {
            self.rebuild(slots);
        }

        Ok(true)
    }

    /// Removes a word from the table.
    ///
    /// Returns `true` if the word was in the table. The word's slot becomes a tombstone until
    /// the next rebuild.
    pub fn remove(&mut self, word: &str) -> bool {
        let pos = self.find_pos(word);
        let slot = &mut self.slots[pos];
        match mem::take(slot) {
            Slot::Live(stored) => {
                *slot = Slot::Tombstone(stored);
                self.size -= 1;
                true
            }
            other => {
                *slot = other;
                false
            }
        }
    }

    /// Checks whether the word is in the table.
    pub fn contains(&self, word: &str) -> bool {
        self.slots[self.find_pos(word)].is_live()
    }

    /// The number of words in the table.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the table holds no words. Tombstones don't count.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The number of slots in the table. This is always prime and never shrinks.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Removes every word and tombstone from the table. The capacity is kept.
    pub fn make_empty(&mut self) {
        self.slots.fill(Slot::Empty);
        self.occupied = 0;
        self.size = 0;
    }

    /// Iterates over the words in the table in slot order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.slots.iter(),
            remaining: self.size,
        }
    }

    /// Suggests corrections for a word which is not in the table.
    ///
    /// `out` is cleared and then filled with every word in the table which is one edit away
    /// from `word`: first the words made by inserting a character of [`crate::ALPHABET`] (by
    /// position, then by alphabet order), then by deleting a character (by position), then by
    /// swapping two adjacent characters (by position). Each word is suggested once.
    ///
    /// `word` itself is never checked: callers should only ask for suggestions after
    /// [`Table::contains`] has returned `false`.
    #[cfg(feature = "default-hasher")]
    pub fn suggest(&self, word: &str, out: &mut Vec<String>) {
        self.suggest_with_hasher(word, out, crate::DefaultHashBuilder::new())
    }

    /// Same as [`Table::suggest`] but the set used to de-duplicate suggestions hashes with
    /// `build_hasher`.
    pub fn suggest_with_hasher<S: BuildHasher>(
        &self,
        word: &str,
        out: &mut Vec<String>,
        build_hasher: S,
    ) {
        Suggester::new(self, build_hasher).suggest(word, out)
    }

    /// Finds the slot where a probe for `word` ends: the slot holding the word (live or
    /// tombstoned) or the first empty slot on its probe sequence.
    fn find_pos(&self, word: &str) -> usize {
        let capacity = self.capacity();
        let mut pos = hash(word, capacity);
        let mut offset = 1;

        loop {
            match self.slots[pos].word() {
                None => return pos,
                Some(stored) if stored == word => return pos,
                Some(_) => (),
            }

            pos += offset;
            offset += 2;
            // At most half of the slots are in use so the probe ends before `offset` reaches
            // `capacity`. One subtraction is enough to wrap around.
            if pos >= capacity {
                pos -= capacity;
            }
            debug_assert!(pos < capacity);
        }
    }

    /// Replaces the slot array with `slots` and moves every live word into it. Tombstones are
    /// dropped.
    fn rebuild(&mut self, slots: Vec<Slot>) {
        let old = mem::replace(&mut self.slots, slots);
        let old_capacity = old.len();
        self.occupied = 0;
        self.size = 0;

        // The old array was at most one slot over half full and the new one is at least twice
        // as long, so the new array ends at most half full.
        for slot in old {
            if let Slot::Live(word) = slot {
                let pos = self.find_pos(&word);
                debug_assert_eq!(self.slots[pos], Slot::Empty);
                self.slots[pos] = Slot::Live(word);
                self.size += 1;
                self.occupied += 1;
            }
        }
        debug_assert!(self.occupied <= self.capacity() / 2);

        log::debug!(
            "rebuilt table from {old_capacity} to {} slots with {} live words",
            self.capacity(),
            self.size
        );
    }
}

/// The capacity a table of `capacity` slots grows to.
fn grown_capacity(capacity: usize) -> Result<usize, TableError> {
    capacity
        .checked_mul(2)
        .and_then(next_prime)
        .ok_or(TableError::CapacityOverflow)
}

fn allocate_slots(capacity: usize) -> Result<Vec<Slot>, TableError> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|source| TableError::AllocError { capacity, source })?;
    slots.resize_with(capacity, Slot::default);
    Ok(slots)
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

impl<'a> Extend<&'a str> for Table {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}

impl<'a> FromIterator<&'a str> for Table {
    fn from_iter<I: IntoIterator<Item = &'a str>>(words: I) -> Self {
        let mut table = Self::new();
        table.extend(words);
        table
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the words of a [`Table`], created by [`Table::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: slice::Iter<'a, Slot>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.inner.by_ref() {
            if let Slot::Live(word) = slot {
                self.remaining -= 1;
                return Some(word);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl FusedIterator for Iter<'_> {}
