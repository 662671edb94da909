use probebook::Table;

#[cfg(feature = "default-hasher")]
type HashSet<T> = hashbrown::HashSet<T, std::hash::BuildHasherDefault<ahash::AHasher>>;

/// A small xorshift generator so that the operation sequence is the same on every run.
#[cfg(feature = "default-hasher")]
struct Rng(u64);

#[cfg(feature = "default-hasher")]
impl Rng {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

#[test]
fn scenario_membership() {
    let mut table = Table::new();
    assert!(table.insert("cat"));
    assert!(table.insert("bat"));
    assert!(table.insert("cats"));

    assert!(table.contains("cat"));
    assert!(!table.contains("dog"));
}

#[cfg(feature = "default-hasher")]
#[test]
fn scenario_suggestions() {
    let table: Table = ["cat"].into_iter().collect();
    let mut suggestions = Vec::new();

    table.suggest("cta", &mut suggestions);
    assert!(suggestions.iter().any(|word| word == "cat"));

    table.suggest("at", &mut suggestions);
    assert!(suggestions.iter().any(|word| word == "cat"));
}

#[test]
fn scenario_growth() {
    let mut table = Table::with_capacity(17);
    let words = [
        "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india",
    ];
    for word in &words[..8] {
        table.insert(word);
        assert_eq!(17, table.capacity());
    }
    table.insert(words[8]);
    assert_eq!(37, table.capacity());
    assert!(words.iter().all(|word| table.contains(word)));
}

#[cfg(feature = "default-hasher")]
#[test]
fn matches_a_reference_set() {
    // A small pool of words makes duplicates, removals of missing words and re-insertions of
    // removed words (tombstone revivals) common.
    let pool: Vec<String> = (0..300).map(|i| format!("w{i}")).collect();
    let mut rng = Rng(0x2545_f491_4f6c_dd1d);
    let mut table = Table::new();
    let mut reference = HashSet::default();
    let mut capacity = table.capacity();

    for _ in 0..20_000 {
        let word = pool[rng.below(pool.len() as u64) as usize].as_str();
        match rng.below(3) {
            0 | 1 => assert_eq!(reference.insert(word), table.insert(word), "insert {word:?}"),
            _ => assert_eq!(reference.remove(word), table.remove(word), "remove {word:?}"),
        }

        assert_eq!(reference.len(), table.size());
        assert!(probebook::prime::is_prime(table.capacity()));
        assert!(table.capacity() >= capacity);
        capacity = table.capacity();
    }

    for word in &pool {
        assert_eq!(reference.contains(word.as_str()), table.contains(word));
    }
    let mut live: Vec<_> = table.iter().collect();
    let mut expected: Vec<_> = reference.into_iter().collect();
    live.sort_unstable();
    expected.sort_unstable();
    assert_eq!(expected, live);
}

#[test]
fn round_trip() {
    let mut table = Table::new();
    for i in 0..1_000 {
        let word = format!("word{i}");
        assert!(table.insert(&word));
        assert!(table.contains(&word));
    }
    for i in (0..1_000).step_by(2) {
        let word = format!("word{i}");
        assert!(table.remove(&word));
        assert!(!table.contains(&word));
    }
    for i in 0..1_000 {
        assert_eq!(i % 2 == 1, table.contains(&format!("word{i}")));
    }
    assert_eq!(500, table.size());

    // Re-inserting a removed word makes it visible again.
    assert!(table.insert("word0"));
    assert!(table.contains("word0"));
    assert_eq!(501, table.size());
}

#[test]
fn try_insert_matches_insert() {
    let mut table = Table::new();
    assert_eq!(Ok(true), table.try_insert("cat"));
    assert_eq!(Ok(false), table.try_insert("cat"));
    for i in 0..100 {
        assert_eq!(Ok(true), table.try_insert(&format!("cat{i}")));
    }
    assert_eq!(101, table.size());
}

#[test]
fn make_empty_keeps_capacity() {
    let mut table: Table = ["a", "b", "c", "d", "e", "f", "g", "h", "i"].into_iter().collect();
    assert_eq!(37, table.capacity());

    table.make_empty();
    assert!(table.is_empty());
    assert_eq!(37, table.capacity());
    assert_eq!(0, table.iter().count());

    table.extend(["a", "b"]);
    assert_eq!(2, table.size());
}
