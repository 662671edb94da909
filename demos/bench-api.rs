use std::hint::black_box;

use ahash::RandomState;
use brunch::Bench;
use once_cell::sync::OnceCell;
use probebook::Table;

const SAMPLES: u32 = 500_000;

/// A random seed from a sample run. The values aren't important here: just that they're constant.
/// We don't want the benchmark outputs to reflect random changes to the seed.
const HASHER: RandomState = RandomState::with_seeds(
    16553733157538299820,
    16824988918979132550,
    1196480943954226392,
    17486544621636611338,
);

fn words() -> &'static [String] {
    static WORDS: OnceCell<Vec<String>> = OnceCell::new();
    WORDS.get_or_init(|| {
        // Deterministic pseudo-words, roughly the size of a small dictionary.
        let mut state = 0x9e37_79b9_7f4a_7c15u64;
        (0..50_000)
            .map(|_| {
                let len = 3 + (state % 8) as usize;
                (0..len)
                    .map(|_| {
                        state ^= state << 13;
                        state ^= state >> 7;
                        state ^= state << 17;
                        (b'a' + (state % 26) as u8) as char
                    })
                    .collect()
            })
            .collect()
    })
}

fn table() -> &'static Table {
    static TABLE: OnceCell<Table> = OnceCell::new();
    TABLE.get_or_init(|| words().iter().map(String::as_str).collect())
}

brunch::benches!(
    // Building
    Bench::new("Insert 50,000 words").run(|| {
        let mut table = Table::new();
        for word in words() {
            table.insert(black_box(word));
        }
        table
    }),
    Bench::spacer(),
    // Lookups
    Bench::new("Contains hit")
        .with_samples(SAMPLES)
        .run_seeded_with(table, |table| table.contains(black_box(&words()[123]))),
    Bench::new("Contains miss (\"zzyzx\")")
        .with_samples(SAMPLES)
        .run_seeded_with(table, |table| table.contains(black_box("zzyzx"))),
    Bench::spacer(),
    // Suggesting
    Bench::new("Suggest (\"adveenture\")")
        .with_samples(10_000)
        .run_seeded_with(table, |table| {
            let mut suggestions = Vec::new();
            table.suggest_with_hasher(black_box("adveenture"), &mut suggestions, HASHER);
            suggestions
        }),
);
