/*
Most basic example for the suggester for quick debugging.

This example checks whether the input word is in the word list first and only suggests
corrections for words which aren't.

## Usage

```
$ cargo run --example suggest /usr/share/dict/words teh
Loaded 104334 words in 38ms (capacity 222437)
Suggestions for "teh": "eh", "tech", "ten", "the" (checked in 24µs)
```
*/
use std::time::Instant;

use probebook::Table;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(path), Some(word)) = (args.next(), args.next()) else {
        eprintln!("Usage: suggest WORDLIST WORD");
        std::process::exit(1);
    };

    let words = match std::fs::read_to_string(&path) {
        Ok(words) => words,
        Err(err) => {
            eprintln!("Failed to read {path}: {err}");
            std::process::exit(1);
        }
    };

    let now = Instant::now();
    let table: Table = words.lines().collect();
    println!(
        "Loaded {} words in {:?} (capacity {})",
        table.size(),
        now.elapsed(),
        table.capacity()
    );

    if table.contains(&word) {
        println!("\"{word}\" is in the word list");
        return;
    }

    let mut suggestions = Vec::with_capacity(5);
    let now = Instant::now();
    table.suggest(&word, &mut suggestions);
    let time = now.elapsed();
    if suggestions.is_empty() {
        println!("No suggestions found for \"{word}\" (checked in {time:?})");
    } else {
        let suggestions = suggestions
            .into_iter()
            .fold(String::new(), |mut s, suggestion| {
                if !s.is_empty() {
                    s.push_str(", ");
                }
                s.push('"');
                s.push_str(&suggestion);
                s.push('"');
                s
            });
        println!("Suggestions for \"{word}\": {suggestions} (checked in {time:?})");
    }
}
