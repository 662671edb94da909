/*
Checks a text file against one or more word lists and suggests corrections for each misspelling.

Every line of every word list is inserted into one table. The text is then read line by line:
each whitespace-separated word is stripped of everything but ASCII letters and apostrophes, and
words which aren't in the table are reported with their line number.

## Usage

```
$ RUST_LOG=debug cargo run --example spellcheck -- words.txt names.txt essay.txt
Loaded 2 word lists (104334 words) in 41ms
Misspelling on line 3: "recieve". Possible corrections include:
  receive
...
```
*/
use std::{fs, io, time::Instant};

use probebook::Table;

macro_rules! usage {
    () => {
        eprintln!("Usage: spellcheck WORDLIST... TEXT");
        std::process::exit(1);
    };
}

fn main() -> io::Result<()> {
    env_logger::init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let Some(text) = args.pop() else {
        usage!();
    };
    if args.is_empty() {
        usage!();
    }

    let now = Instant::now();
    let mut table = Table::new();
    for path in &args {
        let words = fs::read_to_string(path)?;
        table.extend(words.lines());
    }
    println!(
        "Loaded {} word lists ({} words) in {}ms",
        args.len(),
        table.size(),
        now.elapsed().as_millis()
    );

    let text = fs::read_to_string(text)?;
    let mut suggestions = Vec::new();
    let mut misspelled = 0;
    for (line_number, line) in text.lines().enumerate() {
        for word in line.split_whitespace() {
            let word: String = word
                .chars()
                .filter(|ch| ch.is_ascii_alphabetic() || *ch == '\'')
                .collect();
            if word.is_empty() || table.contains(&word) {
                continue;
            }

            misspelled += 1;
            println!(
                "Misspelling on line {}: {word:?}. Possible corrections include:",
                line_number + 1
            );
            table.suggest(&word, &mut suggestions);
            for suggestion in &suggestions {
                println!("  {suggestion}");
            }
        }
    }

    println!("Finished: {misspelled} words misspelled.");
    Ok(())
}
