use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

/// One record in the wire format the loader expects (`updated` is a
/// numeric string, milliseconds since epoch).
#[derive(Serialize)]
struct SampleRecord {
    title: String,
    description: String,
    url: String,
    tags: Vec<String>,
    updated: String,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform value in `0..bound`.
    fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }
}

const DAY_MS: u64 = 24 * 60 * 60 * 1000;

fn main() {
    let mut rng = SimpleRng::new(42);

    // (title, description, url, tags)
    let entries: &[(&str, &str, &str, &str)] = &[
        ("Exercism", "coding exercises with mentor feedback", "https://exercism.org", "free;programming"),
        ("LeetCode", "interview preparation problems", "https://leetcode.com", "free;paid;programming"),
        ("Khan Academy", "math and science lessons for any age", "https://khanacademy.org", "free;18-;math"),
        ("Coursera", "university courses online", "https://coursera.org", "free;paid;courses"),
        ("MDN Web Docs", "the reference for web platform APIs", "https://developer.mozilla.org", "free;web"),
        ("Frontend Masters", "in-depth frontend engineering courses", "https://frontendmasters.com", "paid;web"),
        ("The Rust Book", "the official introduction to Rust", "https://doc.rust-lang.org/book", "free;programming"),
        ("Crafting Interpreters", "build two interpreters from scratch", "https://craftinginterpreters.com", "free;paid;programming"),
        ("Duolingo", "gamified language learning", "https://duolingo.com", "free;paid;18-;languages"),
        ("Anki", "spaced-repetition flashcards", "https://apps.ankiweb.net", "free;memory"),
        ("Project Euler", "math-flavoured programming puzzles", "https://projecteuler.net", "free;math;programming"),
        ("Advent of Code", "yearly programming puzzle calendar", "https://adventofcode.com", "free;programming"),
        ("Scratch", "visual programming for kids", "https://scratch.mit.edu", "free;18-;programming"),
        ("Brilliant", "interactive math and science problem solving", "https://brilliant.org", "paid;math"),
        ("Codecademy", "interactive coding lessons", "https://codecademy.com", "free;paid;programming"),
        ("nand2tetris", "build a computer from first principles", "https://nand2tetris.org", "free;hardware"),
        ("Open Library", "borrowable digital books", "https://openlibrary.org", "free;books"),
        ("O'Reilly Learning", "tech books and courses subscription", "https://oreilly.com", "paid;books"),
        ("freeCodeCamp", "project-based web development curriculum", "https://freecodecamp.org", "free;web"),
        ("Investopedia", "personal finance and investing explained", "https://investopedia.com", "free;18+;finance"),
        ("Interactive Brokers Campus", "trading courses for account holders", "https://ibkrcampus.com", "free;18+;finance"),
        ("Typing Club", "touch typing practice", "https://typingclub.com", "free;18-;skills"),
        ("Libby", "library ebooks and audiobooks", "https://libbyapp.com", "free;books"),
        ("Pluralsight", "technology skill courses and assessments", "https://pluralsight.com", "paid;courses"),
    ];

    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before Unix epoch")
        .as_millis() as u64;

    let records: Vec<SampleRecord> = entries
        .iter()
        .enumerate()
        .map(|(i, (title, description, url, tags))| {
            // First two records land inside the 24h freshness window so the
            // NEW badge has something to show; the rest spread over ~60 days.
            let age_ms = if i < 2 {
                rng.below(DAY_MS / 2)
            } else {
                DAY_MS + rng.below(59 * DAY_MS)
            };

            SampleRecord {
                title: title.to_string(),
                description: description.to_string(),
                url: url.to_string(),
                tags: tags.split(';').map(str::to_string).collect(),
                updated: (now_ms - age_ms).to_string(),
            }
        })
        .collect();

    let output_path = "data.json";
    let json = serde_json::to_string_pretty(&records).expect("serializing sample records");
    std::fs::write(output_path, json).expect("Failed to write output file");

    println!("Wrote {} resources to {output_path}", records.len());
}
