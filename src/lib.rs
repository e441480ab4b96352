//! mgrep searches large binary files for an exact sequence of bytes, and dumps
//! every occurrence with some bytes of context, in hex and ASCII.
//!
//! The search is a Boyer-Moore over the whole file mapped in memory : the pattern
//! is turned once into two skip tables (see [`tables`]) then [`scanner::search`]
//! is called on what remains of the buffer after each match.
//!
//! Example :
//! ```
//! use mgrep::{BoyerMoore, Matcher, Pattern};
//!
//! let matcher = BoyerMoore::new(Pattern::from_hex("4142").unwrap());
//! let offsets: Vec<usize> = matcher.find_iter(b"CABABD").map(|m| m.offset).collect();
//! assert_eq!(offsets, vec![1, 3]);
//! ```
//!
//! Matches never overlap : "AA" is found at 0 and 2 in "AAAA", not at 1.
//!
//! To debug purpose, set `RUST_LOG=debug` (or `trace` to see each match) when running the binary.
//!
pub mod error;
pub mod find_iter;
pub mod grep;
pub mod hexdump;
pub mod mapped_file;
pub mod match_result;
pub mod matcher;
pub mod options;
pub mod pattern;
pub mod scanner;
pub mod simple_matcher;
pub mod tables;

pub use error::{Error, IoStage, PatternError, Result};
pub use find_iter::FindIter;
pub use grep::{Grep, Summary};
pub use hexdump::HexDump;
pub use mapped_file::MappedFile;
pub use match_result::Match;
pub use matcher::Matcher;
pub use options::Options;
pub use pattern::Pattern;
pub use scanner::{search, BoyerMoore};
pub use simple_matcher::SimpleMatcher;
pub use tables::{bad_character_table, good_suffix_table};
