// SPDX-License-Identifier: PMPL-1.0-or-later

//! morse-kit: Morse code transcoding across several alphabets.
//!
//! The crate translates text to and from Morse code for English, French,
//! Spanish, Russian and Ukrainian, with numerals and punctuation always
//! available as fallback tables. It also renders a printable chart of every
//! table and turns a Morse string into a timed playback schedule.
//!
//! ENGINE PILLARS:
//! 1. **Tables**: one bidirectional symbol table per [`Language`], loaded once
//!    into an immutable [`TableStore`].
//! 2. **Tokenizer**: segments a raw Morse stream into letters, word
//!    separators and (for playback) explicit pauses.
//! 3. **Codec**: encode/decode through an ordered fallback chain of tables,
//!    with the `ch` digraph handled as a single symbol.
//! 4. **Playback**: a schedule of tones and silences handed to a [`Player`],
//!    cancellable between beats.
//!
//! ```
//! use morse_kit::{encode, decode, CodecOptions, TableStore};
//!
//! let tables = TableStore::builtin().unwrap();
//! let options = CodecOptions::default();
//! let code = encode(tables, "Hello!", "english", &options).unwrap();
//! assert_eq!(code, ".... . .-.. .-.. --- -.-.--");
//! assert_eq!(decode(tables, &code, "english", &options).unwrap(), "hello!");
//! ```

pub mod chart;
pub mod codec;
pub mod diagnostics;
pub mod error;
pub mod logging;
pub mod playback;
pub mod tables;
pub mod tokenizer;
pub mod types;

pub use chart::render_chart;
pub use codec::{decode, encode};
pub use error::{MorseError, Result};
pub use playback::{play, Player, PlaybackOptions, PlaybackOutcome, Schedule};
pub use tables::{SymbolTable, TableStore};
pub use tokenizer::{flatten_to_characters, tokenize, Mark, Token, TokenizeMode};
pub use types::{ChartOptions, CodecOptions, Glyphs, Language};
