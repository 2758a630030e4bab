// SPDX-License-Identifier: PMPL-1.0-or-later

//! Segmentation of raw Morse strings.
//!
//! The tokenizer never fails. Characters that are neither separators nor
//! whitespace are collected into the current letter verbatim; rejecting
//! foreign characters is the job of the caller's validation pass.

use crate::types::Glyphs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// One letter's worth of marks, in whatever glyphs the input used.
    Letter(String),
    WordSeparator,
    /// Inter-word pause, only produced in [`TokenizeMode::Sound`].
    Space,
    Newline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenizeMode {
    /// Spaces only delimit letters.
    #[default]
    Text,
    /// Spaces also become [`Token::Space`] so playback can time them.
    Sound,
}

/// Finest-grained unit of a flattened token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Char(char),
    WordSeparator,
    Space,
    Newline,
}

pub fn tokenize(input: &str, glyphs: &Glyphs, mode: TokenizeMode) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in input.chars() {
        if c == glyphs.dot || c == glyphs.dash {
            current.push(c);
        } else if c == glyphs.separator {
            flush(&mut current, &mut tokens);
            tokens.push(Token::WordSeparator);
        } else if c == ' ' {
            flush(&mut current, &mut tokens);
            if mode == TokenizeMode::Sound {
                tokens.push(Token::Space);
            }
        } else if c == '\n' {
            flush(&mut current, &mut tokens);
            tokens.push(Token::Newline);
        } else {
            current.push(c);
        }
    }
    flush(&mut current, &mut tokens);

    tokens
}

fn flush(current: &mut String, tokens: &mut Vec<Token>) {
    if !current.is_empty() {
        tokens.push(Token::Letter(std::mem::take(current)));
    }
}

/// Expands every letter into its individual characters, keeping separators,
/// spaces and newlines as single marks.
pub fn flatten_to_characters(tokens: &[Token]) -> Vec<Mark> {
    let mut marks = Vec::new();
    for token in tokens {
        match token {
            Token::Letter(code) => marks.extend(code.chars().map(Mark::Char)),
            Token::WordSeparator => marks.push(Mark::WordSeparator),
            Token::Space => marks.push(Mark::Space),
            Token::Newline => marks.push(Mark::Newline),
        }
    }
    marks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(code: &str) -> Token {
        Token::Letter(code.to_string())
    }

    #[test]
    fn splits_letters_and_words() {
        let tokens = tokenize("--. --- / .- ..", &Glyphs::default(), TokenizeMode::Text);
        assert_eq!(
            tokens,
            vec![
                letter("--."),
                letter("---"),
                Token::WordSeparator,
                letter(".-"),
                letter(".."),
            ]
        );
    }

    #[test]
    fn separator_flushes_without_spaces() {
        let tokens = tokenize(".-/-...", &Glyphs::default(), TokenizeMode::Text);
        assert_eq!(tokens, vec![letter(".-"), Token::WordSeparator, letter("-...")]);
    }

    #[test]
    fn sound_mode_keeps_spaces() {
        let tokens = tokenize(".- -", &Glyphs::default(), TokenizeMode::Sound);
        assert_eq!(tokens, vec![letter(".-"), Token::Space, letter("-")]);
    }

    #[test]
    fn repeated_spaces_never_make_empty_letters() {
        let tokens = tokenize("  .-   - ", &Glyphs::default(), TokenizeMode::Text);
        assert_eq!(tokens, vec![letter(".-"), letter("-")]);
    }

    #[test]
    fn newline_is_its_own_token() {
        let tokens = tokenize(".-\n-", &Glyphs::default(), TokenizeMode::Text);
        assert_eq!(tokens, vec![letter(".-"), Token::Newline, letter("-")]);
    }

    #[test]
    fn foreign_characters_stay_in_the_letter() {
        let tokens = tokenize(".x- ^", &Glyphs::default(), TokenizeMode::Text);
        assert_eq!(tokens, vec![letter(".x-"), letter("^")]);
    }

    #[test]
    fn honours_custom_glyphs() {
        let glyphs = Glyphs::new("•", "—", "|").unwrap();
        let tokens = tokenize("•— |—", &glyphs, TokenizeMode::Text);
        assert_eq!(tokens, vec![letter("•—"), Token::WordSeparator, letter("—")]);
    }

    #[test]
    fn flatten_expands_letters_only() {
        let tokens = tokenize(".- /-", &Glyphs::default(), TokenizeMode::Sound);
        assert_eq!(
            flatten_to_characters(&tokens),
            vec![
                Mark::Char('.'),
                Mark::Char('-'),
                Mark::Space,
                Mark::WordSeparator,
                Mark::Char('-'),
            ]
        );
    }
}
