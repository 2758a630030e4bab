// SPDX-License-Identifier: PMPL-1.0-or-later

//! Tests for text → Morse encoding

use morse_kit::{encode, CodecOptions, MorseError, TableStore};

fn enc(text: &str, language: &str) -> String {
    encode(TableStore::builtin().unwrap(), text, language, &CodecOptions::default())
        .expect("encoding should succeed")
}

#[test]
fn test_english() {
    assert_eq!(enc("  Hello!  ", "english"), ".... . .-.. .-.. --- -.-.--");
    assert_eq!(
        enc("Good chair.", "english"),
        "--. --- --- -.. / ---- .- .. .-. .-.-.-"
    );
    assert_eq!(enc("Power = ^", "english"), ".--. --- .-- . .-. / -...- / *");
}

#[test]
fn test_french() {
    assert_eq!(enc("Bonjour!", "french"), "-... --- -. .--- --- ..- .-. -.-.--");
    assert_eq!(
        enc("10 pièces pour une baguette.", "french"),
        ".---- ----- / .--. .. .-..- -.-. . ... / .--. --- ..- .-. / ..- -. . / -... .- --. ..- . - - . .-.-.-"
    );
    assert_eq!(
        enc("L'âne mange.", "french"),
        ".-.. .----. .--.- -. . / -- .- -. --. . .-.-.-"
    );
}

#[test]
fn test_spanish() {
    assert_eq!(enc("¡Hola!", "spanish"), "--...- .... --- .-.. .- -.-.--");
    assert_eq!(
        enc("¿Cómo estás?", "spanish"),
        "..-.- -.-. ---. -- --- / . ... - .--.- ... ..--.."
    );
}

#[test]
fn test_russian() {
    assert_eq!(enc("Привет!", "russian"), ".--. .-. .. .-- . - -.-.--");
    assert_eq!(enc("Как дела?", "russian"), "-.- .- -.- / -.. . .-.. .- ..--..");
}

#[test]
fn test_ukrainian() {
    assert_eq!(enc("Вітаю!", "ukrainian"), ".-- .. - .- ..-- -.-.--");
    assert_eq!(
        enc("Як справи?", "ukrainian"),
        ".-.- -.- / ... .--. .-. .- .-- -.-- ..--.."
    );
}

#[test]
fn test_numbers() {
    assert_eq!(
        enc("1234567890", "numbers"),
        ".---- ..--- ...-- ....- ..... -.... --... ---.. ----. -----"
    );
    assert_eq!(enc("One -> 1", "numbers"), "* * * / -....- * / .----");
}

#[test]
fn test_special_characters() {
    assert_eq!(enc(". ^@ !?", "special"), ".-.-.- / * .--.-. / -.-.-- ..--..");
    assert_eq!(enc("S == $", "special"), "* / -...- -...- / ...-..-");
}

#[test]
fn test_digits_fall_back_to_numbers_table() {
    assert_eq!(enc("r2d2", "english"), ".-. ..--- -.. ..---");
    assert_eq!(enc("7", "russian"), "--...");
}

#[test]
fn test_language_key_is_normalised() {
    assert_eq!(enc("sos", "  ENGLISH "), "... --- ...");
}

#[test]
fn test_custom_glyphs_and_error_symbol() {
    let options = CodecOptions {
        dot: "•".to_string(),
        dash: "—".to_string(),
        separator: "|".to_string(),
        error: "?".to_string(),
        markup: false,
    };
    let code = encode(TableStore::builtin().unwrap(), "ch at ^", "english", &options).unwrap();
    assert_eq!(code, "———— | •— — | ?");
}

#[test]
fn test_multiline_text_keeps_newlines() {
    assert_eq!(enc("a\nb", "english"), ".- \n -...");
}

#[test]
fn test_invalid_glyphs_abort() {
    let tables = TableStore::builtin().unwrap();
    for (dot, dash, separator) in [("..", "-", "/"), (".", "--", "/"), (".", "-", "")] {
        let options = CodecOptions {
            dot: dot.to_string(),
            dash: dash.to_string(),
            separator: separator.to_string(),
            ..CodecOptions::default()
        };
        assert_eq!(
            encode(tables, "hello", "english", &options),
            Err(MorseError::InvalidGlyphs)
        );
    }
}

#[test]
fn test_identical_glyphs_still_encode() {
    let options = CodecOptions {
        dot: "x".to_string(),
        dash: "x".to_string(),
        ..CodecOptions::default()
    };
    let code = encode(TableStore::builtin().unwrap(), "ab", "english", &options).unwrap();
    assert_eq!(code, "xx xxxx");
}

#[test]
fn test_unknown_language_aborts() {
    let err = encode(
        TableStore::builtin().unwrap(),
        "hello",
        "klingon",
        &CodecOptions::default(),
    )
    .unwrap_err();
    assert_eq!(err, MorseError::UnknownLanguage("klingon".to_string()));
    assert!(err.is_config());
}
