use wordle_ru::word::normalize;
use wordle_ru::{Word, WordError};

#[test]
fn test_normalize_trims_lowercases_and_folds() {
    assert_eq!(normalize("  СЛОВО\n"), "слово");
    assert_eq!(normalize("Ёжик"), "ежик");
    assert_eq!(normalize("актёр"), "актер");
}

#[test]
fn test_parse_valid_word() {
    let word = Word::parse(" Герой ").unwrap();
    assert_eq!(word.to_string(), "герой");
    assert_eq!(word, "герой".parse::<Word>().unwrap());
}

#[test]
fn test_parse_folds_yo() {
    assert_eq!(Word::parse("ПЧЁЛЫ").unwrap(), Word::parse("пчелы").unwrap());
}

#[test]
fn test_parse_wrong_length() {
    assert_eq!(
        Word::parse("дом"),
        Err(WordError::Length {
            expected: 5,
            actual: 3
        })
    );
    assert_eq!(
        Word::parse("большой"),
        Err(WordError::Length {
            expected: 5,
            actual: 7
        })
    );
    assert!(matches!(Word::parse(""), Err(WordError::Length { actual: 0, .. })));
}

#[test]
fn test_parse_outside_alphabet() {
    assert_eq!(Word::parse("hello"), Err(WordError::Alphabet('h')));
    assert_eq!(Word::parse("сл0во"), Err(WordError::Alphabet('0')));
    assert_eq!(Word::parse("сл ово"), Err(WordError::Length { expected: 5, actual: 6 }));
}

#[test]
fn test_letters_are_alphabet_indexes() {
    let word = Word::parse("аабвя").unwrap();
    assert_eq!(word.letters(), &[0, 0, 1, 2, 31]);
    assert_eq!(word.chars().collect::<String>(), "аабвя");
}

#[test]
fn test_debug_shows_text() {
    assert_eq!(format!("{:?}", Word::parse("книга").unwrap()), "Word(книга)");
}
