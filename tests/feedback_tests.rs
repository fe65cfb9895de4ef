use rstest::rstest;
use wordle_ru::{evaluate, Feedback, FeedbackPattern, Word};

fn word(s: &str) -> Word {
    Word::parse(s).unwrap()
}

#[test]
fn test_all_exact() {
    let pattern = evaluate(&word("слово"), &word("слово"));
    assert!(pattern.is_win());
    assert_eq!(pattern, FeedbackPattern::ALL_EXACT);
    assert_eq!(pattern.to_string(), "+++++");
}

#[test]
fn test_all_absent() {
    let pattern = evaluate(&word("шапка"), &word("герой"));
    let expected = FeedbackPattern::new([Feedback::Absent; 5]);
    assert_eq!(pattern, expected);
}

#[test]
fn test_first_letter_exact() {
    let feedbacks = evaluate(&word("гонец"), &word("герой")).to_feedbacks();
    assert_eq!(feedbacks[0], Feedback::Exact);
    assert_eq!(feedbacks[1], Feedback::Present);
    assert_eq!(feedbacks[2], Feedback::Absent);
    assert_eq!(feedbacks[3], Feedback::Present);
    assert_eq!(feedbacks[4], Feedback::Absent);
}

#[rstest]
#[case::same_word("слово", "слово", "+++++")]
#[case::mixed("гонец", "герой", "+^-^-")]
#[case::single_present("книга", "герой", "---^-")]
// one "а" in the secret: the second "а" of the guess gets nothing
#[case::extra_copy_in_guess("багаж", "замок", "-+---")]
// the exact match claims the only "а" before any present is handed out
#[case::exact_before_present("ааааа", "книга", "----+")]
// two "о" in the secret, one "с": the second "с" stays absent
#[case::duplicate_in_secret("сосна", "слово", "+^---")]
#[case::repeated_both_sides("колос", "слово", "-^^^^")]
#[case::shared_middle("ворон", "город", "-+++-")]
fn test_evaluate_cases(#[case] guess: &str, #[case] secret: &str, #[case] expected: &str) {
    assert_eq!(evaluate(&word(guess), &word(secret)).to_string(), expected);
}

#[test]
fn test_evaluate_is_not_symmetric() {
    let forward = evaluate(&word("лампа"), &word("папка"));
    let backward = evaluate(&word("папка"), &word("лампа"));

    assert_eq!(forward.to_string(), "-+-^+");
    assert_eq!(backward.to_string(), "^+--+");
    assert_ne!(forward, backward);
}

#[test]
fn test_exact_count() {
    assert_eq!(evaluate(&word("ворон"), &word("город")).exact_count(), 3);
    assert_eq!(FeedbackPattern::ALL_EXACT.exact_count(), 5);
}

#[test]
fn test_pattern_parse() {
    let pattern = FeedbackPattern::parse("+^---").unwrap();
    let feedbacks = pattern.to_feedbacks();
    assert_eq!(feedbacks[0], Feedback::Exact);
    assert_eq!(feedbacks[1], Feedback::Present);
    assert_eq!(feedbacks[2], Feedback::Absent);
    assert_eq!(feedbacks[3], Feedback::Absent);
    assert_eq!(feedbacks[4], Feedback::Absent);

    assert_eq!(FeedbackPattern::parse("gybbb"), Some(pattern));
    assert_eq!(FeedbackPattern::parse("21000"), Some(pattern));
    assert_eq!(evaluate(&word("сосна"), &word("слово")), pattern);
}

#[test]
fn test_pattern_parse_invalid() {
    assert!(FeedbackPattern::parse("+^---+").is_none());
    assert!(FeedbackPattern::parse("+^--").is_none());
    assert!(FeedbackPattern::parse("+^-z-").is_none());
}

#[test]
fn test_emoji_display() {
    let pattern = FeedbackPattern::new([
        Feedback::Exact,
        Feedback::Present,
        Feedback::Absent,
        Feedback::Absent,
        Feedback::Exact,
    ]);
    assert_eq!(pattern.to_emoji_string(), "🟩🟨⬛⬛🟩");
    assert_eq!(pattern.to_string(), "+^--+");
}
