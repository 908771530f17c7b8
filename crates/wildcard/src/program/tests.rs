use rstest::rstest;

use super::*;

fn block(tokens: Vec<Token>) -> Block {
    Block::new(tokens, false)
}

fn literal(s: &str) -> Block {
    block(s.chars().map(Token::Char).collect())
}

fn generic(s: &str) -> Block {
    // Same characters, but without the substring search shortcut.
    let mut tokens: Vec<_> = s.chars().map(Token::Char).collect();
    tokens.push(Token::Any);
    let mut block = block(tokens);
    block.tokens.pop();
    block
}

#[test]
fn test_literal_cache() {
    assert_eq!(literal("abc").literal(), Some("abc"));
    assert_eq!(literal("").literal(), None);
    assert_eq!(block(vec![Token::Char('a'), Token::Any]).literal(), None);
    assert_eq!(Block::new(vec![Token::Char('a')], true).literal(), None);
}

#[rstest]
#[case("abc", "xxabcxx", 0, Some(5))]
#[case("abc", "abcabc", 1, Some(6))]
#[case("abc", "abxabd", 0, None)]
#[case("ä", "aäb", 0, Some(3))]
#[case("", "abc", 1, Some(1))]
fn test_find(#[case] pattern: &str, #[case] text: &str, #[case] pos: usize, #[case] expected: Option<usize>) {
    assert_eq!(literal(pattern).find(text, pos, false), expected);
    assert_eq!(generic(pattern).find(text, pos, false), expected);
}

#[rstest]
#[case("bc", "abc", 0, true)]
#[case("bc", "abc", 2, false)]
#[case("abc", "abc", 0, true)]
#[case("abc", "abc", 1, false)]
#[case("", "abc", 3, true)]
#[case("ü", "aü", 1, true)]
#[case("x", "", 0, false)]
fn test_match_suffix(#[case] pattern: &str, #[case] text: &str, #[case] pos: usize, #[case] expected: bool) {
    assert_eq!(literal(pattern).match_suffix(text, pos, false), expected);
    assert_eq!(generic(pattern).match_suffix(text, pos, false), expected);
}

#[test]
fn test_match_at_multibyte() {
    let any2 = block(vec![Token::Any, Token::Any]);
    assert_eq!(any2.match_at("🦀🎉!", 0, false), Some(8));
    assert_eq!(any2.match_at("🦀", 0, false), None);
}

#[test]
fn test_token_accepts() {
    let set = Token::Set(vec!['a', 'b'].into_boxed_slice());
    assert!(set.accepts('a', false));
    assert!(!set.accepts('A', false));
    assert!(set.accepts('A', true));
    assert!(!set.accepts('c', true));

    assert!(Token::Any.accepts('Z', true));
    assert!(Token::Char('x').accepts('X', true));
    assert!(!Token::Char('x').accepts('X', false));
}

#[rstest]
#[case('A', 'a')]
#[case('a', 'a')]
#[case('1', '1')]
#[case('Ä', 'ä')]
#[case('Σ', 'σ')]
#[case('\u{212A}', 'k')] // Kelvin sign
#[case('İ', 'İ')] // lowercase form is two characters
#[case('ς', 'σ')]
#[case('ſ', 's')]
#[case('ϐ', 'β')]
#[case('ı', 'i')]
#[case('ẞ', 'ß')]
#[case('ß', 'ß')] // uppercase form is two characters
fn test_fold_case(#[case] ch: char, #[case] expected: char) {
    assert_eq!(fold_case(ch), expected);
    assert_eq!(fold_case(expected), expected);
}

#[test]
fn test_default_program_matches_empty_only() {
    let program = Program::default();
    assert!(program.matches(""));
    assert!(!program.matches("a"));
}
