use super::*;

use crate::program::Token::{Any, Char};

fn compile(raw: &str) -> Program {
    Compiler::new(false).compile(raw)
}

fn tokens(program: &Program) -> Vec<Vec<Token>> {
    program.blocks().iter().map(|block| block.tokens().to_vec()).collect()
}

fn chars(s: &str) -> Vec<Token> {
    s.chars().map(Char).collect()
}

fn set(members: &str) -> Token {
    Token::Set(members.chars().collect::<Vec<_>>().into_boxed_slice())
}

#[test]
fn test_empty() {
    assert_eq!(tokens(&compile("")), vec![vec![]]);
}

#[test]
fn test_literal() {
    let program = compile("hello");
    assert_eq!(tokens(&program), vec![chars("hello")]);
    assert_eq!(program.blocks()[0].literal(), Some("hello"));
}

#[test]
fn test_single_asterisk() {
    assert_eq!(tokens(&compile("*")), vec![vec![], vec![]]);
}

#[test]
fn test_adjacent_asterisks_collapse() {
    assert_eq!(tokens(&compile("***")), vec![vec![], vec![]]);
    assert_eq!(tokens(&compile("a**b")), vec![chars("a"), chars("b")]);
}

#[test]
fn test_question_marks() {
    let program = compile("a??b");
    assert_eq!(tokens(&program), vec![vec![Char('a'), Any, Any, Char('b')]]);
    assert_eq!(program.blocks()[0].literal(), None);
}

#[test]
fn test_text_with_asterisk() {
    assert_eq!(tokens(&compile("foo*bar")), vec![chars("foo"), chars("bar")]);
    assert_eq!(tokens(&compile("*foo*")), vec![vec![], chars("foo"), vec![]]);
}

#[test]
fn test_escapes() {
    assert_eq!(tokens(&compile(r"\*")), vec![chars("*")]);
    assert_eq!(tokens(&compile(r"\?")), vec![chars("?")]);
    assert_eq!(tokens(&compile(r"\\")), vec![chars(r"\")]);
    assert_eq!(tokens(&compile(r"\[")), vec![chars("[")]);
}

#[test]
fn test_undefined_escape_is_two_literals() {
    assert_eq!(tokens(&compile(r"\a")), vec![chars(r"\a")]);
    assert_eq!(tokens(&compile(r"\]")), vec![chars(r"\]")]);
    assert_eq!(tokens(&compile(r"a\")), vec![chars(r"a\")]);
}

#[test]
fn test_undefined_escape_does_not_hide_wildcard() {
    // `\a` is not an escape, so the asterisk after it is still a wildcard.
    assert_eq!(tokens(&compile(r"\a*")), vec![chars(r"\a"), vec![]]);
}

#[test]
fn test_set() {
    assert_eq!(tokens(&compile("[abc]")), vec![vec![set("abc")]]);
    assert_eq!(tokens(&compile("x[cba]y")), vec![vec![Char('x'), set("abc"), Char('y')]]);
}

#[test]
fn test_set_members_are_sorted_and_unique() {
    assert_eq!(tokens(&compile("[bab]")), vec![vec![set("ab")]]);
}

#[test]
fn test_set_special_members_are_literal() {
    assert_eq!(tokens(&compile("[*?[]")), vec![vec![set("*?[")]]);
    assert_eq!(tokens(&compile(r"[a\]b]")), vec![vec![set("]ab")]]);
}

#[test]
fn test_set_with_trailing_escaped_bracket() {
    assert_eq!(tokens(&compile(r"[a\]")), vec![vec![set(r"\a")]]);
    assert_eq!(tokens(&compile(r"[\]")), vec![vec![set(r"\")]]);
    assert_eq!(tokens(&compile(r"[\]x\]")), vec![vec![set(r"\]x")]]);
}

#[test]
fn test_unterminated_set() {
    assert_eq!(tokens(&compile("[abc")), vec![chars("[abc")]);
    assert_eq!(tokens(&compile("[*")), vec![chars("["), vec![]]);
}

#[test]
fn test_empty_set() {
    assert_eq!(tokens(&compile("[]")), vec![chars("[]")]);
    assert_eq!(tokens(&compile("[]]")), vec![chars("[]]")]);
}

#[test]
fn test_case_folding() {
    let program = Compiler::new(true).compile("Ab[XY]?");
    assert_eq!(tokens(&program), vec![vec![Char('a'), Char('b'), set("xy"), Any]]);
    assert_eq!(program.blocks()[0].literal(), None);
}

#[test]
fn test_scan_set() {
    assert_eq!(scan_set("ab]rest"), Some((vec!['a', 'b'], 3)));
    assert_eq!(scan_set("]"), None);
    assert_eq!(scan_set("abc"), None);
    assert_eq!(scan_set(""), None);
    assert_eq!(scan_set("ä]"), Some((vec!['ä'], 3)));
}
