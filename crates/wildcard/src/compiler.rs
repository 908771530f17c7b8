use std::mem::take;

use crate::program::{Block, Program, Token, fold_case};

/// Translates pattern source into a [`Program`] in a single left-to-right pass.
#[derive(Default)]
pub(crate) struct Compiler {
    fold: bool,
    blocks: Vec<Block>,
    next: Vec<Token>,
}

impl Compiler {
    pub(crate) fn new(fold: bool) -> Self {
        Self {
            fold,
            ..Default::default()
        }
    }

    pub(crate) fn compile(mut self, raw: &str) -> Program {
        let mut rest = raw;
        while !rest.is_empty() {
            rest = self.step(rest);
        }

        self.flush();

        Program::new(self.blocks, self.fold)
    }

    fn step<'a>(&mut self, rest: &'a str) -> &'a str {
        let mut chars = rest.chars();
        let Some(ch) = chars.next() else {
            return rest;
        };

        match ch {
            '\\' => match chars.next() {
                Some(escaped @ ('\\' | '?' | '*' | '[')) => {
                    self.push_char(escaped);
                    &rest[2..]
                }
                _ => {
                    self.push_char('\\');
                    &rest[1..]
                }
            },
            '?' => {
                self.next.push(Token::Any);
                &rest[1..]
            }
            '*' => {
                self.star();
                &rest[1..]
            }
            '[' => match scan_set(&rest[1..]) {
                Some((members, len)) => {
                    self.push_set(members);
                    &rest[1 + len..]
                }
                None => {
                    self.push_char('[');
                    &rest[1..]
                }
            },
            _ => {
                self.push_char(ch);
                chars.as_str()
            }
        }
    }

    fn push_char(&mut self, ch: char) {
        let ch = if self.fold { fold_case(ch) } else { ch };
        self.next.push(Token::Char(ch));
    }

    fn push_set(&mut self, mut members: Vec<char>) {
        if self.fold {
            members.iter_mut().for_each(|ch| *ch = fold_case(*ch));
        }
        members.sort_unstable();
        members.dedup();
        self.next.push(Token::Set(members.into_boxed_slice()));
    }

    fn star(&mut self) {
        // Adjacent asterisks are equivalent to a single one.
        if self.next.is_empty() && !self.blocks.is_empty() {
            return;
        }
        self.flush();
    }

    fn flush(&mut self) {
        self.blocks.push(Block::new(take(&mut self.next), self.fold));
    }
}

/// Scans a character set body following an opening `[`.
///
/// Returns the set members and the number of bytes consumed including the closing `]`,
/// or `None` if the set is empty or unterminated.
fn scan_set(body: &str) -> Option<(Vec<char>, usize)> {
    let mut members = Vec::new();
    let mut last_escape = None;
    let mut i = 0;

    loop {
        let rest = &body[i..];
        if rest.starts_with(r"\]") {
            last_escape = Some((members.len(), i));
            members.push(']');
            i += 2;
            continue;
        }

        match rest.chars().next() {
            Some(']') => {
                return (!members.is_empty()).then_some((members, i + 1));
            }
            Some(ch) => {
                members.push(ch);
                i += ch.len_utf8();
            }
            None => break,
        }
    }

    // No closing bracket after the greedy scan, so the last `\]` has to be
    // a backslash member followed by the closing bracket.
    let (n, at) = last_escape?;
    members.truncate(n);
    members.push('\\');

    Some((members, at + 2))
}

#[cfg(test)]
mod tests;
