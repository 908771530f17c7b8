use memchr::memmem;

/// Compiled form of a pattern.
///
/// The first block is anchored at the start of the text.
/// Each of the following blocks is preceded by a `*` wildcard.
#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) struct Program {
    blocks: Vec<Block>,
    fold: bool,
}

impl Program {
    pub(crate) fn new(blocks: Vec<Block>, fold: bool) -> Self {
        debug_assert!(!blocks.is_empty());
        Self { blocks, fold }
    }

    #[cfg(test)]
    pub(crate) fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub(crate) fn matches(&self, text: &str) -> bool {
        let Some((head, tail)) = self.blocks.split_first() else {
            return text.is_empty();
        };

        let Some(mut pos) = head.match_at(text, 0, self.fold) else {
            return false;
        };

        let Some((last, middle)) = tail.split_last() else {
            return pos == text.len();
        };

        // Blocks have fixed width, so the leftmost occurrence of each one
        // leaves the most room for the rest and no backtracking is needed.
        for block in middle {
            match block.find(text, pos, self.fold) {
                Some(end) => pos = end,
                None => return false,
            }
        }

        last.match_suffix(text, pos, self.fold)
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new(vec![Block::default()], false)
    }
}

// ---

/// A run of tokens each consuming exactly one character.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub(crate) struct Block {
    tokens: Vec<Token>,
    literal: Option<String>,
}

impl Block {
    pub(crate) fn new(tokens: Vec<Token>, fold: bool) -> Self {
        let literal = if fold || tokens.is_empty() {
            None
        } else {
            tokens
                .iter()
                .map(|token| match token {
                    Token::Char(ch) => Some(*ch),
                    _ => None,
                })
                .collect()
        };

        Self { tokens, literal }
    }

    #[cfg(test)]
    pub(crate) fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[cfg(test)]
    pub(crate) fn literal(&self) -> Option<&str> {
        self.literal.as_deref()
    }

    /// Matches the block starting exactly at `pos`, returns the end position.
    fn match_at(&self, text: &str, pos: usize, fold: bool) -> Option<usize> {
        if let Some(literal) = &self.literal {
            return text[pos..].starts_with(literal.as_str()).then(|| pos + literal.len());
        }

        let mut chars = text[pos..].chars();
        let mut end = pos;
        for token in &self.tokens {
            let ch = chars.next()?;
            if !token.accepts(ch, fold) {
                return None;
            }
            end += ch.len_utf8();
        }

        Some(end)
    }

    /// Finds the leftmost occurrence of the block at or after `pos`, returns its end position.
    fn find(&self, text: &str, pos: usize, fold: bool) -> Option<usize> {
        if let Some(literal) = &self.literal {
            return memmem::find(text[pos..].as_bytes(), literal.as_bytes()).map(|i| pos + i + literal.len());
        }

        if self.tokens.is_empty() {
            return Some(pos);
        }

        text[pos..]
            .char_indices()
            .find_map(|(i, _)| self.match_at(text, pos + i, fold))
    }

    /// Tests whether the block matches the text ending, not overlapping anything before `pos`.
    fn match_suffix(&self, text: &str, pos: usize, fold: bool) -> bool {
        let rest = &text[pos..];

        if let Some(literal) = &self.literal {
            return rest.ends_with(literal.as_str());
        }

        let Some(n) = self.tokens.len().checked_sub(1) else {
            return true;
        };

        match rest.char_indices().rev().nth(n) {
            Some((start, _)) => self.match_at(text, pos + start, fold) == Some(text.len()),
            None => false,
        }
    }
}

// ---

#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) enum Token {
    /// Any single character.
    Any,
    /// Exactly this character.
    Char(char),
    /// Any of these characters, sorted and unique.
    Set(Box<[char]>),
}

impl Token {
    #[inline]
    fn accepts(&self, ch: char, fold: bool) -> bool {
        let ch = if fold { fold_case(ch) } else { ch };
        match self {
            Self::Any => true,
            Self::Char(expected) => *expected == ch,
            Self::Set(members) => members.binary_search(&ch).is_ok(),
        }
    }
}

/// Maps a character to a representative of its case pair.
///
/// The character is converted to uppercase and then back to lowercase, so that letters
/// with several lowercase forms (`σ` and `ς`, `s` and `ſ`) share one representative.
/// A step whose result is not a single character is skipped.
#[inline]
pub(crate) fn fold_case(ch: char) -> char {
    if ch.is_ascii() {
        return ch.to_ascii_lowercase();
    }

    lower(upper(ch))
}

#[inline]
fn upper(ch: char) -> char {
    single(ch.to_uppercase()).unwrap_or(ch)
}

#[inline]
fn lower(ch: char) -> char {
    single(ch.to_lowercase()).unwrap_or(ch)
}

#[inline]
fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
