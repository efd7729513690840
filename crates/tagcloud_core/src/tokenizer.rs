use crate::{CloudError, SeparatorSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Separator,
}

/// Maximal run of word or separator characters borrowed from a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl Token<'_> {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// Returns the longest run starting at byte offset `position` whose characters
/// share the separator membership of the character at `position`.
///
/// `position` must be below `line.len()` and fall on a char boundary.
pub fn next_word_or_separator<'a>(
    line: &'a str,
    position: usize,
    separators: &SeparatorSet,
) -> Result<Token<'a>, CloudError> {
    if position >= line.len() || !line.is_char_boundary(position) {
        return Err(CloudError::InvalidTokenPosition {
            position,
            len: line.len(),
        });
    }

    let rest = &line[position..];
    let mut chars = rest.char_indices();
    // Non-empty: position is a boundary strictly inside the line.
    let in_separator = chars
        .next()
        .map(|(_, c)| separators.contains(c))
        .unwrap_or(false);
    let end = chars
        .find(|&(_, c)| separators.contains(c) != in_separator)
        .map(|(idx, _)| idx)
        .unwrap_or(rest.len());

    let kind = if in_separator {
        TokenKind::Separator
    } else {
        TokenKind::Word
    };
    Ok(Token {
        kind,
        text: &rest[..end],
    })
}

/// Iterator partitioning a line into consecutive tokens.
#[derive(Debug, Clone)]
pub struct Tokens<'a, 's> {
    line: &'a str,
    position: usize,
    separators: &'s SeparatorSet,
}

impl<'a> Iterator for Tokens<'a, '_> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == self.line.len() {
            return None;
        }
        let token = next_word_or_separator(self.line, self.position, self.separators).ok()?;
        self.position += token.text.len();
        Some(token)
    }
}

pub fn tokenize<'a, 's>(line: &'a str, separators: &'s SeparatorSet) -> Tokens<'a, 's> {
    Tokens {
        line,
        position: 0,
        separators,
    }
}
