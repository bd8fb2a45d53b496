//! Lexer for the skeleton line notation
//!
//! A data line is scanned into text runs and the five structural characters
//! of the notation. Everything that is not structural, interior spaces
//! included, belongs to the current text run; the parser slices the run back
//! out of the line through its span. `#` ends the scan because everything
//! after it is a trailing comment.

use logos::Logos;

/// Byte range of a token within its line.
pub type Span = std::ops::Range<usize>;

/// All structurally significant tokens in a skeleton data line
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Pair separator inside a set, or single-pair side opener
    #[token(".")]
    Dot,

    #[token("{")]
    SetOpen,

    #[token("}")]
    SetClose,

    /// Paradigm-override introducer
    #[token(":")]
    Colon,

    /// Trailing comment; the scan stops here
    #[token("#")]
    Comment,

    /// Run of mark/paradigm text (catch-all, spaces included)
    #[regex(r"[^.{}:#\n]+")]
    Text,
}

impl Token {
    /// Check if this token can open a side
    pub fn opens_side(&self) -> bool {
        matches!(self, Token::Dot | Token::SetOpen)
    }

    /// Check if this token is a text run
    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text)
    }
}

/// Tokenize one line, keeping source spans for diagnostics.
///
/// The stream ends at the first `#`, mirroring the comment rule of the
/// notation. Lines are expected to be newline-free; a stray newline also
/// ends the stream.
pub fn tokenize(line: &str) -> Vec<(Token, Span)> {
    let mut lexer = Token::lexer(line);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(Token::Comment) => break,
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => break,
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<Token> {
        tokenize(line).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_structural_characters() {
        assert_eq!(
            kinds(".{}:"),
            vec![Token::Dot, Token::SetOpen, Token::SetClose, Token::Colon]
        );
    }

    #[test]
    fn test_text_run_keeps_interior_spaces() {
        let tokens = tokenize(".a lot:adj");
        assert_eq!(tokens[0], (Token::Dot, 0..1));
        assert_eq!(tokens[1], (Token::Text, 1..6));
        assert_eq!(&".a lot:adj"[tokens[1].1.clone()], "a lot");
        assert_eq!(tokens[2], (Token::Colon, 6..7));
        assert_eq!(tokens[3], (Token::Text, 7..10));
    }

    #[test]
    fn test_comment_ends_the_scan() {
        assert_eq!(
            kinds(".head:n # a comment . { } :"),
            vec![Token::Dot, Token::Text, Token::Colon, Token::Text]
        );
    }

    #[test]
    fn test_stem_cut_is_plain_text() {
        let line = ".f/ind:irr";
        let tokens = tokenize(line);
        assert_eq!(tokens[1].0, Token::Text);
        assert_eq!(&line[tokens[1].1.clone()], "f/ind");
    }

    #[test]
    fn test_empty_line() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_token_predicates() {
        assert!(Token::Dot.opens_side());
        assert!(Token::SetOpen.opens_side());
        assert!(!Token::Colon.opens_side());
        assert!(Token::Text.is_text());
        assert!(!Token::SetClose.is_text());
    }
}
