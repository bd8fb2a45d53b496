//! The line grammar parser
//!
//! One data line holds exactly two sides, source then destination, with no
//! separator between them beyond the structural character that opens the
//! second side:
//!
//! ```text
//! line      := side side
//! side      := '.' pair | '{' pair-list '}' (':' default-paradigm)?
//! pair-list := pair ('.' pair)*     -- must open with '.'
//! pair      := mark (':' paradigm)?
//! ```
//!
//! [`parse_line`] is a pure function of the line text; nothing survives a
//! call, so a failed parse cannot bleed into the next line. Malformed input
//! is reported with the byte offset of the offending token, and the caller
//! owns attaching the line number.

use crate::skel::lexer::{tokenize, Span, Token};
use crate::skel::line::{MarkPair, ParsedLine};
use std::fmt;

/// The malformed constructs the parser recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A side opened with something other than `.` or `{`
    SideStart,
    /// End of line where an entry was still expected
    UnexpectedEnd,
    /// A `{` that never found its `}`
    UnmatchedSetOpen,
    /// A `}` with no set open
    UnexpectedSetClose,
    /// `:` with no mark before it
    BareParadigmMark,
    /// A braced pair list that does not open with `.`
    UndottedSet,
    /// Content left over after the destination side
    TrailingText,
}

/// A line-scoped parse failure, positioned by byte offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub offset: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            ParseErrorKind::SideStart => "entry must open with '.' or '{'",
            ParseErrorKind::UnexpectedEnd => "line ended where an entry was expected",
            ParseErrorKind::UnmatchedSetOpen => "bracket not matched",
            ParseErrorKind::UnexpectedSetClose => "unexpected '}'",
            ParseErrorKind::BareParadigmMark => "':' with no mark before it",
            ParseErrorKind::UndottedSet => "alternate set must open with '.'",
            ParseErrorKind::TrailingText => "unparsed text after the destination side",
        };
        write!(f, "{} (column {})", what, self.offset + 1)
    }
}

impl std::error::Error for ParseError {}

/// Forward-only cursor over the spanned token stream of one line
struct Cursor<'a> {
    line: &'a str,
    tokens: Vec<(Token, Span)>,
    index: usize,
}

impl<'a> Cursor<'a> {
    fn new(line: &'a str) -> Self {
        Cursor {
            line,
            tokens: tokenize(line),
            index: 0,
        }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.index).map(|(token, _)| *token)
    }

    fn bump(&mut self) {
        self.index += 1;
    }

    /// Byte offset of the current token, or the line length at end of input.
    fn offset(&self) -> usize {
        self.tokens
            .get(self.index)
            .map(|(_, span)| span.start)
            .unwrap_or(self.line.len())
    }

    /// Consume the current text run, if any, edge-trimmed. Interior spaces
    /// survive; they are multi-word marks.
    fn take_text(&mut self) -> Option<&'a str> {
        match self.tokens.get(self.index) {
            Some((Token::Text, span)) => {
                let text = &self.line[span.clone()];
                self.index += 1;
                Some(text.trim())
            }
            _ => None,
        }
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            kind,
            offset: self.offset(),
        }
    }
}

/// Parse one comment-stripped data line into its two sides.
///
/// Structural failures only; the both-sides-are-sets rule is a semantic
/// check that callers run on the result, so that it can be reported
/// distinctly from grammar errors.
pub fn parse_line(line: &str) -> Result<ParsedLine, ParseError> {
    let mut cursor = Cursor::new(line);

    let (src, src_default) = parse_side(&mut cursor)?;
    let (dst, dst_default) = parse_side(&mut cursor)?;

    match cursor.peek() {
        None => Ok(ParsedLine {
            src,
            dst,
            default_paradigms: [src_default, dst_default],
        }),
        Some(Token::SetClose) => Err(cursor.error(ParseErrorKind::UnexpectedSetClose)),
        Some(_) => Err(cursor.error(ParseErrorKind::TrailingText)),
    }
}

fn parse_side(cursor: &mut Cursor) -> Result<(Vec<MarkPair>, String), ParseError> {
    match cursor.peek() {
        Some(Token::Dot) => {
            cursor.bump();
            let pair = parse_pair(cursor)?;
            Ok((vec![pair], String::new()))
        }
        Some(Token::SetOpen) => {
            cursor.bump();
            parse_set(cursor)
        }
        Some(Token::SetClose) => Err(cursor.error(ParseErrorKind::UnexpectedSetClose)),
        Some(_) => Err(cursor.error(ParseErrorKind::SideStart)),
        None => Err(cursor.error(ParseErrorKind::UnexpectedEnd)),
    }
}

/// Parse `mark (':' paradigm)?`. The opening `.` is already consumed.
fn parse_pair(cursor: &mut Cursor) -> Result<MarkPair, ParseError> {
    let mark = cursor.take_text();
    if mark.is_none() && cursor.peek().is_none() {
        return Err(cursor.error(ParseErrorKind::UnexpectedEnd));
    }

    let mark = mark.unwrap_or("");
    let paradigm = if cursor.peek() == Some(Token::Colon) {
        if mark.is_empty() {
            return Err(cursor.error(ParseErrorKind::BareParadigmMark));
        }
        cursor.bump();
        cursor.take_text().unwrap_or("")
    } else {
        ""
    };

    Ok(MarkPair::new(mark, paradigm))
}

/// Parse the remainder of a set. The opening `{` is already consumed.
fn parse_set(cursor: &mut Cursor) -> Result<(Vec<MarkPair>, String), ParseError> {
    match cursor.peek() {
        Some(Token::Dot) => {}
        None => return Err(cursor.error(ParseErrorKind::UnmatchedSetOpen)),
        Some(_) => return Err(cursor.error(ParseErrorKind::UndottedSet)),
    }

    let mut pairs = Vec::new();
    while cursor.peek() == Some(Token::Dot) {
        cursor.bump();
        if cursor.peek().is_none() {
            return Err(cursor.error(ParseErrorKind::UnmatchedSetOpen));
        }
        pairs.push(parse_pair(cursor)?);
    }

    // after the pairs only '}' is legal
    match cursor.peek() {
        Some(Token::SetClose) => cursor.bump(),
        Some(Token::Colon) => return Err(cursor.error(ParseErrorKind::BareParadigmMark)),
        Some(_) => return Err(cursor.error(ParseErrorKind::UnmatchedSetOpen)),
        None => return Err(cursor.error(ParseErrorKind::UnmatchedSetOpen)),
    }

    let default = if cursor.peek() == Some(Token::Colon) {
        cursor.bump();
        cursor.take_text().unwrap_or("").to_string()
    } else {
        String::new()
    };

    Ok((pairs, default))
}
