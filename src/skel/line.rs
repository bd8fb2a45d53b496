//! Parsed representation of one skeleton data line

use serde::Serialize;

/// One mark/paradigm pair from a side of a data line
///
/// `mark` is the literal word text; it may carry an embedded stem-cut marker
/// and interior spaces for multi-word entries. An empty `paradigm` means the
/// pair inherits its side's default, or failing that the stanza's category
/// code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkPair {
    pub mark: String,
    pub paradigm: String,
}

impl MarkPair {
    pub fn new(mark: impl Into<String>, paradigm: impl Into<String>) -> Self {
        MarkPair {
            mark: mark.into(),
            paradigm: paradigm.into(),
        }
    }
}

/// Parser output for one data line
///
/// Each side holds at least one pair. Lines where both sides hold more than
/// one are structurally parseable but semantically rejected; callers check
/// [`ParsedLine::has_ambiguous_sides`] before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedLine {
    pub src: Vec<MarkPair>,
    pub dst: Vec<MarkPair>,
    /// Per-side default paradigm, `[src, dst]`; empty means "category code"
    pub default_paradigms: [String; 2],
}

impl ParsedLine {
    /// True when both sides offer alternatives, which the notation forbids.
    pub fn has_ambiguous_sides(&self) -> bool {
        self.src.len() > 1 && self.dst.len() > 1
    }

    /// Substitute side defaults into pairs that carry no paradigm of their
    /// own. Returns a new line so the raw parse stays available to callers
    /// that still need it.
    pub fn with_defaults(&self) -> ParsedLine {
        fn substitute(pairs: &[MarkPair], default: &str) -> Vec<MarkPair> {
            pairs
                .iter()
                .map(|pair| {
                    if pair.paradigm.is_empty() {
                        MarkPair::new(pair.mark.clone(), default)
                    } else {
                        pair.clone()
                    }
                })
                .collect()
        }

        ParsedLine {
            src: substitute(&self.src, &self.default_paradigms[0]),
            dst: substitute(&self.dst, &self.default_paradigms[1]),
            default_paradigms: self.default_paradigms.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(src: Vec<MarkPair>, dst: Vec<MarkPair>, defaults: [&str; 2]) -> ParsedLine {
        ParsedLine {
            src,
            dst,
            default_paradigms: [defaults[0].to_string(), defaults[1].to_string()],
        }
    }

    #[test]
    fn test_defaults_fill_empty_paradigms_only() {
        let parsed = line(
            vec![MarkPair::new("a", ""), MarkPair::new("b", "irr")],
            vec![MarkPair::new("x", "")],
            ["D", ""],
        );
        let resolved = parsed.with_defaults();

        assert_eq!(resolved.src[0], MarkPair::new("a", "D"));
        assert_eq!(resolved.src[1], MarkPair::new("b", "irr"));
        // empty default leaves the pair empty, deferring to the category
        assert_eq!(resolved.dst[0], MarkPair::new("x", ""));
    }

    #[test]
    fn test_defaults_do_not_touch_the_raw_parse() {
        let parsed = line(
            vec![MarkPair::new("a", "")],
            vec![MarkPair::new("x", "")],
            ["D", "E"],
        );
        let _ = parsed.with_defaults();
        assert_eq!(parsed.src[0].paradigm, "");
        assert_eq!(parsed.dst[0].paradigm, "");
    }

    #[test]
    fn test_ambiguous_sides() {
        let both = line(
            vec![MarkPair::new("a", ""), MarkPair::new("b", "")],
            vec![MarkPair::new("x", ""), MarkPair::new("y", "")],
            ["", ""],
        );
        assert!(both.has_ambiguous_sides());

        let src_only = line(
            vec![MarkPair::new("a", ""), MarkPair::new("b", "")],
            vec![MarkPair::new("x", "")],
            ["", ""],
        );
        assert!(!src_only.has_ambiguous_sides());
    }
}
