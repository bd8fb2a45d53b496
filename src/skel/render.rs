//! Entry rendering
//!
//! Turns one parsed line plus the active category code into `.dix` entry
//! fragments. Rendering is a pure function of its inputs; default-paradigm
//! substitution has already happened by the time a line arrives here.
//!
//! Monolingual entries combine a pair's paradigm override with the category
//! code (`irregularbuy` in stanza `verb` gives `irregularbuy__vblex`);
//! bilingual entries carry the bare category code on both sides, as the
//! translation restriction marks do not inflect.

use crate::skel::line::{MarkPair, ParsedLine};
use std::fmt;

/// In-mark delimiter separating a stem from its inflecting tail
pub const STEM_CUT: char = '/';

/// Word-break element replacing interior spaces in rendered text
pub const WORD_BREAK: &str = "<b/>";

/// Which dictionary the output is destined for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    SourceMonodix,
    DestinationMonodix,
    Bilingual,
}

impl Target {
    /// Parse the command-line code: `s`, `d` or `bi`.
    pub fn from_code(code: &str) -> Option<Target> {
        match code {
            "s" => Some(Target::SourceMonodix),
            "d" => Some(Target::DestinationMonodix),
            "bi" => Some(Target::Bilingual),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Target::SourceMonodix => "source monodix",
            Target::DestinationMonodix => "destination monodix",
            Target::Bilingual => "bi-lingual dictionary",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Combine a paradigm override with the category code.
fn qualified_paradigm(paradigm: &str, category: &str) -> String {
    if paradigm.is_empty() {
        category.to_string()
    } else {
        format!("{}__{}", paradigm, category)
    }
}

/// Split a mark at the stem cut: `f/ind` gives stem `f` and lemma `find`.
/// Marks without the marker are their own stem and lemma.
fn stem_and_lemma(mark: &str) -> (String, String) {
    match mark.split_once(STEM_CUT) {
        Some((stem, tail)) => (stem.to_string(), format!("{}{}", stem, tail)),
        None => (mark.to_string(), mark.to_string()),
    }
}

/// Interior spaces become explicit word breaks in element text. Attribute
/// values keep their literal spaces.
fn breakable(text: &str) -> String {
    text.replace(' ', WORD_BREAK)
}

/// One monolingual entry: `<e lm="earn"><i>earn</i><par n="reg__vblex"/></e>`
pub fn monodix_entry(pair: &MarkPair, category: &str) -> String {
    let (stem, lemma) = stem_and_lemma(&pair.mark);
    format!(
        "<e lm=\"{}\"><i>{}</i><par n=\"{}\"/></e>",
        lemma,
        breakable(&stem),
        qualified_paradigm(&pair.paradigm, category)
    )
}

/// One unrestricted bilingual entry:
/// `<e><p><l>snack<s n="n"/></l><r>baggin<s n="n"/></r></p></e>`
pub fn bilingual_entry(src: &MarkPair, dst: &MarkPair, category: &str) -> String {
    let (_, src_lemma) = stem_and_lemma(&src.mark);
    let (_, dst_lemma) = stem_and_lemma(&dst.mark);
    format!(
        "<e><p><l>{}<s n=\"{}\"/></l><r>{}<s n=\"{}\"/></r></p></e>",
        breakable(&src_lemma),
        category,
        breakable(&dst_lemma),
        category
    )
}

/// One restricted bilingual entry. `restriction` is `srl` when the source
/// side carries the alternatives, `slr` for the destination side; the first
/// alternative is tagged as the default with a trailing ` D`.
fn bilingual_restricted_entry(
    restriction: &str,
    key: &str,
    is_default: bool,
    src_lemma: &str,
    dst_lemma: &str,
    category: &str,
) -> String {
    let default_mark = if is_default { " D" } else { "" };
    format!(
        "<e {}=\"{}{}\"><p><l>{}<s n=\"{}\"/></l><r>{}<s n=\"{}\"/></r></p></e>",
        restriction,
        key,
        default_mark,
        breakable(src_lemma),
        category,
        breakable(dst_lemma),
        category
    )
}

/// Render one line into entry fragments for the requested dictionary.
///
/// Expects a line that passed the ambiguity check: at most one side holds
/// alternatives. Monolingual targets expand every pair of their side;
/// bilingual output pairs the single-pair side against each alternative.
pub fn render_line(line: &ParsedLine, target: Target, category: &str) -> Vec<String> {
    match target {
        Target::SourceMonodix => line
            .src
            .iter()
            .map(|pair| monodix_entry(pair, category))
            .collect(),
        Target::DestinationMonodix => line
            .dst
            .iter()
            .map(|pair| monodix_entry(pair, category))
            .collect(),
        Target::Bilingual => {
            if line.src.len() > 1 {
                let (_, dst_lemma) = stem_and_lemma(&line.dst[0].mark);
                line.src
                    .iter()
                    .enumerate()
                    .map(|(i, pair)| {
                        let (_, src_lemma) = stem_and_lemma(&pair.mark);
                        bilingual_restricted_entry(
                            "srl", &src_lemma, i == 0, &src_lemma, &dst_lemma, category,
                        )
                    })
                    .collect()
            } else if line.dst.len() > 1 {
                let (_, src_lemma) = stem_and_lemma(&line.src[0].mark);
                line.dst
                    .iter()
                    .enumerate()
                    .map(|(i, pair)| {
                        let (_, dst_lemma) = stem_and_lemma(&pair.mark);
                        bilingual_restricted_entry(
                            "slr", &dst_lemma, i == 0, &src_lemma, &dst_lemma, category,
                        )
                    })
                    .collect()
            } else {
                vec![bilingual_entry(&line.src[0], &line.dst[0], category)]
            }
        }
    }
}
