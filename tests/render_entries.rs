//! Snapshot tests for every fragment shape the renderer produces

use skel2dix::skel::line::MarkPair;
use skel2dix::skel::parser::parse_line;
use skel2dix::skel::render::{bilingual_entry, monodix_entry, render_line, Target, WORD_BREAK};

#[test]
fn test_monodix_shapes() {
    insta::assert_snapshot!(
        monodix_entry(&MarkPair::new("earn", "reg"), "vblex"),
        @r#"<e lm="earn"><i>earn</i><par n="reg__vblex"/></e>"#
    );
    insta::assert_snapshot!(
        monodix_entry(&MarkPair::new("f/ind", "irr"), "vblex"),
        @r#"<e lm="find"><i>f</i><par n="irr__vblex"/></e>"#
    );
    insta::assert_snapshot!(
        monodix_entry(&MarkPair::new("a lot", ""), "adj"),
        @r#"<e lm="a lot"><i>a<b/>lot</i><par n="adj"/></e>"#
    );
}

#[test]
fn test_bilingual_shapes() {
    insta::assert_snapshot!(
        bilingual_entry(&MarkPair::new("snack", ""), &MarkPair::new("baggin", ""), "n"),
        @r#"<e><p><l>snack<s n="n"/></l><r>baggin<s n="n"/></r></p></e>"#
    );

    let src_alternates = parse_line("{.wierd.bizzare.strange}.bizzare").unwrap();
    insta::assert_snapshot!(
        render_line(&src_alternates.with_defaults(), Target::Bilingual, "adj").join("\n"),
        @r#"
    <e srl="wierd D"><p><l>wierd<s n="adj"/></l><r>bizzare<s n="adj"/></r></p></e>
    <e srl="bizzare"><p><l>bizzare<s n="adj"/></l><r>bizzare<s n="adj"/></r></p></e>
    <e srl="strange"><p><l>strange<s n="adj"/></l><r>bizzare<s n="adj"/></r></p></e>
    "#
    );

    let dst_alternates = parse_line(".snack{.baggin.casse-croute}").unwrap();
    insta::assert_snapshot!(
        render_line(&dst_alternates.with_defaults(), Target::Bilingual, "n").join("\n"),
        @r#"
    <e slr="baggin D"><p><l>snack<s n="n"/></l><r>baggin<s n="n"/></r></p></e>
    <e slr="casse-croute"><p><l>snack<s n="n"/></l><r>casse-croute<s n="n"/></r></p></e>
    "#
    );
}

/// A mark without a stem cut renders its own text back, word breaks aside.
#[test]
fn test_monodix_round_trip() {
    for mark in ["head", "a lot", "casse-croute"] {
        let entry = monodix_entry(&MarkPair::new(mark, ""), "n");
        let inner = format!("<i>{}</i>", mark.replace(' ', WORD_BREAK));
        assert!(
            entry.contains(&inner),
            "{} should embed {} verbatim",
            entry,
            inner
        );
    }
}

/// Mark-level override combined with the active category.
#[test]
fn test_override_qualifies_the_category() {
    let parsed = parse_line(".dandy:vblex.elegant").unwrap();
    let entries = render_line(&parsed.with_defaults(), Target::SourceMonodix, "n");
    assert_eq!(entries.len(), 1);
    assert!(entries[0].contains("<par n=\"vblex__n\"/>"));

    let parsed = parse_line(".dandy.elegant").unwrap();
    let entries = render_line(&parsed.with_defaults(), Target::SourceMonodix, "n");
    assert!(entries[0].contains("<par n=\"n\"/>"));
}

/// Set defaults reach the rendered paradigm through substitution.
#[test]
fn test_set_default_reaches_the_paradigm() {
    let parsed = parse_line("{.a.b.c}:D.x:q").unwrap();
    let entries = render_line(&parsed.with_defaults(), Target::SourceMonodix, "n");
    assert_eq!(entries.len(), 3);
    for entry in &entries {
        assert!(entry.contains("<par n=\"D__n\"/>"), "{}", entry);
    }
}
