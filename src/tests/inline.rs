use super::*;

fn inline(content: &str, delimiter: DelimiterStyle, source: &str) -> MathSpan {
    MathSpan {
        kind: MathKind::Inline,
        display: delimiter.is_display(),
        content: content.to_string(),
        delimiter,
        multiline: false,
        source: source.to_string(),
    }
}

#[test]
fn segments_alternate() {
    let segments = scan_inline("x $a$ and \\(b\\).", &Options::default());

    assert_eq!(
        segments,
        vec![
            Segment::Literal("x ".to_string()),
            Segment::Math(inline("a", DelimiterStyle::Dollar, "$a$")),
            Segment::Literal(" and ".to_string()),
            Segment::Math(inline("b", DelimiterStyle::ParenEscape, "\\(b\\)")),
            Segment::Literal(".".to_string()),
        ]
    );
}

#[test]
fn empty_input() {
    assert_eq!(scan_inline("", &Options::default()), vec![]);
}

#[test]
fn styles_are_symmetric() {
    let dollar = spans("see $x^2$, ok");
    let paren = spans("see \\(x^2\\), ok");

    assert_eq!(dollar.len(), 1);
    assert_eq!(paren.len(), 1);
    assert_eq!(dollar[0].content, paren[0].content);
    assert_eq!(dollar[0].kind, paren[0].kind);
    assert_eq!(dollar[0].display, paren[0].display);
}

#[test]
fn double_dollar_inline_is_display() {
    let found = spans("test $$ x $$ test");

    assert_eq!(found, vec![inline(" x ", DelimiterStyle::DoubleDollar, "$$ x $$")]);
    assert!(found[0].display);
}

#[test]
fn single_spaces_trimmed() {
    assert_eq!(spans("$ a $")[0].content, "a");
    assert_eq!(spans("\\( a \\)")[0].content, "a");
    assert_eq!(spans("$  a  $")[0].content, " a ");
    assert_eq!(spans("$ a$")[0].content, " a");
    assert_eq!(spans("$a $")[0].content, "a ");
}

#[test]
fn escapes_kept_verbatim() {
    assert_eq!(spans("foo $x=\\$$ bar")[0].content, "x=\\$");
    assert_eq!(spans("\\(a\\\\)\\)")[0].content, "a\\\\)");
    assert_eq!(spans("$\\{a\\}$")[0].content, "\\{a\\}");
}

#[test]
fn only_backslash_before_closer_escapes() {
    assert_literal("$\\\\$");
    assert_literal("$a\\\\$ b");
    assert_literal("$$a\\$$ b");
    assert_literal("\\(a\\\\)");

    assert_eq!(spans("$a\\\\\\$ b$")[0].content, "a\\\\\\$ b");
    assert_eq!(spans("$$a\\$$$ x")[0].content, "a\\$");
}

#[test]
fn escaped_dollar_does_not_open() {
    assert_literal("\\$5 and \\$6");
    assert_literal("cost \\$x$");
}

#[test]
fn boundary_refusals() {
    assert_literal("a$x$");
    assert_literal("$x$a");
    assert_literal(".$a$");
    assert_literal("[$c$]");
    assert_literal("$a a$b b$");
}

#[test]
fn rejected_closer_rejects_candidate() {
    // The first `$` after the opener is followed by a letter, so the opener
    // cannot be closed by the trailing `$` either.
    assert_literal("$a$b c$");
}

#[test]
fn empty_spans_literal() {
    assert_literal("$$");
    assert_literal("$$$$");
    assert_literal("\\(\\)");
    assert_literal("a \\(\\) b");
}

#[test]
fn spans_do_not_cross_lines() {
    assert_literal("$a\nb$");
    assert_literal("\\(a\n\\)");

    let found = spans("$a\n$b$");
    assert_eq!(found, vec![inline("b", DelimiterStyle::Dollar, "$b$")]);
}

#[test]
fn unterminated_opener_does_not_hide_later_lines() {
    let found = spans("$a and $b\n$c$ done");

    assert_eq!(found, vec![inline("c", DelimiterStyle::Dollar, "$c$")]);
}

#[test]
fn unterminated_style_does_not_block_others() {
    assert_eq!(spans("\\(a $b$"), vec![inline("b", DelimiterStyle::Dollar, "$b$")]);
    assert_eq!(
        spans("$a \\(b\\)"),
        vec![inline("b", DelimiterStyle::ParenEscape, "\\(b\\)")]
    );
    assert_eq!(
        spans("$$a $b$"),
        vec![inline("b", DelimiterStyle::Dollar, "$b$")]
    );
}

#[test]
fn bracket_escape_not_inline() {
    assert_literal("see \\[x\\] here");
}

#[test]
fn multibyte_neighbours() {
    assert_literal("é$x$");
    assert_literal("$x$é");

    let found = spans("α $β$ γ");
    assert_eq!(found, vec![inline("β", DelimiterStyle::Dollar, "$β$")]);
    assert_lossless("α $β$ γ");
}

#[test]
fn lossless() {
    for input in [
        "",
        "plain text",
        "$a$ $b$",
        "$ a $ and \\( b \\).",
        "test $$ x $$ test",
        "$20,000 and $30,000",
        "foo $x=\\$$ bar",
        "$a\n$b$\n\\(c\\)",
        "trailing backslash \\",
        "$$$$ $ $ \\(\\) \\\\(",
        "unicode: ∑ $∫ x$ ∎",
    ] {
        assert_lossless(input);
    }
}

#[test]
fn dollars_disabled() {
    let mut options = Options::default();
    options.extension.math_dollars = false;

    let segments = scan_inline("$a$ \\(b\\)", &options);
    assert_eq!(
        segments,
        vec![
            Segment::Literal("$a$ ".to_string()),
            Segment::Math(inline("b", DelimiterStyle::ParenEscape, "\\(b\\)")),
        ]
    );
}

#[test]
fn escapes_disabled() {
    let mut options = Options::default();
    options.extension.math_escapes = false;

    let segments = scan_inline("$a$ \\(b\\)", &options);
    assert_eq!(
        segments,
        vec![
            Segment::Math(inline("a", DelimiterStyle::Dollar, "$a$")),
            Segment::Literal(" \\(b\\)".to_string()),
        ]
    );
}
