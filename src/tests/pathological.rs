use super::*;
use ntest::timeout;

// input: python3 -c 'n = 50000; print("\\( " * n)'
#[test]
#[timeout(4000)]
fn pathological_unclosed_paren_escapes() {
    let n = 50_000;
    let input = "\\( ".repeat(n);
    let mut exp = format!("<p>{}", input);
    // Right-most space is trimmed in output.
    exp.pop();
    exp += "</p>\n";

    html(&input, &exp);
}

// input: python3 -c 'n = 50000; print("$a " * n)'
#[test]
#[timeout(4000)]
fn pathological_rejected_dollars() {
    let n = 50_000;
    let input = "$a ".repeat(n);
    let mut exp = format!("<p>{}", input);
    exp.pop();
    exp += "</p>\n";

    html(&input, &exp);
}

// input: python3 -c 'n = 50000; print(" $a" * n)'
#[test]
#[timeout(4000)]
fn pathological_unclosed_dollars() {
    let n = 50_000;
    let input = format!("x{}", " $a".repeat(n));
    let exp = format!("<p>{}</p>\n", input);

    html(&input, &exp);
}

// input: python3 -c 'n = 100000; print("$" * n)'
#[test]
#[timeout(4000)]
fn pathological_dollar_run() {
    let n = 100_000;
    let input = "$".repeat(n);
    let exp = format!("<p>{}</p>\n", input);

    html(&input, &exp);
}

// input: python3 -c 'n = 50000; print("\\[\n" * n)'
#[test]
#[timeout(4000)]
fn pathological_unterminated_blocks() {
    let n = 50_000;
    let input = "\\[\n".repeat(n);
    let exp = format!("<p>{}</p>\n", vec!["\\["; n].join("\n"));

    html(&input, &exp);
}

// input: python3 -c 'n = 50000; print("".join(" " * (i % 4) + "\\[\n" for i in range(n)))'
#[test]
#[timeout(4000)]
fn pathological_unterminated_blocks_indented() {
    let n = 50_000;
    let input = (0..n)
        .map(|i| format!("{}\\[\n", " ".repeat(i % 4)))
        .collect::<String>()
        + "text";

    // Not interested in the actual html, just that we don't timeout
    markdown_to_html(&input, &Options::default());
}

// input: python3 -c 'n = 50000; print("\\(a" * n + "\n" + "\\)" * n)'
#[test]
#[timeout(4000)]
fn pathological_escapes_across_lines() {
    let n = 50_000;
    let input = format!("{}\n{}", "\\(a".repeat(n), "\\)".repeat(n));

    let segments = scan_inline(&input, &Options::default());
    assert!(segments.iter().all(|s| matches!(s, Segment::Literal(..))));
}
