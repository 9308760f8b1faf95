use super::*;

#[track_caller]
fn xml(input: &str, expected: &str) {
    let output = markdown_to_xml(input, &Options::default());
    compare_strs(&output, expected, "xml", input);
}

#[test]
fn basic() {
    xml(
        "a $b$ \\(c\\)\n\n$$d$$",
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<document>\n",
            "  <paragraph>\n",
            "    <text xml:space=\"preserve\">a </text>\n",
            "    <code math_style=\"inline\" loading=\"true\" xml:space=\"preserve\">b</code>\n",
            "    <text xml:space=\"preserve\"> </text>\n",
            "    <code math_style=\"inline\" loading=\"true\" xml:space=\"preserve\">c</code>\n",
            "  </paragraph>\n",
            "  <pre loading=\"true\">\n",
            "    <code math_style=\"display\" xml:space=\"preserve\">d</code>\n",
            "  </pre>\n",
            "</document>\n",
        ),
    );
}

#[test]
fn multiline_and_code() {
    xml(
        "\\[\nx < y\n\\]\n\n    $e$",
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<document>\n",
            "  <pre loading=\"true\" multiline=\"true\">\n",
            "    <code math_style=\"display\" xml:space=\"preserve\">x &lt; y</code>\n",
            "  </pre>\n",
            "  <code_block xml:space=\"preserve\">$e$\n</code_block>\n",
            "</document>\n",
        ),
    );
}

#[test]
fn inline_display() {
    xml(
        "test $$a$$",
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<document>\n",
            "  <paragraph>\n",
            "    <text xml:space=\"preserve\">test </text>\n",
            "    <code math_style=\"display\" loading=\"true\" xml:space=\"preserve\">a</code>\n",
            "  </paragraph>\n",
            "</document>\n",
        ),
    );
}

#[test]
fn empty() {
    xml(
        "",
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<document>\n</document>\n",
    );
}
