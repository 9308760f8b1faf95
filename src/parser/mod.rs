pub mod boundary;
mod blocks;
mod inlines;
pub mod options;

use tracing::debug;

use crate::nodes::{Document, LineOrBlock, Node, Segment};
use crate::placeholder;
use crate::strings::{self, CODE_INDENT};

use options::Options;

/// Parse a Markdown document into paragraphs, indented code and math
/// placeholders.
///
/// Block math is extracted from the raw lines first; the remaining lines are
/// grouped into paragraphs (split on blank lines) and indented code blocks,
/// and paragraph text is scanned for inline math.
///
/// ```rust
/// # use mathspan::{parse_document, Node, Options};
/// let doc = parse_document("$$a$$\n\ntest $$b$$\n", &Options::default());
/// assert!(matches!(doc.children[0], Node::Pre(..)));
/// assert!(matches!(doc.children[1], Node::Paragraph(..)));
/// ```
pub fn parse_document(md: &str, options: &Options) -> Document {
    let lines = strings::split_lines(md);
    let items = extract_blocks(&lines, options);
    Parser::new(options).parse(items)
}

/// Split inline text into literal runs and inline math spans.
///
/// Spans never cross a line break.  Text that cannot be recognized as math
/// is returned unchanged, so concatenating [`Segment::source`] over the
/// result reproduces `text`.
///
/// ```rust
/// # use mathspan::{scan_inline, Options, Segment};
/// let segments = scan_inline("foo $x=\\$$ bar", &Options::default());
/// assert_eq!(segments.len(), 3);
/// match &segments[1] {
///     Segment::Math(span) => assert_eq!(span.content, "x=\\$"),
///     _ => unreachable!(),
/// }
/// ```
pub fn scan_inline(text: &str, options: &Options) -> Vec<Segment> {
    inlines::Subject::new(options, text).scan()
}

/// Claim whole-line block math from a sequence of raw lines, passing all
/// other lines through unchanged and in order.
pub fn extract_blocks<'i>(lines: &[&'i str], options: &Options) -> Vec<LineOrBlock<'i>> {
    blocks::BlockExtractor::new(options, lines).extract()
}

enum Open<'i> {
    Nothing,
    Paragraph(Vec<&'i str>),
    Code(Vec<&'i str>),
}

struct Parser<'o> {
    options: &'o Options,
    children: Vec<Node>,
}

impl<'o> Parser<'o> {
    fn new(options: &'o Options) -> Self {
        Parser {
            options,
            children: vec![],
        }
    }

    fn parse(mut self, items: Vec<LineOrBlock<'_>>) -> Document {
        let mut open = Open::Nothing;

        for item in items {
            let line = match item {
                LineOrBlock::Block(span) => {
                    self.finalize(open);
                    open = Open::Nothing;
                    self.children.push(placeholder::emit(&span));
                    continue;
                }
                LineOrBlock::Line(line) => line,
            };

            let blank = strings::is_blank(line);
            let (indent, _) = strings::indent_width(line);

            open = match open {
                Open::Paragraph(mut lines) if !blank => {
                    lines.push(line);
                    Open::Paragraph(lines)
                }
                Open::Code(mut lines) if blank || indent >= CODE_INDENT => {
                    lines.push(strings::strip_columns(line, CODE_INDENT));
                    Open::Code(lines)
                }
                other => {
                    self.finalize(other);
                    if blank {
                        Open::Nothing
                    } else if indent >= CODE_INDENT {
                        Open::Code(vec![strings::strip_columns(line, CODE_INDENT)])
                    } else {
                        Open::Paragraph(vec![line])
                    }
                }
            };
        }

        self.finalize(open);
        Document {
            children: self.children,
        }
    }

    fn finalize(&mut self, open: Open<'_>) {
        match open {
            Open::Nothing => (),
            Open::Paragraph(lines) => {
                let text = lines
                    .iter()
                    .map(|line| strings::ltrim_slice(line))
                    .collect::<Vec<_>>()
                    .join("\n");
                let text = strings::rtrim_slice(&text);
                self.children.push(self.paragraph(text));
            }
            Open::Code(mut lines) => {
                while lines.last().map_or(false, |line| strings::is_blank(line)) {
                    lines.pop();
                }
                debug!(lines = lines.len(), "indented code passed through");
                let mut literal = lines.join("\n");
                literal.push('\n');
                self.children.push(Node::CodeBlock(literal));
            }
        }
    }

    fn paragraph(&self, text: &str) -> Node {
        let inlines = scan_inline(text, self.options)
            .into_iter()
            .map(|segment| match segment {
                Segment::Literal(text) => Node::Text(text),
                Segment::Math(span) => placeholder::emit(&span),
            })
            .collect();
        Node::Paragraph(inlines)
    }
}
