//! The HTML renderer for the output node tree.

use std::fmt::{self, Write};

use crate::nodes::{ClassList, Document, Node, NodeCode, NodePre};
use crate::strings;

/// Formats a document as HTML.
///
/// Math placeholders are written with their class markers and raw source:
///
/// ```rust
/// # use mathspan::{format_html, parse_document, Options};
/// let doc = parse_document("$$ x $$\nfoo", &Options::default());
/// let mut html = String::new();
/// format_html(&doc, &mut html).unwrap();
/// assert_eq!(html,
///            "<pre class=\"code-block is-loading\"><code class=\"chroma language-math display\"> x </code></pre>\n\
///             <p>foo</p>\n");
/// ```
pub fn format_document(doc: &Document, output: &mut dyn Write) -> fmt::Result {
    let mut f = HtmlFormatter::new(output);
    for node in &doc.children {
        f.format(node)?;
    }
    Ok(())
}

/// Writes `buffer` to `output`, escaping anything that could be interpreted
/// as markup.
pub fn escape(output: &mut dyn Write, buffer: &str) -> fmt::Result {
    const HTML_UNSAFE: [bool; 256] = strings::byte_set(b"&<>\"");

    let bytes = buffer.as_bytes();
    let mut offset = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        if HTML_UNSAFE[byte as usize] {
            let esc: &str = match byte {
                b'"' => "&quot;",
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                _ => unreachable!(),
            };
            output.write_str(&buffer[offset..i])?;
            output.write_str(esc)?;
            offset = i + 1;
        }
    }
    output.write_str(&buffer[offset..])
}

struct HtmlFormatter<'o> {
    output: &'o mut dyn Write,
    last_was_lf: bool,
}

impl<'o> Write for HtmlFormatter<'o> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if let Some(last) = s.as_bytes().last() {
            self.last_was_lf = *last == b'\n';
        }
        self.output.write_str(s)
    }
}

impl<'o> HtmlFormatter<'o> {
    fn new(output: &'o mut dyn Write) -> Self {
        HtmlFormatter {
            output,
            last_was_lf: true,
        }
    }

    fn cr(&mut self) -> fmt::Result {
        if !self.last_was_lf {
            self.write_str("\n")?;
        }
        Ok(())
    }

    fn escape(&mut self, buffer: &str) -> fmt::Result {
        escape(self, buffer)
    }

    fn classes(&mut self, classes: &ClassList) -> fmt::Result {
        self.write_str(" class=\"")?;
        for (i, class) in classes.iter().enumerate() {
            if i > 0 {
                self.write_str(" ")?;
            }
            self.escape(class)?;
        }
        self.write_str("\"")
    }

    fn code(&mut self, code: &NodeCode, multiline: bool) -> fmt::Result {
        self.write_str("<code")?;
        self.classes(&code.classes)?;
        self.write_str(">")?;
        if multiline {
            // Each source line of a multi-line block keeps its line break,
            // the opener's included.
            self.write_str("\n")?;
            if !code.literal.is_empty() {
                self.escape(&code.literal)?;
                self.write_str("\n")?;
            }
        } else {
            self.escape(&code.literal)?;
        }
        self.write_str("</code>")
    }

    fn format(&mut self, node: &Node) -> fmt::Result {
        match node {
            Node::Paragraph(inlines) => {
                self.cr()?;
                self.write_str("<p>")?;
                for inl in inlines {
                    self.format(inl)?;
                }
                self.write_str("</p>\n")
            }
            Node::CodeBlock(literal) => {
                self.cr()?;
                self.write_str("<pre><code>")?;
                self.escape(literal)?;
                self.write_str("</code></pre>\n")
            }
            Node::Pre(NodePre {
                classes,
                code,
                multiline,
            }) => {
                self.cr()?;
                self.write_str("<pre")?;
                self.classes(classes)?;
                self.write_str(">")?;
                self.code(code, *multiline)?;
                self.write_str("</pre>\n")
            }
            Node::Text(literal) => self.escape(literal),
            Node::Code(code) => self.code(code, false),
        }
    }
}
