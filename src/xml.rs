//! The XML renderer, showing how each region of a document was classified.

use std::cmp;
use std::fmt::{self, Write};

use crate::nodes::{Document, Node, NodeCode};
use crate::placeholder::{self, DISPLAY};
use crate::strings;

const MAX_INDENT: u32 = 40;

/// Formats a document as XML, for inspecting how the input was classified.
///
/// ```rust
/// # use mathspan::{format_xml, parse_document, Options};
/// let doc = parse_document("test $$a$$", &Options::default());
/// let mut xml = String::new();
/// format_xml(&doc, &mut xml).unwrap();
/// assert!(xml.contains("<code math_style=\"display\" loading=\"true\" xml:space=\"preserve\">a</code>"));
/// ```
pub fn format_document(doc: &Document, output: &mut dyn Write) -> fmt::Result {
    output.write_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n")?;
    output.write_str("<document>\n")?;

    let mut f = XmlFormatter {
        output: &mut *output,
        indent: 2,
    };
    for node in &doc.children {
        f.format(node)?;
    }

    output.write_str("</document>\n")
}

struct XmlFormatter<'o> {
    output: &'o mut dyn Write,
    indent: u32,
}

impl<'o> XmlFormatter<'o> {
    fn escape(&mut self, buffer: &str) -> fmt::Result {
        let bytes = buffer.as_bytes();
        const XML_UNSAFE: [bool; 256] = strings::byte_set(b"&<>\"\0");

        let mut offset = 0;
        for (i, &byte) in bytes.iter().enumerate() {
            if XML_UNSAFE[byte as usize] {
                let esc: &str = match byte {
                    b'"' => "&quot;",
                    b'&' => "&amp;",
                    b'<' => "&lt;",
                    b'>' => "&gt;",
                    b'\0' => "\u{fffd}",
                    _ => unreachable!(),
                };
                self.output.write_str(&buffer[offset..i])?;
                self.output.write_str(esc)?;
                offset = i + 1;
            }
        }
        self.output.write_str(&buffer[offset..])?;
        Ok(())
    }

    fn indent(&mut self) -> fmt::Result {
        for _ in 0..(cmp::min(self.indent, MAX_INDENT)) {
            self.output.write_str(" ")?;
        }
        Ok(())
    }

    fn literal(&mut self, name: &str, literal: &str) -> fmt::Result {
        self.output.write_str(" xml:space=\"preserve\">")?;
        self.escape(literal)?;
        writeln!(self.output, "</{}>", name)
    }

    fn math(&mut self, name: &str, code: &NodeCode) -> fmt::Result {
        if code.has_class(DISPLAY) {
            self.output.write_str(" math_style=\"display\"")?;
        } else {
            self.output.write_str(" math_style=\"inline\"")?;
        }
        if placeholder::is_loading(&code.classes) {
            self.output.write_str(" loading=\"true\"")?;
        }
        self.literal(name, &code.literal)
    }

    fn format(&mut self, node: &Node) -> fmt::Result {
        let name = node.xml_node_name();
        self.indent()?;
        write!(self.output, "<{}", name)?;

        match node {
            Node::Paragraph(inlines) => {
                self.output.write_str(">\n")?;
                self.indent += 2;
                for inl in inlines {
                    self.format(inl)?;
                }
                self.indent -= 2;
                self.indent()?;
                writeln!(self.output, "</{}>", name)
            }
            Node::CodeBlock(literal) | Node::Text(literal) => self.literal(name, literal),
            Node::Code(code) => self.math(name, code),
            Node::Pre(pre) => {
                if placeholder::is_loading(&pre.classes) {
                    self.output.write_str(" loading=\"true\"")?;
                }
                if pre.multiline {
                    self.output.write_str(" multiline=\"true\"")?;
                }
                self.output.write_str(">\n")?;
                self.indent += 2;
                self.indent()?;
                self.output.write_str("<code")?;
                self.math("code", &pre.code)?;
                self.indent -= 2;
                self.indent()?;
                writeln!(self.output, "</{}>", name)
            }
        }
    }
}
