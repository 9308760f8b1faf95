//! A math span recognizer for Markdown-to-HTML pipelines.
//!
//! `mathspan` finds the mathematical regions of a Markdown document, written
//! as `$...$`, `$$...$$`, `\(...\)` or `\[...\]`, and turns them into
//! placeholder nodes carrying the raw, unrendered source for a client-side
//! typesetter to pick up.  Everything it does not recognize is kept byte for
//! byte.
//!
//! ```rust
//! use mathspan::{markdown_to_html, Options};
//! assert_eq!(markdown_to_html("Euler: $e^{i\\pi} + 1 = 0$.", &Options::default()),
//!            "<p>Euler: <code class=\"language-math is-loading\">e^{i\\pi} + 1 = 0</code>.</p>\n");
//! ```
//!
//! Display math alone on its line becomes a block:
//!
//! ```rust
//! use mathspan::{markdown_to_html, Options};
//! assert_eq!(markdown_to_html("\\[\n\\alpha\n\\]\n", &Options::default()),
//!            "<pre class=\"code-block is-loading\"><code class=\"chroma language-math display\">\n\
//!             \\alpha\n</code></pre>\n");
//! ```
//!
//! The scanners can be driven separately: [`extract_blocks`] claims
//! whole-line block math from raw lines, and [`scan_inline`] splits paragraph
//! text into [`Segment`]s.  [`emit`] turns a recognized [`MathSpan`] into its
//! placeholder [`Node`].

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use std::fmt;

pub mod html;
pub mod nodes;
mod parser;
pub mod placeholder;
mod strings;
pub mod xml;

pub use html::format_document as format_html;
pub use nodes::{
    ClassList, DelimiterStyle, Document, LineOrBlock, MathKind, MathSpan, Node, NodeCode,
    NodePre, Segment,
};
pub use parser::boundary::{is_close_boundary, is_open_boundary, BoundaryRules};
pub use parser::options::{Extension, Options, Parse};
#[cfg(feature = "bon")]
pub use parser::options::{ExtensionBuilder, ParseBuilder};
pub use parser::{extract_blocks, parse_document, scan_inline};
pub use placeholder::emit;
pub use xml::format_document as format_xml;

/// Render Markdown to HTML.
///
/// See the documentation of the crate root for an example.
pub fn markdown_to_html(md: &str, options: &Options) -> String {
    let doc = parse_document(md, options);
    render(&doc, format_html)
}

/// Render Markdown to XML, showing how each region was classified.
pub fn markdown_to_xml(md: &str, options: &Options) -> String {
    let doc = parse_document(md, options);
    render(&doc, format_xml)
}

fn render(doc: &Document, formatter: fn(&Document, &mut dyn fmt::Write) -> fmt::Result) -> String {
    let mut out = String::new();
    formatter(doc, &mut out).unwrap();
    out
}
