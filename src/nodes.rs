//! The math span model and the output node tree.

use smallvec::SmallVec;

/// The delimiter pair a math span was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum DelimiterStyle {
    /// `$...$`.  Always inline and non-display.
    Dollar,

    /// `$$...$$`.  Always display; a block when it is the sole content of its
    /// line(s), inline otherwise.
    DoubleDollar,

    /// `\(...\)`.  Always inline and non-display.
    ParenEscape,

    /// `\[...\]`.  Always a display block.
    BracketEscape,
}

impl DelimiterStyle {
    /// The opening delimiter as written in the source.
    pub fn opener(self) -> &'static str {
        match self {
            DelimiterStyle::Dollar => "$",
            DelimiterStyle::DoubleDollar => "$$",
            DelimiterStyle::ParenEscape => "\\(",
            DelimiterStyle::BracketEscape => "\\[",
        }
    }

    /// The closing delimiter as written in the source.
    pub fn closer(self) -> &'static str {
        match self {
            DelimiterStyle::Dollar => "$",
            DelimiterStyle::DoubleDollar => "$$",
            DelimiterStyle::ParenEscape => "\\)",
            DelimiterStyle::BracketEscape => "\\]",
        }
    }

    /// Whether spans with this delimiter are display math.
    pub fn is_display(self) -> bool {
        matches!(
            self,
            DelimiterStyle::DoubleDollar | DelimiterStyle::BracketEscape
        )
    }
}

/// Where a math span sits in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathKind {
    /// Among running text in a paragraph.
    Inline,

    /// Occupying whole line(s) on its own.
    Block,
}

/// A recognized math span.
///
/// Spans are created per parse from raw text and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathSpan {
    /// Inline or block.
    pub kind: MathKind,

    /// Whether the span is display math (`$$` or `\[`).
    pub display: bool,

    /// The text between the delimiters.  Backslash escapes are kept
    /// verbatim, so `$x=\$$` has the content `x=\$`.  For `$` and `\(` spans
    /// a single surrounding space on each side has been trimmed.
    pub content: String,

    /// The delimiter the span was written with.
    pub delimiter: DelimiterStyle,

    /// Whether the span was accumulated from several source lines.  Only
    /// block spans can be multi-line; their content is the interior lines
    /// joined with `\n`.
    pub multiline: bool,

    /// The exact source text of the span, delimiters (and, for blocks, the
    /// opener and closer lines) included.
    pub source: String,
}

/// A run of scanned inline text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text which is not math, exactly as it appeared in the input.
    Literal(String),

    /// A math span.
    Math(MathSpan),
}

impl Segment {
    /// The original text this segment was scanned from.
    ///
    /// Concatenating the sources of every segment returned by
    /// [`scan_inline`](crate::scan_inline) reproduces its input.
    pub fn source(&self) -> &str {
        match self {
            Segment::Literal(text) => text,
            Segment::Math(span) => &span.source,
        }
    }
}

/// The result of block extraction for one region of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOrBlock<'i> {
    /// A line not claimed by block math, to be handed to the block
    /// tokenizer unchanged.
    Line(&'i str),

    /// A block math span claiming one or more whole lines.
    Block(MathSpan),
}

/// Class markers carried by a container node, in serialization order.
pub type ClassList = SmallVec<[&'static str; 4]>;

/// An inline text container (`<code>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeCode {
    /// Class markers.
    pub classes: ClassList,

    /// The literal, unescaped text of the container.
    pub literal: String,
}

/// A preformatted block container (`<pre>`) wrapping a single text container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePre {
    /// Class markers of the outer container.
    pub classes: ClassList,

    /// The wrapped text container.
    pub code: NodeCode,

    /// Whether the wrapped text came from several source lines.
    pub multiline: bool,
}

impl NodeCode {
    /// Whether the container carries the given class marker.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|&c| c == class)
    }
}

/// The output node tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// **Block**.  A paragraph.  Contains **inlines**.
    Paragraph(Vec<Node>),

    /// **Block**.  An indented code block, passed through without scanning.
    CodeBlock(String),

    /// **Block**.  A preformatted container, as emitted for block math.
    Pre(NodePre),

    /// **Inline**.  Literal text.  Soft line breaks are kept as `\n`.
    Text(String),

    /// **Inline**.  A text container, as emitted for inline math.
    Code(NodeCode),
}

impl Node {
    /// Whether this node is a block-level node.
    pub fn block(&self) -> bool {
        matches!(self, Node::Paragraph(..) | Node::CodeBlock(..) | Node::Pre(..))
    }

    pub(crate) fn xml_node_name(&self) -> &'static str {
        match self {
            Node::Paragraph(..) => "paragraph",
            Node::CodeBlock(..) => "code_block",
            Node::Pre(..) => "pre",
            Node::Text(..) => "text",
            Node::Code(..) => "code",
        }
    }
}

/// A parsed document: the top-level sequence of block nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// The blocks of the document, in source order.
    pub children: Vec<Node>,
}

impl Document {
    /// Iterate over every math text container in the document, in source
    /// order.
    pub fn math(&self) -> impl Iterator<Item = &NodeCode> + '_ {
        self.children.iter().flat_map(|block| {
            let nodes: Vec<&NodeCode> = match block {
                Node::Pre(pre) => vec![&pre.code],
                Node::Paragraph(inlines) => inlines
                    .iter()
                    .filter_map(|inl| match inl {
                        Node::Code(code) => Some(code),
                        _ => None,
                    })
                    .collect(),
                _ => vec![],
            };
            nodes
        })
    }
}
