//! Placeholder nodes for math awaiting client-side typesetting.
//!
//! The class markers are read by the hydration script that later replaces
//! these nodes with rendered formulas, and must be reproduced verbatim.

use smallvec::smallvec;

use crate::nodes::{ClassList, MathKind, MathSpan, Node, NodeCode, NodePre};

/// Marks a text container holding math source.
pub const LANGUAGE_MATH: &str = "language-math";

/// Marks display (as opposed to inline) math.
pub const DISPLAY: &str = "display";

/// Marks raw, unrendered math pending typesetting.
pub const IS_LOADING: &str = "is-loading";

/// Marks the preformatted container of block math.
pub const CODE_BLOCK: &str = "code-block";

/// Marks the text container inside block math.
pub const CHROMA: &str = "chroma";

/// Build the output node for a math span.
///
/// ```rust
/// # use mathspan::{emit, scan_inline, Node, Options, Segment};
/// let segments = scan_inline("$a$", &Options::default());
/// let Segment::Math(ref span) = segments[0] else { unreachable!() };
/// let Node::Code(code) = emit(span) else { unreachable!() };
/// assert_eq!(code.classes.join(" "), "language-math is-loading");
/// assert_eq!(code.literal, "a");
/// ```
pub fn emit(span: &MathSpan) -> Node {
    match (span.kind, span.display) {
        (MathKind::Inline, false) => Node::Code(NodeCode {
            classes: smallvec![LANGUAGE_MATH, IS_LOADING],
            literal: span.content.clone(),
        }),
        (MathKind::Inline, true) => Node::Code(NodeCode {
            classes: smallvec![LANGUAGE_MATH, DISPLAY, IS_LOADING],
            literal: span.content.clone(),
        }),
        (MathKind::Block, _) => Node::Pre(NodePre {
            classes: smallvec![CODE_BLOCK, IS_LOADING],
            code: NodeCode {
                classes: smallvec![CHROMA, LANGUAGE_MATH, DISPLAY],
                literal: span.content.clone(),
            },
            multiline: span.multiline,
        }),
    }
}

/// Whether the classes mark a placeholder still awaiting typesetting.
pub fn is_loading(classes: &ClassList) -> bool {
    classes.iter().any(|&c| c == IS_LOADING)
}
