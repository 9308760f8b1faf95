//! Delimiter boundary classification.
//!
//! A `$` or `\(` only opens a span when the character before it is absent,
//! whitespace, or allowed opening punctuation; a closer only closes when the
//! character after it is absent, whitespace, or allowed closing punctuation.
//! This keeps `a$x$` and `$x$a` literal while `$a$.` and `($b$)` render.
//! Brackets and braces are absent from the default tables, so
//! `[$c$]` and `{$d$}` stay literal.

/// Characters allowed immediately before an inline opener by default.
pub const DEFAULT_OPEN_PUNCTUATION: &str = "(";

/// Characters allowed immediately after an inline closer by default.
pub const DEFAULT_CLOSE_PUNCTUATION: &str = ").,;:!?";

/// The table of punctuation allowed around inline delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct BoundaryRules {
    /// Punctuation allowed immediately before an opener.
    pub open_punctuation: String,

    /// Punctuation allowed immediately after a closer.
    pub close_punctuation: String,
}

impl Default for BoundaryRules {
    fn default() -> Self {
        BoundaryRules::new(DEFAULT_OPEN_PUNCTUATION, DEFAULT_CLOSE_PUNCTUATION)
    }
}

impl BoundaryRules {
    /// Construct a rule table from the allowed opening and closing
    /// punctuation.
    pub fn new(open_punctuation: &str, close_punctuation: &str) -> Self {
        BoundaryRules {
            open_punctuation: open_punctuation.to_string(),
            close_punctuation: close_punctuation.to_string(),
        }
    }

    /// Whether an opener preceded by `prev` may open a span.
    ///
    /// `None` means the opener is at the start of the text or line.
    pub fn is_open_boundary(&self, prev: Option<char>) -> bool {
        allowed(prev, &self.open_punctuation)
    }

    /// Whether a closer followed by `next` may close a span.
    ///
    /// `None` means the closer is at the end of the text or line.
    pub fn is_close_boundary(&self, next: Option<char>) -> bool {
        allowed(next, &self.close_punctuation)
    }
}

fn allowed(c: Option<char>, punctuation: &str) -> bool {
    match c {
        None => true,
        // Alphanumerics and `$` never border a span, whatever the table says.
        Some(c) if c.is_alphanumeric() || c == '$' => false,
        Some(c) => c.is_whitespace() || punctuation.contains(c),
    }
}

/// Whether an opener preceded by `prev` may open a span, using the default
/// rule table.
pub fn is_open_boundary(prev: Option<char>) -> bool {
    allowed(prev, DEFAULT_OPEN_PUNCTUATION)
}

/// Whether a closer followed by `next` may close a span, using the default
/// rule table.
pub fn is_close_boundary(next: Option<char>) -> bool {
    allowed(next, DEFAULT_CLOSE_PUNCTUATION)
}
