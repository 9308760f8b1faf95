use tracing::trace;

use crate::nodes::{DelimiterStyle, MathKind, MathSpan, Segment};
use crate::parser::options::Options;
use crate::strings;

/// Outcome of scanning for the closer of an open span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Closing {
    /// The closer starts at the given offset.
    Found(usize),

    /// A closer was found but the character after it does not allow it to
    /// close.
    Rejected,

    /// The line ended without any closer.
    Exhausted,
}

/// The delimiter styles that can open a span within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InlineStyle {
    Dollar,
    DoubleDollar,
    ParenEscape,
}

impl InlineStyle {
    const COUNT: usize = 3;

    fn delimiter(self) -> DelimiterStyle {
        match self {
            InlineStyle::Dollar => DelimiterStyle::Dollar,
            InlineStyle::DoubleDollar => DelimiterStyle::DoubleDollar,
            InlineStyle::ParenEscape => DelimiterStyle::ParenEscape,
        }
    }

    /// The text which, directly after a backslash, is content rather than
    /// a closer.
    fn escaped(self) -> &'static str {
        match self {
            InlineStyle::Dollar | InlineStyle::DoubleDollar => "$",
            InlineStyle::ParenEscape => "\\)",
        }
    }
}

pub struct Subject<'o, 'i> {
    options: &'o Options,
    pub input: &'i str,
    pub pos: usize,
    literal_start: usize,
    eol: usize,
    // For each style, the end of the line on which a scan for its closer
    // last ran out of text.  Later openers of that style before this offset
    // cannot close either.
    exhausted: [Option<usize>; InlineStyle::COUNT],
    segments: Vec<Segment>,
}

impl<'o, 'i> Subject<'o, 'i> {
    pub fn new(options: &'o Options, input: &'i str) -> Self {
        let mut s = Subject {
            options,
            input,
            pos: 0,
            literal_start: 0,
            eol: 0,
            exhausted: [None; InlineStyle::COUNT],
            segments: vec![],
        };
        s.eol = s.find_eol(0);
        s
    }

    /// Consume the input, producing alternating literal and math segments.
    pub fn scan(mut self) -> Vec<Segment> {
        let matcher = jetscii::bytes!(b'$', b'\\');
        let end = self.input.len();

        while self.pos < end {
            match matcher.find(&self.input.as_bytes()[self.pos..]) {
                Some(offset) => self.pos += offset,
                None => break,
            }

            if self.pos > self.eol {
                self.eol = self.find_eol(self.pos);
            }

            match self.handle_opener() {
                Some(span) => {
                    let start = self.pos;
                    self.flush_literal(start);
                    self.pos += span.source.len();
                    self.literal_start = self.pos;
                    self.segments.push(Segment::Math(span));
                }
                None => self.pos += 1,
            }
        }

        self.flush_literal(end);
        self.segments
    }

    fn find_eol(&self, from: usize) -> usize {
        match self.input[from..].find('\n') {
            Some(offset) => from + offset,
            None => self.input.len(),
        }
    }

    fn flush_literal(&mut self, end: usize) {
        if end > self.literal_start {
            self.segments.push(Segment::Literal(
                self.input[self.literal_start..end].to_string(),
            ));
        }
        self.literal_start = end;
    }

    fn peek_byte_n(&self, n: usize) -> Option<u8> {
        self.input.as_bytes().get(self.pos + n).copied()
    }

    fn prev_char(&self, pos: usize) -> Option<char> {
        self.input[..pos].chars().next_back()
    }

    fn opener_style(&self) -> Option<InlineStyle> {
        match self.peek_byte_n(0) {
            Some(b'$') if self.options.extension.math_dollars => {
                if self.peek_byte_n(1) == Some(b'$') {
                    Some(InlineStyle::DoubleDollar)
                } else {
                    Some(InlineStyle::Dollar)
                }
            }
            Some(b'\\') if self.options.extension.math_escapes => {
                if self.peek_byte_n(1) == Some(b'(') {
                    Some(InlineStyle::ParenEscape)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Try to open a span at the cursor.  On success, returns the span; the
    /// cursor is left on the opener for the caller to advance.
    fn handle_opener(&mut self) -> Option<MathSpan> {
        let inline_style = self.opener_style()?;
        let style = inline_style.delimiter();
        let startpos = self.pos;

        if !self
            .options
            .parse
            .boundary
            .is_open_boundary(self.prev_char(startpos))
        {
            trace!(pos = startpos, ?style, "opener not at a boundary");
            return None;
        }

        if let Some(exhausted_eol) = self.exhausted[inline_style as usize] {
            if startpos < exhausted_eol {
                return None;
            }
        }

        let content_start = startpos + style.opener().len();
        let closer_start = match self.scan_to_closer(inline_style, content_start) {
            Closing::Found(closer_start) if closer_start > content_start => closer_start,
            Closing::Found(_) => {
                trace!(pos = startpos, ?style, "empty span left literal");
                return None;
            }
            Closing::Rejected => {
                trace!(pos = startpos, ?style, "closer not at a boundary");
                return None;
            }
            Closing::Exhausted => {
                self.exhausted[inline_style as usize] = Some(self.eol);
                return None;
            }
        };
        let endpos = closer_start + style.closer().len();

        let raw = &self.input[content_start..closer_start];
        let content = match inline_style {
            InlineStyle::Dollar | InlineStyle::ParenEscape => strings::trim_math_spaces(raw),
            InlineStyle::DoubleDollar => raw,
        };

        Some(MathSpan {
            kind: MathKind::Inline,
            display: style.is_display(),
            content: content.to_string(),
            delimiter: style,
            multiline: false,
            source: self.input[startpos..endpos].to_string(),
        })
    }

    fn scan_to_closer(&self, style: InlineStyle, from: usize) -> Closing {
        let closer = style.delimiter().closer();
        let escaped = style.escaped();
        let matcher = jetscii::bytes!(b'$', b'\\');
        let bytes = self.input.as_bytes();
        let mut i = from;

        while i < self.eol {
            match matcher.find(&bytes[i..self.eol]) {
                Some(offset) => i += offset,
                None => return Closing::Exhausted,
            }

            if self.input[i..self.eol].starts_with(closer) {
                let after = i + closer.len();
                let next = self.input[after..].chars().next();
                if self.options.parse.boundary.is_close_boundary(next) {
                    return Closing::Found(i);
                }
                // Any later closer would enclose this unescaped one, so the
                // whole candidate is literal.
                return Closing::Rejected;
            }

            // Only a backslash directly before the closer escapes; any other
            // backslash is ordinary content.
            if bytes[i] == b'\\' && self.input[i + 1..self.eol].starts_with(escaped) {
                i += 1 + escaped.len();
                continue;
            }

            i += 1;
        }

        Closing::Exhausted
    }
}
