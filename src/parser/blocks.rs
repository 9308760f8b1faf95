//! Whole-line math blocks: `$$...$$` and `\[...\]` alone on a line, and
//! multi-line regions opened and closed by lines holding only `$$` or
//! `\[`/`\]`.

use tracing::debug;

use crate::nodes::{DelimiterStyle, LineOrBlock, MathKind, MathSpan};
use crate::parser::options::Options;
use crate::strings::{self, CODE_INDENT};

const BLOCK_STYLE_COUNT: usize = 2;
const BLOCK_STYLES: [DelimiterStyle; BLOCK_STYLE_COUNT] =
    [DelimiterStyle::DoubleDollar, DelimiterStyle::BracketEscape];

pub struct BlockExtractor<'o, 'l, 'i> {
    options: &'o Options,
    lines: &'l [&'i str],
    // Set once a search for the closer of (style, indent) has failed; a later
    // opener with the same style and indent cannot find one either.
    unterminated: [[bool; CODE_INDENT]; BLOCK_STYLE_COUNT],
}

impl<'o, 'l, 'i> BlockExtractor<'o, 'l, 'i> {
    pub fn new(options: &'o Options, lines: &'l [&'i str]) -> Self {
        BlockExtractor {
            options,
            lines,
            unterminated: [[false; CODE_INDENT]; BLOCK_STYLE_COUNT],
        }
    }

    pub fn extract(mut self) -> Vec<LineOrBlock<'i>> {
        let mut out = Vec::with_capacity(self.lines.len());
        let mut ix = 0;

        while ix < self.lines.len() {
            let line = self.lines[ix];
            match self.try_block(ix) {
                Some((span, consumed)) => {
                    debug!(
                        line = ix + 1,
                        lines = consumed,
                        delimiter = ?span.delimiter,
                        "block math"
                    );
                    out.push(LineOrBlock::Block(span));
                    ix += consumed;
                }
                None => {
                    out.push(LineOrBlock::Line(line));
                    ix += 1;
                }
            }
        }

        out
    }

    fn enabled(&self, style: DelimiterStyle) -> bool {
        match style {
            DelimiterStyle::DoubleDollar => self.options.extension.math_dollars,
            DelimiterStyle::BracketEscape => self.options.extension.math_escapes,
            _ => false,
        }
    }

    /// Try to open a block at line `ix`, returning the span and the number
    /// of lines it claims.
    fn try_block(&mut self, ix: usize) -> Option<(MathSpan, usize)> {
        let line = self.lines[ix];
        let (width, first_nonspace) = strings::indent_width(line);
        if width >= CODE_INDENT {
            return None;
        }

        // Indentation below CODE_INDENT is all spaces, so width is also the
        // byte count to strip from following lines.
        let indent = first_nonspace;
        let body = strings::rtrim_slice(&line[first_nonspace..]);

        for (s, &style) in BLOCK_STYLES.iter().enumerate() {
            if !self.enabled(style) || !body.starts_with(style.opener()) {
                continue;
            }

            if let Some(span) = single_line(style, line, body) {
                return Some((span, 1));
            }

            if body == style.opener() {
                if self.unterminated[s][indent] {
                    return None;
                }
                match self.multi_line(style, ix, indent) {
                    Some(claimed) => return Some(claimed),
                    None => {
                        debug!(line = ix + 1, ?style, "unterminated block math left literal");
                        self.unterminated[s][indent] = true;
                        return None;
                    }
                }
            }
        }

        None
    }

    fn multi_line(
        &self,
        style: DelimiterStyle,
        ix: usize,
        indent: usize,
    ) -> Option<(MathSpan, usize)> {
        let offset = self.lines[ix + 1..].iter().position(|line| {
            strings::rtrim_slice(strings::strip_spaces(line, indent)) == style.closer()
        })?;
        let close = ix + 1 + offset;

        let content = self.lines[ix + 1..close]
            .iter()
            .map(|line| strings::strip_spaces(line, indent))
            .collect::<Vec<_>>()
            .join("\n");

        let span = MathSpan {
            kind: MathKind::Block,
            display: true,
            content,
            delimiter: style,
            multiline: true,
            source: self.lines[ix..=close].join("\n"),
        };
        Some((span, close - ix + 1))
    }
}

/// A line consisting solely of opener, non-empty content and closer.  The
/// first closer after the opener ends the content; anything but whitespace
/// after it means the line is not a block and is left to the inline scanner.
fn single_line(style: DelimiterStyle, line: &str, body: &str) -> Option<MathSpan> {
    let inner = &body[style.opener().len()..];
    let close = inner.find(style.closer())?;
    if close == 0 || close + style.closer().len() != inner.len() {
        return None;
    }

    Some(MathSpan {
        kind: MathKind::Block,
        display: true,
        content: inner[..close].to_string(),
        delimiter: style,
        multiline: false,
        source: line.to_string(),
    })
}
