pub const TAB_STOP: usize = 4;

/// Lines indented this far are indented code, never block math.
pub const CODE_INDENT: usize = 4;

/// Build a lookup table marking each byte in `bytes`.
pub const fn byte_set(bytes: &[u8]) -> [bool; 256] {
    let mut set = [false; 256];
    let mut i = 0;
    while i < bytes.len() {
        set[bytes[i] as usize] = true;
        i += 1;
    }
    set
}

pub fn is_space_or_tab(ch: char) -> bool {
    matches!(ch, ' ' | '\t')
}

pub fn is_line_end_char(ch: u8) -> bool {
    matches!(ch, 10 | 13)
}

pub fn is_blank(s: &str) -> bool {
    s.chars().all(|c| is_space_or_tab(c) || c == '\r' || c == '\n')
}

pub fn rtrim_slice(mut i: &str) -> &str {
    while let Some(rest) = i.strip_suffix(|c: char| c.is_ascii_whitespace()) {
        i = rest;
    }
    i
}

pub fn ltrim_slice(mut i: &str) -> &str {
    while let Some(rest) = i.strip_prefix(is_space_or_tab) {
        i = rest;
    }
    i
}

/// Measure the leading whitespace of a line in columns.
///
/// Returns the column width and the byte offset of the first non-whitespace
/// character.
pub fn indent_width(line: &str) -> (usize, usize) {
    let mut column = 0;
    for (i, c) in line.char_indices() {
        match c {
            ' ' => column += 1,
            '\t' => column += TAB_STOP - (column % TAB_STOP),
            _ => return (column, i),
        }
    }
    (column, line.len())
}

/// Strip at most `max` leading spaces from a line.
///
/// The amount is fixed by the caller rather than measured per line, so lines
/// with deeper indentation keep the excess.
pub fn strip_spaces(line: &str, max: usize) -> &str {
    let n = line.bytes().take(max).take_while(|&b| b == b' ').count();
    &line[n..]
}

/// Strip leading whitespace up to `columns` columns, counting tabs to the
/// next tab stop.  A tab straddling the limit is removed whole.
pub fn strip_columns(line: &str, columns: usize) -> &str {
    let mut column = 0;
    for (i, c) in line.char_indices() {
        if column >= columns {
            return &line[i..];
        }
        match c {
            ' ' => column += 1,
            '\t' => column += TAB_STOP - (column % TAB_STOP),
            _ => return &line[i..],
        }
    }
    ""
}

/// Drop one leading and one trailing space from inline math content when
/// both are present and the content is not entirely spaces, so `$ a $` and
/// `$a$` yield the same content.
pub fn trim_math_spaces(v: &str) -> &str {
    let contains_nonspace = v.bytes().any(|b| b != b' ');
    if contains_nonspace && v.len() >= 2 && v.starts_with(' ') && v.ends_with(' ') {
        &v[1..v.len() - 1]
    } else {
        v
    }
}

/// Split a document into lines, without their line terminators.
///
/// `\n`, `\r\n` and a lone `\r` all end a line; a terminator at the very end
/// does not start a further, empty line.
pub fn split_lines(s: &str) -> Vec<&str> {
    let sb = s.as_bytes();
    let end = s.len();
    let matcher = jetscii::bytes!(b'\r', b'\n');

    let mut lines = vec![];
    let mut ix = 0;

    while ix < end {
        let eol = match matcher.find(&sb[ix..]) {
            Some(offset) => ix + offset,
            None => end,
        };
        lines.push(&s[ix..eol]);

        let mut next = eol;
        if next < end {
            if sb[next] == b'\r' {
                next += 1;
                if next < end && sb[next] == b'\n' {
                    next += 1;
                }
            } else if is_line_end_char(sb[next]) {
                next += 1;
            }
        }
        ix = next;
    }

    lines
}
