//! Fenced code block scanning.
//!
//! A line-oriented scanner that splits a markdown page into prose and fenced
//! code blocks, following the CommonMark fence rules: opener and closer may
//! be indented at most 3 columns, tildes and backticks do not mix, a closer
//! must be at least as long as its opener, and a line with an info string
//! never closes a fence. This is fence detection only, not markdown parsing.

/// A fenced code block captured from a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedBlock {
    /// Language alias from the info string, if present (first word).
    pub lang: Option<String>,
    /// Remainder of the info string after the language, if any.
    pub meta: Option<String>,
    /// The fence contents, with the opener's indentation stripped.
    pub code: String,
}

/// One segment of a scanned page, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSegment {
    /// A run of non-code lines, newline-terminated as in the source.
    Prose(String),
    /// A fenced code block.
    Code(FencedBlock),
}

/// An open fence being tracked by the scanner.
#[derive(Debug, Clone, Copy)]
struct OpenFence {
    marker: char,
    length: usize,
    indent: usize,
}

/// Split a page into prose and fenced code segments.
///
/// An unclosed fence at end of input yields a code segment containing the
/// rest of the page, per CommonMark.
pub fn scan_segments(input: &str) -> Vec<PageSegment> {
    let mut segments = Vec::new();
    let mut prose = String::new();
    let mut open: Option<(OpenFence, FencedBlock)> = None;

    for line in input.lines() {
        match open.take() {
            None => {
                if let Some((fence, block)) = try_open(line) {
                    if !prose.is_empty() {
                        segments.push(PageSegment::Prose(std::mem::take(&mut prose)));
                    }
                    open = Some((fence, block));
                } else {
                    prose.push_str(line);
                    prose.push('\n');
                }
            }
            Some((fence, mut block)) => {
                if closes(line, fence) {
                    segments.push(PageSegment::Code(block));
                } else {
                    block.code.push_str(strip_opener_indent(line, fence.indent));
                    block.code.push('\n');
                    open = Some((fence, block));
                }
            }
        }
    }

    if let Some((fence, block)) = open {
        log::debug!(
            "unclosed {} fence at end of page; treating remainder as code",
            fence.marker
        );
        segments.push(PageSegment::Code(block));
    }
    if !prose.is_empty() {
        segments.push(PageSegment::Prose(prose));
    }

    segments
}

/// Try to open a fence on this line, capturing its info string.
fn try_open(line: &str) -> Option<(OpenFence, FencedBlock)> {
    let (indent, byte_offset) = leading_whitespace_info(line);
    if indent > 3 {
        // 4+ columns is an indented code block, not a fence opener.
        return None;
    }
    let after_indent = &line[byte_offset..];
    let (marker, length) = marker_run(after_indent)?;

    let info = after_indent[length..].trim();
    if marker == '`' && info.contains('`') {
        // CommonMark: backtick fences may not carry backticks in the info string.
        return None;
    }

    let (lang, meta) = match info.split_once(char::is_whitespace) {
        Some((lang, meta)) => (Some(lang), Some(meta.trim())),
        None if info.is_empty() => (None, None),
        None => (Some(info), None),
    };

    let block = FencedBlock {
        lang: lang.map(str::to_string),
        meta: meta.filter(|m| !m.is_empty()).map(str::to_string),
        code: String::new(),
    };
    let fence = OpenFence {
        marker,
        length,
        indent,
    };
    Some((fence, block))
}

/// Whether this line closes the given open fence.
fn closes(line: &str, fence: OpenFence) -> bool {
    let (indent, byte_offset) = leading_whitespace_info(line);
    if indent > 3 {
        return false;
    }
    let after_indent = &line[byte_offset..];
    match marker_run(after_indent) {
        Some((marker, length)) => {
            marker == fence.marker
                && length >= fence.length
                && after_indent[length..].trim().is_empty()
        }
        None => false,
    }
}

/// Strip up to `indent` leading space columns from a fence content line.
fn strip_opener_indent(line: &str, indent: usize) -> &str {
    let mut stripped = 0;
    let mut bytes = 0;
    for b in line.bytes() {
        if b == b' ' && stripped < indent {
            stripped += 1;
            bytes += 1;
        } else {
            break;
        }
    }
    &line[bytes..]
}

/// Returns (visual_columns, byte_offset) for leading whitespace.
/// Visual columns expand tabs to 4-column boundaries per CommonMark.
fn leading_whitespace_info(line: &str) -> (usize, usize) {
    let mut col = 0;
    let mut bytes = 0;
    for b in line.bytes() {
        match b {
            b' ' => {
                col += 1;
                bytes += 1;
            }
            b'\t' => {
                col += 4 - (col % 4);
                bytes += 1;
            }
            _ => break,
        }
    }
    (col, bytes)
}

/// Detect a run of 3+ fence markers, returning the marker and run length.
fn marker_run(after_indent: &str) -> Option<(char, usize)> {
    let mut chars = after_indent.chars();
    let first = chars.next()?;
    if first != '`' && first != '~' {
        return None;
    }
    let run_len = 1 + chars.take_while(|c| *c == first).count();
    if run_len >= 3 {
        Some((first, run_len))
    } else {
        None
    }
}
