//! Leftover source text between classified chunks.

/// A run of lines not covered by any chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gap {
    /// Start line (1-indexed)
    pub start_line: usize,

    /// End line (1-indexed, inclusive)
    pub end_line: usize,

    /// The gap's lines joined with `\n`, trimmed
    pub text: String,
}

/// Complement of `ranges` against the lines of `source`.
///
/// Ranges are 1-indexed inclusive line spans in any order; overlapping or
/// nested ranges are tolerated. Gaps whose text is blank are dropped unless
/// `keep_blank` is set.
pub fn find_gaps(ranges: &[(usize, usize)], source: &str, keep_blank: bool) -> Vec<Gap> {
    let lines: Vec<&str> = source.lines().collect();
    let mut sorted = ranges.to_vec();
    sorted.sort_unstable();

    let mut gaps = Vec::new();
    let mut last_end = 0;

    for (start, end) in sorted {
        if start > last_end + 1 {
            push_gap(&mut gaps, &lines, last_end + 1, start - 1, keep_blank);
        }
        last_end = last_end.max(end);
    }

    if last_end < lines.len() {
        push_gap(&mut gaps, &lines, last_end + 1, lines.len(), keep_blank);
    }

    gaps
}

/// Text of every gap, in source order
pub fn reconstruct(ranges: &[(usize, usize)], source: &str, keep_blank: bool) -> Vec<String> {
    find_gaps(ranges, source, keep_blank)
        .into_iter()
        .map(|gap| gap.text)
        .collect()
}

fn push_gap(gaps: &mut Vec<Gap>, lines: &[&str], start_line: usize, end_line: usize, keep_blank: bool) {
    let end_line = end_line.min(lines.len());
    if start_line > end_line {
        return;
    }

    let text = lines[start_line - 1..end_line].join("\n").trim().to_string();
    if text.is_empty() && !keep_blank {
        return;
    }

    gaps.push(Gap {
        start_line,
        end_line,
        text,
    });
}
