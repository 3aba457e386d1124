use super::Report;

/// Display texts of this many characters or more get chunked.
pub const WRAP_WIDTH: usize = 100;

/// Dots appended past the longest name when padding the name column.
pub const NAME_PAD: usize = 10;

/// Columns past the longest name a terminal needs to show an unbroken chunk:
/// the dot padding, the separator space, one full chunk, and a spare column.
const VIEWPORT_SLACK: usize = 112;

/// Lay out a finished report as console text.
///
/// Each row is the name right-padded with `.` to the shared column width,
/// one space, then the wrapped display text. The final line is always the
/// count. An empty report is just the count line; no width is computed for
/// it.
pub fn render(report: &Report) -> String {
    let mut lines = Vec::with_capacity(report.count() + 1);

    if let Some(max_width) = report.max_name_width() {
        for entry in &report.entries {
            let wrapped = wrap_text(&entry.text, max_width);
            lines.push(format!(
                "{:.<width$} {}",
                entry.name.as_str(),
                wrapped,
                width = max_width + NAME_PAD
            ));
        }
    }

    lines.push(format!("Counted Items: {}", report.count()));
    lines.join("\n")
}

/// Terminal width at which no row of this report would hard-wrap, or `None`
/// for an empty report.
pub fn ideal_width(report: &Report) -> Option<usize> {
    report.max_name_width().map(|w| w + VIEWPORT_SLACK)
}

/// Break `text` into [`WRAP_WIDTH`]-character chunks, continuation lines
/// indented one column past the name padding so they align under the value
/// column. The last chunk never carries a trailing break; text shorter than
/// one chunk is returned untouched. Chunking counts characters, not bytes.
fn wrap_text(text: &str, max_name_width: usize) -> String {
    let total = text.chars().count();
    if total < WRAP_WIDTH {
        return text.to_string();
    }

    let indent = " ".repeat(max_name_width + NAME_PAD + 1);
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut remaining = total;

    while remaining > WRAP_WIDTH {
        let split = char_boundary(rest, WRAP_WIDTH);
        out.push_str(&rest[..split]);
        out.push('\n');
        out.push_str(&indent);
        rest = &rest[split..];
        remaining -= WRAP_WIDTH;
    }
    out.push_str(rest);
    out
}

/// Byte offset of the `chars`-th character of `s`.
fn char_boundary(s: &str, chars: usize) -> usize {
    s.char_indices()
        .nth(chars)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}
