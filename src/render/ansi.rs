use colored::Colorize;

use crate::diff::{SegmentKind, TextSegment};

pub fn render(segments: &[TextSegment]) -> String {
    let mut out = String::new();
    for segment in segments {
        let styled = match segment.kind {
            SegmentKind::Unchanged => segment.text.normal(),
            SegmentKind::Added => segment.text.bright_green().bold(),
            SegmentKind::Removed => segment.text.red().strikethrough(),
        };
        out.push_str(&styled.to_string());
    }
    out
}
