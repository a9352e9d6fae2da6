use crate::diff::{SegmentKind, TextSegment};

/// Inline markers in the style of `git diff --word-diff=plain`
pub fn render(segments: &[TextSegment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment.kind {
            SegmentKind::Unchanged => out.push_str(&segment.text),
            SegmentKind::Added => {
                out.push_str("{+");
                out.push_str(&segment.text);
                out.push_str("+}");
            }
            SegmentKind::Removed => {
                out.push_str("[-");
                out.push_str(&segment.text);
                out.push_str("-]");
            }
        }
    }
    out
}
