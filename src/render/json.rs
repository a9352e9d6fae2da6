use crate::diff::TextSegment;
use crate::error::PageDiffResult;

pub fn render(segments: &[TextSegment]) -> PageDiffResult<String> {
    Ok(serde_json::to_string_pretty(segments)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::SegmentKind;

    #[test]
    fn test_json_round_trips_kinds() -> PageDiffResult<()> {
        let segments = vec![TextSegment::unchanged("Kept. "), TextSegment::removed("Dropped.")];
        let rendered = render(&segments)?;

        let parsed: Vec<TextSegment> = serde_json::from_str(&rendered)?;
        assert_eq!(parsed, segments);
        assert!(rendered.contains(r#""kind": "removed""#));
        assert_eq!(parsed[0].kind, SegmentKind::Unchanged);
        Ok(())
    }
}
