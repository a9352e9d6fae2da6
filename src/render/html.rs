use html_escape::encode_double_quoted_attribute;

use crate::diff::{SegmentKind, TextSegment};

const ADDED_TITLE: &str = "This text was added in this version";
const REMOVED_TITLE: &str = "This text was removed in this version";

/// Render segments as a `<pre>` block of styled spans
pub fn render(segments: &[TextSegment]) -> String {
    if segments.iter().all(|s| s.text.is_empty()) {
        return r#"<pre class="version-content-pre">No content</pre>"#.to_string();
    }

    let mut out = String::from(r#"<pre class="version-content-pre">"#);
    for segment in segments {
        let text = encode_double_quoted_attribute(&segment.text);
        match segment.kind {
            SegmentKind::Unchanged => {
                out.push_str("<span>");
                out.push_str(&text);
                out.push_str("</span>");
            }
            SegmentKind::Added => {
                out.push_str(&format!(
                    r#"<span class="diff-added" title="{}">{}</span>"#,
                    ADDED_TITLE, text
                ));
            }
            SegmentKind::Removed => {
                out.push_str(&format!(
                    r#"<span class="diff-removed" title="{}">{}</span>"#,
                    REMOVED_TITLE, text
                ));
            }
        }
    }
    out.push_str("</pre>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escapes_text() {
        let segments = vec![TextSegment::added("<b>bold</b> & \"quoted\".")];
        let rendered = render(&segments);
        assert!(rendered.contains("&lt;b&gt;bold&lt;/b&gt; &amp; &quot;quoted&quot;."));
        assert!(!rendered.contains("<b>"));
    }

    #[test]
    fn test_html_escapes_unchanged_text() {
        let segments = vec![TextSegment::unchanged("Tom & Jerry <3")];
        assert_eq!(
            render(&segments),
            r#"<pre class="version-content-pre"><span>Tom &amp; Jerry &lt;3</span></pre>"#
        );
    }

    #[test]
    fn test_html_empty_comparison() {
        let rendered = render(&[TextSegment::added("")]);
        assert_eq!(rendered, r#"<pre class="version-content-pre">No content</pre>"#);
    }

    #[test]
    fn test_html_titles() {
        let segments = vec![TextSegment::removed("Gone.")];
        let rendered = render(&segments);
        assert!(rendered.contains(r#"class="diff-removed""#));
        assert!(rendered.contains(REMOVED_TITLE));
    }
}
