use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// How a piece of text relates to the comparison baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Unchanged,
    Added,
    Removed,
}

/// A run of text tagged with its diff kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSegment {
    pub kind: SegmentKind,
    pub text: String,
}

impl TextSegment {
    pub fn new(kind: SegmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn unchanged(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Unchanged, text)
    }

    pub fn added(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Added, text)
    }

    pub fn removed(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Removed, text)
    }

    /// Whether this segment belongs to the new document
    pub fn in_new(&self) -> bool {
        matches!(self.kind, SegmentKind::Unchanged | SegmentKind::Added)
    }

    /// Whether this segment belongs to the old document
    pub fn in_old(&self) -> bool {
        matches!(self.kind, SegmentKind::Unchanged | SegmentKind::Removed)
    }
}

/// Size of the units text is split into before comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Sentence,
    Word,
}

/// Strategy used to decide which units match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Longest common subsequence over units
    #[default]
    Sequence,
    /// Set membership of distinct units; repeated units collapse
    Legacy,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Granularity::Sentence => write!(f, "sentence"),
            Granularity::Word => write!(f, "word"),
        }
    }
}

impl FromStr for Granularity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sentence" => Ok(Granularity::Sentence),
            "word" => Ok(Granularity::Word),
            other => Err(ConfigError::InvalidValue {
                field: "diff.granularity".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alignment::Sequence => write!(f, "sequence"),
            Alignment::Legacy => write!(f, "legacy"),
        }
    }
}

impl FromStr for Alignment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequence" | "lcs" => Ok(Alignment::Sequence),
            "legacy" | "set" => Ok(Alignment::Legacy),
            other => Err(ConfigError::InvalidValue {
                field: "diff.alignment".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiffOptions {
    pub granularity: Granularity,
    pub alignment: Alignment,
}

/// Per-kind tallies for a diff.
///
/// Unit counts only include non-trivial units; byte counts cover every
/// rendered segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
    pub added_bytes: usize,
    pub removed_bytes: usize,
    pub unchanged_bytes: usize,
}

impl DiffStats {
    pub fn record_unit(&mut self, kind: SegmentKind) {
        match kind {
            SegmentKind::Added => self.added += 1,
            SegmentKind::Removed => self.removed += 1,
            SegmentKind::Unchanged => self.unchanged += 1,
        }
    }

    pub fn record_bytes(&mut self, kind: SegmentKind, len: usize) {
        match kind {
            SegmentKind::Added => self.added_bytes += len,
            SegmentKind::Removed => self.removed_bytes += len,
            SegmentKind::Unchanged => self.unchanged_bytes += len,
        }
    }

    pub fn has_changes(&self) -> bool {
        self.added_bytes > 0 || self.removed_bytes > 0
    }

    /// Share of compared units that survived unchanged, in `0.0..=1.0`
    pub fn similarity(&self) -> f64 {
        let total = self.added + self.removed + self.unchanged;
        if total == 0 {
            return 1.0;
        }
        self.unchanged as f64 / total as f64
    }
}

/// Output of a single comparison
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DiffResult {
    pub segments: Vec<TextSegment>,
    pub stats: DiffStats,
}

impl DiffResult {
    /// Reassemble the new document from unchanged and added segments
    pub fn new_text(&self) -> String {
        self.segments
            .iter()
            .filter(|s| s.in_new())
            .map(|s| s.text.as_str())
            .collect()
    }

    /// Reassemble the old-side view from unchanged and removed segments
    pub fn old_text(&self) -> String {
        self.segments
            .iter()
            .filter(|s| s.in_old())
            .map(|s| s.text.as_str())
            .collect()
    }

    pub fn has_changes(&self) -> bool {
        self.segments.iter().any(|s| s.kind != SegmentKind::Unchanged)
    }

    pub fn into_segments(self) -> Vec<TextSegment> {
        self.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options() {
        assert_eq!("Word".parse::<Granularity>().unwrap(), Granularity::Word);
        assert_eq!("set".parse::<Alignment>().unwrap(), Alignment::Legacy);
        assert_eq!("lcs".parse::<Alignment>().unwrap(), Alignment::Sequence);

        let err = "paragraph".parse::<Granularity>().unwrap_err();
        assert!(err.to_string().contains("paragraph"));
    }

    #[test]
    fn test_similarity() {
        let stats = DiffStats {
            added: 1,
            removed: 1,
            unchanged: 2,
            ..Default::default()
        };
        assert!((stats.similarity() - 0.5).abs() < f64::EPSILON);
        assert_eq!(DiffStats::default().similarity(), 1.0);
    }

    #[test]
    fn test_segment_kind_serializes_lowercase() {
        let json = serde_json::to_string(&TextSegment::added("Hi.")).unwrap();
        assert_eq!(json, r#"{"kind":"added","text":"Hi."}"#);
    }
}
