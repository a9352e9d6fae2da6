pub mod sequence;
pub mod set;
pub mod tokenize;
pub mod types;

use tracing::debug;

pub use tokenize::tokenize;
pub use types::{
    Alignment, DiffOptions, DiffResult, DiffStats, Granularity, SegmentKind, TextSegment,
};

/// A tokenized piece of text together with its comparison key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit<'a> {
    pub text: &'a str,
    pub key: &'a str,
    pub trivial: bool,
}

impl<'a> Unit<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            key: tokenize::unit_key(text),
            trivial: tokenize::is_trivial(text),
        }
    }
}

pub fn units(text: &str, granularity: Granularity) -> Vec<Unit<'_>> {
    tokenize(text, granularity).into_iter().map(Unit::new).collect()
}

/// Compare `new_text` against `old_text` with the default options
pub fn compute_diff(new_text: &str, old_text: &str) -> Vec<TextSegment> {
    DiffEngine::default().diff(new_text, old_text).into_segments()
}

/// Stateless comparison engine; holds only its options
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffEngine {
    options: DiffOptions,
}

impl DiffEngine {
    pub fn new(options: DiffOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> DiffOptions {
        self.options
    }

    pub fn diff(&self, new_text: &str, old_text: &str) -> DiffResult {
        let granularity = self.options.granularity;

        if old_text.trim().is_empty() {
            return DiffResult {
                segments: vec![TextSegment::added(new_text)],
                stats: DiffStats {
                    added: count_units(new_text, granularity),
                    added_bytes: new_text.len(),
                    ..Default::default()
                },
            };
        }

        if new_text.trim().is_empty() {
            let mut builder = SegmentBuilder::default();
            builder.stats.removed = count_units(old_text, granularity);
            builder.push_text(SegmentKind::Removed, old_text);
            builder.push_text(SegmentKind::Unchanged, new_text);
            return builder.finish();
        }

        let new_units = units(new_text, granularity);
        let old_units = units(old_text, granularity);

        debug!(
            %granularity,
            alignment = %self.options.alignment,
            new_units = new_units.len(),
            old_units = old_units.len(),
            "comparing texts"
        );

        let ops = match self.options.alignment {
            Alignment::Sequence => sequence::align(&new_units, &old_units),
            Alignment::Legacy => set::align(&new_units, &old_units),
        };

        let mut builder = SegmentBuilder::default();
        for (kind, unit) in ops {
            builder.push_unit(kind, unit);
        }
        builder.finish()
    }
}

fn count_units(text: &str, granularity: Granularity) -> usize {
    units(text, granularity).iter().filter(|u| !u.trivial).count()
}

/// Collects aligned units into coalesced segments
#[derive(Debug, Default)]
struct SegmentBuilder {
    segments: Vec<TextSegment>,
    stats: DiffStats,
}

impl SegmentBuilder {
    fn push_unit(&mut self, kind: SegmentKind, unit: Unit<'_>) {
        if unit.trivial {
            // Punctuation and whitespace only exist on the new side
            if kind != SegmentKind::Removed {
                self.push_text(SegmentKind::Unchanged, unit.text);
            }
            return;
        }

        self.stats.record_unit(kind);
        self.push_text(kind, unit.text);
    }

    fn push_text(&mut self, kind: SegmentKind, text: &str) {
        if text.is_empty() {
            return;
        }

        self.stats.record_bytes(kind, text.len());
        match self.segments.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(text),
            _ => self.segments.push(TextSegment::new(kind, text)),
        }
    }

    fn finish(self) -> DiffResult {
        DiffResult {
            segments: self.segments,
            stats: self.stats,
        }
    }
}
