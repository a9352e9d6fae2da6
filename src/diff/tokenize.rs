use once_cell::sync::Lazy;
use regex::Regex;

use super::Granularity;

/// Sentence body, its run of terminal punctuation and any trailing whitespace
static SENTENCE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?]*[.!?]+\s*").expect("sentence pattern is valid"));

/// A word and its trailing whitespace
static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+\s*").expect("word pattern is valid"));

static TRIVIAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[.!?]*$").expect("trivial pattern is valid"));

/// Split `text` into comparison units.
///
/// The returned slices are contiguous and cover `text` exactly, so joining
/// them gives back the input.
pub fn tokenize(text: &str, granularity: Granularity) -> Vec<&str> {
    let pattern = match granularity {
        Granularity::Sentence => &*SENTENCE_PATTERN,
        Granularity::Word => &*WORD_PATTERN,
    };

    let mut units = Vec::new();
    let mut cursor = 0;

    for m in pattern.find_iter(text) {
        if m.start() > cursor {
            units.push(&text[cursor..m.start()]);
        }
        units.push(m.as_str());
        cursor = m.end();
    }

    if cursor < text.len() {
        units.push(&text[cursor..]);
    }

    units
}

/// Comparison key of a unit
pub fn unit_key(unit: &str) -> &str {
    unit.trim()
}

/// Whitespace or bare terminal punctuation, never highlighted
pub fn is_trivial(unit: &str) -> bool {
    TRIVIAL_PATTERN.is_match(unit.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sentence_units_keep_terminators() {
        let units = tokenize("The cat sat. The dog ran!  Why? ", Granularity::Sentence);
        assert_eq!(units, vec!["The cat sat. ", "The dog ran!  ", "Why? "]);
    }

    #[test]
    fn test_trailing_fragment_is_a_unit() {
        let units = tokenize("Done. and then", Granularity::Sentence);
        assert_eq!(units, vec!["Done. ", "and then"]);

        let units = tokenize("no punctuation at all", Granularity::Sentence);
        assert_eq!(units, vec!["no punctuation at all"]);
    }

    #[test]
    fn test_ellipsis_stays_with_sentence() {
        let units = tokenize("Wait... what?!", Granularity::Sentence);
        assert_eq!(units, vec!["Wait... ", "what?!"]);
    }

    #[test]
    fn test_word_units() {
        let units = tokenize("  hello  big\nworld", Granularity::Word);
        assert_eq!(units, vec!["  ", "hello  ", "big\n", "world"]);
    }

    #[test]
    fn test_units_cover_input() {
        let samples = [
            "",
            "   ",
            "...",
            "A. B. A.",
            "Line one.\n\nLine two?\n",
            "Ünïcödé sentences work. Ja!",
        ];

        for sample in samples {
            for granularity in [Granularity::Sentence, Granularity::Word] {
                let joined: String = tokenize(sample, granularity).concat();
                assert_eq!(joined, sample);
            }
        }
    }

    #[test]
    fn test_trivial_units() {
        assert!(is_trivial("   "));
        assert!(is_trivial("!? "));
        assert!(is_trivial(""));
        assert!(!is_trivial("Hi. "));
        assert!(!is_trivial(", "));
    }
}
