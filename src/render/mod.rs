pub mod ansi;
pub mod html;
pub mod json;
pub mod markup;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::diff::TextSegment;
use crate::error::{ConfigError, PageDiffResult};

/// Output surface a diff is rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Ansi,
    Markup,
    Html,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { color: true }
    }
}

pub fn render(
    format: OutputFormat,
    segments: &[TextSegment],
    options: &RenderOptions,
) -> PageDiffResult<String> {
    let rendered = match format {
        OutputFormat::Ansi if options.color => ansi::render(segments),
        OutputFormat::Ansi | OutputFormat::Markup => markup::render(segments),
        OutputFormat::Html => html::render(segments),
        OutputFormat::Json => json::render(segments)?,
    };
    Ok(rendered)
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Ansi => "ansi",
            OutputFormat::Markup => "markup",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ansi" | "terminal" => Ok(OutputFormat::Ansi),
            "markup" | "plain" => Ok(OutputFormat::Markup),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidValue {
                field: "render.format".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ansi_without_color_falls_back_to_markup() -> PageDiffResult<()> {
        let segments = vec![TextSegment::unchanged("Same. "), TextSegment::added("New.")];
        let rendered = render(OutputFormat::Ansi, &segments, &RenderOptions { color: false })?;
        assert_eq!(rendered, "Same. {+New.+}");
        Ok(())
    }

    #[test]
    fn test_format_names() {
        assert_eq!("HTML".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert!("pdf".parse::<OutputFormat>().is_err());
    }
}
