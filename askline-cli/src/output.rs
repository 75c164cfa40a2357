use anyhow::Result;
use askline_core::Literal;
use clap::ValueEnum;
use serde::Serialize;

/// How an answer is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `true`, `42`, `3.14`, `1 green` (`-1` for an empty menu)
    #[default]
    Text,
    /// One JSON object per answer
    Json,
}

/// An accepted answer, ready to be printed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Answer {
    Bool { value: bool },
    Int { value: i64 },
    Float { value: f64 },
    Menu {
        index: Option<usize>,
        label: Option<String>,
    },
}

impl Answer {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.text()),
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }

    fn text(&self) -> String {
        match self {
            Self::Bool { value } => value.to_string(),
            Self::Int { value } => value.to_string(),
            Self::Float { value } => value.literal(),
            Self::Menu {
                index: Some(index),
                label: Some(label),
            } => format!("{} {}", index, label),
            Self::Menu { index: Some(index), label: None } => index.to_string(),
            Self::Menu { index: None, .. } => "-1".to_string(),
        }
    }
}
