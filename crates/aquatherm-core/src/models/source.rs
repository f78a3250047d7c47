use serde::{Deserialize, Serialize};

/// Where the analysed imagery comes from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputSource {
    /// Server fetches a satellite tile for the session coordinate
    #[default]
    Satellite,

    /// Operator-supplied image.
    ///
    /// An empty file with an empty filename means upload mode is selected but
    /// no file has been chosen yet.
    Upload { file: Vec<u8>, filename: String },
}

impl InputSource {
    /// Upload mode with no file chosen
    pub fn empty_upload() -> Self {
        InputSource::Upload { file: Vec::new(), filename: String::new() }
    }

    pub fn mode(&self) -> SourceMode {
        match self {
            InputSource::Satellite => SourceMode::Satellite,
            InputSource::Upload { .. } => SourceMode::Upload,
        }
    }

    /// True only for an upload with a chosen (named) file
    pub fn has_file(&self) -> bool {
        matches!(self, InputSource::Upload { filename, .. } if !filename.is_empty())
    }

    /// Name of the chosen file, if any
    pub fn filename(&self) -> Option<&str> {
        match self {
            InputSource::Upload { filename, .. } if !filename.is_empty() => Some(filename),
            _ => None,
        }
    }
}

/// Source selector exposed to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceMode {
    Satellite,
    Upload,
}
