//! Report scripts
use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use report_flow::{Element, LayoutPreset, Policy};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
/// Failed to load a script
pub enum ScriptError {
    #[error("IO Error")]
    /// Failed to read the file
    Io(#[from] io::Error),
    #[error("Deserialize Error")]
    /// Failed to parse the file
    Ron(#[from] ron::error::Error),
}

#[derive(Debug, Deserialize)]
/// A report described in RON
pub struct ReportScript {
    /// Default output file, relative to the script
    #[serde(default)]
    pub output: Option<PathBuf>,
    /// Overflow policy
    #[serde(default)]
    pub policy: Policy,
    /// Layout preset
    #[serde(default)]
    pub layout: LayoutPreset,
    /// The content
    pub elements: Vec<Element>,
}

impl ReportScript {
    /// Load a script from a file
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let script = ron::de::from_reader(reader)?;
        Ok(script)
    }
}

/// Values for the `{revision}` and `{generated}` placeholders
#[derive(Debug, Clone)]
pub struct Substitutions {
    /// Source revision
    pub revision: String,
    /// Generation time
    pub generated: String,
}

impl Substitutions {
    /// Replace the placeholders in all elements
    pub fn apply(&self, elements: &mut [Element]) {
        for element in elements {
            element.map_text(|text| {
                text.replace("{revision}", &self.revision)
                    .replace("{generated}", &self.generated)
            });
        }
    }
}
