//! Command line options
use std::path::{Path, PathBuf};

use clap::Parser;
use report_flow::Policy;

use super::script::ReportScript;

#[derive(Parser, Debug)]
/// Render a report script into a PDF file
pub struct Options {
    /// The RON report script
    pub file: PathBuf,
    /// Where to write the PDF (`-` for stdout)
    pub out: Option<PathBuf>,

    /// Fail instead of starting a new page when content does not fit
    #[clap(long, short = 's', conflicts_with = "paginate")]
    pub strict: bool,
    /// Start new pages as needed
    #[clap(long, short = 'p')]
    pub paginate: bool,

    /// Value for the `{revision}` placeholder
    #[clap(long)]
    pub revision: Option<String>,
    /// Value for the `{generated}` placeholder
    #[clap(long)]
    pub generated: Option<String>,
}

impl Options {
    /// The policy requested on the command line, if any
    pub fn policy(&self) -> Option<Policy> {
        match (self.strict, self.paginate) {
            (true, _) => Some(Policy::Strict),
            (false, true) => Some(Policy::Paginate),
            (false, false) => None,
        }
    }

    /// The directory containing the script
    pub fn script_dir(&self) -> &Path {
        match self.file.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }

    /// Resolve the output file.
    ///
    /// An explicit argument wins, then the `output` of the script (relative
    /// to the script), then `<stem>.pdf` next to the script.
    pub fn output_path(&self, script: &ReportScript) -> PathBuf {
        if let Some(out) = &self.out {
            return out.clone();
        }
        let dir = self.script_dir();
        match &script.output {
            Some(output) => dir.join(output),
            None => {
                let stem = self.file.file_stem().unwrap_or_else(|| "report".as_ref());
                dir.join(stem).with_extension("pdf")
            }
        }
    }
}
