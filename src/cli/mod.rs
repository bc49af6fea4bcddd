//! Command line interface
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use color_eyre::eyre::{self, WrapErr};
use env_logger::Env;
use log::{info, LevelFilter};
use report_flow::{Layout, Policy};

pub mod opt;
pub mod revision;
pub mod script;

use opt::Options;
use script::{ReportScript, Substitutions};

/// Set up CLI
pub fn init<T: clap::Parser>() -> color_eyre::Result<T> {
    color_eyre::install()?;
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .format_timestamp(None)
        .parse_env(Env::new().filter("REPORT_TOOL_LOG"))
        .init();
    let args = T::parse();
    Ok(args)
}

/// A loaded script with all command line overrides applied
pub struct Job {
    /// The script, placeholders already filled in
    pub script: ReportScript,
    /// The effective policy
    pub policy: Policy,
    /// Where the PDF goes, `-` is stdout
    pub out: PathBuf,
}

impl Job {
    /// Load the script and fill in the placeholders
    pub fn load(opt: &Options) -> eyre::Result<Self> {
        let mut script = ReportScript::load(&opt.file).wrap_err_with(|| {
            format!("Failed to load report script `{}`", opt.file.display())
        })?;

        let subst = Substitutions {
            revision: opt
                .revision
                .clone()
                .unwrap_or_else(|| revision::git_head(opt.script_dir())),
            generated: opt.generated.clone().unwrap_or_else(revision::timestamp),
        };
        subst.apply(&mut script.elements);

        let policy = opt.policy().unwrap_or(script.policy);
        let out = opt.output_path(&script);
        Ok(Self {
            script,
            policy,
            out,
        })
    }

    /// Lay out the document and write it to `w`
    pub fn write_to<W: Write>(&self, w: &mut W) -> eyre::Result<usize> {
        let layout = Layout::from(self.script.layout);
        let doc = report_flow::layout(&self.script.elements, &layout, self.policy)?;
        doc.write(w)?;
        w.flush()?;
        Ok(doc.pages.len())
    }
}

/// Load the script, fill in the placeholders and write the PDF
pub fn run(opt: Options) -> eyre::Result<()> {
    let job = Job::load(&opt)?;

    info!(
        "Laying out {} element(s) with {:?} policy",
        job.script.elements.len(),
        job.policy
    );
    let pages = if job.out == Path::new("-") {
        let stdout = io::stdout();
        let mut stdolock = stdout.lock();
        job.write_to(&mut stdolock)?
    } else {
        let layout = Layout::from(job.script.layout);
        report_flow::build(&job.script.elements, &layout, job.policy, &job.out)
            .wrap_err_with(|| format!("Failed to build `{}`", job.out.display()))?
    };
    info!("Done! {} page(s)", pages);
    Ok(())
}
