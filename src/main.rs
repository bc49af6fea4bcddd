//! # Report tool
#![warn(missing_docs)]

use color_eyre::eyre;
use report_tool::cli::{self, opt::Options};

fn main() -> eyre::Result<()> {
    let opt: Options = cli::init()?;
    cli::run(opt)
}
