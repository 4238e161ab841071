use std::path::PathBuf;

use anyhow::Context;
use pdbgen::consts::{DEFAULT_OUTPUT, NUM_ATOMS};
use structopt::StructOpt;

/// Write a synthetic pdb file full of randomly placed atoms
#[derive(structopt::StructOpt)]
struct Args {
    /// output path, overwritten if it exists, default test.pdb
    #[structopt(parse(from_os_str))]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::from_args();
    let output = args.output.unwrap_or_else(|| DEFAULT_OUTPUT.into());
    pdbgen::generate_file(&output, NUM_ATOMS)
        .with_context(|| format!("failed to write {}", output.display()))?;
    Ok(())
}
