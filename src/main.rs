use anyhow::{Context, Result};
use clap::Parser;

use domain_tally::{output, utils, Args, Importer};

fn main() -> Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);
    utils::validate_args(&args)?;

    let importer = Importer::new(args.importer_config());
    let report = importer
        .import_file_report()
        .with_context(|| format!("Failed to import {}", args.source.display()))?;

    output::print_import_report(&report, &args);
    Ok(())
}
