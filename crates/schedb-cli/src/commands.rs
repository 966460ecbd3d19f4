use anyhow::Result;
use schedb_cli::pipeline::{ConvertOutcome, ConvertRequest, run};
use schedb_model::ConvertOptions;
use schedb_output::WriteOptions;
use tracing::info_span;

use crate::cli::Cli;

pub fn run_convert(cli: &Cli) -> Result<ConvertOutcome> {
    let span = info_span!("convert_run", infile = %cli.infile.display());
    let _guard = span.enter();
    let mut convert = ConvertOptions::new();
    if let Some(generated) = &cli.generated {
        convert = convert.with_generated(generated.clone());
    }
    let request = ConvertRequest {
        infile: cli.infile.clone(),
        outfile: cli.outfile.clone(),
        convert,
        write: WriteOptions { indent: cli.indent },
        dry_run: cli.dry_run,
    };
    run(&request)
}
