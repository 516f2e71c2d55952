use std::io::Write;

use anyhow::Result;

use crate::{cli::{Cli, OutputFormat, ScoreArgs}, commands};

pub fn run(_cli: &Cli, args: &ScoreArgs) -> Result<()> {
    let session = commands::build_session(&args.scoring)?;
    let (_, view) = commands::evaluate(&args.data, &session)?;

    let mut out = commands::open_output(args.output.as_deref())?;
    match args.format {
        OutputFormat::Csv => view.write_csv_to(&mut out)?,
        OutputFormat::Json => view.write_json_to(&mut out)?,
    }
    out.flush()?;

    Ok(())
}
