use std::io::Write;

use anyhow::Result;

use crate::{cli::{Cli, OutputFormat, StatesArgs}, commands};

pub fn run(_cli: &Cli, args: &StatesArgs) -> Result<()> {
    let session = commands::build_session(&args.scoring)?;
    let (_, view) = commands::evaluate(&args.data, &session)?;

    let mut out = commands::open_output(args.output.as_deref())?;
    match args.format {
        OutputFormat::Csv => view.write_state_scores_csv(&mut out)?,
        OutputFormat::Json => view.write_state_scores_json(&mut out)?,
    }
    out.flush()?;

    Ok(())
}
