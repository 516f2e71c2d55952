use std::io::Write;

use anyhow::Result;

use crate::{cli::{Cli, OutputFormat, TopArgs}, commands};

pub fn run(_cli: &Cli, args: &TopArgs) -> Result<()> {
    let session = commands::build_session(&args.scoring)?;
    let (_, view) = commands::evaluate(&args.data, &session)?;
    let count = args.count.unwrap_or(session.top_n);

    let mut out = commands::open_output(args.output.as_deref())?;
    match args.format {
        OutputFormat::Csv => view.write_top_csv(count, &mut out)?,
        OutputFormat::Json => view.write_top_json(count, &mut out)?,
    }
    out.flush()?;

    Ok(())
}
