use anyhow::Result;
use serde_json::json;

use crate::{cli::{Cli, SummaryArgs}, commands};

pub fn run(_cli: &Cli, args: &SummaryArgs) -> Result<()> {
    let session = commands::build_session(&args.scoring)?;
    let (dataset, view) = commands::evaluate(&args.data, &session)?;

    let report = json!({
        "source": args.data.display().to_string(),
        "checksum": dataset.checksum(),
        "affluence_cutoff": dataset.affluence_cutoff(),
        "session": session,
        "summary": view.summary()?,
        "regions": view.region_distribution()?,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
