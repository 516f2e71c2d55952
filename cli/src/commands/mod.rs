pub mod score;
pub mod states;
pub mod summary;
pub mod top;

use std::{fs::File, io::{self, BufWriter, Write}, path::Path, sync::Arc};

use anyhow::{Context, Result};
use golfmap::{
    AffluenceFilter, DatasetCache, Factor, NormalizationScope, PreparedDataset, ScoredDataset, Session,
};
use log::info;

use crate::cli::{AffluenceArg, ScopeArg, ScoringArgs};

/// Session file (or defaults) with command-line overrides applied, validated.
pub fn build_session(args: &ScoringArgs) -> Result<Session> {
    let mut session = match &args.session {
        Some(path) => Session::read_from_json(path)?,
        None => Session::default(),
    };

    let weights = &mut session.params.weights;
    for (factor, weight) in [
        (Factor::Income, args.w_income),
        (Factor::Education, args.w_education),
        (Factor::Diversity, args.w_diversity),
        (Factor::Size, args.w_size),
        (Factor::Age, args.w_age),
    ] {
        if let Some(weight) = weight { weights.set(factor, weight); }
    }

    let thresholds = &mut session.params.thresholds;
    if let Some(value) = args.income_threshold { thresholds.income_threshold = value; }
    if let Some(value) = args.growth_demo_min { thresholds.growth_demo_min = value; }

    let filter = &mut session.filter;
    if args.all_regions { filter.regions.clear(); }
    if !args.regions.is_empty() { filter.regions = args.regions.clone(); }
    if let Some(state) = &args.state { filter.state = Some(state.clone()); }
    if let Some(min_score) = args.min_score { filter.min_score = min_score; }
    if let Some(affluence) = args.affluence {
        filter.affluence = match affluence {
            AffluenceArg::All => AffluenceFilter::All,
            AffluenceArg::Affluent => AffluenceFilter::AffluentOnly,
            AffluenceArg::NonAffluent => AffluenceFilter::NonAffluentOnly,
        };
    }
    if args.high_only { filter.high_opportunity_only = true; }
    if args.no_high_only { filter.high_opportunity_only = false; }

    if let Some(scope) = args.scope {
        session.scope = match scope {
            ScopeArg::Dataset => NormalizationScope::Dataset,
            ScopeArg::View => NormalizationScope::View,
        };
    }

    session.params.validate()?;
    Ok(session)
}

/// Load `data` and evaluate the session over it.
pub fn evaluate(data: &Path, session: &Session) -> Result<(Arc<PreparedDataset>, ScoredDataset)> {
    let mut cache = DatasetCache::new();
    let dataset = cache.load(data)?;
    let view = session.evaluate(&dataset)?;
    info!("[golfmap] {} of {} counties in view", view.len(), dataset.len());
    Ok((dataset, view))
}

/// Buffered writer over `path`, or stdout when absent.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("[golfmap] Failed to create {}", path.display()))?;
            info!("[golfmap] writing {}", path.display());
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}
