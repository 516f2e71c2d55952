use std::path::PathBuf;

/// Golf-market opportunity scoring over county census data
#[derive(clap::Parser, Debug)]
#[command(name = "golfmap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Write the filtered, scored county table
    Score(ScoreArgs),

    /// Write the highest-scoring counties with their rank
    Top(TopArgs),

    /// Write the mean opportunity score of each state in view
    States(StatesArgs),

    /// Print summary metrics and the per-region score distribution as JSON
    Summary(SummaryArgs),
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum AffluenceArg {
    All,
    Affluent,
    NonAffluent,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum ScopeArg {
    /// Factor maxima over the whole file
    Dataset,
    /// Factor maxima over the selected regions / state
    View,
}

/// Parameters and view selection, layered over an optional session file.
#[derive(clap::Args, Debug)]
pub struct ScoringArgs {
    /// Session file (JSON) with parameters and view; flags below override it
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub session: Option<PathBuf>,

    /// Weight of the income factor
    #[arg(long)]
    pub w_income: Option<f64>,

    /// Weight of the education factor
    #[arg(long)]
    pub w_education: Option<f64>,

    /// Weight of the diversity factor
    #[arg(long)]
    pub w_diversity: Option<f64>,

    /// Weight of the population-size factor
    #[arg(long)]
    pub w_size: Option<f64>,

    /// Weight of the younger-age factor
    #[arg(long)]
    pub w_age: Option<f64>,

    /// Minimum median income for high opportunity
    #[arg(long)]
    pub income_threshold: Option<f64>,

    /// Minimum growth-demographic score (0-100) for high opportunity
    #[arg(long)]
    pub growth_demo_min: Option<f64>,

    /// Keep only these regions (repeatable)
    #[arg(long = "region")]
    pub regions: Vec<String>,

    /// Clear any region filter from the session file
    #[arg(long, conflicts_with = "regions")]
    pub all_regions: bool,

    /// Drill down to one state, by name or abbreviation
    #[arg(long)]
    pub state: Option<String>,

    /// Minimum opportunity score (inclusive)
    #[arg(long)]
    pub min_score: Option<f64>,

    /// Affluence filter
    #[arg(long, value_enum)]
    pub affluence: Option<AffluenceArg>,

    /// Keep only high-opportunity counties
    #[arg(long)]
    pub high_only: bool,

    /// Keep every county regardless of the session file's high-opportunity filter
    #[arg(long, conflicts_with = "high_only")]
    pub no_high_only: bool,

    /// Record set the factor maxima are taken over
    #[arg(long, value_enum)]
    pub scope: Option<ScopeArg>,
}

#[derive(clap::Args, Debug)]
pub struct ScoreArgs {
    /// County CSV file
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub data: PathBuf,

    #[command(flatten)]
    pub scoring: ScoringArgs,

    /// Output file, defaults to stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub struct TopArgs {
    /// County CSV file
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub data: PathBuf,

    #[command(flatten)]
    pub scoring: ScoringArgs,

    /// Number of counties, defaults to the session value (25)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Output file, defaults to stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub struct StatesArgs {
    /// County CSV file
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub data: PathBuf,

    #[command(flatten)]
    pub scoring: ScoringArgs,

    /// Output file, defaults to stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub struct SummaryArgs {
    /// County CSV file
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub data: PathBuf,

    #[command(flatten)]
    pub scoring: ScoringArgs,
}
