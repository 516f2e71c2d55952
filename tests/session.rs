// Integration tests for sessions: loading, normalization scope, and the
// read-side views built on top of an evaluation.

use std::io::Write;

use golfmap::{AffluenceFilter, DatasetCache, NormalizationScope, PreparedDataset, Session, ViewFilter};

const COUNTIES: &str = include_str!("data/counties.csv");

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn counties_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(COUNTIES.as_bytes()).unwrap();
    file
}

#[test]
fn session_file_drives_evaluation() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, r#"{
        "params": { "weights": { "income": 100, "education": 0, "diversity": 0, "size": 0, "age": 0 } },
        "filter": { "regions": ["West"], "affluence": "affluent" },
        "top_n": 2
    }"#).unwrap();

    let session = Session::read_from_json(&path).unwrap();
    let dataset = PreparedDataset::from_csv_str(COUNTIES).unwrap();
    let view = session.evaluate(&dataset).unwrap();

    // Santa Clara (140000) and Douglas (127000) are the only affluent western counties.
    assert_eq!(view.len(), 2);
    let top = view.top(session.top_n).unwrap();
    let counties: Vec<Option<&str>> = top.column("county").unwrap().str().unwrap().into_iter().collect();
    assert_eq!(counties, vec![Some("Santa Clara County"), Some("Douglas County")]);
}

#[test]
fn view_scope_rescales_to_the_selection() {
    init_logging();
    let dataset = PreparedDataset::from_csv_str(COUNTIES).unwrap();
    let mut session = Session {
        filter: ViewFilter { regions: vec!["Midwest".into()], ..Default::default() },
        ..Default::default()
    };
    session.params.weights = golfmap::Weights::new(1.0, 0.0, 0.0, 0.0, 0.0);

    let national = session.evaluate(&dataset).unwrap().scores().unwrap();
    // 62000 / 140000 and 60000 / 140000
    assert_eq!(national, vec![44.3, 42.9]);

    session.scope = NormalizationScope::View;
    let regional = session.evaluate(&dataset).unwrap().scores().unwrap();
    // 62000 / 62000 and 60000 / 62000
    assert_eq!(regional, vec![100.0, 96.8]);
}

#[test]
fn cache_reuses_prepared_dataset() {
    init_logging();
    let file = counties_file();
    let mut cache = DatasetCache::new();

    let first = cache.load(file.path()).unwrap();
    let second = cache.load(file.path()).unwrap();
    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert_eq!(first.checksum().map(str::len), Some(64));

    let session = Session::default();
    let a = session.evaluate(&first).unwrap();
    let b = session.evaluate(&second).unwrap();
    assert!(a.data().equals_missing(b.data()));
}

#[test]
fn summary_and_aggregates_describe_the_view() {
    init_logging();
    let dataset = PreparedDataset::from_csv_str(COUNTIES).unwrap();
    let session = Session {
        filter: ViewFilter { affluence: AffluenceFilter::NonAffluentOnly, ..Default::default() },
        ..Default::default()
    };
    let view = session.evaluate(&dataset).unwrap();

    let summary = view.summary().unwrap();
    assert_eq!(summary.counties, 9);
    assert_eq!(summary.affluent_counties, 0);

    let states = view.state_scores().unwrap();
    let texas = states.iter().find(|s| s.state == "Texas").unwrap();
    assert_eq!(texas.counties, 1);
    assert_eq!(texas.state_abbr.as_deref(), Some("TX"));

    // Puerto Rico has no region and drops out of the distribution.
    let regions = view.region_distribution().unwrap();
    let counted: usize = regions.iter().map(|r| r.counties).sum();
    assert_eq!(counted, 8);
    assert!(regions.iter().all(|r| r.min <= r.q1 && r.q1 <= r.median && r.median <= r.q3 && r.q3 <= r.max));
}

#[test]
fn state_drill_down_by_abbreviation() {
    let dataset = PreparedDataset::from_csv_str(COUNTIES).unwrap();
    let session = Session {
        filter: ViewFilter { state: Some("co".into()), ..Default::default() },
        ..Default::default()
    };
    let view = session.evaluate(&dataset).unwrap();
    assert_eq!(view.len(), 2);

    let mut csv = Vec::new();
    view.write_state_scores_csv(&mut csv).unwrap();
    let csv = String::from_utf8(csv).unwrap();
    assert!(csv.lines().next().unwrap().starts_with("state,state_abbr,counties,opportunity_score"));
    assert!(csv.contains("Colorado,CO,2,"));
}
