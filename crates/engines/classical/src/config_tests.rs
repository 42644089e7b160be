use super::*;

#[test]
fn parses_full_config() {
    let cfg = SearchConfig::from_toml_str(
        r#"
        difficulty = 5
        mode = "heuristic"
        randomize = true
        seed = 99
        "#,
    )
    .unwrap();
    assert_eq!(
        cfg,
        SearchConfig {
            difficulty: 5,
            mode: SearchMode::Heuristic,
            randomize: true,
            seed: 99,
        }
    );
}

#[test]
fn missing_fields_take_defaults() {
    let cfg = SearchConfig::from_toml_str("difficulty = 2").unwrap();
    assert_eq!(cfg.difficulty, 2);
    assert_eq!(cfg.mode, SearchMode::Minimax);
    assert!(!cfg.randomize);
    assert_eq!(SearchConfig::from_toml_str("").unwrap(), SearchConfig::default());
}

#[test]
fn rejects_unknown_mode() {
    let err = SearchConfig::from_toml_str(r#"mode = "montecarlo""#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn load_reports_missing_file() {
    let err = SearchConfig::load("/nonexistent/search.toml").unwrap_err();
    match err {
        ConfigError::Io { path, .. } => assert_eq!(path, PathBuf::from("/nonexistent/search.toml")),
        other => panic!("expected io error, got {other}"),
    }
}

#[test]
fn round_trips_through_toml() {
    let cfg = SearchConfig {
        difficulty: 7,
        mode: SearchMode::Heuristic,
        randomize: true,
        seed: 3,
    };
    let text = toml::to_string(&cfg).unwrap();
    assert_eq!(SearchConfig::from_toml_str(&text).unwrap(), cfg);
}
