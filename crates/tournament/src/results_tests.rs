use super::*;

fn record(result: GameResult, termination: Termination) -> GameRecord {
    GameRecord {
        engine1_white: true,
        result,
        termination,
        moves: vec!["e2e4".to_string(), "e7e5".to_string()],
    }
}

#[test]
fn test_match_result_score() {
    let mut result = MatchResult::new();
    assert_eq!(result.score(), 0.5);
    result.record(GameResult::Win);
    result.record(GameResult::Draw);
    result.record(GameResult::Loss);
    result.record(GameResult::Win);
    assert_eq!(result.total_games(), 4);
    assert_eq!((result.wins, result.losses, result.draws), (2, 1, 1));
    assert!((result.score() - 0.625).abs() < 1e-9);
}

#[test]
fn test_flipped() {
    assert_eq!(GameResult::Win.flipped(), GameResult::Loss);
    assert_eq!(GameResult::Loss.flipped(), GameResult::Win);
    assert_eq!(GameResult::Draw.flipped(), GameResult::Draw);
}

#[test]
fn test_report_tallies_games() {
    let games = vec![
        record(GameResult::Win, Termination::Checkmate),
        record(GameResult::Draw, Termination::MaxPlies),
    ];
    let report = MatchReport::new("a", "b", MatchConfig::default(), games);
    assert_eq!(report.result.wins, 1);
    assert_eq!(report.result.draws, 1);

    let text = report.generate_report();
    assert!(text.contains("=== Match: a vs b ==="));
    assert!(text.contains("MaxPlies"));
    assert!(text.contains("1 wins, 0 losses, 1 draws"));
}

#[test]
fn test_report_json_file() {
    let report = MatchReport::new(
        "Classical minimax",
        "Classical heuristic",
        MatchConfig::default(),
        vec![record(GameResult::Loss, Termination::IllegalMove)],
    );
    let path = std::env::temp_dir().join(format!("tournament_report_{}.json", std::process::id()));
    report.save(&path).unwrap();
    let loaded = MatchReport::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, report);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["games"][0]["termination"], "illegal_move");
}

#[test]
fn test_load_errors() {
    let missing = MatchReport::load(Path::new("/nonexistent/report.json")).unwrap_err();
    assert!(matches!(missing, TournamentError::Io { .. }));

    let path = std::env::temp_dir().join(format!("tournament_bad_{}.json", std::process::id()));
    std::fs::write(&path, "{ not json").unwrap();
    let bad = MatchReport::load(&path).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(matches!(bad, TournamentError::Report(_)));
}
