//! End-to-end session scenarios.

use guesswork::catalog::{Ability, Character};
use guesswork::leaderboard::{FileStore, MemoryStore, SessionRecord, SharedLeaderboard, StoreFormat};
use guesswork::{GameEngine, GameStatus, GuessOutcome, LeaderboardStore, SessionConfig};
use std::collections::HashSet;
use std::time::Duration;

fn roster() -> Vec<Character> {
    [
        ("Jett", "Duelist"),
        ("Sage", "Sentinel"),
        ("Omen", "Controller"),
        ("Sova", "Initiator"),
        ("Reyna", "Duelist"),
    ]
    .iter()
    .map(|(name, role)| {
        Character::new(
            name.to_lowercase(),
            *name,
            *role,
            format!("{name} is an agent."),
            vec![
                Ability::new(format!("{name} Q")),
                Ability::new(format!("{name} E")),
                Ability::new(format!("{name} C")),
                Ability::new(format!("{name} X")),
            ],
        )
    })
    .collect()
}

fn engine_with<St: LeaderboardStore>(store: St, seed: u64) -> GameEngine<St> {
    let config = SessionConfig::builder()
        .seed(seed)
        .reveal_delay(Duration::from_secs(2))
        .build()
        .unwrap();
    let leaderboard = SharedLeaderboard::open(store, config.leaderboard_capacity);
    GameEngine::new(config, leaderboard).unwrap()
}

fn answer<St: LeaderboardStore>(engine: &GameEngine<St>) -> String {
    engine.session().unwrap().target().name.clone()
}

/// Solve every round on the first clue and first guess.
fn play_perfect<St: LeaderboardStore>(engine: &mut GameEngine<St>) {
    let rounds = engine.session().unwrap().total_rounds();
    for round in 1..=rounds {
        let name = answer(engine);
        assert_eq!(
            engine.submit_guess(&name),
            GuessOutcome::Correct { points: 100 }
        );
        if round < rounds {
            assert!(engine.advance_round());
        }
    }
}

#[test]
fn session_uses_whole_pool_when_sizes_match() {
    let pool = roster();
    let mut engine = engine_with(MemoryStore::new(), 1);
    engine.start_session(&pool).unwrap();

    let picked: HashSet<&str> = engine
        .session()
        .unwrap()
        .characters()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    let expected: HashSet<&str> = pool.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(picked, expected);
}

#[test]
fn misses_and_extra_clue_cost_points() {
    let mut engine = engine_with(MemoryStore::new(), 2);
    engine.start_session(&roster()).unwrap();

    assert_eq!(engine.submit_guess("Nobody"), GuessOutcome::Incorrect);
    assert_eq!(engine.submit_guess("Nobody"), GuessOutcome::Incorrect);
    assert!(engine.request_clue());

    let snapshot = engine.snapshot().unwrap();
    assert_eq!(snapshot.incorrect_guesses, 2);
    assert_eq!(snapshot.clues_used, 2);
    assert_eq!(snapshot.last_guess.as_deref(), Some("Nobody"));
    assert_eq!(snapshot.penalties.points_if_solved, 60);

    let name = answer(&engine);
    assert_eq!(engine.submit_guess(&name), GuessOutcome::Correct { points: 60 });

    let snapshot = engine.snapshot().unwrap();
    assert_eq!(snapshot.round_score, 60);
    assert_eq!(snapshot.session_score, 60);
    assert_eq!(snapshot.status, GameStatus::Won);
    assert_eq!(snapshot.total_rounds - snapshot.current_round, 4);
}

#[test]
fn guess_while_won_is_ignored() {
    let mut engine = engine_with(MemoryStore::new(), 3);
    engine.start_session(&roster()).unwrap();
    let name = answer(&engine);
    engine.submit_guess(&name);
    let before = engine.snapshot().unwrap();

    assert_eq!(engine.submit_guess(&name), GuessOutcome::Ignored);
    assert_eq!(engine.submit_guess("Nobody"), GuessOutcome::Ignored);
    assert!(!engine.request_clue());

    assert_eq!(engine.snapshot().unwrap(), before);
}

#[test]
fn wrong_guesses_are_uncapped() {
    let mut engine = engine_with(MemoryStore::new(), 4);
    engine.start_session(&roster()).unwrap();
    for _ in 0..25 {
        engine.submit_guess("Nobody");
    }

    assert_eq!(engine.snapshot().unwrap().incorrect_guesses, 25);
    let name = answer(&engine);
    assert_eq!(engine.submit_guess(&name), GuessOutcome::Correct { points: 0 });
}

#[test]
fn clue_sequence_stops_at_five() {
    let mut engine = engine_with(MemoryStore::new(), 5);
    engine.start_session(&roster()).unwrap();
    let target = engine.session().unwrap().target().clone();

    assert_eq!(
        engine.current_clue().unwrap().to_string(),
        format!("Rol: {}", target.role)
    );
    for _ in 0..4 {
        assert!(engine.request_clue());
    }
    assert!(!engine.request_clue());

    assert_eq!(engine.revealed_clues().len(), 5);
    assert_eq!(
        engine.current_clue().unwrap().text,
        format!("{} X", target.name)
    );
}

#[test]
fn perfect_last_round_completes_and_files_record() {
    let mut engine = engine_with(MemoryStore::new(), 6);
    engine.start_session(&roster()).unwrap();

    for _ in 1..5 {
        let name = answer(&engine);
        engine.submit_guess(&name);
        engine.advance_round();
    }
    let prior = engine.snapshot().unwrap().session_score;
    assert_eq!(prior, 400);

    let name = answer(&engine);
    assert_eq!(engine.submit_guess(&name), GuessOutcome::Correct { points: 100 });
    let snapshot = engine.snapshot().unwrap();
    assert_eq!(snapshot.status, GameStatus::RoundCompleted);
    assert!(!snapshot.completed);
    assert!(!engine.advance_round());

    let due = engine.finalization_due_at().unwrap();
    let finished = engine.poll(due).unwrap();
    assert_eq!(finished.record.total_score, prior + 100);
    assert_eq!(finished.record.rounds, 5);
    assert_eq!(finished.record.correct_guesses, 5);

    let board = engine.view_leaderboard();
    assert_eq!(board[0], finished.record);
    assert!(engine.snapshot().unwrap().completed);
    assert!(engine.finalize_session().is_none());
    assert_eq!(engine.view_leaderboard().len(), 1);
}

#[test]
fn lost_status_is_never_reached() {
    let mut engine = engine_with(MemoryStore::new(), 7);
    engine.start_session(&roster()).unwrap();
    for _ in 0..5 {
        for _ in 0..10 {
            engine.submit_guess("Nobody");
            engine.request_clue();
        }
        let name = answer(&engine);
        assert_eq!(engine.submit_guess(&name), GuessOutcome::Correct { points: 0 });
        engine.advance_round();
    }
    assert_eq!(engine.status(), Some(GameStatus::RoundCompleted));
    assert!(engine.finalize_session().is_some());

    let history = engine.snapshot().unwrap().history;
    assert!(history
        .transitions()
        .iter()
        .all(|t| t.to != GameStatus::Lost && t.from != GameStatus::Lost));
}

#[test]
fn leaderboard_keeps_ten_best_sessions() {
    let store = MemoryStore::with_entries(
        (0..10)
            .map(|i| SessionRecord::new(None, 100 + i * 10, 5, 5, chrono::Utc::now()))
            .collect(),
    );
    let mut engine = engine_with(store, 8);

    for _ in 0..3 {
        engine.start_session(&roster()).unwrap();
        play_perfect(&mut engine);
        let finished = engine.finalize_session().unwrap();
        assert_eq!(finished.record.total_score, 500);
    }

    let board = engine.view_leaderboard();
    assert_eq!(board.len(), 10);
    assert!(board.windows(2).all(|w| w[0].total_score >= w[1].total_score));
    assert_eq!(board.iter().filter(|r| r.total_score == 500).count(), 3);
    assert_eq!(board.last().unwrap().total_score, 130);
    assert_eq!(engine.leaderboard().store().stored().unwrap(), board);
}

#[test]
fn file_backed_leaderboard_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ranking.bin");

    let first_score = {
        let store = FileStore::new(&path).with_format(StoreFormat::Binary);
        let mut engine = engine_with(store, 9);
        engine.start_session(&roster()).unwrap();
        play_perfect(&mut engine);
        engine.finalize_session().unwrap().record.total_score
    };

    let reopened = SharedLeaderboard::open(
        FileStore::new(&path).with_format(StoreFormat::Binary),
        10,
    );
    let entries = reopened.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].total_score, first_score);
}

#[test]
fn corrupt_leaderboard_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ranking.json");
    std::fs::write(&path, "[[[").unwrap();

    let mut engine = engine_with(FileStore::new(&path), 10);
    assert!(engine.view_leaderboard().is_empty());

    engine.start_session(&roster()).unwrap();
    play_perfect(&mut engine);
    let finished = engine.finalize_session().unwrap();
    assert!(finished.placement.persisted);

    let reloaded = FileStore::new(&path).load().unwrap();
    assert_eq!(reloaded, vec![finished.record]);
}
