
use hangman_cli::{App, Config};
use hangman_core::MemoryWordCatalog;
use hangman_persistence::DatabaseManager;
use test_helpers::*;

#[tokio::test]
async fn test_commands_require_login() {
    let mut app = create_test_app().await;
    assert_eq!(run(&mut app, "play animals").await, "Log in or register first.");
    assert_eq!(run(&mut app, "a").await, "Log in or register first.");
    assert_eq!(run(&mut app, "load").await, "Log in or register first.");
    assert_eq!(run(&mut app, "save").await, "Log in or register first.");
    assert!(run(&mut app, "status").await.contains("No game in progress"));
}

#[tokio::test]
async fn test_register_and_login() {
    let mut app = create_test_app().await;
    assert_eq!(run(&mut app, "register alice 3").await, "Welcome, ALICE!");
    assert!(run(&mut app, "register Alice").await.contains("already taken"));
    assert!(run(&mut app, "login ghost").await.contains("GHOST not found"));

    let reply = run(&mut app, "login alice").await;
    assert!(reply.starts_with("Welcome back, ALICE"));
    assert_eq!(app.current_player().unwrap().avatar_id(), 3);

    let stored = app.database().players().find_by_name("alice").await.unwrap();
    assert!(stored.is_some());
}

#[tokio::test]
async fn test_winning_game_updates_profile_and_database() {
    let mut app = create_test_app().await;
    run(&mut app, "register bob").await;

    let board = run(&mut app, "play animals").await;
    assert!(board.starts_with("_ _ _  [Animals]"));

    run(&mut app, "c").await;
    run(&mut app, "a").await;
    let last = run(&mut app, "guess t").await;
    assert!(last.contains("Game over (won)"));
    assert!(last.contains("Score: 15 (+5)"));

    let stored = app
        .database()
        .players()
        .find_by_name("bob")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.score(), 15);
    assert_eq!(stored.completed_words().total(), 1);

    // The only animal is now used up
    assert_eq!(run(&mut app, "play Animals").await, "No words left in Animals.");
    assert!(run(&mut app, "x").await.contains("already over"));
}

#[tokio::test]
async fn test_invalid_input_is_reported() {
    let mut app = create_test_app().await;
    run(&mut app, "register carol").await;
    assert!(run(&mut app, "play dinosaurs").await.contains("No words left"));
    assert!(run(&mut app, "q").await.contains("no game session is active"));

    run(&mut app, "play cities").await;
    assert!(run(&mut app, "7").await.contains("not alphabetic"));
}

#[tokio::test]
async fn test_leaderboard_and_reset() {
    let mut app = create_test_app().await;
    run(&mut app, "register dave").await;
    run(&mut app, "play plants").await;
    for letter in ["f", "e", "r", "n"] {
        run(&mut app, letter).await;
    }
    run(&mut app, "logout").await;
    run(&mut app, "register erin").await;

    let board = run(&mut app, "leaderboard").await;
    let lines: Vec<&str> = board.lines().collect();
    assert!(lines[0].contains("DAVE") && lines[0].contains("20"));
    assert!(lines[1].contains("ERIN"));
    assert_eq!(lines[2], "Your rank: 2");

    run(&mut app, "login dave").await;
    assert_eq!(run(&mut app, "reset").await, "Score reset to 0.");
    assert_eq!(app.current_player().unwrap().score(), 0);
}

#[tokio::test]
async fn test_saved_game_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("hangman.db").display());
    let config = Config {
        database_url: url.clone(),
        ..Config::default()
    };

    let db = DatabaseManager::open(&url).await.unwrap();
    let catalog = MemoryWordCatalog::from_word_list(TEST_WORD_LIST);
    let mut app = App::start(config.clone(), db, catalog).await.unwrap();
    run(&mut app, "register frank").await;
    run(&mut app, "play cities").await;
    run(&mut app, "p").await;
    run(&mut app, "z").await;
    assert!(run(&mut app, "save").await.starts_with("Saved game"));
    assert_eq!(run(&mut app, "quit").await, "Goodbye!");
    drop(app);

    let db = DatabaseManager::connect(&url).await.unwrap();
    let catalog = MemoryWordCatalog::from_word_list(TEST_WORD_LIST);
    let mut app = App::start(config, db, catalog).await.unwrap();
    // +5 for p, -2 for z
    assert!(run(&mut app, "login frank").await.contains("3 points"));

    let board = run(&mut app, "load").await;
    assert!(board.starts_with("p _ _ _ _  [Cities]"));
    assert!(board.contains("Guesses left: 5"));
}

#[tokio::test]
async fn test_won_game_cannot_be_loaded_again() {
    let mut app = create_test_app().await;
    run(&mut app, "register gina").await;
    run(&mut app, "play cities").await;
    run(&mut app, "p").await;
    assert!(run(&mut app, "save").await.starts_with("Saved game"));
    assert!(app.database().sessions().get_last().await.unwrap().is_some());

    for letter in ["a", "r", "i", "s"] {
        run(&mut app, letter).await;
    }
    assert_eq!(app.current_player().unwrap().score(), 25);
    assert!(app.database().sessions().get_last().await.unwrap().is_none());

    assert_eq!(run(&mut app, "load").await, "No saved game.");
    assert!(run(&mut app, "a").await.contains("already over"));
    assert_eq!(app.current_player().unwrap().score(), 25);
}
