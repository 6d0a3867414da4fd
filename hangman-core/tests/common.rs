#![allow(dead_code)]

use hangman_core::{
    GameEvent, GameEventHandler, MemorySessionStore, MemoryWordCatalog, SessionCoordinator,
    WordSession,
};
use hangman_types::{Category, PlayerProfile};
use std::sync::{Arc, Mutex};

/// Word list with a handful of words per category
pub const TEST_WORD_LIST: &str = "\
# Animals
cat 0
dog 0
tiger 0
# Plants
fern 1
rose 1
# Technology
laptop 2
# Cities
paris 3
# Jobs
nurse 4
# Movies
jaws 5
";

pub fn create_test_catalog() -> MemoryWordCatalog {
    MemoryWordCatalog::from_word_list(TEST_WORD_LIST)
}

/// Coordinator over the test word list with a fixed seed
pub fn create_test_coordinator() -> SessionCoordinator {
    create_coordinator_with(create_test_catalog(), MemorySessionStore::new())
}

/// Coordinator whose catalog holds exactly one word
pub fn create_single_word_coordinator(word: &str, category: Category) -> SessionCoordinator {
    let mut catalog = MemoryWordCatalog::new();
    catalog.add_word(word, category);
    create_coordinator_with(catalog, MemorySessionStore::new())
}

pub fn create_coordinator_with(
    catalog: MemoryWordCatalog,
    store: MemorySessionStore,
) -> SessionCoordinator {
    SessionCoordinator::new(WordSession::with_seed(Box::new(catalog), 1234), Box::new(store))
}

pub fn create_test_player(name: &str) -> PlayerProfile {
    PlayerProfile::new(name, 0).unwrap()
}

pub fn create_test_player_with_score(name: &str, score: u32) -> PlayerProfile {
    let mut profile = create_test_player(name);
    profile.restore_score(score);
    profile
}

/// Records `count` distinct completed words in `category`
pub fn complete_words(profile: &mut PlayerProfile, category: Category, count: usize) {
    for i in 0..count {
        profile
            .completed_words_mut()
            .insert(category, &format!("{}{}", category.name().to_lowercase(), i));
    }
}

/// Event collector for testing event emissions
#[derive(Clone)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_events(&self) -> Vec<GameEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn last_event(&self) -> Option<GameEvent> {
        self.events.lock().unwrap().last().cloned()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn has_event_type(&self, check_fn: impl Fn(&GameEvent) -> bool) -> bool {
        self.events.lock().unwrap().iter().any(check_fn)
    }
}

impl GameEventHandler for EventCollector {
    fn handle_event(&mut self, event: GameEvent) {
        self.events.lock().unwrap().push(event);
    }
}
