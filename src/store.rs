//! Game state store
//!
//! One authoritative `GameState` plus a synchronous subscriber list. The
//! engine is the only writer; subscribers observe every update, and a new
//! subscriber is caught up with the current snapshot right away.

use crate::sim::{GameEvent, GameState, TickInput, tick};

type Subscriber = Box<dyn FnMut(&GameState)>;

pub struct StateStore {
    state: GameState,
    subscribers: Vec<Subscriber>,
}

impl StateStore {
    /// Wrap an initial state
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
        }
    }

    /// Current snapshot
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Register an observer
    ///
    /// Runs immediately with the current snapshot, then again after every
    /// future update.
    pub fn subscribe(&mut self, mut f: impl FnMut(&GameState) + 'static) {
        f(&self.state);
        self.subscribers.push(Box::new(f));
    }

    /// Swap in a whole new snapshot, e.g. a fresh game, and notify
    pub fn replace(&mut self, state: GameState) {
        self.state = state;
        self.notify();
    }

    /// Run one tick of the engine and notify subscribers once per emitted
    /// event, in event order
    pub fn advance(&mut self, input: &TickInput) -> Vec<GameEvent> {
        let events = tick(&mut self.state, input);
        for _ in &events {
            self.notify();
        }
        events
    }

    fn notify(&mut self) {
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
    }
}
