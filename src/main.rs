//! Snake entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use wasm_snake::input::DirectionTracker;
    use wasm_snake::renderer::DomRenderer;
    use wasm_snake::settings::Config;
    use wasm_snake::sim::{GamePhase, GameState};
    use wasm_snake::store::StateStore;

    /// Game instance holding all state
    struct Game {
        store: StateStore,
        tracker: DirectionTracker,
        tick_interval_ms: f64,
        accumulator: f64,
        last_time: f64,
    }

    impl Game {
        fn new(config: &Config, seed: u64) -> Self {
            Self {
                store: StateStore::new(GameState::new(config, seed)),
                tracker: DirectionTracker::new(config.spawn_direction),
                tick_interval_ms: config.tick_interval_ms as f64,
                accumulator: 0.0,
                last_time: 0.0,
            }
        }

        /// Run the ticks the elapsed time paid for
        ///
        /// Returns false once the game has ended and the clock must stop.
        fn update(&mut self, dt: f64) -> bool {
            // A tab coming back from the background pays for one tick at most
            self.accumulator += dt.min(self.tick_interval_ms);

            while self.accumulator >= self.tick_interval_ms {
                self.accumulator -= self.tick_interval_ms;
                let input = self.tracker.sample();
                self.store.advance(&input);

                if self.store.state().phase == GamePhase::Dead {
                    return false;
                }
            }
            true
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Snake starting...");

        let config = Config::load();
        let seed = config.seed.unwrap_or_else(|| js_sys::Date::now() as u64);

        let game = Rc::new(RefCell::new(Game::new(&config, seed)));
        log::info!("Game initialized with seed: {}", seed);

        // Subscribing paints the spawn layout right away
        let renderer = Rc::new(RefCell::new(DomRenderer::new(game.borrow().store.state())));
        {
            let renderer = renderer.clone();
            game.borrow_mut()
                .store
                .subscribe(move |state| renderer.borrow_mut().render(state));
        }

        setup_input_handlers(game.clone());
        request_animation_frame(game);

        log::info!("Snake running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");

        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            game.borrow_mut().tracker.record_key(&event.key());
        });
        let _ =
            document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let running = {
            let mut g = game.borrow_mut();
            let dt = if g.last_time > 0.0 {
                time - g.last_time
            } else {
                0.0
            };
            g.last_time = time;
            g.update(dt)
        };

        // The clock never restarts after a kill
        if running {
            request_animation_frame(game);
        } else {
            log::info!("Game over");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Snake (native) starting...");
    log::info!("The DOM renderer needs a browser - run with `trunk serve` for the real game");

    // Scripted run
    println!("\nRunning headless demo game...");
    run_demo_game();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn run_demo_game() {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_snake::input::DirectionTracker;
    use wasm_snake::settings::Config;
    use wasm_snake::sim::{GameEvent, GamePhase, GameState};
    use wasm_snake::store::StateStore;

    let config = Config::default();
    let seed = config.seed.unwrap_or(20240214);
    let mut store = StateStore::new(GameState::new(&config, seed));
    let mut tracker = DirectionTracker::new(config.spawn_direction);

    let updates = Rc::new(Cell::new(0u32));
    let counter = updates.clone();
    store.subscribe(move |_| counter.set(counter.get() + 1));

    // Climb to the fruit row, then sweep left through it and into the wall
    let script = std::iter::repeat_n("ArrowUp", 2).chain(std::iter::repeat_n("ArrowLeft", 30));

    for key in script {
        if store.state().phase == GamePhase::Dead {
            break;
        }
        tracker.record_key(key);
        for event in store.advance(&tracker.sample()) {
            match event {
                GameEvent::Moved { .. } => {}
                GameEvent::FruitEaten { snake, fruit } => {
                    println!(
                        "  tick {:>2}: ate fruit, length {}, next fruit {:?}",
                        store.state().time_ticks,
                        snake.len(),
                        fruit
                    );
                }
                GameEvent::Killed { snake } => {
                    println!(
                        "  tick {:>2}: hit the wall at {:?}, final length {}",
                        store.state().time_ticks,
                        snake.head(),
                        snake.len()
                    );
                }
            }
        }
    }

    let state = store.state();
    assert!(state.snake.dead, "the scripted run must end at the wall");
    println!(
        "✓ Demo finished after {} ticks with {} state updates!",
        state.time_ticks,
        updates.get()
    );

    println!("\nFinal state:");
    println!(
        "{}",
        serde_json::to_string_pretty(state).expect("state serializes")
    );
}
