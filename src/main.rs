//! Parallax Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::KeyboardEvent;

    use parallax_runner::Tuning;
    use parallax_runner::platform::web::{ListenerGuard, window_viewport};
    use parallax_runner::platform::{Key, PressState};
    use parallax_runner::renderer::{DomRenderer, RenderFrame};
    use parallax_runner::sim::world::{GROUND_TILE_SPAN, OBSTACLE_COUNT};
    use parallax_runner::sim::{FixedTimestep, Viewport, WorldState, tick};

    /// Game instance holding all state
    struct Game {
        state: WorldState,
        tuning: Tuning,
        keys: PressState,
        timestep: FixedTimestep,
        last_time: f64,
        renderer: Option<DomRenderer>,
        running: bool,
    }

    impl Game {
        fn new(viewport: Viewport, tuning: Tuning) -> Self {
            let timestep = FixedTimestep::new(tuning.tick_dt);
            Self {
                state: WorldState::new(viewport),
                tuning,
                keys: PressState::new(),
                timestep,
                last_time: 0.0,
                renderer: None,
                running: true,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, frame_dt: f32) {
            let steps = self.timestep.advance(frame_dt);
            for _ in 0..steps {
                let input = self.keys.to_tick_input();
                let outcome = tick(&mut self.state, &input, &self.tuning);
                self.keys.end_tick();

                if outcome.jump_started {
                    log::debug!("Jump!");
                }
            }
        }

        /// Render the current frame
        fn render(&self) {
            if let Some(ref renderer) = self.renderer {
                renderer.paint(&RenderFrame::capture(&self.state));
            }
        }

        fn on_key(&mut self, event: &KeyboardEvent, down: bool) {
            let Some(key) = Key::from_dom_key(&event.key()) else {
                return;
            };
            // Arrows and space would scroll the page
            event.prevent_default();
            if down {
                self.keys.press(key);
            } else {
                self.keys.release(key);
            }
        }

        fn on_resize(&mut self) {
            match window_viewport() {
                Some(Ok(viewport)) => self.state.resize(viewport),
                Some(Err(e)) => log::warn!("Ignoring resize: {}", e),
                None => {}
            }
        }
    }

    /// Everything torn down by `shutdown`
    struct Session {
        game: Rc<RefCell<Game>>,
        _listeners: Vec<ListenerGuard>,
    }

    thread_local! {
        static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
    }

    fn js_err(e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).map_err(js_err)?;

        log::info!("Parallax Runner starting...");

        let window = web_sys::window().ok_or_else(|| js_err("no window"))?;
        let document = window.document().ok_or_else(|| js_err("no document"))?;

        let viewport = window_viewport()
            .ok_or_else(|| js_err("no window"))?
            .map_err(js_err)?;
        let tuning = Tuning::load();

        let mut game = Game::new(viewport, tuning);
        game.renderer = Some(
            DomRenderer::new(&document, GROUND_TILE_SPAN, OBSTACLE_COUNT).map_err(js_err)?,
        );
        let game = Rc::new(RefCell::new(game));

        let listeners = install_listeners(&window, &game)?;
        SESSION.with(|s| {
            *s.borrow_mut() = Some(Session {
                game: game.clone(),
                _listeners: listeners,
            })
        });

        request_animation_frame(game);

        log::info!(
            "Parallax Runner running at {}x{}",
            viewport.width(),
            viewport.height()
        );
        Ok(())
    }

    /// Stop the loop and remove every listener
    pub fn shutdown() {
        SESSION.with(|s| {
            if let Some(session) = s.borrow_mut().take() {
                session.game.borrow_mut().running = false;
                log::info!("Parallax Runner stopped");
            }
        });
    }

    /// One listener per event, registered once for the whole session
    fn install_listeners(
        window: &web_sys::Window,
        game: &Rc<RefCell<Game>>,
    ) -> Result<Vec<ListenerGuard>, JsValue> {
        let mut listeners = Vec::with_capacity(4);

        for (event, down) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            listeners.push(ListenerGuard::new(window, event, move |event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    game.borrow_mut().on_key(event, down);
                }
            })?);
        }

        {
            let game = game.clone();
            listeners.push(ListenerGuard::new(window, "resize", move |_event| {
                game.borrow_mut().on_resize();
            })?);
        }

        // Keyup never arrives once focus is gone
        {
            let game = game.clone();
            listeners.push(ListenerGuard::new(window, "blur", move |_event| {
                game.borrow_mut().keys.clear();
                log::info!("Released all keys (window blur)");
            })?);
        }

        Ok(listeners)
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            if !g.running {
                return;
            }

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                g.timestep.step()
            };
            g.last_time = time;

            g.update(dt);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn shutdown() {
    wasm_game::shutdown();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use parallax_runner::Tuning;
    use parallax_runner::platform::headless::{demo_script, run_script};
    use parallax_runner::renderer::RenderFrame;
    use parallax_runner::sim::{Viewport, WorldState};

    env_logger::init();
    log::info!("Parallax Runner (native) starting...");
    log::info!("Native mode runs a headless scripted demo - run with `trunk serve` for the web version");

    let tuning = match std::env::args().nth(1) {
        Some(path) => {
            let tuning = Tuning::load_file(&path)?;
            log::info!("Loaded tuning from {}", path);
            tuning
        }
        None => Tuning::default(),
    };

    let mut state = WorldState::new(Viewport::new(800.0, 600.0)?);
    let report = run_script(&mut state, &demo_script(), &tuning);
    log::info!(
        "Ran {} ticks: {} blocked, {} scrolled, {} jump(s)",
        report.ticks,
        report.blocked_ticks,
        report.scrolled_ticks,
        report.jumps_landed
    );

    println!("{}", RenderFrame::capture(&state).to_json()?);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
