//! Wavecat entry point
//!
//! Mounts the wave backdrop and the cat-runner game onto the page and
//! wires up their animation loops, input handlers and HUD.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_page {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlInputElement, KeyboardEvent, MouseEvent};

    use wavecat::frame::FrameLoop;
    use wavecat::game::{self, GamePhase, GameState, TickInput};
    use wavecat::render::{GameCanvas, WaveCanvas};
    use wavecat::settings::Settings;
    use wavecat::wave::{ModInputs, WaveState, sample_wave};

    /// Everything the page animates, behind one shared cell
    struct App {
        wave: WaveState,
        mods: ModInputs,
        wave_canvas: WaveCanvas,
        game: GameState,
        input: TickInput,
        game_canvas: GameCanvas,
    }

    impl App {
        /// Push score and overlay state into the DOM
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            set_text(&document, "hud-score", &self.game.score.to_string());

            let Some(overlay) = document.get_element_by_id("game-overlay") else {
                return;
            };
            match self.game.phase {
                GamePhase::Playing => {
                    let _ = overlay.set_attribute("class", "overlay hidden");
                }
                GamePhase::Idle => {
                    let _ = overlay.set_attribute("class", "overlay");
                    set_text(&document, "overlay-title", "Run Cat Run!");
                    set_text(
                        &document,
                        "overlay-detail",
                        "Press SPACE to start, UP ARROW to jump",
                    );
                }
                GamePhase::GameOver => {
                    let _ = overlay.set_attribute("class", "overlay");
                    let title = if self.game.collided {
                        "Ouch! Collision!"
                    } else {
                        "Game Over!"
                    };
                    set_text(&document, "overlay-title", title);
                    set_text(&document, "overlay-detail", &format!("Score: {}", self.game.score));
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("wavecat starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let settings = Settings::load(&document);
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        log::info!("seeded with {seed}");

        let wave_canvas = WaveCanvas::mount(&document, "wave-canvas", &settings);
        wave_canvas.resize_to_viewport(&window);
        let game_canvas = GameCanvas::mount(&document, "game-canvas");

        let app = Rc::new(RefCell::new(App {
            wave: WaveState::new(seed),
            mods: settings.mods,
            wave_canvas,
            game: GameState::new(seed.wrapping_mul(0x9e37_79b9_7f4a_7c15)),
            input: TickInput::default(),
            game_canvas,
        }));

        let wave_loop = Rc::new(FrameLoop::new());
        let game_loop = Rc::new(FrameLoop::new());

        setup_resize_handler(&window, app.clone());
        setup_mod_toggles(&document, app.clone());
        setup_input_handlers(&window, &document, app.clone(), game_loop.clone());
        setup_teardown(&window, wave_loop.clone(), game_loop.clone());

        start_wave_loop(&wave_loop, app.clone());

        // Idle render so the field and overlay show before the first start
        {
            let a = app.borrow();
            a.game_canvas.draw(&a.game);
            a.update_hud();
        }

        log::info!("wavecat running");
    }

    /// Run the wave backdrop until teardown
    fn start_wave_loop(wave_loop: &Rc<FrameLoop>, app: Rc<RefCell<App>>) {
        wave_loop.start(move |_time| {
            let mut a = app.borrow_mut();
            a.wave.step();
            let mods = a.mods;
            let size = a.wave_canvas.size();
            if size.x > 0.0 {
                let samples = sample_wave(&mut a.wave, mods, size.x, size.y);
                a.wave_canvas.draw(&samples);
            }
            true
        });
    }

    /// Reset the game and run its loop until the session ends. The frame
    /// callback stops itself the moment the phase leaves Playing, so no
    /// stale callback can touch a finished session.
    fn start_session(app: &Rc<RefCell<App>>, game_loop: &Rc<FrameLoop>) {
        {
            let mut a = app.borrow_mut();
            a.input = TickInput::default();
            game::tick(
                &mut a.game,
                &TickInput {
                    start: true,
                    jump: false,
                },
                now_ms(),
            );
        }
        log::info!("session started");

        let app = app.clone();
        game_loop.start(move |time| {
            let mut a = app.borrow_mut();
            let input = std::mem::take(&mut a.input);
            game::tick(&mut a.game, &input, time);
            a.game_canvas.draw(&a.game);
            a.update_hud();
            if a.game.phase == GamePhase::Playing {
                true
            } else {
                log::info!("session over, score {}", a.game.score);
                false
            }
        });
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        document: &Document,
        app: Rc<RefCell<App>>,
        game_loop: Rc<FrameLoop>,
    ) {
        // Keyboard: Space starts a session, ArrowUp jumps
        {
            let app = app.clone();
            let game_loop = game_loop.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                match event.code().as_str() {
                    "Space" => {
                        let phase = app.borrow().game.phase;
                        if phase != GamePhase::Playing {
                            event.prevent_default();
                            start_session(&app, &game_loop);
                        }
                    }
                    "ArrowUp" => {
                        let mut a = app.borrow_mut();
                        if a.game.phase == GamePhase::Playing {
                            event.prevent_default();
                            a.input.jump = true;
                        }
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Overlay button restarts as well
        if let Some(btn) = document.get_element_by_id("play-again") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                if app.borrow().game.phase != GamePhase::Playing {
                    start_session(&app, &game_loop);
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Bind the four modulation checkboxes to the shared inputs
    fn setup_mod_toggles(document: &Document, app: Rc<RefCell<App>>) {
        type Get = fn(&ModInputs) -> bool;
        type Set = fn(&mut ModInputs, bool);
        let toggles: [(&str, Get, Set); 4] = [
            ("mod-main", |m| m.main, |m, v| m.main = v),
            ("mod-one", |m| m.one, |m, v| m.one = v),
            ("mod-two", |m| m.two, |m, v| m.two = v),
            ("mod-three", |m| m.three, |m, v| m.three = v),
        ];

        for (id, get, set) in toggles {
            let Some(el) = document.get_element_by_id(id) else {
                log::warn!("toggle #{id} not found");
                continue;
            };
            let Ok(checkbox) = el.dyn_into::<HtmlInputElement>() else {
                log::warn!("toggle #{id} is not an input");
                continue;
            };
            checkbox.set_checked(get(&app.borrow().mods));

            let app = app.clone();
            let source = checkbox.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                set(&mut app.borrow_mut().mods, source.checked());
            });
            let _ = checkbox
                .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Keep the wave canvas matched to the viewport
    fn setup_resize_handler(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        let window_clone = window.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            app.borrow().wave_canvas.resize_to_viewport(&window_clone);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Cancel both loops when the page goes away. The leaked closure
    /// also keeps the loop handles alive for the page lifetime.
    fn setup_teardown(window: &web_sys::Window, wave_loop: Rc<FrameLoop>, game_loop: Rc<FrameLoop>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            wave_loop.cancel();
            game_loop.cancel();
            log::info!("animation loops cancelled");
        });
        let _ = window
            .add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_page::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("wavecat (native) starting...");
    log::info!("the canvases need a browser - run with `trunk serve` for the web version");

    run_headless_session();
}

/// Drive one scripted game session without a browser, as a smoke check
/// of the simulation core.
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_session() {
    use wavecat::game::{GamePhase, GameState, ObstacleKind, TickInput, tick};

    let mut state = GameState::new(42);
    tick(
        &mut state,
        &TickInput {
            start: true,
            jump: false,
        },
        0.0,
    );

    let mut now_ms = 0.0;
    let mut frames = 0u32;
    while state.phase == GamePhase::Playing && frames < 10_000 {
        now_ms += 1000.0 / 60.0;
        frames += 1;
        // Hop whenever a solid obstacle is closing in
        let jump = state.cat_position == 0.0
            && state
                .obstacles
                .iter()
                .any(|o| o.kind != ObstacleKind::Pit && (110.0..170.0).contains(&o.x));
        tick(&mut state, &TickInput { start: false, jump }, now_ms);
    }

    println!(
        "survived {frames} frames, score {}, obstacles on screen {}",
        state.score,
        state.obstacles.len()
    );
}
