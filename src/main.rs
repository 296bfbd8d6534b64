//! Ping Pong entry point
//!
//! The browser build runs the interactive game; the native build plays a headless
//! AI-vs-AI demo match and prints its summary as JSON.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, KeyboardEvent};

    use ping_pong::audio::{self, SoundPlayer};
    use ping_pong::consts::*;
    use ping_pong::renderer::{RenderError, RenderState, scene};
    use ping_pong::sim::{GameState, InputEvent, Key, Phase, handle_event, tick};
    use ping_pong::ui;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        audio: Box<dyn SoundPlayer>,
        document: web_sys::Document,
        overlay: Option<Element>,
        /// One reusable element per text line, in order
        line_elements: Vec<Element>,
        /// Lines currently shown
        shown: Vec<ui::TextLine>,
        /// Input collected by DOM listeners since the last step
        pending: Vec<InputEvent>,
        accumulator: f32,
        last_time: f64,
    }

    impl Game {
        fn new(seed: u64, document: web_sys::Document, overlay: Option<Element>) -> Self {
            Self {
                state: GameState::new(seed),
                render_state: None,
                audio: audio::load_player(),
                document,
                overlay,
                line_elements: Vec::new(),
                shown: Vec::new(),
                pending: Vec::new(),
                accumulator: 0.0,
                last_time: 0.0,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                for event in std::mem::take(&mut self.pending) {
                    // There is no quit in the browser; closing the tab ends the game
                    let _ = handle_event(&mut self.state, &event);
                }
                tick(&mut self.state);
                for event in self.state.drain_events() {
                    if let Some(cue) = audio::cue_for(&event) {
                        self.audio.play(cue);
                    }
                }
                self.accumulator -= SIM_DT;
                substeps += 1;
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = scene::build(&self.state);
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Sync the text overlay with the current phase
        fn update_overlay(&mut self) {
            let Some(overlay) = &self.overlay else { return };
            let lines = ui::screen_text(&self.state);
            if lines == self.shown {
                return;
            }

            for (i, line) in lines.iter().enumerate() {
                if i == self.line_elements.len() {
                    let Ok(el) = self.document.create_element("div") else {
                        log::warn!("Failed to create overlay element");
                        break;
                    };
                    if overlay.append_child(&el).is_err() {
                        break;
                    }
                    self.line_elements.push(el);
                }
                let el = &self.line_elements[i];
                let _ = el.set_attribute("style", &line.css_style());
                el.set_text_content(Some(&line.text));
            }
            // Drop elements left over from a longer screen
            for el in self.line_elements.drain(lines.len().min(self.line_elements.len())..) {
                el.remove();
            }
            self.shown = lines;
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("Ping Pong starting...");

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        document.set_title(CAPTION);

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No <canvas id=\"canvas\"> on the page");
            return;
        };

        // Backing store at device resolution; the playfield is mapped onto it
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width().max(1);
        let client_h = canvas.client_height().max(1);
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let overlay = document.get_element_by_id("overlay");
        if let Some(el) = &overlay {
            let scale = client_w as f32 / SCREEN_WIDTH;
            let _ = el.set_attribute("style", &format!("--px: {}px", scale));
        }

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, document.clone(), overlay)));
        log::info!("Game initialized with seed: {}", seed);

        match init_renderer(canvas, width, height).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => log::error!("WebGPU unavailable ({}); running without graphics", e),
        }

        setup_input_handlers(game.clone());
        request_animation_frame(game);

        log::info!("Ping Pong running!");
    }

    async fn init_renderer(
        canvas: HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> Result<RenderState, RenderError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(surface, &adapter, width, height).await
    }

    /// Browser key name to game key
    fn map_key(key: &str) -> Option<Key> {
        Some(match key {
            "ArrowUp" => Key::Up,
            "ArrowDown" => Key::Down,
            "ArrowLeft" => Key::Left,
            "ArrowRight" => Key::Right,
            "w" | "W" => Key::W,
            "s" | "S" => Key::S,
            " " => Key::Space,
            "Enter" => Key::Return,
            "Backspace" => Key::Backspace,
            "Escape" => Key::Escape,
            _ => return None,
        })
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Key down, typed text, and the demo toggle
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                let naming = matches!(g.state.phase, Phase::EnterName { .. });

                if let Some(mapped) = map_key(&key) {
                    // Keep arrows and space from scrolling the page
                    event.prevent_default();
                    if !event.repeat() || mapped == Key::Backspace {
                        g.pending.push(InputEvent::KeyDown(mapped));
                    }
                }

                if key.chars().count() == 1 && !event.ctrl_key() && !event.meta_key() {
                    if naming {
                        g.pending.push(InputEvent::Text(key));
                    } else if key.eq_ignore_ascii_case("i") {
                        g.state.autoplay = !g.state.autoplay;
                        log::info!("Demo mode: {}", g.state.autoplay);
                    }
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(mapped) = map_key(&event.key()) {
                    game.borrow_mut().pending.push(InputEvent::KeyUp(mapped));
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
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

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.update_overlay();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main
}

/// Longest demo match: ten minutes of play
#[cfg(not(target_arch = "wasm32"))]
const DEMO_MAX_TICKS: u64 = 10 * 60 * ping_pong::consts::TICK_RATE as u64;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use ping_pong::sim::run_headless;
    use ping_pong::{BallSpeed, Difficulty, MatchSettings};

    env_logger::init();
    log::info!("{} (native demo) starting...", ping_pong::consts::CAPTION);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut settings = MatchSettings::default();

    if let Some(arg) = args.first() {
        match Difficulty::from_str(arg) {
            Some(difficulty) => settings.difficulty = difficulty,
            None => log::warn!("Unknown difficulty '{}', using {}", arg, settings.difficulty.as_str()),
        }
    }
    if let Some(arg) = args.get(1) {
        match BallSpeed::from_str(arg) {
            Some(speed) => settings.ball_speed = speed,
            None => log::warn!("Unknown ball speed '{}', using {}", arg, settings.ball_speed.as_str()),
        }
    }
    // Only seeds the cosmetic effects; the rally itself is fully deterministic
    let seed = match args.get(2).map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => seed,
        Some(Err(e)) => {
            log::warn!("Bad seed ({}), using 0", e);
            0
        }
        None => 0,
    };

    let summary = run_headless(settings, seed, DEMO_MAX_TICKS);
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to encode summary: {}", e),
    }
}
