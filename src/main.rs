//! Arcade Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use arcade_pong::Game;
    use arcade_pong::consts::*;
    use arcade_pong::input::{InputEvent, keymap};
    use arcade_pong::platform::clock_seed;
    use arcade_pong::renderer::CanvasSurface;

    /// Game plus the browser resources it draws into
    struct App {
        game: Game,
        surface: CanvasSurface,
        last_time: f64,
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Arcade Pong starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let surface = CanvasSurface::new(&canvas, SURFACE_WIDTH as u32, SURFACE_HEIGHT as u32)?;
        let app = Rc::new(RefCell::new(App {
            game: Game::new(clock_seed()),
            surface,
            last_time: 0.0,
        }));

        setup_input_handlers(&window, app.clone())?;
        request_animation_frame(app)?;

        log::info!("Arcade Pong running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        // Key down/up become press, hold-start and hold-end events
        for (name, down) in [("keydown", true), ("keyup", false)] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let key = event.key();
                if keymap::binding(&key).is_none() {
                    return;
                }
                // Arrow keys would scroll the page
                event.prevent_default();
                let mut app = app.borrow_mut();
                for input in keymap::translate(&key, down, event.repeat()) {
                    app.game.handle_event(&input);
                }
            });
            window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key ups are lost while unfocused, so release everything on blur
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let mut app = app.borrow_mut();
                for player in 1..=2 {
                    for button in ["UP", "DOWN"] {
                        app.game.handle_event(&InputEvent::hold_end(player, button));
                    }
                }
                log::info!("Window blurred, released held buttons");
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // rAF stops while the tab is hidden; don't replay that gap on return
        {
            let document = window.document().ok_or("no document")?;
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Visible {
                    let mut app = app.borrow_mut();
                    app.game.resync_clock();
                    app.last_time = 0.0;
                    log::info!("Tab visible again, clock resynced");
                }
            });
            document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            )?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut app = app.borrow_mut();

            let dt = if app.last_time > 0.0 {
                ((time - app.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            app.last_time = time;

            let App { game, surface, .. } = &mut *app;
            game.frame(dt, surface);
        }

        if let Err(e) = request_animation_frame(app) {
            log::error!("Failed to schedule frame: {:?}", e);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::io::BufRead;
    use std::sync::mpsc::{self, Sender};
    use std::thread;
    use std::time::{Duration, Instant};

    use arcade_pong::Game;
    use arcade_pong::consts::SIM_DT;
    use arcade_pong::input::{InputEvent, parse_command};
    use arcade_pong::platform::clock_seed;
    use arcade_pong::renderer::{RecordingSurface, describe_frame};

    /// Read text commands from stdin until it closes or the game goes away
    fn read_commands(tx: Sender<InputEvent>) {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    log::warn!("Stopped reading input: {}", e);
                    return;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match parse_command(&line) {
                Ok(event) => {
                    if tx.send(event).is_err() {
                        return;
                    }
                }
                Err(e) => log::warn!("Bad command {:?}: {}", line, e),
            }
        }
        log::info!("Input closed; match keeps running");
    }

    pub fn run() -> anyhow::Result<()> {
        log::info!("Arcade Pong (headless) starting...");
        log::info!("Commands: `press`, `start <player> <UP|DOWN>`, `end <player> <UP|DOWN>`");

        let (tx, rx) = mpsc::channel();
        thread::Builder::new()
            .name("input".into())
            .spawn(move || read_commands(tx))?;

        let mut game = Game::new(clock_seed());
        let mut surface = RecordingSurface::new();
        let tick = Duration::from_secs_f32(SIM_DT);
        let mut deadline = Instant::now();

        loop {
            // Apply every event that arrived since the last tick before stepping
            for event in rx.try_iter() {
                game.handle_event(&event);
            }
            game.step();
            if log::log_enabled!(log::Level::Trace) {
                game.render(&mut surface);
                let frame = surface.take();
                log::trace!("Frame: {}", describe_frame(&frame));
            }

            deadline += tick;
            let now = Instant::now();
            if deadline > now {
                thread::sleep(deadline - now);
            } else {
                deadline = now;
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    headless::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
