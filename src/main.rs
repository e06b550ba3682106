//! Soft Pong entry point
//!
//! Platform shells: a headless runner on native targets and a canvas shell in
//! the browser. Both own the framebuffer and the clock and call
//! [`soft_pong::sim::tick`] once per frame.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use wasm_bindgen::{Clamped, JsCast};
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData, KeyboardEvent};

    use soft_pong::consts::DEFAULT_FRAME_DT;
    use soft_pong::platform::button_for_key_code;
    use soft_pong::sim::{GameState, Input, tick};
    use soft_pong::{Framebuffer, Settings};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        input: Input,
        framebuffer: Framebuffer,
        settings: Settings,
        /// Scratch buffer for the canvas upload
        rgba: Vec<u8>,
        last_time: Option<f64>,
    }

    impl Game {
        fn new(settings: Settings) -> Self {
            Self {
                state: GameState::new(),
                input: Input::new(),
                framebuffer: Framebuffer::default(),
                settings,
                rgba: Vec::new(),
                last_time: None,
            }
        }

        /// Simulate, draw, and present one frame
        fn frame(
            &mut self,
            time: f64,
            canvas: &HtmlCanvasElement,
            ctx: &CanvasRenderingContext2d,
        ) -> Result<(), JsValue> {
            let (width, height) = sync_canvas_size(canvas);
            if (width, height) != (self.framebuffer.width(), self.framebuffer.height()) {
                log::info!("Framebuffer resized to {}x{}", width, height);
                self.framebuffer.resize(width, height);
            }

            // Wall-clock delta, passed through unclamped
            let dt = match self.last_time {
                Some(last) => ((time - last) / 1000.0) as f32,
                None => DEFAULT_FRAME_DT,
            };
            self.last_time = Some(time);

            tick(
                &mut self.state,
                &self.input,
                dt,
                &mut self.framebuffer,
                &self.settings.palette,
            )
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
            self.input.begin_frame();

            if width == 0 || height == 0 {
                return Ok(());
            }

            self.rgba.clear();
            self.framebuffer.write_rgba(&mut self.rgba);
            let image = ImageData::new_with_u8_clamped_array_and_sh(
                Clamped(&self.rgba[..]),
                width as u32,
                height as u32,
            )?;
            ctx.put_image_data(&image, 0.0, 0.0)
        }
    }

    /// Match the canvas backing store to its on-page size
    fn sync_canvas_size(canvas: &HtmlCanvasElement) -> (usize, usize) {
        let width = canvas.client_width().max(0) as u32;
        let height = canvas.client_height().max(0) as u32;
        if canvas.width() != width {
            canvas.set_width(width);
        }
        if canvas.height() != height {
            canvas.set_height(height);
        }
        (width as usize, height as usize)
    }

    fn request_animation_frame(callback: &Closure<dyn FnMut(f64)>) -> Result<i32, JsValue> {
        web_sys::window()
            .ok_or("no window")?
            .request_animation_frame(callback.as_ref().unchecked_ref())
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Soft Pong starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into()?;

        let game = Rc::new(RefCell::new(Game::new(Settings::load())));

        setup_input_handlers(&window, game.clone())?;

        // The callback re-schedules itself, so it holds a handle to its own slot
        let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let next = slot.clone();
        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |time: f64| {
            if let Err(e) = game.borrow_mut().frame(time, &canvas, &ctx) {
                log::error!("Frame failed, stopping: {:?}", e);
                return;
            }
            if let Some(callback) = next.borrow().as_ref() {
                if let Err(e) = request_animation_frame(callback) {
                    log::error!("requestAnimationFrame failed: {:?}", e);
                }
            }
        }) as Box<dyn FnMut(f64)>));

        if let Some(callback) = slot.borrow().as_ref() {
            request_animation_frame(callback)?;
        }

        log::info!("Soft Pong running!");
        Ok(())
    }

    fn setup_input_handlers(
        window: &web_sys::Window,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        for (event_name, is_down) in [("keydown", true), ("keyup", false)] {
            let game = game.clone();
            let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                if let Some(button) = button_for_key_code(&event.code()) {
                    event.prevent_default();
                    game.borrow_mut().input.process(button, is_down);
                }
            }) as Box<dyn FnMut(KeyboardEvent)>);
            window.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::error::Error;
    use std::fs::File;
    use std::io::BufWriter;

    use soft_pong::sim::{Button, GameState, Input, tick};
    use soft_pong::{Framebuffer, Settings};

    /// Menu keystrokes for frame `frame`: optionally switch to multiplayer,
    /// then confirm
    fn script_menu(input: &mut Input, frame: u32, multiplayer: bool) {
        let confirm_frame = u32::from(multiplayer);
        if multiplayer && frame == 0 {
            input.process(Button::Right, true);
        }
        if frame == confirm_frame {
            input.process(Button::Right, false);
            input.process(Button::Enter, true);
        } else if frame == confirm_frame + 1 {
            input.process(Button::Enter, false);
        }
    }

    /// Play the configured number of frames without a window
    pub fn run(settings: &Settings) -> Result<(), Box<dyn Error>> {
        let mut state = GameState::new();
        let mut input = Input::new();
        let mut framebuffer = Framebuffer::new(
            settings.window_width as usize,
            settings.window_height as usize,
        );

        log::info!(
            "Running {} frames at dt={} on a {}x{} buffer",
            settings.demo_frames,
            settings.frame_dt,
            framebuffer.width(),
            framebuffer.height()
        );

        for frame in 0..settings.demo_frames {
            input.begin_frame();
            script_menu(&mut input, frame, settings.demo_multiplayer);
            tick(
                &mut state,
                &input,
                settings.frame_dt,
                &mut framebuffer,
                &settings.palette,
            )?;
        }

        log::info!(
            "Final score {} - {} after {} gameplay frames",
            state.score.player_1,
            state.score.player_2,
            state.frames
        );
        println!("{}", serde_json::to_string_pretty(&state)?);

        if let Some(path) = &settings.snapshot_path {
            framebuffer.write_ppm(BufWriter::new(File::create(path)?))?;
            log::info!("Last frame written to {}", path.display());
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    env_logger::init();
    log::info!("Soft Pong (native) starting...");
    log::info!("No window backend on native; running headless");

    let settings = std::env::args_os()
        .nth(1)
        .map(soft_pong::Settings::load_from)
        .unwrap_or_default();

    match headless::run(&settings) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Headless run failed: {}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
