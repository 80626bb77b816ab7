//! Winit graphical front-end for wayfarer.
//!
//! Draws the explored map and the HUD in a native window using:
//! - [`winit`] for the window and keyboard events
//! - [`softbuffer`] for CPU-side presentation
//! - [`image`] for tile and frame sprites
//! - [`fontdue`] for HUD text
//!
//! # Usage
//!
//! ```rust,no_run
//! use wayfarer_core::{Controller, EnemyRoster, EventLoopDriver, Game, GameConfig, RenderStrategy};
//! use wayfarer_winit::{WinitConfig, WinitDriver};
//!
//! let game = Game::new(&GameConfig::default(), EnemyRoster::standard());
//! let controller = Controller::new(game, RenderStrategy::Graphical);
//! WinitDriver::new(WinitConfig::default()).run(controller).unwrap();
//! ```

pub mod assets;
pub mod canvas;
mod input;
pub mod renderer;
pub mod text;

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalSize, Size},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use wayfarer_core::{Controller, EventLoopDriver, Flow, Msg};

pub use assets::AssetError;
pub use renderer::SpriteRenderer;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for the winit driver.
#[derive(Debug, Clone)]
pub struct WinitConfig {
    /// Window title.
    pub title: String,
    /// Directory holding `font.ttf` and `images/`.
    pub asset_dir: PathBuf,
    /// Source tile size in pixels; tiles are drawn at twice this size.
    pub tile_size: u32,
    /// Height of the HUD strip below the map, in pixels.
    pub hud_height: u32,
}

impl Default for WinitConfig {
    fn default() -> Self {
        Self {
            title: "wayfarer".into(),
            asset_dir: PathBuf::from("assets"),
            tile_size: 16,
            hud_height: 140,
        }
    }
}

// ---------------------------------------------------------------------------
// WinitDriver
// ---------------------------------------------------------------------------

/// Winit-based graphical driver.
///
/// Implements [`EventLoopDriver`]: it owns the main-thread event loop, polls
/// continuously and redraws every pass.
pub struct WinitDriver {
    config: WinitConfig,
}

impl WinitDriver {
    pub fn new(config: WinitConfig) -> Self {
        Self { config }
    }
}

impl EventLoopDriver for WinitDriver {
    fn run(self, controller: Controller) -> Result<(), Box<dyn std::error::Error>> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        let mut app = WinitApp::new(self.config, controller);
        event_loop.run_app(&mut app)?;
        match app.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// WinitApp: ApplicationHandler
// ---------------------------------------------------------------------------

struct WinitApp {
    config: WinitConfig,
    controller: Controller,
    state: Option<WinitState>,
    error: Option<Box<dyn std::error::Error>>,
}

struct WinitState {
    window: Arc<Window>,
    surface: softbuffer::Surface<Arc<Window>, Arc<Window>>,
    renderer: SpriteRenderer,
    pixel_width: u32,
    pixel_height: u32,
}

fn non_zero(v: u32) -> NonZeroU32 {
    NonZeroU32::new(v).unwrap_or(NonZeroU32::MIN)
}

impl WinitApp {
    fn new(config: WinitConfig, controller: Controller) -> Self {
        Self {
            config,
            controller,
            state: None,
            error: None,
        }
    }

    /// Record a fatal error and stop the loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, e: Box<dyn std::error::Error>) {
        log::error!("{e}");
        if self.error.is_none() {
            self.error = Some(e);
        }
        event_loop.exit();
    }

    fn create_state(
        &self,
        event_loop: &ActiveEventLoop,
    ) -> Result<WinitState, Box<dyn std::error::Error>> {
        let map = &self.controller.game().map;
        let renderer = SpriteRenderer::new(map.width(), map.height(), &self.config);
        let (pixel_width, pixel_height) = renderer.size();

        let attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(Size::Physical(PhysicalSize::new(pixel_width, pixel_height)))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attrs)?);

        let context = softbuffer::Context::new(window.clone())?;
        let mut surface = softbuffer::Surface::new(&context, window.clone())?;
        surface.resize(non_zero(pixel_width), non_zero(pixel_height))?;

        Ok(WinitState {
            window,
            surface,
            renderer,
            pixel_width,
            pixel_height,
        })
    }

    /// One continuous pass: step the game, draw, present.
    fn render(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.controller.step();
        let Some(state) = self.state.as_mut() else {
            return Ok(());
        };
        state.renderer.draw(&self.controller.view());

        let (w, h) = (state.pixel_width as usize, state.pixel_height as usize);
        if w == 0 || h == 0 {
            return Ok(());
        }
        let mut buf = state.surface.buffer_mut()?;
        state.renderer.canvas().blit_to_buffer(&mut buf, w, h);
        buf.present()?;
        Ok(())
    }

    fn handle(&mut self, event_loop: &ActiveEventLoop, msg: Msg) {
        match self.controller.handle_msg(msg) {
            Ok(Flow::Quit) => event_loop.exit(),
            Ok(Flow::Continue) => {}
            Err(e) => self.fail(event_loop, e),
        }
    }
}

impl ApplicationHandler for WinitApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        match self.create_state(event_loop) {
            Ok(state) => self.state = Some(state),
            Err(e) => return self.fail(event_loop, e),
        }
        if let Err(e) = self.controller.start() {
            self.fail(event_loop, e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.handle(event_loop, Msg::Quit);
            }

            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if let Some(state) = self.state.as_mut() {
                    state.pixel_width = width;
                    state.pixel_height = height;
                    if let Err(e) = state.surface.resize(non_zero(width), non_zero(height)) {
                        self.fail(event_loop, e.into());
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    self.fail(event_loop, e);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(msg) = input::translate_keyboard(&event) {
                    self.handle(event_loop, msg);
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = self.state.as_ref() {
            state.window.request_redraw();
        }
    }
}
