pub mod draw;
pub mod gui;
pub mod input;

use crate::app::{self, simulation_loop};
use crate::clock::{FrameCounter, FramePacer, WallClock};
use crate::commands::{Command, Flow};
use crate::config::MAX_TICKS_PER_FRAME;
use crate::simulation::Simulation;
use quarkstrom::winit_input_helper::WinitInputHelper;
use std::time::Instant;
use ultraviolet::Vec2;

/// Owns the simulation and drives it from the window's frame callbacks.
pub struct Renderer {
    pos: Vec2,
    scale: f32,
    simulation: Simulation<WallClock>,
    pending: Vec<Command>,
    pacer: FramePacer,
    frames: FrameCounter,
    last_frame: Instant,
    window_width: u16,
    window_height: u16,
}

/// World space is screen-like (origin top-left, y down). The view is y-up, centered on the
/// world with the world height filling the window.
pub fn world_to_view(point: Vec2, world_height: f32) -> Vec2 {
    Vec2::new(point.x, world_height - point.y)
}

pub fn view_to_world(point: Vec2, world_height: f32) -> Vec2 {
    Vec2::new(point.x, world_height - point.y)
}

/// Pixel position in a `width` x `height` window to world coordinates.
pub fn screen_to_world(
    mouse: Vec2,
    width: u16,
    height: u16,
    view_pos: Vec2,
    view_scale: f32,
    world_height: f32,
) -> Vec2 {
    let mut view = mouse * (2.0 / height as f32);
    view.y -= 1.0;
    view.y *= -1.0;
    view.x -= width as f32 / height as f32;
    view_to_world(view * view_scale + view_pos, world_height)
}

impl Renderer {
    fn with_simulation(simulation: Simulation<WallClock>) -> Self {
        let (width, height) = (simulation.config.width, simulation.config.height);
        Self {
            pos: Vec2::new(width / 2.0, height / 2.0),
            scale: height / 2.0,
            simulation,
            pending: Vec::new(),
            pacer: FramePacer::new(),
            frames: FrameCounter::default(),
            last_frame: Instant::now(),
            window_width: 0,
            window_height: 0,
        }
    }

    fn world_height(&self) -> f32 {
        self.simulation.config.height
    }
}

impl quarkstrom::Renderer for Renderer {
    fn new() -> Self {
        match app::prepare(WallClock::new()) {
            Ok(simulation) => Self::with_simulation(simulation),
            Err(err) => {
                tracing::error!("Failed to start simulation: {err}");
                std::process::exit(1);
            }
        }
    }

    fn input(&mut self, input: &WinitInputHelper, width: u16, height: u16) {
        self.window_width = width;
        self.window_height = height;
        if width == 0 || height == 0 {
            // Window is minimized; ignore input until restored
            return;
        }
        self.handle_input(input, width, height);
    }

    fn render(&mut self, ctx: &mut quarkstrom::RenderContext) {
        let now = Instant::now();
        self.frames.record(now - self.last_frame);
        self.last_frame = now;

        let ticks = self
            .pacer
            .ticks_due(self.simulation.target_fps, MAX_TICKS_PER_FRAME);
        let commands = std::mem::take(&mut self.pending);
        if simulation_loop::run_frame(&mut self.simulation, commands, ticks) == Flow::Exit {
            std::process::exit(0);
        }

        if self.window_width == 0 || self.window_height == 0 {
            // Surface has zero area while minimized, skip drawing
            return;
        }
        self.draw(ctx);
    }

    fn gui(&mut self, ctx: &quarkstrom::egui::Context) {
        self.show_gui(ctx);
    }
}
