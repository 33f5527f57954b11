//! POCKET2D demo
//!
//! Opens a window, lays out the configured elements for the current window
//! width and input device, and runs a dispersed system over a crowd of
//! entities. Each square flashes when its entity gets processed.
//!
//! Usage: pocket2d [config.ron]
//!
//! Keys: Up/Down change the interval, Space spawns 50 entities,
//! Backspace despawns 10.

use std::path::PathBuf;

use anyhow::{Context, Result};
use macroquad::prelude::*;

use pocket2d::config::{load_config, RuntimeConfig};
use pocket2d::game::{DispersedScheduler, DispersedSystem, Entity, EntityAllocator};
use pocket2d::input::{InputEvent, InputTracker};
use pocket2d::ui::layout::{flow_row, LayoutNode, LayoutState};
use pocket2d::ui::Rect;
use pocket2d::VERSION;

const PULSE_DECAY: f32 = 2.5;
const CELL: f32 = 10.0;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("POCKET2D v{}", VERSION),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

/// Flashes entities as they are processed
struct PulseSystem {
    /// Indexed by entity slot
    pulses: Vec<f32>,
    last_window: f32,
}

impl DispersedSystem<Entity> for PulseSystem {
    fn update(&mut self, entity: Entity, window: f32) {
        let idx = entity.index() as usize;
        if idx >= self.pulses.len() {
            self.pulses.resize(idx + 1, 0.0);
        }
        self.pulses[idx] = 1.0;
        self.last_window = window;
    }
}

/// Gamepad activity, native only
#[cfg(not(target_arch = "wasm32"))]
struct Gamepads {
    gilrs: Option<gilrs::Gilrs>,
}

#[cfg(not(target_arch = "wasm32"))]
impl Gamepads {
    fn new() -> Self {
        let gilrs = match gilrs::Gilrs::new() {
            Ok(gilrs) => Some(gilrs),
            Err(e) => {
                log::warn!("Gamepad support unavailable: {}", e);
                None
            }
        };
        Self { gilrs }
    }

    fn poll(&mut self, events: &mut Vec<InputEvent>) {
        let Some(gilrs) = self.gilrs.as_mut() else { return };
        while let Some(gilrs::Event { id, event, .. }) = gilrs.next_event() {
            let active = match event {
                gilrs::EventType::ButtonPressed(..) => true,
                gilrs::EventType::AxisChanged(_, value, _) => value.abs() > 0.5,
                _ => false,
            };
            if active {
                let name = gilrs.gamepad(id).name().to_string();
                events.push(InputEvent::Controller { name });
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
struct Gamepads;

#[cfg(target_arch = "wasm32")]
impl Gamepads {
    fn new() -> Self {
        Gamepads
    }

    fn poll(&mut self, _events: &mut Vec<InputEvent>) {}
}

/// Keyboard, mouse and touch activity this frame
fn poll_pointer(events: &mut Vec<InputEvent>) {
    // macroquad mirrors touches as mouse input, so check touch first
    if !touches().is_empty() {
        events.push(InputEvent::Touch);
        return;
    }
    let mouse_moved = mouse_delta_position() != Vec2::ZERO;
    let clicked = is_mouse_button_pressed(MouseButton::Left)
        || is_mouse_button_pressed(MouseButton::Right);
    if mouse_moved || clicked || get_last_key_pressed().is_some() {
        events.push(InputEvent::KeyboardMouse);
    }
}

fn load(path: Option<PathBuf>) -> Result<(RuntimeConfig, Vec<LayoutNode>)> {
    let config = match path {
        Some(path) => {
            let config = load_config(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))?;
            log::info!("Loaded config from {}", path.display());
            config
        }
        None => RuntimeConfig::default(),
    };
    let nodes = config.build_nodes().context("Invalid element rules")?;
    Ok((config, nodes))
}

async fn run() -> Result<()> {
    let (config, nodes) = load(std::env::args().nth(1).map(PathBuf::from))?;
    let mut scheduler: DispersedScheduler<Entity> = config
        .build_scheduler()
        .context("Invalid scheduler settings")?;

    let mut entities = EntityAllocator::new();
    for _ in 0..config.entities {
        entities.allocate();
    }
    log::info!(
        "{} entities, {} layout elements, interval {}s",
        entities.alive_count(),
        nodes.len(),
        scheduler.interval()
    );

    let mut system = PulseSystem { pulses: Vec::new(), last_window: 0.0 };
    let mut tracker = InputTracker::new();
    let mut gamepads = Gamepads::new();
    let mut events = Vec::new();

    loop {
        let delta = get_frame_time();

        // Input modality
        events.clear();
        poll_pointer(&mut events);
        gamepads.poll(&mut events);
        for event in &events {
            tracker.observe(event);
        }

        // Controls
        if is_key_pressed(KeyCode::Up) || is_key_pressed(KeyCode::Down) {
            let step = if is_key_pressed(KeyCode::Up) { 0.5 } else { -0.5 };
            match scheduler.set_interval(scheduler.interval() + step) {
                Ok(()) => log::info!("Interval set to {}s", scheduler.interval()),
                Err(e) => log::warn!("{}", e),
            }
        }
        if is_key_pressed(KeyCode::Space) {
            for _ in 0..50 {
                entities.allocate();
            }
        }
        if is_key_pressed(KeyCode::Backspace) {
            let doomed: Vec<Entity> = entities.alive().iter().rev().take(10).copied().collect();
            for entity in doomed {
                entities.free(entity);
            }
        }

        // Dispersed processing
        scheduler.tick(delta, entities.alive(), &mut system);
        for pulse in &mut system.pulses {
            *pulse = (*pulse - delta * PULSE_DECAY).max(0.0);
        }

        // Layout
        let (w, h) = (screen_width(), screen_height());
        let state = LayoutState::new(config.layout.breakpoints.classify(w), w)
            .with_input(tracker.last_source(), tracker.last_controller())
            .with_columns(config.layout.total_columns);
        let area = Rect::screen(w, h).pad(16.0);
        let rects = flow_row(&nodes, &state, area);

        clear_background(Color::from_rgba(24, 24, 32, 255));

        let mut content_area = None;
        for (node, rect) in nodes.iter().zip(&rects) {
            let Some(rect) = rect else {
                continue;
            };
            let inner = rect.pad(4.0);
            draw_rectangle_lines(inner.x, inner.y, inner.w, inner.h, 2.0, SKYBLUE);
            let rule = node.horizontal.size_rule(state.screen_size);
            let label = format!("{} ({})", node.id, rule);
            draw_text(&label, inner.x + 6.0, inner.y + 18.0, 18.0, WHITE);
            if node.id == "content" {
                content_area = Some(inner.pad(8.0));
            }
        }

        // Entity grid
        if let Some(grid) = content_area {
            let per_row = ((grid.w / CELL) as usize).max(1);
            for (i, entity) in entities.alive().iter().enumerate() {
                let x = grid.x + (i % per_row) as f32 * CELL;
                let y = grid.y + 24.0 + (i / per_row) as f32 * CELL;
                if y + CELL > grid.bottom() {
                    break;
                }
                let pulse = system.pulses.get(entity.index() as usize).copied().unwrap_or(0.0);
                let color = Color::new(0.2 + 0.8 * pulse, 0.3, 0.4, 1.0);
                draw_rectangle(x, y, CELL - 2.0, CELL - 2.0, color);
            }
        }

        let hud = format!(
            "{} | {} ({}) | {} entities | interval {:.1}s | {} queued, {}/tick | window {:.2}s",
            state.screen_size,
            tracker.last_source(),
            tracker.last_controller().display_name(),
            entities.alive_count(),
            scheduler.interval(),
            scheduler.pending(),
            scheduler.quota(),
            system.last_window,
        );
        draw_text(&hud, 16.0, h - 8.0, 18.0, GRAY);

        next_frame().await;
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    if let Err(e) = run().await {
        log::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
    }
}
