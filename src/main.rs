//! Summit - headless character-controller demo
//!
//! Runs a scripted pilot through a small platforming level at a fixed
//! 60 Hz timestep: idle, run, jump across a gap, land, and reach the flag.
//! Animation transitions and level events are logged; jump and landing
//! sounds play when the audio backend and asset files are available.

mod settings;

use std::path::Path;

use anyhow::Result;
use glam::Vec3;
use summit_audio::AudioEngine;
use summit_core::GameTime;
use summit_game::{InputAction, InputHandler, Level, LevelEvent, OrbitCamera, PlayerController};
use summit_physics::PhysicsWorld;
use tracing::{debug, info, warn, Level as LogLevel};
use tracing_subscriber::FmtSubscriber;

use settings::GameSettings;

const JUMP_SFX: &str = "assets/sfx/jump.ogg";
const LAND_SFX: &str = "assets/sfx/land.ogg";

/// Scripted input: waits a moment, runs forward, jumps the gap once near
/// the ledge, and keeps running to the flag.
#[derive(Default)]
struct Pilot {
    jump_queued: bool,
}

impl Pilot {
    fn drive(&mut self, input: &mut InputHandler, player: &PlayerController, t: f64) {
        if t < 1.0 {
            // Settle the camera with a small downward drag while idling
            input.handle_mouse_motion((0.0, 1.5));
            return;
        }

        input.state.held.insert(InputAction::MoveForward);

        let z = player.position().z;
        if (-6.0..-3.0).contains(&z) && !self.jump_queued {
            input.state.just_pressed.insert(InputAction::Jump);
            self.jump_queued = true;
        }
    }

    fn reset(&mut self) {
        self.jump_queued = false;
    }
}

/// Two floating platforms separated by a gap, with the flag on the far one.
/// Everything below the kill plane respawns the player.
fn build_level(physics: &mut PhysicsWorld) -> Level {
    physics.create_static_box(Vec3::new(4.0, 0.5, 5.0), Vec3::new(0.0, -0.5, 0.0));
    physics.create_static_box(Vec3::new(4.0, 0.5, 7.0), Vec3::new(0.0, -0.5, -15.0));

    Level::new(
        Vec3::new(0.0, 0.2, 3.0),
        -10.0,
        Vec3::new(0.0, 0.0, -20.0),
        1.5,
    )
}

fn play_sfx(audio: &mut Option<AudioEngine>, path: &str) {
    if let Some(engine) = audio.as_mut() {
        if let Err(e) = engine.play_sfx(Path::new(path)) {
            debug!("SFX '{}' not played: {}", path, e);
        }
    }
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(LogLevel::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    info!("Starting Summit demo");

    let settings = GameSettings::load();
    // Persist the effective settings so first-run users get a file to edit
    if let Err(e) = settings.save() {
        warn!("Could not save settings: {}", e);
    }

    // Bring the backend up first, then apply the user's volumes
    let mut audio = match AudioEngine::with_default() {
        Ok(mut engine) => {
            engine.update_volumes(settings.audio.to_config());
            Some(engine)
        }
        Err(e) => {
            warn!("Audio unavailable, continuing silent: {}", e);
            None
        }
    };

    let mut physics = PhysicsWorld::new();
    let mut level = build_level(&mut physics);

    let mut player = PlayerController::new(settings.movement.clone());
    player.spawn(&mut physics, level.spawn_point);

    let mut camera = OrbitCamera::new();

    let mut input = InputHandler::new();
    input.mouse_sensitivity = settings.gameplay.mouse_sensitivity;
    input.invert_y = settings.gameplay.invert_y;
    input.set_cursor_captured(true);

    let mut time = GameTime::default();
    let frame_delta = 1.0 / 60.0;
    let mut pilot = Pilot::default();
    let mut last_animation = player.animation();

    info!("Spawned at {:?}, flag at {:?}", level.spawn_point, level.flag_position);

    // 30 seconds of simulated frames, or until the flag is reached
    'demo: for _ in 0..(60 * 30) {
        pilot.drive(&mut input, &player, time.total_time);

        if input.state.is_just_pressed(InputAction::ToggleCursor) {
            let captured = input.state.cursor_captured;
            input.set_cursor_captured(!captured);
        }

        time.update(frame_delta);

        for _ in 0..time.fixed_steps() {
            let dt = time.config.fixed_timestep;

            physics.update_queries();
            camera.update(&mut input.state, player.body.head_position(), Some(&physics), dt);
            let events = player.fixed_update(&mut physics, &input.state, &camera, dt);

            if events.animation != last_animation {
                info!(
                    "Animation -> {} (pos {:.1?}, dust {})",
                    events.animation.clip_name(),
                    player.position(),
                    events.dust_active
                );
                last_animation = events.animation;
            }
            if events.jumped {
                play_sfx(&mut audio, JUMP_SFX);
            }
            if events.landed {
                play_sfx(&mut audio, LAND_SFX);
            }

            match level.check(&mut player, &mut physics) {
                Some(LevelEvent::FlagReached) => {
                    info!("Flag reached after {:.2}s", time.total_time);
                    break 'demo;
                }
                Some(LevelEvent::KillPlaneTouched) => pilot.reset(),
                None => {}
            }
        }

        input.end_frame();
        if let Some(engine) = audio.as_mut() {
            engine.update();
        }
    }

    if level.is_completed() {
        info!("Demo complete");
    } else {
        warn!("Demo timed out before reaching the flag");
    }

    Ok(())
}
