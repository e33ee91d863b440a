//! Terminal runner (default binary).
//!
//! Owns everything the engine leaves to its caller: the gravity clock, the
//! clear-animation timer, the hard-drop beam and the event queue. Input comes
//! from crossterm and frames go through the framebuffer renderer.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use timelord_tetris::core::{Game, GameEvent, GameSnapshot, UniformSource};
use timelord_tetris::input::{
    handle_key_event, handle_mouse_event, should_quit, Command, SoftDropTracker,
};
use timelord_tetris::term::{Beam, Effects, FrameBuffer, GameView, TerminalRenderer, Viewport};
use timelord_tetris::types::Intent;
use timelord_tetris::Config;

const FRAME_MS: u64 = 16;

fn main() -> Result<()> {
    let config = Config::parse();
    let seed = config.seed_or_random();
    println!(
        "[Game] seed={} well={}x{} clear_ms={}",
        seed, config.width, config.height, config.clear_ms
    );

    install_panic_hook();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    let summary = result?;

    println!(
        "[Game] final score={} rows={} level={} game_over={}",
        summary.score, summary.total_rows, summary.level, summary.game_over
    );
    if config.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}

/// Leave raw mode and the alternate screen before a panic message is printed.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            io::stderr(),
            crossterm::event::DisableMouseCapture,
            crossterm::cursor::Show,
            crossterm::terminal::LeaveAlternateScreen
        );
        default_hook(info);
    }));
}

/// Everything the loop tracks besides the game itself
struct Session {
    game: Game<UniformSource>,
    effects: Effects,
    soft_drop: SoftDropTracker,
    gravity_ms: u32,
    clear_ms: u32,
    bell: bool,
}

impl Session {
    fn new(config: &Config, seed: u32) -> Self {
        Self {
            game: Game::new(config.width, config.height, UniformSource::new(seed)),
            effects: Effects {
                clear_total_ms: Some(config.clear_ms),
                ..Effects::default()
            },
            soft_drop: SoftDropTracker::new(),
            gravity_ms: 0,
            clear_ms: config.clear_ms,
            bell: !config.no_bell,
        }
    }

    fn start(&mut self) {
        if self.game.is_game_over() {
            self.reset();
        }
        self.effects.started = true;
    }

    fn reset(&mut self) {
        self.game.reset();
        self.soft_drop.reset();
        self.gravity_ms = 0;
        self.effects.clear_elapsed_ms = 0;
        self.effects.beam = None;
        self.effects.started = true;
    }

    fn submit(&mut self, intent: Intent) {
        if !self.effects.started {
            return;
        }
        if intent == Intent::SoftDropStart {
            self.soft_drop.press();
        }
        self.game.submit_intent(intent);
    }

    /// Advance the caller-owned clocks by `dt` milliseconds.
    fn advance(&mut self, dt: u32) {
        if !self.effects.started {
            return;
        }
        if let Some(release) = self.soft_drop.update(dt) {
            self.game.submit_intent(release);
        }
        if let Some(beam) = &mut self.effects.beam {
            if !beam.advance(dt) {
                self.effects.beam = None;
            }
        }

        if self.game.is_clearing() {
            self.effects.clear_elapsed_ms = self.effects.clear_elapsed_ms.saturating_add(dt);
            if self.effects.clear_elapsed_ms >= self.clear_ms {
                self.game.animation_elapsed();
                self.effects.clear_elapsed_ms = 0;
                self.gravity_ms = 0;
            }
        } else if !self.game.is_game_over() {
            self.gravity_ms = self.gravity_ms.saturating_add(dt);
            if self.gravity_ms >= self.game.drop_interval_ms() {
                self.gravity_ms = 0;
                self.game.tick();
            }
        }
    }

    /// Drain engine events into effects; returns true if the bell should ring.
    fn drain_events(&mut self) -> bool {
        let mut ring = false;
        for ev in self.game.take_events() {
            match ev {
                GameEvent::ClearStarted { .. } => {
                    self.effects.clear_elapsed_ms = 0;
                    ring |= self.bell;
                }
                GameEvent::HardDropped { .. } => {
                    self.effects.beam = Beam::from_event(&ev);
                }
                GameEvent::Locked { .. } => {
                    self.gravity_ms = 0;
                }
                GameEvent::ClearFinished { .. } | GameEvent::GameOver { .. } => {}
            }
        }
        ring
    }
}

fn run(term: &mut TerminalRenderer, config: &Config, seed: u32) -> Result<GameSnapshot> {
    let mut session = Session::new(config, seed);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let frame = Duration::from_millis(FRAME_MS);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.game.snapshot_into(&mut snap);
        view.render_into(&snap, &session.effects, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if should_quit(key) {
                            break;
                        }
                        match handle_key_event(key) {
                            Some(Command::Intent(intent)) => session.submit(intent),
                            Some(Command::Start) => session.start(),
                            Some(Command::Reset) => session.reset(),
                            None => {}
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(release) = session.soft_drop.handle_key_release(key.code) {
                            session.submit(release);
                        }
                    }
                },
                Event::Mouse(mouse) => {
                    if let Some(intent) = handle_mouse_event(mouse) {
                        session.submit(intent);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Clocks.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            session.advance(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }

        if session.drain_events() {
            term.bell()?;
        }
    }

    Ok(session.game.snapshot())
}
