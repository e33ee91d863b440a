//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). Time-based effects (the clear flash and the
//! hard-drop beam) are passed in as [`Effects`] owned by the game loop.

use crate::core::{GameEvent, GameSnapshot, Shape};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{Cell, PieceKind, CLEAR_ANIMATION_MS, TELEPORT_ANIMATION_MS};

const WELL_BG: Rgb = Rgb::new(20, 20, 32);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Hard-drop teleport trail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Beam {
    pub x: i32,
    pub from_y: i32,
    pub to_y: i32,
    pub shape: Shape,
    pub elapsed_ms: u32,
}

impl Beam {
    pub fn from_event(event: &GameEvent) -> Option<Self> {
        match *event {
            GameEvent::HardDropped {
                x,
                from_y,
                to_y,
                shape,
            } => Some(Self {
                x,
                from_y,
                to_y,
                shape,
                elapsed_ms: 0,
            }),
            _ => None,
        }
    }

    /// Advance the beam's clock; returns false once it has faded out
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        self.elapsed_ms < TELEPORT_ANIMATION_MS
    }
}

/// Presentation state that is not part of the game itself
#[derive(Debug, Clone, Default)]
pub struct Effects {
    /// False until the player starts the first game
    pub started: bool,
    /// Time since the pending clear began
    pub clear_elapsed_ms: u32,
    /// Length of the clear animation (defaults to [`CLEAR_ANIMATION_MS`])
    pub clear_total_ms: Option<u32>,
    pub beam: Option<Beam>,
}

impl Effects {
    fn clear_progress(&self) -> f32 {
        let total = self.clear_total_ms.unwrap_or(CLEAR_ANIMATION_MS).max(1);
        self.clear_elapsed_ms as f32 / total as f32
    }
}

/// Renders the well, the side panel and overlays.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

/// Top-left corner of the bordered well and its outer size
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        effects: &Effects,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let w = snap.width.saturating_mul(self.cell_w).saturating_add(2);
        let h = snap.height.saturating_mul(self.cell_h).saturating_add(2);
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        self.draw_border(fb, frame, Style::new(Rgb::new(200, 200, 200), Rgb::BLACK));

        for y in 0..snap.height {
            let marked = snap.clear_rows.contains(&(y as usize));
            for x in 0..snap.width {
                let cell = snap.cell(x as i32, y as i32).unwrap_or(Cell::EMPTY);
                match cell.kind() {
                    Some(kind) if marked => {
                        self.draw_flash_cell(fb, frame, snap, effects, x, y, kind)
                    }
                    Some(kind) => self.draw_piece_cell(fb, frame, x, y, kind, cell.is_transient()),
                    None => self.draw_empty_cell(fb, frame, x, y),
                }
            }
        }

        if effects.started && !snap.game_over {
            self.draw_ghost(fb, frame, snap);
        }
        if let Some(beam) = &effects.beam {
            self.draw_beam(fb, frame, snap, beam);
        }

        self.draw_side_panel(fb, frame, snap, viewport);

        if !effects.started {
            self.draw_overlay(fb, frame, "INITIATE SEQUENCE", Some("press Enter"));
        } else if snap.game_over {
            let mut rows = String::from("ROWS ");
            rows.push_str(&snap.total_rows.to_string());
            self.draw_overlay(fb, frame, "PARADOX", Some(&rows));
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        effects: &Effects,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, effects, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame, style: Style) {
        if f.w < 2 || f.h < 2 {
            return;
        }
        let (right, bottom) = (f.x + f.w - 1, f.y + f.h - 1);
        fb.put_char(f.x, f.y, '┌', style);
        fb.put_char(right, f.y, '┐', style);
        fb.put_char(f.x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
        for x in f.x + 1..right {
            fb.put_char(x, f.y, '─', style);
            fb.put_char(x, bottom, '─', style);
        }
        for y in f.y + 1..bottom {
            fb.put_char(f.x, y, '│', style);
            fb.put_char(right, y, '│', style);
        }
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, f: Frame, x: u16, y: u16, ch: char, style: Style) {
        let px = f.x + 1 + x * self.cell_w;
        let py = f.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, f: Frame, x: u16, y: u16) {
        let style = Style::new(Rgb::new(70, 70, 90), WELL_BG).dim();
        self.fill_cell(fb, f, x, y, '·', style);
    }

    fn draw_piece_cell(
        &self,
        fb: &mut FrameBuffer,
        f: Frame,
        x: u16,
        y: u16,
        kind: PieceKind,
        falling: bool,
    ) {
        let mut style = Style::new(kind.color().into(), WELL_BG);
        style.bold = falling;
        self.fill_cell(fb, f, x, y, '█', style);
    }

    /// A white band sweeps left to right across marked rows.
    #[allow(clippy::too_many_arguments)]
    fn draw_flash_cell(
        &self,
        fb: &mut FrameBuffer,
        f: Frame,
        snap: &GameSnapshot,
        effects: &Effects,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let swept = (effects.clear_progress() * snap.width as f32).ceil() as u16;
        let base: Rgb = kind.color().into();
        let fg = if x < swept {
            Rgb::WHITE
        } else {
            base.mix(Rgb::WHITE, 0.35)
        };
        self.fill_cell(fb, f, x, y, '█', Style::new(fg, WELL_BG).bold());
    }

    fn draw_ghost(&self, fb: &mut FrameBuffer, f: Frame, snap: &GameSnapshot) {
        let Some(active) = &snap.active else {
            return;
        };
        if active.landing_y == active.position.y {
            return;
        }
        let style = Style::new(active.kind.color().into(), WELL_BG).dim();
        for (x, y) in active.cells_at(active.landing_y) {
            if snap.cell(x, y).is_some_and(|c| c.is_empty()) {
                self.fill_cell(fb, f, x as u16, y as u16, '░', style);
            }
        }
    }

    /// Vertical trail above each column of the dropped piece, fading out.
    fn draw_beam(&self, fb: &mut FrameBuffer, f: Frame, snap: &GameSnapshot, beam: &Beam) {
        let fade = beam.elapsed_ms as f32 / TELEPORT_ANIMATION_MS as f32;
        if fade >= 1.0 {
            return;
        }
        let color = Rgb::from(beam.shape.kind().color()).mix(WELL_BG, fade);
        let style = Style::new(color, WELL_BG);

        for (sx, sy) in beam.shape.cells() {
            let x = beam.x + sx;
            // Only the top cell of each column starts a trail.
            if beam.shape.cells().any(|(ox, oy)| ox == sx && oy < sy) {
                continue;
            }
            for y in beam.from_y + sy..beam.to_y + sy {
                if snap.cell(x, y).is_some_and(|c| c.is_empty()) {
                    self.fill_cell(fb, f, x as u16, y as u16, '│', style);
                }
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        f: Frame,
        snap: &GameSnapshot,
        viewport: Viewport,
    ) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if panel_x.saturating_add(8) > viewport.width {
            return;
        }

        let label = Style::default().bold();
        let value = Style::new(Rgb::new(200, 200, 200), Rgb::BLACK);

        let mut y = f.y.saturating_add(1);
        for (name, n) in [
            ("SCORE", snap.score),
            ("ROWS", snap.total_rows as u64),
            ("LEVEL", snap.level as u64),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u64(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, f: Frame, title: &str, detail: Option<&str>) {
        let mid_y = f.y.saturating_add(f.h / 2);
        let style = Style::new(Rgb::WHITE, Rgb::BLACK).bold();
        self.put_centered(fb, f, mid_y, title, style);
        if let Some(detail) = detail {
            self.put_centered(fb, f, mid_y.saturating_add(1), detail, Style::default());
        }
    }

    fn put_centered(&self, fb: &mut FrameBuffer, f: Frame, y: u16, text: &str, style: Style) {
        let text_w = text.chars().count() as u16;
        let x = f.x.saturating_add(f.w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    }
}
