//! GameView: maps a [`SessionSnapshot`] into a terminal framebuffer.
//!
//! Pure (no I/O), so layouts can be unit-tested.

use crate::core::{CellSnapshot, SessionPhase, SessionSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Position, WordColor};

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

/// Front-end state that is not part of the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HudView<'a> {
    pub cursor: Option<Position>,
    pub anchor: Option<Position>,
    pub status: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const BOARD_BG: Rgb = Rgb::new(28, 26, 36);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

const LETTER: CellStyle = CellStyle::new(Rgb::new(200, 200, 210), BOARD_BG);
const BORDER: CellStyle = CellStyle::new(Rgb::new(190, 160, 200), PANEL_BG);
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
const HINT: CellStyle = CellStyle::new(Rgb::new(150, 150, 160), PANEL_BG).dim();
const OVERLAY: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();

const SELECTED_BG: Rgb = Rgb::new(70, 90, 150);
const HIGHLIGHT_BG: Rgb = Rgb::new(120, 95, 30);
const CURSOR_BG: Rgb = Rgb::new(200, 200, 210);

/// Terminal renderer for a word search session.
pub struct GameView {
    /// Terminal columns per grid letter.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Letter plus a gap column keeps the grid roughly square.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

struct Layout {
    start_x: u16,
    start_y: u16,
    frame_w: u16,
    frame_h: u16,
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        hud: &HudView<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let size = snap.size as u16;
        let frame_w = size * self.cell_w + 3;
        let frame_h = size + 2;
        let layout = Layout {
            start_x: viewport.width.saturating_sub(frame_w + PANEL_W) / 2,
            start_y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
            frame_w,
            frame_h,
        };

        if snap.phase == SessionPhase::NoGrid {
            self.draw_border(fb, &layout);
            self.draw_overlay(fb, &layout, &["NO PUZZLE", "r: new grid  q: quit"]);
            return;
        }

        fb.fill_rect(
            layout.start_x + 1,
            layout.start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            LETTER,
        );
        self.draw_border(fb, &layout);
        self.draw_grid(fb, snap, hud, &layout);
        self.draw_side_panel(fb, snap, viewport, &layout);

        if let Some(status) = hud.status {
            let y = layout.start_y + frame_h;
            fb.put_str(layout.start_x, y, status, VALUE);
        }

        match snap.phase {
            SessionPhase::Paused => self.draw_overlay(fb, &layout, &["PAUSED", "p: resume"]),
            SessionPhase::GameOver => self.draw_game_over(fb, snap, &layout),
            _ => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, hud: &HudView<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    /// Screen coordinates of a grid cell for a viewport.
    pub fn cell_origin(&self, snap: &SessionSnapshot, viewport: Viewport, pos: Position) -> Option<(u16, u16)> {
        if !pos.in_bounds(snap.size) {
            return None;
        }
        let size = snap.size as u16;
        let frame_w = size * self.cell_w + 3;
        let start_x = viewport.width.saturating_sub(frame_w + PANEL_W) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(size + 2) / 2,
            AnchorY::Top => 0,
        };
        Some((
            start_x + 2 + pos.col as u16 * self.cell_w,
            start_y + 1 + pos.row as u16,
        ))
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: &Layout) {
        let (x, y, w, h) = (layout.start_x, layout.start_y, layout.frame_w, layout.frame_h);
        if w < 2 || h < 2 {
            return;
        }
        fb.put_char(x, y, '╭', BORDER);
        fb.put_char(x + w - 1, y, '╮', BORDER);
        fb.put_char(x, y + h - 1, '╰', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '╯', BORDER);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, hud: &HudView<'_>, layout: &Layout) {
        for row in 0..snap.size as i8 {
            for col in 0..snap.size as i8 {
                let pos = Position::new(row, col);
                let Some(cell) = snap.cell(pos) else {
                    continue;
                };
                let style = cell_style(cell, hud.cursor == Some(pos), hud.anchor == Some(pos));
                let x = layout.start_x + 2 + col as u16 * self.cell_w;
                let y = layout.start_y + 1 + row as u16;
                fb.put_char(x, y, cell.letter, style);
            }
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, viewport: Viewport, layout: &Layout) {
        let panel_x = layout.start_x + layout.frame_w + 2;
        if panel_x + 12 > viewport.width {
            return;
        }
        let mut y = layout.start_y;

        let x = fb.put_str(panel_x, y, snap.difficulty.as_str(), HINT);
        fb.put_str(x + 1, y, snap.theme.as_str(), HINT);
        y += 2;

        fb.put_str(panel_x, y, "SCORE", LABEL);
        fb.put_u32(panel_x + 7, y, snap.score, VALUE);
        y += 1;

        fb.put_str(panel_x, y, "TIME", LABEL);
        let x = fb.put_str(panel_x + 7, y, &format_clock(snap.time_remaining()), VALUE);
        if snap.freeze_ticks > 0 {
            let frozen = CellStyle::new(Rgb::new(140, 210, 250), PANEL_BG).bold();
            fb.put_str(x + 1, y, &format!("frozen {}", snap.freeze_ticks), frozen);
        }
        y += 1;

        fb.put_str(panel_x, y, "WORDS", LABEL);
        fb.put_str(
            panel_x + 7,
            y,
            &format!("{}/{}", snap.words_found(), snap.total_words()),
            VALUE,
        );
        y += 2;

        let list_end = viewport.height.saturating_sub(3);
        for word in &snap.words {
            if y >= list_end {
                break;
            }
            let (mark, style) = match (word.found, word.is_bonus) {
                (_, true) => ('+', CellStyle::new(Rgb::from(WordColor::Gold), PANEL_BG).bold()),
                (true, false) => ('✓', CellStyle::new(Rgb::from(word.color), PANEL_BG)),
                (false, false) => (' ', VALUE),
            };
            fb.put_char(panel_x, y, mark, style);
            fb.put_str(panel_x + 2, y, &word.text, style);
            y += 1;
        }

        if snap.regular_complete && snap.phase == SessionPhase::Active {
            y += 1;
            let bonus = CellStyle::new(Rgb::from(WordColor::Gold), PANEL_BG);
            fb.put_str(panel_x, y, &format!("all found! {} bonus left", snap.bonus_remaining), bonus);
        }

        let help_y = viewport.height.saturating_sub(2);
        fb.put_str(panel_x, help_y, "1 letter 2 word 3 freeze 4 firsts", HINT);
        fb.put_str(panel_x, help_y + 1, "spc select esc cancel e end p r q", HINT);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, layout: &Layout) {
        let Some(result) = &snap.result else {
            self.draw_overlay(fb, layout, &["GAME OVER"]);
            return;
        };
        let title = if result.is_perfect { "PERFECT!" } else { "GAME OVER" };
        let score = format!("score {}", result.score);
        let words = format!("words {}/{}", result.words_found, result.total_words);
        let rewards = format!("+{} coins +{} xp", result.coins, result.xp);
        self.draw_overlay(
            fb,
            layout,
            &[title, score.as_str(), words.as_str(), rewards.as_str(), "r: play again"],
        );
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: &Layout, lines: &[&str]) {
        let top = (layout.start_y + layout.frame_h / 2).saturating_sub(lines.len() as u16 / 2);
        for (i, line) in lines.iter().enumerate() {
            let w = line.chars().count() as u16;
            let x = layout.start_x + layout.frame_w.saturating_sub(w) / 2;
            let style = if i == 0 { OVERLAY } else { VALUE };
            fb.put_str(x, top + i as u16, line, style);
        }
    }
}

/// Width reserved for the side panel when centering.
const PANEL_W: u16 = 36;

fn cell_style(cell: &CellSnapshot, is_cursor: bool, is_anchor: bool) -> CellStyle {
    let mut style = match cell.found_color {
        Some(color) => CellStyle::new(Rgb::from(color), BOARD_BG).bold(),
        None => LETTER,
    };
    if cell.highlighted {
        style.bg = HIGHLIGHT_BG;
        style.bold = true;
    }
    if cell.selected || is_anchor {
        style.bg = SELECTED_BG;
    }
    if is_cursor {
        style.fg = BOARD_BG;
        style.bg = CURSOR_BG;
    }
    style
}

fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
