//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::outcome::{score_display, time_display};
use crate::core::{CardSnapshot, GameSnapshot};
use crate::fb::FrameBuffer;
use crate::theme;
use crate::types::{CardState, OutcomeKind, BOARD_COLS};

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

/// Where the board frame lands for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
    pub cols: u16,
    pub rows: u16,
    card_w: u16,
    card_h: u16,
}

/// Empty columns between cards; the cursor markers live here.
const GAP_X: u16 = 2;
const GAP_Y: u16 = 1;
const PAD_X: u16 = 2;
const PAD_Y: u16 = 1;
const PANEL_MIN_W: u16 = 18;

impl BoardLayout {
    /// Top-left corner of the card at `position`.
    pub fn card_origin(&self, position: usize) -> (u16, u16) {
        let col = (position as u16) % self.cols;
        let row = (position as u16) / self.cols;
        (
            self.x + 1 + PAD_X + col * (self.card_w + GAP_X),
            self.y + 1 + PAD_Y + row * (self.card_h + GAP_Y),
        )
    }
}

/// Terminal renderer for the memory board.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    card_w: u16,
    card_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 6x3 keeps cards roughly square on typical terminal glyphs.
        Self { card_w: 6, card_h: 3 }
    }
}

impl GameView {
    pub fn new(card_w: u16, card_h: u16) -> Self {
        Self {
            card_w: card_w.max(3),
            card_h: card_h.max(1),
        }
    }

    pub fn layout(&self, viewport: Viewport, card_count: usize) -> BoardLayout {
        let cols = BOARD_COLS as u16;
        let rows = (card_count as u16).div_ceil(cols).max(1);
        let inner_w = cols * self.card_w + (cols - 1) * GAP_X;
        let inner_h = rows * self.card_h + (rows - 1) * GAP_Y;
        let w = inner_w + 2 * PAD_X + 2;
        let h = inner_h + 2 * PAD_Y + 2;

        let total_w = w + 2 + PANEL_MIN_W;
        let x = if viewport.width >= total_w {
            (viewport.width - total_w) / 2
        } else {
            viewport.width.saturating_sub(w) / 2
        };
        let y = viewport.height.saturating_sub(h) / 2;

        BoardLayout {
            x,
            y,
            w,
            h,
            cols,
            rows,
            card_w: self.card_w,
            card_h: self.card_h,
        }
    }

    /// Render into an existing framebuffer. `cursor` is the highlighted card.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        cursor: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(theme::TEXT.into_cell(' '));

        let layout = self.layout(viewport, snap.cards.len());
        fb.fill_rect(
            layout.x + 1,
            layout.y + 1,
            layout.w - 2,
            layout.h - 2,
            ' ',
            theme::TABLE,
        );
        fb.draw_box(layout.x, layout.y, layout.w, layout.h, theme::BORDER);

        for (i, card) in snap.cards.iter().enumerate() {
            self.draw_card(fb, &layout, i, card);
        }

        if let Some(pos) = cursor.filter(|&p| p < snap.cards.len() && snap.playable()) {
            self.draw_cursor(fb, &layout, pos);
        }

        self.draw_side_panel(fb, snap, viewport, &layout);

        if let Some(kind) = snap.outcome {
            let text = match kind {
                OutcomeKind::Victory => " VITÓRIA! ",
                OutcomeKind::Timeout => " TEMPO ESGOTADO ",
            };
            let mid_y = layout.y + layout.h / 2;
            fb.put_str_centered(layout.x, layout.w, mid_y, text, theme::TITLE);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, cursor: Option<usize>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_card(&self, fb: &mut FrameBuffer, layout: &BoardLayout, pos: usize, card: &CardSnapshot) {
        let (x, y) = layout.card_origin(pos);
        let (fill, style) = match card.state {
            CardState::Hidden => ('░', theme::CARD_BACK),
            CardState::Revealed => (' ', theme::CARD_FACE),
            CardState::Matched => (' ', theme::CARD_MATCHED),
        };
        fb.fill_rect(x, y, self.card_w, self.card_h, fill, style);

        let mid = y + self.card_h / 2;
        match card.face.as_deref() {
            Some(face) if card.state.is_face_up() => {
                fb.put_str_centered(x, self.card_w, mid, face, style);
            }
            _ => fb.put_str_centered(x, self.card_w, mid, "?", style),
        }
    }

    fn draw_cursor(&self, fb: &mut FrameBuffer, layout: &BoardLayout, pos: usize) {
        let (x, y) = layout.card_origin(pos);
        let mid = y + self.card_h / 2;
        fb.put_char(x.saturating_sub(1), mid, '▶', theme::CURSOR);
        fb.put_char(x + self.card_w, mid, '◀', theme::CURSOR);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: &BoardLayout,
    ) {
        let panel_x = layout.x.saturating_add(layout.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            // No room beside the board: squeeze the essentials under it.
            let y = layout.y.saturating_add(layout.h);
            let line = format!("{}  {}", score_display(snap.score), time_display(snap.remaining_secs));
            fb.put_str(layout.x, y, &line, theme::LABEL);
            return;
        }

        let mut y = layout.y;
        fb.put_str(panel_x, y, "Jogador", theme::HINT);
        y += 1;
        fb.put_str(panel_x, y, &snap.player, theme::LABEL);
        y += 2;

        fb.put_str(panel_x, y, &score_display(snap.score), theme::LABEL);
        y += 1;
        let time_style = if snap.remaining_secs <= theme::URGENT_SECS {
            theme::ERROR
        } else {
            theme::LABEL
        };
        fb.put_str(panel_x, y, &time_display(snap.remaining_secs), time_style);
        y += 1;
        let x = fb.put_str(panel_x, y, "Pares: ", theme::TEXT);
        let x = fb.put_u32(x, y, snap.matched_pairs as u32, theme::TEXT);
        let x = fb.put_str(x, y, "/", theme::TEXT);
        fb.put_u32(x, y, snap.pair_count as u32, theme::TEXT);
        y += 2;

        for help in HELP {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, help, theme::HINT);
            y += 1;
        }
    }
}

const HELP: [&str; 5] = [
    "Setas: mover",
    "Espaço: virar",
    "r: reiniciar",
    "m: menu",
    "q: sair",
];
