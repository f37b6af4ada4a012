//! End-of-game screen.

use crate::core::ResultView;
use crate::fb::FrameBuffer;
use crate::game_view::Viewport;
use crate::theme;

const BOX_W: u16 = 56;

#[derive(Debug, Clone, Copy, Default)]
pub struct ResultScreen;

impl ResultScreen {
    /// `status` is a one-line notice, e.g. where the profile was exported.
    pub fn render_into(
        &self,
        result: &ResultView,
        status: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(theme::TEXT.into_cell(' '));

        let top = result.top();
        let ranking_rows = if top.is_empty() { 0 } else { top.len() as u16 + 2 };
        let h = 8 + ranking_rows;
        let w = BOX_W.min(viewport.width);
        let x = viewport.width.saturating_sub(w) / 2;
        let y0 = viewport.height.saturating_sub(h) / 2;

        fb.draw_box(x, y0, w, h, theme::BORDER);
        fb.put_str_centered(x, w, y0 + 1, "Fim de jogo", theme::TITLE);
        fb.put_str_centered(x, w, y0 + 3, result.message(), theme::LABEL);

        let mut y = y0 + 5;
        if !top.is_empty() {
            fb.put_str_centered(x, w, y, "Ranking", theme::LABEL);
            y += 1;
            for (i, entry) in top.iter().enumerate() {
                let line = format!(
                    "{}. {:<16} {:>4} pts {:>4}s",
                    i + 1,
                    entry.name.chars().take(16).collect::<String>(),
                    entry.score,
                    entry.elapsed
                );
                fb.put_str_centered(x, w, y, &line, theme::TEXT);
                y += 1;
            }
            y += 1;
        }

        if let Some(status) = status {
            fb.put_str_centered(x, w, y, status, theme::OK);
        }
        fb.put_str_centered(
            x,
            w,
            y0 + h - 2,
            "Enter: menu  r: jogar de novo  s: salvar  q: sair",
            theme::HINT,
        );
    }

    pub fn render(&self, result: &ResultView, status: Option<&str>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(result, status, viewport, &mut fb);
        fb
    }
}
