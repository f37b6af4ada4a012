//! Login screen.

use crate::fb::{text_width, FrameBuffer};
use crate::game_view::Viewport;
use crate::input::{FormField, LoginForm};
use crate::theme;
use crate::types::{PAIR_COUNT, TIME_BUDGET_SECS};

pub const TITLE: &str = "Jogo da Memória";

const BOX_W: u16 = 50;
const BOX_H: u16 = 11;
const LABEL_W: u16 = 10;

/// Login box. Carries the rule values shown in the hint line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginView {
    pairs: usize,
    budget_secs: u32,
}

impl Default for LoginView {
    fn default() -> Self {
        Self::new(PAIR_COUNT, TIME_BUDGET_SECS)
    }
}

impl LoginView {
    pub fn new(pairs: usize, budget_secs: u32) -> Self {
        Self { pairs, budget_secs }
    }

    pub fn hint(&self) -> String {
        format!(
            "Encontre os {} pares em {} segundos",
            self.pairs, self.budget_secs
        )
    }

    pub fn render_into(&self, form: &LoginForm, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(theme::TEXT.into_cell(' '));

        let w = BOX_W.min(viewport.width);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height.saturating_sub(BOX_H) / 2;

        fb.draw_box(x, y, w, BOX_H, theme::BORDER);
        fb.put_str_centered(x, w, y + 1, TITLE, theme::TITLE);
        fb.put_str_centered(x, w, y + 2, &self.hint(), theme::HINT);

        let field_w = w.saturating_sub(LABEL_W + 6);
        self.draw_field(fb, x + 2, y + 4, field_w, "Nome", form.name(), form.focus() == FormField::Name);
        self.draw_field(
            fb,
            x + 2,
            y + 6,
            field_w,
            form.kind().label(),
            form.contact(),
            form.focus() == FormField::Contact,
        );

        if let Some(err) = form.error() {
            fb.put_str_centered(x, w, y + 8, err, theme::ERROR);
        }
        fb.put_str_centered(
            x,
            w,
            y + BOX_H - 2,
            "Tab: trocar campo  Enter: jogar  Esc: sair",
            theme::HINT,
        );
    }

    pub fn render(&self, form: &LoginForm, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(form, viewport, &mut fb);
        fb
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_field(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        field_w: u16,
        label: &str,
        value: &str,
        focused: bool,
    ) {
        let (marker, label_style) = if focused {
            ('>', theme::FOCUS)
        } else {
            (' ', theme::LABEL)
        };
        fb.put_char(x, y, marker, label_style);
        fb.put_str(x + 2, y, label, label_style);
        fb.put_char(x + 2 + text_width(label), y, ':', label_style);

        let vx = x + 2 + LABEL_W;
        fb.fill_rect(vx, y, field_w, 1, '_', theme::HINT);
        // Show the tail of values longer than the field.
        let shown = text_width(value).saturating_sub(field_w.saturating_sub(1)) as usize;
        let end = fb.put_str(vx, y, &value.chars().skip(shown).collect::<String>(), theme::TEXT);
        if focused && end < vx + field_w {
            fb.put_char(end, y, '█', theme::FOCUS);
        }
    }
}
