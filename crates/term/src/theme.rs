//! Shared colors for all screens.

use crate::fb::{CellStyle, Rgb};

pub const BG: Rgb = Rgb::new(0, 0, 0);
pub const TABLE_BG: Rgb = Rgb::new(20, 60, 40);

pub const TEXT: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), BG);
pub const LABEL: CellStyle = CellStyle::new(Rgb::new(230, 230, 230), BG).bold();
pub const HINT: CellStyle = CellStyle::new(Rgb::new(150, 150, 150), BG).dim();
pub const TITLE: CellStyle = CellStyle::new(Rgb::new(250, 210, 90), BG).bold();
pub const ERROR: CellStyle = CellStyle::new(Rgb::new(240, 90, 90), BG).bold();
pub const OK: CellStyle = CellStyle::new(Rgb::new(120, 220, 130), BG);
pub const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), BG);
pub const FOCUS: CellStyle = CellStyle::new(Rgb::new(250, 210, 90), BG).bold();

pub const TABLE: CellStyle = CellStyle::new(Rgb::new(60, 110, 80), TABLE_BG);
pub const CARD_BACK: CellStyle = CellStyle::new(Rgb::new(120, 140, 220), Rgb::new(40, 50, 110));
pub const CARD_FACE: CellStyle = CellStyle::new(Rgb::new(20, 20, 20), Rgb::new(235, 235, 225)).bold();
pub const CARD_MATCHED: CellStyle =
    CellStyle::new(Rgb::new(20, 60, 20), Rgb::new(140, 210, 140)).bold();
pub const CURSOR: CellStyle = CellStyle::new(Rgb::new(250, 210, 90), TABLE_BG).bold();

/// Countdown turns red at or below this many seconds.
pub const URGENT_SECS: u32 = 5;
