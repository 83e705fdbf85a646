use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};

use crate::assets::LogoArt;
use crate::game::{Card, GameConfig, GridPos};

/// Rows at the top of the screen reserved for the HUD.
pub const HUD_ROWS: u16 = 2;

// Board palette.
const BACK_COLOR: Color = Color::Rgb { r: 70, g: 73, b: 76 };
const FRONT_COLOR: Color = Color::Rgb { r: 247, g: 169, b: 168 };
const MATCHED_COLOR: Color = Color::Rgb { r: 239, g: 121, b: 138 };
const FACE_TEXT_COLOR: Color = Color::Rgb { r: 70, g: 73, b: 76 };
const BACK_TEXT_COLOR: Color = Color::Rgb { r: 250, g: 250, b: 250 };

/// What a card shows this frame. The round only exposes identity and
/// state; turning that into a face (including the text fallback when no
/// logo art resolves) happens at the drawing seam.
pub enum CardFace<'a> {
    Back,
    FrontArt(&'a LogoArt),
    FrontText(&'a str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }
}

/// Maps grid positions to fixed-size screen rects, centered in the space
/// below the HUD. Rebuilt on every terminal resize.
#[derive(Clone, Copy, Debug)]
pub struct BoardLayout {
    origin_x: u16,
    origin_y: u16,
    card_w: u16,
    card_h: u16,
    gap: u16,
}

impl BoardLayout {
    pub fn new(config: &GameConfig, term_cols: u16, term_rows: u16) -> Self {
        let card_w = config.card_width;
        let card_h = config.card_height;
        let gap = config.card_gap;
        let board_w = config.grid_cols as u16 * (card_w + gap) - gap;
        let board_h = config.grid_rows as u16 * (card_h + gap) - gap;
        let origin_x = term_cols.saturating_sub(board_w) / 2;
        let origin_y = HUD_ROWS + term_rows.saturating_sub(board_h + HUD_ROWS) / 2;
        BoardLayout {
            origin_x,
            origin_y,
            card_w,
            card_h,
            gap,
        }
    }

    pub fn card_rect(&self, pos: GridPos) -> Rect {
        Rect {
            x: self.origin_x + pos.col as u16 * (self.card_w + self.gap),
            y: self.origin_y + pos.row as u16 * (self.card_h + self.gap),
            w: self.card_w,
            h: self.card_h,
        }
    }

    pub fn point_in_card(&self, pos: GridPos, x: u16, y: u16) -> bool {
        self.card_rect(pos).contains(x, y)
    }

    /// Returns the deck index under the pointer, if any.
    pub fn hit_test(&self, cards: &[Card], x: u16, y: u16) -> Option<usize> {
        cards
            .iter()
            .position(|card| self.point_in_card(card.pos(), x, y))
    }
}

pub fn draw_card(
    out: &mut impl Write,
    rect: Rect,
    face: CardFace<'_>,
    matched: bool,
) -> io::Result<()> {
    let (bg, fg) = match face {
        CardFace::Back => (BACK_COLOR, BACK_TEXT_COLOR),
        _ if matched => (MATCHED_COLOR, FACE_TEXT_COLOR),
        _ => (FRONT_COLOR, FACE_TEXT_COLOR),
    };
    queue!(out, SetBackgroundColor(bg), SetForegroundColor(fg))?;

    let blank = " ".repeat(rect.w as usize);
    for dy in 0..rect.h {
        queue!(out, MoveTo(rect.x, rect.y + dy), Print(&blank))?;
    }

    match face {
        CardFace::Back => {
            draw_centered_line(out, rect, rect.h / 2, "?")?;
        }
        CardFace::FrontText(text) => {
            draw_centered_line(out, rect, rect.h / 2, text)?;
        }
        CardFace::FrontArt(art) => {
            let shown = art.lines.len().min(rect.h as usize);
            let top = (rect.h as usize - shown) / 2;
            for (i, line) in art.lines.iter().take(shown).enumerate() {
                draw_centered_line(out, rect, (top + i) as u16, line)?;
            }
        }
    }

    queue!(out, ResetColor)
}

fn draw_centered_line(out: &mut impl Write, rect: Rect, dy: u16, text: &str) -> io::Result<()> {
    let max = rect.w.saturating_sub(2) as usize;
    let shown: String = text.chars().take(max).collect();
    let x = rect.x + (rect.w - shown.chars().count() as u16) / 2;
    queue!(out, MoveTo(x, rect.y + dy), Print(shown))
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::game::deck::build_deck;

    fn layout() -> (GameConfig, BoardLayout) {
        let config = GameConfig::casual();
        // 5 * 18 - 2 = 88 wide, 6 * 7 - 2 = 40 tall
        (config.clone(), BoardLayout::new(&config, 120, 50))
    }

    #[test]
    fn cards_land_in_disjoint_rects() {
        let (config, layout) = layout();
        let deck = build_deck(&config, &mut StdRng::seed_from_u64(3)).unwrap();
        for a in &deck {
            for b in &deck {
                if a.pos() != b.pos() {
                    let rect = layout.card_rect(a.pos());
                    assert!(!layout.point_in_card(b.pos(), rect.x, rect.y));
                }
            }
        }
    }

    #[test]
    fn hit_test_finds_the_clicked_card_and_misses_gaps() {
        let (config, layout) = layout();
        let deck = build_deck(&config, &mut StdRng::seed_from_u64(3)).unwrap();

        let rect = layout.card_rect(deck[7].pos());
        assert_eq!(layout.hit_test(&deck, rect.x, rect.y), Some(7));
        assert_eq!(
            layout.hit_test(&deck, rect.x + rect.w - 1, rect.y + rect.h - 1),
            Some(7)
        );
        // One column past the card's right edge is gap.
        assert_eq!(layout.hit_test(&deck, rect.x + rect.w, rect.y), None);
        // Far corner is outside the board entirely.
        assert_eq!(layout.hit_test(&deck, 0, 0), None);
    }
}
