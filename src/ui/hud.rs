use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;

use crate::game::Round;

/// One status line above the board: score, matched pairs and the clock.
/// The timed variant shows time left; the casual one counts up.
pub fn draw(out: &mut impl Write, round: &Round, term_cols: u16) -> io::Result<()> {
    let clock = match round.remaining_ms() {
        Some(remaining) => format!("Time left {}", format_clock_ceil(remaining)),
        None => format!("Time {}", format_clock(round.elapsed_ms())),
    };
    let line = format!(
        "Flip & Fit   Score {}   Pairs {}/{}   {}",
        round.score(),
        round.matched_pairs(),
        round.total_pairs(),
        clock
    );
    let x = term_cols.saturating_sub(line.chars().count() as u16) / 2;
    queue!(out, MoveTo(x, 0), Print(line))
}

/// mm:ss, truncating.
pub fn format_clock(ms: u32) -> String {
    let secs = ms / 1000;
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// mm:ss, rounding up so a countdown only reads 00:00 once it has
/// actually expired.
pub fn format_clock_ceil(ms: u32) -> String {
    let secs = ms.div_ceil(1000);
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_formats_minutes_and_seconds() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(61_000), "01:01");
        assert_eq!(format_clock(599_999), "09:59");
    }

    #[test]
    fn countdown_clock_rounds_up() {
        assert_eq!(format_clock_ceil(1), "00:01");
        assert_eq!(format_clock_ceil(60_001), "01:01");
        assert_eq!(format_clock_ceil(0), "00:00");
    }
}
