use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::cursor::{self, MoveTo};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEventKind,
};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::assets::LogoLibrary;
use crate::game::{CardState, DisplayKind, EndReason, GameConfig, Phase, Round};
use crate::settings::{Settings, Variant};

use super::audio::{self, CuePlayer};
use super::board::{self, BoardLayout, CardFace};
use super::hud;

/// One tick per frame, a 60fps target.
const TICK: Duration = Duration::from_millis(16);

/// Restores the terminal however the loop ends, including on panic.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            cursor::Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

pub fn run(settings: Settings) -> Result<()> {
    let config = match settings.variant {
        Variant::Timed => GameConfig::timed(),
        Variant::Casual => GameConfig::casual(),
    };
    // Surfaced before any terminal takeover; a bad catalog/grid combination
    // must never deal a partial board.
    config.validate()?;

    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut logos = LogoLibrary::new(settings.logos_dir());
    let mut audio = audio::player_for(settings.sound);

    let _guard = TerminalGuard::enter()?;
    let mut out = io::stdout();

    let mut round = Round::new(config.clone(), &mut rng)?;
    info!(variant = ?settings.variant, "round dealt");

    let (mut term_cols, mut term_rows) = terminal::size()?;
    let mut layout = BoardLayout::new(&config, term_cols, term_rows);
    let mut last_tick = Instant::now();

    loop {
        let timeout = TICK.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    // Quit wins over everything, at any point in the loop.
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') => {
                        match round.phase() {
                            Phase::Intro => round.begin(),
                            Phase::Complete(_) => {
                                round = Round::new(config.clone(), &mut rng)?;
                            }
                            Phase::Playing => {}
                        }
                    }
                    _ => round.begin(),
                },
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    match round.phase() {
                        Phase::Intro => round.begin(),
                        Phase::Complete(_) => {
                            round = Round::new(config.clone(), &mut rng)?;
                        }
                        Phase::Playing => {
                            if let Some(index) =
                                layout.hit_test(round.cards(), mouse.column, mouse.row)
                            {
                                round.handle_click(index)?;
                            }
                        }
                    }
                }
                Event::Resize(cols, rows) => {
                    term_cols = cols;
                    term_rows = rows;
                    layout = BoardLayout::new(&config, cols, rows);
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= TICK {
            let dt = last_tick.elapsed();
            last_tick = Instant::now();
            round.tick(dt.as_millis() as u32)?;
            for cue in round.take_cues() {
                audio.play(cue);
            }
            draw(&mut out, &round, &layout, &mut logos, term_cols, term_rows)?;
        }
    }

    Ok(())
}

fn draw(
    out: &mut impl Write,
    round: &Round,
    layout: &BoardLayout,
    logos: &mut LogoLibrary,
    term_cols: u16,
    term_rows: u16,
) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    match round.phase() {
        Phase::Intro => draw_intro(out, term_cols, term_rows)?,
        Phase::Playing => {
            hud::draw(out, round, term_cols)?;
            draw_board(out, round, layout, logos)?;
        }
        Phase::Complete(reason) => draw_outro(out, round, reason, term_cols, term_rows)?,
    }
    out.flush()
}

fn draw_board(
    out: &mut impl Write,
    round: &Round,
    layout: &BoardLayout,
    logos: &mut LogoLibrary,
) -> io::Result<()> {
    for card in round.cards() {
        let face = match card.state() {
            CardState::FaceDown => CardFace::Back,
            CardState::FaceUp | CardState::Matched => match card.kind() {
                DisplayKind::Name => CardFace::FrontText(card.brand()),
                DisplayKind::Logo => match logos.load(card.brand()) {
                    Some(art) => CardFace::FrontArt(art),
                    None => CardFace::FrontText(card.brand()),
                },
            },
        };
        board::draw_card(
            out,
            layout.card_rect(card.pos()),
            face,
            card.state() == CardState::Matched,
        )?;
    }
    Ok(())
}

fn draw_intro(out: &mut impl Write, term_cols: u16, term_rows: u16) -> io::Result<()> {
    let lines = [
        "FLIP & FIT",
        "Fashion Match Challenge",
        "",
        "Pair each brand's logo with its name.",
        "A mismatched pair flips back after a beat.",
        "",
        "Click anywhere to start  -  Q quits",
    ];
    draw_screen_center(out, &lines, term_cols, term_rows)
}

fn draw_outro(
    out: &mut impl Write,
    round: &Round,
    reason: EndReason,
    term_cols: u16,
    term_rows: u16,
) -> io::Result<()> {
    let headline = match reason {
        EndReason::AllMatched => "All pairs found!",
        EndReason::TimedOut => "Time's up!",
    };
    let score = format!("Score {}", round.score());
    let pairs = format!(
        "Pairs {}/{} in {}",
        round.matched_pairs(),
        round.total_pairs(),
        hud::format_clock(round.elapsed_ms())
    );
    let lines = [
        headline,
        "",
        score.as_str(),
        pairs.as_str(),
        "",
        "Enter plays again  -  Q quits",
    ];
    draw_screen_center(out, &lines, term_cols, term_rows)
}

fn draw_screen_center(
    out: &mut impl Write,
    lines: &[&str],
    term_cols: u16,
    term_rows: u16,
) -> io::Result<()> {
    let top = term_rows.saturating_sub(lines.len() as u16) / 2;
    for (i, line) in lines.iter().enumerate() {
        let x = term_cols.saturating_sub(line.chars().count() as u16) / 2;
        queue!(out, MoveTo(x, top + i as u16), Print(line))?;
    }
    Ok(())
}
