use std::io::{self, Write};

use crate::game::Cue;

/// Playback seam for the round's sound cues. Implementations may be
/// silent; nothing about a round depends on a cue being heard.
pub trait CuePlayer {
    fn play(&mut self, cue: Cue);
}

/// Rings the terminal bell on resolutions. Taps stay quiet so the bell
/// keeps meaning something.
pub struct BellPlayer;

impl CuePlayer for BellPlayer {
    fn play(&mut self, cue: Cue) {
        match cue {
            Cue::Match | Cue::Mismatch => {
                let mut out = io::stdout();
                let _ = out.write_all(b"\x07");
                let _ = out.flush();
            }
            Cue::Tap => {}
        }
    }
}

pub struct SilentPlayer;

impl CuePlayer for SilentPlayer {
    fn play(&mut self, _cue: Cue) {}
}

pub fn player_for(sound: bool) -> Box<dyn CuePlayer> {
    if sound {
        Box::new(BellPlayer)
    } else {
        Box::new(SilentPlayer)
    }
}
