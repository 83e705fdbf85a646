use super::GameError;

/// Which half of a brand pair this card shows when face-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayKind {
    Logo,
    Name,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardState {
    FaceDown,
    FaceUp,
    Matched,
}

/// Grid cell, fixed at creation. Only the renderer and hit-test care.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridPos {
    pub row: u32,
    pub col: u32,
}

#[derive(Clone, Debug)]
pub struct Card {
    brand: String,
    kind: DisplayKind,
    pos: GridPos,
    state: CardState,
}

impl Card {
    pub fn new(brand: String, kind: DisplayKind, pos: GridPos) -> Self {
        Card {
            brand,
            kind,
            pos,
            state: CardState::FaceDown,
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn kind(&self) -> DisplayKind {
        self.kind
    }

    pub fn pos(&self) -> GridPos {
        self.pos
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    pub fn is_clickable(&self) -> bool {
        self.state == CardState::FaceDown
    }

    /// Face-down cards turn face-up; anything else is left alone. Clicks on
    /// ineligible cards are filtered upstream, so this never errors.
    pub fn reveal(&mut self) {
        if self.state == CardState::FaceDown {
            self.state = CardState::FaceUp;
        }
    }

    /// Flips a face-up card back down after a mismatch. Matched is terminal;
    /// hiding a matched card means the controller lost track of the pair.
    pub fn hide(&mut self) -> Result<(), GameError> {
        match self.state {
            CardState::Matched => Err(GameError::InvalidState {
                action: "hide",
                state: self.state,
            }),
            _ => {
                self.state = CardState::FaceDown;
                Ok(())
            }
        }
    }

    pub fn mark_matched(&mut self) -> Result<(), GameError> {
        if self.state != CardState::FaceUp {
            return Err(GameError::InvalidState {
                action: "mark_matched",
                state: self.state,
            });
        }
        self.state = CardState::Matched;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Card {
        Card::new(
            "Gucci".to_string(),
            DisplayKind::Logo,
            GridPos { row: 0, col: 0 },
        )
    }

    #[test]
    fn reveal_only_flips_face_down_cards() {
        let mut c = card();
        assert!(c.is_clickable());
        c.reveal();
        assert_eq!(c.state(), CardState::FaceUp);
        assert!(!c.is_clickable());

        c.mark_matched().unwrap();
        c.reveal();
        assert_eq!(c.state(), CardState::Matched);
    }

    #[test]
    fn hide_rejects_matched_cards() {
        let mut c = card();
        c.reveal();
        c.hide().unwrap();
        assert_eq!(c.state(), CardState::FaceDown);

        c.reveal();
        c.mark_matched().unwrap();
        assert!(c.hide().is_err());
        assert_eq!(c.state(), CardState::Matched);
    }

    #[test]
    fn mark_matched_requires_face_up() {
        let mut c = card();
        assert!(c.mark_matched().is_err());
        c.reveal();
        c.mark_matched().unwrap();
        assert!(c.mark_matched().is_err());
    }
}
