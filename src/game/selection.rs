/// Where the tracker stands after an offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionStatus {
    AwaitingFirst,
    AwaitingSecond,
    PairReady,
}

/// Holds the zero, one or two cards currently revealed but unresolved,
/// by deck index. Once two are held the tracker is locked and further
/// offers bounce until the round clears it after resolution.
#[derive(Debug, Default)]
pub struct SelectionTracker {
    first: Option<usize>,
    second: Option<usize>,
}

impl SelectionTracker {
    pub fn status(&self) -> SelectionStatus {
        match (self.first, self.second) {
            (None, _) => SelectionStatus::AwaitingFirst,
            (Some(_), None) => SelectionStatus::AwaitingSecond,
            (Some(_), Some(_)) => SelectionStatus::PairReady,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.status() == SelectionStatus::PairReady
    }

    pub fn holds(&self, index: usize) -> bool {
        self.first == Some(index) || self.second == Some(index)
    }

    /// Offers a newly revealed card. Rejected while locked, and a card
    /// cannot pair with itself, so re-offering the held first pick is
    /// ignored too. Returns the tracker state after the offer.
    pub fn offer(&mut self, index: usize) -> SelectionStatus {
        if self.is_locked() || self.holds(index) {
            return self.status();
        }
        if self.first.is_none() {
            self.first = Some(index);
        } else {
            self.second = Some(index);
        }
        self.status()
    }

    pub fn pair(&self) -> Option<(usize, usize)> {
        Some((self.first?, self.second?))
    }

    pub fn clear(&mut self) {
        self.first = None;
        self.second = None;
    }
}
