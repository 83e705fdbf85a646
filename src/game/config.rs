use super::GameError;

pub const DEFAULT_GRACE_WINDOW_MS: u32 = 1_000;

/// Default brand catalog: 15 brands, filling the 6x5 grid.
pub const DEFAULT_CATALOG: [&str; 15] = [
    "YSL",
    "Gucci",
    "Loro Piana",
    "Ferragamo",
    "Louis Vuitton",
    "Fendi",
    "Hermés",
    "Cartier",
    "Prada",
    "Balenciaga",
    "Chanel",
    "Dior",
    "Bottega Veneta",
    "Celine",
    "Loewe",
];

/// How matches and mismatches move the score. Both game variants are
/// presets of this one policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoringPolicy {
    /// Fixed award per match, mismatches free.
    Flat { points: i32 },
    /// Bigger award for matches found inside the early window, and a
    /// penalty on every mismatch.
    Tiered {
        early_window_ms: u32,
        early_points: i32,
        late_points: i32,
        penalty: i32,
    },
}

impl ScoringPolicy {
    pub fn casual() -> Self {
        ScoringPolicy::Flat { points: 10 }
    }

    pub fn timed() -> Self {
        ScoringPolicy::Tiered {
            early_window_ms: 30_000,
            early_points: 40,
            late_points: 15,
            penalty: 5,
        }
    }

    /// Signed score change for a match found at `elapsed_ms` into the round.
    pub fn match_delta(&self, elapsed_ms: u32) -> i32 {
        match *self {
            ScoringPolicy::Flat { points } => points,
            ScoringPolicy::Tiered {
                early_window_ms,
                early_points,
                late_points,
                ..
            } => {
                if elapsed_ms < early_window_ms {
                    early_points
                } else {
                    late_points
                }
            }
        }
    }

    /// Signed score change for a mismatch. Zero under the flat policy.
    pub fn mismatch_delta(&self) -> i32 {
        match *self {
            ScoringPolicy::Flat { .. } => 0,
            ScoringPolicy::Tiered { penalty, .. } => -penalty,
        }
    }
}

/// Everything a round is parameterized by. Built once at startup and never
/// mutated afterwards.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub grid_rows: u32,
    pub grid_cols: u32,
    /// Card cell size and spacing, in renderer units.
    pub card_width: u16,
    pub card_height: u16,
    pub card_gap: u16,
    /// Round time budget in milliseconds; 0 means untimed.
    pub round_time_ms: u32,
    /// How long a mismatched pair stays visible before flipping back.
    pub grace_window_ms: u32,
    pub scoring: ScoringPolicy,
    /// Whether the round starts behind an intro screen waiting for input.
    pub intro_screen: bool,
    pub catalog: Vec<String>,
}

impl GameConfig {
    fn base(scoring: ScoringPolicy) -> Self {
        GameConfig {
            grid_rows: 6,
            grid_cols: 5,
            card_width: 16,
            card_height: 5,
            card_gap: 2,
            round_time_ms: 0,
            grace_window_ms: DEFAULT_GRACE_WINDOW_MS,
            scoring,
            intro_screen: false,
            catalog: DEFAULT_CATALOG.iter().map(|b| b.to_string()).collect(),
        }
    }

    /// Variant 1: no clock, flat scoring, straight into the board.
    pub fn casual() -> Self {
        Self::base(ScoringPolicy::casual())
    }

    /// Variant 2: countdown round, tiered scoring, intro and outro screens.
    pub fn timed() -> Self {
        let mut config = Self::base(ScoringPolicy::timed());
        config.round_time_ms = 120_000;
        config.intro_screen = true;
        config
    }

    pub fn is_timed(&self) -> bool {
        self.round_time_ms > 0
    }

    pub fn cell_count(&self) -> usize {
        (self.grid_rows * self.grid_cols) as usize
    }

    /// Surfaced before any round starts; a partial board is never dealt.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.catalog.is_empty() {
            return Err(GameError::Configuration {
                message: "brand catalog is empty".to_string(),
            });
        }
        let mut seen = self.catalog.clone();
        seen.sort();
        seen.dedup();
        if seen.len() != self.catalog.len() {
            return Err(GameError::Configuration {
                message: "brand catalog contains duplicates".to_string(),
            });
        }
        if self.grid_rows == 0 || self.grid_cols == 0 {
            return Err(GameError::Configuration {
                message: format!(
                    "grid {}x{} has no cells",
                    self.grid_rows, self.grid_cols
                ),
            });
        }
        if self.catalog.len() * 2 != self.cell_count() {
            return Err(GameError::Configuration {
                message: format!(
                    "{} brands produce {} cards but the {}x{} grid has {} cells",
                    self.catalog.len(),
                    self.catalog.len() * 2,
                    self.grid_rows,
                    self.grid_cols,
                    self.cell_count()
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_variants_validate() {
        GameConfig::casual().validate().unwrap();
        GameConfig::timed().validate().unwrap();
    }

    #[test]
    fn catalog_must_fill_the_grid_exactly() {
        let mut config = GameConfig::casual();
        config.catalog.truncate(14);
        assert!(config.validate().is_err());

        config.grid_rows = 7;
        config.grid_cols = 4;
        config.catalog.push("Miu Miu".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn duplicate_brands_are_rejected() {
        let mut config = GameConfig::casual();
        config.catalog[0] = "Gucci".to_string();
        config.catalog[1] = "Gucci".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn tiered_scoring_pays_by_elapsed_time() {
        let policy = ScoringPolicy::timed();
        assert_eq!(policy.match_delta(0), 40);
        assert_eq!(policy.match_delta(29_999), 40);
        assert_eq!(policy.match_delta(30_000), 15);
        assert_eq!(policy.mismatch_delta(), -5);
    }

    #[test]
    fn flat_scoring_ignores_time_and_mismatches() {
        let policy = ScoringPolicy::casual();
        assert_eq!(policy.match_delta(0), 10);
        assert_eq!(policy.match_delta(600_000), 10);
        assert_eq!(policy.mismatch_delta(), 0);
    }
}
