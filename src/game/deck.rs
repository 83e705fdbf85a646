use rand::Rng;
use rand::seq::SliceRandom;

use super::card::{Card, DisplayKind, GridPos};
use super::config::GameConfig;
use super::GameError;

/// Deals a fresh board: one logo card and one name card per catalog brand,
/// uniformly shuffled, laid out row-major. The random source is injected so
/// rounds replay deterministically under a seeded generator.
pub fn build_deck(config: &GameConfig, rng: &mut impl Rng) -> Result<Vec<Card>, GameError> {
    config.validate()?;

    let mut pairs: Vec<(&str, DisplayKind)> = Vec::with_capacity(config.cell_count());
    for brand in &config.catalog {
        pairs.push((brand, DisplayKind::Logo));
        pairs.push((brand, DisplayKind::Name));
    }
    pairs.shuffle(rng);

    Ok(pairs
        .into_iter()
        .enumerate()
        .map(|(idx, (brand, kind))| {
            let pos = GridPos {
                row: idx as u32 / config.grid_cols,
                col: idx as u32 % config.grid_cols,
            };
            Card::new(brand.to_string(), kind, pos)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::game::CardState;

    #[test]
    fn every_brand_appears_as_one_logo_and_one_name_card() {
        let config = GameConfig::casual();
        let deck = build_deck(&config, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(deck.len(), config.cell_count());

        let mut kinds_by_brand: BTreeMap<&str, Vec<DisplayKind>> = BTreeMap::new();
        for card in &deck {
            assert_eq!(card.state(), CardState::FaceDown);
            kinds_by_brand.entry(card.brand()).or_default().push(card.kind());
        }

        let brands: Vec<&str> = kinds_by_brand.keys().copied().collect();
        let mut catalog: Vec<&str> = config.catalog.iter().map(String::as_str).collect();
        catalog.sort();
        assert_eq!(brands, catalog);

        for kinds in kinds_by_brand.values() {
            assert_eq!(kinds.len(), 2);
            assert!(kinds.contains(&DisplayKind::Logo));
            assert!(kinds.contains(&DisplayKind::Name));
        }
    }

    #[test]
    fn positions_cover_the_grid_without_gaps() {
        let config = GameConfig::casual();
        let deck = build_deck(&config, &mut StdRng::seed_from_u64(11)).unwrap();

        let positions: BTreeSet<(u32, u32)> =
            deck.iter().map(|c| (c.pos().row, c.pos().col)).collect();
        assert_eq!(positions.len(), deck.len());
        for (row, col) in positions {
            assert!(row < config.grid_rows);
            assert!(col < config.grid_cols);
        }
    }

    #[test]
    fn same_seed_deals_the_same_board() {
        let config = GameConfig::casual();
        let a = build_deck(&config, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = build_deck(&config, &mut StdRng::seed_from_u64(42)).unwrap();
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.brand(), y.brand());
            assert_eq!(x.kind(), y.kind());
        }
    }

    #[test]
    fn mismatched_catalog_never_deals_a_partial_board() {
        let mut config = GameConfig::casual();
        config.catalog.pop();
        assert!(build_deck(&config, &mut StdRng::seed_from_u64(1)).is_err());
    }
}
