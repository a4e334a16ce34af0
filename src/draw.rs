// src/draw.rs
// Core draw logic: produce independent games, each from a fresh pouch.

use thiserror::Error;

use crate::defs::Number;
use crate::game::Game;
use crate::pouch::Pouch;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrawError {
    #[error("game count must be a positive integer")]
    InvalidCount,
    #[error("range 1-{max_number} cannot supply {needed} distinct numbers")]
    RangeTooSmall { max_number: Number, needed: usize },
}

/// Draw `count` independent games of `main_count` sorted mains plus one
/// bonus, each sampled uniformly without replacement from `[1, max_number]`.
///
/// Fails without drawing anything when `count` is zero or the range cannot
/// supply `main_count + 1` distinct numbers.
pub fn draw(count: u32, max_number: Number, main_count: usize) -> Result<Vec<Game>, DrawError> {
    if count == 0 {
        return Err(DrawError::InvalidCount);
    }
    let needed = main_count + 1;
    if usize::from(max_number) < needed {
        return Err(DrawError::RangeTooSmall { max_number, needed });
    }

    let mut games = Vec::with_capacity(count as usize);
    for _ in 0..count {
        // The range check above guarantees the pouch cannot run dry.
        let game = draw_single(max_number, main_count)
            .ok_or(DrawError::RangeTooSmall { max_number, needed })?;
        games.push(game);
    }
    Ok(games)
}

// One game: main_count + 1 extractions from a fresh pouch. The first
// main_count become the sorted mains, the last one is the bonus; the bonus
// is uniform over the numbers left once the mains are out.
fn draw_single(max_number: Number, main_count: usize) -> Option<Game> {
    let mut pouch = Pouch::new(max_number);

    let mut mains = Vec::with_capacity(main_count);
    for _ in 0..main_count {
        mains.push(pouch.extract()?);
    }
    let bonus = pouch.extract()?;

    mains.sort_unstable();
    Some(Game::new(mains, bonus))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defs::MAIN_COUNT;

    #[test]
    fn test_draw_returns_requested_count() {
        let games = draw(5, 45, MAIN_COUNT).unwrap();
        assert_eq!(games.len(), 5);
    }

    #[test]
    fn test_games_hold_distinct_numbers_in_range() {
        for game in draw(20, 45, MAIN_COUNT).unwrap() {
            let mut numbers: Vec<Number> = game.mains().to_vec();
            numbers.push(game.bonus());
            assert_eq!(numbers.len(), MAIN_COUNT + 1);
            for &n in &numbers {
                assert!((1..=45).contains(&n));
            }

            // Deduplication must not lose anything: all pairwise distinct.
            numbers.sort_unstable();
            numbers.dedup();
            assert_eq!(numbers.len(), MAIN_COUNT + 1);
        }
    }

    #[test]
    fn test_mains_strictly_ascending() {
        for game in draw(20, 45, MAIN_COUNT).unwrap() {
            assert!(game.mains().windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_minimal_range_uses_every_number() {
        // With max_number == MAIN_COUNT + 1 there is only one possible set,
        // so the draw must return all seven numbers every time.
        let games = draw(1, 7, MAIN_COUNT).unwrap();
        let game = &games[0];
        let mut numbers: Vec<Number> = game.mains().to_vec();
        numbers.push(game.bonus());
        numbers.sort_unstable();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_zero_count_is_rejected() {
        assert_eq!(draw(0, 45, MAIN_COUNT).unwrap_err(), DrawError::InvalidCount);
    }

    #[test]
    fn test_too_small_range_is_rejected() {
        assert_eq!(
            draw(5, 6, MAIN_COUNT).unwrap_err(),
            DrawError::RangeTooSmall {
                max_number: 6,
                needed: 7
            }
        );
    }

    #[test]
    fn test_draws_are_independent_of_each_other() {
        // Not a distribution test; just make sure repeated calls keep
        // working and honor the invariants on a larger batch.
        let games = draw(50, 49, MAIN_COUNT).unwrap();
        assert_eq!(games.len(), 50);
        for game in &games {
            assert_eq!(game.mains().len(), MAIN_COUNT);
            assert!(!game.mains().contains(&game.bonus()));
        }
    }
}
