// src/game.rs
// The Game entity: one draw result of sorted main numbers plus a bonus.

use crate::defs::Number;

/// One complete draw result. Built by the draw engine and immutable after;
/// every number is distinct and within the drawn range, mains ascending.
#[derive(Debug, Clone)]
pub struct Game {
    mains: Vec<Number>,
    bonus: Number,
}

impl Game {
    pub(crate) fn new(mains: Vec<Number>, bonus: Number) -> Self {
        Game { mains, bonus }
    }

    pub fn mains(&self) -> &[Number] {
        &self.mains
    }

    pub fn bonus(&self) -> Number {
        self.bonus
    }

    /// Render as `m1 m2 m3 m4 m5 m6 + b`, numbers zero-padded to two digits.
    pub fn format(&self) -> String {
        let mains: Vec<String> = self.mains.iter().map(|n| format!("{n:02}")).collect();
        format!("{} + {:02}", mains.join(" "), self.bonus)
    }
}

/// Render one `Game NN: ...` line per game, joined with newlines.
/// The result box, the clipboard export and headless stdout all use this,
/// so the three outputs can never diverge.
pub fn format_games(games: &[Game]) -> String {
    games
        .iter()
        .enumerate()
        .map(|(idx, game)| format!("Game {:02}: {}", idx + 1, game.format()))
        .collect::<Vec<String>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pads_to_two_digits() {
        let game = Game::new(vec![2, 5, 8, 11, 21, 30], 7);
        assert_eq!(game.format(), "02 05 08 11 21 30 + 07");
    }

    #[test]
    fn test_format_keeps_three_digit_numbers_intact() {
        let game = Game::new(vec![3, 17, 48, 76, 99, 101], 120);
        assert_eq!(game.format(), "03 17 48 76 99 101 + 120");
    }

    #[test]
    fn test_format_games_numbers_lines() {
        let games = vec![
            Game::new(vec![1, 2, 3, 4, 5, 6], 7),
            Game::new(vec![10, 20, 30, 31, 40, 44], 45),
        ];
        let text = format_games(&games);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Game 01: 01 02 03 04 05 06 + 07");
        assert_eq!(lines[1], "Game 02: 10 20 30 31 40 44 + 45");
    }

    #[test]
    fn test_format_games_empty() {
        assert_eq!(format_games(&[]), "");
    }
}
