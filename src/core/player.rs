//! Player identity and score tracking.
//!
//! ## PlayerId
//!
//! The game is strictly two-player; `PlayerId` is a two-variant enum rather
//! than a numeric index, so turn handoff is a total function (`opponent`).
//!
//! ## Players
//!
//! Owns both `Player` records and supports indexing by `PlayerId`, so the
//! controller can write `players[current].score += 1` without borrowing
//! gymnastics.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Identifier for one of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// The player who moves first.
    One,
    /// The second player.
    Two,
}

impl PlayerId {
    /// The other player.
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// 1-based player number, for display.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Display color associated with a player.
///
/// Purely presentational: the core never emits escape sequences, it only
/// tags output with an identity. The shell maps colors to actual styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
}

/// Per-player record: a score counter plus a display identity.
///
/// Not gameplay-relevant beyond the score; card selection itself is driven
/// by the surrounding shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Matched pairs found by this player.
    pub score: u32,
    /// Color used when rendering this player's output.
    pub color: PlayerColor,
}

impl Player {
    /// Create a player with a zero score.
    #[must_use]
    pub fn new(color: PlayerColor) -> Self {
        Self { score: 0, color }
    }
}

/// Both players, indexable by `PlayerId`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    one: Player,
    two: Player,
}

impl Players {
    /// Create both players with the given colors and zero scores.
    #[must_use]
    pub fn new(one: PlayerColor, two: PlayerColor) -> Self {
        Self {
            one: Player::new(one),
            two: Player::new(two),
        }
    }

    /// Reset both scores to zero (game restart).
    pub fn reset_scores(&mut self) {
        self.one.score = 0;
        self.two.score = 0;
    }

    /// Iterate over (PlayerId, &Player) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        [(PlayerId::One, &self.one), (PlayerId::Two, &self.two)].into_iter()
    }

    /// The player with the strictly higher score, or `None` on a tie.
    #[must_use]
    pub fn leader(&self) -> Option<PlayerId> {
        match self.one.score.cmp(&self.two.score) {
            std::cmp::Ordering::Greater => Some(PlayerId::One),
            std::cmp::Ordering::Less => Some(PlayerId::Two),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl Default for Players {
    fn default() -> Self {
        Self::new(PlayerColor::Green, PlayerColor::Yellow)
    }
}

impl Index<PlayerId> for Players {
    type Output = Player;

    fn index(&self, id: PlayerId) -> &Self::Output {
        match id {
            PlayerId::One => &self.one,
            PlayerId::Two => &self.two,
        }
    }
}

impl IndexMut<PlayerId> for Players {
    fn index_mut(&mut self, id: PlayerId) -> &mut Self::Output {
        match id {
            PlayerId::One => &mut self.one,
            PlayerId::Two => &mut self.two,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(PlayerId::One.opponent(), PlayerId::Two);
        assert_eq!(PlayerId::Two.opponent(), PlayerId::One);
        assert_eq!(PlayerId::One.opponent().opponent(), PlayerId::One);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", PlayerId::One), "Player 1");
        assert_eq!(format!("{}", PlayerId::Two), "Player 2");
    }

    #[test]
    fn test_indexing_and_scores() {
        let mut players = Players::default();
        assert_eq!(players[PlayerId::One].score, 0);

        players[PlayerId::One].score += 1;
        players[PlayerId::Two].score += 3;

        assert_eq!(players[PlayerId::One].score, 1);
        assert_eq!(players[PlayerId::Two].score, 3);

        players.reset_scores();
        assert_eq!(players[PlayerId::One].score, 0);
        assert_eq!(players[PlayerId::Two].score, 0);
    }

    #[test]
    fn test_leader() {
        let mut players = Players::default();
        assert_eq!(players.leader(), None);

        players[PlayerId::Two].score = 2;
        assert_eq!(players.leader(), Some(PlayerId::Two));

        players[PlayerId::One].score = 5;
        assert_eq!(players.leader(), Some(PlayerId::One));

        players[PlayerId::Two].score = 5;
        assert_eq!(players.leader(), None);
    }

    #[test]
    fn test_iter_is_ordered() {
        let mut players = Players::default();
        players[PlayerId::Two].score = 4;

        let collected: Vec<_> = players.iter().map(|(id, p)| (id, p.score)).collect();
        assert_eq!(
            collected,
            vec![(PlayerId::One, 0), (PlayerId::Two, 4)]
        );
    }

    #[test]
    fn test_colors_distinct_by_default() {
        let players = Players::default();
        assert_ne!(
            players[PlayerId::One].color,
            players[PlayerId::Two].color
        );
    }
}
