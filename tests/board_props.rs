//! Property tests for the board's arrangement and state invariants.

use concentration::{Board, BoardSize, CellState, Coord, GameRng, Icon};
use proptest::prelude::*;
use std::collections::HashMap;

fn coords(size: BoardSize) -> Vec<Coord> {
    (0..size.side())
        .flat_map(|r| (0..size.side()).map(move |c| Coord::new(r, c)))
        .collect()
}

fn size_from(six: bool) -> BoardSize {
    if six {
        BoardSize::Six
    } else {
        BoardSize::Four
    }
}

/// Play `turns` random turns: each one opens two distinct hidden cards,
/// commits the match result, and resolves the turn.
fn play_random_turns(board: &mut Board, size: BoardSize, rng: &mut GameRng, turns: usize) {
    for _ in 0..turns {
        let hidden: Vec<Coord> = coords(size)
            .into_iter()
            .filter(|&c| board.card_closed(c))
            .collect();
        if hidden.len() < 2 {
            break;
        }

        let mut picks = hidden;
        rng.shuffle(&mut picks);
        board.open_card(picks[0]);
        board.open_card(picks[1]);
        board.commit_match();
        board.end_turn();
    }
}

proptest! {
    #[test]
    fn every_icon_appears_exactly_twice(seed in any::<u64>(), six in any::<bool>()) {
        let size = size_from(six);
        let mut board = Board::new();
        let mut rng = GameRng::new(seed);
        board.arrange_cards(size, &mut rng);

        let mut counts: HashMap<Icon, usize> = HashMap::new();
        for coord in coords(size) {
            let icon = board.layout_icon(coord).unwrap();
            *counts.entry(icon).or_insert(0) += 1;
        }

        prop_assert_eq!(counts.values().sum::<usize>(), size.cells());
        prop_assert_eq!(counts.len(), size.pairs());
        prop_assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn win_iff_every_cell_cleared(seed in any::<u64>(), turns in 0usize..40) {
        let size = BoardSize::Four;
        let mut board = Board::new();
        let mut rng = GameRng::new(seed);
        board.arrange_cards(size, &mut rng);

        let mut turn_rng = GameRng::new(seed.wrapping_add(1));
        play_random_turns(&mut board, size, &mut turn_rng, turns);

        let all_cleared = coords(size)
            .into_iter()
            .all(|c| board.cell_state(c) == Some(CellState::Cleared));
        prop_assert_eq!(board.check_win(), all_cleared);
    }

    #[test]
    fn turns_only_hide_or_clear(seed in any::<u64>(), turns in 0usize..40) {
        let size = BoardSize::Four;
        let mut board = Board::new();
        let mut rng = GameRng::new(seed);
        board.arrange_cards(size, &mut rng);

        let mut turn_rng = GameRng::new(seed.wrapping_add(1));
        play_random_turns(&mut board, size, &mut turn_rng, turns);

        // After end_turn, no cell is ever left revealed, and the opened
        // list is empty.
        for coord in coords(size) {
            prop_assert_ne!(board.cell_state(coord), Some(CellState::Revealed));
        }
        prop_assert!(board.opened_icons().is_empty());
    }

    #[test]
    fn rendering_never_mutates(seed in any::<u64>(), turns in 0usize..20, six in any::<bool>()) {
        let size = size_from(six);
        let mut board = Board::new();
        let mut rng = GameRng::new(seed);
        board.arrange_cards(size, &mut rng);

        let mut turn_rng = GameRng::new(seed.wrapping_add(1));
        play_random_turns(&mut board, size, &mut turn_rng, turns);

        let states_before: Vec<_> = coords(size).iter().map(|&c| board.cell_state(c)).collect();
        let first = board.to_string();
        let second = board.to_string();
        let states_after: Vec<_> = coords(size).iter().map(|&c| board.cell_state(c)).collect();

        prop_assert_eq!(first, second);
        prop_assert_eq!(states_before, states_after);
    }

    #[test]
    fn coordinate_display_round_trips(row in 0usize..26, col in 0usize..9) {
        let coord = Coord::new(row, col);
        prop_assert_eq!(Coord::parse(&coord.to_string()), Some(coord));
    }

    #[test]
    fn same_seed_same_layout(seed in any::<u64>(), six in any::<bool>()) {
        let size = size_from(six);

        let mut a = Board::new();
        a.arrange_cards(size, &mut GameRng::new(seed));
        let mut b = Board::new();
        b.arrange_cards(size, &mut GameRng::new(seed));

        for coord in coords(size) {
            prop_assert_eq!(a.layout_icon(coord), b.layout_icon(coord));
        }
    }
}

#[test]
fn match_truth_table() {
    let mut board = Board::new();
    let mut rng = GameRng::new(42);
    board.arrange_cards(BoardSize::Four, &mut rng);

    // Two cards sharing an icon match; two cards from different pairs don't.
    let all = coords(BoardSize::Four);
    let (first, rest) = all.split_first().unwrap();
    let twin = rest
        .iter()
        .find(|&&c| board.layout_icon(c) == board.layout_icon(*first))
        .copied()
        .unwrap();
    let other = rest
        .iter()
        .find(|&&c| board.layout_icon(c) != board.layout_icon(*first))
        .copied()
        .unwrap();

    board.open_card(*first);
    board.open_card(twin);
    assert!(board.check_match());
    board.end_turn();

    board.open_card(*first);
    board.open_card(other);
    assert!(!board.check_match());
}
