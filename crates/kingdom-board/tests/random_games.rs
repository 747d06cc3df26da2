use kingdom_board::{Board, Rules};
use kingdom_core::Point;
use kingdom_test_utils::{play_indexed, synthetic_dominoes};
use proptest::prelude::*;

fn arb_rules() -> impl Strategy<Value = Rules> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(mk, h, md)| Rules {
        middle_kingdom: mk,
        harmony: h,
        mighty_duel: md,
    })
}

fn random_board(rules: Rules, turns: usize, picks: &[usize]) -> Board {
    let mut board = Board::new(rules);
    let dominoes = synthetic_dominoes(turns as u32);
    play_indexed(&mut board, &dominoes, picks);
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn vacant_points_touch_the_kingdom(
        rules in arb_rules(),
        turns in 0usize..16,
        picks in prop::collection::vec(any::<usize>(), 1..16),
    ) {
        let board = random_board(rules, turns, &picks);
        for v in board.vacant_points() {
            prop_assert!(board.grid().is_vacant(v));
            prop_assert!(board.grid().within_grid_and_bounds(v));
            let touches = v
                .adjacent_points()
                .iter()
                .any(|&n| board.grid().get(n).is_some());
            prop_assert!(touches, "vacant {} not adjacent to the kingdom", v);
        }
    }

    #[test]
    fn validity_is_flip_invariant(
        turns in 0usize..12,
        picks in prop::collection::vec(any::<usize>(), 1..12),
        number in 1u32..48,
    ) {
        let board = random_board(Rules::default(), turns, &picks);
        let domino = synthetic_dominoes(48)[(number - 1) as usize];
        let plays = board.valid_plays(domino, None, None);
        for play in &plays {
            prop_assert_eq!(play.flipped(), *play);
            prop_assert!(board.valid_play(&play.flipped()));
        }
        prop_assert_eq!(plays.is_empty(), !board.can_place(domino));
    }

    #[test]
    fn kingdom_never_exceeds_size(
        rules in arb_rules(),
        turns in 0usize..24,
        picks in prop::collection::vec(any::<usize>(), 1..24),
    ) {
        let board = random_board(rules, turns, &picks);
        let (min, max) = board.grid().bounding_box();
        let size = rules.kingdom_size() as i32;
        prop_assert!(max.x - min.x < size);
        prop_assert!(max.y - min.y < size);
    }

    #[test]
    fn every_placed_tile_is_in_one_scored_region(
        turns in 0usize..16,
        picks in prop::collection::vec(any::<usize>(), 1..16),
    ) {
        let board = random_board(Rules::default(), turns, &picks);
        let middle = board.grid().middle();
        let placed: Vec<(Point, _)> = board
            .grid()
            .occupied()
            .filter(|&(pt, _)| pt != middle)
            .collect();
        let regions = board.scored_regions();
        let tiles: u32 = regions.iter().map(|r| r.tiles).sum();
        let crowns: u32 = placed.iter().map(|(_, t)| u32::from(t.crowns)).sum();
        prop_assert_eq!(tiles as usize, placed.len());
        prop_assert_eq!(board.crowns(), crowns);
        for group in board.regions().groups() {
            let suit = board.grid().get(group[0]).map(|t| t.suit);
            prop_assert!(group.iter().all(|&pt| board.grid().get(pt).map(|t| t.suit) == suit));
        }
    }
}
