//! Perft (performance test) for move generation correctness.

use super::position;
use crate::board::State;

struct TestPosition {
    name: &'static str,
    placement: &'static str,
    turn: &'static str,
    castling: &'static str,
    en_passant: &'static str,
    depths: &'static [(usize, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        placement: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        turn: "w",
        castling: "KQkq",
        en_passant: "-",
        depths: &[(1, 20), (2, 400), (3, 8902)],
    },
    TestPosition {
        name: "Kiwipete",
        placement: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        turn: "w",
        castling: "KQkq",
        en_passant: "-",
        depths: &[(1, 48), (2, 2039)],
    },
    TestPosition {
        name: "Position 3",
        placement: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
        turn: "w",
        castling: "-",
        en_passant: "-",
        depths: &[(1, 14), (2, 191), (3, 2812)],
    },
    TestPosition {
        name: "Position 4",
        placement: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1",
        turn: "w",
        castling: "kq",
        en_passant: "-",
        depths: &[(1, 6), (2, 264)],
    },
    TestPosition {
        name: "Position 5",
        placement: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R",
        turn: "w",
        castling: "KQ",
        en_passant: "-",
        depths: &[(1, 44), (2, 1486)],
    },
    TestPosition {
        name: "En Passant Capture",
        placement: "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR",
        turn: "w",
        castling: "KQkq",
        en_passant: "f6",
        depths: &[(1, 31), (2, 707)],
    },
    TestPosition {
        name: "Promotion",
        placement: "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N",
        turn: "b",
        castling: "-",
        en_passant: "-",
        depths: &[(1, 24), (2, 496)],
    },
    TestPosition {
        name: "Castling",
        placement: "r3k2r/8/8/8/8/8/8/R3K2R",
        turn: "w",
        castling: "KQkq",
        en_passant: "-",
        depths: &[(1, 26), (2, 568)],
    },
];

fn load(test: &TestPosition) -> State {
    position(test.placement, test.turn, test.castling, test.en_passant)
}

#[test]
fn test_perft_positions() {
    for test in TEST_POSITIONS {
        let state = load(test);
        for &(depth, expected) in test.depths {
            let nodes = state.perft(depth).unwrap();
            assert_eq!(
                nodes, expected,
                "{} depth {depth}: got {nodes}, expected {expected}",
                test.name
            );
        }
    }
}

#[test]
fn test_perft_depth_zero_is_one() {
    assert_eq!(State::new().perft(0).unwrap(), 1);
}

#[test]
fn test_perft_divide_sums_to_perft() {
    for test in TEST_POSITIONS {
        let state = load(test);
        let divide = state.perft_divide(2).unwrap();
        let total: u64 = divide.iter().map(|(_, n)| n).sum();
        assert_eq!(total, state.perft(2).unwrap(), "{}", test.name);
        assert_eq!(divide.len() as u64, state.perft(1).unwrap());
    }
}

#[test]
fn test_perft_mirrored_positions_match() {
    for test in TEST_POSITIONS {
        let state = load(test);
        let mirrored = state.color_mirror();
        assert_eq!(
            state.perft(2).unwrap(),
            mirrored.perft(2).unwrap(),
            "{}",
            test.name
        );
    }
}

#[test]
fn test_perft_kiwipete_depth_3() {
    let kiwipete = load(&TEST_POSITIONS[1]);
    assert_eq!(kiwipete.perft(3).unwrap(), 97862);
}

#[test]
#[ignore]
fn test_perft_deep() {
    assert_eq!(State::new().perft(4).unwrap(), 197_281);
}
