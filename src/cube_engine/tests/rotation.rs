use cube_engine::{Color, Cube, CubeletKind, Move, MoveError};
use fastrand::Rng;
use std::collections::HashMap;

const CENTERS: [[usize; 3]; 6] = [
    [0, 1, 1],
    [2, 1, 1],
    [1, 0, 1],
    [1, 2, 1],
    [1, 1, 0],
    [1, 1, 2],
];

fn random_moves(seed: u64, len: usize) -> Vec<Move> {
    let mut rng = Rng::with_seed(seed);
    (0..len).map(|_| Move::ALL[rng.usize(..Move::ALL.len())]).collect()
}

fn scrambled(seed: u64) -> Cube {
    let mut cube = Cube::default();
    for mv in random_moves(seed, 40) {
        cube.apply(mv);
    }
    cube
}

#[test_log::test]
fn four_quarter_turns_are_identity() {
    for start in [Cube::default(), scrambled(7)] {
        for mv in Move::ALL {
            let mut cube = start.clone();
            cube.apply(mv);
            assert_ne!(cube, start, "{mv} should change the cube");
            for _ in 0..3 {
                cube.apply(mv);
            }
            assert_eq!(cube, start, "{mv} four times should restore the cube");
        }
    }
}

#[test_log::test]
fn colors_are_conserved() {
    let expected: HashMap<Color, usize> = Color::REAL.iter().map(|&c| (c, 9)).collect();
    for seed in 0..20 {
        let mut cube = Cube::default();
        for mv in random_moves(seed, 50) {
            cube.apply(mv);
            assert_eq!(cube.color_counts(), expected);
        }
        let none_fields = cube
            .cubelets()
            .flat_map(|(_, cubelet)| cubelet.stickers())
            .filter(|color| color.is_none())
            .count();
        assert_eq!(none_fields, 27 * 3 - 54);
    }
}

#[test_log::test]
fn centers_never_change() {
    let solved = Cube::default();
    let before = CENTERS.map(|p| *solved.cubelet(p).unwrap());
    for seed in 100..110 {
        let cube = scrambled(seed);
        for (position, center) in CENTERS.iter().zip(before) {
            let cubelet = cube.cubelet(*position).unwrap();
            assert_eq!(cubelet.kind(), CubeletKind::Center);
            assert_eq!(*cubelet, center);
        }
    }
}

#[test_log::test]
fn scrambled_cube_is_revalidated() {
    for seed in 200..210 {
        let cube = scrambled(seed);
        assert_eq!(Cube::new(cube.layout()), Ok(cube));
    }
}

#[test_log::test]
fn right_turn_on_solved_cube() {
    let mut cube = Cube::default();
    let before = cube.layout();
    cube.rotate('R').unwrap();
    let after = cube.layout();

    // Stickers along y and z on a solved cube, indexed by that coordinate.
    let y_colors = [Color::White, Color::None, Color::Yellow];
    let z_colors = [Color::Green, Color::None, Color::Blue];

    for i in 0..3 {
        for j in 0..3 {
            // The cubelet now at y = i, z = j came from y = 2 - j, z = i.
            let moved = after[2][i][j];
            let origin = before[2][2 - j][i];
            assert_eq!(moved.kind(), origin.kind());
            assert_eq!(moved.stickers()[0], Color::Red);
            assert_eq!(moved.stickers()[1], origin.stickers()[2]);
            assert_eq!(moved.stickers()[2], origin.stickers()[1]);
            assert_eq!(moved.stickers()[1], z_colors[i]);
            assert_eq!(moved.stickers()[2], y_colors[2 - j]);
        }
    }

    // Up front right corner: green from the front went up, yellow from the
    // bottom went to the front.
    assert_eq!(
        after[2][0][0].stickers(),
        [Color::Red, Color::Green, Color::Yellow]
    );
    assert_eq!(
        after[2][0][2].stickers(),
        [Color::Red, Color::Green, Color::White]
    );
    assert_eq!(
        after[2][2][0].stickers(),
        [Color::Red, Color::Blue, Color::Yellow]
    );
    assert_eq!(
        after[2][1][0].stickers(),
        [Color::Red, Color::None, Color::Yellow]
    );
    assert_eq!(after[2][1][1], before[2][1][1]);

    // The other two slices don't move.
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1], before[1]);

    assert_eq!(cube.face_colors(Move::R), [[Color::Red; 3]; 3]);
    let up = cube.face_colors(Move::U);
    assert_eq!(up[2], [Color::Green; 3]);
    assert_eq!(up[0], [Color::White; 3]);
    assert_eq!(up[1], [Color::White; 3]);
}

#[test_log::test]
fn unknown_code_leaves_cube_unchanged() {
    let mut cube = scrambled(3);
    let before = serde_json::to_string(&cube).unwrap();
    assert_eq!(cube.rotate('X'), Err(MoveError::UnknownCode('X')));
    assert_eq!(cube.rotate('r'), Err(MoveError::UnknownCode('r')));
    assert_eq!(serde_json::to_string(&cube).unwrap(), before);
}

#[test_log::test]
fn each_code_turns_exactly_one_face() {
    for mv in Move::ALL {
        let mut by_code = Cube::default();
        by_code.rotate(mv.letter()).unwrap();

        let mut by_move = Cube::default();
        by_move.apply(mv);
        assert_eq!(by_code, by_move);

        // Only the turned face's side stickers change; the opposite face and
        // the face itself keep their colors.
        for face in Move::ALL {
            let colors = by_code.face_colors(face);
            let uniform = colors.iter().flatten().all(|&c| c == colors[1][1]);
            let is_side = face.selector().axis() != mv.selector().axis();
            assert_eq!(uniform, !is_side, "{mv} then face {face}");
        }
    }
}
