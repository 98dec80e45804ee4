//! End-to-end runs over mazes in the text format

use maze_solver::{CellState, Maze, MazeError, MazeSolver, ParseError, PathMarking, Position};

const CORRIDOR: &str = "\
size
5
grid
S 1 0 1 1
0 1 0 G 1
1 1 1 0 1
1 0 1 1 1
G 0 0 0 T
";

const WALLED_OFF: &str = "\
size
4
grid
S 1 0 G
1 G 0 1
0 0 0 1
G 1 1 T
";

#[test]
fn test_corridor_traverse_then_collect_on_fresh_copy() {
    let mut maze: MazeSolver = CORRIDOR.parse().unwrap();
    assert_eq!(maze.start(), Position::new(0, 0));
    assert_eq!(maze.target(), Position::new(4, 4));

    assert!(maze.traverse().unwrap());
    assert_eq!(maze.cell(Position::new(4, 4)), Some(CellState::Visited));
    // (1,3) holds a coin on a dead end explored before the target is found
    assert_eq!(maze.cell(Position::new(1, 3)), Some(CellState::Visited));

    let mut fresh: MazeSolver = CORRIDOR.parse().unwrap();
    assert_eq!(fresh.collect_coins().unwrap(), 2);
    assert_eq!(fresh.grid().count(CellState::GoldCoin), 0);
}

#[test]
fn test_walled_off_region() {
    let mut maze: MazeSolver = WALLED_OFF.parse().unwrap();
    assert!(!maze.traverse().unwrap());
    assert_eq!(maze.cell(Position::new(3, 3)), Some(CellState::Open));

    let mut fresh: MazeSolver = WALLED_OFF.parse().unwrap();
    assert_eq!(fresh.collect_coins().unwrap(), 1);
    assert_eq!(fresh.grid().count(CellState::GoldCoin), 2);
}

#[test]
fn test_overridden_start_and_target() {
    let mut maze: MazeSolver = WALLED_OFF.parse().unwrap();
    maze.set_start(Position::new(0, 3));
    maze.set_target(Position::new(3, 1));
    assert!(maze.traverse().unwrap());

    let mut fresh: MazeSolver = WALLED_OFF.parse().unwrap();
    fresh.set_start(Position::new(3, 3));
    assert_eq!(fresh.collect_coins().unwrap(), 2);
}

#[test]
fn test_rerun_from_snapshot() {
    let mut maze: MazeSolver = CORRIDOR.parse().unwrap();
    let layout = maze.snapshot();

    assert!(maze.traverse().unwrap());
    let first = maze.render();

    maze.restore(layout.clone()).unwrap();
    assert!(maze.traverse().unwrap());
    assert_eq!(maze.render(), first);

    maze.restore(layout).unwrap();
    assert_eq!(maze.collect_coins().unwrap(), 2);
}

#[test]
fn test_editing_changes_outcome() {
    let mut maze: MazeSolver = WALLED_OFF.parse().unwrap();
    let layout = maze.snapshot();
    assert!(!maze.traverse().unwrap());

    maze.restore(layout).unwrap();
    assert_eq!(maze.toggle_wall(Position::new(0, 2)).unwrap(), CellState::Open);
    assert!(maze.traverse().unwrap());
}

#[test]
fn test_path_overlay_rendering() {
    let mut maze = "size\n3\ngrid\nS 1 1\n0 0 1\nT 1 1\n"
        .parse::<MazeSolver>()
        .unwrap()
        .with_path_marking(PathMarking::Backtrack);

    assert!(maze.traverse().unwrap());
    assert_eq!(maze.render(), "[ √  √  √ ]\n[ +  +  √ ]\n[ √  √  √ ]\n");
}

#[test]
fn test_errors_surface_through_public_api() {
    let mut maze: MazeSolver = CORRIDOR.parse().unwrap();
    assert_eq!(
        maze.mark_visited(Position::new(-1, -1)),
        Err(MazeError::InvalidPosition(Position::new(-1, -1)))
    );
    assert!(matches!(
        "size\n2\ngrid\n1 1 1\n".parse::<MazeSolver>(),
        Err(ParseError::MissingData(_))
    ));
}
