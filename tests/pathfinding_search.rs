//! Search algorithms over text mazes: optimality, completeness, edge cases

use searchlab::{
    Error,
    pathfinding::{Action, Algorithm, Grid, Position, Solution, Tile},
};

fn solve(algorithm: Algorithm, maze: &str) -> Solution {
    let grid = Grid::parse(maze).unwrap();
    algorithm.search(&grid).unwrap()
}

/// Walking the actions from the start must visit `states` and add up to `cost`
fn assert_consistent(maze: &str, solution: &Solution) {
    let grid = Grid::parse(maze).unwrap();
    let path = solution.path.as_ref().unwrap();
    assert_eq!(path.states.len(), path.actions.len() + 1);
    assert_eq!(path.states.first(), Some(&grid.start()));
    assert_eq!(path.states.last(), Some(&grid.end()));

    let mut pos = grid.start();
    let mut cost = 0;
    for (action, expected) in path.actions.iter().zip(&path.states[1..]) {
        cost += grid.individual_cost(pos, *action).unwrap();
        pos = grid.result(pos, *action).unwrap();
        assert_eq!(pos, *expected);
        assert!(grid.tile(pos).is_some_and(|t| !t.is_wall()));
    }
    assert_eq!(cost, path.cost);
}

/// The short way through the middle crosses expensive tiles; the detour
/// around the outside is longer but cheaper.
const WEIGHTED: &str = "\
A99.
.#9.
.#9B
....";

const OPEN: &str = "\
A.....
......
......
.....B";

const BLOCKED: &str = "\
A.#..
..#..
..#.B";

#[test]
fn test_every_algorithm_finds_a_consistent_path() {
    for algorithm in [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Ucs,
        Algorithm::Greedy,
        Algorithm::Astar,
    ] {
        for maze in [WEIGHTED, OPEN] {
            let solution = solve(algorithm, maze);
            assert!(solution.is_solved(), "{algorithm:?} failed on\n{maze}");
            assert_consistent(maze, &solution);
        }
    }
}

#[test]
fn test_uniform_cost_and_astar_are_optimal() {
    let ucs = solve(Algorithm::Ucs, WEIGHTED);
    let astar = solve(Algorithm::Astar, WEIGHTED);
    // down the left side, along the bottom, up to B
    assert_eq!(ucs.cost(), Some(7));
    assert_eq!(astar.cost(), Some(7));

    // fewest moves crosses the expensive tiles
    let bfs = solve(Algorithm::Bfs, WEIGHTED);
    assert_eq!(bfs.path.as_ref().unwrap().actions.len(), 5);
    assert!(bfs.cost().unwrap() > 7);
}

#[test]
fn test_astar_expands_no_more_than_uniform_cost() {
    let ucs = solve(Algorithm::Ucs, OPEN);
    let astar = solve(Algorithm::Astar, OPEN);
    assert_eq!(ucs.cost(), astar.cost());
    assert!(astar.expanded <= ucs.expanded);
}

#[test]
fn test_bfs_uses_fewest_moves() {
    let bfs = solve(Algorithm::Bfs, OPEN);
    let path = bfs.path.unwrap();
    assert_eq!(path.actions.len(), 8);
    assert_eq!(path.cost, 8);
}

#[test]
fn test_unreachable_goal_has_no_path() {
    for algorithm in Algorithm::ALL {
        let solution = solve(algorithm, BLOCKED);
        assert!(!solution.is_solved(), "{algorithm:?}");
        assert_eq!(solution.cost(), None);
        assert!(solution.reached.contains(&Position::new(0, 0)));
    }
    // the exhaustive searches reach the whole left side
    assert_eq!(solve(Algorithm::Bfs, BLOCKED).reached.len(), 6);
    assert_eq!(solve(Algorithm::Astar, BLOCKED).reached.len(), 6);
}

#[test]
fn test_start_on_goal_is_free() {
    let here = Position::new(0, 0);
    let grid = Grid::new(vec![vec![Tile::Open { cost: 1 }; 3]], here, here).unwrap();
    for algorithm in Algorithm::ALL {
        let solution = algorithm.search(&grid).unwrap();
        let path = solution.path.unwrap();
        assert_eq!(path.cost, 0, "{algorithm:?}");
        assert!(path.actions.is_empty());
        assert_eq!(path.states, vec![grid.start()]);
    }
}

#[test]
fn test_grid_rejects_goal_on_wall_or_outside() {
    let tiles = vec![vec![Tile::Open { cost: 1 }, Tile::Wall, Tile::Open { cost: 1 }]];
    let start = Position::new(0, 0);
    for end in [Position::new(0, 1), Position::new(0, 3), Position::new(1, 0)] {
        assert!(
            matches!(
                Grid::new(tiles.clone(), start, end),
                Err(Error::InvalidGrid { .. })
            ),
            "{end}"
        );
    }

    let grid = Grid::new(tiles, start, Position::new(0, 2)).unwrap();
    assert_eq!((grid.start(), grid.end()), (start, Position::new(0, 2)));
    assert_eq!((grid.height(), grid.width()), (1, 3));
}

#[test]
fn test_go_right_only_moves_right() {
    let solution = solve(Algorithm::GoRight, "A..B");
    let path = solution.path.unwrap();
    assert_eq!(path.actions, vec![Action::Right; 3]);

    assert!(!solve(Algorithm::GoRight, "A.#B").is_solved());
    assert!(!solve(Algorithm::GoRight, "A..\n..B").is_solved());
}

#[test]
fn test_render_marks_path() {
    let grid = Grid::parse("A..\n#.#\n..B").unwrap();
    let solution = Algorithm::Astar.search(&grid).unwrap();
    let rendering = grid.render(Some(&solution));
    let rows: Vec<&str> = rendering.lines().collect();
    assert!(rows[0].starts_with("A*"));
    assert_ne!(rows[0].chars().nth(2), Some('*'));
    assert_eq!(rows[1], "#*#");
    assert!(rows[2].ends_with("*B"));

    assert_eq!(grid.render(None), "A..\n#.#\n..B\n");
}
