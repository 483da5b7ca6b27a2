mod common;

use solvemaze_lib::{
    load_maze, parse_maze, require_solution, solve, solve_path, CyclePolicy, Error, NumberMode,
    Result, SolveOptions, Step,
};

use common::{fixtures_dir, graph_from};

fn path_of(lines: &[&str]) -> Option<String> {
    let graph = graph_from(lines);
    solve(&graph, &SolveOptions::default())
        .expect("search terminates")
        .map(|solution| solution.path_string())
}

#[test]
fn solves_two_choice_maze() {
    assert_eq!(
        path_of(&["1a 2", "1b x", "2a e", "2b x"]).as_deref(),
        Some(" 1a 2a")
    );
}

#[test]
fn first_child_in_file_order_wins() {
    assert_eq!(path_of(&["1a e", "1b 2", "2a e"]).as_deref(), Some(" 1a"));
}

#[test]
fn longer_earlier_route_beats_shorter_later_route() {
    assert_eq!(
        path_of(&["1a 2", "1b e", "2a 3", "3a e"]).as_deref(),
        Some(" 1a 2a 3a")
    );
}

#[test]
fn backtracks_out_of_cul_de_sac() {
    assert_eq!(
        path_of(&["1a 2", "1b 3", "2a 4", "3a e"]).as_deref(),
        Some(" 1b 3a")
    );
}

#[test]
fn start_without_children_has_no_solution() {
    assert_eq!(path_of(&["2a e"]), None);
}

#[test]
fn unsolvable_fixture_yields_none() -> Result<()> {
    let maze = load_maze(&fixtures_dir().join("unsolvable.txt"), NumberMode::Strict)?;
    assert_eq!(solve(&maze.graph, &SolveOptions::default())?, None);

    let error = require_solution(&maze.graph, &SolveOptions::default()).expect_err("no path");
    assert!(matches!(error, Error::NoSolution { start: 1 }));
    Ok(())
}

#[test]
fn solution_is_deterministic() {
    let graph = graph_from(&["1a 2", "1b 3", "2a x", "2b e", "3a e"]);
    let options = SolveOptions::default();

    let first = solve(&graph, &options).expect("terminates");
    let second = solve(&graph, &options).expect("terminates");
    assert_eq!(first, second);
    assert_eq!(
        first.expect("path exists").steps,
        vec![
            Step {
                node: 1,
                direction: "a".to_string(),
            },
            Step {
                node: 2,
                direction: "b".to_string(),
            },
        ]
    );
}

#[test]
fn pruned_cycle_reports_no_solution() {
    assert_eq!(path_of(&["1a 2", "2a 1"]), None);
}

#[test]
fn pruned_cycle_still_finds_later_exit() {
    assert_eq!(
        path_of(&["1a 2", "2a 1", "2b e"]).as_deref(),
        Some(" 1a 2b")
    );
}

#[test]
fn self_loop_is_pruned() {
    assert_eq!(path_of(&["1a 1", "1b e"]).as_deref(), Some(" 1b"));
}

#[test]
fn followed_cycle_hits_depth_limit() {
    let graph = graph_from(&["1a 2", "2a 1"]);
    let options = SolveOptions {
        max_depth: 50,
        cycles: CyclePolicy::Follow,
        ..SolveOptions::default()
    };

    let error = solve(&graph, &options).expect_err("cycle never terminates on its own");
    assert!(matches!(error, Error::DepthLimitExceeded { limit: 50 }));
    assert!(error.to_string().contains("50"));
}

#[test]
fn depth_limit_applies_to_long_acyclic_paths() {
    let mut lines: Vec<String> = (1..20).map(|k| format!("{k}a {}", k + 1)).collect();
    lines.push("20a e".to_string());
    let maze = parse_maze(&lines, NumberMode::Strict);

    let roomy = SolveOptions {
        max_depth: 20,
        ..SolveOptions::default()
    };
    let solution = solve(&maze.graph, &roomy)
        .expect("within limit")
        .expect("chain reaches exit");
    assert_eq!(solution.step_count(), 20);

    let tight = SolveOptions {
        max_depth: 19,
        ..SolveOptions::default()
    };
    assert!(matches!(
        solve(&maze.graph, &tight),
        Err(Error::DepthLimitExceeded { limit: 19 })
    ));
}

#[test]
fn depth_limit_counts_the_exit_step() {
    let graph = graph_from(&["1a 2", "2a e"]);
    let one_step = SolveOptions {
        max_depth: 1,
        ..SolveOptions::default()
    };
    assert!(matches!(
        solve(&graph, &one_step),
        Err(Error::DepthLimitExceeded { limit: 1 })
    ));

    let exit_at_start = graph_from(&["1a e"]);
    let no_steps = SolveOptions {
        max_depth: 0,
        ..SolveOptions::default()
    };
    assert!(matches!(
        solve(&exit_at_start, &no_steps),
        Err(Error::DepthLimitExceeded { limit: 0 })
    ));

    let two_steps = SolveOptions {
        max_depth: 2,
        ..SolveOptions::default()
    };
    let solution = solve(&graph, &two_steps)
        .expect("within limit")
        .expect("path exists");
    assert_eq!(solution.path_string(), " 1a 2a");
}

#[test]
fn lenient_zero_target_acts_as_dead_end() {
    let maze = parse_maze(["1a zz", "1b e"], NumberMode::Lenient);
    assert!(maze.report.is_clean());

    let solution = solve(&maze.graph, &SolveOptions::default())
        .expect("terminates")
        .expect("second choice exits");
    assert_eq!(solution.path_string(), " 1b");
}

#[test]
fn solve_path_appends_to_prefix_from_any_start() -> Result<()> {
    let graph = graph_from(&["1a 2", "1b x", "2a e", "2b x"]);
    let options = SolveOptions::default();

    assert_eq!(
        solve_path(&graph, 1, "Route:", &options)?.as_deref(),
        Some("Route: 1a 2a")
    );
    assert_eq!(solve_path(&graph, 2, "", &options)?.as_deref(), Some(" 2a"));
    assert_eq!(solve_path(&graph, 7, "", &options)?, None);
    Ok(())
}

#[test]
fn solution_serializes_path_and_steps() {
    let graph = graph_from(&["1a 2", "2a e"]);
    let solution = solve(&graph, &SolveOptions::default())
        .expect("terminates")
        .expect("path exists");

    let value = serde_json::to_value(&solution).expect("serialize");
    assert_eq!(value["start"], 1);
    assert_eq!(value["step_count"], 2);
    assert_eq!(value["path"], " 1a 2a");
    assert_eq!(value["steps"][1]["node"], 2);
    assert_eq!(value["steps"][1]["direction"], "a");
}

#[test]
fn fixture_maze_follows_first_branch() -> Result<()> {
    let maze = load_maze(
        &fixtures_dir().join("maze20240526.txt"),
        NumberMode::Strict,
    )?;
    let solution = require_solution(&maze.graph, &SolveOptions::default())?;

    assert_eq!(solution.path_string(), " 1a 2b 4b 7a 9b 12b");
    assert_eq!(solution.to_string(), solution.path_string());
    Ok(())
}
