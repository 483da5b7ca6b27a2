use std::collections::HashSet;
use std::fmt;

use serde::{Serialize, Serializer};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::{MazeGraph, NodeId, Target, START_NODE};

/// Default cap on the number of steps a path may contain.
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// What the search does when a choice leads back to a node already on the
/// current path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CyclePolicy {
    /// Skip the choice and try the next sibling.
    #[default]
    Prune,
    /// Follow the choice anyway; only the depth cap stops the descent.
    Follow,
}

/// Options controlling a single search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOptions {
    pub start: NodeId,
    pub max_depth: usize,
    pub cycles: CyclePolicy,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            start: START_NODE,
            max_depth: DEFAULT_MAX_DEPTH,
            cycles: CyclePolicy::default(),
        }
    }
}

/// One move along a solved path: leave `node` in `direction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub node: NodeId,
    pub direction: String,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.node, self.direction)
    }
}

/// Path from the start node to the exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub start: NodeId,
    pub steps: Vec<Step>,
}

impl Solution {
    /// Number of choices made along the path.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Render the path as space-separated `{node}{direction}` tokens.
    ///
    /// Every token is preceded by a space, including the first, so a two-step
    /// path reads `" 1a 2a"`.
    pub fn path_string(&self) -> String {
        self.render_with_prefix("")
    }

    /// Render the path appended to `prefix`.
    pub fn render_with_prefix(&self, prefix: &str) -> String {
        let mut rendered = String::from(prefix);
        for step in &self.steps {
            rendered.push(' ');
            rendered.push_str(&step.to_string());
        }
        rendered
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path_string())
    }
}

impl Serialize for Solution {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Repr<'a> {
            start: NodeId,
            step_count: usize,
            path: String,
            steps: &'a [Step],
        }

        Repr {
            start: self.start,
            step_count: self.step_count(),
            path: self.path_string(),
            steps: &self.steps,
        }
        .serialize(serializer)
    }
}

struct Frame {
    node: NodeId,
    next_child: usize,
}

/// Find the first path from `options.start` to the exit.
///
/// Children are tried in insertion order and the first success wins, so the
/// result is the earliest path in file order rather than the shortest one.
/// Returns `Ok(None)` when no branch reaches the exit.
///
/// # Errors
///
/// Returns [`Error::DepthLimitExceeded`] when a candidate path would grow
/// beyond `options.max_depth` steps.
pub fn solve(graph: &MazeGraph, options: &SolveOptions) -> Result<Option<Solution>> {
    let start = options.start;
    let prune = options.cycles == CyclePolicy::Prune;

    let mut stack = vec![Frame {
        node: start,
        next_child: 0,
    }];
    // trail[i] is the step leaving stack[i]; it is one shorter than the stack.
    let mut trail: Vec<Step> = Vec::new();
    let mut on_path: HashSet<NodeId> = HashSet::from([start]);

    debug!(start, cycles = ?options.cycles, max_depth = options.max_depth, "solving maze");

    while let Some(frame) = stack.last_mut() {
        let node = frame.node;
        let Some(edge) = graph.children_of(node).get(frame.next_child) else {
            stack.pop();
            trail.pop();
            if prune {
                on_path.remove(&node);
            }
            continue;
        };
        frame.next_child += 1;

        let next = match edge.target {
            Target::Exit => {
                check_depth(&trail, options)?;
                trail.push(Step {
                    node,
                    direction: edge.direction.clone(),
                });
                debug!(steps = trail.len(), "exit reached");
                return Ok(Some(Solution {
                    start,
                    steps: trail,
                }));
            }
            Target::Node(next) => next,
        };

        if prune && on_path.contains(&next) {
            trace!(from = node, to = next, "skipping choice that closes a cycle");
            continue;
        }
        check_depth(&trail, options)?;

        trail.push(Step {
            node,
            direction: edge.direction.clone(),
        });
        stack.push(Frame {
            node: next,
            next_child: 0,
        });
        if prune {
            on_path.insert(next);
        }
    }

    debug!(start, "no path reaches the exit");
    Ok(None)
}

// Every step, including the final move onto the exit, counts towards the cap.
fn check_depth(trail: &[Step], options: &SolveOptions) -> Result<()> {
    if trail.len() >= options.max_depth {
        return Err(Error::DepthLimitExceeded {
            limit: options.max_depth,
        });
    }
    Ok(())
}

/// Search from `start` and render the path appended to `prefix`.
pub fn solve_path(
    graph: &MazeGraph,
    start: NodeId,
    prefix: &str,
    options: &SolveOptions,
) -> Result<Option<String>> {
    let options = SolveOptions { start, ..*options };
    Ok(solve(graph, &options)?.map(|solution| solution.render_with_prefix(prefix)))
}

/// Like [`solve`], but a missing path is reported as [`Error::NoSolution`].
pub fn require_solution(graph: &MazeGraph, options: &SolveOptions) -> Result<Solution> {
    solve(graph, options)?.ok_or(Error::NoSolution {
        start: options.start,
    })
}
