//! Line grammar for maze descriptions.
//!
//! Each directive line names one choice out of a decision point:
//!
//! ```text
//! <digits><direction> <target>
//! target ::= "x" | "e" | <digits>
//! ```
//!
//! `1a 2` means direction `a` out of node 1 leads to node 2, `1b x` is a dead
//! end and `2a e` reaches the exit. Blank lines and lines starting with `#`
//! are ignored.

use crate::error::LineError;
use crate::graph::{NodeId, Target};

const DEAD_END_TOKEN: &str = "x";
const EXIT_TOKEN: &str = "e";

/// How numeric tokens that fail to parse are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberMode {
    /// Reject the line with a [`LineError`].
    #[default]
    Strict,
    /// Substitute node id `0` and keep going.
    Lenient,
}

/// Why a line produced no edge without being malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Blank,
    Comment,
    /// Target `x`: the choice is recognised but never stored.
    DeadEnd { source: NodeId, direction: String },
}

/// A directive that becomes one graph edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEdge {
    pub source: NodeId,
    pub direction: String,
    pub target: Target,
}

/// Classification of a single raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineResult {
    Skip(SkipReason),
    Malformed(LineError),
    Edge(ParsedEdge),
}

/// Parse a line with strict numeric handling.
pub fn parse_line(raw: &str) -> LineResult {
    parse_line_with(raw, NumberMode::Strict)
}

/// Parse a line using the given numeric handling mode.
pub fn parse_line_with(raw: &str, mode: NumberMode) -> LineResult {
    let line = raw.trim();
    if line.is_empty() {
        return LineResult::Skip(SkipReason::Blank);
    }
    if line.starts_with('#') {
        return LineResult::Skip(SkipReason::Comment);
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    let [source_token, target_token] = fields.as_slice() else {
        return LineResult::Malformed(LineError::FieldCount {
            found: fields.len(),
        });
    };

    let (source, direction) = match split_source(source_token, mode) {
        Ok(parts) => parts,
        Err(error) => return LineResult::Malformed(error),
    };

    let target = match *target_token {
        DEAD_END_TOKEN => {
            return LineResult::Skip(SkipReason::DeadEnd { source, direction });
        }
        EXIT_TOKEN => Target::Exit,
        token => match parse_target(token, mode) {
            Some(target) => target,
            None => {
                return LineResult::Malformed(LineError::InvalidTarget {
                    token: token.to_string(),
                })
            }
        },
    };

    LineResult::Edge(ParsedEdge {
        source,
        direction,
        target,
    })
}

/// Split a token like `12a` into its node id and direction label.
///
/// Everything after the leading digits is the direction, which may be empty.
fn split_source(token: &str, mode: NumberMode) -> Result<(NodeId, String), LineError> {
    let digits_end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    let (digits, direction) = token.split_at(digits_end);

    let id = match parse_node_id(digits, mode) {
        Some(id) => id,
        None => {
            return Err(LineError::MissingNodeId {
                token: token.to_string(),
            })
        }
    };
    Ok((id, direction.to_string()))
}

/// Resolve a numeric target token.
///
/// Lenient mode accepts an optional sign: `-1` is the exit marker, any other
/// negative number and anything unparseable (including overflow) becomes
/// node `0`.
fn parse_target(token: &str, mode: NumberMode) -> Option<Target> {
    match mode {
        NumberMode::Strict => parse_node_id(token, mode).map(Target::Node),
        NumberMode::Lenient => Some(match token.parse::<i64>() {
            Ok(-1) => Target::Exit,
            Ok(n) => Target::Node(NodeId::try_from(n).unwrap_or(0)),
            Err(_) => Target::Node(parse_node_id(token, mode).unwrap_or(0)),
        }),
    }
}

fn parse_node_id(token: &str, mode: NumberMode) -> Option<NodeId> {
    let parsed = if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        token.parse::<NodeId>().ok()
    } else {
        None
    };
    match mode {
        NumberMode::Strict => parsed,
        NumberMode::Lenient => Some(parsed.unwrap_or(0)),
    }
}
