//! Tokenising and parsing of raw command lines.

use crate::error::CommandError;
use crate::robot::Heading;
use glam::IVec2;

/// Command names understood by the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verb {
    /// Put a robot on the table (`PLACE X,Y,F`).
    Place,
    /// Step one cell forward.
    Move,
    /// Quarter turn counter-clockwise.
    Left,
    /// Quarter turn clockwise.
    Right,
    /// Print `x,y,FACING`.
    Report,
}

impl Verb {
    /// Matches an upper-cased token against the known command names.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "PLACE" => Some(Self::Place),
            "MOVE" => Some(Self::Move),
            "LEFT" => Some(Self::Left),
            "RIGHT" => Some(Self::Right),
            "REPORT" => Some(Self::Report),
            _ => None,
        }
    }
}

/// Shape of an input line after normalisation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Line {
    /// A single token, e.g. `MOVE`. An empty line is a single empty token.
    Single(String),
    /// A command token followed by one argument blob, e.g. `PLACE 1,2,EAST`.
    WithArgs { verb: String, args: String },
    /// Three or more tokens.
    Malformed,
}

impl Line {
    /// Upper-cases and trims `raw`, then splits it on single spaces.
    ///
    /// Runs of spaces are not collapsed: `PLACE  1,2,NORTH` has three tokens.
    pub fn tokenize(raw: &str) -> Self {
        let normalized = raw.to_uppercase();
        let tokens: Vec<&str> = normalized.trim().split(' ').collect();
        match tokens.as_slice() {
            [token] => Self::Single((*token).to_string()),
            [verb, args] => Self::WithArgs {
                verb: (*verb).to_string(),
                args: (*args).to_string(),
            },
            _ => Self::Malformed,
        }
    }
}

/// A validated `PLACE` request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub position: IVec2,
    pub facing: Heading,
}

impl Placement {
    /// Parses the `X,Y,F` argument blob of a `PLACE` command for a table of
    /// size `limits`.
    ///
    /// Coordinates are checked before the facing, so `PLACE 9,9,UP` reports
    /// the range error.
    pub fn parse(args: &str, limits: IVec2) -> Result<Self, CommandError> {
        let fields: Vec<&str> = args.split(',').map(str::trim).collect();
        let [x, y, facing] = fields.as_slice() else {
            return Err(CommandError::InvalidPlaceArguments);
        };

        let out_of_range = CommandError::CoordinatesOutOfRange {
            max_x: limits.x - 1,
            max_y: limits.y - 1,
        };
        let (Some(x), Some(y)) = (parse_coordinate(x, limits.x), parse_coordinate(y, limits.y))
        else {
            return Err(out_of_range);
        };

        Ok(Self {
            position: IVec2::new(x, y),
            facing: facing.parse()?,
        })
    }
}

/// Accepts canonical decimal integers in `[0, limit)`: digits only, no sign,
/// no leading zeros.
fn parse_coordinate(field: &str, limit: i32) -> Option<i32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if field.len() > 1 && field.starts_with('0') {
        return None;
    }
    field.parse::<i32>().ok().filter(|&v| v < limit)
}
