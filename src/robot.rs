//! Robot state and the operations it performs on the table.

use crate::error::CommandError;
use glam::IVec2;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the four cardinal headings a robot can face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings in clockwise order, starting from north.
    pub const CLOCKWISE: [Heading; 4] = [
        Heading::North,
        Heading::East,
        Heading::South,
        Heading::West,
    ];

    /// Position of this heading in [`Heading::CLOCKWISE`].
    pub fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }

    /// Unit displacement of a single step in this heading.
    pub fn step(self) -> IVec2 {
        match self {
            Self::North => IVec2::Y,
            Self::East => IVec2::X,
            Self::South => IVec2::NEG_Y,
            Self::West => IVec2::NEG_X,
        }
    }

    /// The heading reached after a quarter turn.
    pub fn turned(self, turn: Turn) -> Heading {
        let offset = match turn {
            Turn::Right => 1,
            Turn::Left => -1,
        };
        let len = Self::CLOCKWISE.len() as isize;
        let idx = (self.index() as isize + offset).rem_euclid(len);
        Self::CLOCKWISE[idx as usize]
    }

    /// Upper-case command name (`NORTH`, `EAST`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heading {
    type Err = CommandError;

    /// Expects an already upper-cased token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::CLOCKWISE
            .into_iter()
            .find(|h| h.name() == s)
            .ok_or(CommandError::InvalidFacing)
    }
}

/// Direction of a quarter turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    /// Counter-clockwise (`LEFT`).
    Left,
    /// Clockwise (`RIGHT`).
    Right,
}

/// A robot standing on the table.
///
/// Holds a copy of the table limits it was placed on, so every mutation can
/// keep `position` inside `[0, limits - 1]` on both axes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Robot {
    /// Current cell, always within the table.
    position: IVec2,

    /// Current heading.
    facing: Heading,

    /// Table width and height.
    limits: IVec2,
}

impl Robot {
    /// Places a robot at `position` on a table of size `limits`.
    ///
    /// The caller validates `position`; it is clamped here as well so the
    /// bounds invariant holds for any input.
    pub fn new(position: IVec2, facing: Heading, limits: IVec2) -> Self {
        Self {
            position: position.clamp(IVec2::ZERO, limits - IVec2::ONE),
            facing,
            limits,
        }
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn facing(&self) -> Heading {
        self.facing
    }

    /// Steps one cell forward. Stepping off an edge leaves the robot on the
    /// boundary cell of that axis.
    pub fn advance(&mut self) {
        let target = self.position + self.facing.step();
        let clamped = target.clamp(IVec2::ZERO, self.limits - IVec2::ONE);
        if clamped != target {
            tracing::trace!(x = target.x, y = target.y, "move clamped at table edge");
        }
        self.position = clamped;
    }

    /// Turns a quarter in place.
    pub fn rotate(&mut self, turn: Turn) {
        self.facing = self.facing.turned(turn);
    }

    /// Status line in the `x,y,FACING` format.
    pub fn report(&self) -> String {
        format!("{},{},{}", self.position.x, self.position.y, self.facing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: IVec2 = IVec2::new(5, 5);

    #[test]
    fn steps_follow_heading() {
        let mut robot = Robot::new(IVec2::new(2, 2), Heading::North, TABLE);
        robot.advance();
        assert_eq!(robot.position(), IVec2::new(2, 3));

        robot.rotate(Turn::Right);
        robot.advance();
        assert_eq!(robot.position(), IVec2::new(3, 3));

        robot.rotate(Turn::Right);
        robot.advance();
        assert_eq!(robot.position(), IVec2::new(3, 2));

        robot.rotate(Turn::Right);
        robot.advance();
        assert_eq!(robot.position(), IVec2::new(2, 2));
    }

    #[test]
    fn clamps_each_axis_at_edges() {
        let corners = [
            (IVec2::new(4, 4), Heading::North),
            (IVec2::new(4, 4), Heading::East),
            (IVec2::new(0, 0), Heading::South),
            (IVec2::new(0, 0), Heading::West),
        ];
        for (start, facing) in corners {
            let mut robot = Robot::new(start, facing, TABLE);
            for _ in 0..10 {
                robot.advance();
            }
            assert_eq!(robot.position(), start, "facing {facing}");
        }
    }

    #[test]
    fn clamps_on_non_square_table() {
        let mut robot = Robot::new(IVec2::new(0, 0), Heading::East, IVec2::new(3, 7));
        for _ in 0..5 {
            robot.advance();
        }
        assert_eq!(robot.position(), IVec2::new(2, 0));
        robot.rotate(Turn::Left);
        for _ in 0..9 {
            robot.advance();
        }
        assert_eq!(robot.position(), IVec2::new(2, 6));
    }

    #[test]
    fn rotation_cycle_closes() {
        for start in Heading::CLOCKWISE {
            for turn in [Turn::Left, Turn::Right] {
                let mut facing = start;
                for _ in 0..4 {
                    facing = facing.turned(turn);
                }
                assert_eq!(facing, start);
            }
            assert_eq!(start.turned(Turn::Right).turned(Turn::Left), start);
            assert_eq!(start.turned(Turn::Left).turned(Turn::Right), start);
        }
    }

    #[test]
    fn turns_wrap_around_cycle() {
        assert_eq!(Heading::West.turned(Turn::Right), Heading::North);
        assert_eq!(Heading::North.turned(Turn::Left), Heading::West);
        assert_eq!(Heading::East.turned(Turn::Left), Heading::North);
    }

    #[test]
    fn parses_heading_names() {
        assert_eq!("SOUTH".parse::<Heading>(), Ok(Heading::South));
        assert_eq!("UP".parse::<Heading>(), Err(CommandError::InvalidFacing));
        assert_eq!("north".parse::<Heading>(), Err(CommandError::InvalidFacing));
    }

    #[test]
    fn serializes_state() {
        let robot = Robot::new(IVec2::new(1, 2), Heading::East, TABLE);
        let value = toml::Value::try_from(&robot).unwrap();
        assert_eq!(value["facing"].as_str(), Some("EAST"));
        assert_eq!(value["position"][0].as_integer(), Some(1));
        assert_eq!(value["position"][1].as_integer(), Some(2));
    }

    #[test]
    fn report_format() {
        let robot = Robot::new(IVec2::new(3, 1), Heading::West, TABLE);
        assert_eq!(robot.report(), "3,1,WEST");
    }
}
