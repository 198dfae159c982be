//! The table: grid bounds, the robot standing on it, and the command interpreter.
//!
//! The entry point is [`Table`]. Build it from a [`TableConfig`] (or use
//! [`Table::default`] for the standard 5×5 table), then feed it raw lines with
//! [`Table::process_command`]. Responses come back as `Some(line)`; commands that
//! succeed silently return `None`.

use crate::command::{Line, Placement, Verb};
use crate::error::{CommandError, ConfigError};
use crate::robot::{Heading, Robot, Turn};
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Glyph set used by [`Table::map`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapStyle {
    /// Arrow emoji on white squares.
    #[default]
    Emoji,
    /// `^ > v <` on dots.
    Ascii,
}

impl MapStyle {
    fn robot_glyph(self, facing: Heading) -> &'static str {
        match (self, facing) {
            (Self::Emoji, Heading::North) => "⬆️",
            (Self::Emoji, Heading::East) => "➡️",
            (Self::Emoji, Heading::South) => "⬇️",
            (Self::Emoji, Heading::West) => "⬅️",
            (Self::Ascii, Heading::North) => "^",
            (Self::Ascii, Heading::East) => ">",
            (Self::Ascii, Heading::South) => "v",
            (Self::Ascii, Heading::West) => "<",
        }
    }

    fn filler(self) -> &'static str {
        match self {
            Self::Emoji => "⬜",
            Self::Ascii => ".",
        }
    }
}

/// Largest accepted width or height.
pub const MAX_DIMENSION: u32 = 1024;

/// Table construction parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Number of columns. Default: 5.
    pub width: u32,
    /// Number of rows. Default: 5.
    pub height: u32,
    /// Print the map after every command. Only consulted by the console loop.
    pub show_map: bool,
    /// Glyphs used when rendering the map.
    pub map_style: MapStyle,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
            show_map: false,
            map_style: MapStyle::Emoji,
        }
    }
}

impl TableConfig {
    /// Checks that both dimensions lie in `1..=MAX_DIMENSION`.
    pub fn validate(&self) -> Result<IVec2, ConfigError> {
        let axis = |axis: &'static str, value: u32| -> Result<i32, ConfigError> {
            match value {
                0 => Err(ConfigError::EmptyDimension { axis }),
                1..=MAX_DIMENSION => Ok(value as i32),
                _ => Err(ConfigError::DimensionTooLarge {
                    axis,
                    value,
                    max: MAX_DIMENSION,
                }),
            }
        };
        Ok(IVec2::new(axis("width", self.width)?, axis("height", self.height)?))
    }
}

/// A bounded grid holding at most one robot.
#[derive(Clone, Debug)]
pub struct Table {
    limits: IVec2,
    robot: Option<Robot>,
    config: TableConfig,
}

impl Default for Table {
    fn default() -> Self {
        Self {
            limits: IVec2::new(5, 5),
            robot: None,
            config: TableConfig::default(),
        }
    }
}

impl Table {
    /// Creates an empty table with the given configuration.
    pub fn new(config: TableConfig) -> Result<Self, ConfigError> {
        let limits = config.validate()?;
        Ok(Self {
            limits,
            robot: None,
            config,
        })
    }

    pub fn width(&self) -> i32 {
        self.limits.x
    }

    pub fn height(&self) -> i32 {
        self.limits.y
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The robot, if one has been placed.
    pub fn robot(&self) -> Option<&Robot> {
        self.robot.as_ref()
    }

    /// Runs one raw input line and returns the line to show the user, if any.
    ///
    /// Never fails: rejected commands come back as their advisory message and
    /// leave the table untouched.
    pub fn process_command(&mut self, raw: &str) -> Option<String> {
        match self.execute(raw) {
            Ok(response) => {
                tracing::debug!(command = raw, ?response, "command processed");
                response
            }
            Err(err) => {
                tracing::debug!(command = raw, error = ?err, "command rejected");
                Some(err.to_string())
            }
        }
    }

    /// Typed form of [`process_command`](Self::process_command).
    pub fn execute(&mut self, raw: &str) -> Result<Option<String>, CommandError> {
        match Line::tokenize(raw) {
            Line::Single(token) => {
                let robot = self.robot.as_mut().ok_or(CommandError::NotPlaced)?;
                match Verb::from_token(&token).ok_or(CommandError::Unrecognised)? {
                    Verb::Move => {
                        robot.advance();
                        let pos = robot.position();
                        tracing::debug!(x = pos.x, y = pos.y, "robot moved");
                        Ok(None)
                    }
                    Verb::Left => {
                        robot.rotate(Turn::Left);
                        Ok(None)
                    }
                    Verb::Right => {
                        robot.rotate(Turn::Right);
                        Ok(None)
                    }
                    Verb::Report => Ok(Some(robot.report())),
                    Verb::Place => Err(CommandError::MissingPlaceArguments),
                }
            }
            // Only PLACE takes arguments; any other verb with arguments is ignored.
            Line::WithArgs { verb, args } => {
                if Verb::from_token(&verb) == Some(Verb::Place) {
                    let placement = Placement::parse(&args, self.limits)?;
                    self.place(placement);
                }
                Ok(None)
            }
            Line::Malformed => Err(CommandError::WrongFormat),
        }
    }

    /// Replaces any robot on the table with a fresh one.
    fn place(&mut self, placement: Placement) {
        let Placement { position, facing } = placement;
        tracing::debug!(x = position.x, y = position.y, %facing, "robot placed");
        self.robot = Some(Robot::new(position, facing, self.limits));
    }

    /// Renders the grid, top row first, using the configured [`MapStyle`].
    pub fn map(&self) -> String {
        let style = self.config.map_style;
        let mut rows = Vec::with_capacity(self.limits.y as usize);
        for y in (0..self.limits.y).rev() {
            let row: String = (0..self.limits.x)
                .map(|x| match &self.robot {
                    Some(robot) if robot.position() == IVec2::new(x, y) => {
                        style.robot_glyph(robot.facing())
                    }
                    _ => style.filler(),
                })
                .collect();
            rows.push(row);
        }
        rows.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascii_table(width: u32, height: u32) -> Table {
        Table::new(TableConfig {
            width,
            height,
            map_style: MapStyle::Ascii,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn rejects_zero_dimensions() {
        let config = TableConfig {
            height: 0,
            ..Default::default()
        };
        assert!(matches!(
            Table::new(config),
            Err(ConfigError::EmptyDimension { axis: "height" })
        ));
    }

    #[test]
    fn rejects_oversized_dimensions() {
        let config = TableConfig {
            width: u32::MAX,
            ..Default::default()
        };
        assert!(matches!(
            Table::new(config),
            Err(ConfigError::DimensionTooLarge { axis: "width", .. })
        ));
    }

    #[test]
    fn dimension_limit_is_inclusive() {
        let config = TableConfig {
            width: MAX_DIMENSION,
            height: 1,
            ..Default::default()
        };
        let table = Table::new(config).unwrap();
        assert_eq!(table.width(), MAX_DIMENSION as i32);

        let config = TableConfig {
            height: MAX_DIMENSION + 1,
            ..Default::default()
        };
        let err = Table::new(config).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DimensionTooLarge { axis: "height", value: 1025, max: 1024 }
        ));
        assert_eq!(err.to_string(), "table height of 1025 exceeds the maximum of 1024");
    }

    #[test]
    fn typed_errors_match_messages() {
        let mut table = Table::default();
        assert_eq!(table.execute("MOVE"), Err(CommandError::NotPlaced));
        assert_eq!(table.execute("PLACE 1,2,EAST"), Ok(None));
        assert_eq!(table.execute("PLACE"), Err(CommandError::MissingPlaceArguments));
        assert_eq!(table.execute("JUMP"), Err(CommandError::Unrecognised));
        assert_eq!(table.execute("A B C"), Err(CommandError::WrongFormat));
        assert_eq!(table.execute("REPORT"), Ok(Some("1,2,EAST".to_string())));
    }

    #[test]
    fn map_without_robot_is_all_filler() {
        let table = ascii_table(3, 2);
        assert_eq!(table.map(), "...\n...");
    }

    #[test]
    fn map_puts_top_row_first() {
        let mut table = ascii_table(3, 3);
        table.process_command("PLACE 0,2,EAST");
        assert_eq!(table.map(), ">..\n...\n...");

        table.process_command("PLACE 2,0,SOUTH");
        assert_eq!(table.map(), "...\n...\n..v");
    }

    #[test]
    fn map_glyph_tracks_facing() {
        let mut table = ascii_table(2, 1);
        table.process_command("PLACE 1,0,NORTH");
        assert_eq!(table.map(), ".^");
        table.process_command("LEFT");
        assert_eq!(table.map(), ".<");
    }

    #[test]
    fn emoji_map_is_default() {
        let mut table = Table::default();
        table.process_command("PLACE 0,0,NORTH");
        let map = table.map();
        let rows: Vec<&str> = map.lines().collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], "⬜⬜⬜⬜⬜");
        assert_eq!(rows[4], "⬆️⬜⬜⬜⬜");
    }
}
