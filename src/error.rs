//! Error types. Every [`CommandError`] renders as the advisory line shown to the user.

use thiserror::Error;

/// A command that was rejected. Rejected commands never change table state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Robot not placed. Please use PLACE command first to specify X, Y and F (facing)")]
    NotPlaced,

    #[error("This command requires parameters X,Y,F")]
    MissingPlaceArguments,

    #[error("Command not recognised")]
    Unrecognised,

    #[error("Invalid parameters. Use PLACE X,Y,F")]
    InvalidPlaceArguments,

    /// `max_x`/`max_y` are the largest valid coordinates on each axis.
    #[error("{}", range_message(.max_x, .max_y))]
    CoordinatesOutOfRange { max_x: i32, max_y: i32 },

    #[error("Robot can be facing NORTH, SOUTH, EAST or WEST")]
    InvalidFacing,

    #[error("Wrong command format")]
    WrongFormat,
}

fn range_message(max_x: &i32, max_y: &i32) -> String {
    if max_x == max_y {
        format!("Both coordinates must be within range from 0 to {max_x}")
    } else {
        format!(
            "Coordinates must be within range from 0 to {max_x} for X and from 0 to {max_y} for Y"
        )
    }
}

/// Invalid or unreadable configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("table {axis} must be at least 1, got 0")]
    EmptyDimension { axis: &'static str },

    #[error("table {axis} of {value} exceeds the maximum of {max}")]
    DimensionTooLarge {
        axis: &'static str,
        value: u32,
        max: u32,
    },

    #[error("failed to read config file {}", .path.display())]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config file")]
    Parse(#[from] toml::de::Error),
}
