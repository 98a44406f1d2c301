use std::io;
use thiserror::Error;

/// Reasons a single command line is rejected.
///
/// The `Display` text of each variant is the exact diagnostic line printed to
/// the user. Every variant leaves the robot state untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Empty line, unknown keyword, or arguments on a command that takes none.
    #[error("Invalid command.")]
    InvalidCommand,

    /// A command other than PLACE or REPORT arrived before any PLACE.
    #[error("The first command has to be PLACE.")]
    PlaceRequired,

    /// PLACE without an argument, or with more than one argument word.
    #[error("Invalid PLACE command.")]
    InvalidPlaceCommand,

    /// Wrong number of PLACE tokens, or an unknown facing.
    #[error("Invalid placement.")]
    InvalidPlacement,

    /// PLACE or MOVE targeting a cell off the table.
    #[error("Invalid placement, coordinates out of bounds.")]
    OutOfBounds,

    /// PLACE with an X or Y that does not parse as an integer.
    #[error("Invalid placement, coordinates are not integers.")]
    NonIntegerCoordinates,
}

/// Failures of a line source.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The command file path is not a regular file.
    #[error("No such file exists..")]
    MissingInputFile,

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
