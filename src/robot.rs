//! Robot state and the operations the interpreter understands.

use crate::error::CommandError;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four cardinal directions the robot can face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Facing {
    North,
    East,
    South,
    West,
}

impl Facing {
    /// All facings in clockwise order, starting at north.
    pub const ALL: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    /// Rotates 90 degrees counter-clockwise.
    pub fn left(self) -> Self {
        match self {
            Facing::North => Facing::West,
            Facing::West => Facing::South,
            Facing::South => Facing::East,
            Facing::East => Facing::North,
        }
    }

    /// Rotates 90 degrees clockwise.
    pub fn right(self) -> Self {
        match self {
            Facing::North => Facing::East,
            Facing::East => Facing::South,
            Facing::South => Facing::West,
            Facing::West => Facing::North,
        }
    }

    /// Unit step taken by a MOVE in this direction. North is `+y`.
    pub fn step(self) -> IVec2 {
        match self {
            Facing::North => IVec2::Y,
            Facing::East => IVec2::X,
            Facing::South => IVec2::NEG_Y,
            Facing::West => IVec2::NEG_X,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Facing::North => "NORTH",
            Facing::East => "EAST",
            Facing::South => "SOUTH",
            Facing::West => "WEST",
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Facing {
    type Err = CommandError;

    /// Parses a facing token, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Facing::ALL
            .into_iter()
            .find(|facing| facing.as_str().eq_ignore_ascii_case(s))
            .ok_or(CommandError::InvalidPlacement)
    }
}

/// Where the robot is, if anywhere.
///
/// A placed robot always sits on a valid cell of the table it was placed on;
/// the interpreter never commits a position that fails [`Table::contains`](crate::Table::contains).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RobotState {
    /// No successful PLACE yet.
    #[default]
    Unplaced,
    /// On the table at `position`, pointing `facing`.
    Placed { position: IVec2, facing: Facing },
}

impl RobotState {
    pub fn placed(x: i32, y: i32, facing: Facing) -> Self {
        RobotState::Placed {
            position: IVec2::new(x, y),
            facing,
        }
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, RobotState::Placed { .. })
    }

    pub fn position(&self) -> Option<IVec2> {
        match self {
            RobotState::Placed { position, .. } => Some(*position),
            RobotState::Unplaced => None,
        }
    }

    pub fn facing(&self) -> Option<Facing> {
        match self {
            RobotState::Placed { facing, .. } => Some(*facing),
            RobotState::Unplaced => None,
        }
    }
}

/// Renders the REPORT line.
impl fmt::Display for RobotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RobotState::Unplaced => f.write_str("Robot is not placed on the table."),
            RobotState::Placed { position, facing } => write!(
                f,
                "Robot is at ({},{}) facing {}",
                position.x, position.y, facing
            ),
        }
    }
}

/// Operations that can be performed on the robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RobotOp {
    /// Put the robot on the table (`PLACE X,Y,F`).
    Place,
    /// Step one cell forward (`MOVE`).
    Move,
    /// Turn 90 degrees counter-clockwise (`LEFT`).
    Left,
    /// Turn 90 degrees clockwise (`RIGHT`).
    Right,
    /// Print the current state (`REPORT`).
    Report,
}

impl RobotOp {
    pub fn keyword(self) -> &'static str {
        match self {
            RobotOp::Place => "PLACE",
            RobotOp::Move => "MOVE",
            RobotOp::Left => "LEFT",
            RobotOp::Right => "RIGHT",
            RobotOp::Report => "REPORT",
        }
    }
}

impl FromStr for RobotOp {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            RobotOp::Place,
            RobotOp::Move,
            RobotOp::Left,
            RobotOp::Right,
            RobotOp::Report,
        ]
        .into_iter()
        .find(|op| op.keyword().eq_ignore_ascii_case(s))
        .ok_or(CommandError::InvalidCommand)
    }
}
