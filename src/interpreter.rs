//! Interpreter that applies textual commands to a [`RobotState`].
//!
//! The entry point is [`RobotInterpreter`]. Build it from a [`TableConfig`], then
//! feed it one raw line at a time through [`RobotInterpreter::execute`].

use crate::error::CommandError;
use crate::robot::{Facing, RobotOp, RobotState};
use crate::table::{Table, TableConfig};
use glam::IVec2;
use tracing::debug;

/// Executes robot commands against a single table.
///
/// The interpreter owns the robot state for its whole lifetime. A rejected
/// command never changes that state.
#[derive(Clone, Debug)]
pub struct RobotInterpreter {
    table: Table,
    state: RobotState,
    /// Set once any PLACE keyword has been seen, valid argument or not.
    place_seen: bool,
}

impl Default for RobotInterpreter {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}

impl RobotInterpreter {
    /// Creates an interpreter with an unplaced robot.
    pub fn new(config: TableConfig) -> Self {
        Self {
            table: Table::new(config),
            state: RobotState::Unplaced,
            place_seen: false,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn state(&self) -> RobotState {
        self.state
    }

    /// Parses and applies one raw command line.
    ///
    /// Keywords and facings are case-insensitive and surrounding whitespace is
    /// ignored. Returns `Ok(Some(state))` for REPORT, whose `Display` is the
    /// line to print, and `Ok(None)` for commands with no output.
    ///
    /// # Ordering
    ///
    /// Until a PLACE keyword has been seen, every command other than PLACE and
    /// REPORT is rejected with [`CommandError::PlaceRequired`]. The PLACE need
    /// not succeed: `PLACE abc` opens the gate just like a valid placement.
    ///
    /// MOVE, LEFT and RIGHT are silently ignored while the robot is unplaced.
    pub fn execute(&mut self, line: &str) -> Result<Option<RobotState>, CommandError> {
        let result = self.dispatch(line);
        match &result {
            Ok(_) => debug!(command = line.trim(), state = ?self.state, "executed"),
            Err(err) => debug!(command = line.trim(), %err, "rejected"),
        }
        result
    }

    fn dispatch(&mut self, line: &str) -> Result<Option<RobotState>, CommandError> {
        let mut words = line.split_whitespace();
        let keyword = words.next().ok_or(CommandError::InvalidCommand)?;
        let args: Vec<&str> = words.collect();

        let op = keyword.parse::<RobotOp>();
        if !self.place_seen {
            match op {
                Ok(RobotOp::Place) => self.place_seen = true,
                Ok(RobotOp::Report) => {}
                _ => return Err(CommandError::PlaceRequired),
            }
        }

        match (op?, args.as_slice()) {
            (RobotOp::Place, [placement]) => self.place(placement)?,
            (RobotOp::Place, _) => return Err(CommandError::InvalidPlaceCommand),
            (_, [_, ..]) => return Err(CommandError::InvalidCommand),
            (RobotOp::Move, []) => self.advance()?,
            (RobotOp::Left, []) => self.turn(Facing::left),
            (RobotOp::Right, []) => self.turn(Facing::right),
            (RobotOp::Report, []) => return Ok(Some(self.state)),
        }
        Ok(None)
    }

    /// Handles the `X,Y,F` argument of PLACE.
    fn place(&mut self, placement: &str) -> Result<(), CommandError> {
        let tokens: Vec<&str> = placement.split(',').collect();
        let [x, y, facing] = tokens[..] else {
            return Err(CommandError::InvalidPlacement);
        };

        let (Ok(x), Ok(y)) = (x.parse::<i32>(), y.parse::<i32>()) else {
            return Err(CommandError::NonIntegerCoordinates);
        };
        let position = IVec2::new(x, y);
        if !self.table.contains(position) {
            return Err(CommandError::OutOfBounds);
        }
        let facing = facing.parse::<Facing>()?;

        self.state = RobotState::Placed { position, facing };
        Ok(())
    }

    /// Steps one cell forward, refusing to leave the table.
    fn advance(&mut self) -> Result<(), CommandError> {
        if let RobotState::Placed { position, facing } = self.state {
            let target = position + facing.step();
            if !self.table.contains(target) {
                return Err(CommandError::OutOfBounds);
            }
            self.state = RobotState::Placed {
                position: target,
                facing,
            };
        }
        Ok(())
    }

    fn turn(&mut self, rotate: fn(Facing) -> Facing) {
        if let RobotState::Placed { facing, .. } = &mut self.state {
            *facing = rotate(*facing);
        }
    }
}
