// tests/session.rs
use std::io::{Cursor, Write};
use toy_robot::{Facing, RobotInterpreter, RobotState, Session, SessionError, is_exit};

fn setup() -> Session<Vec<u8>> {
    Session::new(RobotInterpreter::default(), Vec::new())
}

fn output(session: Session<Vec<u8>>) -> (RobotState, String) {
    let (interpreter, out) = session.into_parts();
    (interpreter.state(), String::from_utf8(out).unwrap())
}

#[test]
fn test_exit_sentinel() {
    assert!(is_exit("EXIT"));
    assert!(is_exit("exit"));
    assert!(is_exit("  Exit\r"));
    assert!(!is_exit("EXIT NOW"));
    assert!(!is_exit("EXITS"));
}

#[test]
fn test_console_stops_at_exit() {
    let mut session = setup();
    let input = Cursor::new("PLACE 0,0,NORTH\nMOVE\nREPORT\nexit\nMOVE\nREPORT\n");
    session.run_console(input).unwrap();

    let (state, out) = output(session);
    assert_eq!(out, "Robot is at (0,1) facing NORTH\n");
    assert_eq!(state, RobotState::placed(0, 1, Facing::North));
}

#[test]
fn test_console_runs_to_end_of_input() {
    let mut session = setup();
    let input = Cursor::new("MOVE\nREPORT\nPLACE 9,9,NORTH\nREPORT");
    session.run_console(input).unwrap();

    let (_, out) = output(session);
    assert_eq!(
        out,
        "The first command has to be PLACE.\n\
         Robot is not placed on the table.\n\
         Invalid placement, coordinates out of bounds.\n\
         Robot is not placed on the table.\n"
    );
}

#[test]
fn test_console_survives_invalid_utf8() {
    let mut session = setup();
    let input = Cursor::new(b"PLACE 0,0,NORTH\n\xff\xfe\nMOVE\nREPORT\n".to_vec());
    session.run_console(input).unwrap();
    assert_eq!(
        session.interpreter().state(),
        RobotState::placed(0, 1, Facing::North)
    );

    let (_, out) = output(session);
    assert_eq!(out, "Invalid command.\nRobot is at (0,1) facing NORTH\n");
}

#[test]
fn test_file_survives_invalid_utf8() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"PLACE 0,0,NORTH\nMOVE \xe9\nREPORT\n").unwrap();

    let mut session = setup();
    session.run_file(file.path()).unwrap();

    let (state, out) = output(session);
    assert_eq!(
        out,
        "PLACE 0,0,NORTH\n\
         MOVE \u{FFFD}\nInvalid command.\n\
         REPORT\nRobot is at (0,0) facing NORTH\n"
    );
    assert_eq!(state, RobotState::placed(0, 0, Facing::North));
}

#[test]
fn test_empty_file_runs_nothing() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut session = setup();
    session.run_file(file.path()).unwrap();

    let (state, out) = output(session);
    assert!(out.is_empty());
    assert_eq!(state, RobotState::Unplaced);
}

#[test]
fn test_file_echoes_each_line() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "PLACE 1,2,EAST\nMOVE\nMOVE\nLEFT\nMOVE\nREPORT\nEXIT\nREPORT\n"
    )
    .unwrap();

    let mut session = setup();
    session.run_file(file.path()).unwrap();

    let (state, out) = output(session);
    assert_eq!(
        out,
        "PLACE 1,2,EAST\nMOVE\nMOVE\nLEFT\nMOVE\nREPORT\n\
         Robot is at (3,3) facing NORTH\n\
         EXIT\n"
    );
    assert_eq!(state, RobotState::placed(3, 3, Facing::North));
}

#[test]
fn test_file_diagnostics_follow_echo() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "LEFT\r\nPLACE 0,0,SOUTH\r\nMOVE\r\n").unwrap();

    let mut session = setup();
    session.run_file(file.path()).unwrap();

    let (state, out) = output(session);
    assert_eq!(
        out,
        "LEFT\nThe first command has to be PLACE.\n\
         PLACE 0,0,SOUTH\n\
         MOVE\nInvalid placement, coordinates out of bounds.\n"
    );
    assert_eq!(state, RobotState::placed(0, 0, Facing::South));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = setup();

    let err = session
        .run_file(&dir.path().join("commands.txt"))
        .unwrap_err();
    assert!(matches!(err, SessionError::MissingInputFile));
    assert_eq!(err.to_string(), "No such file exists..");

    // A directory is not a command file either.
    assert!(matches!(
        session.run_file(dir.path()),
        Err(SessionError::MissingInputFile)
    ));

    let (state, out) = output(session);
    assert!(out.is_empty());
    assert_eq!(state, RobotState::Unplaced);
}
