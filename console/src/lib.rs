//! Terminal operator console for the robot.
//!
//! Wires the control link and the map view together and stands in for the
//! page around them: stdin lines play the command buttons, the log plays
//! the readout widgets.

pub mod readout;
pub mod teleop;

pub use readout::LogReadout;
