//! Text protocol front end for tetrad.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, EngineOption, GoParams, parse_command};
pub use error::ProtocolError;
pub use session::Session;
