pub mod actions;
pub mod executor;
pub mod plugin;
pub mod queue;
pub mod result_log;
pub mod results;

pub use actions::*;
pub use executor::{execute_queued_commands, execute_single};
pub use plugin::ParkingCommandsPlugin;
pub use queue::*;
pub use result_log::{CommandResultLog, LoggedCommand};
pub use results::*;
