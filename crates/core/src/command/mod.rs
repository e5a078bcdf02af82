pub mod build_command;

pub use build_command::BuildCommand;
