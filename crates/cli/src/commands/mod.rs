pub mod build;
pub mod init;
pub mod resolve;

pub use build::build_command;
pub use init::init_command;
pub use resolve::resolve_command;
