pub mod settings;

pub use settings::{SETTINGS_FILENAME, Settings};
