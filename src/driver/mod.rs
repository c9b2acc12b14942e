mod console_driver;
mod file_driver;
mod registry;
mod trait_;

pub use console_driver::{ConsoleDriver, ConsoleDriverConfig, Target};
pub use file_driver::{FileDriver, FileDriverConfig};
pub use registry::{register_builtin_drivers, register_driver, resolve_driver};
pub use trait_::WriteDriver;
