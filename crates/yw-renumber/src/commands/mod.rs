//! Command implementations

pub mod renumber;
pub mod show;

pub use self::renumber::{renumber_project, RenumberOptions};
pub use show::show_project;
