pub mod set;
pub mod show;

pub use set::set_command;
pub use show::show_command;
