pub mod check_in;
pub mod check_out;
pub mod delete;
pub mod list;
pub mod show;

pub use check_in::check_in_command;
pub use check_out::check_out_command;
pub use delete::delete_command;
pub use list::list_command;
pub use show::show_command;
