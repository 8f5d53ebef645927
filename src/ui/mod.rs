pub mod format;
pub mod prompts;

pub use format::*;
pub use prompts::*;
