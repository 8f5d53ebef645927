pub mod login;
pub mod logout;
pub mod setup;
pub mod signup;
pub mod update;
pub mod whoami;

pub use login::login_command;
pub use logout::logout_command;
pub use setup::setup_command;
pub use signup::signup_command;
pub use update::update_command;
pub use whoami::whoami_command;
