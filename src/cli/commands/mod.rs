pub mod auth;
pub mod bookings;
pub mod cabins;
pub mod settings;

pub use auth::{AuthCommands, AuthSubcommands};
pub use bookings::{BookingsCommands, BookingsSubcommands};
pub use cabins::{CabinsCommands, CabinsSubcommands};
pub use settings::{SettingsCommands, SettingsSubcommands};
