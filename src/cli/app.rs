use super::commands::{AuthCommands, BookingsCommands, CabinsCommands, SettingsCommands};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oasis-admin")]
#[command(about = "Manage bookings, cabins and guests of the Oasis hotel")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Backend setup, sign in and profile
    Auth(AuthCommands),
    /// List, inspect and process bookings
    Bookings(BookingsCommands),
    /// Manage cabins and their images
    Cabins(CabinsCommands),
    /// Guests arriving and leaving today
    Today,
    /// Sales, stays and occupancy over the last days
    Dashboard {
        /// Number of days to look back (defaults to settings.recent_days)
        #[arg(short, long)]
        days: Option<u32>,
    },
    /// Hotel settings
    Settings(SettingsCommands),
}
