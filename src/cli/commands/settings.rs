use clap::{Args, Subcommand};

#[derive(Args)]
pub struct SettingsCommands {
    #[command(subcommand)]
    pub command: SettingsSubcommands,
}

#[derive(Subcommand)]
pub enum SettingsSubcommands {
    /// Show current hotel settings
    Show,
    /// Set the value of a specific setting
    Set {
        /// Setting name (min-nights, max-nights, max-guests, breakfast-price)
        name: String,
        /// Setting value
        value: String,
    },
}
