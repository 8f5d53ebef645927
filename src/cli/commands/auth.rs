use clap::{Args, Subcommand};

#[derive(Args)]
pub struct AuthCommands {
    #[command(subcommand)]
    pub command: AuthSubcommands,
}

#[derive(Subcommand)]
pub enum AuthSubcommands {
    /// Configure the backend URL and project key
    Setup {
        /// Backend base URL (e.g., https://yourproject.supabase.co)
        #[arg(long)]
        url: Option<String>,
        /// Public anon key of the project
        #[arg(long)]
        anon_key: Option<String>,
    },
    /// Create a new staff user
    Signup {
        /// Full name of the new user
        #[arg(long)]
        full_name: Option<String>,
        /// Email address
        #[arg(long)]
        email: Option<String>,
    },
    /// Sign in with email and password
    Login {
        /// Email address
        #[arg(long)]
        email: Option<String>,
    },
    /// Sign out and forget the stored session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Update full name, password or avatar of the signed-in user
    Update {
        /// New full name
        #[arg(long)]
        full_name: Option<String>,
        /// Prompt for a new password
        #[arg(long)]
        password: bool,
        /// Image file to use as avatar
        #[arg(long)]
        avatar: Option<String>,
    },
}
