use clap::{Args, Subcommand};

#[derive(Args)]
pub struct CabinsCommands {
    #[command(subcommand)]
    pub command: CabinsSubcommands,
}

/// Cabin fields; anything left out is prompted for
#[derive(Args, Debug, Clone, Default)]
pub struct CabinFields {
    /// Cabin name
    #[arg(long)]
    pub name: Option<String>,
    /// Maximum number of guests
    #[arg(long)]
    pub max_capacity: Option<i64>,
    /// Price per night
    #[arg(long)]
    pub regular_price: Option<f64>,
    /// Discount per night
    #[arg(long)]
    pub discount: Option<f64>,
    /// Description shown to guests
    #[arg(long)]
    pub description: Option<String>,
    /// Image file to upload, or URL of an image already in storage
    #[arg(long)]
    pub image: Option<String>,
}

#[derive(Subcommand)]
pub enum CabinsSubcommands {
    /// List all cabins
    List,
    /// Create a cabin
    Create {
        #[command(flatten)]
        fields: CabinFields,
    },
    /// Edit a cabin; unspecified fields keep their value
    Edit {
        /// Cabin id
        id: i64,
        #[command(flatten)]
        fields: CabinFields,
    },
    /// Delete a cabin
    Delete {
        /// Cabin id
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Copy a cabin as "Copy of <name>"
    Duplicate {
        /// Cabin id
        id: i64,
    },
}
