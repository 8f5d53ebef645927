use clap::{Args, Subcommand};

#[derive(Args)]
pub struct BookingsCommands {
    #[command(subcommand)]
    pub command: BookingsSubcommands,
}

#[derive(Subcommand)]
pub enum BookingsSubcommands {
    /// List bookings, one page at a time
    List {
        /// Only bookings with this status (unconfirmed, checked-in, checked-out)
        #[arg(short, long)]
        status: Option<String>,
        /// Sort as <field>-<asc|desc>, e.g. startDate-desc or totalPrice-asc
        #[arg(long)]
        sort: Option<String>,
        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Show one booking with its cabin and guest
    Show {
        /// Booking id
        id: i64,
    },
    /// Delete a booking
    Delete {
        /// Booking id
        id: i64,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Check a guest in
    CheckIn {
        /// Booking id
        id: i64,
        /// Add breakfast for the whole stay
        #[arg(long)]
        breakfast: bool,
        /// Confirm that the guest has paid the total amount
        #[arg(long)]
        confirm_paid: bool,
    },
    /// Check a guest out
    CheckOut {
        /// Booking id
        id: i64,
    },
}
