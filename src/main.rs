use anyhow::Result;
use clap::Parser;
use log::info;

use oasis_admin::cli::commands::{AuthSubcommands, BookingsSubcommands, CabinsSubcommands, SettingsSubcommands};
use oasis_admin::cli::{Cli, Commands};
use oasis_admin::commands::{auth, bookings, cabins, dashboard, settings, today};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger to file (truncate on each run)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("oasis-admin.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let cli = Cli::parse();
    info!("Starting oasis-admin");

    match cli.command {
        Commands::Auth(auth_cmd) => match auth_cmd.command {
            AuthSubcommands::Setup { url, anon_key } => auth::setup_command(url, anon_key).await,
            AuthSubcommands::Signup { full_name, email } => auth::signup_command(full_name, email).await,
            AuthSubcommands::Login { email } => auth::login_command(email).await,
            AuthSubcommands::Logout => auth::logout_command().await,
            AuthSubcommands::Whoami => auth::whoami_command().await,
            AuthSubcommands::Update {
                full_name,
                password,
                avatar,
            } => auth::update_command(full_name, password, avatar).await,
        },
        Commands::Bookings(bookings_cmd) => match bookings_cmd.command {
            BookingsSubcommands::List { status, sort, page } => bookings::list_command(status, sort, page).await,
            BookingsSubcommands::Show { id } => bookings::show_command(id).await,
            BookingsSubcommands::Delete { id, force } => bookings::delete_command(id, force).await,
            BookingsSubcommands::CheckIn {
                id,
                breakfast,
                confirm_paid,
            } => bookings::check_in_command(id, breakfast, confirm_paid).await,
            BookingsSubcommands::CheckOut { id } => bookings::check_out_command(id).await,
        },
        Commands::Cabins(cabins_cmd) => match cabins_cmd.command {
            CabinsSubcommands::List => cabins::list_command().await,
            CabinsSubcommands::Create { fields } => cabins::create_command(fields).await,
            CabinsSubcommands::Edit { id, fields } => cabins::edit_command(id, fields).await,
            CabinsSubcommands::Delete { id, force } => cabins::delete_command(id, force).await,
            CabinsSubcommands::Duplicate { id } => cabins::duplicate_command(id).await,
        },
        Commands::Today => today::today_command().await,
        Commands::Dashboard { days } => dashboard::dashboard_command(days).await,
        Commands::Settings(settings_cmd) => match settings_cmd.command {
            SettingsSubcommands::Show => settings::show_command().await,
            SettingsSubcommands::Set { name, value } => settings::set_command(name, value).await,
        },
    }
}
