use anyhow::Result;
use colored::*;
use log::info;

use crate::commands::AppContext;
use crate::ui::{prompt_new_password, prompt_text};

pub async fn signup_command(full_name: Option<String>, email: Option<String>) -> Result<()> {
    info!("Executing auth signup command");

    let context = AppContext::load().await?;
    let full_name = prompt_text(full_name, "Full name", None)?;
    let email = prompt_text(email, "Email address", None)?;
    let password = prompt_new_password()?;

    let signup = context.session().signup(&full_name, &email, &password).await?;

    if signup.session.is_some() {
        println!("{} Signed up and signed in as {}", "✓".bright_green().bold(), email.bright_green());
    } else {
        println!(
            "{} User {} created. Please verify the new account from the user's email address.",
            "✓".bright_green().bold(),
            email.bright_green()
        );
    }
    context.persist_session().await?;

    Ok(())
}
