use anyhow::Result;
use colored::*;
use log::info;
use std::path::Path;

use crate::commands::AppContext;
use crate::api::FileUpload;
use crate::repository::ProfileUpdate;
use crate::ui::prompt_new_password;

pub async fn update_command(full_name: Option<String>, password: bool, avatar: Option<String>) -> Result<()> {
    info!("Executing auth update command");

    if full_name.is_none() && !password && avatar.is_none() {
        anyhow::bail!("Nothing to update. Pass --full-name, --password or --avatar.");
    }
    if full_name.is_some() && password {
        println!(
            "{} Full name and password are updated separately; only the full name is changed now.",
            "⚠".bright_yellow().bold()
        );
    }

    let context = AppContext::load().await?;
    let update = ProfileUpdate {
        password: if password && full_name.is_none() {
            Some(prompt_new_password()?)
        } else {
            None
        },
        full_name,
        avatar: avatar.map(|path| FileUpload::from_path(Path::new(&path))).transpose()?,
    };

    let user = context.session().update_current_user(&update).await?;
    println!(
        "{} Account of {} updated",
        "✓".bright_green().bold(),
        user.email.as_deref().unwrap_or(&user.id).bright_green()
    );

    Ok(())
}
