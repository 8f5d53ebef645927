use anyhow::Result;
use colored::*;
use log::info;

use super::image_from_arg;
use crate::cli::commands::cabins::CabinFields;
use crate::commands::AppContext;
use crate::models::CabinDraft;
use crate::ui::{prompt_number, prompt_text};

pub async fn create_command(fields: CabinFields) -> Result<()> {
    info!("Creating cabin");

    let name = prompt_text(fields.name, "Cabin name", None)?;
    let max_capacity = prompt_number(fields.max_capacity, "Maximum capacity", None)?;
    let regular_price = prompt_number(fields.regular_price, "Regular price", None)?;
    let discount = prompt_number(fields.discount, "Discount", Some(0.0))?;
    let description = prompt_text(fields.description, "Description for website", Some(""))?;
    let image = prompt_text(fields.image, "Cabin photo (file path or stored URL)", None)?;

    let draft = validate(CabinDraft {
        name,
        max_capacity,
        regular_price,
        discount,
        description,
        image: image_from_arg(&image)?,
    })?;

    let context = AppContext::load().await?;
    let cabin = context.cabins().create_or_edit_cabin(draft, None).await?;
    println!(
        "{} Cabin {} created (#{})",
        "✓".bright_green().bold(),
        cabin.name.bright_green().bold(),
        cabin.id
    );

    Ok(())
}

/// Form rules for a cabin
pub(super) fn validate(draft: CabinDraft) -> Result<CabinDraft> {
    if draft.name.trim().is_empty() {
        anyhow::bail!("Cabin name is required");
    }
    if draft.max_capacity < 1 {
        anyhow::bail!("Capacity should be at least 1");
    }
    if draft.regular_price < 1.0 {
        anyhow::bail!("Price should be at least 1");
    }
    if draft.discount < 0.0 || draft.discount > draft.regular_price {
        anyhow::bail!("Discount should be less than regular price");
    }
    Ok(draft)
}
