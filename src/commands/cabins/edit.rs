use anyhow::Result;
use colored::*;
use log::info;

use super::create::validate;
use super::image_from_arg;
use crate::cli::commands::cabins::CabinFields;
use crate::commands::AppContext;
use crate::models::{CabinDraft, CabinImage};

pub async fn edit_command(id: i64, fields: CabinFields) -> Result<()> {
    info!("Editing cabin #{}", id);

    let context = AppContext::load().await?;
    let cabins = context.cabins();
    let current = cabins.get_cabin(id).await?;

    let image = match fields.image {
        Some(image) => image_from_arg(&image)?,
        None => CabinImage::Stored(current.image.clone().unwrap_or_default()),
    };

    let draft = validate(CabinDraft {
        name: fields.name.unwrap_or(current.name),
        max_capacity: fields.max_capacity.or(current.max_capacity).unwrap_or(0),
        regular_price: fields.regular_price.or(current.regular_price).unwrap_or(0.0),
        discount: fields.discount.or(current.discount).unwrap_or(0.0),
        description: fields.description.or(current.description).unwrap_or_default(),
        image,
    })?;

    let cabin = cabins.create_or_edit_cabin(draft, Some(id)).await?;
    println!("{} Cabin {} updated", "✓".bright_green().bold(), cabin.name.bright_green().bold());

    Ok(())
}
