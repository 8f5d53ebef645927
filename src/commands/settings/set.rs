use anyhow::Result;
use colored::*;
use log::info;

use crate::commands::AppContext;
use crate::models::SettingsPatch;

/// Set the value of a specific hotel setting
///
/// # Arguments
/// * `name` - Setting name
/// * `value` - Setting value
///
/// # Returns
/// * `Ok(())` - Setting updated successfully
/// * `Err(anyhow::Error)` - Backend error or invalid setting/value
pub async fn set_command(name: String, value: String) -> Result<()> {
    info!("Setting {} to {}", name, value);

    let patch = parse_setting(&name, &value)?;
    let context = AppContext::load().await?;
    context.settings().update_setting(&patch).await?;

    println!("{} Set {} to {}", "✓".bright_green().bold(), name.bright_green(), value);
    Ok(())
}

fn parse_setting(name: &str, value: &str) -> Result<SettingsPatch> {
    let count = || -> Result<i64> {
        let n: i64 = value
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid value for {}: '{}'. Must be a positive integer.", name, value))?;
        if n < 1 {
            anyhow::bail!("{} must be greater than 0", name);
        }
        Ok(n)
    };

    let mut patch = SettingsPatch::default();
    match name {
        "min-nights" => patch.min_booking_length = Some(count()?),
        "max-nights" => patch.max_booking_length = Some(count()?),
        "max-guests" => patch.max_guests_per_booking = Some(count()?),
        "breakfast-price" => {
            let price: f64 = value
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid value for breakfast-price: '{}'", value))?;
            if price < 0.0 {
                anyhow::bail!("breakfast-price cannot be negative");
            }
            patch.breakfast_price = Some(price);
        }
        _ => {
            anyhow::bail!("Unknown setting: {}", name);
        }
    }

    Ok(patch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_settings() {
        assert_eq!(parse_setting("max-guests", "8").unwrap().max_guests_per_booking, Some(8));
        assert_eq!(parse_setting("breakfast-price", "15.5").unwrap().breakfast_price, Some(15.5));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_setting("min-nights", "0").is_err());
        assert!(parse_setting("min-nights", "abc").is_err());
        assert!(parse_setting("colour", "blue").is_err());
    }
}
