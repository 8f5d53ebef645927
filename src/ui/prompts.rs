use anyhow::Result;
use dialoguer::{Input, Password, Select};

/// Interactive confirmation prompt using arrow-key navigable selection
///
/// # Arguments
/// * `prompt` - The question to ask the user
/// * `default_yes` - Whether "Yes" should be the default selection (index 0)
///
/// # Returns
/// * `Ok(true)` if user selects "Yes"
/// * `Ok(false)` if user selects "No"
pub fn prompt_confirmation(prompt: &str, default_yes: bool) -> Result<bool> {
    let items = vec!["Yes", "No"];
    let default_index = if default_yes { 0 } else { 1 };

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default_index)
        .interact()?;

    Ok(selection == 0)
}

pub fn prompt_delete_confirmation(what: &str) -> Result<bool> {
    prompt_confirmation(
        &format!("Delete {}? This cannot be undone.", what),
        false // Default to "No" for safety
    )
}

/// Use the given value, or ask for it
pub fn prompt_text(given: Option<String>, prompt: &str, default: Option<&str>) -> Result<String> {
    if let Some(value) = given {
        return Ok(value);
    }

    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    Ok(input.interact_text()?)
}

pub fn prompt_number<T>(given: Option<T>, prompt: &str, default: Option<T>) -> Result<T>
where
    T: Clone + ToString + std::str::FromStr,
    <T as std::str::FromStr>::Err: ToString,
{
    if let Some(value) = given {
        return Ok(value);
    }

    let mut input = Input::<T>::new().with_prompt(prompt);
    if let Some(default) = default {
        input = input.default(default);
    }
    Ok(input.interact_text()?)
}

pub fn prompt_password() -> Result<String> {
    Ok(Password::new().with_prompt("Password").interact()?)
}

/// New password, typed twice, at least 8 characters
pub fn prompt_new_password() -> Result<String> {
    Ok(Password::new()
        .with_prompt("New password (min 8 characters)")
        .with_confirmation("Repeat password", "Passwords need to match")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.len() >= 8 {
                Ok(())
            } else {
                Err("Password needs a minimum of 8 characters")
            }
        })
        .interact()?)
}
