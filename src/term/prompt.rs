use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::app::Result;

pub const GO_BACK: &str = "< Go back";

/// Present a single-select list and return the chosen index.
pub fn select(label: &str, items: &[&str]) -> Result<usize> {
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .items(items)
        .default(0)
        .interact()?;
    Ok(index)
}

/// Present a single-select list and return the chosen entry.
pub fn select_from(label: &str, items: &[String]) -> Result<String> {
    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .items(items)
        .default(0)
        .interact()?;
    Ok(items[index].clone())
}

/// Prompt for a single search/filter term.
pub fn search_term(label: &str) -> Result<String> {
    let term: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .validate_with(|input: &String| validate_term(input))
        .interact_text()?;
    Ok(term.trim().to_string())
}

/// Prompt for a positive number.
pub fn positive_number(label: &str) -> Result<u32> {
    let value = Input::<u32>::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .validate_with(|n: &u32| {
            if *n > 0 {
                Ok(())
            } else {
                Err("invalid number")
            }
        })
        .interact_text()?;
    Ok(value)
}

fn validate_term(input: &str) -> std::result::Result<(), &'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("search must not be empty");
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err("search must contain a single term");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_term_is_accepted() {
        assert!(validate_term("wisdom").is_ok());
        assert!(validate_term("  wisdom  ").is_ok());
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(validate_term("").is_err());
        assert!(validate_term("   ").is_err());
    }

    #[test]
    fn test_multiple_terms_are_rejected() {
        assert!(validate_term("two words").is_err());
        assert!(validate_term("tab\tseparated").is_err());
    }
}
