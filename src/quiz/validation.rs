use crate::config::Config;

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref quiz) = config.quiz {
        if let Some(threshold) = quiz.confirm_threshold {
            if !(0.0..=1.0).contains(&threshold) {
                errors.push(format!(
                    "quiz.confirm_threshold: must be between 0 and 1, got {}",
                    threshold
                ));
            }
        }
    }

    if let Some(ref history) = config.history {
        if history.quiz_limit == Some(0) {
            errors.push("history.quiz_limit: must be greater than 0".to_string());
        }
        if history.click_limit == Some(0) {
            errors.push("history.click_limit: must be greater than 0".to_string());
        }
    }

    if let Some(ref site) = config.site {
        if let Some(ref base_url) = site.base_url {
            if base_url.trim().is_empty() {
                errors.push("site.base_url: must not be empty".to_string());
            } else if base_url.chars().any(char::is_whitespace) {
                errors.push(format!(
                    "site.base_url: invalid '{}' - must not contain whitespace",
                    base_url
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
