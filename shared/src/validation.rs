use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::constants::NON_PRIZE_SENTINELS;

static NON_PRIZE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternatives: Vec<String> = NON_PRIZE_SENTINELS
        .iter()
        .map(|sentinel| regex::escape(sentinel))
        .collect();
    Regex::new(&format!("(?i){}", alternatives.join("|")))
        .expect("sentinel pattern is built from escaped literals")
});

pub fn validate_prize_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("empty_prize_name"));
    }
    Ok(())
}

/// True when a prize name means "no prize" and should skip the announcement.
pub fn is_non_prize(name: &str) -> bool {
    NON_PRIZE_PATTERN.is_match(name)
}

/// Form payload of the configuration panel's "add" action.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewPrizeRequest {
    #[validate(custom = "validate_prize_name")]
    pub name: String,
}

impl NewPrizeRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }
}
