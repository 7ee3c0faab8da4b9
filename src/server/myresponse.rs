use serde::Serialize;

use crate::page::theme::Theme;

/// Body of the /api/advice endpoint.
#[derive(Serialize, Clone)]
pub struct AdviceResponse {
    option: String,
    url: String,
}

impl AdviceResponse {
    pub fn new(option: String, url: String) -> Self {
        Self { option, url }
    }
}

/// Body of the /api/theme endpoint.
#[derive(Serialize, Clone)]
pub struct ThemeResponse {
    theme: &'static str,
}

impl ThemeResponse {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme: theme.as_str(),
        }
    }
}
