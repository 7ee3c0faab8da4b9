use url_escape::encode_component;

pub const DEFAULT_WHATSAPP_NUMBER: &str = "5491100000000";

/// The advice selector: at most one option is active at a time.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AdviceSelector {
    selected: Option<String>,
}

impl AdviceSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current selection. An empty option clears it.
    pub fn select(&mut self, option: &str) {
        self.selected = if option.is_empty() {
            None
        } else {
            Some(option.to_string())
        };
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The submit button stays disabled until something is picked.
    pub fn can_submit(&self) -> bool {
        self.selected.is_some()
    }

    /// Builds the pre-filled WhatsApp link for the current selection.
    pub fn submit_link(&self, phone: &str) -> Option<String> {
        let option = self.selected()?;
        let message = format!(
            "Hola, necesito asesoramiento para un espacio con {}.",
            option
        );
        Some(format!(
            "https://wa.me/{}?text={}",
            phone,
            encode_component(&message)
        ))
    }
}
