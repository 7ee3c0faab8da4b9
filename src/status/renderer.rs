use serde::Serialize;
use thiserror::Error;

use crate::timing::schedule::StoreStatus;

pub const REGULAR_OPEN: &str = "Abierto ahora - Cierra 19:00";
pub const REGULAR_CLOSED: &str = "Cerrado ahora - Abre 09:00";
pub const SUNDAY_OPEN: &str = "Abierto ahora - Cierra 14:00";
pub const SUNDAY_CLOSED: &str = "Cerrado ahora - Abre 10:00";
pub const FALLBACK_CLOSED: &str = "Cerrado ahora";

#[derive(Debug, Error)]
pub enum StatusError {
    #[error("Status evaluation panicked: {0}")]
    Panicked(String),
}

/// Style selector paired with the status text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum StatusClass {
    #[serde(rename = "status-open")]
    Open,
    #[serde(rename = "status-closed")]
    Closed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusDisplay {
    text: &'static str,
    class: StatusClass,
    #[serde(flatten)]
    status: Option<StoreStatus>,
}

impl StatusDisplay {
    pub fn text(&self) -> &'static str {
        self.text
    }

    pub fn class(&self) -> StatusClass {
        self.class
    }

    pub fn fallback() -> Self {
        Self {
            text: FALLBACK_CLOSED,
            class: StatusClass::Closed,
            status: None,
        }
    }
}

/// Picks the display for an evaluation outcome. Any error shows as closed.
pub fn render(outcome: Result<StoreStatus, StatusError>) -> StatusDisplay {
    let Ok(status) = outcome else {
        return StatusDisplay::fallback();
    };
    let (text, class) = match (status.is_open, status.is_sunday) {
        (true, false) => (REGULAR_OPEN, StatusClass::Open),
        (false, false) => (REGULAR_CLOSED, StatusClass::Closed),
        (true, true) => (SUNDAY_OPEN, StatusClass::Open),
        (false, true) => (SUNDAY_CLOSED, StatusClass::Closed),
    };
    StatusDisplay {
        text,
        class,
        status: Some(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::{moment::Moment, schedule::evaluate};

    fn render_at(day: u8, hour: u8, minute: u8) -> StatusDisplay {
        render(Ok(evaluate(Moment::new(day, hour, minute).unwrap())))
    }

    #[test]
    fn literal_scenarios() {
        let monday_open = render_at(1, 9, 0);
        assert_eq!(monday_open.text(), "Abierto ahora - Cierra 19:00");
        assert_eq!(monday_open.class(), StatusClass::Open);

        let monday_closed = render_at(1, 19, 0);
        assert_eq!(monday_closed.text(), "Cerrado ahora - Abre 09:00");
        assert_eq!(monday_closed.class(), StatusClass::Closed);

        let sunday_open = render_at(0, 10, 0);
        assert_eq!(sunday_open.text(), "Abierto ahora - Cierra 14:00");
        assert_eq!(sunday_open.class(), StatusClass::Open);

        assert_eq!(render_at(0, 14, 0).text(), "Cerrado ahora - Abre 10:00");
        assert_eq!(render_at(0, 9, 59).text(), "Cerrado ahora - Abre 10:00");
        assert_eq!(render_at(0, 9, 59).class(), StatusClass::Closed);
    }

    #[test]
    fn errors_render_closed() {
        let display = render(Err(StatusError::Panicked("boom".to_string())));
        assert_eq!(display.text(), "Cerrado ahora");
        assert_eq!(display.class(), StatusClass::Closed);
        assert_eq!(display, StatusDisplay::fallback());
    }

    #[test]
    fn serializes_for_the_page() {
        let json = serde_json::to_value(render_at(1, 9, 0)).unwrap();
        assert_eq!(json["text"], "Abierto ahora - Cierra 19:00");
        assert_eq!(json["class"], "status-open");
        assert_eq!(json["is_open"], true);
        assert_eq!(json["is_sunday"], false);

        let json = serde_json::to_value(StatusDisplay::fallback()).unwrap();
        assert_eq!(json["class"], "status-closed");
        assert!(json.get("is_open").is_none());
    }
}
