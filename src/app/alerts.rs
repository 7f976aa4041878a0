//! Transiente Meldungen (Toasts) für Erfolg, Hinweise und Fehler.
//!
//! Es wird immer nur die erste Meldung angezeigt; nach Ablauf der
//! konfigurierten Dauer wird sie entfernt und die nächste rückt nach.

use std::collections::VecDeque;

/// Ersatztext für Fehler ohne Meldung.
pub const UNKNOWN_ERROR: &str = "Unknown error.";

/// Schweregrad einer Meldung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertSeverity {
    Error,
    Warning,
    Info,
    Success,
}

/// Einzelne Meldung
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub message: String,
    pub severity: AlertSeverity,
}

/// Warteschlange der Meldungen
#[derive(Debug, Clone, Default)]
pub struct AlertQueue {
    items: VecDeque<Alert>,
    /// Zeitpunkt (Sekunden, UI-Zeitbasis), seit dem die erste Meldung sichtbar ist
    shown_since: Option<f64>,
}

impl AlertQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt eine Meldung an.
    pub fn push(&mut self, message: impl Into<String>, severity: AlertSeverity) {
        self.items.push_back(Alert {
            message: message.into(),
            severity,
        });
    }

    /// Hängt einen Fehler als Meldung an.
    pub fn push_error(&mut self, error: &anyhow::Error) {
        self.push(error_message(error), AlertSeverity::Error);
    }

    /// Aktuell sichtbare Meldung.
    pub fn first(&self) -> Option<&Alert> {
        self.items.front()
    }

    /// Entfernt die sichtbare Meldung.
    pub fn dismiss_first(&mut self) -> Option<Alert> {
        self.shown_since = None;
        self.items.pop_front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iteriert über alle wartenden Meldungen.
    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.items.iter()
    }

    /// Merkt den Anzeigebeginn der ersten Meldung und meldet deren Ablauf.
    pub fn is_expired(&mut self, now: f64, duration_secs: f64) -> bool {
        if self.items.is_empty() {
            self.shown_since = None;
            return false;
        }
        let since = *self.shown_since.get_or_insert(now);
        now - since >= duration_secs
    }
}

/// Anzeigetext eines Fehlers (`Unknown error.` bei leerem Text).
pub fn error_message(error: &anyhow::Error) -> String {
    let text = error.to_string();
    if text.trim().is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_first_alert_is_visible() {
        let mut alerts = AlertQueue::new();
        alerts.push("one", AlertSeverity::Info);
        alerts.push("two", AlertSeverity::Error);

        assert_eq!(alerts.first().map(|a| a.message.as_str()), Some("one"));
        alerts.dismiss_first();
        assert_eq!(alerts.first().map(|a| a.severity), Some(AlertSeverity::Error));
    }

    #[test]
    fn expiry_starts_when_first_checked() {
        let mut alerts = AlertQueue::new();
        alerts.push("saved", AlertSeverity::Success);

        assert!(!alerts.is_expired(10.0, 1.0));
        assert!(!alerts.is_expired(10.5, 1.0));
        assert!(alerts.is_expired(11.0, 1.0));

        alerts.dismiss_first();
        assert!(!alerts.is_expired(12.0, 1.0));
    }

    #[test]
    fn empty_error_text_falls_back() {
        let err = anyhow::anyhow!("");
        assert_eq!(error_message(&err), UNKNOWN_ERROR);
        assert_eq!(error_message(&anyhow::anyhow!("No stock found.")), "No stock found.");
    }
}
