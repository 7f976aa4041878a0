//! Toast-Meldungen (nur die erste Meldung der Warteschlange ist sichtbar).

use crate::app::{AlertQueue, AlertSeverity, AppIntent};
use std::time::Duration;

fn severity_color(severity: AlertSeverity) -> egui::Color32 {
    match severity {
        AlertSeverity::Error => egui::Color32::from_rgb(198, 40, 40),
        AlertSeverity::Warning => egui::Color32::from_rgb(237, 108, 2),
        AlertSeverity::Info => egui::Color32::from_rgb(2, 136, 209),
        AlertSeverity::Success => egui::Color32::from_rgb(46, 125, 50),
    }
}

/// Rendert die aktuelle Meldung und meldet ihren Ablauf.
pub fn render_alerts(
    ctx: &egui::Context,
    alerts: &mut AlertQueue,
    duration_ms: u64,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let now = ctx.input(|i| i.time);
    if alerts.is_expired(now, duration_ms as f64 / 1000.0) {
        events.push(AppIntent::AlertDismissed);
        return events;
    }

    let Some(alert) = alerts.first() else {
        return events;
    };

    egui::Area::new(egui::Id::new("alert_toast"))
        .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -48.0])
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(severity_color(alert.severity))
                .show(ui, |ui| {
                    let text = egui::RichText::new(&alert.message).color(egui::Color32::WHITE);
                    if ui.add(egui::Label::new(text).sense(egui::Sense::click())).clicked() {
                        events.push(AppIntent::AlertDismissed);
                    }
                });
        });

    ctx.request_repaint_after(Duration::from_millis(duration_ms.min(250)));
    events
}
