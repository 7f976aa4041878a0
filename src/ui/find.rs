//! Suchen-Dialog.

use crate::app::state::FindState;
use crate::app::AppIntent;
use crate::core::Project;

/// Rendert den Suchen-Dialog und gibt ausgelöste Intents zurück.
///
/// Jede Änderung am Suchbegriff löst eine neue Suche aus.
pub fn render_find_dialog(
    ctx: &egui::Context,
    find: &mut FindState,
    project: &Project,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if !find.open {
        return events;
    }

    let mut open = true;
    egui::Window::new("Find")
        .open(&mut open)
        .collapsible(false)
        .default_width(280.0)
        .show(ctx, |ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut find.query)
                    .hint_text("Name")
                    .desired_width(f32::INFINITY),
            );
            response.request_focus();
            if response.changed() {
                events.push(AppIntent::FindSubmitted);
            }

            ui.separator();

            if find.results.is_empty() && !find.query.is_empty() {
                ui.weak("No results");
            }

            egui::ScrollArea::vertical()
                .max_height(240.0)
                .show(ui, |ui| {
                    for &path in &find.results {
                        let Some(name) = project.node_name(path) else {
                            continue;
                        };
                        if ui
                            .selectable_label(false, format!("{name}  ({path})"))
                            .clicked()
                        {
                            events.push(AppIntent::FindResultChosen { path });
                        }
                    }
                });
        });

    let escape = ctx.input(|i| i.key_pressed(egui::Key::Escape));
    if !open || escape {
        events.push(AppIntent::FindClosed);
    }
    events
}
