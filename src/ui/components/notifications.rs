use eframe::egui;

use crate::ui::state::{Notice, Severity};

/// Render notice ở cạnh dưới cửa sổ. Trả về `true` khi người dùng bấm đóng.
pub fn render(ctx: &egui::Context, notice: &Notice) -> bool {
    let mut dismissed = false;

    egui::TopBottomPanel::bottom("notice_panel").show(ctx, |ui| {
        let (icon, color) = match notice.severity {
            Severity::Warning => ("⚠", egui::Color32::from_rgb(237, 108, 2)),
            Severity::Success => ("✔", egui::Color32::from_rgb(46, 125, 50)),
        };

        ui.horizontal(|ui| {
            ui.colored_label(color, icon);
            ui.colored_label(color, &notice.text);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("✕").clicked() {
                    dismissed = true;
                }
            });
        });
    });

    dismissed
}
