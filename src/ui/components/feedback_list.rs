use eframe::egui;

use crate::common::FeedbackEntry;

pub fn render(ui: &mut egui::Ui, entries: &[FeedbackEntry], loading: bool) {
    ui.vertical_centered(|ui| {
        ui.heading("All Feedback");
    });
    ui.separator();

    if loading {
        ui.vertical_centered(|ui| {
            ui.spinner();
        });
        return;
    }

    if entries.is_empty() {
        ui.vertical_centered(|ui| {
            ui.weak("No feedback yet.");
        });
        return;
    }

    // Giữ đúng thứ tự server trả về
    egui::ScrollArea::vertical().show(ui, |ui| {
        for entry in entries {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(&entry.name).strong());
                ui.label(&entry.message);
                ui.separator();

                let local_time = entry.created_at.with_timezone(&chrono::Local);
                ui.label(
                    egui::RichText::new(local_time.format("%d/%m/%Y %H:%M:%S").to_string())
                        .weak()
                        .small(),
                );
            });
            ui.add_space(6.0);
        }
    });
}
