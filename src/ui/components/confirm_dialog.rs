use eframe::egui;

/// Lựa chọn của người dùng trong hộp thoại xác nhận.
pub enum ConfirmAction {
    Submit,
    Cancel,
}

pub fn render(ctx: &egui::Context) -> Option<ConfirmAction> {
    let mut action = None;

    egui::Window::new("Confirm Submission")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label("Are you sure you want to submit your feedback?");
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    action = Some(ConfirmAction::Cancel);
                }
                if ui.button("Yes, Submit").clicked() {
                    action = Some(ConfirmAction::Submit);
                }
            });
        });

    action
}
