use eframe::egui;

use crate::ui::state::{AppState, DraftPhase};

/// Render form nhập phản hồi. Trả về `true` khi người dùng bấm Submit.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    let mut submit = false;

    ui.vertical_centered(|ui| {
        ui.heading("Feedback Collector");
    });
    ui.add_space(8.0);

    let name_response = ui.add(
        egui::TextEdit::singleline(&mut state.name_input)
            .hint_text("Your Name")
            .desired_width(f32::INFINITY),
    );
    if state.highlight_name() {
        mark_required(ui, name_response.rect);
    }

    ui.add_space(4.0);

    let message_response = ui.add(
        egui::TextEdit::multiline(&mut state.message_input)
            .hint_text("Your Feedback")
            .desired_rows(4)
            .desired_width(f32::INFINITY),
    );
    if state.highlight_message() {
        mark_required(ui, message_response.rect);
        ui.colored_label(egui::Color32::RED, "Required field");
    }

    ui.add_space(8.0);

    let submitting = state.phase == DraftPhase::Submitting;
    if ui
        .add_enabled(!submitting, egui::Button::new("Submit"))
        .clicked()
    {
        submit = true;
    }

    // Enter trong ô Name cũng gửi luôn
    if !submitting && name_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        submit = true;
    }

    submit
}

fn mark_required(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter().rect_stroke(
        rect,
        egui::CornerRadius::same(2),
        egui::Stroke::new(1.0, egui::Color32::RED),
        egui::StrokeKind::Outside,
    );
}
