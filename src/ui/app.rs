use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{ApiCommand, ApiEvent, NewFeedback};
use crate::config::AppConfig;

use super::components::confirm_dialog::{self, ConfirmAction};
use super::components::{feedback_form, feedback_list, notifications};
use super::state::{AppState, DraftPhase};

pub struct FeedbackApp {
    state: AppState,
    config: AppConfig,
    command_sender: mpsc::Sender<ApiCommand>,
    event_receiver: mpsc::Receiver<ApiEvent>,
}

impl FeedbackApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        command_sender: mpsc::Sender<ApiCommand>,
        event_receiver: mpsc::Receiver<ApiEvent>,
    ) -> Self {
        let mut app = Self {
            state: AppState::new(),
            config,
            command_sender,
            event_receiver,
        };

        // Tải danh sách phản hồi ngay khi mở app
        app.request_refresh();
        app
    }

    fn handle_api_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            if self.state.apply_event(event) {
                self.request_refresh();
            }
        }
    }

    fn request_refresh(&mut self) {
        if self.send_command(ApiCommand::RefreshFeedback) {
            self.state.loading = true;
        }
    }

    fn submit_draft(&mut self, draft: NewFeedback) {
        if !self.send_command(ApiCommand::SubmitFeedback(draft)) {
            self.state.abort_submit();
        }
    }

    fn send_command(&mut self, command: ApiCommand) -> bool {
        match self.command_sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Failed to send command to API worker: {err}");
                false
            }
        }
    }
}

impl eframe::App for FeedbackApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_api_events();
        self.state.expire_notice(chrono::Utc::now());

        // Panel dưới phải render trước CentralPanel
        if let Some(notice) = self.state.notice.clone() {
            if notifications::render(ctx, &notice) {
                self.state.dismiss_notice();
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if feedback_form::render(ui, &mut self.state) {
                let confirm = self.config.confirm_before_submit;
                if let Some(draft) = self.state.submit_requested(confirm) {
                    self.submit_draft(draft);
                }
            }

            ui.add_space(12.0);
            ui.separator();
            feedback_list::render(ui, &self.state.entries, self.state.loading);
        });

        if self.state.phase == DraftPhase::ConfirmationPending {
            match confirm_dialog::render(ctx) {
                Some(ConfirmAction::Submit) => {
                    if let Some(draft) = self.state.confirm_submit() {
                        self.submit_draft(draft);
                    }
                }
                Some(ConfirmAction::Cancel) => self.state.cancel_confirm(),
                None => {}
            }
        }

        ctx.request_repaint();
    }
}
