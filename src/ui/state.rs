use chrono::{DateTime, Utc};

use crate::common::{ApiEvent, FeedbackEntry, NewFeedback};

pub const VALIDATION_MESSAGE: &str = "Please fill in both Name and Feedback fields.";
pub const SUCCESS_MESSAGE: &str = "Feedback submitted successfully!";

/// Thời gian hiển thị notice trước khi tự ẩn (giây)
const WARNING_NOTICE_SECS: i64 = 4;
const SUCCESS_NOTICE_SECS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Success,
}

/// Thông báo tạm thời ở cạnh dưới màn hình, tự ẩn sau vài giây.
#[derive(Debug, Clone)]
pub struct Notice {
    pub text: String,
    pub severity: Severity,
    pub shown_at: DateTime<Utc>,
}

impl Notice {
    fn new(text: String, severity: Severity) -> Self {
        Self {
            text,
            severity,
            shown_at: Utc::now(),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        let limit = match self.severity {
            Severity::Warning => WARNING_NOTICE_SECS,
            Severity::Success => SUCCESS_NOTICE_SECS,
        };
        now.signed_duration_since(self.shown_at).num_seconds() >= limit
    }
}

/// Vòng đời của bản nháp đang soạn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftPhase {
    Editing,
    ConfirmationPending,
    Submitting,
}

/// Trạng thái cục bộ của UI.
pub struct AppState {
    pub entries: Vec<FeedbackEntry>,
    pub name_input: String,
    pub message_input: String,
    pub loading: bool,
    pub phase: DraftPhase,
    pub notice: Option<Notice>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            name_input: String::new(),
            message_input: String::new(),
            loading: false,
            phase: DraftPhase::Editing,
            notice: None,
        }
    }

    /// Người dùng bấm Submit. Trả về bản nháp cần gửi ngay, hoặc `None` khi
    /// dữ liệu chưa hợp lệ hoặc còn chờ xác nhận.
    pub fn submit_requested(&mut self, confirm_enabled: bool) -> Option<NewFeedback> {
        if self.name_input.trim().is_empty() || self.message_input.trim().is_empty() {
            self.notice = Some(Notice::new(
                VALIDATION_MESSAGE.to_string(),
                Severity::Warning,
            ));
            return None;
        }

        if confirm_enabled {
            self.phase = DraftPhase::ConfirmationPending;
            None
        } else {
            self.phase = DraftPhase::Submitting;
            Some(self.draft())
        }
    }

    /// Người dùng đồng ý trong hộp thoại xác nhận.
    pub fn confirm_submit(&mut self) -> Option<NewFeedback> {
        if self.phase != DraftPhase::ConfirmationPending {
            return None;
        }
        self.phase = DraftPhase::Submitting;
        Some(self.draft())
    }

    pub fn cancel_confirm(&mut self) {
        if self.phase == DraftPhase::ConfirmationPending {
            self.phase = DraftPhase::Editing;
        }
    }

    /// Lệnh gửi đi không vào được channel: quay lại Editing để thử lại.
    pub fn abort_submit(&mut self) {
        if self.phase == DraftPhase::Submitting {
            self.phase = DraftPhase::Editing;
        }
    }

    /// Áp sự kiện từ tầng API vào trạng thái. Trả về `true` khi danh sách
    /// cần được tải lại.
    pub fn apply_event(&mut self, event: ApiEvent) -> bool {
        match event {
            ApiEvent::FeedbackLoaded(entries) => {
                self.entries = entries;
                self.loading = false;
                false
            }
            ApiEvent::RefreshFailed(reason) => {
                // Lỗi tải danh sách chỉ ghi log, danh sách cũ giữ nguyên
                log::warn!("Feedback list refresh failed: {reason}");
                self.loading = false;
                false
            }
            ApiEvent::FeedbackCreated(entry) => {
                log::info!("Feedback {} accepted by server", entry.id);
                self.name_input.clear();
                self.message_input.clear();
                self.phase = DraftPhase::Editing;
                self.notice = Some(Notice::new(SUCCESS_MESSAGE.to_string(), Severity::Success));
                true
            }
            ApiEvent::SubmitFailed(message) => {
                // Bản nháp giữ nguyên để người dùng sửa và gửi lại
                self.phase = DraftPhase::Editing;
                self.notice = Some(Notice::new(message, Severity::Warning));
                false
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn expire_notice(&mut self, now: DateTime<Utc>) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
        }
    }

    /// Tô viền đỏ ô Name khi đang trống và có cảnh báo.
    pub fn highlight_name(&self) -> bool {
        self.name_input.trim().is_empty() && self.has_warning()
    }

    pub fn highlight_message(&self) -> bool {
        self.message_input.trim().is_empty() && self.has_warning()
    }

    fn has_warning(&self) -> bool {
        self.notice
            .as_ref()
            .is_some_and(|n| n.severity == Severity::Warning)
    }

    fn draft(&self) -> NewFeedback {
        NewFeedback {
            name: self.name_input.clone(),
            message: self.message_input.clone(),
        }
    }
}
