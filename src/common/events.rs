use crate::common::types::FeedbackEntry;

/// Sự kiện từ tầng API gửi lên UI.
#[derive(Debug, Clone)]
pub enum ApiEvent {
    /// Danh sách mới thay thế toàn bộ danh sách cũ
    FeedbackLoaded(Vec<FeedbackEntry>),
    RefreshFailed(String),
    FeedbackCreated(FeedbackEntry),
    SubmitFailed(String),
}
