use crate::common::types::NewFeedback;

/// Lệnh UI gửi xuống tầng API.
#[derive(Debug, Clone)]
pub enum ApiCommand {
    /// Tải lại toàn bộ danh sách phản hồi từ server
    RefreshFeedback,
    SubmitFeedback(NewFeedback),
}
