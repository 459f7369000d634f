use reqwest::Client;
use serde::Deserialize;
use tokio::sync::mpsc;

use crate::common::{ApiCommand, ApiEvent, FeedbackEntry, NewFeedback};

use super::error::ApiError;

/// Worker giao tiếp với feedback server qua HTTP.
///
/// Runs on the tokio runtime, receives commands from the UI and answers
/// with events. All network I/O happens here so the UI thread never blocks.
pub struct ApiClient {
    base_url: String,
    http: Client,
    event_sender: mpsc::Sender<ApiEvent>,
    command_receiver: mpsc::Receiver<ApiCommand>,
}

/// Error body the server returns on a rejected request: `{ "error": "..." }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        event_sender: mpsc::Sender<ApiEvent>,
        command_receiver: mpsc::Receiver<ApiCommand>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
            event_sender,
            command_receiver,
        }
    }

    pub async fn run(mut self) {
        log::info!("API worker started for {}", self.base_url);

        // Commands are handled one at a time; overlapping submissions queue
        // in the channel and resolve in arrival order.
        while let Some(command) = self.command_receiver.recv().await {
            self.handle_command(command).await;
        }

        log::info!("API worker stopped: command channel closed");
    }

    async fn handle_command(&mut self, command: ApiCommand) {
        match command {
            ApiCommand::RefreshFeedback => {
                let event = match self.list_feedback().await {
                    Ok(entries) => ApiEvent::FeedbackLoaded(entries),
                    Err(err) => {
                        log::warn!("Failed to fetch feedback list: {err}");
                        ApiEvent::RefreshFailed(err.to_string())
                    }
                };
                self.send_event(event).await;
            }
            ApiCommand::SubmitFeedback(draft) => {
                let event = match self.create_feedback(&draft).await {
                    Ok(entry) => ApiEvent::FeedbackCreated(entry),
                    Err(err) => {
                        log::warn!("Failed to submit feedback: {err}");
                        ApiEvent::SubmitFailed(err.submit_message())
                    }
                };
                self.send_event(event).await;
            }
        }
    }

    async fn send_event(&self, event: ApiEvent) {
        if let Err(err) = self.event_sender.send(event).await {
            log::warn!("Failed to notify UI: {err}");
        }
    }

    async fn list_feedback(&self) -> Result<Vec<FeedbackEntry>, ApiError> {
        let response = self
            .http
            .get(self.endpoint())
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<Vec<FeedbackEntry>>().await?)
    }

    async fn create_feedback(&self, draft: &NewFeedback) -> Result<FeedbackEntry, ApiError> {
        let response = self.http.post(self.endpoint()).json(draft).send().await?;

        if !response.status().is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error);
            return Err(ApiError::Rejected { message });
        }

        Ok(response.json::<FeedbackEntry>().await?)
    }

    fn endpoint(&self) -> String {
        format!("{}/api/feedback", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::error::{SUBMIT_REJECTED_FALLBACK, SUBMIT_TRANSPORT_FALLBACK};

    use super::*;

    /// Spawn a worker against `base_url` and hand back the channel ends.
    fn spawn_worker(base_url: String) -> (mpsc::Sender<ApiCommand>, mpsc::Receiver<ApiEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let (event_tx, event_rx) = mpsc::channel(8);
        tokio::spawn(ApiClient::new(base_url, event_tx, cmd_rx).run());
        (cmd_tx, event_rx)
    }

    fn entry_json(id: &str, name: &str, message: &str) -> serde_json::Value {
        serde_json::json!({
            "_id": id,
            "name": name,
            "message": message,
            "createdAt": "2024-01-01T00:00:00Z",
        })
    }

    #[tokio::test]
    async fn refresh_preserves_server_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/feedback"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                entry_json("2", "Bea", "Quick reply"),
                entry_json("1", "Ann", "Great service"),
            ])))
            .mount(&server)
            .await;

        let (cmd_tx, mut event_rx) = spawn_worker(server.uri());
        cmd_tx.send(ApiCommand::RefreshFeedback).await.unwrap();

        match event_rx.recv().await.unwrap() {
            ApiEvent::FeedbackLoaded(entries) => {
                let ids: Vec<&str> = entries.iter().map(|entry| entry.id.as_str()).collect();
                assert_eq!(ids, ["2", "1"]);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn refresh_failure_becomes_refresh_failed_event() {
        // No route mounted: the mock server answers 404.
        let server = MockServer::start().await;

        let (cmd_tx, mut event_rx) = spawn_worker(server.uri());
        cmd_tx.send(ApiCommand::RefreshFeedback).await.unwrap();

        assert!(matches!(
            event_rx.recv().await.unwrap(),
            ApiEvent::RefreshFailed(_)
        ));
    }

    #[tokio::test]
    async fn submit_success_returns_created_entry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/feedback"))
            .and(body_json(serde_json::json!({
                "name": "Ann",
                "message": "Great service",
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(entry_json("1", "Ann", "Great service")),
            )
            .mount(&server)
            .await;

        let (cmd_tx, mut event_rx) = spawn_worker(server.uri());
        cmd_tx
            .send(ApiCommand::SubmitFeedback(NewFeedback {
                name: "Ann".to_string(),
                message: "Great service".to_string(),
            }))
            .await
            .unwrap();

        match event_rx.recv().await.unwrap() {
            ApiEvent::FeedbackCreated(entry) => {
                assert_eq!(entry.id, "1");
                assert_eq!(entry.name, "Ann");
                assert_eq!(entry.message, "Great service");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn submit_rejection_surfaces_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/feedback"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({ "error": "Message too long" })),
            )
            .mount(&server)
            .await;

        let (cmd_tx, mut event_rx) = spawn_worker(server.uri());
        cmd_tx
            .send(ApiCommand::SubmitFeedback(NewFeedback {
                name: "Ann".to_string(),
                message: "x".to_string(),
            }))
            .await
            .unwrap();

        match event_rx.recv().await.unwrap() {
            ApiEvent::SubmitFailed(message) => assert_eq!(message, "Message too long"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn submit_rejection_without_detail_uses_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/feedback"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let (cmd_tx, mut event_rx) = spawn_worker(server.uri());
        cmd_tx
            .send(ApiCommand::SubmitFeedback(NewFeedback {
                name: "Ann".to_string(),
                message: "Great service".to_string(),
            }))
            .await
            .unwrap();

        match event_rx.recv().await.unwrap() {
            ApiEvent::SubmitFailed(message) => assert_eq!(message, SUBMIT_REJECTED_FALLBACK),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn submit_transport_error_uses_generic_message() {
        // Nothing listens on this address.
        let (cmd_tx, mut event_rx) = spawn_worker("http://127.0.0.1:1".to_string());
        cmd_tx
            .send(ApiCommand::SubmitFeedback(NewFeedback {
                name: "Ann".to_string(),
                message: "Great service".to_string(),
            }))
            .await
            .unwrap();

        match event_rx.recv().await.unwrap() {
            ApiEvent::SubmitFailed(message) => assert_eq!(message, SUBMIT_TRANSPORT_FALLBACK),
            other => panic!("unexpected event: {other:?}"),
        }
    }
}
