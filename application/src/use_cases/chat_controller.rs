//! Chat controller: dispatches submissions as cancellable tasks
//!
//! ```text
//! UI task (owns ChatController)            request task (tokio::spawn)
//!   ├─ submit_input() ── Submission ──────>  RequestItineraryUseCase::execute
//!   │                                          │
//!   └─ apply(Resolution) <── resolution_rx ────┘
//! ```
//!
//! The UI task is the only owner of the chat state. Request tasks never touch
//! it; they hand their [`Resolution`] back over an unbounded channel and the
//! UI task applies it by submission id.

use super::request_itinerary::RequestItineraryUseCase;
use super::submit_message::ChatInputHandler;
use crate::ports::itinerary_gateway::ItineraryGateway;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use tripchat_domain::{
    ChatState, DomainError, InputField, MessageId, Resolution, Submission, SubmissionId,
};

pub struct ChatController<G: ItineraryGateway + ?Sized + 'static> {
    handler: ChatInputHandler,
    use_case: Arc<RequestItineraryUseCase<G>>,
    resolution_tx: mpsc::UnboundedSender<Resolution>,
    in_flight: HashMap<SubmissionId, CancellationToken>,
    shutdown: CancellationToken,
}

impl<G: ItineraryGateway + ?Sized + 'static> ChatController<G> {
    /// Create a controller and the receiver on which resolutions arrive
    pub fn new(gateway: Arc<G>) -> (Self, mpsc::UnboundedReceiver<Resolution>) {
        let (resolution_tx, resolution_rx) = mpsc::unbounded_channel();
        let controller = Self {
            handler: ChatInputHandler::new(),
            use_case: Arc::new(RequestItineraryUseCase::new(gateway)),
            resolution_tx,
            in_flight: HashMap::new(),
            shutdown: CancellationToken::new(),
        };
        (controller, resolution_rx)
    }

    pub fn state(&self) -> &ChatState {
        self.handler.state()
    }

    pub fn input_mut(&mut self) -> &mut InputField {
        self.handler.input_mut()
    }

    /// Number of submissions still waiting for a reply
    pub fn pending(&self) -> usize {
        self.in_flight.len()
    }

    /// Submit the input field's value and dispatch its request
    pub fn submit_input(&mut self) -> Option<SubmissionId> {
        let submission = self.handler.submit_input()?;
        Some(self.dispatch(submission))
    }

    /// Submit `text` and dispatch its request
    pub fn submit(&mut self, text: &str) -> Option<SubmissionId> {
        let submission = self.handler.submit(text)?;
        Some(self.dispatch(submission))
    }

    /// Apply a resolution received from the channel
    pub fn apply(&mut self, resolution: Resolution) -> Result<MessageId, DomainError> {
        self.in_flight.remove(&resolution.submission);
        self.handler.resolve(&resolution).inspect_err(|e| {
            warn!(error = %e, "Dropping resolution");
        })
    }

    /// Cancel every in-flight request. Their placeholders stay as they are.
    pub fn shutdown(&mut self) {
        if !self.in_flight.is_empty() {
            debug!(count = self.in_flight.len(), "Cancelling in-flight submissions");
        }
        self.shutdown.cancel();
        self.in_flight.clear();
    }

    fn dispatch(&mut self, submission: Submission) -> SubmissionId {
        let id = submission.id;
        let token = self.shutdown.child_token();
        self.in_flight.insert(id, token.clone());

        let use_case = Arc::clone(&self.use_case);
        let resolution_tx = self.resolution_tx.clone();

        tokio::spawn(async move {
            match use_case.execute_cancellable(&submission, &token).await {
                Ok(resolution) => {
                    // Receiver gone means the UI has shut down
                    let _ = resolution_tx.send(resolution);
                }
                Err(e) => debug!(submission = %submission.id, error = %e, "Request stopped"),
            }
        });

        debug!(submission = %id, "Dispatched request");
        id
    }
}

impl<G: ItineraryGateway + ?Sized + 'static> Drop for ChatController<G> {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
