use crate::progress::reporter::WaitingSpinner;
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use tripchat_application::{ChatController, ItineraryGateway};
use tripchat_domain::{PLACEHOLDER_TEXT, Resolution, Transcript};

/// Runs one submission to completion and hands back the transcript
pub struct OneShotChat<G: ItineraryGateway + ?Sized + 'static> {
    controller: ChatController<G>,
    resolution_rx: mpsc::UnboundedReceiver<Resolution>,
    show_progress: bool,
}

impl<G: ItineraryGateway + ?Sized + 'static> OneShotChat<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        let (controller, resolution_rx) = ChatController::new(gateway);
        Self {
            controller,
            resolution_rx,
            show_progress: true,
        }
    }

    /// Set whether to show the waiting spinner
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Send `message` and wait for its reply.
    ///
    /// Blank messages are not sent and yield an empty transcript. Ctrl+C
    /// while waiting cancels the request and leaves the placeholder in place.
    pub async fn run(mut self, message: &str) -> Transcript {
        let Some(id) = self.controller.submit(message) else {
            debug!("Nothing to send");
            return self.controller.state().transcript.clone();
        };

        let spinner = if self.show_progress {
            WaitingSpinner::start(PLACEHOLDER_TEXT)
        } else {
            WaitingSpinner::hidden()
        };

        let interrupt = until_interrupted(tokio::signal::ctrl_c());
        tokio::pin!(interrupt);

        let interrupted = loop {
            tokio::select! {
                Some(resolution) = self.resolution_rx.recv() => {
                    let done = resolution.submission == id;
                    let _ = self.controller.apply(resolution);
                    if done {
                        break false;
                    }
                }
                () = &mut interrupt => {
                    info!(submission = %id, "Interrupted while waiting for reply");
                    self.controller.shutdown();
                    break true;
                }
            }
        };

        if interrupted {
            spinner.abandon("Interrupted");
        } else {
            spinner.finish();
        }

        self.controller.state().transcript.clone()
    }
}

/// Resolves once `signal` reports Ctrl+C.
///
/// A signal listener that fails to install never resolves, so the caller keeps
/// waiting for the reply instead.
async fn until_interrupted<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(e) = signal.await {
        warn!(error = %e, "Cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::FutureExt;
    use tripchat_application::GatewayError;
    use tripchat_domain::{GenerateReply, GenerateRequest, SERVER_FAILURE_TEXT, Sender};

    struct ScriptedGateway {
        reply: Option<String>,
    }

    #[async_trait]
    impl ItineraryGateway for ScriptedGateway {
        async fn generate(&self, _request: &GenerateRequest) -> Result<GenerateReply, GatewayError> {
            Ok(match &self.reply {
                Some(text) => GenerateReply::with_response(text.clone()),
                None => GenerateReply::empty(),
            })
        }
    }

    fn chat(reply: Option<&str>) -> OneShotChat<ScriptedGateway> {
        OneShotChat::new(Arc::new(ScriptedGateway {
            reply: reply.map(String::from),
        }))
        .with_progress(false)
    }

    #[tokio::test]
    async fn test_one_shot_returns_settled_pair() {
        let transcript = chat(Some("Visit Paris")).run("Plan a trip to France").await;

        let messages = transcript.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender(), Sender::User);
        assert_eq!(messages[0].text(), "Plan a trip to France");
        assert_eq!(messages[1].text(), "Visit Paris");
        assert!(!messages[1].is_pending());
    }

    #[tokio::test]
    async fn test_one_shot_missing_response() {
        let transcript = chat(None).run("Plan a trip").await;
        assert_eq!(transcript.messages()[1].text(), SERVER_FAILURE_TEXT);
    }

    #[tokio::test]
    async fn test_blank_message_is_not_sent() {
        let transcript = chat(Some("unused")).run("   ").await;
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_failed_signal_listener_keeps_waiting() {
        let failed = until_interrupted(async { Err(io::Error::other("no signal handler")) });
        assert!(failed.now_or_never().is_none());

        let pressed = until_interrupted(async { Ok(()) });
        assert!(pressed.now_or_never().is_some());
    }
}
