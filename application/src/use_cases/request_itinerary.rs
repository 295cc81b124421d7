//! Request Itinerary use case.
//!
//! Sends one submission's text to the itinerary endpoint and maps whatever
//! happens to a [`ReplyOutcome`]. Never retries and never times out; the only
//! way to stop a request early is its cancellation token.

use crate::ports::itinerary_gateway::ItineraryGateway;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use tripchat_domain::{
    DomainError, GenerateRequest, ReplyOutcome, Resolution, Submission, preview,
};

/// Use case for requesting an itinerary for one submission
pub struct RequestItineraryUseCase<G: ItineraryGateway + ?Sized> {
    gateway: Arc<G>,
}

impl<G: ItineraryGateway + ?Sized> RequestItineraryUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Run the request to completion.
    ///
    /// Transport failures are logged with their detail and surface only as
    /// [`ReplyOutcome::TransportFailure`].
    pub async fn execute(&self, submission: &Submission) -> Resolution {
        let request = GenerateRequest::new(&submission.text);

        let outcome = match self.gateway.generate(&request).await {
            Ok(reply) => {
                let outcome = ReplyOutcome::from_reply(reply);
                match &outcome {
                    ReplyOutcome::Itinerary(text) => debug!(
                        submission = %submission.id,
                        response = %preview(text, 80),
                        "Received itinerary"
                    ),
                    _ => debug!(
                        submission = %submission.id,
                        "Reply carried no usable response field"
                    ),
                }
                outcome
            }
            Err(e) => {
                warn!(submission = %submission.id, error = %e, "Itinerary request failed");
                ReplyOutcome::TransportFailure
            }
        };

        Resolution::new(submission.id, outcome)
    }

    /// Run the request unless `token` is cancelled first
    pub async fn execute_cancellable(
        &self,
        submission: &Submission,
        token: &CancellationToken,
    ) -> Result<Resolution, DomainError> {
        tokio::select! {
            biased;
            _ = token.cancelled() => Err(DomainError::Cancelled),
            resolution = self.execute(submission) => Ok(resolution),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::itinerary_gateway::GatewayError;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tripchat_domain::{GenerateReply, SubmissionId, TRANSPORT_FAILURE_TEXT};

    /// Gateway that records requests and answers from a fixed result
    struct FixedGateway {
        reply: fn() -> Result<GenerateReply, GatewayError>,
        seen: Mutex<Vec<GenerateRequest>>,
    }

    impl FixedGateway {
        fn new(reply: fn() -> Result<GenerateReply, GatewayError>) -> Self {
            Self {
                reply,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ItineraryGateway for FixedGateway {
        async fn generate(
            &self,
            request: &GenerateRequest,
        ) -> Result<GenerateReply, GatewayError> {
            self.seen.lock().unwrap().push(request.clone());
            (self.reply)()
        }
    }

    /// Gateway that never answers
    struct HangingGateway;

    #[async_trait]
    impl ItineraryGateway for HangingGateway {
        async fn generate(
            &self,
            _request: &GenerateRequest,
        ) -> Result<GenerateReply, GatewayError> {
            std::future::pending().await
        }
    }

    fn submission() -> Submission {
        Submission {
            id: SubmissionId::new(3),
            text: "Plan a trip from Paris to Rome".to_string(),
        }
    }

    #[tokio::test]
    async fn test_success_maps_to_itinerary() {
        let gateway = Arc::new(FixedGateway::new(|| {
            Ok(GenerateReply::with_response("Visit Paris"))
        }));
        let use_case = RequestItineraryUseCase::new(gateway.clone());

        let resolution = use_case.execute(&submission()).await;

        assert_eq!(resolution.submission, SubmissionId::new(3));
        assert_eq!(
            resolution.outcome,
            ReplyOutcome::Itinerary("Visit Paris".into())
        );
        let seen = gateway.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].message, "Plan a trip from Paris to Rome");
    }

    #[tokio::test]
    async fn test_empty_reply_maps_to_server_failure() {
        let gateway = Arc::new(FixedGateway::new(|| Ok(GenerateReply::empty())));
        let use_case = RequestItineraryUseCase::new(gateway);

        let resolution = use_case.execute(&submission()).await;
        assert_eq!(resolution.outcome, ReplyOutcome::ServerFailure);
    }

    #[tokio::test]
    async fn test_gateway_error_maps_to_transport_failure() {
        let gateway = Arc::new(FixedGateway::new(|| {
            Err(GatewayError::ConnectionError("connection refused".into()))
        }));
        let use_case = RequestItineraryUseCase::new(gateway.clone());

        let resolution = use_case.execute(&submission()).await;
        assert_eq!(resolution.outcome, ReplyOutcome::TransportFailure);
        assert_eq!(resolution.outcome.display_text(), TRANSPORT_FAILURE_TEXT);
        // Exactly one attempt, no retry
        assert_eq!(gateway.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_cancelled_before_reply() {
        let use_case = RequestItineraryUseCase::new(Arc::new(HangingGateway));
        let token = CancellationToken::new();
        token.cancel();

        let result = use_case.execute_cancellable(&submission(), &token).await;
        assert!(matches!(result, Err(DomainError::Cancelled)));
    }

    #[tokio::test]
    async fn test_not_cancelled_runs_to_completion() {
        let gateway = Arc::new(FixedGateway::new(|| {
            Ok(GenerateReply::with_response("ok"))
        }));
        let use_case = RequestItineraryUseCase::new(gateway);
        let token = CancellationToken::new();

        let resolution = use_case
            .execute_cancellable(&submission(), &token)
            .await
            .unwrap();
        assert_eq!(resolution.outcome, ReplyOutcome::Itinerary("ok".into()));
    }
}
