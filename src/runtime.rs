//! Background tasks that talk to the assessment service.
//!
//! Each task reports back as an [`Event`] on the controller's channel. Tasks
//! are never awaited by the controller and a closed channel is not an error:
//! the attempt they belonged to is simply gone.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::app::{Command, Event, SessionId};
use crate::models::Answer;
use crate::service::AssessmentService;

pub type SharedService = Arc<dyn AssessmentService>;

/// Starts whatever `command` asks for.
pub fn execute(command: Command, service: &SharedService, tx: &UnboundedSender<Event>) {
    match command {
        Command::Reload => {
            spawn_startup(service, tx);
        }
        Command::Submit { session, answers } => {
            spawn_recommendation(service, tx, session, answers);
        }
    }
}

/// Runs the question loader and the connectivity check side by side.
///
/// Neither waits for the other; their events arrive in whatever order the
/// calls complete.
pub fn spawn_startup(
    service: &SharedService,
    tx: &UnboundedSender<Event>,
) -> (JoinHandle<()>, JoinHandle<()>) {
    (spawn_question_load(service, tx), spawn_health_check(service, tx))
}

pub fn spawn_question_load(service: &SharedService, tx: &UnboundedSender<Event>) -> JoinHandle<()> {
    let service = Arc::clone(service);
    let tx = tx.clone();
    tokio::spawn(async move {
        let event = match service.fetch_questions().await {
            Ok(questions) => Event::QuestionsLoaded(questions),
            Err(e) => {
                warn!(error = %e, "failed to fetch questions");
                Event::QuestionsFailed(e.to_string())
            }
        };
        deliver(&tx, event);
    })
}

pub fn spawn_health_check(service: &SharedService, tx: &UnboundedSender<Event>) -> JoinHandle<()> {
    let service = Arc::clone(service);
    let tx = tx.clone();
    tokio::spawn(async move {
        let connected = match service.check_health().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "assessment service unreachable");
                false
            }
        };
        deliver(&tx, Event::ConnectivityChecked(connected));
    })
}

/// Submits a ledger once. There is no retry.
pub fn spawn_recommendation(
    service: &SharedService,
    tx: &UnboundedSender<Event>,
    session: SessionId,
    answers: Vec<Answer>,
) -> JoinHandle<()> {
    let service = Arc::clone(service);
    let tx = tx.clone();
    tokio::spawn(async move {
        let event = match service.recommend(&answers).await {
            Ok(result) => Event::RecommendationResolved { session, result },
            Err(e) => Event::RecommendationFailed {
                session,
                reason: e.to_string(),
            },
        };
        deliver(&tx, event);
    })
}

fn deliver(tx: &UnboundedSender<Event>, event: Event) {
    if tx.send(event).is_err() {
        debug!("controller gone, dropping event");
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use tokio::sync::{mpsc, Notify};

    use super::*;
    use crate::data::sample_result;
    use crate::models::{Question, RecommendationResult};
    use crate::service::ServiceError;

    /// Backend whose question call blocks until released.
    struct ScriptedService {
        questions_gate: Arc<Notify>,
        healthy: bool,
        recommend_ok: bool,
    }

    #[async_trait]
    impl AssessmentService for ScriptedService {
        async fn fetch_questions(&self) -> Result<Vec<Question>, ServiceError> {
            self.questions_gate.notified().await;
            Err(ServiceError::Status(StatusCode::BAD_GATEWAY))
        }

        async fn check_health(&self) -> Result<(), ServiceError> {
            if self.healthy {
                Ok(())
            } else {
                Err(ServiceError::Status(StatusCode::SERVICE_UNAVAILABLE))
            }
        }

        async fn recommend(
            &self,
            _answers: &[Answer],
        ) -> Result<RecommendationResult, ServiceError> {
            if self.recommend_ok {
                Ok(sample_result())
            } else {
                Err(ServiceError::Status(StatusCode::INTERNAL_SERVER_ERROR))
            }
        }
    }

    fn scripted(healthy: bool, recommend_ok: bool) -> (SharedService, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let service = ScriptedService {
            questions_gate: Arc::clone(&gate),
            healthy,
            recommend_ok,
        };
        (Arc::new(service), gate)
    }

    #[tokio::test]
    async fn test_health_check_does_not_wait_for_question_load() {
        let (service, gate) = scripted(true, true);
        let (tx, mut rx) = mpsc::unbounded_channel();

        spawn_startup(&service, &tx);

        assert_eq!(rx.recv().await, Some(Event::ConnectivityChecked(true)));

        gate.notify_one();
        match rx.recv().await {
            Some(Event::QuestionsFailed(reason)) => assert!(reason.contains("502")),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unhealthy_service_reports_disconnected() {
        let (service, _gate) = scripted(false, true);
        let (tx, mut rx) = mpsc::unbounded_channel();

        spawn_health_check(&service, &tx).await.expect("health check task");
        assert_eq!(rx.recv().await, Some(Event::ConnectivityChecked(false)));
    }

    #[tokio::test]
    async fn test_recommendation_events_carry_session() {
        let session = SessionId::new();
        let (tx, mut rx) = mpsc::unbounded_channel();

        let (ok_service, _) = scripted(true, true);
        execute(
            Command::Submit {
                session,
                answers: vec![Answer::new(1, 3)],
            },
            &ok_service,
            &tx,
        );
        assert_eq!(
            rx.recv().await,
            Some(Event::RecommendationResolved {
                session,
                result: sample_result(),
            })
        );

        let (failing_service, _) = scripted(true, false);
        spawn_recommendation(&failing_service, &tx, session, vec![Answer::new(1, 3)])
            .await
            .expect("recommend task");
        match rx.recv().await {
            Some(Event::RecommendationFailed { session: id, reason }) => {
                assert_eq!(id, session);
                assert!(reason.contains("500"));
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_closed_channel_is_tolerated() {
        let (service, _) = scripted(false, false);
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);

        spawn_health_check(&service, &tx).await.expect("health check task must not panic");
    }
}
