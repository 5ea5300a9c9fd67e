use std::sync::Arc;

use thiserror::Error;

use super::state::ChatEvent;
use crate::gemini::TextModel;
use crate::prompt::build_resolution_prompt;
use crate::reflow::{reflow, SCREEN_WIDTH};

#[derive(Debug, Error)]
pub enum SendError {
    #[error("Escribe primero el problema.")]
    EmptyProblem,
    #[error("message queue is closed")]
    QueueClosed,
}

/// Queue the user's problem and spawn one worker task that asks the model about it.
///
/// The user marker is pushed before the task starts, so it always precedes the
/// task's own response or error in the queue. Overlapping sends are allowed.
pub fn dispatch_problem(
    rt: &tokio::runtime::Handle,
    model: Arc<dyn TextModel>,
    sender: &async_channel::Sender<ChatEvent>,
    input: &str,
) -> Result<tokio::task::JoinHandle<()>, SendError> {
    let problem = input.trim();
    if problem.is_empty() {
        return Err(SendError::EmptyProblem);
    }
    let problem = problem.to_string();

    sender
        .try_send(ChatEvent::User(problem.clone()))
        .map_err(|_| SendError::QueueClosed)?;
    log::info!("Dispatching problem ({} chars)", problem.len());

    let sender = sender.clone();
    Ok(rt.spawn(async move {
        let event = solve(model.as_ref(), &problem).await;
        if sender.send(event).await.is_err() {
            log::debug!("UI queue closed before the answer arrived");
        }
    }))
}

async fn solve(model: &dyn TextModel, problem: &str) -> ChatEvent {
    let prompt = build_resolution_prompt(problem);
    match model.generate(&prompt).await {
        Ok(text) => {
            log::info!("Model answered ({} chars)", text.len());
            ChatEvent::Response(reflow(&text, SCREEN_WIDTH))
        }
        Err(e) => {
            log::error!("Model request failed: {e}");
            ChatEvent::Error(format!("❌ Error al obtener respuesta de la IA: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::app::event_handler::drain_events;
    use crate::app::transcript::{Entry, Transcript, AI_LABEL};
    use crate::gemini::AiError;

    /// Answers every prompt with a fixed reply and remembers what it was asked.
    struct ScriptedModel {
        reply: String,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedModel {
        fn new(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.into(),
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl TextModel for ScriptedModel {
        async fn generate(&self, prompt: &str) -> Result<String, AiError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    struct TimingOutModel;

    #[async_trait]
    impl TextModel for TimingOutModel {
        async fn generate(&self, _prompt: &str) -> Result<String, AiError> {
            Err(AiError::Api {
                status: reqwest::StatusCode::GATEWAY_TIMEOUT,
                body: "timeout".into(),
            })
        }
    }

    #[tokio::test]
    async fn whitespace_problem_is_rejected_without_queueing() {
        let (tx, rx) = async_channel::unbounded();
        let model = ScriptedModel::new("unused");

        let result = dispatch_problem(&tokio::runtime::Handle::current(), model.clone(), &tx, " \t\n ");

        assert!(matches!(result, Err(SendError::EmptyProblem)));
        assert!(rx.is_empty());
        assert!(model.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn send_queues_user_marker_then_response() {
        let (tx, rx) = async_channel::unbounded();
        let model = ScriptedModel::new("La respuesta es 4.");

        let handle = dispatch_problem(&tokio::runtime::Handle::current(), model.clone(), &tx, "  2+2=?  ")
            .expect("dispatch");
        handle.await.expect("worker");

        let mut transcript = Transcript::default();
        drain_events(&rx, &mut transcript);

        assert_eq!(
            transcript.entries(),
            &[
                Entry::User("2+2=?".into()),
                Entry::Response("La respuesta es 4.".into()),
            ]
        );
        assert!(transcript.text().starts_with(&format!("👤 Tú: 2+2=?\n{AI_LABEL}")));

        let prompts = model.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Problema: 2+2=?"));
    }

    #[tokio::test]
    async fn response_is_reflowed_for_the_screen() {
        let (tx, rx) = async_channel::unbounded();
        let long = "palabra ".repeat(60);
        let model = ScriptedModel::new(&long);

        dispatch_problem(&tokio::runtime::Handle::current(), model, &tx, "largo")
            .expect("dispatch")
            .await
            .expect("worker");

        let mut transcript = Transcript::default();
        drain_events(&rx, &mut transcript);
        let Entry::Response(text) = &transcript.entries()[1] else {
            panic!("expected a response, got {:?}", transcript.entries());
        };
        assert!(text.lines().count() > 1);
        assert!(text.lines().all(|l| l.chars().count() <= SCREEN_WIDTH));
    }

    #[tokio::test]
    async fn model_failure_yields_one_error_line() {
        let (tx, rx) = async_channel::unbounded();

        dispatch_problem(&tokio::runtime::Handle::current(), Arc::new(TimingOutModel), &tx, "2+2=?")
            .expect("dispatch")
            .await
            .expect("worker");

        let mut transcript = Transcript::default();
        drain_events(&rx, &mut transcript);

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.entries()[0], Entry::User("2+2=?".into()));
        let Entry::Notice(line) = &transcript.entries()[1] else {
            panic!("expected an error notice, got {:?}", transcript.entries());
        };
        assert!(line.contains("timeout"));
        assert!(!line.contains('\n'));
        assert!(!transcript
            .entries()
            .iter()
            .any(|e| matches!(e, Entry::Response(_))));
    }

    #[tokio::test]
    async fn overlapping_sends_each_get_an_answer() {
        let (tx, rx) = async_channel::unbounded();
        let model = ScriptedModel::new("ok");
        let rt = tokio::runtime::Handle::current();

        let first = dispatch_problem(&rt, model.clone(), &tx, "uno").expect("dispatch");
        let second = dispatch_problem(&rt, model.clone(), &tx, "dos").expect("dispatch");
        first.await.expect("worker");
        second.await.expect("worker");

        let mut transcript = Transcript::default();
        drain_events(&rx, &mut transcript);

        let entries = transcript.entries();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0], Entry::User("uno".into()));
        assert_eq!(entries[1], Entry::User("dos".into()));
        assert_eq!(
            entries[2..]
                .iter()
                .filter(|e| matches!(e, Entry::Response(_)))
                .count(),
            2
        );
        assert_eq!(model.prompts.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn closed_queue_is_reported() {
        let (tx, rx) = async_channel::unbounded::<ChatEvent>();
        drop(rx);

        let result = dispatch_problem(&tokio::runtime::Handle::current(), ScriptedModel::new("x"), &tx, "hola");
        assert!(matches!(result, Err(SendError::QueueClosed)));
    }
}
