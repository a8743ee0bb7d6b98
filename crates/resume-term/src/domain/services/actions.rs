use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::domain::models::Action;
use crate::domain::models::Entry;
use crate::domain::models::Event;
use crate::domain::models::Resume;
use crate::domain::models::ResumeSource;
use crate::domain::models::ResumeSourceBox;

/// Loads the résumé once and reports the outcome as scrollback events. A
/// failed load leaves the session on its empty default document.
async fn load_resume(
    source: &dyn ResumeSource,
    event_tx: &mpsc::UnboundedSender<Event>,
) -> Result<()> {
    let source_name = source.name();
    match source.fetch().await {
        Ok(resume) => {
            tracing::info!(source = %source_name, "resume loaded");
            event_tx.send(Event::ResumeLoaded(resume))?;
            event_tx.send(Event::SourceMessage(Entry::system(
                &source.loaded_message(),
            )))?;
        }
        Err(err) => {
            tracing::error!(source = %source_name, error = %err, "failed to load resume");
            event_tx.send(Event::SourceMessage(Entry::system_error(&err.to_string())))?;
        }
    }

    Ok(())
}

pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        source: Option<ResumeSourceBox>,
        event_tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let mut worker: JoinHandle<Result<()>> = tokio::spawn(async { Ok(()) });

        if let Some(source) = source {
            let worker_event_tx = event_tx.clone();
            worker = tokio::spawn(async move { load_resume(source.as_ref(), &worker_event_tx).await });
        }

        loop {
            match rx.recv().await {
                Some(Action::AbortFetch) => {
                    worker.abort();
                }
                None => {
                    worker.abort();
                    return Ok(());
                }
            }
        }
    }

    /// Loads the résumé in the foreground, for one-shot command execution.
    pub async fn load_now(source: &dyn ResumeSource) -> (Option<Resume>, Entry) {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let mut resume = None;
        let mut message = Entry::default();

        if load_resume(source, &event_tx).await.is_ok() {
            drop(event_tx);
            while let Some(event) = event_rx.recv().await {
                match event {
                    Event::ResumeLoaded(loaded) => resume = Some(loaded),
                    Event::SourceMessage(entry) => message = entry,
                    _ => {}
                }
            }
        }

        return (resume, message);
    }
}
