use std::sync::{mpsc, Arc};
use std::thread;

use analyzer_core::SubmissionId;
use analyzer_logging::{analyzer_debug, analyzer_warn};

use crate::client::{AnalysisClient, ReqwestAnalysisClient};
use crate::{AnalysisRequest, ClientSettings, EngineError, EngineEvent};

enum EngineCommand {
    Submit {
        submission_id: SubmissionId,
        request: AnalysisRequest,
    },
}

/// Runs submissions on a background tokio runtime and reports completions
/// on the event channel returned by [`EngineHandle::spawn`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(
        settings: ClientSettings,
    ) -> Result<(Self, mpsc::Receiver<EngineEvent>), EngineError> {
        let client = ReqwestAnalysisClient::new(settings)?;
        Self::spawn(Arc::new(client))
    }

    pub fn spawn(
        client: Arc<dyn AnalysisClient>,
    ) -> Result<(Self, mpsc::Receiver<EngineEvent>), EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok((Self { cmd_tx }, event_rx))
    }

    /// Queue a submission. Several may be in flight at once; each reports
    /// exactly one `AnalysisCompleted`.
    pub fn submit(&self, submission_id: SubmissionId, request: AnalysisRequest) {
        if self
            .cmd_tx
            .send(EngineCommand::Submit {
                submission_id,
                request,
            })
            .is_err()
        {
            analyzer_warn!("Engine worker gone; submission {} dropped", submission_id);
        }
    }
}

async fn handle_command(
    client: &dyn AnalysisClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Submit {
            submission_id,
            request,
        } => {
            let result = client.analyze(&request).await;
            match &result {
                Ok(_) => analyzer_debug!("Submission {} succeeded", submission_id),
                Err(err) => analyzer_warn!("Submission {} failed: {}", submission_id, err),
            }
            let _ = event_tx.send(EngineEvent::AnalysisCompleted {
                submission_id,
                result,
            });
        }
    }
}
