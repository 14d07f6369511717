use std::sync::mpsc;
use std::thread;

use analyzer_core::{Effect, Msg, ACCEPTED_EXTENSIONS};
use analyzer_engine::{AnalysisRequest, EngineEvent, EngineHandle};
use analyzer_logging::{analyzer_info, analyzer_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(
        engine: EngineHandle,
        events: mpsc::Receiver<EngineEvent>,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Self {
        spawn_event_loop(events, msg_tx);
        Self { engine }
    }

    /// Runs effects and returns how many submissions were started.
    pub fn enqueue(&self, effects: Vec<Effect>) -> usize {
        let mut started = 0;
        for effect in effects {
            match effect {
                Effect::SubmitAnalysis {
                    submission_id,
                    file,
                    job_description,
                } => {
                    if !file.has_accepted_extension() {
                        analyzer_warn!(
                            "{} is not one of {}; submitting anyway",
                            file.name,
                            ACCEPTED_EXTENSIONS.join(", ")
                        );
                    }
                    analyzer_info!(
                        "SubmitAnalysis submission_id={} file={} jd_len={}",
                        submission_id,
                        file.name,
                        job_description.len()
                    );
                    self.engine.submit(
                        submission_id,
                        AnalysisRequest {
                            resume_name: file.name,
                            resume_path: file.path,
                            job_description,
                        },
                    );
                    started += 1;
                }
            }
        }
        started
    }
}

fn spawn_event_loop(events: mpsc::Receiver<EngineEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        for event in events {
            let msg = match event {
                EngineEvent::AnalysisCompleted {
                    submission_id,
                    result,
                } => Msg::AnalysisCompleted {
                    submission_id,
                    outcome: result.map_err(|err| err.message),
                },
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
    });
}
