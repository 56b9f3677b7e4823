use std::sync::Arc;

use anyhow::{bail, Context, Result};
use log::info;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::attention::{AttentionTransition, FrameObservation};

use super::{ProctorSession, SessionSnapshot};

/// Inputs delivered by the host's frame producer and visibility signal.
#[derive(Debug)]
pub enum MonitorInput {
    Frame(FrameObservation),
    Visibility { hidden: bool },
}

/// Events forwarded to the presentation layer, emitted only on actual state
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorEvent {
    LookedAway,
    Refocused,
    LeftTab,
}

/// Async wrapper around a [`ProctorSession`] for hosts whose frame producer
/// runs on a real parallel runtime. All mutation happens inside the monitor
/// loop under a single mutex, so the one-counter-per-frame invariant holds
/// even with concurrent snapshot readers.
pub struct MonitorController {
    session: Arc<Mutex<ProctorSession>>,
    handle: Option<JoinHandle<()>>,
    cancel_token: Option<CancellationToken>,
}

impl MonitorController {
    pub fn new(session: ProctorSession) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            handle: None,
            cancel_token: None,
        }
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.lock().await.snapshot()
    }

    /// Spawn the monitor loop consuming `inputs`; transitions are forwarded
    /// on `events`.
    pub fn start(
        &mut self,
        inputs: mpsc::Receiver<MonitorInput>,
        events: mpsc::UnboundedSender<MonitorEvent>,
    ) -> Result<()> {
        if self.handle.is_some() {
            bail!("monitoring already active");
        }

        let cancel_token = CancellationToken::new();
        let token_clone = cancel_token.clone();

        let handle = tokio::spawn(monitor_loop(
            self.session.clone(),
            inputs,
            events,
            token_clone,
        ));

        self.handle = Some(handle);
        self.cancel_token = Some(cancel_token);
        Ok(())
    }

    pub async fn stop(&mut self) -> Result<()> {
        if let Some(token) = self.cancel_token.take() {
            token.cancel();
        }

        if let Some(handle) = self.handle.take() {
            handle
                .await
                .context("monitor loop task failed to join")
                .map(|_| ())
        } else {
            Ok(())
        }
    }

    pub async fn dismiss_look_away_warning(&self) {
        self.session.lock().await.dismiss_look_away_warning();
    }

    pub async fn dismiss_tab_switch_warning(&self) {
        self.session.lock().await.dismiss_tab_switch_warning();
    }
}

async fn monitor_loop(
    session: Arc<Mutex<ProctorSession>>,
    mut inputs: mpsc::Receiver<MonitorInput>,
    events: mpsc::UnboundedSender<MonitorEvent>,
    cancel_token: CancellationToken,
) {
    loop {
        tokio::select! {
            input = inputs.recv() => {
                let Some(input) = input else {
                    // Producer gone (camera denied or torn down): attention
                    // evidence simply stops, state freezes.
                    info!("monitor input channel closed; loop exiting");
                    break;
                };

                let event = {
                    let mut guard = session.lock().await;
                    match input {
                        MonitorInput::Frame(observation) => {
                            guard.observe_frame(&observation).map(|transition| match transition {
                                AttentionTransition::LookedAway => MonitorEvent::LookedAway,
                                AttentionTransition::Refocused => MonitorEvent::Refocused,
                            })
                        }
                        MonitorInput::Visibility { hidden } => {
                            guard.record_visibility(hidden).then_some(MonitorEvent::LeftTab)
                        }
                    }
                };

                if let Some(event) = event {
                    if events.send(event).is_err() {
                        info!("event consumer dropped; monitor loop exiting");
                        break;
                    }
                }
            }
            _ = cancel_token.cancelled() => {
                info!("monitor loop shutting down");
                break;
            }
        }
    }
}
