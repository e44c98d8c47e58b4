//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::HomeworkApi;
use crossbeam_channel::{Receiver, Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{MutationKind, UiEvent};

/// Starts the worker thread. Each command runs as its own task, so
/// completions may arrive in any order.
pub fn launch<A>(api: A, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>)
where
    A: HomeworkApi + 'static,
{
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.send(UiEvent::BackendFailed(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let api = Arc::new(api);
        deliver_ui_event(&ui_tx, UiEvent::Info("Backend worker ready".to_string()));
        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                let api = api.clone();
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    let event = execute(api.as_ref(), cmd).await;
                    deliver_ui_event(&ui_tx, event);
                });
            }
            tracing::info!("ui command queue closed; backend worker stopping");
        });
    });
}

/// Hands a result to the UI without blocking the runtime; returns whether it
/// was queued.
pub fn deliver_ui_event(ui_tx: &Sender<UiEvent>, event: UiEvent) -> bool {
    match ui_tx.try_send(event) {
        Ok(()) => true,
        Err(TrySendError::Full(event)) => {
            tracing::warn!("ui event queue is full; dropping backend result {event:?}");
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::warn!("ui event queue closed; dropping backend result");
            false
        }
    }
}

pub async fn execute<A>(api: &A, cmd: BackendCommand) -> UiEvent
where
    A: HomeworkApi + ?Sized,
{
    match cmd {
        BackendCommand::Load => match api.list_assignments().await {
            Ok(items) => UiEvent::Loaded(Ok(items)),
            Err(err) => {
                tracing::error!("Error fetching homework: {err}");
                UiEvent::Loaded(Err(err.to_string()))
            }
        },
        BackendCommand::Create(assignment) => mutation_event(
            MutationKind::Create,
            api.create_assignment(&assignment).await,
        ),
        BackendCommand::SetCompleted { id, completed } => mutation_event(
            MutationKind::Toggle,
            api.set_completed(id, completed).await,
        ),
        BackendCommand::Delete { id } => {
            mutation_event(MutationKind::Delete, api.delete_assignment(id).await)
        }
    }
}

fn mutation_event(kind: MutationKind, result: client_core::ClientResult<()>) -> UiEvent {
    match result {
        Ok(()) => UiEvent::MutationApplied(kind),
        Err(err) => UiEvent::MutationFailed {
            kind,
            message: err.to_string(),
        },
    }
}
