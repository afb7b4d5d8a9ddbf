//! Sequential processing of voice events.

use tokio::{sync::mpsc, task::JoinHandle};

use crate::server::{model::identity::VoiceEvent, service::identity::IdentityEngine};

/// Voice events buffered between the gateway handler and the dispatcher.
pub const EVENT_QUEUE_CAPACITY: usize = 256;

/// Spawns the task feeding queued events to the engine one at a time.
///
/// The task ends once every sender has been dropped.
pub fn spawn_dispatcher(
    engine: IdentityEngine,
    mut events: mpsc::Receiver<VoiceEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            engine.handle(event).await;
        }

        tracing::info!("Voice event dispatcher stopped");
    })
}
