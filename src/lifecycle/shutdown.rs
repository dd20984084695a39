//! Shutdown coordination for the gateway.

use tokio::sync::broadcast;

/// Broadcasts a single "stop" event to every running server.
///
/// Tests use it to stop gateways they spawned; the binary keeps one alive
/// alongside OS signal handling.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// A receiver that resolves once [`Shutdown::trigger`] is called.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Signal every subscriber. Returns how many were listening.
    pub fn trigger(&self) -> usize {
        self.tx.send(()).unwrap_or(0)
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
