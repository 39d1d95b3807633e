//! Client session
//!
//! Glue between the transport, the reconciliation store, and the frame
//! driver. The transport hands decoded messages (or raw JSON) in arrival
//! order; the display loop hands ticks. Both run interleaved on one
//! cooperative scheduler and never concurrently, so the session needs no
//! internal locking. A multi-threaded embedding must wrap the whole
//! session in a single mutex or confine it to one worker.

use crate::{FrameDriver, ReconciliationStore, Renderer, Result};
use tracing::debug;
use vivarium_core::ServerMessage;

/// A client session against one server connection
#[derive(Debug, Default)]
pub struct Session {
    store: ReconciliationStore,
    driver: FrameDriver,
}

impl Session {
    /// Create a session with an empty store and an uninitialized driver
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle the transport establishing a connection
    ///
    /// Starts the frame driver; ticks render nothing until the first
    /// snapshot arrives.
    pub fn handle_connect(&mut self) {
        debug!("connected, starting frame driver");
        self.driver.start();
    }

    /// Handle a decoded server message arriving at `now_ms`
    ///
    /// A `state` message resets the store from the snapshot and starts
    /// the frame driver; an `update` message runs a reconciliation pass.
    pub fn handle_message(&mut self, message: ServerMessage, now_ms: u64) {
        match message {
            ServerMessage::State(entries) => {
                self.store.reset_from_snapshot(entries, now_ms);
                self.driver.start();
            }
            ServerMessage::Update(entries) => {
                self.store.apply_update(entries, now_ms);
            }
        }
    }

    /// Decode a raw JSON envelope and handle it
    pub fn handle_raw(&mut self, raw: &str, now_ms: u64) -> Result<()> {
        let message: ServerMessage = serde_json::from_str(raw)?;
        self.handle_message(message, now_ms);
        Ok(())
    }

    /// Handle the connection dropping
    ///
    /// Clears the store as if an empty snapshot had arrived. The driver
    /// stays running; ticks against the empty store render nothing until
    /// the transport reconnects and a fresh snapshot arrives.
    pub fn handle_disconnect(&mut self, now_ms: u64) {
        debug!("connection lost, clearing population");
        self.store.clear(now_ms);
    }

    /// Render one frame at `now_ms`, returning the organism count rendered
    pub fn tick<R: Renderer>(&self, now_ms: u64, renderer: &mut R) -> usize {
        self.driver.tick(now_ms, &self.store, renderer)
    }

    /// Enable or disable the debug overlays
    pub fn set_debug(&mut self, debug: bool) {
        self.driver.set_debug(debug);
    }

    /// Flip the debug overlay flag
    pub fn toggle_debug(&mut self) {
        self.driver.toggle_debug();
    }

    /// Get the reconciliation store
    pub fn store(&self) -> &ReconciliationStore {
        &self.store
    }

    /// Get the frame driver
    pub fn driver(&self) -> &FrameDriver {
        &self.driver
    }
}
