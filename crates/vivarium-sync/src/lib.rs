//! Vivarium Sync - State reconciliation and interpolation engine
//!
//! This crate turns the server's irregular stream of snapshots and
//! incremental updates into smooth, continuously-advancing visual state:
//!
//! - **Cadence estimation**: bounded rolling window of inter-update
//!   intervals, yielding the expected time between arrivals
//! - **Reconciliation**: double-buffered live/staged organism sets with a
//!   deliberate one-update interpolation lag
//! - **Frame driving**: per-refresh fraction computation and pose
//!   blending, dispatched to an external renderer
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Client                                 │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────┐  │
//! │  │  Transport   │─▶│  Reconciliation  │─▶│   Cadence    │  │
//! │  └──────────────┘  │      Store       │  │  Estimator   │  │
//! │                    └──────────────────┘  └──────────────┘  │
//! │                             │                   │           │
//! │                             ▼                   ▼           │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────┐  │
//! │  │   Display    │─▶│   Frame Driver   │─▶│   Renderer   │  │
//! │  └──────────────┘  └──────────────────┘  └──────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use vivarium_sync::Session;
//!
//! let mut session = Session::new();
//!
//! // Transport loop: feed messages in arrival order
//! session.handle_raw(&raw_json, now_ms)?;
//!
//! // Display loop: tick once per refresh
//! session.tick(now_ms, &mut renderer);
//! ```
//!
//! Everything runs on one cooperative scheduler; message handling and
//! frame ticking interleave but never execute concurrently.

mod cadence;
mod error;
mod frame;
mod render;
mod session;
mod store;

pub use cadence::{CadenceEstimator, FALLBACK_CADENCE_MS, MAX_SAMPLES, MIN_INTERVAL_MS};
pub use error::{Error, Result};
pub use frame::FrameDriver;
pub use render::{RecordingRenderer, RenderKind, Renderer};
pub use session::Session;
pub use store::ReconciliationStore;

// Re-export the wire contract for convenience
pub use vivarium_core::{EntryMap, Organism, OrganismId, OrganismRecord, Pose, ServerMessage, StateKind};
