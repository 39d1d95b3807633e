//! Frame driver
//!
//! Runs once per display refresh: computes the interpolation fraction for
//! the current frame and hands every live organism's blended pose to the
//! renderer. The driver itself keeps no timestamps; the reconciliation
//! store owns the interval baseline.

use crate::{ReconciliationStore, RenderKind, Renderer};
use tracing::trace;

/// Lifecycle state of the frame driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DriverState {
    /// No snapshot has arrived yet; ticks are no-ops
    #[default]
    Uninitialized,
    /// Ticking against a live store
    Running,
}

/// Per-frame driver of the render loop
///
/// Two states: `Uninitialized` until the first snapshot or connection
/// event, then `Running` for the rest of the process lifetime. There is
/// no terminal state; teardown is simply the caller ceasing to tick.
#[derive(Debug, Default)]
pub struct FrameDriver {
    state: DriverState,
    debug: bool,
}

impl FrameDriver {
    /// Create a driver in the uninitialized state
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition to the running state
    ///
    /// Called on the first successful connection/snapshot event.
    /// Idempotent.
    pub fn start(&mut self) {
        self.state = DriverState::Running;
    }

    /// Check if the driver has started ticking
    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    /// Enable or disable the debug overlays
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Flip the debug overlay flag
    pub fn toggle_debug(&mut self) {
        self.debug = !self.debug;
    }

    /// Check if the debug overlays are enabled
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Render one frame at `now_ms`
    ///
    /// Computes the fraction through the current inter-update interval,
    /// blends every live organism toward its staged update, and invokes
    /// the renderer with the body pose. In debug mode the perception and
    /// attack range overlays are also requested for every non-dead
    /// organism. A tick before the first snapshot is a no-op.
    ///
    /// Returns the number of organisms rendered.
    pub fn tick<R: Renderer>(
        &self,
        now_ms: u64,
        store: &ReconciliationStore,
        renderer: &mut R,
    ) -> usize {
        if !self.is_running() {
            trace!("tick before first snapshot, ignoring");
            return 0;
        }

        let fraction = store.fraction_at(now_ms);
        let mut rendered = 0;
        for (_, organism, staged) in store.entries() {
            let pose = organism.blend(staged, fraction);
            renderer.render(organism, &pose, RenderKind::Body);
            if self.debug && !organism.is_dead() {
                renderer.render(organism, &pose, RenderKind::Perception);
                renderer.render(organism, &pose, RenderKind::Attack);
            }
            rendered += 1;
        }
        rendered
    }
}
