use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::host::MapHost;

/// Speed and visibility shared between a layer and its controls.
pub(crate) struct LiveState {
    speed_bits: AtomicU64,
    visible: AtomicBool,
    host: Mutex<Option<Arc<dyn MapHost>>>,
}

impl LiveState {
    pub(crate) fn new(speed: f64) -> Self {
        Self {
            speed_bits: AtomicU64::new(speed.to_bits()),
            visible: AtomicBool::new(true),
            host: Mutex::new(None),
        }
    }

    pub(crate) fn speed(&self) -> f64 {
        f64::from_bits(self.speed_bits.load(Ordering::Relaxed))
    }

    pub(crate) fn is_visible(&self) -> bool {
        self.visible.load(Ordering::Relaxed)
    }

    /// Remember the host so later changes can ask it to redraw.
    pub(crate) fn attach_host(&self, host: Arc<dyn MapHost>) {
        *self.host.lock().unwrap_or_else(PoisonError::into_inner) = Some(host);
    }

    /// Drop the host; controls that outlive the layer stop repainting it.
    pub(crate) fn detach_host(&self) {
        self.host
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }

    pub(crate) fn request_repaint(&self) {
        let host = self
            .host
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(host) = host {
            host.trigger_repaint();
        }
    }
}

/// Runtime handle to a layer's speed and visibility.
///
/// Cheap to clone; every clone talks to the same layer. Values are taken as
/// given: a negative speed runs the vehicles backwards and hiding a layer
/// pauses it where it is.
#[derive(Clone)]
pub struct LayerControls {
    state: Arc<LiveState>,
}

impl LayerControls {
    pub(crate) fn new(state: Arc<LiveState>) -> Self {
        Self { state }
    }

    pub fn set_speed(&self, speed: f64) {
        self.state
            .speed_bits
            .store(speed.to_bits(), Ordering::Relaxed);
    }

    pub fn speed(&self) -> f64 {
        self.state.speed()
    }

    /// Show or hide the layer and ask the host for a frame so the change is
    /// seen even when the map is otherwise idle.
    pub fn set_visible(&self, visible: bool) {
        self.state.visible.store(visible, Ordering::Relaxed);
        self.state.request_repaint();
    }

    pub fn is_visible(&self) -> bool {
        self.state.is_visible()
    }
}

impl fmt::Debug for LayerControls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayerControls")
            .field("speed", &self.speed())
            .field("visible", &self.is_visible())
            .finish()
    }
}
