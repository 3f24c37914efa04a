//! Liveness flag for controllers whose host view can go away mid-request.
//!
//! In-flight requests are never aborted. Instead every controller checks its
//! guard after each `.await` and drops the result once the view is gone.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct MountGuard {
    mounted: Arc<AtomicBool>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    /// Marks the view as gone. Irreversible.
    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::Release);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let guard = MountGuard::new();
        let copy = guard.clone();
        assert!(copy.is_mounted());
        guard.unmount();
        assert!(!copy.is_mounted());
    }
}
