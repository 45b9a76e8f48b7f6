//! Mount tracking for screens.
//!
//! Async loads capture a [`MountToken`] when they start. When the response
//! arrives it is applied through the token, which drops it if the screen was
//! unmounted (or remounted) in the meantime.

use std::sync::Arc;

use parking_lot::Mutex;

#[derive(Debug, Default)]
struct State {
    epoch: u64,
    mounted: bool,
}

/// Mounted/unmounted state of a screen, shared by its clones.
#[derive(Debug, Clone, Default)]
pub struct Lifecycle {
    state: Arc<Mutex<State>>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the screen mounted and start a new epoch.
    pub fn mount(&self) -> MountToken {
        let mut state = self.state.lock();
        state.epoch += 1;
        state.mounted = true;
        MountToken {
            epoch: state.epoch,
            lifecycle: self.clone(),
        }
    }

    /// Mark the screen unmounted. Outstanding tokens go stale.
    pub fn unmount(&self) {
        let mut state = self.state.lock();
        state.epoch += 1;
        state.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.state.lock().mounted
    }

    /// A token for the current epoch, if mounted.
    pub fn token(&self) -> Option<MountToken> {
        let state = self.state.lock();
        state.mounted.then(|| MountToken {
            epoch: state.epoch,
            lifecycle: self.clone(),
        })
    }
}

/// Proof that a screen was mounted when some work started.
#[derive(Debug, Clone)]
pub struct MountToken {
    epoch: u64,
    lifecycle: Lifecycle,
}

impl MountToken {
    /// Check if the screen is still mounted in the same epoch.
    pub fn is_live(&self) -> bool {
        let state = self.lifecycle.state.lock();
        state.mounted && state.epoch == self.epoch
    }

    /// Run `f` only if the token is live.
    ///
    /// The lifecycle stays locked while `f` runs, so an unmount cannot
    /// interleave with the update.
    pub fn apply<T>(&self, f: impl FnOnce() -> T) -> Option<T> {
        let state = self.lifecycle.state.lock();
        if state.mounted && state.epoch == self.epoch {
            Some(f())
        } else {
            tracing::debug!(epoch = self.epoch, "dropping result for unmounted screen");
            None
        }
    }
}
