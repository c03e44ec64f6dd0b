//! Keyboard listener registrations.
//!
//! A widget that wants key events holds a [`KeyListener`]. The host only
//! routes keys to targets with a live registration, and a registration ends
//! when its guard is dropped, so no path can leave a stale listener behind.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::trace;

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    attached: u64,
    live: HashMap<u64, usize>,
}

/// Shared table of live keyboard registrations, keyed by target index.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    inner: Rc<RefCell<Registry>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `target` for key events until the returned guard is dropped.
    pub fn attach(&self, target: usize) -> KeyListener {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.attached += 1;
        registry.live.insert(id, target);
        trace!("key listener {id} attached to target {target}");

        KeyListener {
            id,
            registry: Rc::clone(&self.inner),
        }
    }

    pub fn is_listening(&self, target: usize) -> bool {
        self.inner.borrow().live.values().any(|t| *t == target)
    }

    /// Number of registrations currently alive.
    pub fn live_count(&self) -> usize {
        self.inner.borrow().live.len()
    }

    /// Number of registrations ever made.
    pub fn attach_count(&self) -> u64 {
        self.inner.borrow().attached
    }
}

/// Guard for one registration.
#[derive(Debug)]
pub struct KeyListener {
    id: u64,
    registry: Rc<RefCell<Registry>>,
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        if let Some(target) = self.registry.borrow_mut().live.remove(&self.id) {
            trace!("key listener {} detached from target {target}", self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_drop_detaches() {
        let registry = ListenerRegistry::new();
        let a = registry.attach(3);
        let b = registry.attach(5);
        assert!(registry.is_listening(3));
        assert!(registry.is_listening(5));
        assert_eq!(registry.live_count(), 2);

        drop(a);
        assert!(!registry.is_listening(3));
        assert!(registry.is_listening(5));

        drop(b);
        assert_eq!(registry.live_count(), 0);
        assert_eq!(registry.attach_count(), 2);
    }

    #[test]
    fn clones_share_the_same_table() {
        let registry = ListenerRegistry::new();
        let view = registry.clone();
        let _guard = registry.attach(1);
        assert!(view.is_listening(1));
    }
}
