use std::rc::Rc;

use log::trace;

pub trait Observer<V: ?Sized, E> {
    fn update(&self, source: &V, event: E);
}

pub type SharedObserver<V, E> = Rc<dyn Observer<V, E>>;

pub trait Subject<V: ?Sized, E> {
    fn register_observer(&mut self, observer: SharedObserver<V, E>);
    fn unregister_observer(&mut self, observer: &SharedObserver<V, E>);
    fn notify_observers(&self, event: E);
}

/// Ordered observer list where membership is decided by handle identity.
///
/// Two observers built from the same value are still distinct members as long as
/// they live in different `Rc` allocations.
pub struct Observers<V: ?Sized, E> {
    entries: Vec<SharedObserver<V, E>>,
}

impl<V: ?Sized, E> Default for Observers<V, E> {
    fn default() -> Self {
        Observers { entries: vec![] }
    }
}

impl<V: ?Sized, E: Clone> Observers<V, E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, observer: &SharedObserver<V, E>) -> bool {
        self.entries.iter().any(|obs| Rc::ptr_eq(obs, observer))
    }

    /// Appends `observer` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, observer: SharedObserver<V, E>) -> bool {
        if self.contains(&observer) {
            return false;
        }
        self.entries.push(observer);
        trace!("Observer added, {} registered", self.entries.len());
        true
    }

    /// Removes the first entry sharing `observer`'s allocation. Returns whether one was found.
    pub fn remove(&mut self, observer: &SharedObserver<V, E>) -> bool {
        match self.entries.iter().position(|obs| Rc::ptr_eq(obs, observer)) {
            Some(index) => {
                self.entries.remove(index);
                trace!("Observer removed, {} registered", self.entries.len());
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered observers, in the order they were inserted.
    pub fn iter(&self) -> impl Iterator<Item = &SharedObserver<V, E>> {
        self.entries.iter()
    }

    pub fn notify(&self, source: &V, event: E) {
        for obs in self.iter() {
            obs.update(source, event.clone());
        }
    }
}
