//! Observable project store.
//!
//! # Responsibility
//! - Act as the single source of truth for the project collection.
//! - Notify every registered listener with a snapshot after each
//!   mutation.
//!
//! # Invariants
//! - `add_project` is the only mutator of the project sequence and is
//!   strictly additive.
//! - Listener invocation order equals registration order; each listener
//!   fires exactly once per mutation.
//! - Listeners receive a copy detached from the live sequence.

use crate::model::project::{Project, ProjectId};
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// Callback receiving a point-in-time copy of the full project
/// sequence. Listeners that keep a snapshot clone it out of the
/// borrowed slice.
pub type ProjectListener = Box<dyn FnMut(&[Project])>;

/// Handle returned from listener registration.
///
/// Handles stay valid for the store lifetime; releasing one through
/// `remove_listener` is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Shared single-threaded handle to one logical store.
///
/// The application constructs exactly one store and hands clones of
/// this handle to whichever adapters need it.
pub type SharedProjectStore = Rc<RefCell<ProjectStore>>;

/// Single source of truth for tracked projects and their observers.
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<(ListenerId, ProjectListener)>,
    next_listener_id: u64,
}

impl ProjectStore {
    /// Creates an empty store with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a fresh store in the shared handle that adapters clone.
    pub fn shared() -> SharedProjectStore {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Registers a listener invoked with a snapshot on every change.
    ///
    /// # Contract
    /// - Registration is never deduplicated: registering equivalent
    ///   callbacks twice yields two invocations per change.
    /// - The returned handle identifies this registration only.
    pub fn add_listener(&mut self, listener: impl FnMut(&[Project]) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes one previously registered listener.
    ///
    /// Returns whether a registration was released. Remaining listeners
    /// keep their relative order.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Appends a new project and notifies every listener.
    ///
    /// # Contract
    /// - Field values are assumed already validated by the caller; this
    ///   operation performs no validation of its own.
    /// - The new project gets a freshly generated unique ID.
    /// - Listeners run synchronously, in registration order, before
    ///   this call returns.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id;
        self.projects.push(project);
        debug!(
            "event=project_added module=store status=ok project_count={} listener_count={}",
            self.projects.len(),
            self.listeners.len()
        );
        self.notify_listeners();
        id
    }

    /// Returns the number of tracked projects.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns whether no project has been added yet.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Returns a detached copy of the current project sequence.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    fn notify_listeners(&mut self) {
        // One copy per mutation, detached from `self.projects`, so a
        // snapshot kept by a listener is unaffected by later calls.
        let snapshot = self.projects.clone();
        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
    }
}
