//! Resolution route tracking
//!
//! The route is the stack of component ids currently being resolved by one
//! repository. An id that shows up twice on the same chain is a cycle.
//! Each thread has its own chain, so concurrent lookups of the same id on a
//! shared repository are not mistaken for recursion.

use std::collections::HashMap;
use std::thread::{self, ThreadId};

use pac_domain::error::{Error, Result};
use parking_lot::Mutex;

/// Stacks of ids under resolution, one per resolving thread
#[derive(Debug, Default)]
pub(crate) struct RouteStack {
    frames: Mutex<HashMap<ThreadId, Vec<String>>>,
}

impl RouteStack {
    /// Push `id`, failing with the current route if it is already present
    ///
    /// The returned guard pops the frame when dropped, so the stack is
    /// restored on every exit path, including errors and unwinding.
    pub(crate) fn enter(&self, id: &str) -> Result<RouteGuard<'_>> {
        let thread = thread::current().id();
        let mut routes = self.frames.lock();
        let frames = routes.entry(thread).or_default();
        if frames.iter().any(|frame| frame == id) {
            return Err(Error::recursive_reference(id, frames.clone()));
        }
        frames.push(id.to_string());
        Ok(RouteGuard {
            stack: self,
            thread,
        })
    }

    /// Copy of the calling thread's route, outermost first
    pub(crate) fn snapshot(&self) -> Vec<String> {
        self.frames
            .lock()
            .get(&thread::current().id())
            .cloned()
            .unwrap_or_default()
    }
}

/// Pops one frame on drop
#[must_use = "dropping the guard leaves the route immediately"]
pub(crate) struct RouteGuard<'a> {
    stack: &'a RouteStack,
    thread: ThreadId,
}

impl Drop for RouteGuard<'_> {
    fn drop(&mut self) {
        let mut routes = self.stack.frames.lock();
        if let Some(frames) = routes.get_mut(&self.thread) {
            frames.pop();
            if frames.is_empty() {
                routes.remove(&self.thread);
            }
        }
    }
}
