//! Self-rescheduling animation-frame handle
//!
//! Wraps `requestAnimationFrame` so each animated component owns exactly
//! one pending callback, and teardown (or a phase exit) can cancel it
//! deterministically instead of leaving a stale callback to fire into
//! state that no longer exists.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

struct Inner {
    raf_id: Option<i32>,
    callback: Option<Closure<dyn FnMut(f64)>>,
    running: bool,
}

/// Single-owner handle around a self-rescheduling frame callback.
///
/// Invariant: at most one pending animation-frame request per handle at
/// any time, and a cancelled handle's callback never fires again.
pub struct FrameLoop {
    inner: Rc<RefCell<Inner>>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                raf_id: None,
                callback: None,
                running: false,
            })),
        }
    }

    /// Install `frame` and request its first invocation. The callback
    /// receives the animation-frame timestamp and returns whether to
    /// keep running; returning `false` stops the loop without a stale
    /// re-arm. Any previously pending request is cancelled first.
    pub fn start<F>(&self, mut frame: F)
    where
        F: FnMut(f64) -> bool + 'static,
    {
        self.cancel();

        let inner = Rc::clone(&self.inner);
        let callback = Closure::new(move |time: f64| {
            {
                let mut guard = inner.borrow_mut();
                guard.raf_id = None;
                if !guard.running {
                    return;
                }
            }
            if frame(time) {
                arm(&inner);
            } else {
                inner.borrow_mut().running = false;
            }
        });

        {
            let mut guard = self.inner.borrow_mut();
            guard.callback = Some(callback);
            guard.running = true;
        }
        arm(&self.inner);
    }

    /// Whether the loop will still fire (or re-arm) a callback
    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    /// Cancel the pending request, if any, and drop the installed
    /// callback. After this returns the callback cannot fire again.
    pub fn cancel(&self) {
        let mut guard = self.inner.borrow_mut();
        guard.running = false;
        if let Some(id) = guard.raf_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        guard.callback = None;
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Request the next frame unless one is already pending
fn arm(inner: &Rc<RefCell<Inner>>) {
    let mut guard = inner.borrow_mut();
    if !guard.running || guard.raf_id.is_some() {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Some(callback) = guard.callback.as_ref() {
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => guard.raf_id = Some(id),
            Err(err) => log::warn!("requestAnimationFrame failed: {err:?}"),
        }
    }
}
