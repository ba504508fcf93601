use gloo_render::{request_animation_frame, AnimationFrame};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A running requestAnimationFrame loop. Dropping it cancels the pending
/// frame, which also breaks the closure's reference back to the handle.
pub struct FrameLoop {
    pending: Rc<RefCell<Option<AnimationFrame>>>,
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    /// Calls `on_frame` with the host timestamp (ms) once per display frame
    /// until the loop is dropped.
    pub fn start<F>(on_frame: F) -> Self
    where
        F: FnMut(f64) + 'static,
    {
        let pending = Rc::new(RefCell::new(None));
        let running = Rc::new(Cell::new(true));
        schedule(pending.clone(), running.clone(), Rc::new(RefCell::new(on_frame)));
        Self { pending, running }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.running.set(false);
        self.pending.borrow_mut().take();
    }
}

fn schedule<F>(
    pending: Rc<RefCell<Option<AnimationFrame>>>,
    running: Rc<Cell<bool>>,
    on_frame: Rc<RefCell<F>>,
) where
    F: FnMut(f64) + 'static,
{
    if !running.get() {
        return;
    }
    let next = pending.clone();
    let still_running = running.clone();
    let frame = request_animation_frame(move |timestamp| {
        (&mut *on_frame.borrow_mut())(timestamp);
        // on_frame may have torn the loop down
        schedule(next, still_running, on_frame);
    });
    *pending.borrow_mut() = Some(frame);
}
