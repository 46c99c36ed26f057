// crates/folio-app/src/timing.rs
// Debounce/throttle wrappers backed by browser timers

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{Gate, Throttle};
use gloo_timers::callback::Timeout;

fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Wrap `f` so a burst of calls runs it once, `wait_ms` after the last call.
/// Replacing the pending `Timeout` drops it, which cancels the timer; a
/// timer that already fired just sits in the slot until the next call.
pub fn debounced<F>(wait_ms: u32, f: F) -> impl FnMut() + 'static
where
    F: Fn() + 'static,
{
    let f = Rc::new(f);
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    move || {
        let f = f.clone();
        *pending.borrow_mut() = Some(Timeout::new(wait_ms, move || f()));
    }
}

/// Wrap `f` so it runs at most once per `limit_ms`, plus one trailing run
/// that picks up whatever happened inside the window
pub fn throttled<F>(limit_ms: u32, f: F) -> impl FnMut() + 'static
where
    F: Fn() + 'static,
{
    let f = Rc::new(f);
    let state = Rc::new(RefCell::new(Throttle::new(limit_ms)));
    let trailing: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    move || {
        let gate = state.borrow_mut().call(now_ms());
        match gate {
            Gate::Now => f(),
            Gate::Later(wait) => {
                let state = state.clone();
                let f = f.clone();
                let timeout = Timeout::new(wait, move || {
                    state.borrow_mut().ran(now_ms());
                    f();
                });
                *trailing.borrow_mut() = Some(timeout);
            }
            Gate::Skip => {}
        }
    }
}
