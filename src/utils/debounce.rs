use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Listens for window resizes and runs `callback` once they have stopped for `delay_ms`.
///
/// Returns `None` outside a browser window. The listener is removed when the returned
/// value is dropped, so keep it alive for as long as the owning component is mounted:
///
/// ```rust,ignore
/// use_effect_with(container_ref.clone(), move |container_ref| {
///     let listener = on_resize_settled(move || redraw(), 150);
///     move || drop(listener)
/// });
/// ```
pub fn on_resize_settled<F>(callback: F, delay_ms: u32) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let window = web_sys::window()?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    Some(EventListener::new(&window, "resize", move |_| {
        // Dropping a Timeout cancels it
        let cb = callback.clone();
        pending
            .borrow_mut()
            .replace(Timeout::new(delay_ms, move || cb()));
    }))
}
