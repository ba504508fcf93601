use gloo::events::EventListener;
use std::cell::Cell;
use std::rc::Rc;
use web_sys::{window, Element};
use yew::prelude::*;

fn is_in_view(element: &Element) -> bool {
    let viewport = window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let rect = element.get_bounding_client_rect();
    rect.top() < viewport && rect.bottom() > 0.0
}

/// Flips to `true` the first time the referenced node scrolls into the
/// viewport and stays there.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let seen = use_state(|| false);

    {
        let seen = seen.clone();
        use_effect_with(node, move |node| {
            let fired = Rc::new(Cell::new(false));
            let check = {
                let node = node.clone();
                move || {
                    if fired.get() {
                        return;
                    }
                    if let Some(element) = node.cast::<Element>() {
                        if is_in_view(&element) {
                            fired.set(true);
                            seen.set(true);
                        }
                    }
                }
            };
            check();

            let listener = window().map(|window| {
                EventListener::new(&window, "scroll", move |_| check())
            });

            move || drop(listener)
        });
    }

    *seen
}
