use ece_shared::motion::scroll_progress;
use gloo::events::EventListener;
use web_sys::window;
use yew::prelude::*;

fn read_scroll_progress() -> f64 {
    let Some(window) = window() else {
        return 0.0;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    scroll_progress(scroll_y, height, viewport)
}

/// Page scroll position as 0.0 (top) to 1.0 (bottom), kept current while the
/// calling component is mounted.
#[hook]
pub fn use_scroll_progress() -> f64 {
    let progress = use_state(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with((), move |_| {
            progress.set(read_scroll_progress());
            let listener = window().map(|window| {
                let progress = progress.clone();
                EventListener::new(&window, "scroll", move |_| {
                    progress.set(read_scroll_progress());
                })
            });

            move || drop(listener)
        });
    }

    *progress
}
