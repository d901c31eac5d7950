use yew::prelude::*;
use web_sys::window;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Scrolls to the top on mount and whenever the URL hash is cleared.
#[function_component(ScrollToTop)]
pub fn scroll_to_top_component() -> Html {
    use_effect_with_deps(
        move |_| {
            let has_hash = window()
                .and_then(|w| w.location().hash().ok())
                .is_some_and(|hash| hash.len() > 1);
            if !has_hash {
                scroll_to_top();
            }

            let on_hash_change = Closure::<dyn Fn()>::new(move || {
                let hash = window().and_then(|w| w.location().hash().ok()).unwrap_or_default();
                if hash.len() <= 1 {
                    scroll_to_top();
                }
            });
            let window = window();
            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref());
            }
            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref());
                }
            }
        },
        (),
    );

    html! {}
}
