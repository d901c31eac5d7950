use yew::prelude::*;
use web_sys::{window, Element};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

// How far into the viewport an element must be before it counts as seen.
const REVEAL_MARGIN: f64 = 80.0;

/// True when a box with the given viewport-relative edges overlaps the
/// viewport by at least `margin` pixels.
pub fn in_view(top: f64, bottom: f64, viewport_height: f64, margin: f64) -> bool {
    top < viewport_height - margin && bottom > margin.min(viewport_height)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

/// Adds `visible` to its wrapper the first time the wrapper scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);
    let seen_now = *visible;

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |seen: &bool| {
                let listener = if *seen {
                    None
                } else {
                    let check = move || {
                        let Some(element) = node.cast::<Element>() else {
                            return;
                        };
                        let height = window()
                            .and_then(|w| w.inner_height().ok())
                            .and_then(|h| h.as_f64())
                            .unwrap_or(0.0);
                        let rect = element.get_bounding_client_rect();
                        if in_view(rect.top(), rect.bottom(), height, REVEAL_MARGIN) {
                            visible.set(true);
                        }
                    };
                    check();
                    let closure = Closure::<dyn Fn()>::new(check);
                    window().map(|window| {
                        let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
                        (window, closure)
                    })
                };
                move || {
                    if let Some((window, closure)) = listener {
                        let _ = window.remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
                    }
                }
            },
            seen_now,
        );
    }

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone(), (*visible).then(|| "visible"))}>
            { for props.children.iter() }
        </div>
    }
}
