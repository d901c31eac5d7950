use std::cell::RefCell;

use yew::prelude::*;
use web_sys::window;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::config;

/// Page position of one section, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// The section containing `scroll_y + offset`. Above the first section the
/// first one is active; in a gap the last section started wins.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64, offset: f64) -> Option<&str> {
    let position = scroll_y + offset;
    sections
        .iter()
        .find(|s| position >= s.top && position < s.top + s.height)
        .or_else(|| sections.iter().filter(|s| s.top <= position).last())
        .or_else(|| sections.first())
        .map(|s| s.id.as_str())
}

fn measure(ids: &[&str]) -> Vec<SectionBounds> {
    let Some(window) = window() else {
        return Vec::new();
    };
    let Some(document) = window.document() else {
        return Vec::new();
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    ids.iter()
        .filter_map(|id| {
            let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
            Some(SectionBounds {
                id: id.to_string(),
                top: rect.top() + scroll_y,
                height: rect.height(),
            })
        })
        .collect()
}

fn replace_hash(id: &str) {
    if let Some(history) = window().and_then(|w| w.history().ok()) {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&format!("#{}", id)));
    }
}

/// Tracks which of `ids` is on screen and mirrors it into the URL hash.
#[hook]
pub fn use_scroll_spy(ids: &'static [&'static str]) -> String {
    let active = use_state(|| ids.first().map(|id| id.to_string()).unwrap_or_default());

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let last = RefCell::new((*active).clone());
                let on_scroll = move || {
                    let sections = measure(ids);
                    let scroll_y = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    if let Some(id) = active_section(&sections, scroll_y, config::SCROLL_SPY_OFFSET) {
                        if *last.borrow() != id {
                            *last.borrow_mut() = id.to_string();
                            replace_hash(id);
                            active.set(id.to_string());
                        }
                    }
                };
                on_scroll();
                let listener = Closure::<dyn Fn()>::new(on_scroll);
                let window = window();
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
                }
                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    (*active).clone()
}
