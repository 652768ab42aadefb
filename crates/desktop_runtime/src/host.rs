//! Browser environment queries and effect execution.

use desktop_app_contract::window_dom_id;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    model::{WindowId, WindowRect},
    reducer::RuntimeEffect,
};

const FALLBACK_WIDTH: i32 = 1024;
const FALLBACK_HEIGHT: i32 = 768;

/// Executes a single [`RuntimeEffect`] emitted by the reducer.
pub fn run_runtime_effect(effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::FocusWindowElement(window_id) => focus_window_element(window_id),
    }
}

/// Moves keyboard focus into a window on the next tick, after it has rendered.
pub fn focus_window_element(window_id: WindowId) {
    let dom_id = window_dom_id(window_id.0);
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let callback = Closure::once_into_js(move || {
            let Some(document) = web_sys::window().and_then(|window| window.document()) else {
                return;
            };
            let Some(element) = document
                .get_element_by_id(&dom_id)
                .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
            else {
                return;
            };
            // Leave focus alone when the click already landed on a control inside the window.
            let already_inside = document
                .active_element()
                .is_some_and(|active| element.contains(Some(&*active)));
            if !already_inside {
                let _ = element.focus();
            }
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = dom_id;
}

/// Desktop area available to windows: the browser viewport minus the taskbar.
pub fn desktop_viewport_rect(taskbar_height_px: i32) -> WindowRect {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_WIDTH);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(FALLBACK_HEIGHT);
            return viewport_from_inner_size(width, height, taskbar_height_px);
        }
    }

    viewport_from_inner_size(FALLBACK_WIDTH, FALLBACK_HEIGHT, taskbar_height_px)
}

fn viewport_from_inner_size(width: i32, height: i32, taskbar_height_px: i32) -> WindowRect {
    WindowRect {
        x: 0,
        y: 0,
        w: width.max(320),
        h: (height - taskbar_height_px).max(220),
    }
}
