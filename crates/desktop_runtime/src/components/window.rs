use desktop_app_contract::{window_dom_id, AppletHost, AppletMountContext};
use system_ui::{
    IconName, ResizeHandle, WindowBody, WindowControlButton, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::*;
use crate::{
    apps,
    model::{ResizeEdge, WindowId, WindowRecord, WindowRect},
};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Inline style for a window frame. Minimized windows stay mounted so applet state survives.
fn window_style(window: &WindowRecord, viewport: WindowRect) -> String {
    let mut style = window.rendered_rect(viewport).css();
    style.push_str(&format!("z-index:{};", window.z_index));
    if window.minimized {
        style.push_str("display:none;");
    }
    style
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let window = create_memo(move |_| runtime.registry.with(|r| r.get(window_id).cloned()));
    let Some(initial) = window.get_untracked() else {
        return ().into_view();
    };

    let active = create_memo(move |_| {
        runtime
            .registry
            .with(|r| r.topmost_visible().map(|w| w.id) == Some(window_id))
    });
    let minimized = create_memo(move |_| window.with(|w| w.as_ref().is_some_and(|w| w.minimized)));
    let maximized = create_memo(move |_| window.with(|w| w.as_ref().is_some_and(|w| w.maximized)));
    let title = Signal::derive(move || {
        window.with(|w| w.as_ref().map(|w| w.title.clone()).unwrap_or_default())
    });
    let style = Signal::derive(move || {
        let viewport = runtime.viewport.get();
        window.with(|w| {
            w.as_ref()
                .map(|w| window_style(w, viewport))
                .unwrap_or_default()
        })
    });

    let focus = Callback::new(move |_: web_sys::PointerEvent| {
        runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
    });
    let begin_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        if !maximized.get_untracked() {
            try_set_pointer_capture(&ev);
        }
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
            bounds: runtime.viewport.get_untracked(),
        });
    });
    let toggle_maximize_on_dblclick = Callback::new(move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::ToggleMaximize { window_id });
    });
    let minimize = Callback::new(move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::MinimizeWindow { window_id });
    });
    let toggle_maximize = Callback::new(move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::ToggleMaximize { window_id });
    });
    let close = Callback::new(move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
    });

    let application_type = initial.application_type.clone();
    let icon = launcher::icon_for(&application_type);
    let app_tag = application_type.tag().to_string();
    let host = AppletHost::new(Callback::new(move |title: String| {
        runtime.dispatch_action(DesktopAction::SetTitle { window_id, title });
    }));
    let body = apps::applet_module(&application_type).mount(AppletMountContext {
        window_id: window_id.0,
        application_type,
        host,
    });

    view! {
        <WindowFrame
            id=window_dom_id(window_id.0)
            style=style
            aria_label=title
            app_tag=app_tag
            active=active
            minimized=minimized
            maximized=maximized
            on_pointerdown=focus
        >
            <WindowTitleBar
                draggable=Signal::derive(move || !maximized.get())
                on_pointerdown=begin_move
                on_dblclick=toggle_maximize_on_dblclick
            >
                <WindowTitle icon=icon title=title />
                <WindowControls>
                    <WindowControlButton
                        icon=IconName::WindowMinimize
                        aria_label="Minimize window".to_string()
                        on_click=minimize
                    />
                    <WindowControlButton
                        icon=Signal::derive(move || {
                            if maximized.get() {
                                IconName::WindowRestore
                            } else {
                                IconName::WindowMaximize
                            }
                        })
                        aria_label=Signal::derive(move || {
                            if maximized.get() {
                                "Restore window".to_string()
                            } else {
                                "Maximize window".to_string()
                            }
                        })
                        on_click=toggle_maximize
                    />
                    <WindowControlButton
                        icon=IconName::Dismiss
                        aria_label="Close window".to_string()
                        on_click=close
                    />
                </WindowControls>
            </WindowTitleBar>

            <WindowBody>{body}</WindowBody>

            <Show when=move || !maximized.get() fallback=|| ()>
                {ResizeEdge::ALL
                    .into_iter()
                    .map(|edge| view! { <WindowResizeHandle window_id=window_id edge=edge /> })
                    .collect_view()}
            </Show>
        </WindowFrame>
    }
    .into_view()
}

#[component]
fn WindowResizeHandle(window_id: WindowId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let begin_resize = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id,
            edge,
            pointer: pointer_from_pointer_event(&ev),
            bounds: runtime.viewport.get_untracked(),
        });
    });

    view! { <ResizeHandle edge=edge.token() on_pointerdown=begin_resize /> }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::ApplicationType;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{Position, Size};

    fn record() -> WindowRecord {
        WindowRecord {
            id: WindowId(3),
            application_type: ApplicationType::Files,
            title: "Files".to_string(),
            position: Position::new(130, 130),
            size: Size::new(800, 600),
            z_index: 104,
            minimized: false,
            maximized: false,
        }
    }

    fn viewport() -> WindowRect {
        WindowRect {
            x: 0,
            y: 0,
            w: 1280,
            h: 680,
        }
    }

    #[test]
    fn style_uses_stored_geometry_and_z_index() {
        assert_eq!(
            window_style(&record(), viewport()),
            "left:130px;top:130px;width:800px;height:600px;z-index:104;"
        );
    }

    #[test]
    fn style_fills_viewport_while_maximized() {
        let mut window = record();
        window.maximized = true;
        assert_eq!(
            window_style(&window, viewport()),
            "left:0px;top:0px;width:1280px;height:680px;z-index:104;"
        );
    }

    #[test]
    fn minimized_windows_are_hidden_not_unmounted() {
        let mut window = record();
        window.minimized = true;
        assert!(window_style(&window, viewport()).ends_with("display:none;"));
    }
}
