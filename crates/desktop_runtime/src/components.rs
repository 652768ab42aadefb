//! Desktop shell UI composition and interaction surfaces.

mod taskbar;
mod window;

use leptos::*;
use system_ui::{DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopWindowLayer};

use self::{taskbar::Taskbar, window::DesktopWindow};
use crate::{
    launcher,
    model::PointerPosition,
    reducer::DesktopAction,
    runtime_context::{use_desktop_runtime, DesktopRuntimeContext},
};

#[component]
/// Desktop shell root: icon grid, window layer, and taskbar.
///
/// Pointer-move and pointer-release are observed on the browser window rather than on the drag
/// handles, so a drag released outside the page still ends.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();

    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        let interaction = runtime.interaction.get_untracked();
        if interaction.dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateMove {
                pointer: pointer_from_pointer_event(&ev),
            });
        } else if interaction.resizing.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateResize {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    });
    let up_listener = window_event_listener(ev::pointerup, move |_| {
        end_active_pointer_interaction(runtime);
    });
    let cancel_listener = window_event_listener(ev::pointercancel, move |_| {
        end_active_pointer_interaction(runtime);
    });
    let blur_listener = window_event_listener(ev::blur, move |_| {
        end_active_pointer_interaction(runtime);
    });
    let resize_listener = window_event_listener(ev::resize, move |_| runtime.refresh_viewport());
    on_cleanup(move || {
        move_listener.remove();
        up_listener.remove();
        cancel_listener.remove();
        blur_listener.remove();
        resize_listener.remove();
    });

    let icon_stagger_ms = runtime.config.with_value(|config| config.icon_stagger_ms);
    // Keyed in creation order; stacking comes from each window's z-index.
    let window_ids = move || {
        runtime
            .registry
            .with(|registry| registry.in_creation_order().map(|w| w.id).collect::<Vec<_>>())
    };

    view! {
        <div
            class="desktop-shell"
            data-captured=move || runtime.interaction.with(|i| i.is_captured()).to_string()
        >
            <DesktopBackdrop>
                <DesktopIconGrid>
                    {launcher::desktop_icon_apps()
                        .into_iter()
                        .enumerate()
                        .map(|(index, app)| {
                            let application_type = app.application_type.clone();
                            let on_click = Callback::new(move |_: web_sys::MouseEvent| {
                                runtime.dispatch_action(DesktopAction::Launch {
                                    application_type: application_type.clone(),
                                    title: None,
                                });
                            });
                            view! {
                                <DesktopIconButton
                                    icon=app.icon
                                    label=app.display_title
                                    animation_delay_ms=icon_stagger_ms.saturating_mul(index as u32)
                                    on_click=on_click
                                />
                            }
                        })
                        .collect_view()}
                </DesktopIconGrid>

                <DesktopWindowLayer>
                    <For each=window_ids key=|id| id.0 let:window_id>
                        <DesktopWindow window_id=window_id />
                    </For>
                </DesktopWindowLayer>
            </DesktopBackdrop>

            <Taskbar />
        </div>
    }
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

/// Primary mouse button or the primary touch/pen contact.
fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    if runtime.interaction.with_untracked(|i| i.is_captured()) {
        runtime.dispatch_action(DesktopAction::EndPointerInteraction);
    }
}
