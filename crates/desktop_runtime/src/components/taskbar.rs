use system_ui::{Taskbar as TaskbarSurface, TaskbarButton, TaskbarSection};

use super::*;
use crate::launcher::{QuickLaunchItem, TaskbarEntry};

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();

    let quick_launch = move || runtime.registry.with(launcher::quick_launch_items);
    let entries = move || runtime.registry.with(launcher::taskbar_entries);

    view! {
        <TaskbarSurface aria_label="Desktop taskbar">
            <TaskbarSection ui_slot="quick-launch" aria_label="Pinned apps">
                <For
                    each=quick_launch
                    key=|item| (item.application_type.tag().to_string(), item.running)
                    let:item
                >
                    <QuickLaunchButton item=item />
                </For>
            </TaskbarSection>

            <TaskbarSection ui_slot="windows" aria_label="Open windows">
                <For
                    each=entries
                    key=|entry| (entry.window_id.0, entry.title.clone(), entry.active)
                    let:entry
                >
                    <WindowButton entry=entry />
                </For>
            </TaskbarSection>
        </TaskbarSurface>
    }
}

#[component]
fn QuickLaunchButton(item: QuickLaunchItem) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let application_type = item.application_type.clone();
    let on_click = Callback::new(move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::Launch {
            application_type: application_type.clone(),
            title: None,
        });
    });

    view! {
        <TaskbarButton
            icon=item.icon
            label=item.display_title.to_string()
            running=item.running
            icon_only=true
            on_click=on_click
        />
    }
}

#[component]
fn WindowButton(entry: TaskbarEntry) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window_id = entry.window_id;
    let on_click = Callback::new(move |_: web_sys::MouseEvent| {
        runtime.dispatch_action(DesktopAction::ActivateTaskbarEntry { window_id });
    });

    view! {
        <TaskbarButton
            icon=entry.icon
            label=entry.title
            pressed=entry.active
            running=true
            on_click=on_click
        />
    }
}
