use super::*;

#[component]
/// Desktop wallpaper and backdrop host.
pub fn DesktopBackdrop(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("desktop-backdrop", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-backdrop"
        >
            {children()}
        </div>
    }
}

#[component]
/// Static grid of desktop launch icons.
pub fn DesktopIconGrid(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-desktop-icon-grid", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-grid"
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop icon launcher button.
///
/// `animation_delay_ms` staggers the entrance animation by grid position; it is cosmetic only.
pub fn DesktopIconButton(
    icon: IconName,
    #[prop(into)] label: String,
    #[prop(optional)] animation_delay_ms: u32,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-desktop-icon-button", layout_class)
            title=label.clone()
            style=format!("animation-delay:{animation_delay_ms}ms;")
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-button"
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <span data-ui-slot="icon">
                <Icon icon=icon size=IconSize::Lg />
            </span>
            <span data-ui-slot="label">{label}</span>
        </button>
    }
}

#[component]
/// Window stack host.
pub fn DesktopWindowLayer(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-layer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-window-layer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Positioned window frame.
pub fn WindowFrame(
    #[prop(into)] id: String,
    #[prop(into)] style: MaybeSignal<String>,
    #[prop(into)] aria_label: MaybeSignal<String>,
    #[prop(into)] app_tag: MaybeSignal<String>,
    #[prop(into)] active: MaybeSignal<bool>,
    #[prop(into)] minimized: MaybeSignal<bool>,
    #[prop(into)] maximized: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            id=id
            class="ui-window-frame"
            tabindex="-1"
            style=move || style.get()
            role="dialog"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-app=move || app_tag.get()
            data-ui-active=move || bool_token(active.get())
            data-ui-minimized=move || bool_token(minimized.get())
            data-ui-maximized=move || bool_token(maximized.get())
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        >
            {children()}
        </section>
    }
}

#[component]
/// Window title bar; the drag handle for moving a window.
pub fn WindowTitleBar(
    #[prop(into)] draggable: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class="ui-window-titlebar"
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            data-ui-draggable=move || bool_token(draggable.get())
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
            on:dblclick=move |ev| {
                if let Some(on_dblclick) = on_dblclick.as_ref() {
                    on_dblclick.call(ev);
                }
            }
        >
            {children()}
        </header>
    }
}

#[component]
/// Icon and title text group inside a title bar.
pub fn WindowTitle(
    #[prop(into)] icon: MaybeSignal<IconName>,
    #[prop(into)] title: MaybeSignal<String>,
) -> impl IntoView {
    view! {
        <div class="ui-window-title" data-ui-primitive="true" data-ui-kind="window-title">
            <span data-ui-slot="icon" aria-hidden="true">
                {move || view! { <Icon icon=icon.get() size=IconSize::Sm /> }}
            </span>
            <span data-ui-slot="text">{move || title.get()}</span>
        </div>
    }
}

#[component]
/// Title bar controls row.
pub fn WindowControls(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-controls" data-ui-primitive="true" data-ui-kind="window-controls">
            {children()}
        </div>
    }
}

#[component]
/// Minimize, maximize/restore, or close control.
///
/// Pointer-down is swallowed so pressing a control never starts a title bar drag.
pub fn WindowControlButton(
    #[prop(into)] icon: MaybeSignal<IconName>,
    #[prop(into)] aria_label: MaybeSignal<String>,
    on_click: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-window-control"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-control"
            on:pointerdown=move |ev: PointerEvent| ev.stop_propagation()
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                on_click.call(ev);
            }
        >
            {move || view! { <Icon icon=icon.get() size=IconSize::Xs /> }}
        </button>
    }
}

#[component]
/// Sized container hosting applet content.
pub fn WindowBody(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-body" data-ui-primitive="true" data-ui-kind="window-body">
            {children()}
        </div>
    }
}

#[component]
/// Resize handle for one edge or corner; `edge` is a compass token such as `"se"`.
pub fn ResizeHandle(
    edge: &'static str,
    #[prop(optional)] on_pointerdown: Option<Callback<PointerEvent>>,
) -> impl IntoView {
    view! {
        <div
            class="ui-resize-handle"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="resize-handle"
            data-ui-slot=edge
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        ></div>
    }
}

#[component]
/// Taskbar root.
pub fn Taskbar(
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class="ui-taskbar"
            role="toolbar"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="taskbar"
        >
            {children()}
        </footer>
    }
}

#[component]
/// Labelled group inside the taskbar (quick launch, running windows).
pub fn TaskbarSection(
    ui_slot: &'static str,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-taskbar-section"
            role="group"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="taskbar-section"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Taskbar button for a quick-launch app or a running window.
pub fn TaskbarButton(
    icon: IconName,
    #[prop(into)] label: MaybeSignal<String>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional, into)] running: MaybeSignal<bool>,
    #[prop(optional)] icon_only: bool,
    on_click: Callback<MouseEvent>,
) -> impl IntoView {
    let title = label.clone();
    view! {
        <button
            type="button"
            class="ui-taskbar-button"
            title=move || title.get()
            aria-pressed=move || bool_token(pressed.get())
            data-ui-primitive="true"
            data-ui-kind="taskbar-button"
            data-ui-running=move || bool_token(running.get())
            on:click=move |ev| on_click.call(ev)
        >
            <Icon icon=icon size=IconSize::Sm />
            {(!icon_only).then(|| view! { <span data-ui-slot="label">{move || label.get()}</span> })}
        </button>
    }
}
