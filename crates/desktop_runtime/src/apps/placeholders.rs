//! Built-in placeholder applets. Real data access and generative-text calls live outside the
//! window manager; these bodies only fill the window and exercise the host contract.

use desktop_app_contract::AppletMountContext;
use leptos::*;

pub(super) fn mount_notes_placeholder(context: AppletMountContext) -> View {
    view! { <NotesPlaceholder context=context /> }.into_view()
}

pub(super) fn mount_files_placeholder(_: AppletMountContext) -> View {
    view! {
        <div class="app-shell app-files-shell">
            <div class="app-toolbar" role="group" aria-label="File actions">
                <button type="button" class="app-action">"Upload"</button>
                <button type="button" class="app-action">"New folder"</button>
            </div>
            <ul class="app-file-list">
                <li>"Documents"</li>
                <li>"Pictures"</li>
                <li>"Projects"</li>
            </ul>
            <div class="app-statusbar">
                <span>"3 items"</span>
            </div>
        </div>
    }
    .into_view()
}

pub(super) fn mount_calendar_placeholder(_: AppletMountContext) -> View {
    view! {
        <div class="app-shell app-calendar-shell">
            <div class="app-toolbar" role="group" aria-label="Calendar navigation">
                <button type="button" class="app-action">"Today"</button>
                <button type="button" class="app-action">"Previous"</button>
                <button type="button" class="app-action">"Next"</button>
            </div>
            <p class="app-empty-state">"No events scheduled."</p>
        </div>
    }
    .into_view()
}

pub(super) fn mount_terminal_placeholder(context: AppletMountContext) -> View {
    let prompt = format!("session-{} $", context.window_id);
    view! {
        <div class="app-shell app-terminal-shell">
            <pre class="app-terminal-output">"Terminal ready.\n"</pre>
            <label class="app-terminal-prompt">
                <span>{prompt}</span>
                <input type="text" aria-label="Command input" spellcheck="false" />
            </label>
        </div>
    }
    .into_view()
}

pub(super) fn mount_code_editor_placeholder(_: AppletMountContext) -> View {
    view! {
        <div class="app-shell app-editor-shell">
            <textarea
                class="app-editor-buffer"
                aria-label="Code buffer"
                spellcheck="false"
            >"fn main() {}\n"</textarea>
            <div class="app-statusbar">
                <span>"Ln 1, Col 1"</span>
                <span>"Rust"</span>
            </div>
        </div>
    }
    .into_view()
}

pub(super) fn mount_assistant_placeholder(_: AppletMountContext) -> View {
    view! {
        <div class="app-shell app-assistant-shell">
            <div class="app-chat-log" role="log" aria-live="polite">
                <p>"Ask a question to get started."</p>
            </div>
            <input type="text" class="app-chat-input" aria-label="Message" />
        </div>
    }
    .into_view()
}

pub(super) fn mount_settings_placeholder(_: AppletMountContext) -> View {
    view! {
        <div class="app-shell app-settings-shell">
            <fieldset>
                <legend>"Appearance"</legend>
                <label>
                    <input type="checkbox" />
                    " Reduce motion"
                </label>
            </fieldset>
        </div>
    }
    .into_view()
}

pub(super) fn mount_unsupported_applet(context: AppletMountContext) -> View {
    let message = format!(
        "No applet is registered for \"{}\".",
        context.application_type.tag()
    );
    view! {
        <div class="app-shell app-unsupported-shell" role="status">
            <p>{message}</p>
        </div>
    }
    .into_view()
}

#[component]
fn NotesPlaceholder(context: AppletMountContext) -> impl IntoView {
    let host = context.host;
    let note_title = create_rw_signal(String::new());
    let body = create_rw_signal(String::new());

    let rename = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        note_title.set(value.clone());
        let trimmed = value.trim();
        if trimmed.is_empty() {
            host.set_title("Notes");
        } else {
            host.set_title(format!("Notes - {trimmed}"));
        }
    };

    view! {
        <div class="app-shell app-notes-shell">
            <input
                type="text"
                class="app-notes-title"
                placeholder="Untitled note"
                aria-label="Note title"
                prop:value=move || note_title.get()
                on:input=rename
            />
            <textarea
                class="app-notes-body"
                aria-label="Note body"
                prop:value=move || body.get()
                on:input=move |ev| body.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
