//! Shared contract types between the desktop window manager and the applets it hosts.
//!
//! An applet is mounted into a sized window body and owns everything inside it: its own data
//! fetching, error states, and remote calls. The only back-channel to the manager is
//! [`AppletHost`], which lets the applet rename its window.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::fmt;

use leptos::{Callable, Callback, View};
use serde::{Deserialize, Serialize};

/// Stable identifier for a manager-owned window, as seen by applets.
pub type WindowRuntimeId = u64;

/// Tag identifying which applet renders a window's content.
///
/// Known applets are closed variants; anything else is carried verbatim in
/// [`ApplicationType::Other`] so unknown tags degrade to generic chrome instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApplicationType {
    /// Note taking.
    Notes,
    /// File browser.
    Files,
    /// Calendar and events.
    Calendar,
    /// Command terminal.
    Terminal,
    /// Code editor.
    CodeEditor,
    /// Chat assistant.
    Assistant,
    /// Shell settings panel.
    Settings,
    /// Unrecognized tag.
    Other(String),
}

impl ApplicationType {
    /// Every known application type, in catalog order.
    pub const KNOWN: [ApplicationType; 7] = [
        Self::Notes,
        Self::Files,
        Self::Calendar,
        Self::Terminal,
        Self::CodeEditor,
        Self::Assistant,
        Self::Settings,
    ];

    /// Parses a tag, falling back to [`ApplicationType::Other`] for unrecognized input.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "notes" => Self::Notes,
            "files" => Self::Files,
            "calendar" => Self::Calendar,
            "terminal" => Self::Terminal,
            "code-editor" | "editor" => Self::CodeEditor,
            "assistant" | "chat" => Self::Assistant,
            "settings" => Self::Settings,
            _ => Self::Other(tag.to_string()),
        }
    }

    /// Stable string token for DOM hooks and serialization.
    pub fn tag(&self) -> &str {
        match self {
            Self::Notes => "notes",
            Self::Files => "files",
            Self::Calendar => "calendar",
            Self::Terminal => "terminal",
            Self::CodeEditor => "code-editor",
            Self::Assistant => "assistant",
            Self::Settings => "settings",
            Self::Other(tag) => tag,
        }
    }

    /// Returns `true` for the fallback variant.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Other(_))
    }
}

impl fmt::Display for ApplicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<String> for ApplicationType {
    fn from(raw: String) -> Self {
        Self::from_tag(&raw)
    }
}

impl From<ApplicationType> for String {
    fn from(value: ApplicationType) -> Self {
        value.tag().to_string()
    }
}

#[derive(Clone, Copy)]
/// Manager services available to a mounted applet.
pub struct AppletHost {
    set_title: Callback<String>,
}

impl AppletHost {
    /// Creates a host handle from the manager's title callback.
    pub fn new(set_title: Callback<String>) -> Self {
        Self { set_title }
    }

    /// Requests a new title for the applet's window.
    pub fn set_title(&self, title: impl Into<String>) {
        self.set_title.call(title.into());
    }
}

/// Context passed to an applet when it is mounted into a window.
pub struct AppletMountContext {
    /// Window hosting the applet.
    pub window_id: WindowRuntimeId,
    /// Tag the window was opened with.
    pub application_type: ApplicationType,
    /// Manager back-channel.
    pub host: AppletHost,
}

/// Static applet mount function.
pub type AppletMountFn = fn(AppletMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mountable applet descriptor resolved by the runtime for an [`ApplicationType`].
pub struct AppletModule {
    mount_fn: AppletMountFn,
}

impl AppletModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppletMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the applet view.
    pub fn mount(self, context: AppletMountContext) -> View {
        (self.mount_fn)(context)
    }
}

/// DOM id of a window's root element, used for keyboard focus hand-off.
pub fn window_dom_id(window_id: WindowRuntimeId) -> String {
    format!("desktop-window-{window_id}")
}
