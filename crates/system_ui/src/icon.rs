//! Centralized icon catalog for shell chrome.
//!
//! Components refer to icons by semantic [`IconName`]; the SVG geometry lives here only.
//! [`IconName::AppGeneric`] is the fallback glyph for applications without a dedicated icon.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by shell components.
pub enum IconName {
    /// Notes applet.
    Notes,
    /// Files applet.
    Folder,
    /// Calendar applet.
    Calendar,
    /// Terminal applet.
    Terminal,
    /// Code editor applet.
    Code,
    /// Chat assistant applet.
    Chat,
    /// Settings panel.
    Settings,
    /// Fallback application glyph.
    AppGeneric,
    /// Window minimize control.
    WindowMinimize,
    /// Window maximize control.
    WindowMaximize,
    /// Window restore control.
    WindowRestore,
    /// Close control.
    Dismiss,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Notes => "notes",
            Self::Folder => "folder",
            Self::Calendar => "calendar",
            Self::Terminal => "terminal",
            Self::Code => "code",
            Self::Chat => "chat",
            Self::Settings => "settings",
            Self::AppGeneric => "app-generic",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
        }
    }

    const fn path(self) -> &'static str {
        match self {
            Self::Notes => "M6 3h9l3 3v15H6z M9 9h6 M9 13h6 M9 17h4",
            Self::Folder => "M3 6h6l2 2h10v11H3z",
            Self::Calendar => "M4 5h16v15H4z M4 9h16 M8 3v4 M16 3v4",
            Self::Terminal => "M3 5h18v14H3z M7 10l3 2-3 2 M12 15h5",
            Self::Code => "M9 7l-5 5 5 5 M15 7l5 5-5 5",
            Self::Chat => "M4 5h16v11H9l-5 4z",
            Self::Settings => "M12 8a4 4 0 1 0 0 8a4 4 0 1 0 0-8 M12 2v3 M12 19v3 M2 12h3 M19 12h3",
            Self::AppGeneric => "M4 4h16v16H4z M4 8h16",
            Self::WindowMinimize => "M5 18h14",
            Self::WindowMaximize => "M5 5h14v14H5z",
            Self::WindowRestore => "M8 8h11v11H8z M5 16V5h11",
            Self::Dismiss => "M6 6l12 12 M18 6L6 18",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Rendered icon size.
pub enum IconSize {
    /// 12px, title bar controls.
    Xs,
    /// 16px, title bars and taskbar.
    #[default]
    Sm,
    /// 20px.
    Md,
    /// 32px, desktop icons.
    Lg,
}

impl IconSize {
    /// Pixel edge length.
    pub const fn px(self) -> u32 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 32,
        }
    }
}

#[component]
/// Renders a catalog icon as inline SVG.
pub fn Icon(icon: IconName, #[prop(optional)] size: IconSize) -> impl IntoView {
    let px = size.px().to_string();
    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            width=px.clone()
            height=px
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.6"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            focusable="false"
        >
            <path d=icon.path() />
        </svg>
    }
}
