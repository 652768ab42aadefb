//! Shared UI primitive library for the desktop shell chrome.
//!
//! The crate owns stateless Leptos primitives for the desktop surface, window frames, and the
//! taskbar, plus a centralized icon API. Components emit a stable `data-ui-*` DOM contract that
//! the shell stylesheet targets; all window-manager state lives in `desktop_runtime`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopWindowLayer, ResizeHandle, Taskbar,
    TaskbarButton, TaskbarSection, WindowBody, WindowControlButton, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};
