//! Shell primitives: desktop surface, window chrome, and taskbar.

use leptos::ev::{MouseEvent, PointerEvent};
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod shell;

pub use shell::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopWindowLayer, ResizeHandle, Taskbar,
    TaskbarButton, TaskbarSection, WindowBody, WindowControlButton, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
