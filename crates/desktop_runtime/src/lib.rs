//! Desktop window manager runtime: window registry, launcher, reducer, and the Leptos shell that
//! renders them.

pub mod apps;
pub mod components;
pub mod config;
pub mod effect_executor;
pub mod host;
pub mod launcher;
pub mod model;
pub mod reducer;
pub mod registry;
pub mod runtime_context;
pub mod window_manager;

pub use components::DesktopShell;
pub use config::{ConfigError, WindowManagerConfig};
pub use launcher::{launch, quick_launch_items, taskbar_entries, QuickLaunchItem, TaskbarEntry};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use registry::WindowRegistry;
pub use runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
