//! Application catalog, launch path, and the taskbar's view of the registry.
//!
//! [`launch`] is the single place user intent ("open app X") enters the registry; desktop icons
//! and taskbar quick-launch buttons both go through it, which is what keeps one window per
//! application type.

use desktop_app_contract::ApplicationType;
use system_ui::IconName;

use crate::{model::WindowId, registry::WindowRegistry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDescriptor {
    pub application_type: ApplicationType,
    pub display_title: &'static str,
    pub icon: IconName,
    pub show_on_desktop: bool,
    pub pinned: bool,
}

static APP_CATALOG: [AppDescriptor; 7] = [
    AppDescriptor {
        application_type: ApplicationType::Notes,
        display_title: "Notes",
        icon: IconName::Notes,
        show_on_desktop: true,
        pinned: true,
    },
    AppDescriptor {
        application_type: ApplicationType::Files,
        display_title: "Files",
        icon: IconName::Folder,
        show_on_desktop: true,
        pinned: true,
    },
    AppDescriptor {
        application_type: ApplicationType::Calendar,
        display_title: "Calendar",
        icon: IconName::Calendar,
        show_on_desktop: true,
        pinned: false,
    },
    AppDescriptor {
        application_type: ApplicationType::Terminal,
        display_title: "Terminal",
        icon: IconName::Terminal,
        show_on_desktop: true,
        pinned: true,
    },
    AppDescriptor {
        application_type: ApplicationType::CodeEditor,
        display_title: "Code Editor",
        icon: IconName::Code,
        show_on_desktop: true,
        pinned: false,
    },
    AppDescriptor {
        application_type: ApplicationType::Assistant,
        display_title: "Assistant",
        icon: IconName::Chat,
        show_on_desktop: true,
        pinned: true,
    },
    AppDescriptor {
        application_type: ApplicationType::Settings,
        display_title: "Settings",
        icon: IconName::Settings,
        show_on_desktop: false,
        pinned: true,
    },
];

pub fn app_catalog() -> &'static [AppDescriptor] {
    &APP_CATALOG
}

pub fn app_descriptor(application_type: &ApplicationType) -> Option<&'static AppDescriptor> {
    app_catalog()
        .iter()
        .find(|entry| entry.application_type == *application_type)
}

pub fn desktop_icon_apps() -> Vec<&'static AppDescriptor> {
    app_catalog()
        .iter()
        .filter(|entry| entry.show_on_desktop)
        .collect()
}

/// Catalog icon, or the generic glyph for types the catalog doesn't know.
pub fn icon_for(application_type: &ApplicationType) -> IconName {
    app_descriptor(application_type)
        .map(|entry| entry.icon)
        .unwrap_or(IconName::AppGeneric)
}

/// Catalog title, or the raw tag for unknown types.
pub fn display_title_for(application_type: &ApplicationType) -> String {
    match app_descriptor(application_type) {
        Some(entry) => entry.display_title.to_string(),
        None if application_type.tag().trim().is_empty() => "Application".to_string(),
        None => application_type.tag().to_string(),
    }
}

/// Opens `application_type`, or focuses its existing window.
pub fn launch(
    registry: &mut WindowRegistry,
    application_type: ApplicationType,
    title: Option<String>,
) -> WindowId {
    let title = title
        .filter(|title| !title.trim().is_empty())
        .unwrap_or_else(|| display_title_for(&application_type));
    registry.open(application_type, title)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub window_id: WindowId,
    pub title: String,
    pub icon: IconName,
    /// Topmost visible window.
    pub active: bool,
}

/// One entry per visible window, in creation order so buttons don't jump when focus changes.
pub fn taskbar_entries(registry: &WindowRegistry) -> Vec<TaskbarEntry> {
    let active = registry.topmost_visible().map(|window| window.id);
    registry
        .in_creation_order()
        .filter(|window| window.is_visible())
        .map(|window| TaskbarEntry {
            window_id: window.id,
            title: window.title.clone(),
            icon: icon_for(&window.application_type),
            active: Some(window.id) == active,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickLaunchItem {
    pub application_type: ApplicationType,
    pub display_title: &'static str,
    pub icon: IconName,
    /// Any window of this type exists, minimized or not.
    pub running: bool,
}

pub fn quick_launch_items(registry: &WindowRegistry) -> Vec<QuickLaunchItem> {
    app_catalog()
        .iter()
        .filter(|entry| entry.pinned)
        .map(|entry| QuickLaunchItem {
            application_type: entry.application_type.clone(),
            display_title: entry.display_title,
            icon: entry.icon,
            running: registry.is_running(&entry.application_type),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalog_covers_every_known_type_once() {
        for application_type in ApplicationType::KNOWN {
            let matches = app_catalog()
                .iter()
                .filter(|entry| entry.application_type == application_type)
                .count();
            assert_eq!(matches, 1, "{application_type}");
        }
    }

    #[test]
    fn unknown_types_fall_back_to_generic_icon_and_tag_title() {
        let unknown = ApplicationType::from_tag("spreadsheet");
        assert_eq!(icon_for(&unknown), IconName::AppGeneric);
        assert_eq!(display_title_for(&unknown), "spreadsheet");
        assert_eq!(
            display_title_for(&ApplicationType::Other(String::new())),
            "Application"
        );
    }

    #[test]
    fn launch_uses_catalog_title_when_none_given() {
        let mut registry = WindowRegistry::default();
        let id = launch(&mut registry, ApplicationType::CodeEditor, None);
        assert_eq!(registry.get(id).unwrap().title, "Code Editor");

        let id = launch(&mut registry, ApplicationType::Notes, Some("  ".to_string()));
        assert_eq!(registry.get(id).unwrap().title, "Notes");
    }

    #[test]
    fn launch_creates_unknown_type_windows() {
        let mut registry = WindowRegistry::default();
        let id = launch(&mut registry, ApplicationType::from_tag("whiteboard"), None);
        let window = registry.get(id).unwrap();
        assert_eq!(window.title, "whiteboard");
        assert!(window.application_type.is_unknown());
    }

    #[test]
    fn taskbar_lists_visible_windows_and_marks_active() {
        let mut registry = WindowRegistry::default();
        let notes = launch(&mut registry, ApplicationType::Notes, None);
        let files = launch(&mut registry, ApplicationType::Files, None);
        let terminal = launch(&mut registry, ApplicationType::Terminal, None);
        registry.minimize(files);
        registry.focus(notes);

        let entries = taskbar_entries(&registry);
        let ids: Vec<WindowId> = entries.iter().map(|entry| entry.window_id).collect();
        assert_eq!(ids, vec![notes, terminal]);
        assert!(entries[0].active);
        assert!(!entries[1].active);
        assert_eq!(entries[1].icon, IconName::Terminal);
    }

    #[test]
    fn quick_launch_marks_minimized_apps_as_running() {
        let mut registry = WindowRegistry::default();
        let notes = launch(&mut registry, ApplicationType::Notes, None);
        registry.minimize(notes);

        let items = quick_launch_items(&registry);
        let notes_item = items
            .iter()
            .find(|item| item.application_type == ApplicationType::Notes)
            .unwrap();
        assert!(notes_item.running);
        assert!(items
            .iter()
            .filter(|item| item.application_type != ApplicationType::Notes)
            .all(|item| !item.running));
    }
}
