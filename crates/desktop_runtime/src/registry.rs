//! Authoritative in-memory store of open windows.
//!
//! Every mutating operation takes a [`WindowId`] and returns `true` when a window was affected.
//! Unknown ids are a no-op returning `false`: a window may close between an input event being
//! queued and handled, and that must not be treated as a fault.

use std::collections::BTreeMap;

use desktop_app_contract::ApplicationType;

use crate::{
    config::{PlacementPolicy, WindowManagerConfig},
    model::{Position, Size, WindowId, WindowRecord},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRegistry {
    windows: BTreeMap<WindowId, WindowRecord>,
    next_window_id: u64,
    z_index_base: u32,
    last_z_index: u32,
    placement: PlacementPolicy,
    default_size: Size,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new(&WindowManagerConfig::default())
    }
}

impl WindowRegistry {
    pub fn new(config: &WindowManagerConfig) -> Self {
        Self {
            windows: BTreeMap::new(),
            next_window_id: 1,
            z_index_base: config.z_index_base,
            last_z_index: config.z_index_base,
            placement: config.placement.clone(),
            default_size: config.default_size,
        }
    }

    /// Opens a window for `application_type`, or focuses the existing one.
    ///
    /// Returns the id of the created or refocused window.
    pub fn open(&mut self, application_type: ApplicationType, title: impl Into<String>) -> WindowId {
        if let Some(existing) = self.find_by_type(&application_type) {
            self.focus(existing);
            return existing;
        }

        let id = WindowId(self.next_window_id);
        self.next_window_id += 1;
        let position = self.placement.position_for(self.windows.len());
        let z_index = self.allocate_z_index();
        self.windows.insert(
            id,
            WindowRecord {
                id,
                application_type,
                title: title.into(),
                position,
                size: self.default_size,
                z_index,
                minimized: false,
                maximized: false,
            },
        );
        id
    }

    pub fn close(&mut self, id: WindowId) -> bool {
        self.windows.remove(&id).is_some()
    }

    /// Hides the window; its geometry and z-index are kept.
    pub fn minimize(&mut self, id: WindowId) -> bool {
        self.with_window(id, |window| window.minimized = true)
    }

    /// Toggles the maximized flag. Stored geometry is left untouched so restoring is exact.
    pub fn maximize(&mut self, id: WindowId) -> bool {
        self.with_window(id, |window| {
            window.maximized = !window.maximized;
            if window.maximized {
                window.minimized = false;
            }
        })
    }

    /// Raises the window above every other window and un-minimizes it.
    pub fn focus(&mut self, id: WindowId) -> bool {
        if !self.windows.contains_key(&id) {
            return false;
        }
        let z_index = self.allocate_z_index();
        self.with_window(id, |window| {
            window.z_index = z_index;
            window.minimized = false;
        })
    }

    /// Sets the position as given; clamping belongs to the interactive drag.
    pub fn move_to(&mut self, id: WindowId, position: Position) -> bool {
        self.with_window(id, |window| window.position = position)
    }

    /// Sets the size as given; callers enforce the minimum floor.
    pub fn resize(&mut self, id: WindowId, size: Size) -> bool {
        self.with_window(id, |window| window.size = size)
    }

    pub fn set_title(&mut self, id: WindowId, title: impl Into<String>) -> bool {
        let title = title.into();
        self.with_window(id, |window| window.title = title)
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowRecord> {
        self.windows.get(&id)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn z_index_base(&self) -> u32 {
        self.z_index_base
    }

    /// All windows in ascending z-index order, so painting in sequence stacks correctly.
    pub fn list(&self) -> Vec<&WindowRecord> {
        let mut windows: Vec<&WindowRecord> = self.windows.values().collect();
        windows.sort_by_key(|window| window.z_index);
        windows
    }

    /// Like [`Self::list`], without minimized windows.
    pub fn visible(&self) -> Vec<&WindowRecord> {
        self.list()
            .into_iter()
            .filter(|window| window.is_visible())
            .collect()
    }

    /// Windows in creation order.
    pub fn in_creation_order(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.values()
    }

    /// The highest visible window; it renders as the active one.
    pub fn topmost_visible(&self) -> Option<&WindowRecord> {
        self.windows
            .values()
            .filter(|window| window.is_visible())
            .max_by_key(|window| window.z_index)
    }

    /// Topmost window of the given type, minimized or not.
    pub fn find_by_type(&self, application_type: &ApplicationType) -> Option<WindowId> {
        self.windows
            .values()
            .filter(|window| window.application_type == *application_type)
            .max_by_key(|window| window.z_index)
            .map(|window| window.id)
    }

    pub fn is_running(&self, application_type: &ApplicationType) -> bool {
        self.windows
            .values()
            .any(|window| window.application_type == *application_type)
    }

    fn allocate_z_index(&mut self) -> u32 {
        self.last_z_index = self.last_z_index.saturating_add(1);
        self.last_z_index
    }

    fn with_window(&mut self, id: WindowId, apply: impl FnOnce(&mut WindowRecord)) -> bool {
        match self.windows.get_mut(&id) {
            Some(window) => {
                apply(window);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn z0() -> u32 {
        WindowManagerConfig::default().z_index_base
    }

    #[test]
    fn open_places_new_windows_with_stagger_and_default_size() {
        let mut registry = WindowRegistry::default();

        let first = registry.open(ApplicationType::Notes, "Notes");
        let second = registry.open(ApplicationType::Files, "Files");

        let first = registry.get(first).unwrap();
        let second = registry.get(second).unwrap();
        assert_eq!(first.position, Position::new(100, 100));
        assert_eq!(second.position, Position::new(130, 130));
        assert_eq!(first.size, Size::new(800, 600));
        assert_eq!(first.z_index, z0() + 1);
        assert_eq!(second.z_index, z0() + 2);
    }

    #[test]
    fn open_existing_type_refocuses_instead_of_duplicating() {
        let mut registry = WindowRegistry::default();
        let notes = registry.open(ApplicationType::Notes, "Notes");
        registry.open(ApplicationType::Terminal, "Terminal");
        registry.minimize(notes);

        let again = registry.open(ApplicationType::Notes, "Other title");

        assert_eq!(again, notes);
        assert_eq!(registry.len(), 2);
        let record = registry.get(notes).unwrap();
        assert!(!record.minimized);
        assert_eq!(record.title, "Notes");
        assert_eq!(registry.topmost_visible().map(|w| w.id), Some(notes));
    }

    #[test]
    fn ids_are_never_reused_after_close() {
        let mut registry = WindowRegistry::default();
        let first = registry.open(ApplicationType::Notes, "Notes");
        assert!(registry.close(first));

        let second = registry.open(ApplicationType::Notes, "Notes");
        assert_ne!(first, second);
        assert!(second > first);
    }

    #[test]
    fn stale_ids_are_ignored() {
        let mut registry = WindowRegistry::default();
        registry.open(ApplicationType::Notes, "Notes");
        let before = registry.clone();
        let stale = WindowId(42);

        assert!(!registry.close(stale));
        assert!(!registry.minimize(stale));
        assert!(!registry.maximize(stale));
        assert!(!registry.focus(stale));
        assert!(!registry.move_to(stale, Position::new(1, 1)));
        assert!(!registry.resize(stale, Size::new(1, 1)));
        assert!(!registry.set_title(stale, "x"));
        assert_eq!(registry, before);
    }

    #[test]
    fn minimize_keeps_geometry_and_stacking() {
        let mut registry = WindowRegistry::default();
        let id = registry.open(ApplicationType::Calendar, "Calendar");
        let before = registry.get(id).cloned().unwrap();

        registry.minimize(id);

        let after = registry.get(id).unwrap();
        assert!(after.minimized);
        assert_eq!(after.position, before.position);
        assert_eq!(after.size, before.size);
        assert_eq!(after.z_index, before.z_index);
        assert!(registry.visible().is_empty());
        assert_eq!(registry.list().len(), 1);
    }

    #[test]
    fn maximize_on_clears_minimized_and_off_keeps_geometry() {
        let mut registry = WindowRegistry::default();
        let id = registry.open(ApplicationType::CodeEditor, "Editor");
        registry.minimize(id);

        registry.maximize(id);
        let record = registry.get(id).unwrap();
        assert!(record.maximized);
        assert!(!record.minimized);

        registry.maximize(id);
        let record = registry.get(id).unwrap();
        assert!(!record.maximized);
        assert_eq!(record.position, Position::new(100, 100));
        assert_eq!(record.size, Size::new(800, 600));
    }

    #[test]
    fn list_is_sorted_by_z_index_after_refocus() {
        let mut registry = WindowRegistry::default();
        let a = registry.open(ApplicationType::Notes, "A");
        let b = registry.open(ApplicationType::Files, "B");
        let c = registry.open(ApplicationType::Calendar, "C");

        registry.focus(a);

        let order: Vec<WindowId> = registry.list().iter().map(|w| w.id).collect();
        assert_eq!(order, vec![b, c, a]);
        let creation: Vec<WindowId> = registry.in_creation_order().map(|w| w.id).collect();
        assert_eq!(creation, vec![a, b, c]);
    }

    #[test]
    fn set_title_renames_window() {
        let mut registry = WindowRegistry::default();
        let id = registry.open(ApplicationType::Notes, "Notes");
        assert!(registry.set_title(id, "Notes - groceries"));
        assert_eq!(registry.get(id).unwrap().title, "Notes - groceries");
    }

    #[test]
    fn unknown_types_are_deduplicated_by_tag() {
        let mut registry = WindowRegistry::default();
        let first = registry.open(ApplicationType::from_tag("sheets"), "Sheets");
        let again = registry.open(ApplicationType::from_tag("sheets"), "Sheets");
        let other = registry.open(ApplicationType::from_tag("slides"), "Slides");

        assert_eq!(first, again);
        assert_ne!(first, other);
        assert!(registry.is_running(&ApplicationType::from_tag("sheets")));
    }
}
