//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use desktop_app_contract::ApplicationType;
use thiserror::Error;

use crate::{
    config::WindowManagerConfig,
    launcher,
    model::{
        DragSession, InteractionState, PointerPosition, ResizeEdge, ResizeSession, WindowId,
        WindowRect,
    },
    registry::WindowRegistry,
    window_manager::{drag_position, resize_rect},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`].
pub enum DesktopAction {
    /// Open an application, or focus its existing window.
    Launch {
        /// Application to open.
        application_type: ApplicationType,
        /// Title override; the catalog title is used when absent.
        title: Option<String>,
    },
    /// Close a window.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Toggle a window between maximized and its stored geometry.
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Raise a window to the top of the stack.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Taskbar button click.
    ActivateTaskbarEntry {
        /// Window behind the taskbar button.
        window_id: WindowId,
    },
    /// Rename a window on behalf of its applet.
    SetTitle {
        /// Window to rename.
        window_id: WindowId,
        /// New title.
        title: String,
    },
    /// Pointer-down on a title bar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
        /// Desktop viewport the drag is clamped to.
        bounds: WindowRect,
    },
    /// Pointer-move while a drag is captured.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Pointer-down on a resize handle.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Handle being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
        /// Desktop viewport the resize is clamped to.
        bounds: WindowRect,
    },
    /// Pointer-move while a resize is captured.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Pointer-up or cancel anywhere; releases any capture.
    EndPointerInteraction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host to execute.
pub enum RuntimeEffect {
    /// Move keyboard focus into a window that was just raised.
    FocusWindowElement(WindowId),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors. The dispatcher drops the transition and never surfaces these to the user.
pub enum ReducerError {
    /// The target window is no longer in the registry.
    #[error("window {0} not found")]
    WindowNotFound(WindowId),
}

/// Applies a [`DesktopAction`] and collects the resulting side effects.
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action references a window that has closed.
pub fn reduce_desktop(
    registry: &mut WindowRegistry,
    interaction: &mut InteractionState,
    config: &WindowManagerConfig,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::Launch {
            application_type,
            title,
        } => {
            let window_id = launcher::launch(registry, application_type, title);
            effects.push(RuntimeEffect::FocusWindowElement(window_id));
        }
        DesktopAction::CloseWindow { window_id } => {
            require(registry.close(window_id), window_id)?;
            if interaction_targets(interaction, window_id) {
                interaction.release();
            }
        }
        DesktopAction::MinimizeWindow { window_id } => {
            require(registry.minimize(window_id), window_id)?;
        }
        DesktopAction::ToggleMaximize { window_id } => {
            require(registry.maximize(window_id), window_id)?;
            registry.focus(window_id);
            effects.push(RuntimeEffect::FocusWindowElement(window_id));
        }
        DesktopAction::FocusWindow { window_id }
        | DesktopAction::ActivateTaskbarEntry { window_id } => {
            require(registry.focus(window_id), window_id)?;
            effects.push(RuntimeEffect::FocusWindowElement(window_id));
        }
        DesktopAction::SetTitle { window_id, title } => {
            require(registry.set_title(window_id, title), window_id)?;
        }
        DesktopAction::BeginMove {
            window_id,
            pointer,
            bounds,
        } => {
            require(registry.focus(window_id), window_id)?;
            interaction.release();
            let window = registry
                .get(window_id)
                .ok_or(ReducerError::WindowNotFound(window_id))?;
            if !window.maximized {
                interaction.dragging = Some(DragSession {
                    window_id,
                    pointer_start: pointer,
                    position_start: window.position,
                    bounds,
                });
            }
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                let window = registry
                    .get(session.window_id)
                    .ok_or(ReducerError::WindowNotFound(session.window_id))?;
                if !window.maximized {
                    let position = drag_position(
                        session,
                        pointer,
                        window.size,
                        config.min_visible,
                        config.title_bar_height,
                    );
                    registry.move_to(session.window_id, position);
                }
            }
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
            bounds,
        } => {
            require(registry.focus(window_id), window_id)?;
            interaction.release();
            let window = registry
                .get(window_id)
                .ok_or(ReducerError::WindowNotFound(window_id))?;
            if !window.maximized {
                interaction.resizing = Some(ResizeSession {
                    window_id,
                    edge,
                    pointer_start: pointer,
                    rect_start: window.rect(),
                    bounds,
                });
            }
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(session) = interaction.resizing.as_ref() {
                let maximized = registry
                    .get(session.window_id)
                    .ok_or(ReducerError::WindowNotFound(session.window_id))?
                    .maximized;
                if !maximized {
                    let rect = resize_rect(
                        session.rect_start,
                        session.edge,
                        pointer.x - session.pointer_start.x,
                        pointer.y - session.pointer_start.y,
                        config.min_size,
                        session.bounds,
                    );
                    registry.move_to(session.window_id, rect.position());
                    registry.resize(session.window_id, rect.size());
                }
            }
        }
        DesktopAction::EndPointerInteraction => interaction.release(),
    }

    Ok(effects)
}

fn require(affected: bool, window_id: WindowId) -> Result<(), ReducerError> {
    if affected {
        Ok(())
    } else {
        Err(ReducerError::WindowNotFound(window_id))
    }
}

fn interaction_targets(interaction: &InteractionState, window_id: WindowId) -> bool {
    interaction
        .dragging
        .as_ref()
        .is_some_and(|session| session.window_id == window_id)
        || interaction
            .resizing
            .as_ref()
            .is_some_and(|session| session.window_id == window_id)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{Position, Size};

    struct Harness {
        registry: WindowRegistry,
        interaction: InteractionState,
        config: WindowManagerConfig,
    }

    impl Harness {
        fn new() -> Self {
            let config = WindowManagerConfig::default();
            Self {
                registry: WindowRegistry::new(&config),
                interaction: InteractionState::default(),
                config,
            }
        }

        fn dispatch(&mut self, action: DesktopAction) -> Result<Vec<RuntimeEffect>, ReducerError> {
            reduce_desktop(
                &mut self.registry,
                &mut self.interaction,
                &self.config,
                action,
            )
        }

        fn launch(&mut self, application_type: ApplicationType) -> WindowId {
            let effects = self
                .dispatch(DesktopAction::Launch {
                    application_type,
                    title: None,
                })
                .expect("launch");
            match effects.as_slice() {
                [RuntimeEffect::FocusWindowElement(id)] => *id,
                other => panic!("unexpected effects {other:?}"),
            }
        }
    }

    fn viewport() -> WindowRect {
        WindowRect {
            x: 0,
            y: 0,
            w: 1280,
            h: 680,
        }
    }

    #[test]
    fn stale_window_actions_report_not_found() {
        let mut harness = Harness::new();
        let id = harness.launch(ApplicationType::Notes);
        harness
            .dispatch(DesktopAction::CloseWindow { window_id: id })
            .unwrap();

        for action in [
            DesktopAction::CloseWindow { window_id: id },
            DesktopAction::FocusWindow { window_id: id },
            DesktopAction::MinimizeWindow { window_id: id },
            DesktopAction::ToggleMaximize { window_id: id },
        ] {
            assert_eq!(
                harness.dispatch(action),
                Err(ReducerError::WindowNotFound(id))
            );
        }
        assert!(harness.registry.is_empty());
    }

    #[test]
    fn begin_move_focuses_and_captures() {
        let mut harness = Harness::new();
        let notes = harness.launch(ApplicationType::Notes);
        let files = harness.launch(ApplicationType::Files);

        harness
            .dispatch(DesktopAction::BeginMove {
                window_id: notes,
                pointer: PointerPosition { x: 10, y: 10 },
                bounds: viewport(),
            })
            .unwrap();

        assert_eq!(harness.registry.topmost_visible().map(|w| w.id), Some(notes));
        assert_ne!(harness.registry.topmost_visible().map(|w| w.id), Some(files));
        assert_eq!(
            harness.interaction.dragging.as_ref().map(|s| s.window_id),
            Some(notes)
        );
    }

    #[test]
    fn drag_moves_window_until_pointer_up() {
        let mut harness = Harness::new();
        let id = harness.launch(ApplicationType::Terminal);

        harness
            .dispatch(DesktopAction::BeginMove {
                window_id: id,
                pointer: PointerPosition { x: 300, y: 115 },
                bounds: viewport(),
            })
            .unwrap();
        harness
            .dispatch(DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 325, y: 155 },
            })
            .unwrap();
        harness
            .dispatch(DesktopAction::EndPointerInteraction)
            .unwrap();
        harness
            .dispatch(DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 900, y: 500 },
            })
            .unwrap();

        assert_eq!(
            harness.registry.get(id).unwrap().position,
            Position::new(125, 140)
        );
        assert!(!harness.interaction.is_captured());
    }

    #[test]
    fn maximized_windows_reject_drag_and_resize() {
        let mut harness = Harness::new();
        let id = harness.launch(ApplicationType::Files);
        harness
            .dispatch(DesktopAction::ToggleMaximize { window_id: id })
            .unwrap();

        harness
            .dispatch(DesktopAction::BeginMove {
                window_id: id,
                pointer: PointerPosition { x: 0, y: 0 },
                bounds: viewport(),
            })
            .unwrap();
        harness
            .dispatch(DesktopAction::BeginResize {
                window_id: id,
                edge: ResizeEdge::SouthEast,
                pointer: PointerPosition { x: 0, y: 0 },
                bounds: viewport(),
            })
            .unwrap();

        assert!(!harness.interaction.is_captured());
        harness
            .dispatch(DesktopAction::ToggleMaximize { window_id: id })
            .unwrap();
        let window = harness.registry.get(id).unwrap();
        assert_eq!(window.position, Position::new(100, 100));
        assert_eq!(window.size, Size::new(800, 600));
    }

    #[test]
    fn toggling_maximize_raises_a_background_window() {
        let mut harness = Harness::new();
        let notes = harness.launch(ApplicationType::Notes);
        let files = harness.launch(ApplicationType::Files);

        let effects = harness
            .dispatch(DesktopAction::ToggleMaximize { window_id: notes })
            .unwrap();

        assert_eq!(effects, vec![RuntimeEffect::FocusWindowElement(notes)]);
        let notes_z = harness.registry.get(notes).unwrap().z_index;
        let files_z = harness.registry.get(files).unwrap().z_index;
        assert!(harness.registry.get(notes).unwrap().maximized);
        assert!(notes_z > files_z);

        harness
            .dispatch(DesktopAction::FocusWindow { window_id: files })
            .unwrap();
        harness
            .dispatch(DesktopAction::ToggleMaximize { window_id: notes })
            .unwrap();
        assert!(!harness.registry.get(notes).unwrap().maximized);
        assert_eq!(harness.registry.topmost_visible().map(|w| w.id), Some(notes));
    }

    #[test]
    fn north_resize_stops_at_the_top_of_the_desktop() {
        let mut harness = Harness::new();
        let id = harness.launch(ApplicationType::Notes);

        harness
            .dispatch(DesktopAction::BeginResize {
                window_id: id,
                edge: ResizeEdge::North,
                pointer: PointerPosition { x: 400, y: 100 },
                bounds: viewport(),
            })
            .unwrap();
        harness
            .dispatch(DesktopAction::UpdateResize {
                pointer: PointerPosition { x: 400, y: -400 },
            })
            .unwrap();

        let window = harness.registry.get(id).unwrap();
        assert_eq!(window.position, Position::new(100, 0));
        assert_eq!(window.size, Size::new(800, 700));
    }

    #[test]
    fn resize_enforces_configured_floor() {
        let mut harness = Harness::new();
        let id = harness.launch(ApplicationType::CodeEditor);

        harness
            .dispatch(DesktopAction::BeginResize {
                window_id: id,
                edge: ResizeEdge::SouthEast,
                pointer: PointerPosition { x: 900, y: 700 },
                bounds: viewport(),
            })
            .unwrap();
        harness
            .dispatch(DesktopAction::UpdateResize {
                pointer: PointerPosition { x: 300, y: 100 },
            })
            .unwrap();

        let window = harness.registry.get(id).unwrap();
        assert_eq!(window.size, harness.config.min_size);
        assert_eq!(window.position, Position::new(100, 100));
    }

    #[test]
    fn closing_dragged_window_releases_capture() {
        let mut harness = Harness::new();
        let id = harness.launch(ApplicationType::Calendar);
        harness
            .dispatch(DesktopAction::BeginMove {
                window_id: id,
                pointer: PointerPosition { x: 0, y: 0 },
                bounds: viewport(),
            })
            .unwrap();

        harness
            .dispatch(DesktopAction::CloseWindow { window_id: id })
            .unwrap();

        assert!(!harness.interaction.is_captured());
    }

    #[test]
    fn set_title_and_taskbar_activation() {
        let mut harness = Harness::new();
        let notes = harness.launch(ApplicationType::Notes);
        harness.launch(ApplicationType::Assistant);
        harness
            .dispatch(DesktopAction::MinimizeWindow { window_id: notes })
            .unwrap();

        harness
            .dispatch(DesktopAction::SetTitle {
                window_id: notes,
                title: "Notes - todo".to_string(),
            })
            .unwrap();
        let effects = harness
            .dispatch(DesktopAction::ActivateTaskbarEntry { window_id: notes })
            .unwrap();

        let window = harness.registry.get(notes).unwrap();
        assert_eq!(window.title, "Notes - todo");
        assert!(!window.minimized);
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowElement(notes)]);
    }
}
