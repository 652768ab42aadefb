//! Applet resolution for window bodies.
//!
//! Each [`ApplicationType`] maps to a mount function. Applets own their content and talk back to
//! the manager only through [`desktop_app_contract::AppletHost`].

mod placeholders;

use desktop_app_contract::{AppletModule, ApplicationType};

use self::placeholders::{
    mount_assistant_placeholder, mount_calendar_placeholder, mount_code_editor_placeholder,
    mount_files_placeholder, mount_notes_placeholder, mount_settings_placeholder,
    mount_terminal_placeholder, mount_unsupported_applet,
};

/// Resolves the applet module that renders windows of `application_type`.
pub fn applet_module(application_type: &ApplicationType) -> AppletModule {
    match application_type {
        ApplicationType::Notes => AppletModule::new(mount_notes_placeholder),
        ApplicationType::Files => AppletModule::new(mount_files_placeholder),
        ApplicationType::Calendar => AppletModule::new(mount_calendar_placeholder),
        ApplicationType::Terminal => AppletModule::new(mount_terminal_placeholder),
        ApplicationType::CodeEditor => AppletModule::new(mount_code_editor_placeholder),
        ApplicationType::Assistant => AppletModule::new(mount_assistant_placeholder),
        ApplicationType::Settings => AppletModule::new(mount_settings_placeholder),
        ApplicationType::Other(_) => AppletModule::new(mount_unsupported_applet),
    }
}
