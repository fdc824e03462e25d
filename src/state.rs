use std::path::Path;

use crate::data::loader;
use crate::routes::{self, RouteTable};
use crate::tasks::{PanelState, TaskId, TaskKind, TaskRegistry};
use crate::theme::Theme;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Open task tabs.
    pub registry: TaskRegistry,

    /// Routed views shown when no task tab is selected.
    pub routes: RouteTable,

    /// Named color tokens.
    pub theme: Theme,

    /// Path of the current routed view.
    pub location: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            registry: TaskRegistry::default(),
            routes: routes::default_table(),
            theme: Theme::default(),
            location: "/".to_string(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Open a fresh task tab of the given kind.
    pub fn open_task(&mut self, kind: TaskKind) -> TaskId {
        let id = self.registry.open(kind);
        if let Some(task) = self.registry.get(id) {
            log::info!("opened {}", task.title);
        }
        id
    }

    /// Close a task tab. Unknown ids are reported, not fatal.
    pub fn close_task(&mut self, id: TaskId) {
        match self.registry.close(id) {
            Ok(task) => log::info!("closed {}", task.title),
            Err(e) => {
                log::warn!("close_task: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Switch the central panel to a routed view.
    pub fn navigate(&mut self, path: &str) {
        self.location = path.to_string();
        self.registry.deselect();
    }

    /// Decode an image file and open a Preview tab showing it.
    pub fn open_preview(&mut self, path: &Path) {
        match loader::load_image(path) {
            Ok(image) => {
                log::info!("loaded {} at {}", image.file_name(), image.size);
                let id = self.registry.open(TaskKind::Preview);
                if let Some(task) = self.registry.get_mut(id) {
                    if let PanelState::Preview(panel) = &mut task.panel {
                        panel.image = Some(image);
                    }
                }
                self.status_message = None;
            }
            Err(e) => {
                log::error!("failed to open image: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
