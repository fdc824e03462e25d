use std::collections::BTreeMap;
use std::fmt;

use eframe::egui::TextureHandle;
use thiserror::Error;

use crate::data::model::PreviewImage;

// ---------------------------------------------------------------------------
// Task identity
// ---------------------------------------------------------------------------

/// Opaque handle to an open task. Ids are assigned monotonically and never
/// reused within a run, so a stale id can only miss, not alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TaskKind {
    /// Show an image file contain-fitted into the panel.
    Preview,
    /// Interactive form evaluating the fit for typed-in dimensions.
    Calculator,
}

impl TaskKind {
    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::Preview => "Preview",
            TaskKind::Calculator => "Calculator",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TaskError {
    #[error("no open task with id {0}")]
    UnknownTask(TaskId),
}

// ---------------------------------------------------------------------------
// Per-task panel state
// ---------------------------------------------------------------------------

/// State behind a Preview tab. The texture is uploaded lazily on first
/// paint, once an egui context is at hand.
#[derive(Default)]
pub struct PreviewPanel {
    pub image: Option<PreviewImage>,
    pub texture: Option<TextureHandle>,
}

/// State behind a Calculator tab: the four dimension inputs. Defaults show
/// a wide item in a square parent so the form opens on a non-trivial fit.
pub struct CalculatorPanel {
    pub parent_width: f32,
    pub parent_height: f32,
    pub item_width: f32,
    pub item_height: f32,
}

impl Default for CalculatorPanel {
    fn default() -> Self {
        CalculatorPanel {
            parent_width: 100.0,
            parent_height: 100.0,
            item_width: 100.0,
            item_height: 50.0,
        }
    }
}

pub enum PanelState {
    Preview(PreviewPanel),
    Calculator(CalculatorPanel),
}

impl PanelState {
    fn for_kind(kind: TaskKind) -> Self {
        match kind {
            TaskKind::Preview => PanelState::Preview(PreviewPanel::default()),
            TaskKind::Calculator => PanelState::Calculator(CalculatorPanel::default()),
        }
    }
}

/// One open tab: identity, title, and the owned panel state.
pub struct Task {
    pub id: TaskId,
    pub kind: TaskKind,
    pub title: String,
    pub panel: PanelState,
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Ordered registry of open tasks. Owns every panel outright: creation
/// hands back an id, destruction requires one. Tab order is insertion
/// order.
#[derive(Default)]
pub struct TaskRegistry {
    tasks: Vec<Task>,
    next_id: u64,
    /// Per-kind counters for task titles. Counters only ever increase, so
    /// titles stay historical after closes.
    opened: BTreeMap<TaskKind, u32>,
    selected: Option<TaskId>,
}

impl TaskRegistry {
    /// Open a new task of the given kind, select its tab, and return its id.
    pub fn open(&mut self, kind: TaskKind) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);

        let counter = self.opened.entry(kind).or_insert(0);
        *counter += 1;
        let title = format!("{} #{counter}", kind.label());

        self.tasks.push(Task {
            id,
            kind,
            title,
            panel: PanelState::for_kind(kind),
        });
        self.selected = Some(id);
        id
    }

    /// Close a task and return the owned state. Closing the selected tab
    /// moves the selection to the tab that followed it, falling back to the
    /// new last tab, or to nothing when the strip empties.
    pub fn close(&mut self, id: TaskId) -> Result<Task, TaskError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TaskError::UnknownTask(id))?;
        let removed = self.tasks.remove(index);

        if self.selected == Some(id) {
            self.selected = self
                .tasks
                .get(index)
                .or_else(|| self.tasks.last())
                .map(|t| t.id);
        }
        Ok(removed)
    }

    pub fn select(&mut self, id: TaskId) -> Result<(), TaskError> {
        if !self.tasks.iter().any(|t| t.id == id) {
            return Err(TaskError::UnknownTask(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    /// Drop the tab selection (used when navigating to a routed view).
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<TaskId> {
        self.selected
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Tasks in tab order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
