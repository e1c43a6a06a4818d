//! Workspace state: the live collection plus view selection.
//!
//! [`Workspace`] wires the domain store to persistence and holds the two
//! selection cursors. The visible screen is derived on every call from
//! whether the cursors resolve against the live collection. It is never
//! stored, so a deletion that strands a cursor simply routes the next
//! derivation back to the ancestor screen with no explicit reset code.
//!
//! Every mutation that changes the collection re-persists it as a whole.
//! A failed save is downgraded to a warning the presentation layer can
//! show; the in-memory state keeps going un-persisted.

use redline_core::{Design, Project};
use redline_storage::{KeyValueStore, WorkspacePersistence};
use tracing::warn;

use crate::store::ProjectStore;

/// Which of the three mutually exclusive views to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// No selected project resolves: the project list.
    Projects,
    /// The selected project resolves but no design within it does: its
    /// board list.
    Boards,
    /// Both cursors resolve: the feedback view for the selected design.
    Feedback,
}

/// The application state the presentation layer drives.
pub struct Workspace {
    store: ProjectStore,
    persistence: WorkspacePersistence,
    selected_project_id: Option<String>,
    selected_design_id: Option<String>,
    storage_warning: Option<String>,
}

impl Workspace {
    /// Opens the workspace over a key-value store, loading the previously
    /// saved collection or starting empty.
    pub fn open(store: Box<dyn KeyValueStore>) -> Self {
        let persistence = WorkspacePersistence::new(store);
        let projects = persistence.load();
        Self {
            store: ProjectStore::from_projects(projects),
            persistence,
            selected_project_id: None,
            selected_design_id: None,
            storage_warning: None,
        }
    }

    /// Read access to the domain store.
    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    // --- mutations (each persists the collection when it changed) ---

    pub fn create_project(&mut self, name: &str, password: Option<&str>) -> Option<String> {
        let created = self.store.create_project(name, password);
        if created.is_some() {
            self.persist();
        }
        created
    }

    pub fn delete_project(&mut self, project_id: &str) -> bool {
        let removed = self.store.delete_project(project_id);
        if removed {
            self.persist();
        }
        removed
    }

    pub fn create_design(
        &mut self,
        project_id: &str,
        name: &str,
        image_payload: &str,
    ) -> Option<String> {
        let created = self.store.create_design(project_id, name, image_payload);
        if created.is_some() {
            self.persist();
        }
        created
    }

    pub fn delete_design(&mut self, project_id: &str, design_id: &str) -> bool {
        let removed = self.store.delete_design(project_id, design_id);
        if removed {
            self.persist();
        }
        removed
    }

    pub fn add_comment(
        &mut self,
        project_id: &str,
        design_id: &str,
        text: &str,
        x: f64,
        y: f64,
    ) -> Option<String> {
        let added = self.store.add_comment(project_id, design_id, text, x, y);
        if added.is_some() {
            self.persist();
        }
        added
    }

    pub fn add_general_comment(&mut self, project_id: &str, design_id: &str, text: &str) -> bool {
        let added = self.store.add_general_comment(project_id, design_id, text);
        if added {
            self.persist();
        }
        added
    }

    // --- selection ---

    /// Selects a project and clears any design selection. Password
    /// verification, if the project has one, happens before this is
    /// called; the workspace applies the selection unconditionally.
    pub fn select_project(&mut self, project_id: &str) {
        self.selected_project_id = Some(project_id.to_string());
        self.selected_design_id = None;
    }

    /// Selects a design within the currently selected project.
    pub fn select_design(&mut self, design_id: &str) {
        self.selected_design_id = Some(design_id.to_string());
    }

    /// Clears both cursors ("back to all projects").
    pub fn back_to_projects(&mut self) {
        self.selected_project_id = None;
        self.selected_design_id = None;
    }

    /// Clears only the design cursor ("back to project boards").
    pub fn back_to_boards(&mut self) {
        self.selected_design_id = None;
    }

    // --- derivations ---

    /// The currently selected project, re-resolved against the live
    /// collection. A stale cursor yields `None`.
    pub fn current_project(&self) -> Option<&Project> {
        self.store.resolve_project(self.selected_project_id.as_deref()?)
    }

    /// The currently selected design within the current project.
    pub fn current_design(&self) -> Option<&Design> {
        let project = self.current_project()?;
        self.store
            .resolve_design(project, self.selected_design_id.as_deref()?)
    }

    /// Derives the screen to show from the live collection and cursors.
    pub fn screen(&self) -> Screen {
        match self.current_project() {
            None => Screen::Projects,
            Some(_) => match self.current_design() {
                None => Screen::Boards,
                Some(_) => Screen::Feedback,
            },
        }
    }

    /// Hands the most recent storage warning, if any, to the presentation
    /// layer. Returns it once; subsequent calls yield `None` until the
    /// next failed save.
    pub fn take_storage_warning(&mut self) -> Option<String> {
        self.storage_warning.take()
    }

    fn persist(&mut self) {
        if let Err(e) = self.persistence.save(self.store.projects()) {
            warn!("failed to save collection: {}", e);
            self.storage_warning = Some(format!(
                "Could not save your changes ({}). The local store may be full; \
                 try uploading smaller images.",
                e
            ));
        }
    }
}
