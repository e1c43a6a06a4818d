//! Domain store for the project collection.
//!
//! [`ProjectStore`] owns the Project -> Design -> Comment tree and exposes
//! the mutation operations the presentation layer calls. Inputs are
//! expected to be pre-validated by the caller; an operation handed an
//! empty name or an id that no longer resolves is a silent no-op, never an
//! error. A stale operation (say, racing a delete from another tab) simply
//! has no visible effect and the next render re-reads the live collection.
//!
//! Comments and general comments are append-only: this layer has no edit
//! or delete operation for them, and callers must not assume one exists.

use redline_core::id;
use redline_core::{Comment, Design, Project};
use tracing::{debug, info};

/// Owned, injectable store over the project collection.
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
}

impl ProjectStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already-loaded collection.
    pub fn from_projects(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// The full collection, in insertion order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Looks up a project by id. Recomputed on every call; callers must
    /// not cache the result across mutations.
    pub fn resolve_project(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }

    /// Looks up a design by id within a project.
    pub fn resolve_design<'a>(&self, project: &'a Project, design_id: &str) -> Option<&'a Design> {
        project.design(design_id)
    }

    /// Total positioned comments across the whole collection.
    pub fn total_comment_count(&self) -> usize {
        self.projects.iter().map(Project::total_comments).sum()
    }

    /// Appends a new project and returns its freshly generated id.
    ///
    /// The name is trimmed first; a whitespace-only name is a no-op. An
    /// empty or whitespace-only password means unprotected.
    pub fn create_project(&mut self, name: &str, password: Option<&str>) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let password = password
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        let project = Project::new(id::new_project_id(), name, password);
        let project_id = project.id.clone();
        info!("created project {} ({})", project_id, name);
        self.projects.push(project);
        Some(project_id)
    }

    /// Removes the project with the given id, cascading to all of its
    /// designs and their comments. Returns false if the id did not resolve.
    pub fn delete_project(&mut self, project_id: &str) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != project_id);
        let removed = self.projects.len() != before;
        if removed {
            info!("deleted project {}", project_id);
        }
        removed
    }

    /// Appends a design (with empty comment sequences) to the named
    /// project and returns its id. The image payload is stored verbatim.
    pub fn create_design(
        &mut self,
        project_id: &str,
        name: &str,
        image_payload: &str,
    ) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let project = self.project_mut(project_id)?;

        let design = Design::new(id::new_design_id(), name, image_payload);
        let design_id = design.id.clone();
        info!("added design {} to project {}", design_id, project_id);
        project.designs.push(design);
        Some(design_id)
    }

    /// Removes a design (and its comments) from the named project.
    pub fn delete_design(&mut self, project_id: &str, design_id: &str) -> bool {
        let Some(project) = self.project_mut(project_id) else {
            return false;
        };
        let before = project.designs.len();
        project.designs.retain(|d| d.id != design_id);
        let removed = project.designs.len() != before;
        if removed {
            info!("deleted design {} from project {}", design_id, project_id);
        }
        removed
    }

    /// Appends a positioned comment and returns its id.
    ///
    /// `x` and `y` are the percentage coordinates already produced by the
    /// coordinate mapper; the store does not recompute or clamp them.
    pub fn add_comment(
        &mut self,
        project_id: &str,
        design_id: &str,
        text: &str,
        x: f64,
        y: f64,
    ) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let design = self.design_mut(project_id, design_id)?;

        let comment = Comment {
            id: id::new_comment_id(),
            text: text.to_string(),
            x,
            y,
        };
        let comment_id = comment.id.clone();
        debug!(
            "added comment {} at ({:.1}, {:.1}) on design {}",
            comment_id, x, y, design_id
        );
        design.comments.push(comment);
        Some(comment_id)
    }

    /// Appends a trimmed general comment to the named design.
    pub fn add_general_comment(&mut self, project_id: &str, design_id: &str, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        let Some(design) = self.design_mut(project_id, design_id) else {
            return false;
        };
        debug!("added general comment on design {}", design_id);
        design.general_comments.push(text.to_string());
        true
    }

    fn project_mut(&mut self, project_id: &str) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == project_id)
    }

    fn design_mut(&mut self, project_id: &str, design_id: &str) -> Option<&mut Design> {
        self.project_mut(project_id)?.design_mut(design_id)
    }
}
