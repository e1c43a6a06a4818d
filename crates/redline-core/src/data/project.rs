//! The Project -> Design -> Comment tree.
//!
//! The collection of [`Project`]s is the single source of truth for the
//! whole workspace. Consumers hold ids, never copies of entities, and
//! re-resolve those ids against the live collection on every read. The
//! lookups here are pure derivations and must not be cached across
//! mutations.
//!
//! The serialized form of this tree is the persistence format: an array of
//! projects, each with a nested design array, each with a nested comment
//! array and a plain-string general-comment array. Wire field names are
//! camelCase (`imageUrl`, `generalComments`).

use serde::{Deserialize, Serialize};

/// A positioned annotation on a design image.
///
/// `x` and `y` are percentages in `[0, 100]` relative to the image's
/// top-left corner, so the marker keeps its visual anchor regardless of
/// the rendered image size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// One uploaded design image (a board) plus its feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    pub id: String,
    pub name: String,
    /// Data URI or external URL. Stored verbatim, never re-encoded.
    pub image_url: String,
    pub comments: Vec<Comment>,
    /// Un-positioned freeform notes, in submission order.
    pub general_comments: Vec<String>,
}

impl Design {
    /// Creates a design with empty comment sequences.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_url: image_url.into(),
            comments: Vec::new(),
            general_comments: Vec::new(),
        }
    }
}

/// A named workspace of designs, optionally password-gated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    /// Plaintext entry gate; `None` (absent on the wire) means
    /// unprotected. A casual deterrent, not a security boundary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub designs: Vec<Design>,
}

impl Project {
    /// Creates a project with no designs.
    pub fn new(id: impl Into<String>, name: impl Into<String>, password: Option<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            password,
            designs: Vec::new(),
        }
    }

    /// Looks up a design by id within this project.
    pub fn design(&self, design_id: &str) -> Option<&Design> {
        self.designs.iter().find(|d| d.id == design_id)
    }

    /// Mutable design lookup.
    pub fn design_mut(&mut self, design_id: &str) -> Option<&mut Design> {
        self.designs.iter_mut().find(|d| d.id == design_id)
    }

    /// Total positioned comments across all designs of this project.
    pub fn total_comments(&self) -> usize {
        self.designs.iter().map(|d| d.comments.len()).sum()
    }

    /// Advisory password check the presentation layer runs before
    /// selecting this project. An unprotected project matches any attempt.
    pub fn password_matches(&self, attempt: &str) -> bool {
        match &self.password {
            None => true,
            Some(password) => password == attempt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project() -> Project {
        let mut project = Project::new("proj-1", "Acme", Some("secret".to_string()));
        let mut design = Design::new("design-1", "Homepage", "data:image/png;base64,AAAA");
        design.comments.push(Comment {
            id: "comment-1".to_string(),
            text: "Fix logo".to_string(),
            x: 10.0,
            y: 20.0,
        });
        design.general_comments.push("Looks good overall".to_string());
        project.designs.push(design);
        project
    }

    #[test]
    fn test_design_lookup() {
        let project = sample_project();
        assert_eq!(project.design("design-1").unwrap().name, "Homepage");
        assert!(project.design("design-2").is_none());
    }

    #[test]
    fn test_total_comments_counts_only_positioned() {
        let project = sample_project();
        assert_eq!(project.total_comments(), 1);
    }

    #[test]
    fn test_password_gate_is_advisory_plaintext() {
        let project = sample_project();
        assert!(project.password_matches("secret"));
        assert!(!project.password_matches("wrong"));

        let open = Project::new("proj-2", "Open", None);
        assert!(open.password_matches(""));
        assert!(open.password_matches("anything"));
    }

    #[test]
    fn test_wire_shape_uses_camel_case() {
        let json = serde_json::to_string(&sample_project()).unwrap();
        assert!(json.contains("\"imageUrl\""));
        assert!(json.contains("\"generalComments\""));
        assert!(json.contains("\"password\""));
    }

    #[test]
    fn test_absent_password_is_omitted_from_wire() {
        let open = Project::new("proj-2", "Open", None);
        let json = serde_json::to_string(&open).unwrap();
        assert!(!json.contains("password"));

        let parsed: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.password, None);
    }

    #[test]
    fn test_round_trip_preserves_ids_exactly() {
        let project = sample_project();
        let json = serde_json::to_string(&project).unwrap();
        let parsed: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, project);
    }
}
