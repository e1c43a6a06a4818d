use anyhow::Context;
use tracing::info;

use redline::init_logging;
use redline_board::Workspace;
use redline_storage::FileStore;

/// Headless entry point: opens the persisted workspace and reports its
/// contents. The interactive presentation layer lives outside this
/// repository and drives the same `Workspace` API.
fn main() -> anyhow::Result<()> {
    init_logging()?;

    let store = FileStore::open_default().context("Failed to open the local store")?;
    info!("store directory: {}", store.dir().display());

    let workspace = Workspace::open(Box::new(store));

    let projects = workspace.store().projects();
    info!("workspace contains {} project(s)", projects.len());
    for project in projects {
        info!(
            "  {} - {} design(s), {} positioned comment(s){}",
            project.name,
            project.designs.len(),
            project.total_comments(),
            if project.password.is_some() {
                " [password-gated]"
            } else {
                ""
            }
        );
    }

    Ok(())
}
