//! The hand-curated repo catalog: the fallback identities rendered when live
//! metadata never arrives. An override file can replace the built-in list.

use anyhow::{ensure, Context, Result};
use tracing::info;

use crate::repos::models::RepoDescriptor;

/// Upper bound on showcased repos, matching the widget's grid.
pub const MAX_CATALOG_SIZE: usize = 6;

/// The built-in catalog, owned by the configured home user.
pub fn default_catalog(home_owner: &str) -> Vec<RepoDescriptor> {
    let entry = |name: &str, description: &str, language: &str| RepoDescriptor {
        owner: home_owner.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        language: language.to_string(),
    };

    vec![
        entry(
            "portfolio-site",
            "Personal site with live GitHub activity signals",
            "TypeScript",
        ),
        entry(
            "accent-lab",
            "Accent-color theming playground",
            "JavaScript",
        ),
        entry(
            "portfolio-generator",
            "Static portfolio HTML generator",
            "JavaScript",
        ),
        entry(
            "devpulse",
            "GitHub activity status service",
            "Rust",
        ),
    ]
}

/// Loads a catalog override from a JSON file: an array of descriptors.
pub fn load_catalog(path: &str) -> Result<Vec<RepoDescriptor>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading repo catalog '{path}'"))?;
    let catalog: Vec<RepoDescriptor> =
        serde_json::from_str(&raw).with_context(|| format!("parsing repo catalog '{path}'"))?;

    ensure!(!catalog.is_empty(), "repo catalog '{path}' is empty");
    ensure!(
        catalog.len() <= MAX_CATALOG_SIZE,
        "repo catalog '{path}' has {} entries, max is {MAX_CATALOG_SIZE}",
        catalog.len()
    );

    info!("Loaded repo catalog override: {} entries", catalog.len());
    Ok(catalog)
}
