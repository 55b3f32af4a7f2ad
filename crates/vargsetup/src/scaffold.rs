use std::path::Path;

use anyhow::{Context, Result};

use crate::report;

/// Working directories the SDK expects, relative to the project root.
pub const PROJECT_DIRS: [&str; 3] = ["output", ".cache/ai", "examples"];

/// Create any missing project directory (intermediate segments included),
/// reporting each one. Existing directories are left untouched.
pub fn ensure_project_dirs(root: &Path) -> Result<()> {
    for dir in PROJECT_DIRS {
        let path = root.join(dir);
        if path.exists() {
            report::info(&format!("{dir}/ already exists"));
        } else {
            std::fs::create_dir_all(&path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            report::success(&format!("Created {dir}/"));
        }
    }
    Ok(())
}
