use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::envfile::{self, EnvFile, template};
use crate::example;
use crate::gitignore;
use crate::report;
use crate::scaffold;

/// `vargsetup`: run the whole setup flow against `root`.
///
/// `input` supplies the single line read when the required key has to be
/// prompted for. `main` passes locked stdin; tests pass a cursor. The flow
/// is strictly sequential and safe to re-run: every step leaves existing
/// user content untouched.
pub fn setup(root: &Path, input: &mut dyn BufRead) -> Result<()> {
    debug!(root = %root.display(), "starting setup");
    report::print_banner();

    report::step("Setting up project structure");
    scaffold::ensure_project_dirs(root)?;

    report::step("Checking API keys");
    let required_key_present = ensure_required_key(root, input)?;

    report::step("Creating example files");
    emit_example(root)?;

    report::step("Updating .gitignore");
    update_gitignore(root)?;

    report::print_summary(required_key_present);
    Ok(())
}

/// Detect the required and optional keys in `.env`, prompting for the
/// required one when absent. Returns whether the required key is present
/// once the step completes.
fn ensure_required_key(root: &Path, input: &mut dyn BufRead) -> Result<bool> {
    let existing = envfile::load(root)?;

    match &existing {
        Some(doc) => {
            if doc.is_set(envfile::REQUIRED_KEY) {
                report::success(&format!("{} found in .env", envfile::REQUIRED_KEY));
                report_optional_keys(doc);
                return Ok(true);
            }
            report::warn(&format!("{} not found in .env", envfile::REQUIRED_KEY));
            report_optional_keys(doc);
        }
        None => report::warn(".env file not found"),
    }

    // Prompt once; empty input (or EOF) skips without failing.
    report::print_required_key_help();
    print!(
        "Enter your {} (or press Enter to skip): ",
        envfile::REQUIRED_KEY
    );
    std::io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let value = line.trim();
    debug!(supplied = !value.is_empty(), "prompt resolved");

    if value.is_empty() {
        if existing.is_none() {
            envfile::write(root, template::ENV_TEMPLATE)?;
            report::info("Created .env template - add your keys manually");
        }
        return Ok(false);
    }

    let content = match existing {
        Some(mut doc) => {
            doc.upsert(envfile::REQUIRED_KEY, value);
            doc.render()
        }
        None => template::with_required_key(value),
    };
    envfile::write(root, &content)?;
    report::success(&format!("{} saved to .env", envfile::REQUIRED_KEY));
    Ok(true)
}

fn report_optional_keys(doc: &EnvFile) {
    let mut any = false;
    for (key, capability) in envfile::OPTIONAL_KEYS {
        if doc.is_set(key) {
            report::info(&format!("{key} found ({capability} enabled)"));
            any = true;
        }
    }
    if !any {
        report::info("No optional keys found (basic video generation only)");
    }
}

fn emit_example(root: &Path) -> Result<()> {
    let path = root.join(example::EXAMPLE_PATH);
    match example::rendered(path.exists()) {
        Some(content) => {
            std::fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            report::success(&format!("Created {}", example::EXAMPLE_PATH));
        }
        None => report::info(&format!("{} already exists", example::EXAMPLE_PATH)),
    }
    Ok(())
}

fn update_gitignore(root: &Path) -> Result<()> {
    let path = root.join(gitignore::GITIGNORE_FILE);
    let existing = if path.exists() {
        std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    } else {
        String::new()
    };

    match gitignore::updated(&existing) {
        Some(content) => {
            std::fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            report::success("Updated .gitignore");
        }
        None => report::info(".gitignore already configured"),
    }
    Ok(())
}
