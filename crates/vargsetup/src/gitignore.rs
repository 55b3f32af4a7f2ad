pub const GITIGNORE_FILE: &str = ".gitignore";

/// Ignore rules the setup flow guarantees are present.
pub const GITIGNORE_ENTRIES: [&str; 3] = [".env", ".cache/", "output/"];

/// Append the missing entries to the existing `.gitignore` text, one per
/// line. Membership is plain substring containment, so an entry already
/// mentioned anywhere in the file is never duplicated.
///
/// Returns `None` when every entry is already present; the caller performs
/// no write in that case.
pub fn updated(existing: &str) -> Option<String> {
    let mut content = existing.to_string();
    let mut added = false;
    for entry in GITIGNORE_ENTRIES {
        if !content.contains(entry) {
            content.push('\n');
            content.push_str(entry);
            added = true;
        }
    }
    added.then(|| format!("{}\n", content.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gets_all_entries() {
        let out = updated("").unwrap();
        assert_eq!(out, ".env\n.cache/\noutput/\n");
    }

    #[test]
    fn only_missing_entries_are_appended() {
        let out = updated(".env\n").unwrap();
        assert_eq!(out.matches(".env").count(), 1);
        assert!(out.contains(".cache/"));
        assert!(out.contains("output/"));
        assert!(out.ends_with("output/\n"));
        assert!(!out.ends_with("\n\n"));
    }

    #[test]
    fn fully_configured_file_needs_no_write() {
        assert!(updated(".env\n.cache/\noutput/\n").is_none());
        // Order and surrounding rules do not matter.
        assert!(updated("node_modules/\noutput/\n.cache/\n.env\n").is_none());
    }

    #[test]
    fn containment_counts_longer_rules_as_present() {
        // `.env` is a substring of `.env.local`, so no bare `.env` is added.
        assert!(updated(".env.local\n.cache/\noutput/\n").is_none());
    }

    #[test]
    fn result_has_exactly_one_trailing_newline() {
        let out = updated("dist/\n\n\n").unwrap();
        assert!(out.ends_with("output/\n"));
        assert!(!out.ends_with("\n\n"));
        assert!(out.starts_with("dist/\n"));
    }
}
