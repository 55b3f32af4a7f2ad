pub mod template;

use std::path::Path;

use anyhow::{Context, Result};

pub const ENV_FILE: &str = ".env";

/// The one key video generation cannot run without (Fal.ai).
pub const REQUIRED_KEY: &str = "FAL_API_KEY";
pub const REQUIRED_KEY_URL: &str = "https://fal.ai/dashboard/keys";

/// Optional keys, paired with the capability each one unlocks.
pub const OPTIONAL_KEYS: [(&str, &str); 3] = [
    ("ELEVENLABS_API_KEY", "music/voice"),
    ("REPLICATE_API_TOKEN", "lipsync"),
    ("GROQ_API_KEY", "transcription"),
];

enum Line {
    Pair { key: String, value: String },
    Raw(String),
}

/// An `.env` document as an ordered list of lines.
///
/// Lines that look like `KEY=VALUE` (key starts at column zero, characters
/// `[A-Za-z0-9_]`) parse as pairs; everything else (comments, blanks,
/// malformed lines) is kept verbatim. `render()` reproduces untouched input
/// byte for byte, so edits never disturb user-authored content.
pub struct EnvFile {
    lines: Vec<Line>,
    trailing_newline: bool,
}

impl EnvFile {
    pub fn parse(text: &str) -> Self {
        let trailing_newline = text.ends_with('\n');
        let body = text.strip_suffix('\n').unwrap_or(text);
        let lines = body
            .split('\n')
            .map(|line| match parse_pair(line) {
                Some((key, value)) => Line::Pair { key, value },
                None => Line::Raw(line.to_string()),
            })
            .collect();
        Self {
            lines,
            trailing_newline,
        }
    }

    /// Value of the first pair with this key, if any.
    #[allow(dead_code)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            Line::Pair { key: k, value } if k == key => Some(value.as_str()),
            _ => None,
        })
    }

    /// A key counts as set only when some pair line carries a non-empty
    /// value. `KEY=` is a placeholder, not a value.
    pub fn is_set(&self, key: &str) -> bool {
        self.lines.iter().any(|line| {
            matches!(line, Line::Pair { key: k, value } if k == key && !value.is_empty())
        })
    }

    /// Replace the value of the first pair with this key in place, or
    /// append a new pair line at the end of the document.
    pub fn upsert(&mut self, key: &str, value: &str) {
        for line in &mut self.lines {
            if let Line::Pair { key: k, value: v } = line {
                if k.as_str() == key {
                    *v = value.to_string();
                    return;
                }
            }
        }
        self.lines.push(Line::Pair {
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            match line {
                Line::Pair { key, value } => {
                    out.push_str(key);
                    out.push('=');
                    out.push_str(value);
                }
                Line::Raw(raw) => out.push_str(raw),
            }
        }
        if self.trailing_newline {
            out.push('\n');
        }
        out
    }
}

fn parse_pair(line: &str) -> Option<(String, String)> {
    let eq = line.find('=')?;
    let (key, rest) = line.split_at(eq);
    let first = key.chars().next()?;
    if !(first.is_ascii_alphabetic() || first == '_') {
        return None;
    }
    if !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some((key.to_string(), rest[1..].to_string()))
}

/// Read and parse `.env` under `root`. `None` when the file does not exist.
pub fn load(root: &Path) -> Result<Option<EnvFile>> {
    let path = root.join(ENV_FILE);
    if !path.exists() {
        return Ok(None);
    }
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Some(EnvFile::parse(&text)))
}

pub fn write(root: &Path, content: &str) -> Result<()> {
    let path = root.join(ENV_FILE);
    std::fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- parsing and round-trip --

    #[test]
    fn render_round_trips_untouched_content() {
        for text in [
            "",
            "\n",
            "A=1",
            "A=1\n",
            "# comment\n\nFAL_API_KEY=abc\nbroken line\n",
            "KEY=value with = signs\n",
            "  indented=ignored\n",
        ] {
            assert_eq!(EnvFile::parse(text).render(), text, "round-trip of {text:?}");
        }
    }

    #[test]
    fn indented_and_comment_lines_are_not_pairs() {
        let doc = EnvFile::parse("# FAL_API_KEY=ghost\n  FAL_API_KEY=ghost\n");
        assert!(!doc.is_set("FAL_API_KEY"));
        assert_eq!(doc.get("FAL_API_KEY"), None);
    }

    #[test]
    fn value_may_contain_equals_signs() {
        let doc = EnvFile::parse("GROQ_API_KEY=a=b=c\n");
        assert_eq!(doc.get("GROQ_API_KEY"), Some("a=b=c"));
    }

    // -- set detection --

    #[test]
    fn empty_value_counts_as_unset() {
        let doc = EnvFile::parse("FAL_API_KEY=\nELEVENLABS_API_KEY=e\n");
        assert!(!doc.is_set("FAL_API_KEY"));
        assert!(doc.is_set("ELEVENLABS_API_KEY"));
    }

    #[test]
    fn any_nonempty_line_sets_the_key() {
        // A blank placeholder earlier in the file does not mask a later value.
        let doc = EnvFile::parse("FAL_API_KEY=\nFAL_API_KEY=real\n");
        assert!(doc.is_set("FAL_API_KEY"));
    }

    // -- upsert --

    #[test]
    fn upsert_replaces_first_pair_in_place() {
        let mut doc = EnvFile::parse("# header\nFAL_API_KEY=old\nGROQ_API_KEY=g\n");
        doc.upsert("FAL_API_KEY", "new456");
        assert_eq!(doc.render(), "# header\nFAL_API_KEY=new456\nGROQ_API_KEY=g\n");
    }

    #[test]
    fn upsert_appends_missing_key() {
        let mut doc = EnvFile::parse("GROQ_API_KEY=g\n");
        doc.upsert("FAL_API_KEY", "abc");
        assert_eq!(doc.render(), "GROQ_API_KEY=g\nFAL_API_KEY=abc\n");
    }

    #[test]
    fn upsert_fills_blank_placeholder() {
        let mut doc = EnvFile::parse("FAL_API_KEY=\n");
        doc.upsert("FAL_API_KEY", "abc123");
        assert_eq!(doc.render(), "FAL_API_KEY=abc123\n");
        assert!(doc.is_set("FAL_API_KEY"));
    }
}
