use super::{EnvFile, REQUIRED_KEY};

/// Hand-crafted `.env` template: every known key blank, with the signup URL
/// for each one commented above it so users can fill the file in manually.
pub const ENV_TEMPLATE: &str = "# Varg AI Video Generation - API Keys
# Get your keys from the URLs below

# REQUIRED - Fal.ai (image & video generation)
# Get it: https://fal.ai/dashboard/keys
FAL_API_KEY=

# OPTIONAL - ElevenLabs (music & voice)
# Get it: https://elevenlabs.io/app/settings/api-keys
ELEVENLABS_API_KEY=

# OPTIONAL - Replicate (lipsync)
# Get it: https://replicate.com/account/api-tokens
REPLICATE_API_TOKEN=

# OPTIONAL - Groq (transcription)
# Get it: https://console.groq.com/keys
GROQ_API_KEY=
";

/// The template with the required key pre-filled.
pub fn with_required_key(value: &str) -> String {
    let mut doc = EnvFile::parse(ENV_TEMPLATE);
    doc.upsert(REQUIRED_KEY, value);
    doc.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envfile::OPTIONAL_KEYS;

    #[test]
    fn template_lists_every_key_blank() {
        let doc = EnvFile::parse(ENV_TEMPLATE);
        assert_eq!(doc.get(REQUIRED_KEY), Some(""));
        for (key, _) in OPTIONAL_KEYS {
            assert_eq!(doc.get(key), Some(""), "{key} missing from template");
        }
        assert!(!doc.is_set(REQUIRED_KEY));
    }

    #[test]
    fn with_required_key_fills_only_that_line() {
        let content = with_required_key("abc123");
        assert!(content.contains("FAL_API_KEY=abc123\n"));
        assert_eq!(content.matches("FAL_API_KEY=").count(), 1);
        // Everything else stays a blank placeholder.
        assert!(content.contains("ELEVENLABS_API_KEY=\n"));
        assert!(content.contains("GROQ_API_KEY=\n"));
    }
}
