use crate::{ARTIFACT_EXTENSION, ARTIFACT_PREFIX};

/// Build the filename stem `audio_<emotion>_<stamp>`
///
/// The emotion is reduced to `[A-Za-z0-9_-]` so a label coming back from a
/// classifier can never introduce a path separator.
pub(crate) fn stem(emotion: &str, stamp: &str) -> String {
    let sanitized: String = emotion
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();

    let emotion = if sanitized.is_empty() { "unknown" } else { &sanitized };

    format!("{ARTIFACT_PREFIX}{emotion}_{stamp}")
}

/// Whether `name` refers to a plain file directly inside the output directory
pub(crate) fn is_safe_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains("..")
        && !name.contains(['/', '\\', '\0'])
}

/// Content type served for an artifact, chosen by extension
pub(crate) fn content_type_for(name: &str) -> &'static str {
    let extension = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some(ext) if ext == ARTIFACT_EXTENSION => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("ogg" | "opus") => "audio/ogg",
        Some("flac") => "audio/flac",
        Some("aac") => "audio/aac",
        _ => "application/octet-stream",
    }
}

/// Artifact extension for audio of the given content type
///
/// Parameters such as `; codecs=opus` are ignored. An unlabeled body
/// (`application/octet-stream`) is stored as MPEG. Returns `None` for
/// anything that is not a known audio format.
pub fn extension_for(content_type: &str) -> Option<&'static str> {
    let essence = content_type.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();

    match essence.as_str() {
        "audio/mpeg" | "audio/mp3" | "application/octet-stream" => Some(ARTIFACT_EXTENSION),
        "audio/wav" | "audio/wave" | "audio/x-wav" | "audio/vnd.wave" => Some("wav"),
        "audio/ogg" | "audio/opus" => Some("ogg"),
        "audio/flac" | "audio/x-flac" => Some("flac"),
        "audio/aac" => Some("aac"),
        _ => None,
    }
}
