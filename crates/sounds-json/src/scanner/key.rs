//! Derivation of sound keys from file names.

/// Extension stripped by fixed length whenever a name ends with it, in any case.
const OGG_EXTENSION: &str = ".ogg";

/// Derive the sound key for a file name.
///
/// - `kick.ogg` / `kick.OGG` → `kick`
/// - `snare.wav` → `snare`
/// - `a.b.c` → `a.b`
/// - `noext` → `noext`
pub fn derive_key(name: &str) -> &str {
    if ends_with_ogg(name) {
        // The suffix is ASCII, so the cut lands on a char boundary.
        return &name[..name.len() - OGG_EXTENSION.len()];
    }
    strip_extension(name)
}

fn ends_with_ogg(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() >= OGG_EXTENSION.len()
        && bytes[bytes.len() - OGG_EXTENSION.len()..]
            .eq_ignore_ascii_case(OGG_EXTENSION.as_bytes())
}

/// Remove the final `.ext` segment.
///
/// Leading dots belong to the name, not to an extension: `.hidden` and
/// `..foo` are returned unchanged, while `.a.b` becomes `.a`.
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) if name[..dot].bytes().any(|b| b != b'.') => &name[..dot],
        _ => name,
    }
}
