//! Directory scanning: one level of a folder becomes a [`SoundMap`].
//!
//! Only the immediate entries of the directory are considered. Subdirectories
//! (including symlinks that resolve to one) are skipped and every other entry
//! contributes one key derived from its file name.

pub mod key;

use std::{fs, io, path::Path};

use common::{SoundEntry, SoundMap};

pub use key::derive_key;

/// Source of sound maps for a directory.
///
/// The request handler talks to this trait so tests can substitute failures
/// that are awkward to reproduce on a real filesystem.
#[cfg_attr(test, mockall::automock)]
pub trait Scanner: Send + Sync {
    /// Build the sound map for `dir`.
    ///
    /// The caller has already confirmed that `dir` is a directory.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while listing the directory.
    fn scan(&self, dir: &Path) -> io::Result<SoundMap>;
}

/// [`Scanner`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsScanner;

impl Scanner for FsScanner {
    fn scan(&self, dir: &Path) -> io::Result<SoundMap> {
        scan(dir)
    }
}

/// List `dir` and build its sound map.
///
/// Keys collide when two files differ only in extension (`kick.ogg`,
/// `kick.wav`); the later entry overwrites the earlier one, which leaves the
/// same record either way since a record depends only on its key.
///
/// # Errors
///
/// Propagates errors from opening the directory or reading any entry.
pub fn scan(dir: &Path) -> io::Result<SoundMap> {
    let mut sounds = SoundMap::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.path().is_dir() {
            continue;
        }

        let name = entry.file_name();
        let name = name.to_string_lossy();
        let key = derive_key(&name);
        sounds.insert(key.to_owned(), SoundEntry::custom(key));
    }

    Ok(sounds)
}

/// Render a sound map as the `sounds.json` text returned to callers.
///
/// Output uses two-space indentation and keeps non-ASCII characters as-is.
pub fn render(sounds: &SoundMap) -> serde_json::Result<String> {
    serde_json::to_string_pretty(sounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn skips_subdirectories() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "kick.ogg");
        touch(tmp.path(), "snare.wav");
        fs::create_dir(tmp.path().join("nested")).unwrap();
        touch(&tmp.path().join("nested"), "deep.ogg");

        let sounds = scan(tmp.path()).unwrap();

        let keys: Vec<_> = sounds.keys().cloned().collect();
        assert_eq!(keys, vec!["kick", "snare"]);
        assert_eq!(sounds["kick"], SoundEntry::custom("kick"));
        assert_eq!(sounds["snare"].sounds, vec!["custom/snare".to_owned()]);
    }

    #[test]
    fn keys_are_sorted_case_sensitively() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["zeta.ogg", "Alpha.OGG", "beta", "a.b.c", "Zulu.mp3"] {
            touch(tmp.path(), name);
        }

        let sounds = scan(tmp.path()).unwrap();

        let keys: Vec<_> = sounds.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Alpha", "Zulu", "a.b", "beta", "zeta"]);
    }

    #[test]
    fn colliding_keys_collapse_to_one_entry() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "kick.ogg");
        touch(tmp.path(), "kick.wav");
        touch(tmp.path(), "kick.OGG.bak");

        let sounds = scan(tmp.path()).unwrap();

        assert_eq!(sounds.len(), 2);
        assert_eq!(sounds["kick"], SoundEntry::custom("kick"));
        assert_eq!(sounds["kick.OGG"], SoundEntry::custom("kick.OGG"));
    }

    #[test]
    fn empty_directory_yields_empty_map() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join("only-a-folder")).unwrap();
        assert!(scan(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn scanning_twice_is_stable() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["one.ogg", "two.flac", "three"] {
            touch(tmp.path(), name);
        }
        assert_eq!(scan(tmp.path()).unwrap(), scan(tmp.path()).unwrap());
    }

    #[test]
    fn missing_directory_propagates_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = scan(&tmp.path().join("gone")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn render_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["kick.ogg", "snare.wav", "trovão.ogg"] {
            touch(tmp.path(), name);
        }
        let sounds = scan(tmp.path()).unwrap();

        let text = render(&sounds).unwrap();
        let parsed: SoundMap = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed, sounds);
        assert!(text.contains("\"trovão\""), "non-ASCII must not be escaped");
        assert!(text.starts_with("{\n  \"kick\": {\n    \"sounds\": [\n      \"custom/kick\""));
    }

    #[test]
    fn fs_scanner_delegates_to_scan() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "boom.ogg");
        let sounds = FsScanner.scan(tmp.path()).unwrap();
        assert!(sounds.contains_key("boom"));
    }
}
