//! In-memory cache in front of an asset resolver

use crate::resolver::normalize_name;
use crate::{AssetResolver, FaceSource, Resolution};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::SystemTime;

/// What the file looked like when an entry was cached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stamp {
    Absent,
    Present {
        modified: Option<SystemTime>,
        len: u64,
    },
}

impl Stamp {
    fn of(path: &Path) -> Self {
        match fs::metadata(path) {
            Ok(meta) if meta.is_file() => Stamp::Present {
                modified: meta.modified().ok(),
                len: meta.len(),
            },
            _ => Stamp::Absent,
        }
    }
}

#[derive(Debug)]
struct Entry {
    stamp: Stamp,
    resolution: Resolution,
}

/// Caches resolutions per identifier and reloads when the file changes
///
/// Each call still stats the file, so added and removed assets are picked up on
/// the next lookup. A replaced asset is only noticed when its modification time
/// or length differs; a rewrite of the same length within the filesystem's
/// timestamp granularity keeps serving the old image until [`clear`] is called.
///
/// [`clear`]: CachingResolver::clear
#[derive(Debug)]
pub struct CachingResolver {
    inner: AssetResolver,
    entries: Mutex<HashMap<String, Entry>>,
}

impl CachingResolver {
    /// Wraps a resolver
    pub fn new(inner: AssetResolver) -> Self {
        Self {
            inner,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Gets the wrapped resolver
    pub fn inner(&self) -> &AssetResolver {
        &self.inner
    }

    /// Number of cached identifiers
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Whether nothing is cached
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Drops every cached entry
    pub fn clear(&self) {
        self.entries().clear();
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        // Entries are replaced whole, so a poisoned map is still consistent
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FaceSource for CachingResolver {
    fn resolve(&self, name: &str) -> Resolution {
        let (key, path) = match (normalize_name(name), self.inner.path_for(name)) {
            (Ok(key), Ok(path)) => (key, path),
            _ => return self.inner.resolve(name),
        };

        let stamp = Stamp::of(&path);
        if let Some(entry) = self.entries().get(&key) {
            if entry.stamp == stamp {
                log::debug!("Face cache hit for {}", key);
                return entry.resolution.clone();
            }
        }

        let resolution = self.inner.resolve(&key);
        self.entries().insert(
            key,
            Entry {
                stamp,
                resolution: resolution.clone(),
            },
        );
        resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{write_corrupt, write_png};
    use faces_core::Face;
    use std::sync::Arc;
    use std::thread;
    use tempfile::tempdir;

    #[test]
    fn test_matches_uncached_results() {
        let dir = tempdir().unwrap();
        write_png(dir.path(), "happy", 80, 80);
        write_png(dir.path(), "sad", 20, 40);
        write_corrupt(dir.path(), "angry");

        let plain = AssetResolver::new(dir.path());
        let cached = CachingResolver::new(plain.clone());
        for face in Face::ALL {
            assert_eq!(cached.resolve_face(face), plain.resolve_face(face));
            assert_eq!(cached.resolve_face(face), plain.resolve_face(face));
        }
        assert_eq!(cached.len(), Face::ALL.len());
    }

    #[test]
    fn test_hits_share_the_decoded_image() {
        let dir = tempdir().unwrap();
        write_png(dir.path(), "cool", 80, 80);

        let cached = CachingResolver::new(AssetResolver::new(dir.path()));
        let first = cached.resolve("cool").into_image().unwrap();
        let second = cached.resolve("COOL").into_image().unwrap();
        assert!(Arc::ptr_eq(&first.image, &second.image));
        assert_eq!(cached.len(), 1);
    }

    #[test]
    fn test_picks_up_added_file_after_miss() {
        let dir = tempdir().unwrap();
        let cached = CachingResolver::new(AssetResolver::new(dir.path()));
        assert!(cached.resolve("excited").is_fallback());

        write_png(dir.path(), "excited", 80, 80);
        assert!(!cached.resolve("excited").is_fallback());
    }

    #[test]
    fn test_picks_up_replaced_and_removed_files() {
        let dir = tempdir().unwrap();
        let path = write_png(dir.path(), "bored", 80, 80);
        let cached = CachingResolver::new(AssetResolver::new(dir.path()));
        assert!(!cached.resolve("bored").is_fallback());

        write_corrupt(dir.path(), "bored");
        assert!(cached.resolve("bored").is_fallback());

        fs::remove_file(&path).unwrap();
        assert!(cached.resolve("bored").is_fallback());

        write_png(dir.path(), "bored", 80, 80);
        assert!(!cached.resolve("bored").is_fallback());
    }

    #[test]
    fn test_invalid_identifiers_are_not_cached() {
        let dir = tempdir().unwrap();
        let cached = CachingResolver::new(AssetResolver::new(dir.path()));
        assert!(cached.resolve("../happy").is_fallback());
        assert!(cached.is_empty());
    }

    #[test]
    fn test_clear() {
        let dir = tempdir().unwrap();
        let cached = CachingResolver::new(AssetResolver::new(dir.path()));
        cached.resolve("sleep");
        cached.resolve("sleep2");
        assert_eq!(cached.len(), 2);
        cached.clear();
        assert!(cached.is_empty());
    }

    #[test]
    fn test_concurrent_calls_agree() {
        let dir = tempdir().unwrap();
        write_png(dir.path(), "friend", 120, 120);

        let cached = Arc::new(CachingResolver::new(AssetResolver::new(dir.path())));
        let expected = AssetResolver::new(dir.path()).resolve("friend");

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cached = Arc::clone(&cached);
                thread::spawn(move || cached.resolve("friend"))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
