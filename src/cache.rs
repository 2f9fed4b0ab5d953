//! Caller-owned memoization of derived layouts and scales

use crate::circle::{derive_scale, Mode, ModeScale};
use crate::harmonica::{derive_layout, Layout};
use crate::theory::{Note, PitchClass};
use std::collections::HashMap;
use std::sync::Arc;

/// Memoizes [`derive_layout`] by key and [`derive_scale`] by (root, mode)
///
/// Purely an optimization: cached values equal fresh derivations.
#[derive(Debug, Default)]
pub struct DerivationCache {
    layouts: HashMap<Note, Arc<Layout>>,
    scales: HashMap<(PitchClass, Mode), Arc<ModeScale>>,
}

impl DerivationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout for `key`, derived on first use
    pub fn layout(&mut self, key: &Note) -> Arc<Layout> {
        Arc::clone(
            self.layouts
                .entry(*key)
                .or_insert_with(|| Arc::new(derive_layout(key))),
        )
    }

    /// Scale for (`root`, `mode`), derived on first use
    pub fn scale(&mut self, root: &PitchClass, mode: Mode) -> Arc<ModeScale> {
        Arc::clone(
            self.scales
                .entry((*root, mode))
                .or_insert_with(|| Arc::new(derive_scale(root, mode))),
        )
    }

    /// Number of cached entries (layouts, scales)
    pub fn counts(&self) -> (usize, usize) {
        (self.layouts.len(), self.scales.len())
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty() && self.scales.is_empty()
    }

    pub fn clear(&mut self) {
        self.layouts.clear();
        self.scales.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_is_memoized() {
        let mut cache = DerivationCache::new();
        let key: Note = "C4".parse().unwrap();

        let first = cache.layout(&key);
        let second = cache.layout(&key);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*first, derive_layout(&key));
        assert_eq!(cache.counts(), (1, 0));
    }

    #[test]
    fn test_scale_is_memoized_per_mode() {
        let mut cache = DerivationCache::new();
        let root: PitchClass = "G".parse().unwrap();

        let ionian = cache.scale(&root, Mode::Ionian);
        let dorian = cache.scale(&root, Mode::Dorian);
        assert!(Arc::ptr_eq(&ionian, &cache.scale(&root, Mode::Ionian)));
        assert_ne!(ionian.tonic(), dorian.tonic());
        assert_eq!(cache.counts(), (0, 2));
    }

    #[test]
    fn test_clear() {
        let mut cache = DerivationCache::new();
        cache.layout(&"D4".parse().unwrap());
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
    }
}
