//! Cache of maximum cross sections

use std::collections::HashMap;
use std::sync::RwLock;

/// Maximum cross sections, keyed by the interaction code and the
/// probe energy. Shared between workers behind an `Arc`.
#[derive(Debug, Default)]
pub struct MaxXSecCache {
    entries: RwLock<HashMap<String, Vec<(f64, f64)>>>,
}

impl MaxXSecCache {
    pub fn new() -> Self {
        Default::default()
    }

    /// Energies closer together than this share a cached maximum
    fn tolerance(energy: f64) -> f64 {
        (0.05 * energy).min(0.25)
    }

    /// Looks up the maximum cross section cached for the interaction
    /// `key` at a probe energy close to `energy`.
    pub fn find(&self, key: &str, energy: f64) -> Option<f64> {
        let entries = self.entries.read().ok()?;
        let tol = Self::tolerance(energy);
        entries.get(key)?
            .iter()
            .find(|(e, _)| (e - energy).abs() < tol)
            .map(|(_, max)| *max)
    }

    pub fn insert(&self, key: &str, energy: f64, max_xsec: f64) {
        if let Ok(mut entries) = self.entries.write() {
            entries.entry(key.to_owned())
                .or_insert_with(Vec::new)
                .push((energy, max_xsec));
        }
    }

    /// Number of cached values
    pub fn len(&self) -> usize {
        self.entries.read()
            .map(|e| e.values().map(|v| v.len()).sum())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
