//! Registry of boundary families with an explicit priority order.
//!
//! Storage is a name-indexed map; every query that returns "the" matching
//! family walks the separate priority list, so results never depend on
//! hash map iteration order.

use tracing::{debug, trace, warn};

use crate::boundary::{self, Boundary};
use crate::config::CatalogueConfig;
use crate::defaults;
use crate::errors::ConfigError;
use crate::family::Family;
use crate::types::{FamilyName, FxHashMap};

use super::report::{Classification, FamilyMatch, MatchReport};

/// Catalogue mapping family names to families.
///
/// Owned by the caller and passed explicitly to matching code. Queries take
/// `&self`; `register`/`unregister` take `&mut self`, so sharing a registry
/// between a writer and readers needs external synchronization
/// (e.g. `RwLock<FamilyRegistry>`).
#[derive(Debug, Clone)]
pub struct FamilyRegistry {
    families: FxHashMap<FamilyName, Family>,
    priority: Vec<FamilyName>,
}

impl FamilyRegistry {
    /// Create a registry pre-populated with the default families
    /// (Javadoc, CBlock, SingleLine, Doxygen, Python, Hash), in that priority.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for family in defaults::default_families() {
            registry.insert(family.clone());
        }
        registry
    }

    /// Create a registry with no families.
    pub fn empty() -> Self {
        Self {
            families: FxHashMap::default(),
            priority: Vec::new(),
        }
    }

    /// Assemble a registry from configuration: defaults (unless excluded),
    /// minus disabled families, plus custom families (replacing defaults of
    /// the same name), then the configured priority.
    pub fn from_config(config: &CatalogueConfig) -> Result<Self, ConfigError> {
        let mut registry = if config.registry.effective_include_defaults() {
            Self::new()
        } else {
            Self::empty()
        };

        for name in &config.registry.disabled {
            if registry.unregister(name).is_none() {
                warn!(family = %name, "disabled family is not registered");
            }
        }

        for family in &config.families {
            registry.insert(family.build()?);
        }

        if !config.registry.priority.is_empty() {
            registry.set_priority(&config.registry.priority);
        }

        debug!(families = registry.len(), "family registry built from config");
        Ok(registry)
    }

    /// Direct lookup by name.
    pub fn family(&self, name: &str) -> Option<&Family> {
        self.families.get(name)
    }

    /// Full enumeration. Iteration order of the map is unspecified;
    /// use [`FamilyRegistry::iter`] for priority order.
    pub fn all(&self) -> &FxHashMap<FamilyName, Family> {
        &self.families
    }

    /// Families in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &Family> + '_ {
        self.priority.iter().filter_map(|name| self.families.get(name))
    }

    /// Family names, highest priority first.
    pub fn priority(&self) -> &[FamilyName] {
        &self.priority
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.families.contains_key(name)
    }

    /// Insert or replace a family wholesale. Last write wins.
    ///
    /// A new name is appended at the lowest priority; replacing an existing
    /// name keeps its priority slot.
    pub fn register(&mut self, name: impl Into<FamilyName>, boundaries: Vec<Boundary>) {
        self.insert(Family::new(name, boundaries));
    }

    /// Insert or replace an already-built family. Same semantics as `register`.
    pub fn insert(&mut self, family: Family) {
        let name = family.name().clone();
        debug!(family = %name, boundaries = family.len(), "registering boundary family");
        if self.families.insert(name.clone(), family).is_none() {
            self.priority.push(name);
        }
    }

    /// Remove a family. Removing an unknown name is a no-op.
    pub fn unregister(&mut self, name: &str) -> Option<Family> {
        let removed = self.families.remove(name);
        if removed.is_some() {
            self.priority.retain(|n| n != name);
            debug!(family = name, "unregistered boundary family");
        }
        removed
    }

    /// Move the named families to the front, in the given order.
    /// Families not named keep their relative order behind them.
    pub fn set_priority<S: AsRef<str>>(&mut self, names: &[S]) {
        let mut front: Vec<FamilyName> = Vec::with_capacity(self.priority.len());
        for name in names {
            let name = name.as_ref();
            match self.families.get_key_value(name) {
                Some((key, _)) if !front.contains(key) => front.push(key.clone()),
                Some(_) => warn!(family = name, "family listed twice in priority"),
                None => warn!(family = name, "ignoring unknown family in priority"),
            }
        }
        let rest: Vec<FamilyName> = self
            .priority
            .iter()
            .filter(|n| !front.contains(n))
            .cloned()
            .collect();
        front.extend(rest);
        debug!(priority = ?front, "family priority updated");
        self.priority = front;
    }

    /// The highest-priority family with any boundary matching the line.
    pub fn get_matching_family(&self, line: &str) -> Option<&Family> {
        let found = self.iter().find(|family| family.matches(line));
        trace!(line, family = found.map(|f| f.name().as_str()), "matching family lookup");
        found
    }

    /// Every family that matches the line, in priority order.
    pub fn get_all_matching_families(&self, line: &str) -> Vec<&Family> {
        self.iter().filter(|family| family.matches(line)).collect()
    }

    /// True iff the named family exists and matches the line.
    pub fn matches_family(&self, line: &str, name: &str) -> bool {
        self.family(name).is_some_and(|family| family.matches(line))
    }

    /// The first matching boundary of the named family.
    pub fn find_first_matching_boundary(&self, line: &str, name: &str) -> Option<&Boundary> {
        self.family(name)
            .and_then(|family| boundary::find_first_match(line, family.boundaries()))
    }

    /// The winning family together with its winning boundary.
    pub fn classify(&self, line: &str) -> Option<Classification<'_>> {
        self.iter().find_map(|family| {
            family
                .find_first_match(line)
                .map(|boundary| Classification { family, boundary })
        })
    }

    /// A full diagnostic picture of how the line matches the catalogue.
    pub fn explain(&self, line: &str) -> MatchReport {
        let matches: Vec<FamilyMatch> = self
            .iter()
            .filter_map(|family| {
                let boundaries: Vec<_> = family
                    .find_all_matches(line)
                    .into_iter()
                    .map(|b| b.name().clone())
                    .collect();
                (!boundaries.is_empty()).then(|| FamilyMatch {
                    family: family.name().clone(),
                    boundaries,
                })
            })
            .collect();

        if matches.len() > 1 {
            debug!(
                line,
                families = matches.len(),
                "line matches more than one boundary family"
            );
        }

        MatchReport {
            line: line.to_string(),
            winner: matches.first().map(|m| m.family.clone()),
            boundary: matches.first().and_then(|m| m.boundaries.first().cloned()),
            matches,
        }
    }
}

impl Default for FamilyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
