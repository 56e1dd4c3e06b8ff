//! Sample registry for cogsamples
//!
//! `Registry` maps group names to their validated examples. The process-wide
//! instance is built on first access from the bundled candidate table and
//! never changes afterwards.

use std::collections::HashMap;

use once_cell::sync::OnceCell;

use crate::error::DiscoveryError;

use super::loader::discover_groups;
use super::types::{SampleGroup, TypeDecl};

static REGISTRY: OnceCell<Registry> = OnceCell::new();

/// The process-wide registry of bundled samples.
///
/// The first call scans [`crate::samples::CANDIDATES`]. A failed scan leaves
/// the cell empty and returns the error; it is never half-initialized.
pub fn registry() -> Result<&'static Registry, DiscoveryError> {
    load_once(&REGISTRY, crate::samples::CANDIDATES)
}

fn load_once<'c>(
    cell: &'c OnceCell<Registry>,
    candidates: &[TypeDecl<'_>],
) -> Result<&'c Registry, DiscoveryError> {
    cell.get_or_try_init(|| Registry::load(candidates))
}

/// Sample groups in declaration order, indexed by name.
///
/// # Example
///
/// ```rust
/// use cogsamples::registry::{Handler, MethodDecl, Registry, TypeDecl};
///
/// fn suggest(_key: &str) -> anyhow::Result<()> {
///     Ok(())
/// }
///
/// let methods = [MethodDecl::example("suggest", "Suggest queries", Handler::Credential(suggest))];
/// let candidates = [TypeDecl::group("AutoSuggestSamples", "AutoSuggestSearch", &methods)];
///
/// let registry = Registry::load(&candidates).unwrap();
/// assert_eq!(registry.group_names(), vec!["AutoSuggestSearch"]);
/// assert_eq!(registry.get("AutoSuggestSearch").unwrap().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    groups: Vec<SampleGroup>,

    /// Map from group name to its position in `groups`.
    by_name: HashMap<String, usize>,
}

impl Registry {
    /// Build a registry from a candidate table.
    ///
    /// # Errors
    /// Any [`DiscoveryError`] raised by the loader. Nothing is registered in
    /// that case.
    pub fn load(candidates: &[TypeDecl<'_>]) -> Result<Self, DiscoveryError> {
        let groups = discover_groups(candidates)?;
        let by_name = groups
            .iter()
            .enumerate()
            .map(|(i, group)| (group.name.clone(), i))
            .collect();
        Ok(Self { groups, by_name })
    }

    /// Look up a group by its exact name.
    pub fn get(&self, name: &str) -> Option<&SampleGroup> {
        self.by_name.get(name).map(|&i| &self.groups[i])
    }

    /// Look up a group by its position.
    pub fn group_at(&self, index: usize) -> Option<&SampleGroup> {
        self.groups.get(index)
    }

    /// All groups in declaration order.
    pub fn groups(&self) -> &[SampleGroup] {
        &self.groups
    }

    pub fn group_names(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.name.as_str()).collect()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of examples across all groups.
    pub fn example_count(&self) -> usize {
        self.groups.iter().map(SampleGroup::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
