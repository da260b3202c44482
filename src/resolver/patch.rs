// Thu Oct 15 2026 - Alex

use crate::classes::{ClassDefinition, MethodDefinition};
use crate::pattern::{ScanResult, Window};
use crate::signature::Signature;
use indexmap::map::Entry;
use indexmap::IndexMap;

/// Where a signature landed: owning class, matched method, and the scan
/// outcome the patch stage injects relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchData<'a> {
    pub class: &'a ClassDefinition,
    pub method: &'a MethodDefinition,
    pub scan: ScanResult,
}

impl<'a> PatchData<'a> {
    pub const fn new(class: &'a ClassDefinition, method: &'a MethodDefinition, scan: ScanResult) -> Self {
        Self { class, method, scan }
    }

    pub const fn window(&self) -> Option<Window> {
        self.scan.window()
    }
}

/// Result of one resolution run, keyed by signature name in discovery order.
/// A key, once set, is never overwritten.
#[derive(Debug, Clone, Default)]
pub struct MethodMap<'a> {
    entries: IndexMap<String, PatchData<'a>>,
}

impl<'a> MethodMap<'a> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Returns false and leaves the map unchanged if `name` is already present.
    pub(crate) fn insert(&mut self, name: &str, data: PatchData<'a>) -> bool {
        match self.entries.entry(name.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(data);
                true
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&PatchData<'a>> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PatchData<'a>)> {
        self.entries.iter().map(|(name, data)| (name.as_str(), data))
    }

    /// Names of `signatures` with no entry, in signature order.
    pub fn unresolved<'s>(&self, signatures: &'s [Signature]) -> Vec<&'s str> {
        signatures
            .iter()
            .map(Signature::name)
            .filter(|name| !self.contains(name))
            .collect()
    }
}
