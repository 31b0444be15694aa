//! One-shot input cleansing: label interning, duplicate removal, and
//! inclusion pruning.

use std::collections::{BTreeMap, BTreeSet};

use scm_core::VertexId;

use crate::complex::FacetSet;
use crate::ids::make_vertex;

/// Bidirectional map between external vertex labels and contiguous ids.
///
/// Ids are handed out in first-appearance order, so the store's dense-id
/// assumption holds for any input read through this map. The map is owned by
/// the I/O layer; the incidence store never sees labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelMap {
    label_to_id: BTreeMap<String, VertexId>,
    id_to_label: Vec<String>,
}

impl LabelMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `label`, interning it on first appearance.
    pub fn intern(&mut self, label: &str) -> VertexId {
        if let Some(&id) = self.label_to_id.get(label) {
            return id;
        }
        let id = make_vertex(self.id_to_label.len());
        self.label_to_id.insert(label.to_string(), id);
        self.id_to_label.push(label.to_string());
        id
    }

    /// Returns the external label of a vertex, if one was interned.
    pub fn label(&self, vertex: VertexId) -> Option<&str> {
        self.id_to_label
            .get(vertex.as_raw() as usize)
            .map(String::as_str)
    }

    /// Returns the number of interned labels.
    pub fn len(&self) -> usize {
        self.id_to_label.len()
    }

    /// Returns whether no label has been interned.
    pub fn is_empty(&self) -> bool {
        self.id_to_label.is_empty()
    }
}

/// Outcome of sanitizing a raw facet list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedFacets {
    /// Surviving maximal facets, ordered by size then content.
    pub facets: Vec<FacetSet>,
    /// Cardinality of the largest surviving facet; seeds `L_max` defaults.
    pub largest_facet: usize,
}

/// Reduces a raw facet list to its maximal facets.
///
/// Facets are grouped by cardinality; within a group identical vertex sets
/// collapse to one, and every facet that is a subset of some larger facet is
/// dropped. Empty facets are discarded. The reduction is idempotent.
pub fn sanitize_facets(raw: Vec<FacetSet>) -> SanitizedFacets {
    let mut by_size: BTreeMap<usize, BTreeSet<FacetSet>> = BTreeMap::new();
    for facet in raw {
        if facet.is_empty() {
            continue;
        }
        by_size.entry(facet.len()).or_default().insert(facet);
    }

    let sizes: Vec<usize> = by_size.keys().copied().collect();
    for &ref_size in sizes.iter().rev() {
        let references: Vec<FacetSet> = by_size
            .get(&ref_size)
            .map(|group| group.iter().cloned().collect())
            .unwrap_or_default();
        for reference in &references {
            for &smaller in sizes.iter().take_while(|&&size| size < ref_size) {
                if let Some(group) = by_size.get_mut(&smaller) {
                    group.retain(|facet| !facet.is_subset(reference));
                }
            }
        }
    }

    let mut facets = Vec::new();
    let mut largest_facet = 0;
    for (size, group) in by_size {
        if group.is_empty() {
            continue;
        }
        largest_facet = largest_facet.max(size);
        facets.extend(group);
    }
    SanitizedFacets {
        facets,
        largest_facet,
    }
}
