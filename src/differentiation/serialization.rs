/*!
 * Serialization of a [WengertList], enabled with the `serde` feature.
 *
 * Each entry is written as its parents' indexes alongside the local partial derivative
 * with respect to each, for example in toml
 *
 * ```toml
 * [[operations]]
 * parents = []
 * derivatives = []
 *
 * [[operations]]
 * parents = [0, 0]
 * derivatives = [3.0, 3.0]
 * ```
 *
 * Deserializing checks that every entry only refers to entries before it, so a decoded
 * list is always acyclic.
 */

use crate::differentiation::{Edge, Index, Operation, WengertList};

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::cell::RefCell;

#[derive(Serialize, Deserialize)]
struct Entry {
    parents: Vec<Index>,
    derivatives: Vec<f64>,
}

#[derive(Serialize, Deserialize)]
struct Entries {
    operations: Vec<Entry>,
}

impl From<&Operation> for Entry {
    fn from(operation: &Operation) -> Entry {
        let edges = operation.edges();
        Entry {
            parents: edges.iter().map(|edge| edge.parent).collect(),
            derivatives: edges.iter().map(|edge| edge.derivative).collect(),
        }
    }
}

impl Serialize for WengertList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let operations = self.operations.borrow();
        Entries {
            operations: operations.iter().map(Entry::from).collect(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WengertList {
    fn deserialize<D>(deserializer: D) -> Result<WengertList, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Entries::deserialize(deserializer)?;
        let mut operations = Vec::with_capacity(entries.operations.len());
        for (index, entry) in entries.operations.into_iter().enumerate() {
            if entry.parents.len() != entry.derivatives.len() {
                return Err(D::Error::custom(format!(
                    "entry {} has {} parents but {} derivatives",
                    index,
                    entry.parents.len(),
                    entry.derivatives.len()
                )));
            }
            if let Some(parent) = entry.parents.iter().find(|&&parent| parent >= index) {
                return Err(D::Error::custom(format!(
                    "entry {} refers to entry {} which does not come before it",
                    index, parent
                )));
            }
            let edges = entry
                .parents
                .into_iter()
                .zip(entry.derivatives)
                .map(|(parent, derivative)| Edge { parent, derivative })
                .collect();
            operations.push(Operation::from_edges(edges));
        }
        Ok(WengertList {
            operations: RefCell::new(operations),
        })
    }
}
