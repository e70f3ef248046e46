//! Namespace migration of per-block collapse flags.
//!
//! Collapse flags are keyed `"{namespace}/{block}/{flag}"`. When a pipeline
//! is renamed, each flag that exists under the old namespace moves to the
//! new one. Absent flags are left absent; no placeholder is written.

use std::fmt;

use serde::Serialize;

use super::model::Block;
use super::store::{KeyValueStore, StoreError};

/// A persisted per-block collapse flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CollapseFlag {
    /// The code editor is collapsed.
    Code,
    /// The output area is collapsed.
    Output,
}

impl CollapseFlag {
    pub const ALL: [CollapseFlag; 2] = [CollapseFlag::Code, CollapseFlag::Output];

    pub fn as_str(self) -> &'static str {
        match self {
            CollapseFlag::Code => "codeCollapsed",
            CollapseFlag::Output => "outputCollapsed",
        }
    }

    /// The store key for this flag of `block` under `namespace`.
    pub fn key(self, namespace: &str, block: &str) -> String {
        format!("{namespace}/{block}/{}", self.as_str())
    }
}

impl fmt::Display for CollapseFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flag that could not be moved.
#[derive(Debug)]
pub struct MigrationFailure {
    pub block: String,
    pub flag: CollapseFlag,
    pub error: StoreError,
}

/// Outcome of a namespace migration.
#[derive(Debug, Default)]
pub struct MigrationReport {
    /// Flags moved, as `(block, flag, value)`.
    pub moved: Vec<(String, CollapseFlag, bool)>,
    /// Flags that had no value under the old namespace.
    pub absent: usize,
    pub failures: Vec<MigrationFailure>,
}

impl MigrationReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Moves every block's collapse flags from `old_namespace` to `new_namespace`.
///
/// A flag is read and deleted under the old key, then written under the new
/// key. If the write fails, the old value is restored and the failure is
/// recorded; migration continues with the remaining flags. Migrating into
/// the same namespace is a no-op.
///
/// # Example
///
/// ```rust
/// use intentstyle::block::{migrate_collapse_state, Block, KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// store.set("old/b1/codeCollapsed", true).unwrap();
///
/// let report = migrate_collapse_state(&mut store, &[Block::new("b1")], "old", "new");
/// assert!(report.is_clean());
/// assert_eq!(store.get("new/b1/codeCollapsed").unwrap(), Some(true));
/// assert_eq!(store.get("old/b1/codeCollapsed").unwrap(), None);
/// ```
pub fn migrate_collapse_state<S: KeyValueStore + ?Sized>(
    store: &mut S,
    blocks: &[Block],
    old_namespace: &str,
    new_namespace: &str,
) -> MigrationReport {
    let mut report = MigrationReport::default();
    if old_namespace == new_namespace {
        return report;
    }

    for block in blocks {
        for flag in CollapseFlag::ALL {
            match move_flag(store, &block.uuid, flag, old_namespace, new_namespace) {
                Ok(Some(value)) => {
                    tracing::debug!(block = %block.uuid, %flag, value, "migrated collapse flag");
                    report.moved.push((block.uuid.clone(), flag, value));
                }
                Ok(None) => report.absent += 1,
                Err(error) => {
                    tracing::warn!(block = %block.uuid, %flag, %error, "collapse flag not migrated");
                    report.failures.push(MigrationFailure {
                        block: block.uuid.clone(),
                        flag,
                        error,
                    });
                }
            }
        }
    }

    report
}

fn move_flag<S: KeyValueStore + ?Sized>(
    store: &mut S,
    block: &str,
    flag: CollapseFlag,
    old_namespace: &str,
    new_namespace: &str,
) -> Result<Option<bool>, StoreError> {
    store.rename(&flag.key(old_namespace, block), &flag.key(new_namespace, block))
}
