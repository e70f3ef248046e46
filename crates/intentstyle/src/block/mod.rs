//! Block-state adapter for the pipeline editor.
//!
//! - [`normalize`] turns captured block outputs into renderable messages.
//! - [`migrate_collapse_state`] moves persisted collapse flags when a
//!   pipeline namespace changes.
//! - [`redirect_to_first_pipeline`] sends the host router to the first
//!   pipeline.
//!
//! Storage and routing are reached through the [`KeyValueStore`] and
//! [`Router`] traits so hosts can plug in their own.

mod migrate;
mod model;
mod navigation;
mod normalize;
mod store;

pub use migrate::{migrate_collapse_state, CollapseFlag, MigrationFailure, MigrationReport};
pub use model::{Block, Message, OutputRecord};
pub use navigation::{pipeline_path, redirect_to_first_pipeline, Query, Route, Router};
pub use normalize::{normalize, NormalizeError, Normalized};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
