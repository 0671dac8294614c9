//! Navigation trees for API reference sites.
//!
//! An [`ApiIndex`] lists the classes, interfaces, traits and functions of one
//! product. [`NavTreeBuilder`] turns it into a [`NavTree`] with four fixed
//! category roots, and [`NavTreeCache`] keeps one builder per product.

pub mod cache;
pub mod command;
pub mod config;
pub mod context;
pub mod entity;
pub mod error;
pub mod nav;
pub mod provider;

pub use cache::NavTreeCache;
pub use entity::{ApiIndex, ClassRecord, EntityKind, FunctionRecord, MethodRecord, Product};
pub use error::{Error, Result};
pub use nav::{NavChildren, NavDataNode, NavTree, NavTreeBuilder};
pub use provider::{FileIndexProvider, IndexProvider, StaticIndexProvider};
