//! Sign resolution: name validation, on-disk lookup, visibility.
//!
//! ## Components
//! - `name`: validated `SignName` / `ResourceName`
//! - `fs`: filesystem capability (`SignFs`) and its local implementation
//! - `handle`: `SignHandle`, one sign directory and its sub-resources
//! - `catalog`: `SignCatalog`, listing filtered by session state
//! - `resolver`: `AuthorizedSignResolver`, per-request lookup + visibility
//! - `error`: `SignError`

pub mod catalog;
pub mod error;
pub mod fs;
pub mod handle;
pub mod name;
pub mod resolver;

pub use catalog::SignCatalog;
pub use error::SignError;
pub use fs::{ChildEntry, LocalFs, SignFs};
pub use handle::SignHandle;
pub use name::{ResourceName, SignName, ValidationError};
pub use resolver::AuthorizedSignResolver;
