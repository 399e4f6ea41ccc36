//! Variant showcase components for the Sync UI docs.
//!
//! Every component renders one of several visual treatments selected by its
//! `variant` prop. Unknown variants fall back to the component's default
//! rendering. Components are stateless functions from props and rendered
//! children to HTML; per-instance UI state (open panel, carousel position)
//! lives in data attributes picked up by the browser runtime.
//!
//! The [`ComponentRegistry`] maps MDX tag names to components and is built
//! once at startup.

#[macro_use]
mod variant;

pub mod props;
pub mod registry;
pub mod theme;
pub mod ui;

pub use props::{escape, Props};
pub use registry::{Component, ComponentRegistry, RegistryError};
pub use theme::{ThemeMode, UiState};
