//! Documentation content for syncdocs.
//!
//! Resolves the MDX tree under the docs root into [`DocEntry`] records and
//! compiled [`DocContent`], derives the navigation chrome from the entry list,
//! and implements the command-palette search over it.

pub mod entry;
pub mod navigation;
pub mod palette;
pub mod resolver;
pub mod search;

pub use entry::{Category, DocContent, DocEntry};
pub use navigation::{breadcrumbs, navigation, pager, Crumb, NavLink, NavSection, Pager};
pub use palette::{PaletteAction, PaletteEvent, PaletteState, QueryTicket, SearchPalette, Viewport};
pub use resolver::{ContentResolver, ResolveError};
pub use search::{group, SearchCategory, SearchConfig, SearchIndex, SearchItem, DENYLIST};
