//! Navigation chrome derived from the entry list: sidebar sections, pager, and
//! breadcrumbs. Everything here reads the entry list and never changes it.

use serde::Serialize;

use crate::entry::{Category, DocEntry};

/// A link to one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub title: String,
    pub url: String,
    pub slug: String,
}

impl From<&DocEntry> for NavLink {
    fn from(entry: &DocEntry) -> Self {
        Self {
            title: entry.title.clone(),
            url: entry.url.clone(),
            slug: entry.slug.clone(),
        }
    }
}

/// A sidebar section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavSection {
    pub category: Category,
    pub title: String,
    pub items: Vec<NavLink>,
}

/// Previous and next pages in sidebar order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pager {
    pub prev: Option<NavLink>,
    pub next: Option<NavLink>,
}

/// One breadcrumb; the last one has no link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    pub title: String,
    pub url: Option<String>,
}

/// Group entries into sidebar sections in category order.
///
/// Entries keep their relative order inside a section; empty sections are left out.
pub fn navigation(entries: &[DocEntry]) -> Vec<NavSection> {
    Category::ALL
        .iter()
        .filter_map(|&category| {
            let items: Vec<NavLink> = entries
                .iter()
                .filter(|e| e.category == category)
                .map(NavLink::from)
                .collect();

            (!items.is_empty()).then(|| NavSection {
                category,
                title: category.label().to_string(),
                items,
            })
        })
        .collect()
}

/// Neighbours of `slug` when the sidebar is read top to bottom.
pub fn pager(sections: &[NavSection], slug: &str) -> Pager {
    let flat: Vec<&NavLink> = sections.iter().flat_map(|s| s.items.iter()).collect();

    let Some(pos) = flat.iter().position(|l| l.slug == slug) else {
        return Pager::default();
    };

    Pager {
        prev: pos.checked_sub(1).map(|i| flat[i].clone()),
        next: flat.get(pos + 1).map(|l| (*l).clone()),
    }
}

/// `Docs / <section> / <page>` trail for an entry.
pub fn breadcrumbs(entry: &DocEntry) -> Vec<Crumb> {
    let mut crumbs = vec![Crumb {
        title: "Docs".to_string(),
        url: Some("/docs/".to_string()),
    }];

    if !entry.is_root() {
        crumbs.push(Crumb {
            title: entry.category.label().to_string(),
            url: None,
        });
    }

    crumbs.push(Crumb {
        title: entry.title.clone(),
        url: None,
    });

    crumbs
}
