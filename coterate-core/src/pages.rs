use serde::{Deserialize, Serialize};

/// A named collection of design cards plus an independently saved viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub name: String,
    #[serde(rename = "baseImage", skip_serializing_if = "Option::is_none")]
    pub base_image: Option<String>,
}

/// Ordered page collection with at most one current page.
///
/// Invariant: `current` is either `None` (no pages remain) or the id of a
/// member of `pages`.
#[derive(Debug, Clone, Default)]
pub struct PageStore {
    pages: Vec<Page>,
    current: Option<String>,
    next_id: u64,
}

impl PageStore {
    /// Create the store with the single default page active, matching
    /// application startup.
    pub fn new() -> Self {
        let mut store = Self::default();
        store.add_page("Default Page");
        store
    }

    /// Create a completely empty store (no pages, no current page).
    pub fn empty() -> Self {
        Self::default()
    }

    fn generate_id(&mut self) -> String {
        self.next_id += 1;
        format!("page-{}", self.next_id)
    }

    /// Append a new page and make it current. Returns the created page.
    pub fn add_page(&mut self, name: &str) -> &Page {
        let id = self.generate_id();
        self.pages.push(Page {
            id: id.clone(),
            name: name.to_string(),
            base_image: None,
        });
        self.current = Some(id);
        self.pages.last().expect("page was just pushed")
    }

    /// Rename a page. A name that is empty after trimming is ignored.
    pub fn rename_page(&mut self, id: &str, new_name: &str) {
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            return;
        }
        if let Some(page) = self.pages.iter_mut().find(|p| p.id == id) {
            page.name = trimmed.to_string();
        }
    }

    /// Remove a page. If it was current, the first remaining page becomes
    /// current, or `None` when no pages remain.
    pub fn delete_page(&mut self, id: &str) {
        self.pages.retain(|p| p.id != id);
        if self.current.as_deref() == Some(id) {
            self.current = self.pages.first().map(|p| p.id.clone());
        }
    }

    /// Switch the current page. Returns `false` for an unknown id, leaving
    /// the current page unchanged. Cards are not touched; the registry is
    /// filtered reactively by page id.
    pub fn set_current_page(&mut self, id: &str) -> bool {
        if self.pages.iter().any(|p| p.id == id) {
            self.current = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub fn current_page(&self) -> Option<&Page> {
        let id = self.current.as_deref()?;
        self.pages.iter().find(|p| p.id == id)
    }

    pub fn current_page_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }
}
