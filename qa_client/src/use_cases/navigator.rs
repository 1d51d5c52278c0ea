use std::fmt;
use std::sync::OnceLock;

use crate::domain::navigation::{self, Loading, RouteParams};
use crate::domain::{Page, Resolution};

// Lazily built value: the factory runs on first access only and the result is reused.
pub struct Deferred<T> {
    cell: OnceLock<T>,
    factory: Box<dyn Fn() -> T + Send + Sync>,
}

impl<T> Deferred<T> {
    pub fn new(factory: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self {
            cell: OnceLock::new(),
            factory: Box::new(factory),
        }
    }

    pub fn get(&self) -> &T {
        self.cell.get_or_init(|| (self.factory)())
    }

    pub fn get_mut(&mut self) -> &mut T {
        self.get();
        // Initialized by the call above.
        match self.cell.get_mut() {
            Some(value) => value,
            None => unreachable!("deferred value initialized above"),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn loaded(&self) -> Option<&T> {
        self.cell.get()
    }
}

impl<T> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

// Client-side navigation state. `V` is the page behind the deferred `/view-results` route.
pub struct Navigator<V> {
    current: Option<Resolution>,
    view_results: Deferred<V>,
}

impl<V> Navigator<V> {
    pub fn new(view_results: impl Fn() -> V + Send + Sync + 'static) -> Self {
        Self {
            current: None,
            view_results: Deferred::new(view_results),
        }
    }

    // Resolve `path`, make it current, and load a deferred page on its first visit.
    pub fn navigate(&mut self, path: &str) -> &Resolution {
        let resolution = navigation::resolve(path);
        match &resolution {
            Resolution::Matched(matched) => {
                if matched.route.loading == Loading::Deferred && !self.view_results.is_loaded() {
                    tracing::debug!(route = matched.route.name, "loading deferred page.");
                    self.view_results.get();
                }
                tracing::debug!(route = matched.route.name, path = %matched.path, "navigated.");
            }
            Resolution::NotFound { path } => {
                tracing::warn!(%path, "no route matches path.");
            }
        }

        self.current.insert(resolution)
    }

    pub fn current(&self) -> Option<&Resolution> {
        self.current.as_ref()
    }

    pub fn current_page(&self) -> Option<Page> {
        self.current.as_ref().and_then(Resolution::page)
    }

    pub fn current_params(&self) -> Option<&RouteParams> {
        self.current.as_ref().and_then(Resolution::params)
    }

    // The deferred page, if it has been navigated to at least once.
    pub fn view_results(&self) -> Option<&V> {
        self.view_results.loaded()
    }

    pub fn view_results_mut(&mut self) -> Option<&mut V> {
        if self.view_results.is_loaded() {
            Some(self.view_results.get_mut())
        } else {
            None
        }
    }
}
