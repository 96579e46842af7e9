//! Per-session state: source, memoized load, and selection.

use std::sync::Arc;

use station_common::{ErrorReport, ProjectId};
use station_ingest::{LoadCache, LoaderConfig, Source};
use tracing::{debug, info};

use crate::pipeline::{render, Dataset, MapRender, ProjectToggle, RenderSettings};
use crate::selection::Selection;

/// State owned by one interactive session.
///
/// Each session has its own load cache and selection; nothing here is
/// shared between sessions.
#[derive(Debug)]
pub struct SessionState {
    source: Source,
    cache: LoadCache,
    settings: RenderSettings,
    selection: Selection,

    /// Set once the user changes the selection. Until then the selection
    /// tracks "every catalog project".
    customized: bool,

    dataset: Option<Arc<Dataset>>,
}

impl SessionState {
    pub fn new(source: Source, loader: LoaderConfig, settings: RenderSettings) -> Self {
        Self {
            source,
            cache: LoadCache::new(loader),
            settings,
            selection: Selection::new(),
            customized: false,
            dataset: None,
        }
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Current dataset, loading the source on first use.
    pub fn dataset(&mut self) -> Arc<Dataset> {
        let outcome = self.cache.get_or_load(&self.source);
        if let Some(dataset) = &self.dataset {
            if dataset.is_from(&outcome) {
                return Arc::clone(dataset);
            }
        }

        let dataset = Arc::new(Dataset::from_outcome(outcome, &self.settings.palette));
        info!(
            source = %self.source.key(),
            projects = dataset.catalog.len(),
            records = dataset.records().len(),
            "Session dataset refreshed"
        );
        if !self.customized {
            self.selection = Selection::all(&dataset.catalog);
        }
        self.dataset = Some(Arc::clone(&dataset));
        dataset
    }

    /// Re-read the source, bypassing the memoized load.
    pub fn reload(&mut self) -> Arc<Dataset> {
        self.cache.invalidate(&self.source);
        self.dataset()
    }

    pub fn select_all(&mut self) {
        let dataset = self.dataset();
        self.selection.select_all(&dataset.catalog);
        self.customized = true;
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.customized = true;
    }

    /// Returns whether the project was newly added.
    pub fn add_project(&mut self, id: ProjectId) -> bool {
        self.dataset();
        self.customized = true;
        self.selection.add(id)
    }

    /// Returns whether the project was selected before.
    pub fn remove_project(&mut self, id: &ProjectId) -> bool {
        self.dataset();
        self.customized = true;
        self.selection.remove(id)
    }

    /// Returns whether the project is now selected.
    pub fn toggle_project(&mut self, id: ProjectId) -> bool {
        self.dataset();
        self.customized = true;
        self.selection.toggle(id)
    }

    pub fn set_selection<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = ProjectId>,
    {
        self.dataset();
        self.customized = true;
        self.selection.set(ids);
    }

    /// Catalog toggles for the current selection, with any load errors.
    pub fn projects(&mut self) -> (Vec<ProjectToggle>, Vec<ErrorReport>) {
        let dataset = self.dataset();
        (dataset.toggles(&self.selection), dataset.outcome.reports())
    }

    /// Render the current selection. `legend` overrides the configured default.
    pub fn render(&mut self, legend: Option<bool>) -> MapRender {
        let legend = legend.unwrap_or(self.settings.legend);
        let dataset = self.dataset();

        let out = render(&dataset, &self.selection, &self.settings, legend);
        debug!(
            layers = out.layers.len(),
            points = out.point_count(),
            cache_hits = self.cache.stats().hits,
            "Session render complete"
        );
        out
    }
}
