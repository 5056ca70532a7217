//! In-memory editor used by tests and the `test-support` feature.

use camino::Utf8PathBuf;

use super::host::{EditorHost, HostError, OpenFile, Region, ViewId, WindowId};

#[derive(Debug, Clone)]
struct FakeView {
    id: ViewId,
    path: Option<Utf8PathBuf>,
    regions: Option<Vec<Region>>,
}

#[derive(Debug, Clone)]
struct FakeWindow {
    id: WindowId,
    views: Vec<FakeView>,
    active_view: Option<ViewId>,
    folders: Vec<Utf8PathBuf>,
}

/// Scriptable editor host.
///
/// Opening a window or a view focuses it, mirroring what a user sees when
/// they open a file.
#[derive(Debug, Clone, Default)]
pub struct FakeHost {
    windows: Vec<FakeWindow>,
    active_window: Option<WindowId>,
    next_id: u64,
}

impl FakeHost {
    /// Creates a host with no windows.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens and focuses a new empty window.
    pub fn open_window(&mut self) -> WindowId {
        let id = WindowId(self.allocate());
        self.windows.push(FakeWindow {
            id,
            views: Vec::new(),
            active_view: None,
            folders: Vec::new(),
        });
        self.active_window = Some(id);
        id
    }

    /// Opens a file-backed view in `window` and focuses it.
    ///
    /// `regions` of `None` models a view whose caret cannot be resolved.
    ///
    /// # Panics
    ///
    /// Panics if `window` was not opened on this host.
    pub fn open(
        &mut self,
        window: WindowId,
        path: impl Into<Utf8PathBuf>,
        regions: Option<Vec<Region>>,
    ) -> ViewId {
        self.push_view(window, Some(path.into()), regions)
    }

    /// Opens an unsaved scratch view in `window` and focuses it.
    ///
    /// # Panics
    ///
    /// Panics if `window` was not opened on this host.
    pub fn open_scratch(&mut self, window: WindowId) -> ViewId {
        self.push_view(window, None, Some(vec![Region::caret_at(0, 0)]))
    }

    /// Gives `window` focus.
    pub fn focus_window(&mut self, window: WindowId) {
        self.active_window = Some(window);
    }

    /// Focuses `view` inside `window`.
    ///
    /// # Panics
    ///
    /// Panics if `window` was not opened on this host.
    pub fn focus_view(&mut self, window: WindowId, view: ViewId) {
        self.window_mut(window).active_view = Some(view);
    }

    /// Adds a project folder to `window`.
    ///
    /// # Panics
    ///
    /// Panics if `window` was not opened on this host.
    pub fn add_folder(&mut self, window: WindowId, folder: impl Into<Utf8PathBuf>) {
        self.window_mut(window).folders.push(folder.into());
    }

    fn push_view(
        &mut self,
        window: WindowId,
        path: Option<Utf8PathBuf>,
        regions: Option<Vec<Region>>,
    ) -> ViewId {
        let id = ViewId(self.allocate());
        let target = self.window_mut(window);
        target.views.push(FakeView { id, path, regions });
        target.active_view = Some(id);
        id
    }

    fn allocate(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn window(&self, id: WindowId) -> Option<&FakeWindow> {
        self.windows.iter().find(|window| window.id == id)
    }

    fn window_mut(&mut self, id: WindowId) -> &mut FakeWindow {
        match self.windows.iter_mut().find(|window| window.id == id) {
            Some(window) => window,
            None => panic!("{id} is not open"),
        }
    }
}

impl EditorHost for FakeHost {
    fn list_windows(&self) -> Vec<WindowId> {
        self.windows.iter().map(|window| window.id).collect()
    }

    fn active_window(&self) -> Option<WindowId> {
        self.active_window
    }

    fn active_view(&self, window: WindowId) -> Option<ViewId> {
        self.window(window).and_then(|window| window.active_view)
    }

    fn open_files_of(&self, window: WindowId) -> Vec<OpenFile> {
        self.window(window)
            .map(|window| {
                window
                    .views
                    .iter()
                    .filter_map(|view| {
                        view.path
                            .as_ref()
                            .map(|path| OpenFile::new(view.id, path.clone()))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn selection_of(&self, view: ViewId) -> Result<Vec<Region>, HostError> {
        self.windows
            .iter()
            .flat_map(|window| window.views.iter())
            .find(|candidate| candidate.id == view)
            .and_then(|candidate| candidate.regions.clone())
            .ok_or(HostError::UnresolvableView { view })
    }

    fn project_folders_of(&self, window: WindowId) -> Vec<Utf8PathBuf> {
        self.window(window)
            .map(|window| window.folders.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_a_view_focuses_it() {
        let mut host = FakeHost::new();
        let window = host.open_window();
        let first = host.open(window, "/a.rs", None);
        let second = host.open(window, "/b.rs", None);
        assert_eq!(host.active_view(window), Some(second));

        host.focus_view(window, first);
        assert_eq!(host.active_view(window), Some(first));
    }

    #[test]
    fn scratch_views_are_not_open_files() {
        let mut host = FakeHost::new();
        let window = host.open_window();
        host.open_scratch(window);
        assert!(host.open_files_of(window).is_empty());
    }

    #[test]
    fn unresolvable_views_report_an_error() {
        let mut host = FakeHost::new();
        let window = host.open_window();
        let view = host.open(window, "/a.rs", None);
        assert!(matches!(
            host.selection_of(view),
            Err(HostError::UnresolvableView { view: reported }) if reported == view
        ));
    }
}
