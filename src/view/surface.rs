/// Display regions and the surface trait

use std::collections::HashMap;
use std::fmt;
use std::io;

use super::element::View;
use crate::error::ViewError;

/// Named display region a controller renders into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewTarget(&'static str);

impl ViewTarget {
    // Wizard regions
    pub const STEPPER: ViewTarget = ViewTarget("stepper");
    pub const APP_ROOT: ViewTarget = ViewTarget("app-root");
    pub const PAGE_TITLE: ViewTarget = ViewTarget("page-title");

    // Dashboard regions
    pub const MODE_SELECTION: ViewTarget = ViewTarget("view-mode-selection");
    pub const DASHBOARD: ViewTarget = ViewTarget("view-dashboard");
    pub const APPROVALS_HEADER: ViewTarget = ViewTarget("header-approvals");
    pub const APPROVAL_LIST: ViewTarget = ViewTarget("approval-list");
    pub const REVIEW_MODAL: ViewTarget = ViewTarget("review-modal");
    pub const CHAT_PANEL: ViewTarget = ViewTarget("chat-panel");
    pub const TOASTS: ViewTarget = ViewTarget("toast-stack");

    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ViewTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Something that can display views in named regions
pub trait Surface<A> {
    /// Whether this surface provides `target`
    fn has_target(&self, target: ViewTarget) -> bool;

    /// Replace the content of `target` with `view`
    fn show(&mut self, target: ViewTarget, view: View<A>);

    /// Hide `target`
    fn clear(&mut self, target: ViewTarget);

    /// Enabled button bound to `key` in any visible region
    fn action_for_key(&self, key: char) -> Option<&A>;

    /// Push pending changes to the user
    fn present(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Fail fast when a surface lacks a region the caller depends on
pub fn require_targets<A, S>(surface: &S, targets: &[ViewTarget]) -> Result<(), ViewError>
where
    S: Surface<A> + ?Sized,
{
    match targets.iter().find(|target| !surface.has_target(**target)) {
        Some(missing) => Err(ViewError::MissingTarget {
            target: missing.name(),
        }),
        None => Ok(()),
    }
}

/// In-memory surface that keeps the latest view per region
pub struct MemorySurface<A> {
    targets: Vec<ViewTarget>,
    views: HashMap<ViewTarget, View<A>>,
    renders: HashMap<ViewTarget, usize>,
}

impl<A> MemorySurface<A> {
    /// Surface providing exactly `targets`
    pub fn new(targets: &[ViewTarget]) -> Self {
        Self {
            targets: targets.to_vec(),
            views: HashMap::new(),
            renders: HashMap::new(),
        }
    }

    /// Currently shown view of `target`, if visible
    pub fn view(&self, target: ViewTarget) -> Option<&View<A>> {
        self.views.get(&target)
    }

    pub fn is_visible(&self, target: ViewTarget) -> bool {
        self.views.contains_key(&target)
    }

    /// First line of text shown in `target`
    pub fn text(&self, target: ViewTarget) -> Option<&str> {
        self.view(target)
            .and_then(|view| view.texts().first().copied())
    }

    /// How many times `target` has been rendered
    pub fn render_count(&self, target: ViewTarget) -> usize {
        self.renders.get(&target).copied().unwrap_or(0)
    }

    /// Enabled button bound to `key` in any visible region
    pub fn action_for_key(&self, key: char) -> Option<&A> {
        self.targets
            .iter()
            .filter_map(|target| self.views.get(target))
            .find_map(|view| view.action_for_key(key))
    }
}

impl<A> Surface<A> for MemorySurface<A> {
    fn has_target(&self, target: ViewTarget) -> bool {
        self.targets.contains(&target)
    }

    fn show(&mut self, target: ViewTarget, view: View<A>) {
        if !self.has_target(target) {
            tracing::warn!("Dropping view for unknown target {}", target);
            return;
        }
        *self.renders.entry(target).or_insert(0) += 1;
        self.views.insert(target, view);
    }

    fn clear(&mut self, target: ViewTarget) {
        self.views.remove(&target);
    }

    fn action_for_key(&self, key: char) -> Option<&A> {
        MemorySurface::action_for_key(self, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_targets_reports_first_missing() {
        let surface: MemorySurface<()> = MemorySurface::new(&[ViewTarget::STEPPER]);

        let err = require_targets(&surface, &[ViewTarget::STEPPER, ViewTarget::APP_ROOT])
            .unwrap_err();
        assert_eq!(err.to_string(), "missing view target: app-root");
    }

    #[test]
    fn test_show_and_clear() {
        let mut surface: MemorySurface<()> = MemorySurface::new(&[ViewTarget::PAGE_TITLE]);

        surface.show(ViewTarget::PAGE_TITLE, View::line("Upload Document"));
        assert_eq!(surface.text(ViewTarget::PAGE_TITLE), Some("Upload Document"));
        assert_eq!(surface.render_count(ViewTarget::PAGE_TITLE), 1);

        surface.clear(ViewTarget::PAGE_TITLE);
        assert!(!surface.is_visible(ViewTarget::PAGE_TITLE));
    }

    #[test]
    fn test_unknown_target_is_ignored() {
        let mut surface: MemorySurface<()> = MemorySurface::new(&[]);
        surface.show(ViewTarget::APP_ROOT, View::line("hello"));
        assert!(!surface.is_visible(ViewTarget::APP_ROOT));
    }
}
