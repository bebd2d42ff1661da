/// Approvals dashboard controller
///
/// Mode selection, the capped approval queue, the review modal, toasts and
/// the chat side panel. Every operation that does not apply to the current
/// state is a no-op and returns false.

use std::time::Duration;

use super::items::{ApprovalItem, ApprovalList};
use super::mode::DriveMode;
use super::store::ModeStore;
use super::toast::{ToastId, ToastQueue};
use crate::config::DemoConfig;
use crate::error::ViewError;
use crate::messaging::{Event, EventBus};
use crate::scheduler::Scheduler;
use crate::view::{require_targets, Emphasis, Surface, View, ViewTarget};

/// Regions the dashboard renders into
pub const TARGETS: [ViewTarget; 7] = [
    ViewTarget::MODE_SELECTION,
    ViewTarget::DASHBOARD,
    ViewTarget::APPROVALS_HEADER,
    ViewTarget::APPROVAL_LIST,
    ViewTarget::REVIEW_MODAL,
    ViewTarget::CHAT_PANEL,
    ViewTarget::TOASTS,
];

/// Share of work handled by the assistant, shown once the bars animate in
pub const AI_PROGRESS: u8 = 65;

/// Share of work waiting on the user
pub const USER_PROGRESS: u8 = 20;

pub const REPROCESSED_PREFIX: &str = "Reprocessed: ";
pub const REPROCESSED_SUMMARY: &str = "AI corrections applied based on feedback.";
pub const REPROCESSED_DATE: &str = "Just now";

/// Everything the user can do on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardAction {
    SelectMode(DriveMode),
    ConfirmMode,
    OpenReview(u64),
    CloseReview,
    Approve,
    Reject,
    ToggleChat,
    FocusChatTrigger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    ModeSelection,
    Dashboard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardTask {
    AnimateProgress,
    RemoveItem(u64),
    Reprocess { title: String },
    FadeToast(ToastId),
    DropToast(ToastId),
}

pub struct DashboardController<S, M>
where
    S: Surface<DashboardAction>,
    M: ModeStore,
{
    surface: S,
    store: M,
    config: DemoConfig,
    bus: EventBus,
    scheduler: Scheduler<DashboardTask>,
    screen: Screen,
    /// Mode in effect once confirmed
    mode: Option<DriveMode>,
    /// Mode highlighted on the selection screen
    selected: Option<DriveMode>,
    items: ApprovalList,
    open_item: Option<u64>,
    toasts: ToastQueue,
    chat_open: bool,
    progress_animated: bool,
}

impl<S, M> DashboardController<S, M>
where
    S: Surface<DashboardAction>,
    M: ModeStore,
{
    /// Create the controller and show the mode selection screen, or the
    /// dashboard directly when restoring a saved mode is enabled
    pub fn new(surface: S, store: M, config: DemoConfig, bus: EventBus) -> Result<Self, ViewError> {
        require_targets(&surface, &TARGETS)?;

        let mut controller = Self {
            surface,
            store,
            config,
            bus,
            scheduler: Scheduler::new(),
            screen: Screen::ModeSelection,
            mode: None,
            selected: None,
            items: ApprovalList::seeded(),
            open_item: None,
            toasts: ToastQueue::new(),
            chat_open: false,
            progress_animated: false,
        };

        let restored = if controller.config.restore_saved_mode {
            controller.saved_mode()
        } else {
            None
        };

        match restored {
            Some(mode) => {
                tracing::info!("Restored drive mode: {}", mode);
                controller.mode = Some(mode);
                controller.show_dashboard();
            }
            None => controller.render_mode_selection(),
        }

        Ok(controller)
    }

    fn saved_mode(&self) -> Option<DriveMode> {
        match self.store.load() {
            Ok(mode) => mode,
            Err(e) => {
                tracing::warn!("Ignoring saved drive mode: {}", e);
                None
            }
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn mode(&self) -> Option<DriveMode> {
        self.mode
    }

    pub fn selected_mode(&self) -> Option<DriveMode> {
        self.selected
    }

    pub fn items(&self) -> &ApprovalList {
        &self.items
    }

    /// Items currently listed, after applying the mode's cap
    pub fn visible_items(&self) -> &[ApprovalItem] {
        self.items.visible(self.cap())
    }

    pub fn open_item(&self) -> Option<&ApprovalItem> {
        self.open_item.and_then(|id| self.items.get(id))
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn is_chat_open(&self) -> bool {
        self.chat_open
    }

    pub fn progress(&self) -> (u8, u8) {
        if self.progress_animated {
            (AI_PROGRESS, USER_PROGRESS)
        } else {
            (0, 0)
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn store(&self) -> &M {
        &self.store
    }

    fn cap(&self) -> Option<usize> {
        self.mode.map(|mode| mode.cap(&self.config))
    }

    /// Route a user action to its operation
    pub fn dispatch(&mut self, action: DashboardAction) -> bool {
        match action {
            DashboardAction::SelectMode(mode) => self.select_mode(mode),
            DashboardAction::ConfirmMode => self.confirm_mode(),
            DashboardAction::OpenReview(id) => self.open_review(id),
            DashboardAction::CloseReview => self.close_review(),
            DashboardAction::Approve => self.approve(),
            DashboardAction::Reject => self.reject(),
            DashboardAction::ToggleChat => self.toggle_chat(),
            DashboardAction::FocusChatTrigger => self.focus_chat_trigger(),
        }
    }

    /// Highlight a mode card and enable Next
    pub fn select_mode(&mut self, mode: DriveMode) -> bool {
        if self.screen != Screen::ModeSelection {
            return false;
        }

        self.selected = Some(mode);
        self.bus.publish(Event::ModeSelected { mode });
        self.render_mode_selection();
        true
    }

    /// Apply and persist the highlighted mode, then open the dashboard
    pub fn confirm_mode(&mut self) -> bool {
        let Some(mode) = self.selected.filter(|_| self.screen == Screen::ModeSelection) else {
            tracing::debug!("Confirm ignored, no mode selected");
            return false;
        };

        self.mode = Some(mode);
        if let Err(e) = self.store.save(mode) {
            tracing::warn!("Failed to persist drive mode: {}", e);
        }
        self.bus.publish(Event::ModeConfirmed { mode });

        self.show_toast(format!("Setting saved: {}", mode.display_name()));
        self.show_dashboard();
        true
    }

    /// Open the review modal for a listed item
    pub fn open_review(&mut self, id: u64) -> bool {
        if self.screen != Screen::Dashboard {
            return false;
        }
        let listed = self
            .visible_items()
            .iter()
            .any(|item| item.id == id && !self.items.is_removing(id));
        if !listed {
            tracing::debug!("No reviewable item {}", id);
            return false;
        }

        self.open_item = Some(id);
        self.bus.publish(Event::ReviewOpened { id });
        self.render_modal();
        true
    }

    pub fn close_review(&mut self) -> bool {
        if self.open_item.take().is_none() {
            return false;
        }
        self.render_modal();
        true
    }

    pub fn approve(&mut self) -> bool {
        let Some(id) = self.open_item.take() else {
            return false;
        };

        tracing::info!("Approved item {}", id);
        self.start_removal(id);
        self.render_modal();
        self.bus.publish(Event::ItemApproved { id });
        self.show_toast("Item approved");
        true
    }

    /// Remove the open item and queue a reprocessed copy of it
    pub fn reject(&mut self) -> bool {
        let Some(id) = self.open_item.take() else {
            return false;
        };
        let title = self
            .items
            .get(id)
            .map(|item| item.title.clone())
            .unwrap_or_else(|| "Item".to_string());

        tracing::info!("Rejected item {}", id);
        self.start_removal(id);
        self.render_modal();
        self.bus.publish(Event::ItemRejected { id });
        self.show_toast("Item rejected. Reprocessing...");
        self.scheduler
            .schedule(self.config.reprocess_delay(), DashboardTask::Reprocess { title });
        true
    }

    /// Open or close the chat panel; only the dashboard offers it
    pub fn toggle_chat(&mut self) -> bool {
        if self.screen != Screen::Dashboard {
            return false;
        }
        self.chat_open = !self.chat_open;
        self.bus.publish(Event::ChatToggled {
            open: self.chat_open,
        });
        self.render_chat();
        true
    }

    /// Focusing the dashboard chat input opens the side panel
    pub fn focus_chat_trigger(&mut self) -> bool {
        if self.chat_open {
            return false;
        }
        self.toggle_chat()
    }

    /// Current logical time
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Move time forward by `by`, firing every timer that falls due
    pub fn advance(&mut self, by: Duration) {
        let until = self.scheduler.now() + by;
        self.advance_to(until);
    }

    /// Move time forward to `until`, firing every timer that falls due
    pub fn advance_to(&mut self, until: Duration) {
        while let Some((_, task)) = self.scheduler.pop_due(until) {
            self.fire(task);
        }
        self.scheduler.settle(until);
    }

    fn fire(&mut self, task: DashboardTask) {
        match task {
            DashboardTask::AnimateProgress => {
                self.progress_animated = true;
                self.render_overview();
            }
            DashboardTask::RemoveItem(id) => {
                if self.items.remove(id).is_some() {
                    self.bus.publish(Event::ItemRemoved { id });
                }
                self.render_list();
            }
            DashboardTask::Reprocess { title } => {
                let title = format!("{}{}", REPROCESSED_PREFIX, title);
                let id = self
                    .items
                    .prepend(title.as_str(), REPROCESSED_SUMMARY, REPROCESSED_DATE);
                tracing::info!("Reprocessed item added as {}", id);
                self.bus.publish(Event::ItemAdded { id, title });
                self.render_list();
                self.show_toast("Reprocessing complete. New item added.");
            }
            DashboardTask::FadeToast(id) => {
                if self.toasts.fade(id) {
                    self.scheduler
                        .schedule(self.config.removal_delay(), DashboardTask::DropToast(id));
                }
                self.render_toasts();
            }
            DashboardTask::DropToast(id) => {
                self.toasts.remove(id);
                self.render_toasts();
            }
        }
    }

    fn start_removal(&mut self, id: u64) {
        if self.items.mark_removing(id) {
            self.scheduler
                .schedule(self.config.removal_delay(), DashboardTask::RemoveItem(id));
        }
        self.render_list();
    }

    fn show_toast(&mut self, message: impl Into<String>) {
        let message = message.into();
        let id = self.toasts.push(message.as_str());
        self.scheduler
            .schedule(self.config.toast_duration(), DashboardTask::FadeToast(id));
        self.bus.publish(Event::ToastShown { message });
        self.render_toasts();
    }

    fn show_dashboard(&mut self) {
        self.screen = Screen::Dashboard;
        self.surface.clear(ViewTarget::MODE_SELECTION);
        self.scheduler
            .schedule(self.config.progress_delay(), DashboardTask::AnimateProgress);

        self.render_overview();
        self.render_list();
        self.render_chat();
    }

    fn render_mode_selection(&mut self) {
        let mut view = View::new().heading("How should your assistant work?");

        for (index, mode) in DriveMode::all().into_iter().enumerate() {
            let emphasis = if self.selected == Some(mode) {
                Emphasis::Active
            } else {
                Emphasis::Normal
            };
            let key = if index == 0 { '1' } else { '2' };
            view = view
                .styled(mode.display_name(), emphasis)
                .muted(mode.description())
                .button(key, format!("Choose {}", mode.display_name()), DashboardAction::SelectMode(mode));
        }

        let view = view.button_enabled(
            'n',
            "Next",
            DashboardAction::ConfirmMode,
            self.selected.is_some(),
        );
        self.surface.show(ViewTarget::MODE_SELECTION, view);
    }

    fn render_overview(&mut self) {
        let (ai, user) = self.progress();
        let mode = self.mode.map(|m| m.display_name()).unwrap_or("No mode");

        let view = View::new()
            .heading("Assistant Overview")
            .muted(format!("Mode: {}", mode))
            .progress("Handled by AI", ai)
            .progress("Waiting on you", user)
            .button('t', "Ask the assistant anything...", DashboardAction::FocusChatTrigger)
            .button('c', "Toggle chat", DashboardAction::ToggleChat);
        self.surface.show(ViewTarget::DASHBOARD, view);
    }

    fn render_list(&mut self) {
        if self.screen != Screen::Dashboard {
            return;
        }

        let visible = self.visible_items();
        let header = View::line(format!("Approve ({})", visible.len()));

        let mut list = View::new();
        for (index, item) in visible.iter().enumerate() {
            let removing = self.items.is_removing(item.id);
            list = if removing {
                list.styled(format!("{} (removing)", item.title), Emphasis::Muted)
            } else {
                list.heading(item.title.as_str())
            };
            list = list.text(item.summary.as_str()).muted(item.date.as_str());
            if let Some(key) = list_key(index) {
                list = list.button_enabled(key, "Open", DashboardAction::OpenReview(item.id), !removing);
            }
        }
        if visible.is_empty() {
            list = list.muted("Nothing waiting for approval.");
        }

        self.surface.show(ViewTarget::APPROVALS_HEADER, header);
        self.surface.show(ViewTarget::APPROVAL_LIST, list);
    }

    fn render_modal(&mut self) {
        let view = self.open_item().map(|item| {
            View::new()
                .heading(item.title.as_str())
                .text(item.summary.as_str())
                .button('a', "Approve", DashboardAction::Approve)
                .button('r', "Reject", DashboardAction::Reject)
                .button('x', "Close", DashboardAction::CloseReview)
        });

        match view {
            Some(view) => self.surface.show(ViewTarget::REVIEW_MODAL, view),
            None => self.surface.clear(ViewTarget::REVIEW_MODAL),
        }
    }

    fn render_chat(&mut self) {
        if self.chat_open {
            let view = View::new()
                .heading("AI Assistant")
                .muted("Hi! Ask me about any pending approval.");
            self.surface.show(ViewTarget::CHAT_PANEL, view);
        } else {
            self.surface.clear(ViewTarget::CHAT_PANEL);
        }
    }

    fn render_toasts(&mut self) {
        if self.toasts.is_empty() {
            self.surface.clear(ViewTarget::TOASTS);
        } else {
            self.surface.show(ViewTarget::TOASTS, self.toasts.render());
        }
    }
}

/// Key for the n-th listed item: 1-9, then 0
fn list_key(index: usize) -> Option<char> {
    match index {
        0..=8 => char::from_digit(index as u32 + 1, 10),
        9 => Some('0'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::store::MemoryModeStore;
    use crate::view::MemorySurface;

    type TestDashboard = DashboardController<MemorySurface<DashboardAction>, MemoryModeStore>;

    fn dashboard() -> TestDashboard {
        DashboardController::new(
            MemorySurface::new(&TARGETS),
            MemoryModeStore::new(),
            DemoConfig::default(),
            EventBus::new(),
        )
        .unwrap()
    }

    fn confirmed(mode: DriveMode) -> TestDashboard {
        let mut dashboard = dashboard();
        dashboard.select_mode(mode);
        dashboard.confirm_mode();
        dashboard
    }

    #[test]
    fn test_starts_on_mode_selection() {
        let dashboard = dashboard();
        assert_eq!(dashboard.screen(), Screen::ModeSelection);
        assert!(dashboard.surface().is_visible(ViewTarget::MODE_SELECTION));
        assert!(!dashboard.surface().is_visible(ViewTarget::APPROVAL_LIST));
    }

    #[test]
    fn test_confirm_without_selection_is_noop() {
        let mut dashboard = dashboard();
        assert!(!dashboard.confirm_mode());
        assert_eq!(dashboard.screen(), Screen::ModeSelection);
        assert_eq!(dashboard.store().saves(), 0);
    }

    #[test]
    fn test_confirm_persists_and_toasts() {
        let dashboard = confirmed(DriveMode::AgentDriven);

        assert_eq!(dashboard.screen(), Screen::Dashboard);
        assert_eq!(dashboard.store().load().unwrap(), Some(DriveMode::AgentDriven));
        assert_eq!(dashboard.toasts().messages(), vec!["Setting saved: Agent Driven"]);
        assert!(!dashboard.surface().is_visible(ViewTarget::MODE_SELECTION));
    }

    #[test]
    fn test_header_counts_visible_items() {
        let dashboard = confirmed(DriveMode::AgentDriven);
        assert_eq!(
            dashboard.surface().text(ViewTarget::APPROVALS_HEADER),
            Some("Approve (2)")
        );

        let dashboard = confirmed(DriveMode::ReviewDriven);
        assert_eq!(
            dashboard.surface().text(ViewTarget::APPROVALS_HEADER),
            Some("Approve (10)")
        );
    }

    #[test]
    fn test_progress_animates_after_delay() {
        let mut dashboard = confirmed(DriveMode::ReviewDriven);
        assert_eq!(dashboard.progress(), (0, 0));

        dashboard.advance(Duration::from_millis(300));
        assert_eq!(dashboard.progress(), (65, 20));
    }

    #[test]
    fn test_open_unknown_item_is_noop() {
        let mut dashboard = confirmed(DriveMode::AgentDriven);
        assert!(!dashboard.open_review(42));
        // Listed in data but hidden by the cap
        assert!(!dashboard.open_review(5));
        assert!(dashboard.open_item().is_none());
    }

    #[test]
    fn test_approve_removes_after_delay() {
        let mut dashboard = confirmed(DriveMode::ReviewDriven);
        assert!(dashboard.open_review(2));
        assert!(dashboard.surface().is_visible(ViewTarget::REVIEW_MODAL));

        assert!(dashboard.approve());
        assert!(!dashboard.surface().is_visible(ViewTarget::REVIEW_MODAL));
        assert!(dashboard.items().get(2).is_some());

        dashboard.advance(Duration::from_millis(300));
        assert!(dashboard.items().get(2).is_none());
        assert_eq!(dashboard.items().len(), 9);
    }

    #[test]
    fn test_approve_without_open_item_is_noop() {
        let mut dashboard = confirmed(DriveMode::ReviewDriven);
        assert!(!dashboard.approve());
        assert!(!dashboard.reject());
        assert_eq!(dashboard.pending_timers(), 2);
    }

    #[test]
    fn test_toast_fades_then_goes_away() {
        let mut dashboard = confirmed(DriveMode::AgentDriven);

        dashboard.advance(Duration::from_millis(3000));
        assert!(dashboard.toasts().toasts()[0].fading);

        dashboard.advance(Duration::from_millis(300));
        assert!(dashboard.toasts().is_empty());
        assert!(!dashboard.surface().is_visible(ViewTarget::TOASTS));
    }

    #[test]
    fn test_chat_trigger_only_opens() {
        let mut dashboard = confirmed(DriveMode::AgentDriven);

        assert!(dashboard.focus_chat_trigger());
        assert!(dashboard.is_chat_open());
        assert!(!dashboard.focus_chat_trigger());
        assert!(dashboard.is_chat_open());

        dashboard.toggle_chat();
        assert!(!dashboard.is_chat_open());
        assert!(!dashboard.surface().is_visible(ViewTarget::CHAT_PANEL));
    }

    #[test]
    fn test_chat_unavailable_during_mode_selection() {
        let mut dashboard = dashboard();

        assert!(!dashboard.dispatch(DashboardAction::ToggleChat));
        assert!(!dashboard.dispatch(DashboardAction::FocusChatTrigger));
        assert!(!dashboard.is_chat_open());
        assert!(!dashboard.surface().is_visible(ViewTarget::CHAT_PANEL));

        dashboard.select_mode(DriveMode::ReviewDriven);
        dashboard.confirm_mode();
        assert!(!dashboard.is_chat_open());
        assert!(dashboard.dispatch(DashboardAction::ToggleChat));
        assert!(dashboard.surface().is_visible(ViewTarget::CHAT_PANEL));
    }

    #[test]
    fn test_restore_saved_mode() {
        let config = DemoConfig {
            restore_saved_mode: true,
            ..DemoConfig::default()
        };
        let dashboard = DashboardController::new(
            MemorySurface::new(&TARGETS),
            MemoryModeStore::with_mode(DriveMode::AgentDriven),
            config,
            EventBus::new(),
        )
        .unwrap();

        assert_eq!(dashboard.screen(), Screen::Dashboard);
        assert_eq!(dashboard.visible_items().len(), 2);
        assert!(dashboard.toasts().is_empty());
    }

    #[test]
    fn test_saved_mode_ignored_by_default() {
        let dashboard = DashboardController::new(
            MemorySurface::new(&TARGETS),
            MemoryModeStore::with_mode(DriveMode::AgentDriven),
            DemoConfig::default(),
            EventBus::new(),
        )
        .unwrap();

        assert_eq!(dashboard.screen(), Screen::ModeSelection);
    }

    #[test]
    fn test_list_keys() {
        assert_eq!(list_key(0), Some('1'));
        assert_eq!(list_key(8), Some('9'));
        assert_eq!(list_key(9), Some('0'));
        assert_eq!(list_key(10), None);
    }
}
