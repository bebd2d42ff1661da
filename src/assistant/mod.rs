/// AI assistant approvals dashboard
///
/// ## Architecture
///
/// ```text
/// DashboardController<S: Surface, M: ModeStore>
///   ├── DriveMode     (agent or review driven, decides the visible cap)
///   ├── ApprovalList  (seeded queue, removal marks, id allocation)
///   ├── ToastQueue    (notifications with fade-out)
///   ├── ModeStore     (persists the confirmed mode)
///   └── Scheduler     (removal, reprocessing, toast and progress timers)
/// ```
///
/// ## Flow
///
/// 1. Pick a mode and confirm it; the mode is saved and the dashboard opens
/// 2. Open an item to review it
/// 3. Approve removes it; reject removes it and a reprocessed copy appears
///    at the top of the queue a little later

pub mod dashboard;
pub mod items;
pub mod mode;
pub mod store;
pub mod toast;

// Re-export commonly used types
pub use dashboard::{DashboardAction, DashboardController, DashboardTask, Screen, TARGETS};
pub use items::{ApprovalItem, ApprovalList};
pub use mode::DriveMode;
pub use store::{FileModeStore, MemoryModeStore, ModeStore, DRIVE_MODE_KEY};
pub use toast::{Toast, ToastId, ToastQueue};
