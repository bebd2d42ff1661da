/// View surface module
///
/// Both demos render into named display regions instead of a document tree.
/// Controllers build [`View`] values and hand them to a [`Surface`]; the
/// surface decides how (or whether) to show them.
///
/// ## Architecture
///
/// ```text
/// Controller ──View<A>──> Surface<A>
///                           ├── MemorySurface  (headless, tests)
///                           └── ConsoleSurface (terminal front-end)
/// ```
///
/// A view lists the actions it offers as buttons. Controllers only honor
/// actions their current views offer, which is what keeps each demo's state
/// machine closed.

pub mod console;
pub mod element;
pub mod surface;

pub use console::ConsoleSurface;
pub use element::{Element, Emphasis, View};
pub use surface::{require_targets, MemorySurface, Surface, ViewTarget};
