/// Messaging module
///
/// Controllers broadcast domain events (step changes, stage completions,
/// approval list changes, toasts) over an [`EventBus`]. Subscribers get their
/// own channel; nothing on the bus can block a publisher.
///
/// ## Usage
///
/// ```rust,ignore
/// let bus = EventBus::new();
/// let (rx, _id) = bus.subscribe();
///
/// let mut wizard = WizardFlow::new(surface, config, bus.clone())?;
/// wizard.set_step(1);
///
/// while let Ok(event) = rx.try_recv() {
///     println!("{}", event.description());
/// }
/// ```

pub mod bus;
pub mod events;

// Re-export commonly used types
pub use bus::{EventBus, SubscriberId};
pub use events::Event;
