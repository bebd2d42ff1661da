//! HR Assist demos
//!
//! Two interactive demos over mock data: a document processing wizard and an
//! assistant approvals dashboard. Both render into a [`view::Surface`] and
//! run their animations off a [`scheduler::Scheduler`], so they can be driven
//! headless in tests or from a terminal.

pub mod assistant;
pub mod config;
pub mod error;
pub mod logging;
pub mod messaging;
pub mod runtime;
pub mod scheduler;
pub mod view;
pub mod wizard;

pub use config::DemoConfig;
pub use error::{AppResult, ConfigError, PersistError, ViewError};
