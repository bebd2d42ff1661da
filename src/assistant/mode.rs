/// Assistant drive mode
///
/// Decides how much of the approval queue the dashboard shows.

use serde::{Deserialize, Serialize};

use crate::config::DemoConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveMode {
    /// Assistant acts on its own, only the top items need sign-off
    AgentDriven,

    /// Every prepared item goes through the user
    ReviewDriven,
}

impl DriveMode {
    pub fn all() -> [DriveMode; 2] {
        [DriveMode::AgentDriven, DriveMode::ReviewDriven]
    }

    /// Stored value
    pub fn as_str(&self) -> &'static str {
        match self {
            DriveMode::AgentDriven => "agent_driven",
            DriveMode::ReviewDriven => "review_driven",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DriveMode::AgentDriven => "Agent Driven",
            DriveMode::ReviewDriven => "Review Driven",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DriveMode::AgentDriven => {
                "The assistant handles routine work and surfaces only the most important items."
            }
            DriveMode::ReviewDriven => "You review everything the assistant prepares before it goes out.",
        }
    }

    /// Parse a stored value
    pub fn parse(value: &str) -> Option<DriveMode> {
        match value {
            "agent_driven" => Some(DriveMode::AgentDriven),
            "review_driven" => Some(DriveMode::ReviewDriven),
            _ => None,
        }
    }

    /// Number of approvals visible in this mode
    pub fn cap(&self, config: &DemoConfig) -> usize {
        match self {
            DriveMode::AgentDriven => config.agent_driven_cap,
            DriveMode::ReviewDriven => config.review_driven_cap,
        }
    }
}

impl std::fmt::Display for DriveMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
