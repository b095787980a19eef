use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Dashboard,
    Analyze,
    History,
    Settings,
}

impl View {
    pub const ALL: [View; 4] = [View::Dashboard, View::Analyze, View::History, View::Settings];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Analyze => "analyze",
            View::History => "history",
            View::Settings => "settings",
        }
    }

    pub fn header(&self) -> ViewHeader {
        let (title, subtitle) = match self {
            View::Dashboard => ("Dashboard", "Your trading overview at a glance."),
            View::Analyze => ("Market Analysis", "AI-assisted tactics and forecast."),
            View::History => ("History", "Past analyses and feedback."),
            View::Settings => ("Settings", "Model configuration and API."),
        };
        ViewHeader { title, subtitle }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dashboard" => Ok(View::Dashboard),
            "analyze" => Ok(View::Analyze),
            "history" => Ok(View::History),
            "settings" => Ok(View::Settings),
            other => Err(format!("unknown view '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewHeader {
    pub title: &'static str,
    pub subtitle: &'static str,
}
