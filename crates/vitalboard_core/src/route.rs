//! Client-side view routing.
//!
//! Unknown paths resolve to `Route::NotFound` instead of failing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Dashboard,
    Profile,
    HealthMetrics,
    HealthGoals,
    MedicalHistory,
    NotFound,
}

impl Route {
    /// Routes reachable from navigation, in menu order.
    pub const NAVIGABLE: [Route; 5] = [
        Route::Dashboard,
        Route::Profile,
        Route::HealthMetrics,
        Route::HealthGoals,
        Route::MedicalHistory,
    ];

    /// Resolves a location path; query strings, fragments and trailing
    /// slashes are ignored.
    pub fn resolve(path: &str) -> Self {
        let without_suffix = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let normalized = without_suffix.trim_end_matches('/');
        let normalized = if normalized.is_empty() { "/" } else { normalized };

        Self::NAVIGABLE
            .into_iter()
            .find(|route| route.path() == normalized)
            .unwrap_or(Self::NotFound)
    }

    /// Canonical path; `NotFound` has no path of its own and reports `*`.
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Profile => "/profile",
            Self::HealthMetrics => "/health-metrics",
            Self::HealthGoals => "/health-goals",
            Self::MedicalHistory => "/medical-history",
            Self::NotFound => "*",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Profile => "Profile",
            Self::HealthMetrics => "Health Metrics",
            Self::HealthGoals => "Health Goals",
            Self::MedicalHistory => "Medical History",
            Self::NotFound => "Page Not Found",
        }
    }
}
