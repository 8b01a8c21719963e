//! Component detail lookup for the feature card.

use super::Category;

const PLACEHOLDER_DESCRIPTION: &str = "Click on different components to learn about their roles";
const PLACEHOLDER_FEATURES: &[&str] = &["No detailed information available"];
const PLACEHOLDER_TECH: &[&str] = &["Unknown technology"];

/// Description of a component category: what it is, what it does and what it
/// is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentDetail {
    title: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    tech: &'static [&'static str],
}

impl ComponentDetail {
    /// Returns the authored entry of `category`, if there is one.
    ///
    /// Flow view categories have no entry.
    pub fn for_category(category: Category) -> Option<&'static ComponentDetail> {
        match category {
            Category::DataPlane => Some(&DATA_PLANE),
            Category::Reconciler => Some(&RECONCILER),
            Category::ControlPlane => Some(&CONTROL_PLANE),
            Category::Database => Some(&DATABASE),
            Category::Storage => Some(&STORAGE),
            Category::Processing => Some(&PROCESSING),
            Category::External => Some(&EXTERNAL),
            Category::User | Category::Filter | Category::Profiler | Category::Application => None,
        }
    }

    /// Builds the fallback entry shown for categories without details.
    pub fn placeholder(label: &'static str) -> ComponentDetail {
        ComponentDetail {
            title: if label.is_empty() { "Component" } else { label },
            description: PLACEHOLDER_DESCRIPTION,
            features: PLACEHOLDER_FEATURES,
            tech: PLACEHOLDER_TECH,
        }
    }

    /// Looks up `category`, falling back to the placeholder titled `label`.
    pub fn resolve(category: Category, label: &'static str) -> ComponentDetail {
        Self::for_category(category)
            .copied()
            .unwrap_or_else(|| Self::placeholder(label))
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn features(&self) -> &'static [&'static str] {
        self.features
    }

    pub fn tech(&self) -> &'static [&'static str] {
        self.tech
    }

    pub fn is_placeholder(&self) -> bool {
        self.description == PLACEHOLDER_DESCRIPTION
    }
}

static DATA_PLANE: ComponentDetail = ComponentDetail {
    title: "Data Plane Worker",
    description: "Frontline collector that inspects every request in real-time",
    features: &[
        "Normalizes endpoints (scope, path, method)",
        "Calculates entropy and stability scores",
        "Publishes raw observations to KV",
        "Handles request body, headers, and files",
    ],
    tech: &["Cloudflare Workers", "JavaScript"],
};

static RECONCILER: ComponentDetail = ComponentDetail {
    title: "Data Reconciler Worker",
    description: "The brain that analyzes patterns and decides what's trustworthy",
    features: &[
        "Aggregates observations from KV storage",
        "Calculates stability scores and frequency analysis",
        "Detects anomalies and behavioral patterns",
        "Promotes consistent fields to D1 database",
        "Suppresses noisy/unreliable data",
    ],
    tech: &["CRON Triggers", "Batch Processing", "D1 Database"],
};

static CONTROL_PLANE: ComponentDetail = ComponentDetail {
    title: "Control Plane",
    description: "The overseer providing visibility and management capabilities",
    features: &[
        "Admin dashboard for profiling insights",
        "Manual override capabilities for fine-tuning",
        "Scope control and configuration management",
        "Real-time metrics and analytics dashboard",
        "API for external integrations",
    ],
    tech: &["React Dashboard", "REST API", "Authentication"],
};

static DATABASE: ComponentDetail = ComponentDetail {
    title: "D1 Database",
    description: "Persistent storage for trusted profiling data",
    features: &[
        "Stores normalized endpoints and parameters",
        "Maintains field metadata history and trends",
        "SQL-based querying capabilities for analysis",
        "Backup and recovery built-in",
    ],
    tech: &["Cloudflare D1", "SQLite"],
};

static STORAGE: ComponentDetail = ComponentDetail {
    title: "KV Storage",
    description: "High-performance ephemeral storage for raw observations",
    features: &[
        "TTL-based automatic expiration (~1 hour)",
        "High-throughput read/write operations",
        "Distributed global storage network",
        "Cost-effective transient data handling",
    ],
    tech: &["Cloudflare KV", "Key-Value Store"],
};

static PROCESSING: ComponentDetail = ComponentDetail {
    title: "Normalization Engine",
    description: "Standardizes incoming request data for consistent processing",
    features: &[
        "Extracts scope, path, and method from requests",
        "Standardizes endpoint formatting",
        "Validates and sanitizes input parameters",
        "Prepares data for storage and analysis",
    ],
    tech: &["Data Processing", "Validation Logic"],
};

static EXTERNAL: ComponentDetail = ComponentDetail {
    title: "Incoming Request",
    description: "External HTTP requests from tenants and applications",
    features: &[
        "Multi-tenant request handling",
        "Application-specific routing",
        "Request validation and filtering",
        "Traffic monitoring and metrics",
    ],
    tech: &["HTTP Protocol", "Load Balancing"],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconciler_detail() {
        let detail = ComponentDetail::for_category(Category::Reconciler).unwrap();
        assert_eq!(detail.title(), "Data Reconciler Worker");
        assert_eq!(detail.features().len(), 5);
        assert_eq!(
            detail.tech(),
            &["CRON Triggers", "Batch Processing", "D1 Database"]
        );
        assert!(!detail.is_placeholder());
    }

    #[test]
    fn test_flow_categories_fall_back() {
        for category in [
            Category::User,
            Category::Filter,
            Category::Profiler,
            Category::Application,
        ] {
            assert!(ComponentDetail::for_category(category).is_none());
        }

        let detail = ComponentDetail::resolve(Category::Filter, "WAF (Signatures)");
        assert!(detail.is_placeholder());
        assert_eq!(detail.title(), "WAF (Signatures)");
        assert_eq!(detail.features(), &["No detailed information available"]);
        assert_eq!(detail.tech(), &["Unknown technology"]);
    }

    #[test]
    fn test_placeholder_without_label() {
        assert_eq!(ComponentDetail::placeholder("").title(), "Component");
    }

    #[test]
    fn test_authored_entries_are_complete() {
        for category in Category::ALL {
            if let Some(detail) = ComponentDetail::for_category(category) {
                assert!(!detail.features().is_empty(), "{category}");
                assert!(!detail.tech().is_empty(), "{category}");
            }
        }
    }
}
