use super::StageId;

/// One narrative stage: the text shown in the detail panel of the flow view.
#[derive(Debug, PartialEq, Eq)]
pub struct Stage {
    id: StageId,
    title: &'static str,
    description: &'static str,
    business_impact: &'static str,
    risks: &'static [&'static str],
    benefits: &'static [&'static str],
}

impl Stage {
    /// Returns the record of `id`.
    pub fn get(id: StageId) -> &'static Stage {
        match id {
            StageId::Current => &CURRENT,
            StageId::Transition => &TRANSITION,
            StageId::Target => &TARGET,
        }
    }

    pub fn id(&self) -> StageId {
        self.id
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn business_impact(&self) -> &'static str {
        self.business_impact
    }

    pub fn risks(&self) -> &'static [&'static str] {
        self.risks
    }

    pub fn benefits(&self) -> &'static [&'static str] {
        self.benefits
    }
}

static CURRENT: Stage = Stage {
    id: StageId::Current,
    title: "Current State: Signature-Driven WAF",
    description: "Most Cloud WAFs rely heavily on static signatures and rule sets. \
        Engineers lack visibility into actual application behavior \u{2014} no telemetry, \
        no profiling.",
    business_impact: "Missed zero-day attacks, frequent false positives, and engineers \
        spending time tuning static rules without real context.",
    risks: &[
        "Blind to new/unknown attacks",
        "High false positives \u{2192} business disruption",
        "No application-level insights",
    ],
    benefits: &[
        "Quick blocking of known threats",
        "Standardized security posture",
    ],
};

static TRANSITION: Stage = Stage {
    id: StageId::Transition,
    title: "Transition: Adaptive Profiler Introduced",
    description: "An Adaptive Profiler observes live traffic, builds behavioral baselines, \
        and identifies anomalies without relying only on signatures.",
    business_impact: "Fewer false positives, faster detection of novel attack patterns, \
        and improved visibility for engineers.",
    risks: &[
        "Initial learning phase requires monitoring",
        "Potential noise until baseline is stable",
    ],
    benefits: &[
        "Dynamic learning of application behavior",
        "Context-aware detections",
        "Telemetry shared with engineers",
    ],
};

static TARGET: Stage = Stage {
    id: StageId::Target,
    title: "Target State: Adaptive Security with Telemetry",
    description: "WAF and Adaptive Profiler work together, providing engineers with \
        real-time telemetry, anomaly detection, and automated defenses.",
    business_impact: "Reduced operational overhead, faster incident response, and \
        continuous alignment with evolving application behavior.",
    risks: &["Ongoing tuning required for complex apps"],
    benefits: &[
        "Visibility into application traffic",
        "Reduced false positives",
        "Real-time anomaly detection",
        "Lower OPEX for security teams",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_stage_has_text() {
        for id in StageId::ALL {
            let stage = Stage::get(id);
            assert_eq!(stage.id(), id);
            assert!(!stage.title().is_empty());
            assert!(!stage.description().is_empty());
            assert!(!stage.business_impact().is_empty());
            assert!(!stage.risks().is_empty());
            assert!(!stage.benefits().is_empty());
        }
    }

    #[test]
    fn test_current_stage_text() {
        let stage = StageId::Current.stage();
        assert_eq!(stage.title(), "Current State: Signature-Driven WAF");
        assert!(stage.description().contains("no telemetry, no profiling."));
        assert_eq!(stage.risks().len(), 3);
        assert_eq!(
            stage.benefits(),
            &[
                "Quick blocking of known threats",
                "Standardized security posture",
            ]
        );
    }

    #[test]
    fn test_target_stage_lists() {
        let stage = StageId::Target.stage();
        assert_eq!(stage.risks(), &["Ongoing tuning required for complex apps"]);
        assert_eq!(stage.benefits().len(), 4);
        assert_eq!(stage.benefits()[3], "Lower OPEX for security teams");
    }
}
