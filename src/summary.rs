//! Audience partition and critical-point count over advisory items.

use serde::{Deserialize, Serialize};

use crate::models::advisory::AdvisoryItem;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorySummary {
    /// Items with audience `professional` or `both`.
    pub professional_alerts: Vec<AdvisoryItem>,
    /// Items with audience `patient` or `both`. Never holds a
    /// professional-only item.
    pub patient_guidelines: Vec<AdvisoryItem>,
    /// Unweighted count of `critical` items over the whole input.
    pub critical_point_count: usize,
}

pub fn summarize(items: &[AdvisoryItem]) -> AdvisorySummary {
    let professional_alerts = items
        .iter()
        .filter(|i| i.audience.visible_to_professional())
        .cloned()
        .collect();
    let patient_guidelines = items
        .iter()
        .filter(|i| i.audience.visible_to_patient())
        .cloned()
        .collect();
    let critical_point_count = items.iter().filter(|i| i.is_critical()).count();

    AdvisorySummary {
        professional_alerts,
        patient_guidelines,
        critical_point_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{AdvisoryType, Audience};

    fn item(id: &str, advisory_type: AdvisoryType, audience: Audience) -> AdvisoryItem {
        AdvisoryItem::new(id, advisory_type, audience, 1, id, id)
    }

    #[test]
    fn partitions_by_audience() {
        let items = vec![
            item("p", AdvisoryType::Success, Audience::Patient),
            item("pro", AdvisoryType::Clinical, Audience::Professional),
            item("b", AdvisoryType::Warning, Audience::Both),
        ];
        let s = summarize(&items);
        let pro: Vec<&str> = s.professional_alerts.iter().map(|i| i.id.as_str()).collect();
        let pat: Vec<&str> = s.patient_guidelines.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(pro, vec!["pro", "b"]);
        assert_eq!(pat, vec!["p", "b"]);
    }

    #[test]
    fn counts_only_critical_items() {
        let items = vec![
            item("a", AdvisoryType::Critical, Audience::Patient),
            item("b", AdvisoryType::Critical, Audience::Both),
            item("c", AdvisoryType::Clinical, Audience::Professional),
            item("d", AdvisoryType::Warning, Audience::Patient),
        ];
        assert_eq!(summarize(&items).critical_point_count, 2);
    }

    #[test]
    fn empty_input() {
        assert_eq!(summarize(&[]), AdvisorySummary::default());
    }
}
