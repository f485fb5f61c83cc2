//! Clinical narrative templates, one flat table keyed by
//! (category, trimester, status).
//!
//! Bodies are Portuguese text with `${placeholder}` markers filled in by
//! [`super::render`]. Not every status applies to every trimester; the
//! classifier only produces combinations present here, and
//! [`TemplateTable::validate`] checks the minimum set at startup.

mod normal;
mod obese;
mod overweight;
mod underweight;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::GuidanceError;
use crate::models::enums::{BmiCategory, Trimester, WeightGainStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub id: &'static str,
    pub body: &'static str,
}

pub(crate) struct TemplateEntry {
    trimester: Trimester,
    status: WeightGainStatus,
    template: Template,
}

pub(crate) const fn entry(
    trimester: Trimester,
    status: WeightGainStatus,
    id: &'static str,
    body: &'static str,
) -> TemplateEntry {
    TemplateEntry {
        trimester,
        status,
        template: Template { id, body },
    }
}

pub type TemplateKey = (BmiCategory, Trimester, WeightGainStatus);

/// Statuses every (category, trimester) pair must cover.
const REQUIRED_STATUSES: [WeightGainStatus; 2] = [
    WeightGainStatus::Adequate,
    WeightGainStatus::TotalMaxReached,
];

static BUILTIN: LazyLock<TemplateTable> = LazyLock::new(|| {
    let mut table = TemplateTable::default();
    for (category, entries) in [
        (BmiCategory::Underweight, underweight::ENTRIES),
        (BmiCategory::Normal, normal::ENTRIES),
        (BmiCategory::Overweight, overweight::ENTRIES),
        (BmiCategory::Obese, obese::ENTRIES),
    ] {
        for e in entries {
            table.insert((category, e.trimester, e.status), e.template);
        }
    }
    table
});

#[derive(Debug, Clone, Default)]
pub struct TemplateTable {
    entries: HashMap<TemplateKey, Template>,
}

impl TemplateTable {
    /// The compiled-in table, built once and shared read-only.
    pub fn builtin() -> &'static TemplateTable {
        &BUILTIN
    }

    pub fn insert(&mut self, key: TemplateKey, template: Template) {
        self.entries.insert(key, template);
    }

    pub fn get(
        &self,
        category: BmiCategory,
        trimester: Trimester,
        status: WeightGainStatus,
    ) -> Option<&Template> {
        self.entries.get(&(category, trimester, status))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every (category, trimester) pair must have an `adequate` and a
    /// `total_max_reached` template.
    pub fn validate(&self) -> Result<(), GuidanceError> {
        for category in BmiCategory::ALL {
            for trimester in [Trimester::First, Trimester::Second, Trimester::Third] {
                for status in REQUIRED_STATUSES {
                    if self.get(category, trimester, status).is_none() {
                        return Err(GuidanceError::MissingTemplate {
                            category: category.as_str().into(),
                            trimester: trimester.number(),
                            status: status.as_str().into(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
