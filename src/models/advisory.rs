use serde::{Deserialize, Serialize};

use super::enums::{AdvisoryType, Audience};

/// One piece of generated guidance, tagged with audience and severity.
///
/// Items are built fresh per evaluation and never mutated by the engine
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryItem {
    /// Stable key, e.g. `fish_consumption_low`.
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_message: Option<String>,
    #[serde(rename = "type")]
    pub advisory_type: AdvisoryType,
    pub audience: Audience,
    pub priority: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub requires_input: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_fields: Option<Vec<String>>,
}

impl AdvisoryItem {
    pub fn new(
        id: impl Into<String>,
        advisory_type: AdvisoryType,
        audience: Audience,
        priority: u8,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            message: message.into(),
            patient_message: None,
            advisory_type,
            audience,
            priority,
            note: None,
            requires_input: false,
            input_fields: None,
        }
    }

    pub fn with_patient_message(mut self, text: impl Into<String>) -> Self {
        self.patient_message = Some(text.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Ask the professional to record values (e.g. lab results).
    pub fn requiring_input(mut self, fields: &[&str]) -> Self {
        self.requires_input = true;
        self.input_fields = Some(fields.iter().map(|f| f.to_string()).collect());
        self
    }

    pub fn is_critical(&self) -> bool {
        self.advisory_type == AdvisoryType::Critical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_are_skipped() {
        let item = AdvisoryItem::new(
            "diet_none",
            AdvisoryType::Success,
            Audience::Patient,
            1,
            "DIETA SEM RESTRIÇÕES",
            "Texto",
        );
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "success");
        assert_eq!(json["audience"], "patient");
        assert!(json.get("note").is_none());
        assert!(json.get("patient_message").is_none());
        assert!(json.get("requires_input").is_none());
        assert!(json.get("input_fields").is_none());
    }

    #[test]
    fn builders_fill_optional_fields() {
        let item = AdvisoryItem::new(
            "anemia_test_review",
            AdvisoryType::Normal,
            Audience::Professional,
            7,
            "Exame",
            "Avalie",
        )
        .with_note("Verificar")
        .with_patient_message("Lay text")
        .requiring_input(&["hemoglobina", "ferritina"]);

        assert!(item.requires_input);
        assert_eq!(item.input_fields.as_deref().map(|f| f.len()), Some(2));
        assert_eq!(item.note.as_deref(), Some("Verificar"));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["requires_input"], true);
        assert_eq!(json["input_fields"][0], "hemoglobina");
    }

    #[test]
    fn deserializes_minimal_item() {
        let item: AdvisoryItem = serde_json::from_str(
            r#"{"id":"x","title":"t","message":"m","type":"critical","audience":"both","priority":3}"#,
        )
        .unwrap();
        assert!(item.is_critical());
        assert!(!item.requires_input);
    }
}
