/// The classification the service returns for an identified item
///
/// All five fields are required. An inner payload missing any of them is
/// treated as malformed rather than rendered half-empty.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    /// Name of the identified item (e.g., "Banana Peel")
    pub name: String,
    /// Wet, Dry or Electronic
    pub tri_sort: String,
    /// Metal, Paper, Plastic, Glass or General Waste
    pub common_sort: String,
    /// Organic, Recycle, Non-Recycle or Hazardous
    pub color_sort: String,
    /// One paragraph of trivia about this type of waste
    pub fun_fact: String,
}

impl ClassificationResult {
    /// The three sort values in display order
    pub fn bins(&self) -> [&str; 3] {
        [&self.tri_sort, &self.common_sort, &self.color_sort]
    }
}

#[cfg(test)]
pub(crate) fn banana_peel() -> ClassificationResult {
    ClassificationResult {
        name: "Banana Peel".to_string(),
        tri_sort: "Wet".to_string(),
        common_sort: "General Waste".to_string(),
        color_sort: "Organic".to_string(),
        fun_fact: "Banana peels can take up to two years to break down in a landfill.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inner_payload() {
        let json = r#"{"name":"Soda Can","tri_sort":"Dry","common_sort":"Metal","color_sort":"Recycle","fun_fact":"Aluminium is endlessly recyclable."}"#;
        let result: ClassificationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.name, "Soda Can");
        assert_eq!(result.bins(), ["Dry", "Metal", "Recycle"]);
    }

    #[test]
    fn test_missing_field_is_an_error() {
        let json = r#"{"name":"Soda Can","tri_sort":"Dry"}"#;
        assert!(serde_json::from_str::<ClassificationResult>(json).is_err());
    }
}
