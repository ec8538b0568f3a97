// src/directory/models.rs
use serde::{Deserialize, Serialize};

/// Relative path of a category listing page, e.g. `/Directory/AIPO/Air_Pollution_Control_`
pub type CategoryLink = String;

/// Display name of a category with its trailing entry count removed.
pub type CategoryName = String;

/// Normalized cell texts of one table row under a company heading.
pub type MetadataRow = Vec<String>;

/// A category entry from the directory listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: CategoryName,
    pub link: CategoryLink,
}

/// One company parsed from a category page.
///
/// Serialized with the labels used on the site so the output matches the
/// table text (`"City:"`, `"Phone:"`, ...). Labeled fields that were not
/// present on the page are omitted entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    #[serde(rename = "Zip Code:", default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,

    #[serde(rename = "P.O Box:", default, skip_serializing_if = "Option::is_none")]
    pub po_box: Option<String>,

    #[serde(rename = "City:", default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(rename = "Country:", default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(rename = "Phone:")]
    pub phones: Vec<String>,

    #[serde(rename = "Address:")]
    pub address: String,

    pub company_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_with_site_labels() {
        let record = CompanyRecord {
            city: Some("Houston".to_string()),
            phones: vec!["+17135550100".to_string()],
            address: "1 Main St".to_string(),
            company_name: "Acme".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["City:"], "Houston");
        assert_eq!(json["Phone:"][0], "+17135550100");
        assert_eq!(json["Address:"], "1 Main St");
        assert_eq!(json["company_name"], "Acme");
        assert!(json.get("Zip Code:").is_none(), "absent labels should not be serialized");
        assert!(json.get("Country:").is_none());
    }

    #[test]
    fn test_empty_record_keeps_phone_and_address_keys() {
        let json = serde_json::to_value(CompanyRecord::default()).unwrap();
        assert_eq!(json["Phone:"], serde_json::json!([]));
        assert_eq!(json["Address:"], "");
        assert_eq!(json["company_name"], "");
    }
}
