//! Material models for the catalog `/materials` endpoint.

use serde::{Deserialize, Serialize};

/// A sheet or billet material offered by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub id: u64,
    pub name: String,
    pub sku: String,
    pub thickness: String,
    pub category: String,
    #[serde(default)]
    pub subcategory: Option<String>,
    /// Top-level grouping, e.g. "Metals" or "Plastics".
    pub group: String,
    /// Stock form, e.g. "sheet" or "billet".
    pub form: String,
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub out_of_stock: bool,
    #[serde(default)]
    pub expedited_production_permitted: bool,
    #[serde(default)]
    pub new_material: bool,
    #[serde(default)]
    pub limited_material: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ferrous_material: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketing: Option<Marketing>,

    // Flat duplicates of the marketing block.
    #[serde(default)]
    pub learn_more_url: Option<String>,
    #[serde(default)]
    pub example_image_url: Option<String>,
    #[serde(default)]
    pub category_description: Option<String>,
    #[serde(default)]
    pub group_description: Option<String>,
    #[serde(default)]
    pub name_description: Option<String>,
    #[serde(default)]
    pub post_message: Option<String>,
    #[serde(default)]
    pub post_message_url: Option<String>,

    /// Only present when the request set `include_datasheet=true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasheet: Option<Vec<DatasheetEntry>>,
}

/// Marketing copy attached to a material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marketing {
    #[serde(default)]
    pub learn_more_url: String,
    #[serde(default)]
    pub example_image_url: String,
    #[serde(default)]
    pub category_description: String,
    #[serde(default)]
    pub group_description: String,
    #[serde(default)]
    pub name_description: Option<String>,
    #[serde(default)]
    pub post_message: Option<String>,
    #[serde(default)]
    pub post_message_url: Option<String>,
}

/// One free-form row of a material datasheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasheetEntry {
    #[serde(rename = "type")]
    pub entry_type: DatasheetEntryType,
    pub field: String,
    pub value: String,
}

/// Datasheet row tag. Unknown tags are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DatasheetEntryType {
    Header,
    LabelText,
    LabelValue,
    Other(String),
}

impl From<String> for DatasheetEntryType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "header" => Self::Header,
            "label-text" => Self::LabelText,
            "label-value" => Self::LabelValue,
            _ => Self::Other(tag),
        }
    }
}

impl From<DatasheetEntryType> for String {
    fn from(tag: DatasheetEntryType) -> Self {
        match tag {
            DatasheetEntryType::Header => "header".to_string(),
            DatasheetEntryType::LabelText => "label-text".to_string(),
            DatasheetEntryType::LabelValue => "label-value".to_string(),
            DatasheetEntryType::Other(other) => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_material_with_marketing_and_datasheet() {
        let json = r#"{
            "id": 12,
            "name": "Aluminum 6061",
            "sku": "AL6061-125",
            "thickness": "0.125",
            "category": "Aluminum",
            "subcategory": null,
            "group": "Metals",
            "form": "sheet",
            "fullname": "0.125\" 6061-T6 Aluminum",
            "out_of_stock": false,
            "expedited_production_permitted": true,
            "new_material": false,
            "limited_material": false,
            "ferrous_material": false,
            "marketing": {
                "learn_more_url": "https://example.com/al",
                "example_image_url": "https://example.com/al.png",
                "category_description": "Light and strong",
                "group_description": "Metals",
                "name_description": null,
                "post_message": null,
                "post_message_url": null
            },
            "learn_more_url": "https://example.com/al",
            "datasheet": [
                {"type": "header", "field": "Mechanical", "value": ""},
                {"type": "label-value", "field": "Yield", "value": "40 ksi"},
                {"type": "footnote", "field": "Note", "value": "Typical"}
            ]
        }"#;
        let material: Material = serde_json::from_str(json).unwrap();
        assert_eq!(material.id, 12);
        assert_eq!(material.group, "Metals");
        assert_eq!(material.subcategory, None);
        assert_eq!(material.ferrous_material, Some(false));
        assert_eq!(
            material.marketing.as_ref().unwrap().category_description,
            "Light and strong"
        );
        assert_eq!(
            material.learn_more_url.as_deref(),
            Some("https://example.com/al")
        );

        let datasheet = material.datasheet.unwrap();
        assert_eq!(datasheet.len(), 3);
        assert_eq!(datasheet[0].entry_type, DatasheetEntryType::Header);
        assert_eq!(datasheet[1].entry_type, DatasheetEntryType::LabelValue);
        assert_eq!(
            datasheet[2].entry_type,
            DatasheetEntryType::Other("footnote".to_string())
        );
    }

    #[test]
    fn test_deserialize_minimal_material() {
        let json = r#"{
            "id": 1,
            "name": "Acrylic",
            "sku": "ACR-118",
            "thickness": "0.118",
            "category": "Acrylic",
            "group": "Plastics",
            "form": "sheet"
        }"#;
        let material: Material = serde_json::from_str(json).unwrap();
        assert!(!material.out_of_stock);
        assert!(material.marketing.is_none());
        assert!(material.datasheet.is_none());
        assert_eq!(material.fullname, "");
    }

    #[test]
    fn test_datasheet_tag_serializes_back_to_wire_string() {
        let entry = DatasheetEntry {
            entry_type: DatasheetEntryType::LabelText,
            field: "Finish".to_string(),
            value: "Mill".to_string(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], "label-text");
    }
}
