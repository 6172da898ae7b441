//! Icon DTOs

use serde::{Deserialize, Serialize};

use crate::domain::icon::{Icon, IconCategory};

/// Query parameters for listing icons
///
/// Unset fields are omitted from the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListIconsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<IconCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl ListIconsParams {
    /// Parameters for a single page, without filters
    pub fn page(page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
            ..Default::default()
        }
    }
}

/// One page of icons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconList {
    pub icons: Vec<Icon>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    #[serde(default = "default_success")]
    pub success: bool,
}

/// Single icon envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconResponse {
    pub icon: Icon,
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

fn default_success() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_skip_unset_fields() {
        let json = serde_json::to_value(ListIconsParams::page(1, 12)).unwrap();
        assert_eq!(json, serde_json::json!({ "page": 1, "page_size": 12 }));

        let json = serde_json::to_value(ListIconsParams {
            search: Some("coin".to_string()),
            category: Some(IconCategory::Devises),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "search": "coin", "category": "devises" })
        );
    }

    #[test]
    fn test_empty_icon_list() {
        let list: IconList = serde_json::from_str(
            r#"{"icons":[],"total":0,"page":1,"page_size":12,"success":true}"#,
        )
        .unwrap();
        assert!(list.icons.is_empty());
        assert_eq!(list.total, 0);
        assert!(list.success);
    }
}
