//! Material endpoints.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::query::{endpoint_url, push_page_params};
use crate::endpoints::request::fetch_data;
use crate::error::Result;
use crate::models::Material;

/// Query options for `GET /materials`.
///
/// Only options that are set end up in the request: `include_datasheet` adds
/// `include_datasheet=true` when true, the others are sent when `Some`.
/// An empty `sku` and a zero `page` or `per_page` count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialsQuery {
    pub include_datasheet: bool,
    pub sku: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl MaterialsQuery {
    /// Query for a single SKU.
    pub fn for_sku(sku: impl Into<String>, include_datasheet: bool) -> Self {
        Self {
            include_datasheet,
            sku: Some(sku.into()),
            ..Self::default()
        }
    }

    pub fn with_datasheet(mut self) -> Self {
        self.include_datasheet = true;
        self
    }

    pub fn with_page(mut self, page: u32, per_page: u32) -> Self {
        self.page = Some(page);
        self.per_page = Some(per_page);
        self
    }

    /// Query-string pairs in a fixed order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if self.include_datasheet {
            params.push(("include_datasheet", "true".to_string()));
        }
        if let Some(sku) = self.sku.as_deref().filter(|s| !s.is_empty()) {
            params.push(("sku", sku.to_string()));
        }
        push_page_params(&mut params, self.page, self.per_page);
        params
    }
}

/// List materials.
pub async fn get_materials(
    client: &Client,
    base_url: &str,
    query: &MaterialsQuery,
) -> Result<Vec<Material>> {
    let url = endpoint_url(base_url, "materials", &query.query_pairs())?;
    let materials: Vec<Material> = fetch_data(client, url, "materials").await?;
    debug!(count = materials.len(), "Fetched materials");
    Ok(materials)
}

/// Look up a material by SKU.
///
/// Returns the first record the service sends back; any further matches are
/// discarded. `None` when nothing matches.
pub async fn get_material_by_sku(
    client: &Client,
    base_url: &str,
    sku: &str,
    include_datasheet: bool,
) -> Result<Option<Material>> {
    let query = MaterialsQuery::for_sku(sku, include_datasheet);
    let materials = get_materials(client, base_url, &query).await?;
    if materials.len() > 1 {
        debug!(sku, count = materials.len(), "Multiple materials for SKU, keeping first");
    }
    Ok(materials.into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_has_no_params() {
        assert!(MaterialsQuery::default().query_pairs().is_empty());
    }

    #[test]
    fn test_datasheet_flag_only_when_true() {
        let query = MaterialsQuery {
            include_datasheet: false,
            ..MaterialsQuery::default()
        };
        assert!(query.query_pairs().is_empty());

        let pairs = MaterialsQuery::default().with_datasheet().query_pairs();
        assert_eq!(pairs, vec![("include_datasheet", "true".to_string())]);
    }

    #[test]
    fn test_all_params() {
        let query = MaterialsQuery::for_sku("AL-100", true).with_page(2, 50);
        assert_eq!(
            query.query_pairs(),
            vec![
                ("include_datasheet", "true".to_string()),
                ("sku", "AL-100".to_string()),
                ("page", "2".to_string()),
                ("per_page", "50".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_sku_and_zero_paging_are_omitted() {
        let query = MaterialsQuery {
            include_datasheet: false,
            sku: Some(String::new()),
            page: Some(0),
            per_page: Some(0),
        };
        assert!(query.query_pairs().is_empty());
    }
}
