//! Request URL construction.

use url::Url;

use crate::error::{ClientError, Result};

/// Join `path` onto `base_url` and append the given query pairs.
///
/// No `?` is emitted when `params` is empty. A path prefix on the base URL is
/// kept (`https://host/api` + `materials` -> `https://host/api/materials`).
pub fn endpoint_url(base_url: &str, path: &str, params: &[(&'static str, String)]) -> Result<Url> {
    let mut url = Url::parse(base_url)
        .map_err(|e| ClientError::InvalidUrl(format!("Invalid base URL '{}': {}", base_url, e)))?;

    url.path_segments_mut()
        .map_err(|_| ClientError::InvalidUrl(format!("Base URL cannot be a base: {}", base_url)))?
        .pop_if_empty()
        .push(path);

    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params.iter());
    }

    Ok(url)
}

/// Append `page` and `per_page`, skipping unset or zero values.
pub(crate) fn push_page_params(
    params: &mut Vec<(&'static str, String)>,
    page: Option<u32>,
    per_page: Option<u32>,
) {
    for (name, value) in [("page", page), ("per_page", per_page)] {
        if let Some(value) = value.filter(|v| *v != 0) {
            params.push((name, value.to_string()));
        }
    }
}
