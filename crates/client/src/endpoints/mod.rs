//! Catalog service endpoint implementations.
//!
//! Every function takes the HTTP transport and the base URL explicitly, so
//! callers decide how requests are sent (timeouts, proxies, a mock server in
//! tests). [`default_http_client`] is the process-wide transport used when a
//! caller has no preference.

mod app_version;
mod finishes;
mod hardware;
mod materials;
mod query;
mod request;

pub use app_version::get_app_version;
pub use finishes::get_finish_options;
pub use hardware::{HardwareQuery, get_hardware};
pub use materials::{MaterialsQuery, get_material_by_sku, get_materials};
pub use query::endpoint_url;
pub use request::default_http_client;
