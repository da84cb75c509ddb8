//! npm Registry client
//!
//! Fetches package metadata from the npm registry.
//! API endpoint: https://registry.npmjs.org/{package}

use crate::domain::RepositoryField;
use crate::error::RegistryError;
use crate::registry::{HttpClient, PackageMeta, PackageRegistryClient};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// npm registry base URL
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// npm Registry client
pub struct NpmRegistry {
    client: HttpClient,
    base_url: String,
}

/// npm package document (packument), reduced to the fields we read.
/// Fields stay raw JSON; a null or wrongly typed field reads as absent.
#[derive(Debug, Deserialize)]
struct NpmPackageResponse {
    /// Tag name → version, e.g. `latest`
    #[serde(default, rename = "dist-tags")]
    dist_tags: Option<Value>,
    /// Repository as string or object
    #[serde(default)]
    repository: Option<Value>,
    #[serde(default)]
    homepage: Option<Value>,
    /// Issue tracker, usually `{"url": "..."}`
    #[serde(default)]
    bugs: Option<Value>,
}

impl NpmRegistry {
    /// Create a new npm client against the public registry
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, DEFAULT_REGISTRY_URL)
    }

    /// Create a new npm client against a custom registry URL
    pub fn with_base_url(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the URL for a package; the scope separator is percent-encoded
    fn build_url(&self, package: &str) -> String {
        format!("{}/{}", self.base_url, encode_package_name(package))
    }
}

/// Encode a package name for use as a single path segment
fn encode_package_name(package: &str) -> String {
    package.replace('/', "%2F")
}

impl NpmPackageResponse {
    fn into_meta(self) -> PackageMeta {
        let homepage = self
            .homepage
            .as_ref()
            .and_then(Value::as_str)
            .filter(|h| !h.is_empty())
            .or_else(|| {
                self.bugs
                    .as_ref()
                    .and_then(|b| b.get("url"))
                    .and_then(Value::as_str)
                    .filter(|u| !u.is_empty())
            })
            .map(str::to_string);

        let latest = self
            .dist_tags
            .as_ref()
            .and_then(|tags| tags.get("latest"))
            .and_then(Value::as_str)
            .map(str::to_string);

        PackageMeta {
            latest,
            repository: self.repository.and_then(RepositoryField::from_value),
            homepage,
        }
    }
}

#[async_trait]
impl PackageRegistryClient for NpmRegistry {
    fn registry_name(&self) -> &'static str {
        "npm"
    }

    async fn fetch_meta(&self, package: &str) -> Result<PackageMeta, RegistryError> {
        let url = self.build_url(package);
        let response: NpmPackageResponse = self
            .client
            .get_json(&url, "application/json", None)
            .await?;

        Ok(response.into_meta())
    }
}
