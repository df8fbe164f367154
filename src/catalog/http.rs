use super::{CatalogSource, EXCLUDED_TYPE_ID, EffectRecord, ItemsPage, LevelRange, RecipeRecord};
use crate::error::FetchError;
use serde::de::DeserializeOwned;
use tracing::trace;

/// Default address of the public catalog API.
pub const DEFAULT_API_URL: &str = "https://api.dofusdb.fr";

/// [`CatalogSource`] backed by the public HTTP API.
pub struct HttpCatalog {
    base_url: String,
    agent: ureq::Agent,
}

impl Default for HttpCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl HttpCatalog {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends the request and decodes a `200 OK` JSON body. Any other status is a [`FetchError`].
    fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        request: ureq::Request,
    ) -> Result<T, FetchError> {
        trace!(url, "GET");
        let response = match request.call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, _)) => {
                return Err(FetchError::Status {
                    url: url.to_string(),
                    status,
                });
            }
            Err(other) => {
                return Err(FetchError::Transport {
                    url: url.to_string(),
                    message: other.to_string(),
                });
            }
        };

        if response.status() != 200 {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        response.into_json().map_err(|e| FetchError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

impl CatalogSource for HttpCatalog {
    fn items_page(
        &self,
        category_id: u32,
        levels: LevelRange,
        skip: u32,
    ) -> Result<ItemsPage, FetchError> {
        let url = format!("{}/items", self.base_url);
        let request = self
            .agent
            .get(&url)
            .query("typeId[$ne]", &EXCLUDED_TYPE_ID.to_string())
            .query("typeId[$in][]", &category_id.to_string())
            .query("level[$gte]", &levels.min().to_string())
            .query("level[$lte]", &levels.max().to_string())
            .query("$sort", "-level")
            .query("$skip", &skip.to_string())
            .query("lang", "fr");
        self.get_json(&url, request)
    }

    fn effect_description(&self, effect_id: u64) -> Result<String, FetchError> {
        let url = format!("{}/effects/{}", self.base_url, effect_id);
        let record: EffectRecord = self.get_json(&url, self.agent.get(&url))?;
        Ok(record.description.fr)
    }

    fn recipe(&self, item_id: u64) -> Result<RecipeRecord, FetchError> {
        let url = format!("{}/recipes/{}", self.base_url, item_id);
        self.get_json(&url, self.agent.get(&url))
    }
}
