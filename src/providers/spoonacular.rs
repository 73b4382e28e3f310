use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::config::RecipeApiConfig;
use crate::error::Error;
use crate::model::RecipeSummary;
use crate::providers::RecipeProvider;

/// Raw recipe detail payload as the provider returns it.
///
/// This is deliberately close to the wire shape; the assembler turns it
/// into the canonical [`crate::model::Recipe`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(default)]
    pub extended_ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub analyzed_instructions: Vec<InstructionGroup>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub nutrition: Option<NutritionPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ingredient {
    pub original: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstructionGroup {
    #[serde(default)]
    pub steps: Vec<InstructionStep>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InstructionStep {
    pub step: String,
}

/// Nutrition section of the detail payload. Its presence or absence
/// drives the assembler's two-tier nutrition default.
#[derive(Debug, Clone, Deserialize)]
pub struct NutritionPayload {
    #[serde(default)]
    pub nutrients: Vec<Nutrient>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Nutrient {
    pub name: String,
    pub amount: f64,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<RecipeSummary>,
}

/// Client for the Spoonacular recipe API
pub struct SpoonacularClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SpoonacularClient {
    /// Create a new client from configuration
    ///
    /// The API key is taken from config first, then from the
    /// SPOONACULAR_API_KEY environment variable.
    pub fn new(config: &RecipeApiConfig) -> Result<Self, Error> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("SPOONACULAR_API_KEY").ok())
            .ok_or(Error::MissingApiKey("SPOONACULAR_API_KEY"))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .user_agent("recipe-relay/0.1")
            .build()?;

        Ok(SpoonacularClient {
            client,
            api_key,
            base_url: config.base_url.clone(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        SpoonacularClient {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Map provider error responses onto the error taxonomy. The quota
    /// signal arrives either as HTTP 402 or as `code: 402` in the body
    /// of a failed response; both must stay distinct from generic
    /// failures so the caller can tell the user what actually went
    /// wrong.
    async fn check_response(response: Response, id: Option<i64>) -> Result<Response, Error> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body: Value = response.json().await.unwrap_or(Value::Null);
        if status == StatusCode::PAYMENT_REQUIRED || body["code"].as_i64() == Some(402) {
            error!("spoonacular quota exceeded");
            return Err(Error::QuotaExceeded);
        }
        if status == StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return Err(Error::NotFound(id));
            }
        }
        Err(Error::Provider(format!(
            "spoonacular returned status {status}"
        )))
    }
}

#[async_trait]
impl RecipeProvider for SpoonacularClient {
    fn provider_name(&self) -> &str {
        "spoonacular"
    }

    async fn search(
        &self,
        query: Option<&str>,
        limit: u32,
    ) -> Result<Vec<RecipeSummary>, Error> {
        let mut request = self
            .client
            .get(format!("{}/recipes/complexSearch", self.base_url))
            .query(&[("number", limit.to_string())])
            .query(&[("addRecipeInformation", "true")])
            .query(&[("apiKey", self.api_key.as_str())]);

        if let Some(query) = query {
            request = request.query(&[("query", query)]);
        }

        let response = request.send().await?;
        let response = Self::check_response(response, None).await?;

        let body: SearchResponse = response.json().await?;
        debug!("spoonacular search returned {} results", body.results.len());
        Ok(body.results)
    }

    async fn detail(&self, id: i64) -> Result<RecipeDetail, Error> {
        let response = self
            .client
            .get(format!("{}/recipes/{}/information", self.base_url, id))
            .query(&[("includeNutrition", "true")])
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await?;
        let response = Self::check_response(response, Some(id)).await?;

        let detail: RecipeDetail = response.json().await?;
        Ok(detail)
    }
}
