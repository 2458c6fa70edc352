use async_trait::async_trait;
use mealplanner_shared::{Error, Meal, Result, bail};
use serde::{Deserialize, Serialize};

use crate::{MealQuery, extract_meals};

const SYSTEM_PROMPT: &str =
    "You are a meal planner AI. Respond ONLY with valid JSON. No extra commentary, no markdown.";

/// Anything able to propose new meals for a query.
#[async_trait]
pub trait MealSource: Send + Sync {
    async fn fetch_meals(&self, query: &MealQuery) -> Result<Vec<Meal>>;
}

#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: String,
    pub max_tokens: u32,
}

#[derive(Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: ChatRole,
    #[serde(default)]
    content: String,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: Option<ChatMessage>,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

/// Chat-completions client for OpenRouter compatible endpoints.
///
/// One request per call: no retry, no timeout.
pub struct OpenRouterClient {
    http: reqwest::Client,
    config: OpenRouterConfig,
}

impl OpenRouterClient {
    pub fn new(config: OpenRouterConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Sends `prompt` and returns the first choice's text, empty when the
    /// response carries none.
    #[tracing::instrument(skip_all, fields(model = %self.config.model))]
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        if self.config.api_key.is_empty() {
            bail!("assistant api key is not configured");
        }

        let body = ChatCompletionBody {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: ChatRole::System,
                    content: SYSTEM_PROMPT.to_owned(),
                },
                ChatMessage {
                    role: ChatRole::User,
                    content: prompt.to_owned(),
                },
            ],
            max_tokens: self.config.max_tokens,
        };

        let res = self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| Error::Unknown(err.into()))?;

        let status = res.status();
        if !status.is_success() {
            tracing::warn!(%status, "assistant request rejected");
            bail!("assistant request failed with status {status}");
        }

        let body = res
            .json::<CompletionResponse>()
            .await
            .map_err(|err| Error::MalformedExternalData(err.to_string()))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .map(|message| message.content)
            .unwrap_or_default();

        tracing::debug!(len = content.len(), "assistant replied");

        Ok(content)
    }
}

#[async_trait]
impl MealSource for OpenRouterClient {
    async fn fetch_meals(&self, query: &MealQuery) -> Result<Vec<Meal>> {
        let content = self.complete(&query.prompt()).await?;

        extract_meals(&content).inspect_err(|err| {
            tracing::error!(%err, %content, "assistant response parse failed");
        })
    }
}
