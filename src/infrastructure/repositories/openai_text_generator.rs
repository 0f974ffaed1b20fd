use super::text_generator::TextGenerator;
use async_openai::{
    config::OpenAIConfig,
    types::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;

/// Chat completions client for any OpenAI-compatible endpoint
pub struct OpenAiTextGenerator {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
}

impl OpenAiTextGenerator {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String) -> Self {
        Self { client, model }
    }

    pub fn from_settings(api_key: &str, api_base: &str, model: &str) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_base);

        Self::new(Arc::new(Client::with_config(config)), model.to_string())
    }

    async fn call_model(&self, prompt: &str) -> Result<String, String> {
        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| format!("Invalid request: {}", e))?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages([message.into()])
            .build()
            .map_err(|e| format!("Invalid request: {}", e))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                model = %self.model,
                prompt_length = prompt.len(),
                "Chat completion call failed"
            );
            e.to_string()
        })?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| "Model returned no text".to_string())
    }
}

#[async_trait]
impl TextGenerator for OpenAiTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, String> {
        let start_time = std::time::Instant::now();

        tracing::debug!(
            model = %self.model,
            prompt_length = prompt.len(),
            "Calling chat completions API"
        );

        let text = self.call_model(prompt).await?;

        tracing::info!(
            model = %self.model,
            latency_ms = start_time.elapsed().as_millis(),
            prompt_length = prompt.len(),
            response_length = text.len(),
            "Text generation completed"
        );

        Ok(text)
    }
}
