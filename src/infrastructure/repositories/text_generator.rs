use async_trait::async_trait;

/// Text generation backend for report synthesis.
/// Abstracts the underlying model provider (Gemini, OpenAI or any compatible endpoint)
///
/// Implementations send the prompt as a single user message and return the
/// model's text reply.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for `prompt`
    ///
    /// # Errors
    /// Returns a provider error message if the call fails or the reply has no text
    async fn generate(&self, prompt: &str) -> Result<String, String>;
}
