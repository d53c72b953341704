use super::models::{AiConfig, AiMessage};
use async_trait::async_trait;
use std::error::Error;

#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Sends a chat completion request to the AI provider.
    ///
    /// Returns the first generated message's text. Transport and API
    /// failures surface as a single opaque error; callers don't get to
    /// distinguish a timeout from a quota failure.
    async fn chat_complete(
        &self,
        messages: &[AiMessage],
        config: &AiConfig,
    ) -> Result<String, Box<dyn Error + Send + Sync>>;
}

pub struct AiService<P: AiProvider> {
    provider: P,
    system_prompt: String,
    config: AiConfig,
}

impl<P: AiProvider> AiService<P> {
    pub fn new(provider: P, system_prompt: String, config: AiConfig) -> Self {
        Self {
            provider,
            system_prompt,
            config,
        }
    }

    /// Generates a reply for a single user prompt.
    ///
    /// Exactly one provider call per invocation. No caching, no retry;
    /// a failed prompt is the user's to resend.
    pub async fn generate(&self, prompt: &str) -> Result<String, Box<dyn Error + Send + Sync>> {
        let messages = [
            AiMessage::system(self.system_prompt.clone()),
            AiMessage::user(prompt),
        ];

        self.provider.chat_complete(&messages, &self.config).await
    }
}
