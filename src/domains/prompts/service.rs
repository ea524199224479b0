//! Lists and renders the registered prompts.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::HashMap;
use tracing::debug;

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::PromptTemplate;

/// Prompts in registration order; `prompts/list` returns them in that order.
pub struct PromptService {
    prompts: Vec<PromptTemplate>,
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptService {
    pub fn new() -> Self {
        let prompts = get_all_prompts();
        debug!("Registered {} prompt(s)", prompts.len());
        Self { prompts }
    }

    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts
            .iter()
            .map(|template| Prompt {
                name: template.name.clone(),
                title: None,
                description: template.description.clone(),
                arguments: Some(template.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Render `name` as a single user message.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let template = self
            .prompts
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| PromptError::not_found(name))?;

        let text = template.instantiate(arguments.unwrap_or_default())?;

        Ok(GetPromptResult {
            description: template.description.clone(),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn text_of(result: &GetPromptResult) -> String {
        let content = serde_json::to_value(&result.messages[0].content).unwrap();
        content["text"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_list_prompts() {
        let prompts = PromptService::new().list_prompts().await;
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].name, "greet_user");
    }

    #[tokio::test]
    async fn test_greet_user_formal() {
        let result = PromptService::new()
            .get_prompt("greet_user", args(&[("name", "Ana"), ("style", "formal")]))
            .await
            .unwrap();
        assert_eq!(
            text_of(&result),
            "Please write a formal, professional greeting for someone named Ana."
        );
    }

    #[tokio::test]
    async fn test_greet_user_default_style() {
        let result = PromptService::new()
            .get_prompt("greet_user", args(&[("name", "Ana")]))
            .await
            .unwrap();
        assert_eq!(
            text_of(&result),
            "Please write a warm, friendly greeting for someone named Ana."
        );
    }

    #[tokio::test]
    async fn test_greet_user_unknown_style_falls_back() {
        let result = PromptService::new()
            .get_prompt(
                "greet_user",
                args(&[("name", "Ana"), ("style", "unknown-style")]),
            )
            .await
            .unwrap();
        assert_eq!(
            text_of(&result),
            "Please write a warm, friendly greeting for someone named Ana."
        );
    }

    #[tokio::test]
    async fn test_greet_user_style_is_case_sensitive() {
        let result = PromptService::new()
            .get_prompt("greet_user", args(&[("name", "Ana"), ("style", "FORMAL")]))
            .await
            .unwrap();
        assert_eq!(
            text_of(&result),
            "Please write a warm, friendly greeting for someone named Ana."
        );
    }

    #[tokio::test]
    async fn test_greet_user_missing_name() {
        let result = PromptService::new()
            .get_prompt("greet_user", args(&[("style", "casual")]))
            .await;
        assert!(matches!(result, Err(PromptError::MissingArgument(_))));
    }

    #[tokio::test]
    async fn test_get_nonexistent_prompt() {
        let result = PromptService::new().get_prompt("nonexistent", None).await;
        assert!(matches!(result, Err(PromptError::NotFound(_))));
    }
}
