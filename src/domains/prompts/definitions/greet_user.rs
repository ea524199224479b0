//! Greeting prompt definition.

use rmcp::model::PromptArgument;
use std::collections::HashMap;
use std::str::FromStr;

use super::PromptDefinition;

/// Tone requested from the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GreetingStyle {
    #[default]
    Friendly,
    Formal,
    Casual,
}

impl GreetingStyle {
    pub fn instruction(self) -> &'static str {
        match self {
            Self::Friendly => "Please write a warm, friendly greeting",
            Self::Formal => "Please write a formal, professional greeting",
            Self::Casual => "Please write a casual, relaxed greeting",
        }
    }
}

impl FromStr for GreetingStyle {
    type Err = String;

    /// Only the exact lowercase names are recognized.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "friendly" => Ok(Self::Friendly),
            "formal" => Ok(Self::Formal),
            "casual" => Ok(Self::Casual),
            other => Err(format!("unknown greeting style: {}", other)),
        }
    }
}

/// Ask the model to greet someone in a given style.
pub struct GreetUserPrompt;

impl PromptDefinition for GreetUserPrompt {
    const NAME: &'static str = "greet_user";
    const DESCRIPTION: &'static str = "Generate a greeting prompt";

    fn template() -> &'static str {
        "{{instruction}} for someone named {{name}}."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            PromptArgument {
                name: "name".to_string(),
                title: None,
                description: Some("The name to greet".to_string()),
                required: Some(true),
            },
            PromptArgument {
                name: "style".to_string(),
                title: None,
                description: Some(
                    "Greeting style: friendly (default), formal or casual".to_string(),
                ),
                required: Some(false),
            },
        ]
    }

    fn prepare(arguments: &mut HashMap<String, String>) {
        // Unknown styles fall back to the default rather than failing.
        let style = arguments
            .get("style")
            .and_then(|s| s.parse::<GreetingStyle>().ok())
            .unwrap_or_default();
        arguments.insert("instruction".to_string(), style.instruction().to_string());
    }
}
