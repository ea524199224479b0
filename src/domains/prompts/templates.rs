//! `{{variable}}` substitution for prompt text.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;

/// Hook run on the caller's arguments before substitution.
pub type PrepareFn = fn(&mut HashMap<String, String>);

#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub name: String,
    pub description: Option<String>,
    pub arguments: Vec<PromptArgument>,
    pub template: String,
    pub prepare: PrepareFn,
}

impl PromptTemplate {
    #[cfg(test)]
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            arguments,
            template: template.into(),
            prepare: |_| {},
        }
    }

    /// Check required arguments, run the prepare hook, then render.
    pub fn instantiate(&self, mut arguments: HashMap<String, String>) -> Result<String, PromptError> {
        if let Some(missing) = self
            .arguments
            .iter()
            .find(|arg| arg.required.unwrap_or(false) && !arguments.contains_key(&arg.name))
        {
            return Err(PromptError::missing_argument(&missing.name));
        }

        (self.prepare)(&mut arguments);
        Ok(self.render(&arguments))
    }

    /// Placeholders without a matching argument render as nothing. Argument
    /// values are inserted verbatim and never re-scanned, so a value that
    /// itself looks like `{{x}}` survives.
    pub fn render(&self, arguments: &HashMap<String, String>) -> String {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(open) = rest.find("{{") {
            let Some(close) = rest[open + 2..].find("}}") else {
                break;
            };
            out.push_str(&rest[..open]);
            let key = rest[open + 2..open + 2 + close].trim();
            if let Some(value) = arguments.get(key) {
                out.push_str(value);
            }
            rest = &rest[open + 2 + close + 2..];
        }

        out.push_str(rest);
        out
    }
}
