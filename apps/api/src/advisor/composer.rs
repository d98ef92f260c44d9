//! Prompt composer — deterministically builds a (system, user) prompt pair
//! from a request category and its typed fields.
//!
//! Pure string construction: no validation beyond what the HTTP layer does,
//! no side effects, identical inputs always yield identical output. The
//! persona templates are rendered once at construction time with the
//! organization parameters; nothing request-derived reaches a system prompt.

use crate::advisor::prompts::{
    CHAT_SYSTEM_TEMPLATE, COMPLIANCE_CLOSING, COMPLIANCE_SYSTEM_TEMPLATE, DUE_DILIGENCE_CLOSING,
    DUE_DILIGENCE_SYSTEM_TEMPLATE, RISK_CLOSING, RISK_SYSTEM_TEMPLATE,
};
use crate::config::Config;

/// A composed (system, user) prompt pair ready for one completion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    pub system: String,
    pub user: String,
}

#[derive(Debug, Clone)]
pub struct PromptComposer {
    chat_system: String,
    risk_system: String,
    compliance_system: String,
    due_diligence_system: String,
}

impl PromptComposer {
    pub fn new(config: &Config) -> Self {
        Self {
            chat_system: render(CHAT_SYSTEM_TEMPLATE, config),
            risk_system: render(RISK_SYSTEM_TEMPLATE, config),
            compliance_system: render(COMPLIANCE_SYSTEM_TEMPLATE, config),
            due_diligence_system: render(DUE_DILIGENCE_SYSTEM_TEMPLATE, config),
        }
    }

    /// General chat. An optional context string becomes a labeled section
    /// ahead of the query.
    pub fn chat(&self, message: &str, context: Option<&str>) -> ComposedPrompt {
        let user = match context {
            Some(context) => format!("Context: {context}\n\nQuery: {message}"),
            None => message.to_string(),
        };
        ComposedPrompt {
            system: self.chat_system.clone(),
            user,
        }
    }

    /// Risk analysis over free-form business data, optionally narrowed to
    /// specific risk areas.
    pub fn risk_analysis(
        &self,
        business_data: &str,
        risk_areas: Option<&[String]>,
    ) -> ComposedPrompt {
        let mut user = format!("Business Data:\n{business_data}\n\n");
        if let Some(areas) = risk_areas.filter(|a| !a.is_empty()) {
            user.push_str(&format!(
                "Focus on these risk areas: {}\n\n",
                areas.join(", ")
            ));
        }
        user.push_str(RISK_CLOSING);
        ComposedPrompt {
            system: self.risk_system.clone(),
            user,
        }
    }

    /// Document review against a named compliance framework.
    pub fn compliance_check(&self, document: &str, framework: &str) -> ComposedPrompt {
        let user = format!(
            "Document to review:\n{document}\n\nCompliance Framework: {framework}\n\n{COMPLIANCE_CLOSING}"
        );
        ComposedPrompt {
            system: self.compliance_system.clone(),
            user,
        }
    }

    /// Due diligence on company information, optionally scoped to focus areas.
    pub fn due_diligence(
        &self,
        company_info: &str,
        focus_areas: Option<&[String]>,
    ) -> ComposedPrompt {
        let mut user = format!("Company Information:\n{company_info}\n\n");
        if let Some(areas) = focus_areas.filter(|a| !a.is_empty()) {
            user.push_str(&format!("Focus areas: {}\n\n", areas.join(", ")));
        }
        user.push_str(DUE_DILIGENCE_CLOSING);
        ComposedPrompt {
            system: self.due_diligence_system.clone(),
            user,
        }
    }
}

fn render(template: &str, config: &Config) -> String {
    template
        .replace("{org_name}", &config.org_name)
        .replace("{risk_tolerance}", &config.risk_tolerance)
        .replace("{primary_market}", &config.primary_market)
}
