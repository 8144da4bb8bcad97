use std::str::FromStr;

use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Fleet size choices offered by the intake form
#[derive(EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq)]
pub enum AgentCount {
    #[strum(serialize = "Just exploring")]
    JustExploring,
    #[strum(serialize = "1-5 agents")]
    Few,
    #[strum(serialize = "6-20 agents")]
    Several,
    #[strum(serialize = "20+ agents")]
    Many,
    #[strum(serialize = "Enterprise scale")]
    Enterprise,
}

/// Primary use case choices offered by the intake form
#[derive(EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq)]
pub enum UseCase {
    #[strum(serialize = "RAG / Knowledge Management")]
    KnowledgeManagement,
    #[strum(serialize = "Multi-Agent Coordination")]
    MultiAgentCoordination,
    #[strum(serialize = "Agent-to-Agent Communication")]
    AgentToAgentCommunication,
    #[strum(serialize = "Custom MCP Tools")]
    CustomMcpTools,
    #[strum(serialize = "Full Stack Agent Infrastructure")]
    FullStack,
    #[strum(serialize = "Other")]
    Other,
}

impl AgentCount {
    pub fn labels() -> Vec<&'static str> {
        Self::VARIANTS.iter().map(|v| v.as_ref()).collect()
    }

    pub fn is_known(label: &str) -> bool {
        Self::from_str(label).is_ok()
    }
}

impl UseCase {
    pub fn labels() -> Vec<&'static str> {
        Self::VARIANTS.iter().map(|v| v.as_ref()).collect()
    }

    pub fn is_known(label: &str) -> bool {
        Self::from_str(label).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_count_labels_keep_form_order() {
        assert_eq!(
            AgentCount::labels(),
            vec![
                "Just exploring",
                "1-5 agents",
                "6-20 agents",
                "20+ agents",
                "Enterprise scale",
            ]
        );
    }

    #[test]
    fn test_use_case_labels_keep_form_order() {
        let labels = UseCase::labels();

        assert_eq!(labels.len(), 6);
        assert_eq!(labels.first(), Some(&"RAG / Knowledge Management"));
        assert_eq!(labels.last(), Some(&"Other"));
    }

    #[test]
    fn test_is_known() {
        assert!(AgentCount::is_known("20+ agents"));
        assert!(!AgentCount::is_known("a lot"));
        assert!(UseCase::is_known("Custom MCP Tools"));
        assert!(!UseCase::is_known("custom mcp tools"));
    }
}
