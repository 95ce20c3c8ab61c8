use crate::menu::types::IconTag;

/// Display texts ending in `suffix` get `icon`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRule {
    pub suffix: String,
    pub icon: IconTag,
}

impl IconRule {
    pub fn new(suffix: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            icon: IconTag::new(icon),
        }
    }
}

/// Ordered suffix rules with a fallback; the first matching rule wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRules {
    rules: Vec<IconRule>,
    fallback: IconTag,
}

impl IconRules {
    pub fn new(rules: Vec<IconRule>, fallback: impl Into<String>) -> Self {
        Self {
            rules,
            fallback: IconTag::new(fallback),
        }
    }

    pub fn icon_for(&self, display: &str) -> IconTag {
        self.rules
            .iter()
            .find(|rule| display.ends_with(&rule.suffix))
            .map(|rule| rule.icon.clone())
            .unwrap_or_else(|| self.fallback.clone())
    }
}

impl Default for IconRules {
    fn default() -> Self {
        Self::new(
            vec![IconRule::new(".py", "python"), IconRule::new(".rs", "text-rust")],
            "nvim",
        )
    }
}
