use super::page::PageNode;

/// Node selector: `.class`, `#id` or `*`. A bare word is treated as a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Class(String),
    Id(String),
    Any,
}

impl Selector {
    pub fn parse(selector: &str) -> Self {
        let selector = selector.trim();
        if selector == "*" {
            Self::Any
        } else if let Some(id) = selector.strip_prefix('#') {
            Self::Id(id.to_string())
        } else {
            Self::Class(selector.trim_start_matches('.').to_string())
        }
    }

    pub fn matches(&self, node: &PageNode) -> bool {
        match self {
            Self::Class(class) => node.has_class(class),
            Self::Id(id) => node.id == *id,
            Self::Any => true,
        }
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::Class("reveal-marker".to_string())
    }
}
