//! Minimal document model for scroll choreography.

/// A laid-out node of a scrollable page.
///
/// `top` is measured in rows from the top of the document, not of its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNode {
    pub id: String,
    pub classes: Vec<String>,
    pub top: u16,
    pub height: u16,
    pub children: Vec<PageNode>,
}

impl PageNode {
    pub fn new(id: impl Into<String>, top: u16, height: u16) -> Self {
        Self {
            id: id.into(),
            classes: Vec::new(),
            top,
            height,
            children: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_child(mut self, child: PageNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }

    /// Find a node by id, including `self`
    pub fn find(&self, id: &str) -> Option<&PageNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// All nodes below `self` in document order
    pub fn descendants(&self) -> Vec<&PageNode> {
        let mut out = Vec::new();
        for child in &self.children {
            out.push(child);
            out.extend(child.descendants());
        }
        out
    }
}
