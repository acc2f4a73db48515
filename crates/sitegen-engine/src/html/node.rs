use super::{Attributes, HtmlError};

/// A node that renders a single value and never has children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub attributes: Attributes,
}

impl LeafNode {
    pub fn new(tag: Option<&str>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.map(str::to_string),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Raw text with no surrounding tag.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(None, value)
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Serializes the leaf.
    ///
    /// # Errors
    /// - [`HtmlError::MissingValue`] if there is no value
    /// - [`HtmlError::TaglessAttributes`] if attributes are set without a tag
    pub fn to_html(&self) -> Result<String, HtmlError> {
        let Some(value) = &self.value else {
            return Err(HtmlError::MissingValue {
                tag: self.tag.clone(),
            });
        };
        match &self.tag {
            None if !self.attributes.is_empty() => Err(HtmlError::TaglessAttributes {
                attributes: self.attributes.to_html(),
            }),
            None => Ok(value.clone()),
            Some(tag) => Ok(format!("<{tag}{}>{value}</{tag}>", self.attributes)),
        }
    }
}

/// A node that wraps an ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: Option<String>,
    pub children: Vec<HtmlNode>,
    pub attributes: Attributes,
}

impl ParentNode {
    pub fn new(tag: Option<&str>, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: tag.map(str::to_string),
            children,
            attributes: Attributes::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Serializes the children in order, wrapped in the tag if there is one.
    ///
    /// # Errors
    /// [`HtmlError::MissingChildren`] if there are no children, or the
    /// first error from any descendant.
    pub fn to_html(&self) -> Result<String, HtmlError> {
        if self.children.is_empty() {
            return Err(HtmlError::MissingChildren {
                tag: self.tag.clone(),
            });
        }
        let inner = self
            .children
            .iter()
            .map(HtmlNode::to_html)
            .collect::<Result<String, _>>()?;
        Ok(match &self.tag {
            Some(tag) => format!("<{tag}{}>{inner}</{tag}>", self.attributes),
            None => inner,
        })
    }
}

/// An HTML tree node: either a leaf or a parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    /// Shorthand for a leaf node.
    pub fn leaf(tag: Option<&str>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf(LeafNode::new(tag, value))
    }

    /// Shorthand for a parent node.
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent(ParentNode::new(Some(tag), children))
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(n) => n.tag.as_deref(),
            HtmlNode::Parent(n) => n.tag.as_deref(),
        }
    }

    /// The leaf value; parents never have one.
    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(n) => n.value.as_deref(),
            HtmlNode::Parent(_) => None,
        }
    }

    /// The children; leaves always have none.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf(_) => &[],
            HtmlNode::Parent(n) => &n.children,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf(n) => &n.attributes,
            HtmlNode::Parent(n) => &n.attributes,
        }
    }

    pub fn to_html(&self) -> Result<String, HtmlError> {
        match self {
            HtmlNode::Leaf(n) => n.to_html(),
            HtmlNode::Parent(n) => n.to_html(),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(node: LeafNode) -> Self {
        HtmlNode::Leaf(node)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(node: ParentNode) -> Self {
        HtmlNode::Parent(node)
    }
}
