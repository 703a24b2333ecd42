//! Reply normalization.
//!
//! Provider replies are SOAP envelopes whose interesting content sits under a
//! `response` (or `Response`) element. [`CanonicalReply::parse`] flattens
//! that content into a two-level, lower-cased mapping:
//!
//! ```text
//! <response>                                  {
//!   <ExpressResponseCode>0</...>       ──►      "expressresponsecode": "0",
//!   <Card><AVSResponseCode>M</...></Card>       "card": { "avsresponsecode": "M" }
//! </response>                                 }
//! ```
//!
//! Only two levels are kept. A grandchild that itself has children is stored
//! with the concatenated text of its subtree. Callers needing anything deeper
//! can re-read the untouched reply from
//! [`Response::raw_reply`](crate::response::Response::raw_reply).
//!
//! Leaf text is kept verbatim, surrounding whitespace included. Only the
//! whitespace-only indentation between child elements is discarded.

use std::collections::BTreeMap;

use quick_xml::Reader;
use quick_xml::events::Event;
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;

/// Root element names, tried in order.
pub const ROOT_CANDIDATES: [&str; 2] = ["response", "Response"];

/// A value in the canonical mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Field {
    /// Text of a leaf element.
    Scalar(String),
    /// Children of a branch element, by lower-cased name.
    Branch(BTreeMap<String, String>),
}

impl Field {
    /// The scalar value, if this is a leaf.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => Some(value),
            Self::Branch(_) => None,
        }
    }

    /// The child mapping, if this is a branch.
    #[must_use]
    pub const fn as_branch(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::Branch(children) => Some(children),
            Self::Scalar(_) => None,
        }
    }
}

/// Canonical, case-folded view of a provider reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalReply(BTreeMap<String, Field>);

impl CanonicalReply {
    /// Parses a raw reply.
    ///
    /// Namespace prefixes are ignored. If neither root candidate has child
    /// elements the mapping is empty.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::MalformedReply`] if the text is not a
    /// well-formed XML document.
    pub fn parse(xml: &str) -> Result<Self, GatewayError> {
        let document = Node::parse_document(xml)?;
        let mut fields = BTreeMap::new();

        let Some(nodes) = ROOT_CANDIDATES
            .iter()
            .map(|name| document.children_of_all(name))
            .find(|nodes| !nodes.is_empty())
        else {
            return Ok(Self(fields));
        };

        for node in nodes {
            let name = node.name.to_lowercase();
            let field = if node.is_leaf() {
                Field::Scalar(node.text_content())
            } else {
                Field::Branch(
                    node.children()
                        .map(|child| (child.name.to_lowercase(), child.text_content()))
                        .collect(),
                )
            };
            fields.insert(name, field);
        }

        Ok(Self(fields))
    }

    /// Looks up a top-level field, case-insensitively.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.0.get(&name.to_lowercase())
    }

    /// Looks up a top-level scalar.
    #[must_use]
    pub fn scalar(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Field::as_scalar)
    }

    /// Looks up a top-level branch.
    #[must_use]
    pub fn branch(&self, name: &str) -> Option<&BTreeMap<String, String>> {
        self.get(name).and_then(Field::as_branch)
    }

    /// Looks up a value inside a branch.
    #[must_use]
    pub fn branch_value(&self, branch: &str, name: &str) -> Option<&str> {
        self.branch(branch)
            .and_then(|children| children.get(&name.to_lowercase()))
            .map(String::as_str)
    }

    /// Number of top-level fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the reply had no recognizable content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the top-level fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.0.iter().map(|(name, field)| (name.as_str(), field))
    }
}

impl FromIterator<(String, Field)> for CanonicalReply {
    fn from_iter<I: IntoIterator<Item = (String, Field)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, field)| (name.to_lowercase(), field))
                .collect(),
        )
    }
}

/// Minimal element tree used while normalizing.
#[derive(Debug, Default)]
struct Node {
    name: String,
    content: Vec<Content>,
}

#[derive(Debug)]
enum Content {
    Text(String),
    Element(Node),
}

impl Node {
    fn new(name: String) -> Self {
        Self {
            name,
            content: Vec::new(),
        }
    }

    fn parse_document(xml: &str) -> Result<Self, GatewayError> {
        let mut reader = Reader::from_str(xml);

        let malformed = |reader: &Reader<&[u8]>, message: String| {
            GatewayError::MalformedReply(format!(
                "{message} (at byte {})",
                reader.buffer_position()
            ))
        };

        let mut stack: Vec<Self> = Vec::new();
        let mut root: Option<Self> = None;

        loop {
            let event = reader
                .read_event()
                .map_err(|e| malformed(&reader, e.to_string()))?;
            match event {
                Event::Start(start) => stack.push(Self::new(local_name(start.local_name().as_ref()))),
                Event::Empty(start) => {
                    let node = Self::new(local_name(start.local_name().as_ref()));
                    attach(&mut stack, &mut root, node)
                        .map_err(|message| malformed(&reader, message))?;
                }
                Event::End(_) => {
                    let mut node = stack
                        .pop()
                        .ok_or_else(|| malformed(&reader, "unexpected closing tag".to_owned()))?;
                    node.drop_indentation();
                    attach(&mut stack, &mut root, node)
                        .map_err(|message| malformed(&reader, message))?;
                }
                Event::Text(text) => {
                    let text = text
                        .unescape()
                        .map_err(|e| malformed(&reader, e.to_string()))?;
                    if let Some(parent) = stack.last_mut() {
                        parent.content.push(Content::Text(text.into_owned()));
                    }
                }
                Event::CData(data) => {
                    if let Some(parent) = stack.last_mut() {
                        let text = String::from_utf8_lossy(&data.into_inner()).into_owned();
                        parent.content.push(Content::Text(text));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(malformed(
                &reader,
                format!("document ended inside <{}>", open.name),
            ));
        }
        root.ok_or_else(|| malformed(&reader, "document has no root element".to_owned()))
    }

    /// Removes whitespace-only text between child elements.
    fn drop_indentation(&mut self) {
        if !self.is_leaf() {
            self.content.retain(|content| {
                !matches!(content, Content::Text(text) if text.trim().is_empty())
            });
        }
    }

    fn children(&self) -> impl Iterator<Item = &Self> {
        self.content.iter().filter_map(|content| match content {
            Content::Element(node) => Some(node),
            Content::Text(_) => None,
        })
    }

    fn is_leaf(&self) -> bool {
        self.children().next().is_none()
    }

    fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        for content in &self.content {
            match content {
                Content::Text(text) => out.push_str(text),
                Content::Element(node) => node.collect_text(out),
            }
        }
    }

    /// Children of every element named `name`, in document order.
    fn children_of_all(&self, name: &str) -> Vec<&Self> {
        let mut found = Vec::new();
        self.collect_children_of(name, &mut found);
        found
    }

    fn collect_children_of<'a>(&'a self, name: &str, out: &mut Vec<&'a Self>) {
        if self.name == name {
            out.extend(self.children());
        }
        for child in self.children() {
            child.collect_children_of(name, out);
        }
    }
}

fn local_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn attach(stack: &mut [Node], root: &mut Option<Node>, node: Node) -> Result<(), String> {
    if let Some(parent) = stack.last_mut() {
        parent.content.push(Content::Element(node));
        Ok(())
    } else if root.is_none() {
        *root = Some(node);
        Ok(())
    } else {
        Err(format!("second root element <{}>", node.name))
    }
}
