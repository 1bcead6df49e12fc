//! Per-element accumulation state.
//!
//! An [`ElementFrame`] collects everything that arrives between an element's
//! open and close events: its text chunks and its finished children. On
//! close the frame is consumed by [`ElementFrame::finalize`] and becomes a
//! [`Node`] handed to the parent frame.
//!
//! Finalization rules, in order:
//!
//! 1. The document frame becomes an object of its folded children.
//! 2. An element with attributes or children becomes an object: children are
//!    folded first, then non-blank text is set under the value key, then each
//!    attribute is inferred and folded under its (optionally prefixed) key.
//! 3. Any other element is a leaf: blank text gives [`Node::Null`], otherwise
//!    the inferred value of the trimmed text.

use crate::error::{ConvertError, Result};
use crate::fold::{fold, fold_all};
use crate::infer::infer;
use crate::node::Node;
use crate::options::ConvertOptions;

/// Name reported for the implicit document-level frame.
pub const DOCUMENT_NAME: &str = "#document";

#[derive(Debug, Clone, PartialEq)]
enum FrameKind {
    Document,
    Element {
        name: String,
        attributes: Vec<(String, String)>,
    },
}

/// Mutable state of one open element (or of the document itself).
#[derive(Debug, Clone, PartialEq)]
pub struct ElementFrame {
    kind: FrameKind,
    text: String,
    /// Finished children in arrival order. Duplicate keys are expected and
    /// only resolved by folding at finalization.
    children: Vec<(String, Node)>,
}

impl ElementFrame {
    /// The implicit top-level frame. It has no name, attributes, or text.
    pub fn document() -> Self {
        Self {
            kind: FrameKind::Document,
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// A frame for an opened element. `attributes` is captured once and never
    /// changes afterwards.
    pub fn element(name: impl Into<String>, attributes: Vec<(String, String)>) -> Self {
        Self {
            kind: FrameKind::Element {
                name: name.into(),
                attributes,
            },
            text: String::new(),
            children: Vec::new(),
        }
    }

    pub fn is_document(&self) -> bool {
        matches!(self.kind, FrameKind::Document)
    }

    /// The element name, or [`DOCUMENT_NAME`] for the document frame.
    pub fn name(&self) -> &str {
        match &self.kind {
            FrameKind::Document => DOCUMENT_NAME,
            FrameKind::Element { name, .. } => name,
        }
    }

    pub fn attributes(&self) -> &[(String, String)] {
        match &self.kind {
            FrameKind::Document => &[],
            FrameKind::Element { attributes, .. } => attributes,
        }
    }

    /// Accumulated text with surrounding whitespace trimmed.
    pub fn text(&self) -> &str {
        self.text.trim()
    }

    pub fn children(&self) -> &[(String, Node)] {
        &self.children
    }

    /// Append a character-data chunk.
    ///
    /// Whitespace-only chunks next to child elements (and at document level)
    /// are dropped. Non-blank chunks in those positions are mixed content.
    pub fn append_text(&mut self, chunk: &str) -> Result<()> {
        let blank = chunk.trim().is_empty();
        if self.is_document() || !self.children.is_empty() {
            if blank {
                return Ok(());
            }
            return Err(self.mixed_content());
        }
        self.text.push_str(chunk);
        Ok(())
    }

    /// Fails when this frame already holds non-blank text, since a child
    /// element would then sit next to character data.
    pub fn check_accepts_child(&self) -> Result<()> {
        if self.text().is_empty() {
            Ok(())
        } else {
            Err(self.mixed_content())
        }
    }

    /// Record a finished child under `key`.
    pub fn push_child(&mut self, key: impl Into<String>, node: Node) {
        self.children.push((key.into(), node));
    }

    /// Consume the frame and produce its node.
    pub fn finalize(self, options: &ConvertOptions) -> Node {
        let ElementFrame {
            kind,
            text,
            children,
        } = self;

        let attributes = match kind {
            FrameKind::Document => return Node::Object(fold_all(children)),
            FrameKind::Element { attributes, .. } => attributes,
        };
        let text = text.trim();

        if attributes.is_empty() && children.is_empty() {
            return if text.is_empty() {
                Node::Null
            } else {
                infer(text, options.primitives)
            };
        }

        let mut object = fold_all(children);
        if !text.is_empty() {
            object.insert(options.value_key.clone(), infer(text, options.primitives));
        }
        for (name, raw) in attributes {
            fold(
                &mut object,
                options.attribute_key(&name),
                infer(&raw, options.primitives),
            );
        }
        Node::Object(object)
    }

    fn mixed_content(&self) -> ConvertError {
        ConvertError::MixedContent {
            element: self.name().to_string(),
        }
    }
}
