//! Event-driven tree builder.
//!
//! [`TreeBuilder`] is a stack machine fed with abstract parse events. The
//! bottom of its stack is always the document frame; every `open` pushes an
//! [`ElementFrame`], every `close` pops one, finalizes it, and records the
//! resulting node as a child of the frame below. [`TreeBuilder::finish`]
//! consumes the builder and finalizes the document frame into the root object.
//!
//! The builder is single-use. Once any event fails, every later event
//! returns [`ConvertError::Poisoned`], and `finish` taking `self` by value
//! means a completed builder cannot be fed again.
//!
//! # Example
//! ```
//! use sax2json_core::{ConvertOptions, Node, TreeBuilder};
//!
//! let mut builder = TreeBuilder::new(ConvertOptions::default());
//! builder.open("note", vec![("id".into(), "7".into())]).unwrap();
//! builder.text("hi").unwrap();
//! builder.close("note").unwrap();
//! let root = builder.finish().unwrap();
//!
//! let note = root.get("note").unwrap();
//! assert_eq!(note.get("id"), Some(&Node::from(7_i64)));
//! assert_eq!(note.get("text"), Some(&Node::from("hi")));
//! ```

use tracing::{debug, trace};

use crate::error::{ConvertError, Result};
use crate::frame::ElementFrame;
use crate::node::Node;
use crate::options::ConvertOptions;

/// Lifecycle of a [`TreeBuilder`]. Completion is not a state: `finish`
/// consumes the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    /// No element has been opened yet.
    Idle,
    /// At least one element has been opened.
    Building,
    /// An event failed; the builder only returns errors from now on.
    Failed,
}

/// Counters collected while building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertStats {
    /// Number of elements opened.
    pub elements: usize,
    /// Number of attributes captured across all elements.
    pub attributes: usize,
    /// Deepest element nesting seen (a single root element is depth 1).
    pub max_depth: usize,
}

/// Builds a [`Node`] tree for one document from open/text/close events.
#[derive(Debug)]
pub struct TreeBuilder {
    options: ConvertOptions,
    stack: Vec<ElementFrame>,
    state: BuilderState,
    stats: ConvertStats,
}

impl TreeBuilder {
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            options,
            stack: vec![ElementFrame::document()],
            state: BuilderState::Idle,
            stats: ConvertStats::default(),
        }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    pub fn state(&self) -> BuilderState {
        self.state
    }

    pub fn stats(&self) -> ConvertStats {
        self.stats
    }

    /// Number of currently open elements (the document frame is not counted).
    pub fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }

    /// Handle an element start. `attributes` are `(name, raw value)` pairs in
    /// document order.
    pub fn open(
        &mut self,
        name: impl Into<String>,
        attributes: Vec<(String, String)>,
    ) -> Result<()> {
        self.ensure_usable()?;
        let name = name.into();
        let result = self.push_frame(name, attributes);
        self.poison_on_error(result)
    }

    /// Handle a character-data chunk. Chunks are concatenated per element;
    /// trimming and inference wait until the element closes.
    pub fn text(&mut self, chunk: &str) -> Result<()> {
        self.ensure_usable()?;
        let result = self.active_frame().and_then(|frame| frame.append_text(chunk));
        self.poison_on_error(result)
    }

    /// Handle an element end. `name` must match the active element.
    pub fn close(&mut self, name: &str) -> Result<()> {
        self.ensure_usable()?;
        let result = self.pop_frame(name);
        self.poison_on_error(result)
    }

    /// Signal the end of the document and produce the root object.
    ///
    /// Fails with [`ConvertError::UnbalancedStructure`] if any element is
    /// still open; no partial tree is returned in that case.
    pub fn finish(mut self) -> Result<Node> {
        self.ensure_usable()?;
        if self.stack.len() != 1 {
            let open: Vec<&str> = self.stack[1..].iter().map(|f| f.name()).collect();
            return Err(ConvertError::UnbalancedStructure(format!(
                "document ended with {} open element(s): {}",
                open.len(),
                open.join(" > ")
            )));
        }
        let document = self.stack.pop().ok_or_else(|| {
            ConvertError::UnbalancedStructure("document frame is missing".to_string())
        })?;
        debug!(
            elements = self.stats.elements,
            attributes = self.stats.attributes,
            max_depth = self.stats.max_depth,
            "document complete"
        );
        Ok(document.finalize(&self.options))
    }

    fn push_frame(&mut self, name: String, attributes: Vec<(String, String)>) -> Result<()> {
        self.active_frame()?.check_accepts_child()?;

        self.stats.elements += 1;
        self.stats.attributes += attributes.len();
        trace!(%name, attributes = attributes.len(), depth = self.stack.len(), "open element");

        self.stack.push(ElementFrame::element(name, attributes));
        self.stats.max_depth = self.stats.max_depth.max(self.depth());
        self.state = BuilderState::Building;
        Ok(())
    }

    fn pop_frame(&mut self, name: &str) -> Result<()> {
        if self.stack.len() <= 1 {
            return Err(ConvertError::UnbalancedStructure(format!(
                "close of '{name}' without a matching open"
            )));
        }
        let active = self.stack.last().map(|f| f.name()).unwrap_or_default();
        if active != name {
            return Err(ConvertError::UnbalancedStructure(format!(
                "close of '{name}' while '{active}' is open"
            )));
        }

        let frame = self.stack.pop().ok_or_else(|| {
            ConvertError::UnbalancedStructure(format!("close of '{name}' on an empty stack"))
        })?;
        let node = frame.finalize(&self.options);
        trace!(%name, depth = self.depth(), "close element");
        self.active_frame()?.push_child(name, node);
        Ok(())
    }

    fn active_frame(&mut self) -> Result<&mut ElementFrame> {
        self.stack.last_mut().ok_or_else(|| {
            ConvertError::UnbalancedStructure("no active frame".to_string())
        })
    }

    fn ensure_usable(&self) -> Result<()> {
        if self.state == BuilderState::Failed {
            Err(ConvertError::Poisoned)
        } else {
            Ok(())
        }
    }

    fn poison_on_error<T>(&mut self, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            debug!(error = %err, "conversion failed");
            self.state = BuilderState::Failed;
        }
        result
    }
}
