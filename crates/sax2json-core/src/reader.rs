//! XML front end: drives a [`TreeBuilder`] from quick-xml pull events.
//!
//! | quick-xml event | builder call |
//! |---|---|
//! | `Start` | `open(name, attributes)` |
//! | `Empty` | `open` then `close` |
//! | `End` | `close(name)` |
//! | `Text` | `text(unescaped)` |
//! | `CData` | `text(raw)` |
//! | `Eof` | `finish()` |
//!
//! Declarations, comments, processing instructions and DOCTYPE are skipped.
//! Names are used exactly as written, prefixes included; there is no
//! namespace resolution and no entity expansion beyond the predefined XML
//! entities.

use std::fmt::Display;
use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use crate::builder::{ConvertStats, TreeBuilder};
use crate::error::{ConvertError, Result};
use crate::node::Node;
use crate::options::ConvertOptions;

/// Convert an XML string into a tree.
///
/// # Example
/// ```
/// use sax2json_core::{convert_str, encode, ConvertOptions};
/// let xml = "<list><item>a</item><item>b</item></list>";
/// let root = convert_str(xml, &ConvertOptions::default()).unwrap();
/// assert_eq!(encode(&root).unwrap(), r#"{"list":{"item":["a","b"]}}"#);
/// ```
pub fn convert_str(xml: &str, options: &ConvertOptions) -> Result<Node> {
    convert_reader(xml.as_bytes(), options)
}

/// Convert XML read from any buffered source into a tree.
pub fn convert_reader<R: BufRead>(input: R, options: &ConvertOptions) -> Result<Node> {
    convert_with_stats(input, options).map(|(node, _)| node)
}

/// Convert XML and also report element/attribute counts and nesting depth.
pub fn convert_with_stats<R: BufRead>(
    input: R,
    options: &ConvertOptions,
) -> Result<(Node, ConvertStats)> {
    let mut reader = Reader::from_reader(input);
    let mut builder = TreeBuilder::new(options.clone());
    let mut buf = Vec::new();

    debug!(?options, "starting XML conversion");
    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|err| xml_error(&reader, err))?;
        match event {
            Event::Start(start) => {
                let (name, attributes) = start_parts(&start, &reader)?;
                builder.open(name, attributes)?;
            }
            Event::Empty(start) => {
                let (name, attributes) = start_parts(&start, &reader)?;
                builder.open(name.clone(), attributes)?;
                builder.close(&name)?;
            }
            Event::End(end) => {
                let name = utf8(end.name().as_ref(), &reader)?;
                builder.close(&name)?;
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(|err| xml_error(&reader, err))?;
                builder.text(&text)?;
            }
            Event::CData(cdata) => {
                let raw = cdata.into_inner();
                builder.text(&utf8(&raw, &reader)?)?;
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    let stats = builder.stats();
    let root = builder.finish()?;
    debug!(
        bytes = reader.buffer_position(),
        elements = stats.elements,
        "finished XML conversion"
    );
    Ok((root, stats))
}

/// Element name and `(name, unescaped value)` attribute pairs of a start tag.
fn start_parts<R>(
    start: &BytesStart<'_>,
    reader: &Reader<R>,
) -> Result<(String, Vec<(String, String)>)> {
    let name = utf8(start.name().as_ref(), reader)?;
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|err| xml_error(reader, err))?;
        let key = utf8(attr.key.as_ref(), reader)?;
        let value = attr.unescape_value().map_err(|err| xml_error(reader, err))?;
        attributes.push((key, value.into_owned()));
    }
    Ok((name, attributes))
}

fn utf8<R>(bytes: &[u8], reader: &Reader<R>) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|err| xml_error(reader, err))
}

fn xml_error<R>(reader: &Reader<R>, err: impl Display) -> ConvertError {
    ConvertError::Xml {
        position: reader.buffer_position(),
        message: err.to_string(),
    }
}
