//! SOAP response decoding.
//!
//! # Design
//! The service answers with a document whose wrapper depth and namespace
//! prefixes vary between endpoints. Rather than matching a fixed path, the
//! body is decoded into a small element tree keyed by local names, the first
//! `result` element is located anywhere in it, and every grandchild of that
//! element contributes one leaf value: `result/*/*`.
//!
//! An answer with no leaves is the absent result (`None`), never an empty
//! list.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::trace;

use crate::error::{ApiError, ApiResult};

/// Positional subset applied to the leaves under each `result/*` item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultFilter {
    /// Keep entries at odd 1-based positions among their siblings.
    OddPositions,
}

impl ResultFilter {
    fn keeps(self, position: usize) -> bool {
        match self {
            ResultFilter::OddPositions => position % 2 == 1,
        }
    }
}

/// Decoded element: local name, concatenated direct text and child elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    fn named(start: &BytesStart<'_>) -> Self {
        Self {
            name: String::from_utf8_lossy(start.local_name().as_ref()).into_owned(),
            ..Self::default()
        }
    }

    /// First element called `name` in document order, including `self`.
    pub fn find(&self, name: &str) -> Option<&Element> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }

    /// Text of the first child called `name`.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.children
            .iter()
            .find(|child| child.name == name)
            .map(|child| child.text.as_str())
    }
}

/// Decode `xml` into its root element.
pub fn parse_document(xml: &str) -> ApiResult<Element> {
    // Leaf text is kept as sent, untrimmed.
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => stack.push(Element::named(&start)),
            Ok(Event::Empty(start)) => attach(&mut stack, &mut root, Element::named(&start))?,
            Ok(Event::End(_)) => {
                let element = stack.pop().ok_or_else(|| malformed("unbalanced end tag"))?;
                attach(&mut stack, &mut root, element)?;
            }
            Ok(Event::Text(text)) => {
                let text = text.unescape().map_err(|e| malformed(e.to_string()))?;
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&text);
                }
            }
            Ok(Event::CData(data)) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(malformed(format!(
                    "at byte {}: {e}",
                    reader.buffer_position()
                )))
            }
        }
    }

    if !stack.is_empty() {
        return Err(malformed("document ended inside an element"));
    }
    root.ok_or_else(|| malformed("document has no root element"))
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> ApiResult<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(malformed("more than one root element")),
    }
    Ok(())
}

fn malformed(message: impl Into<String>) -> ApiError {
    ApiError::external("MalformedEnvelope", message)
}

/// A SOAP `Fault` carried in the body, if any, as `(faultcode, faultstring)`.
pub fn fault(document: &Element) -> Option<(String, String)> {
    let fault = document.find("Fault")?;
    let code = fault.child_text("faultcode").unwrap_or_default().trim().to_string();
    let message = fault.child_text("faultstring").unwrap_or_default().trim().to_string();
    Some((code, message))
}

/// Collect the `result/*/*` leaves of `document`, applying `filter` per item.
pub fn extract(document: &Element, filter: Option<ResultFilter>) -> Option<Vec<String>> {
    let result = document.find("result")?;

    let leaves: Vec<String> = result
        .children
        .iter()
        .flat_map(|item| {
            item.children
                .iter()
                .enumerate()
                .filter(move |(index, _)| filter.map_or(true, |f| f.keeps(index + 1)))
                .map(|(_, field)| field.text.clone())
        })
        .inspect(|leaf| trace!(%leaf, "extracted leaf"))
        .collect();

    if leaves.is_empty() {
        None
    } else {
        Some(leaves)
    }
}
