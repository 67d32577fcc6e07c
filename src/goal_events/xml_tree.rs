//! Minimal element tree for the goal XML.
//!
//! Builds an owned tree out of quick-xml events and offers the two lookups
//! the extractor needs: first element at a `a/b` path and its text. Text
//! follows element-tree semantics: only the text before the first child
//! element is kept, and a present but empty element yields `Some("")`.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::AppError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    fn new(name: &[u8]) -> Self {
        Self {
            name: String::from_utf8_lossy(name).into_owned(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Element for a start tag after checking its name and attributes.
    /// Attribute values are not kept, but bare or duplicated attributes are errors.
    fn from_start(start: &BytesStart, position: u64) -> Result<Self, AppError> {
        let element = Element::new(start.name().as_ref());
        if !is_valid_name(&element.name) {
            return Err(AppError::xml_parse(
                format!("invalid element name <{}>", element.name),
                position,
            ));
        }
        for attribute in start.attributes() {
            attribute.map_err(|e| {
                AppError::xml_parse(format!("in <{}>: {e}", element.name), position)
            })?;
        }
        Ok(element)
    }

    /// Parses a complete XML document and returns its root element.
    ///
    /// # Errors
    /// * `AppError::XmlParse` - Syntax errors reported by quick-xml, unclosed
    ///   elements, a missing root, more than one root, or text outside the root
    pub fn parse(document: &str) -> Result<Element, AppError> {
        let mut reader = Reader::from_str(document);
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let event = reader
                .read_event()
                .map_err(|e| AppError::xml_parse(e.to_string(), reader.buffer_position() as u64))?;
            let position = reader.buffer_position() as u64;

            match event {
                Event::Start(start) => {
                    if stack.is_empty() && root.is_some() {
                        return Err(AppError::xml_parse("junk after document element", position));
                    }
                    stack.push(Element::from_start(&start, position)?);
                }
                Event::Empty(start) => {
                    let element = Element::from_start(&start, position)?;
                    attach(&mut stack, &mut root, element, position)?;
                }
                Event::End(_) => {
                    let element = stack
                        .pop()
                        .ok_or_else(|| AppError::xml_parse("unmatched end tag", position))?;
                    attach(&mut stack, &mut root, element, position)?;
                }
                Event::Text(text) => {
                    let text = text
                        .unescape()
                        .map_err(|e| AppError::xml_parse(e.to_string(), position))?;
                    push_text(&mut stack, &text, position)?;
                }
                Event::CData(data) => {
                    let data = data.into_inner();
                    push_text(&mut stack, &String::from_utf8_lossy(&data), position)?;
                }
                Event::Eof => {
                    if let Some(open) = stack.last() {
                        return Err(AppError::xml_parse(
                            format!("unclosed element <{}>", open.name),
                            position,
                        ));
                    }
                    return root.ok_or_else(|| AppError::xml_parse("no element found", position));
                }
                // Declarations, comments, processing instructions and doctypes carry no data
                _ => {}
            }
        }
    }

    /// Direct children with the given tag name, in document order
    pub fn children_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// First element matching a `/`-separated path of child tag names
    pub fn find(&self, path: &str) -> Option<&Element> {
        path.split('/')
            .try_fold(self, |element, name| element.children_named(name).next())
    }

    /// Text of the first element matching `path`; `None` when no element matches
    pub fn find_text(&self, path: &str) -> Option<&str> {
        self.find(path).map(|element| element.text.as_str())
    }
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
    position: u64,
) -> Result<(), AppError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(AppError::xml_parse("junk after document element", position)),
    }
    Ok(())
}

// Names start with a letter, `_` or `:`
fn is_valid_name(name: &str) -> bool {
    name.chars()
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_' || first == ':')
}

fn push_text(stack: &mut [Element], text: &str, position: u64) -> Result<(), AppError> {
    match stack.last_mut() {
        // Tail text after a child element is not part of the parent's text
        Some(current) if current.children.is_empty() => current.text.push_str(text),
        Some(_) => {}
        None if text.trim().is_empty() => {}
        None => return Err(AppError::xml_parse("text outside the root element", position)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nested_document() {
        let root = Element::parse(
            "<goal><value><stats><goals>1</goals></stats><team>100</team></value></goal>",
        )
        .unwrap();

        assert_eq!(root.name, "goal");
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.find_text("value/team"), Some("100"));
        assert_eq!(root.find_text("value/stats/goals"), Some("1"));
    }

    #[test]
    fn test_find_text_semantics() {
        let root = Element::parse("<value><team></team><elapsed/><subtype>  header </subtype></value>")
            .unwrap();

        assert_eq!(root.find_text("team"), Some(""));
        assert_eq!(root.find_text("elapsed"), Some(""));
        assert_eq!(root.find_text("subtype"), Some("  header "));
        assert_eq!(root.find_text("player1"), None);
        assert!(root.find("stats/goals").is_none());
    }

    #[test]
    fn test_find_returns_first_match() {
        let root = Element::parse("<v><team>1</team><team>2</team></v>").unwrap();
        assert_eq!(root.find_text("team"), Some("1"));
        assert_eq!(root.children_named("team").count(), 2);
    }

    #[test]
    fn test_text_is_unescaped_and_cdata_kept() {
        let root = Element::parse("<v><a>Tom &amp; Jerry</a><b><![CDATA[<raw>]]></b></v>").unwrap();
        assert_eq!(root.find_text("a"), Some("Tom & Jerry"));
        assert_eq!(root.find_text("b"), Some("<raw>"));
    }

    #[test]
    fn test_tail_text_is_ignored() {
        let root = Element::parse("<v>head<a/>tail</v>").unwrap();
        assert_eq!(root.text, "head");
    }

    #[test]
    fn test_declaration_and_comments_are_skipped() {
        let root = Element::parse(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!-- goals --><goal/>\n",
        )
        .unwrap();
        assert_eq!(root.name, "goal");
        assert!(root.children.is_empty());
    }

    #[test]
    fn test_names_and_attributes_accepted() {
        let root = Element::parse(
            "<_goal xmlns:x=\"urn:x\"><value id=\"1\" kind='a'><team>100</team></value><x:note/></_goal>",
        )
        .unwrap();
        assert_eq!(root.name, "_goal");
        assert_eq!(root.find_text("value/team"), Some("100"));
        assert!(root.find("x:note").is_some());
    }

    #[test]
    fn test_malformed_documents_fail() {
        let cases = [
            "",
            "   ",
            "<goal>",
            "<goal><value></goal>",
            "<goal></goal><goal></goal>",
            "text<goal/>",
            "<goal>&unknown;</goal>",
            "</goal>",
            "<goal><value a></value></goal>",
            "<goal><value a=\"1\" a=\"2\"></value></goal>",
            "<goal><value a=\"1\" a=\"2\"/></goal>",
            "<1goal></1goal>",
            "<goal><-value/></goal>",
        ];

        for document in cases {
            let result = Element::parse(document);
            assert!(
                matches!(result, Err(AppError::XmlParse { .. })),
                "document {document:?} should fail to parse, got {result:?}"
            );
        }
    }
}
