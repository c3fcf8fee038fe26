//! Event-driven reader for layout documents.
//!
//! ```xml
//! <interface>
//!   <object class="Stage" id="stage">
//!     <property name="title">Main</property>
//!     <child>
//!       <object class="Label" id="clock"/>
//!     </child>
//!   </object>
//! </interface>
//! ```
//!
//! Text inside `<property>` has surrounding whitespace trimmed. Comments,
//! processing instructions and the XML declaration are skipped. Attributes
//! other than the ones read here are ignored.

use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::Reader;

use crate::object::{ObjectDefinition, Property};

/// Deepest `<object>` nesting accepted, counting top-level objects as 1.
pub const MAX_NESTING: usize = 256;

/// Location and description of the first problem in a document.
#[derive(Debug)]
pub(crate) struct ParseFailure {
    pub line: usize,
    pub message: String,
}

/// Parses a whole document into its top-level objects.
pub(crate) fn parse_objects(xml: &str) -> Result<Vec<ObjectDefinition>, ParseFailure> {
    let mut parser = DocumentParser::new(xml);
    parser.document().map_err(|message| ParseFailure {
        line: parser.line(),
        message,
    })
}

struct DocumentParser<'a> {
    reader: Reader<&'a [u8]>,
    source: &'a str,
}

impl<'a> DocumentParser<'a> {
    fn new(source: &'a str) -> Self {
        let mut reader = Reader::from_str(source);
        reader.config_mut().trim_text(true);
        Self { reader, source }
    }

    /// 1-based line of the reader's current position.
    fn line(&self) -> usize {
        let position = self.reader.buffer_position() as usize;
        let bytes = self.source.as_bytes();
        let end = position.min(bytes.len());
        bytes[..end].iter().filter(|b| **b == b'\n').count() + 1
    }

    fn next(&mut self) -> Result<Event<'a>, String> {
        loop {
            match self.reader.read_event() {
                Ok(Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_)) => {}
                Ok(event) => return Ok(event),
                Err(err) => return Err(format!("malformed XML: {}", err)),
            }
        }
    }

    fn document(&mut self) -> Result<Vec<ObjectDefinition>, String> {
        let objects = loop {
            match self.next()? {
                Event::Start(start) => {
                    expect_element(&start, "interface")?;
                    break self.interface()?;
                }
                Event::Empty(start) => {
                    expect_element(&start, "interface")?;
                    break Vec::new();
                }
                Event::Text(text) => ignore_blank(&text)?,
                Event::Eof => return Err("missing <interface> root element".to_string()),
                other => return Err(unexpected(&other)),
            }
        };

        loop {
            match self.next()? {
                Event::Eof => return Ok(objects),
                Event::Text(text) => ignore_blank(&text)?,
                Event::Start(start) | Event::Empty(start) => {
                    return Err(format!(
                        "element <{}> after the root element",
                        element_name(&start)
                    ))
                }
                other => return Err(unexpected(&other)),
            }
        }
    }

    fn interface(&mut self) -> Result<Vec<ObjectDefinition>, String> {
        let mut objects = Vec::new();
        loop {
            let (start, empty) = match self.next()? {
                Event::Start(start) => (start, false),
                Event::Empty(start) => (start, true),
                Event::End(_) => return Ok(objects),
                Event::Text(text) => {
                    ignore_blank(&text)?;
                    continue;
                }
                Event::Eof => return Err(unclosed("interface")),
                other => return Err(unexpected(&other)),
            };

            expect_element(&start, "object")?;
            let object = self.object(&start, empty, 1)?;
            if object.id.is_none() {
                return Err(format!(
                    "top-level <object class=\"{}\"> requires an 'id' attribute",
                    object.class
                ));
            }
            objects.push(object);
        }
    }

    fn object(
        &mut self,
        start: &BytesStart<'_>,
        empty: bool,
        depth: usize,
    ) -> Result<ObjectDefinition, String> {
        if depth > MAX_NESTING {
            return Err(format!("objects nested deeper than {} levels", MAX_NESTING));
        }
        let class = required_attribute(start, "class")?;
        let id = match attribute(start, "id")? {
            Some(id) if id.is_empty() => {
                return Err("<object> has an empty 'id' attribute".to_string())
            }
            other => other,
        };
        let mut object = ObjectDefinition::new(class, id);
        if empty {
            return Ok(object);
        }

        loop {
            let (element, empty) = match self.next()? {
                Event::Start(element) => (element, false),
                Event::Empty(element) => (element, true),
                Event::End(_) => return Ok(object),
                Event::Text(text) => {
                    ignore_blank(&text)?;
                    continue;
                }
                Event::Eof => return Err(unclosed("object")),
                other => return Err(unexpected(&other)),
            };

            match element.name().as_ref() {
                b"property" => {
                    let property = self.property(&element, empty)?;
                    object.properties.push(property);
                }
                b"child" if empty => return Err("<child> must contain an <object>".to_string()),
                b"child" => {
                    let child = self.child(depth + 1)?;
                    object.children.push(child);
                }
                _ => return Err(unknown(&element)),
            }
        }
    }

    fn child(&mut self, depth: usize) -> Result<ObjectDefinition, String> {
        let mut object = None;
        loop {
            let (start, empty) = match self.next()? {
                Event::Start(start) => (start, false),
                Event::Empty(start) => (start, true),
                Event::End(_) => {
                    return object.ok_or_else(|| "<child> must contain an <object>".to_string())
                }
                Event::Text(text) => {
                    ignore_blank(&text)?;
                    continue;
                }
                Event::Eof => return Err(unclosed("child")),
                other => return Err(unexpected(&other)),
            };

            expect_element(&start, "object")?;
            if object.is_some() {
                return Err("<child> holds more than one <object>".to_string());
            }
            object = Some(self.object(&start, empty, depth)?);
        }
    }

    fn property(&mut self, start: &BytesStart<'_>, empty: bool) -> Result<Property, String> {
        let name = required_attribute(start, "name")?;
        let mut value = String::new();
        if empty {
            return Ok(Property { name, value });
        }

        loop {
            match self.next()? {
                Event::Text(text) => {
                    let text = text
                        .unescape()
                        .map_err(|err| format!("malformed XML: {}", err))?;
                    value.push_str(&text);
                }
                Event::CData(data) => {
                    let text = std::str::from_utf8(&data)
                        .map_err(|err| format!("malformed CDATA: {}", err))?;
                    value.push_str(text);
                }
                Event::End(_) => return Ok(Property { name, value }),
                Event::Start(element) | Event::Empty(element) => {
                    return Err(format!(
                        "element <{}> inside <property name=\"{}\">",
                        element_name(&element),
                        name
                    ))
                }
                Event::Eof => return Err(unclosed("property")),
                other => return Err(unexpected(&other)),
            }
        }
    }
}

fn element_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

fn expect_element(start: &BytesStart<'_>, expected: &str) -> Result<(), String> {
    if start.name().as_ref() == expected.as_bytes() {
        Ok(())
    } else {
        Err(unknown(start))
    }
}

fn attribute(start: &BytesStart<'_>, key: &str) -> Result<Option<String>, String> {
    for attr in start.attributes() {
        let attr = attr.map_err(|err| format!("malformed attribute: {}", err))?;
        if attr.key.as_ref() == key.as_bytes() {
            let value = attr
                .unescape_value()
                .map_err(|err| format!("malformed attribute: {}", err))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

fn required_attribute(start: &BytesStart<'_>, key: &str) -> Result<String, String> {
    match attribute(start, key)? {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(format!(
            "<{}> requires a non-empty '{}' attribute",
            element_name(start),
            key
        )),
    }
}

fn ignore_blank(text: &BytesText<'_>) -> Result<(), String> {
    let text = text
        .unescape()
        .map_err(|err| format!("malformed XML: {}", err))?;
    let text = text.trim();
    if text.is_empty() {
        Ok(())
    } else {
        Err(format!("unexpected text '{}'", text))
    }
}

fn unknown(start: &BytesStart<'_>) -> String {
    format!("unknown element <{}>", element_name(start))
}

fn unclosed(element: &str) -> String {
    format!("document ends inside <{}>", element)
}

fn unexpected(event: &Event<'_>) -> String {
    match event {
        Event::End(end) => format!(
            "unexpected </{}>",
            String::from_utf8_lossy(end.name().as_ref())
        ),
        Event::CData(_) => "unexpected CDATA section".to_string(),
        Event::Eof => "unexpected end of document".to_string(),
        other => format!("unexpected {:?}", other),
    }
}
