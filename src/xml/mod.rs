//! Symmetric XML representation of message trees.
//!
//! Element names mirror the LLRP message and parameter names; fields become
//! attributes; enumerated fields carry their symbolic member names, never
//! integers; sub-parameters are child elements emitted in specification
//! order. The mapping is bijective up to whitespace and attribute order:
//! parsing the emitted form reproduces an equal tree, and the binary
//! encodings of both agree.
//!
//! Binary-looking values use fixed textual forms: EPC-96 identifiers and
//! opaque payloads are upper-case hex, bit arrays are `bitcount:hex`
//! (`96:00112233445566778899AABB`), and integer arrays are space-separated.

use quick_xml::{
    events::{BytesEnd, BytesStart, Event},
    Reader, Writer,
};
use thiserror::Error;

use crate::{
    error::LlrpError,
    message::{BitArray, Message, Parameter, Value},
    spec::{EnumIdx, FieldSpec, FieldType, LlrpRegistry},
    validate,
};

/// A failure while producing or parsing the XML form.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum XmlError {
    /// The document is not well-formed XML.
    #[error("XML syntax error: {detail}")]
    Syntax {
        /// Parser diagnostic.
        detail: String,
    },

    /// The document has no root element.
    #[error("the document has no root element")]
    EmptyDocument,

    /// An element name does not match any message or parameter spec.
    #[error("unknown element {element}")]
    UnknownElement {
        /// The unresolvable element name.
        element: String,
    },

    /// An attribute name does not match any field of its element's spec.
    #[error("{element}: unknown attribute {attribute}")]
    UnknownAttribute {
        /// The owning element.
        element: String,
        /// The undeclared attribute.
        attribute: String,
    },

    /// An attribute value does not parse as its field's type.
    #[error("{element}: attribute {attribute} has malformed value {value:?}")]
    MalformedValue {
        /// The owning element.
        element: String,
        /// The offending attribute.
        attribute: String,
        /// The unparseable text.
        value: String,
    },
}

impl From<quick_xml::Error> for XmlError {
    fn from(err: quick_xml::Error) -> Self {
        Self::Syntax {
            detail: err.to_string(),
        }
    }
}

/// Serialise a validated message tree to its XML form.
///
/// # Errors
///
/// Returns [`LlrpError::Validation`] when the tree violates the
/// specification; the serialiser itself cannot fail on a valid tree.
///
/// # Examples
///
/// ```
/// use llrp::{message::{Message, Value}, spec::LlrpRegistry, xml};
///
/// let registry = LlrpRegistry::load().expect("load");
/// let request = Message::with_id(
///     &registry,
///     "GET_READER_CAPABILITIES",
///     1,
///     &[("RequestedData", Value::uint(0u8))],
///     vec![],
/// )
/// .expect("valid request");
/// let text = xml::to_xml(&registry, &request).expect("serialises");
/// assert!(text.contains("RequestedData=\"All\""));
/// ```
pub fn to_xml(registry: &LlrpRegistry, message: &Message) -> Result<String, LlrpError> {
    validate::message(registry, message)?;
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    let spec = registry.message(message.spec());
    let mut root = BytesStart::new(spec.name);
    root.push_attribute(("MessageID", message.message_id().to_string().as_str()));
    for (field, value) in spec.data_fields().zip(message.fields()) {
        root.push_attribute((field.name, render_value(registry, field, value).as_str()));
    }
    let children = validate::spec_ordered(registry, &spec.children, message.parameters());
    if children.is_empty() {
        writer
            .write_event(Event::Empty(root))
            .map_err(|e| XmlError::Syntax { detail: e.to_string() })?;
    } else {
        writer
            .write_event(Event::Start(root))
            .map_err(|e| XmlError::Syntax { detail: e.to_string() })?;
        for child in children {
            write_parameter(&mut writer, registry, child)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new(spec.name)))
            .map_err(|e| XmlError::Syntax { detail: e.to_string() })?;
    }
    let text = String::from_utf8(writer.into_inner()).expect("the writer emits UTF-8");
    Ok(text)
}

fn write_parameter(
    writer: &mut Writer<Vec<u8>>,
    registry: &LlrpRegistry,
    parameter: &Parameter,
) -> Result<(), LlrpError> {
    let spec = registry.param(parameter.spec());
    let mut element = BytesStart::new(spec.name);
    for (field, value) in spec.data_fields().zip(parameter.fields()) {
        element.push_attribute((field.name, render_value(registry, field, value).as_str()));
    }
    let children = validate::spec_ordered(registry, &spec.children, parameter.children());
    if children.is_empty() {
        writer
            .write_event(Event::Empty(element))
            .map_err(|e| XmlError::Syntax { detail: e.to_string() })?;
    } else {
        writer
            .write_event(Event::Start(element))
            .map_err(|e| XmlError::Syntax { detail: e.to_string() })?;
        for child in children {
            write_parameter(writer, registry, child)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new(spec.name)))
            .map_err(|e| XmlError::Syntax { detail: e.to_string() })?;
    }
    Ok(())
}

fn member_name(registry: &LlrpRegistry, enum_ref: Option<EnumIdx>, value: u64) -> Option<String> {
    enum_ref
        .and_then(|idx| registry.enumeration(idx).name_of(value))
        .map(ToOwned::to_owned)
}

fn render_value(registry: &LlrpRegistry, field: &FieldSpec, value: &Value) -> String {
    match value {
        Value::Bool(v) => v.to_string(),
        Value::Uint(v) => {
            member_name(registry, field.enum_ref, *v).unwrap_or_else(|| v.to_string())
        }
        Value::Int(v) => v.to_string(),
        Value::Str(v) => v.clone(),
        Value::Epc96(v) => hex(v),
        Value::Bits(v) => format!("{}:{}", v.bit_len(), hex(v.as_bytes())),
        Value::UintArray(vs) => vs
            .iter()
            .map(|&v| member_name(registry, field.enum_ref, v).unwrap_or_else(|| v.to_string()))
            .collect::<Vec<_>>()
            .join(" "),
        Value::Opaque(v) => hex(v),
    }
}

fn hex(bytes: &[u8]) -> String { bytes.iter().map(|b| format!("{b:02X}")).collect() }

/// Parse the XML form back into a validated message tree.
///
/// # Errors
///
/// Returns [`LlrpError::Xml`] when the document is malformed and
/// [`LlrpError::Validation`] when it parses into a tree that violates the
/// specification.
pub fn from_xml(registry: &LlrpRegistry, text: &str) -> Result<Message, LlrpError> {
    let root = parse_tree(text)?;
    let spec_idx = registry
        .message_by_name(&root.name)
        .ok_or_else(|| XmlError::UnknownElement {
            element: root.name.clone(),
        })?;
    let spec = registry.message(spec_idx);

    let mut message_id = None;
    let mut fields = Vec::new();
    for (key, value) in &root.attrs {
        if key == "MessageID" {
            message_id = Some(value.parse::<u32>().map_err(|_| XmlError::MalformedValue {
                element: root.name.clone(),
                attribute: key.clone(),
                value: value.clone(),
            })?);
        } else {
            let field = spec
                .data_fields()
                .find(|f| f.name == *key)
                .ok_or_else(|| XmlError::UnknownAttribute {
                    element: root.name.clone(),
                    attribute: key.clone(),
                })?;
            fields.push((key.as_str(), parse_field(registry, &root.name, field, value)?));
        }
    }
    let params = root
        .children
        .iter()
        .map(|child| build_parameter(registry, child))
        .collect::<Result<Vec<_>, _>>()?;
    let message = Message::with_id(
        registry,
        &root.name,
        message_id.unwrap_or_else(crate::message::next_message_id),
        &fields,
        params,
    )?;
    Ok(message)
}

fn build_parameter(registry: &LlrpRegistry, node: &XmlNode) -> Result<Parameter, LlrpError> {
    let spec_idx = registry
        .param_by_name(&node.name)
        .ok_or_else(|| XmlError::UnknownElement {
            element: node.name.clone(),
        })?;
    let spec = registry.param(spec_idx);
    let mut fields = Vec::new();
    for (key, value) in &node.attrs {
        let field = spec
            .data_fields()
            .find(|f| f.name == *key)
            .ok_or_else(|| XmlError::UnknownAttribute {
                element: node.name.clone(),
                attribute: key.clone(),
            })?;
        fields.push((key.as_str(), parse_field(registry, &node.name, field, value)?));
    }
    let children = node
        .children
        .iter()
        .map(|child| build_parameter(registry, child))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Parameter::new(registry, &node.name, &fields, children)?)
}

fn parse_field(
    registry: &LlrpRegistry,
    element: &str,
    field: &FieldSpec,
    text: &str,
) -> Result<Value, LlrpError> {
    let malformed = || {
        LlrpError::Xml(XmlError::MalformedValue {
            element: element.to_owned(),
            attribute: field.name.to_owned(),
            value: text.to_owned(),
        })
    };
    let parse_member = |token: &str| -> Result<u64, LlrpError> {
        if let Some(enum_idx) = field.enum_ref {
            if let Some(value) = registry.enumeration(enum_idx).value_of(token) {
                return Ok(value);
            }
        }
        token.parse::<u64>().map_err(|_| malformed())
    };
    let value = match field.ty {
        FieldType::Bool => match text {
            "true" | "1" => Value::Bool(true),
            "false" | "0" => Value::Bool(false),
            _ => return Err(malformed()),
        },
        FieldType::Bits(_)
        | FieldType::U8
        | FieldType::U16
        | FieldType::U32
        | FieldType::U64 => Value::Uint(parse_member(text)?),
        FieldType::S8 | FieldType::S16 | FieldType::S32 | FieldType::S64 => {
            Value::Int(text.parse::<i64>().map_err(|_| malformed())?)
        }
        FieldType::Utf8 => Value::Str(text.to_owned()),
        FieldType::Epc96 => {
            let bytes = unhex(text).ok_or_else(malformed)?;
            let epc: [u8; 12] = bytes.try_into().map_err(|_| malformed())?;
            Value::Epc96(epc)
        }
        FieldType::BitArray => {
            let (count, digits) = text.split_once(':').ok_or_else(malformed)?;
            let bit_len = count.parse::<u16>().map_err(|_| malformed())?;
            let bytes = unhex(digits).ok_or_else(malformed)?;
            Value::Bits(BitArray::new(bytes, bit_len))
        }
        FieldType::UintArray(_) => Value::UintArray(
            text.split_whitespace()
                .map(parse_member)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        FieldType::BytesToEnd => Value::Opaque(unhex(text).ok_or_else(malformed)?.into()),
        FieldType::Reserved(_) => return Err(malformed()),
    };
    Ok(value)
}

fn unhex(text: &str) -> Option<Vec<u8>> {
    if text.len() % 2 != 0 {
        return None;
    }
    (0..text.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&text[i..i + 2], 16).ok())
        .collect()
}

/// Lightweight document tree decoupling event parsing from spec mapping.
struct XmlNode {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

fn parse_tree(text: &str) -> Result<XmlNode, XmlError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);
    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root = None;
    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(node_from(&start)?),
            Event::Empty(start) => {
                let node = node_from(&start)?;
                attach(&mut stack, &mut root, node);
            }
            Event::End(_) => {
                let node = stack.pop().ok_or_else(|| XmlError::Syntax {
                    detail: "unbalanced end tag".to_owned(),
                })?;
                attach(&mut stack, &mut root, node);
            }
            Event::Eof => break,
            Event::Text(text) => {
                let content = text.unescape()?;
                if !content.trim().is_empty() {
                    return Err(XmlError::Syntax {
                        detail: format!("unexpected text content {:?}", content.trim()),
                    });
                }
            }
            // Declarations, comments, and processing instructions are noise.
            _ => {}
        }
    }
    root.ok_or(XmlError::EmptyDocument)
}

fn node_from(start: &BytesStart<'_>) -> Result<XmlNode, XmlError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attrs = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| XmlError::Syntax {
            detail: e.to_string(),
        })?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| XmlError::Syntax {
                detail: e.to_string(),
            })?
            .into_owned();
        attrs.push((key, value));
    }
    Ok(XmlNode {
        name,
        attrs,
        children: Vec::new(),
    })
}

fn attach(stack: &mut Vec<XmlNode>, root: &mut Option<XmlNode>, node: XmlNode) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    } else if root.is_none() {
        *root = Some(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{codec, spec::LlrpRegistry};

    fn registry() -> LlrpRegistry { LlrpRegistry::load().expect("load built-in tables") }

    #[test]
    fn enums_emit_symbolic_names() {
        let registry = registry();
        let request = Message::with_id(
            &registry,
            "GET_READER_CAPABILITIES",
            1,
            &[("RequestedData", Value::uint(0u8))],
            vec![],
        )
        .expect("valid request");
        let text = to_xml(&registry, &request).expect("serialises");
        assert!(text.contains("RequestedData=\"All\""));
        assert!(!text.contains("RequestedData=\"0\""));
    }

    #[test]
    fn xml_round_trips_a_nested_message() {
        let registry = registry();
        let status = Parameter::new(
            &registry,
            "LLRPStatus",
            &[
                ("StatusCode", Value::uint(0u16)),
                ("ErrorDescription", Value::string("")),
            ],
            vec![],
        )
        .expect("valid status");
        let reply = Message::with_id(&registry, "ADD_ROSPEC_RESPONSE", 77, &[], vec![status])
            .expect("valid reply");

        let text = to_xml(&registry, &reply).expect("serialises");
        let parsed = from_xml(&registry, &text).expect("parses");
        assert_eq!(parsed, reply);
    }

    #[test]
    fn cross_format_encodings_agree() {
        let registry = registry();
        let epc = Parameter::single(
            &registry,
            "EPC_96",
            Value::epc96([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]),
        )
        .expect("valid EPC");
        let tag = Parameter::new(&registry, "TagReportData", &[], vec![epc]).expect("valid tag");
        let report =
            Message::with_id(&registry, "RO_ACCESS_REPORT", 3, &[], vec![tag]).expect("valid");

        let text = to_xml(&registry, &report).expect("serialises");
        let parsed = from_xml(&registry, &text).expect("parses");
        assert_eq!(
            codec::encode_message(&registry, &parsed).expect("encodes parsed"),
            codec::encode_message(&registry, &report).expect("encodes original")
        );
    }

    #[test]
    fn unknown_elements_are_rejected() {
        let registry = registry();
        let err = from_xml(&registry, "<NOT_A_MESSAGE/>").expect_err("element is undefined");
        assert!(matches!(
            err,
            LlrpError::Xml(XmlError::UnknownElement { element }) if element == "NOT_A_MESSAGE"
        ));
    }

    #[test]
    fn malformed_attribute_values_are_rejected() {
        let registry = registry();
        let err = from_xml(
            &registry,
            r#"<DELETE_ROSPEC MessageID="1" ROSpecID="twelve"/>"#,
        )
        .expect_err("ROSpecID must be numeric or a member name");
        assert!(matches!(
            err,
            LlrpError::Xml(XmlError::MalformedValue { attribute, .. }) if attribute == "ROSpecID"
        ));
    }

    #[test]
    fn bit_arrays_round_trip_with_explicit_length() {
        let registry = registry();
        let epc_data = Parameter::new(
            &registry,
            "EPCData",
            &[("EPC", Value::Bits(BitArray::new(vec![0xAB, 0xCD], 16)))],
            vec![],
        )
        .expect("valid EPCData");
        let tag = Parameter::new(&registry, "TagReportData", &[], vec![epc_data])
            .expect("valid tag");
        let report =
            Message::with_id(&registry, "RO_ACCESS_REPORT", 4, &[], vec![tag]).expect("valid");

        let text = to_xml(&registry, &report).expect("serialises");
        assert!(text.contains("EPC=\"16:ABCD\""));
        let parsed = from_xml(&registry, &text).expect("parses");
        assert_eq!(parsed, report);
    }
}
