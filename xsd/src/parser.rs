//! Event-driven XSD parsing.
//!
//! Walks an XSD document with `quick-xml`'s pull reader and builds a
//! [`SchemaModel`]. Only the vocabulary the vim25 schema uses is accepted;
//! anything else is rejected with [`XsdError::UnsupportedConstruct`].

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::{debug, trace};
use vimbind_model::{
    ComplexType, EnumLiteral, EnumType, Field, FieldType, Occurrence, SchemaModel, TypeDef,
};

use crate::errors::XsdError;

/// Marker used in errors for constructs outside any type declaration.
const TOP_LEVEL: &str = "<top-level>";

/// Parses an XSD document into a schema model.
///
/// `module` names the generated output module (typically the schema file
/// stem, e.g. `"vim25"`).
///
/// ## Errors
///
/// Returns an [`XsdError`] on XML syntax errors, missing or malformed
/// attributes, empty enumerations, and unsupported schema constructs.
pub fn parse_schema(text: &str, module: &str) -> Result<SchemaModel, XsdError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut schema = SchemaModel::new(module, "");

    loop {
        match reader.read_event()? {
            Event::Start(e) => match local_name(&e).as_str() {
                "schema" => {
                    if let Some(ns) = attr_opt(&e, "targetNamespace", &reader)? {
                        schema.target_namespace = ns;
                    }
                }
                "simpleType" => {
                    let def = parse_simple_type(&mut reader, &e)?;
                    debug!(name = %def.name, literals = def.literals.len(), "parsed enumeration type");
                    schema.push(TypeDef::Enum(def));
                }
                "complexType" => {
                    let def = parse_complex_type(&mut reader, &e)?;
                    debug!(name = %def.name, fields = def.fields.len(), "parsed complex type");
                    schema.push(TypeDef::Complex(def));
                }
                // Top-level element declarations and schema-level annotations
                // describe operations/documentation, not data types.
                "annotation" | "element" | "import" | "include" => {
                    reader.read_to_end(e.name())?;
                }
                other => {
                    return Err(unsupported(other, TOP_LEVEL, &reader));
                }
            },
            Event::Empty(e) => match local_name(&e).as_str() {
                "element" | "import" | "include" | "annotation" => {}
                "complexType" => {
                    // A bodiless complex type: a named record with no fields.
                    let name = attr_req(&e, "name", &reader)?;
                    schema.push(TypeDef::Complex(ComplexType::new(name)));
                }
                other => {
                    return Err(unsupported(other, TOP_LEVEL, &reader));
                }
            },
            Event::Eof => break,
            // Declarations, comments, whitespace, end tags.
            _ => {}
        }
    }

    Ok(schema)
}

/// Parses a `<simpleType>` declaration into an enumeration.
///
/// Only string restrictions with enumeration facets are accepted; lists,
/// unions, and non-string restrictions are rejected.
fn parse_simple_type(
    reader: &mut Reader<&[u8]>,
    start: &BytesStart,
) -> Result<EnumType, XsdError> {
    let name = attr_req(start, "name", reader)?;
    let mut def = EnumType::new(name.clone(), Vec::<String>::new());

    loop {
        match reader.read_event()? {
            Event::Start(e) => match local_name(&e).as_str() {
                "annotation" => {
                    if let Some(doc) = parse_annotation(reader)? {
                        def.doc = Some(doc);
                    }
                }
                "restriction" => {
                    check_string_restriction(&e, reader)?;
                    parse_enumeration_facets(reader, &mut def)?;
                }
                other => return Err(unsupported(other, &name, reader)),
            },
            Event::Empty(e) => match local_name(&e).as_str() {
                "annotation" => {}
                // A bodiless restriction declares no literals; the empty
                // enumeration check below reports it.
                "restriction" => check_string_restriction(&e, reader)?,
                other => return Err(unsupported(other, &name, reader)),
            },
            Event::End(e) if local_name_end(&e) == "simpleType" => break,
            Event::Eof => return Err(XsdError::Xml(unexpected_eof())),
            _ => {}
        }
    }

    if def.literals.is_empty() {
        return Err(XsdError::EmptyEnumeration { name });
    }
    Ok(def)
}

/// Verifies a `<restriction>` base is `xsd:string`.
fn check_string_restriction(e: &BytesStart, reader: &Reader<&[u8]>) -> Result<(), XsdError> {
    let base = attr_req(e, "base", reader)?;
    if strip_ns(&base) != "string" {
        return Err(XsdError::InvalidAttribute {
            element: "restriction".to_string(),
            attribute: "base".to_string(),
            value: base,
        });
    }
    Ok(())
}

/// Collects `<enumeration value="..."/>` facets until the restriction ends.
fn parse_enumeration_facets(
    reader: &mut Reader<&[u8]>,
    def: &mut EnumType,
) -> Result<(), XsdError> {
    loop {
        match reader.read_event()? {
            Event::Empty(e) => match local_name(&e).as_str() {
                "enumeration" => {
                    let value = attr_req(&e, "value", reader)?;
                    trace!(literal = %value, enum_name = %def.name, "enumeration literal");
                    def.push(EnumLiteral::new(value));
                }
                other => return Err(unsupported(other, &def.name, reader)),
            },
            Event::Start(e) => match local_name(&e).as_str() {
                "enumeration" => {
                    let value = attr_req(&e, "value", reader)?;
                    let mut literal = EnumLiteral::new(value);
                    // A literal with a body may carry its own annotation.
                    loop {
                        match reader.read_event()? {
                            Event::Start(inner) if local_name(&inner) == "annotation" => {
                                if let Some(doc) = parse_annotation(reader)? {
                                    literal.doc = Some(doc);
                                }
                            }
                            Event::End(end) if local_name_end(&end) == "enumeration" => break,
                            Event::Eof => return Err(XsdError::Xml(unexpected_eof())),
                            _ => {}
                        }
                    }
                    def.push(literal);
                }
                other => return Err(unsupported(other, &def.name, reader)),
            },
            Event::End(e) if local_name_end(&e) == "restriction" => break,
            Event::Eof => return Err(XsdError::Xml(unexpected_eof())),
            _ => {}
        }
    }
    Ok(())
}

/// Parses a `<complexType>` declaration into a record type.
fn parse_complex_type(
    reader: &mut Reader<&[u8]>,
    start: &BytesStart,
) -> Result<ComplexType, XsdError> {
    let name = attr_req(start, "name", reader)?;
    let mut def = ComplexType::new(name.clone());

    loop {
        match reader.read_event()? {
            Event::Start(e) => match local_name(&e).as_str() {
                "annotation" => {
                    if let Some(doc) = parse_annotation(reader)? {
                        def.doc = Some(doc);
                    }
                }
                "sequence" => parse_sequence(reader, &mut def)?,
                "complexContent" => parse_complex_content(reader, &mut def)?,
                other => return Err(unsupported(other, &name, reader)),
            },
            Event::Empty(e) => match local_name(&e).as_str() {
                "annotation" | "sequence" => {}
                other => return Err(unsupported(other, &name, reader)),
            },
            Event::End(e) if local_name_end(&e) == "complexType" => break,
            Event::Eof => return Err(XsdError::Xml(unexpected_eof())),
            _ => {}
        }
    }

    Ok(def)
}

/// Parses `<complexContent><extension base="..."> ... </extension></complexContent>`.
///
/// This is how schema single inheritance appears on the wire; the base
/// reference is recorded and the extension's own sequence becomes the
/// type's locally declared fields.
fn parse_complex_content(
    reader: &mut Reader<&[u8]>,
    def: &mut ComplexType,
) -> Result<(), XsdError> {
    loop {
        match reader.read_event()? {
            Event::Start(e) => match local_name(&e).as_str() {
                "extension" => {
                    let base = attr_req(&e, "base", reader)?;
                    def.base = Some(strip_ns(&base));
                    loop {
                        match reader.read_event()? {
                            Event::Start(inner) => match local_name(&inner).as_str() {
                                "sequence" => parse_sequence(reader, def)?,
                                "annotation" => {
                                    reader.read_to_end(inner.name())?;
                                }
                                other => return Err(unsupported(other, &def.name, reader)),
                            },
                            Event::Empty(inner) => match local_name(&inner).as_str() {
                                "sequence" | "annotation" => {}
                                other => return Err(unsupported(other, &def.name, reader)),
                            },
                            Event::End(end) if local_name_end(&end) == "extension" => break,
                            Event::Eof => return Err(XsdError::Xml(unexpected_eof())),
                            _ => {}
                        }
                    }
                }
                other => return Err(unsupported(other, &def.name, reader)),
            },
            Event::Empty(e) => match local_name(&e).as_str() {
                "extension" => {
                    let base = attr_req(&e, "base", reader)?;
                    def.base = Some(strip_ns(&base));
                }
                other => return Err(unsupported(other, &def.name, reader)),
            },
            Event::End(e) if local_name_end(&e) == "complexContent" => break,
            Event::Eof => return Err(XsdError::Xml(unexpected_eof())),
            _ => {}
        }
    }
    Ok(())
}

/// Parses a `<sequence>` of element declarations into fields.
fn parse_sequence(reader: &mut Reader<&[u8]>, def: &mut ComplexType) -> Result<(), XsdError> {
    loop {
        match reader.read_event()? {
            Event::Empty(e) => match local_name(&e).as_str() {
                "element" => {
                    let field = element_to_field(&e, reader)?;
                    trace!(field = %field.name, ty = %def.name, "element declaration");
                    def.fields.push(field);
                }
                other => return Err(unsupported(other, &def.name, reader)),
            },
            Event::Start(e) => match local_name(&e).as_str() {
                "element" => {
                    let mut field = element_to_field(&e, reader)?;
                    // An element with a body may carry its own annotation.
                    loop {
                        match reader.read_event()? {
                            Event::Start(inner) if local_name(&inner) == "annotation" => {
                                if let Some(doc) = parse_annotation(reader)? {
                                    field.doc = Some(doc);
                                }
                            }
                            Event::End(end) if local_name_end(&end) == "element" => break,
                            Event::Eof => return Err(XsdError::Xml(unexpected_eof())),
                            _ => {}
                        }
                    }
                    def.fields.push(field);
                }
                other => return Err(unsupported(other, &def.name, reader)),
            },
            Event::End(e) if local_name_end(&e) == "sequence" => break,
            Event::Eof => return Err(XsdError::Xml(unexpected_eof())),
            _ => {}
        }
    }
    Ok(())
}

/// Builds a [`Field`] from an `<element>` declaration's attributes.
fn element_to_field(e: &BytesStart, reader: &Reader<&[u8]>) -> Result<Field, XsdError> {
    let name = attr_req(e, "name", reader)?;
    let ty = attr_req(e, "type", reader)?;
    let min = attr_opt(e, "minOccurs", reader)?.unwrap_or_else(|| "1".to_string());
    let max = attr_opt(e, "maxOccurs", reader)?.unwrap_or_else(|| "1".to_string());

    let min: u32 = min.parse().map_err(|_| XsdError::InvalidAttribute {
        element: "element".to_string(),
        attribute: "minOccurs".to_string(),
        value: min.clone(),
    })?;
    let repeated = match max.as_str() {
        "unbounded" => true,
        n => {
            let n: u32 = n.parse().map_err(|_| XsdError::InvalidAttribute {
                element: "element".to_string(),
                attribute: "maxOccurs".to_string(),
                value: max.clone(),
            })?;
            n > 1
        }
    };

    let occurrence = if repeated {
        Occurrence::Repeated
    } else if min == 0 {
        Occurrence::Optional
    } else {
        Occurrence::Required
    };

    Ok(Field {
        name,
        ty: FieldType::from_xsd(&ty),
        occurrence,
        doc: None,
    })
}

/// Collects `<documentation>` text inside an already-opened `<annotation>`.
fn parse_annotation(reader: &mut Reader<&[u8]>) -> Result<Option<String>, XsdError> {
    let mut doc = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(t) => {
                let text = t
                    .unescape()
                    .map_err(|err| malformed("annotation", &err.to_string(), reader))?;
                let text = text.trim();
                if !text.is_empty() {
                    if !doc.is_empty() {
                        doc.push(' ');
                    }
                    doc.push_str(text);
                }
            }
            Event::End(e) if local_name_end(&e) == "annotation" => break,
            Event::Eof => return Err(XsdError::Xml(unexpected_eof())),
            _ => {}
        }
    }
    Ok(if doc.is_empty() { None } else { Some(doc) })
}

// ── Attribute and name helpers ──────────────────────────────────────

fn strip_ns(name: &str) -> String {
    match name.split_once(':') {
        Some((_, local)) => local.to_string(),
        None => name.to_string(),
    }
}

fn local_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

fn local_name_end(e: &quick_xml::events::BytesEnd) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

/// Reads an optional attribute, unescaping its value.
fn attr_opt(
    e: &BytesStart,
    name: &str,
    reader: &Reader<&[u8]>,
) -> Result<Option<String>, XsdError> {
    match e.try_get_attribute(name) {
        Ok(Some(attr)) => {
            let value = attr
                .unescape_value()
                .map_err(|err| malformed(&local_name(e), &err.to_string(), reader))?;
            Ok(Some(value.into_owned()))
        }
        Ok(None) => Ok(None),
        Err(err) => Err(malformed(&local_name(e), &err.to_string(), reader)),
    }
}

/// Reads a required attribute, erroring with element context if absent.
fn attr_req(e: &BytesStart, name: &str, reader: &Reader<&[u8]>) -> Result<String, XsdError> {
    attr_opt(e, name, reader)?.ok_or_else(|| XsdError::MissingAttribute {
        element: local_name(e),
        attribute: name.to_string(),
        position: reader.buffer_position(),
    })
}

fn malformed(element: &str, message: &str, reader: &Reader<&[u8]>) -> XsdError {
    XsdError::MalformedAttribute {
        element: element.to_string(),
        position: reader.buffer_position(),
        message: message.to_string(),
    }
}

fn unsupported(construct: &str, type_name: &str, reader: &Reader<&[u8]>) -> XsdError {
    XsdError::UnsupportedConstruct {
        construct: construct.to_string(),
        type_name: type_name.to_string(),
        position: reader.buffer_position(),
    }
}

fn unexpected_eof() -> quick_xml::Error {
    quick_xml::Error::from(std::io::Error::new(
        std::io::ErrorKind::UnexpectedEof,
        "document ended inside a type declaration",
    ))
}
