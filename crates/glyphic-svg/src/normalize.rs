//! Root `<svg>` extraction and attribute normalization.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::element::SvgElement;

/// The only source attribute that survives normalization.
pub const VIEW_BOX: &str = "viewBox";

/// Tag name of the emitted root element.
const SVG_TAG: &str = "svg";

/// Attributes injected on every normalized root, in output order.
pub const INJECTED_ATTRIBUTES: [(&str, &str); 3] = [
    ("width", "1em"),
    ("height", "1em"),
    ("fill", "currentColor"),
];

/// Errors that can occur while reading an icon document.
#[derive(Debug, thiserror::Error)]
pub enum SvgError {
    #[error("No <svg> element found")]
    MissingRoot,

    #[error("Malformed markup at position {position}: {message}")]
    Malformed { position: u64, message: String },
}

/// Parse a document and return its first `<svg>` element unchanged.
///
/// Everything before the element (prolog, doctype, comments, wrapper markup)
/// and everything after its closing tag is ignored.
pub fn parse_svg(source: &str) -> Result<SvgElement, SvgError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut reader = Reader::from_str(source);

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) if is_svg(&start) => {
                let mut element = element_from_start(&start, &reader)?;
                let children = read_children(&mut reader, source)?;
                element.set_children(children);
                return Ok(element);
            }
            Ok(Event::Empty(start)) if is_svg(&start) => {
                return element_from_start(&start, &reader);
            }
            Ok(Event::Eof) => return Err(SvgError::MissingRoot),
            Ok(_) => {}
            Err(e) => {
                return Err(SvgError::Malformed {
                    position: reader.error_position() as u64,
                    message: e.to_string(),
                })
            }
        }
    }
}

/// Parse a document and rewrite its root element into icon form.
///
/// Only `viewBox` is kept (a lowercase `viewbox` is renamed), then `width`,
/// `height` and `fill` are set to `1em`, `1em` and `currentColor`. A missing
/// `viewBox` stays missing.
pub fn normalize(source: &str) -> Result<SvgElement, SvgError> {
    let mut element = parse_svg(source)?;

    let view_box = element
        .attributes()
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(VIEW_BOX))
        .map(|(_, value)| value.clone());

    element.retain_attributes(|name, _| name == VIEW_BOX);

    if let Some(value) = view_box {
        element.set_attribute(VIEW_BOX, &value);
    }

    for (name, value) in INJECTED_ATTRIBUTES {
        element.set_attribute(name, value);
    }

    Ok(element)
}

fn is_svg(start: &BytesStart<'_>) -> bool {
    start.local_name().as_ref().eq_ignore_ascii_case(SVG_TAG.as_bytes())
}

fn element_from_start(
    start: &BytesStart<'_>,
    reader: &Reader<&[u8]>,
) -> Result<SvgElement, SvgError> {
    // `<SVG>` or `<svg:svg>` would read as a component or namespaced name in JSX.
    let mut element = SvgElement::new(SVG_TAG);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| SvgError::Malformed {
            position: reader.buffer_position() as u64,
            message: e.to_string(),
        })?;
        let name = String::from_utf8_lossy(attr.key.as_ref());
        let value = String::from_utf8_lossy(&attr.value);
        element.set_attribute(&name, &value);
    }

    Ok(element)
}

/// Consume events up to the matching close tag and return the raw markup
/// between the tags.
fn read_children(reader: &mut Reader<&[u8]>, source: &str) -> Result<String, SvgError> {
    let start = reader.buffer_position() as usize;
    let mut depth = 0usize;

    loop {
        let before = reader.buffer_position() as usize;
        match reader.read_event() {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) if depth == 0 => {
                return source
                    .get(start..before)
                    .map(str::to_string)
                    .ok_or_else(|| SvgError::Malformed {
                        position: before as u64,
                        message: "element content splits a character".to_string(),
                    });
            }
            Ok(Event::End(_)) => depth -= 1,
            Ok(Event::Eof) => {
                return Err(SvgError::Malformed {
                    position: before as u64,
                    message: "unclosed <svg> element".to_string(),
                })
            }
            Ok(_) => {}
            Err(e) => {
                return Err(SvgError::Malformed {
                    position: reader.error_position() as u64,
                    message: e.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalizes_home_outline() {
        let el = normalize(r#"<svg viewBox="0 0 24 24" stroke="red"><path d="M1 1"/></svg>"#)
            .unwrap();

        assert_eq!(
            el.outer_html(),
            r#"<svg viewBox="0 0 24 24" width="1em" height="1em" fill="currentColor"><path d="M1 1"/></svg>"#
        );
    }

    #[test]
    fn missing_view_box_is_not_synthesized() {
        let el = normalize(r#"<svg xmlns="http://www.w3.org/2000/svg" width="24"><circle r="2"/></svg>"#)
            .unwrap();

        assert_eq!(el.attribute_names(), vec!["width", "height", "fill"]);
        assert_eq!(el.attribute(VIEW_BOX), None);
        assert_eq!(el.attribute("width"), Some("1em"));
    }

    #[test]
    fn only_view_box_survives() {
        let source = r##"<svg xmlns="http://www.w3.org/2000/svg" class="icon" id="x" viewBox="0 0 16 16" fill="#000" width="16" height="16"><g/></svg>"##;
        let el = normalize(source).unwrap();

        assert_eq!(
            el.attributes().to_vec(),
            vec![
                ("viewBox".to_string(), "0 0 16 16".to_string()),
                ("width".to_string(), "1em".to_string()),
                ("height".to_string(), "1em".to_string()),
                ("fill".to_string(), "currentColor".to_string()),
            ]
        );
    }

    #[test]
    fn canonicalizes_lowercase_view_box() {
        let el = normalize(r#"<svg viewbox="0 0 8 8"></svg>"#).unwrap();
        assert_eq!(el.attribute(VIEW_BOX), Some("0 0 8 8"));
        assert_eq!(el.attribute("viewbox"), None);
    }

    #[test]
    fn skips_prolog_and_comments() {
        let source = "\u{feff}<?xml version=\"1.0\"?>\n<!-- Generator: Sketch -->\n<!DOCTYPE svg>\n<svg viewBox=\"0 0 1 1\"><rect/></svg>\n";
        let el = normalize(source).unwrap();
        assert_eq!(el.children(), "<rect/>");
    }

    #[test]
    fn preserves_children_verbatim() {
        let children = "\n  <g fill=\"none\">\n    <path d=\"M0 0h24v24H0z\"/>\n    <title>Home &amp; away</title>\n  </g>\n";
        let source = format!("<svg viewBox=\"0 0 24 24\">{children}</svg>");
        let el = normalize(&source).unwrap();
        assert_eq!(el.children(), children);
    }

    #[test]
    fn nested_svg_does_not_end_root_early() {
        let el = normalize("<svg><svg x=\"1\"><path/></svg><circle/></svg>").unwrap();
        assert_eq!(el.children(), "<svg x=\"1\"><path/></svg><circle/>");
    }

    #[test]
    fn finds_svg_inside_wrapper_markup() {
        let el = normalize("<div><svg viewBox=\"0 0 2 2\"><path/></svg></div>").unwrap();
        assert_eq!(el.attribute(VIEW_BOX), Some("0 0 2 2"));
        assert_eq!(el.children(), "<path/>");
    }

    #[test]
    fn self_closing_root_serializes_with_close_tag() {
        let el = normalize("<svg viewBox=\"0 0 1 1\" />").unwrap();
        assert_eq!(
            el.outer_html(),
            r#"<svg viewBox="0 0 1 1" width="1em" height="1em" fill="currentColor"></svg>"#
        );
    }

    #[test]
    fn root_tag_is_written_in_lowercase() {
        let el = normalize(r#"<SVG viewBox="0 0 1 1"><path/></SVG>"#).unwrap();
        assert_eq!(
            el.outer_html(),
            r#"<svg viewBox="0 0 1 1" width="1em" height="1em" fill="currentColor"><path/></svg>"#
        );
    }

    #[test]
    fn rejects_documents_without_svg() {
        assert!(matches!(normalize("<div></div>"), Err(SvgError::MissingRoot)));
        assert!(matches!(normalize(""), Err(SvgError::MissingRoot)));
    }

    #[test]
    fn rejects_unclosed_root() {
        assert!(matches!(
            normalize("<svg viewBox=\"0 0 1 1\"><path/>"),
            Err(SvgError::Malformed { .. })
        ));
    }

    #[test]
    fn parse_keeps_original_attributes() {
        let el = parse_svg(r#"<svg stroke="red" viewBox="0 0 4 4"/>"#).unwrap();
        assert_eq!(el.attribute_names(), vec!["stroke", "viewBox"]);
    }
}
