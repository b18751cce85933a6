//! Immutable vector output: path elements, groups, and SVG serialization.
//!
//! Renderers return an [`SvgNode`] tree by value; callers decide whether to
//! serialize it with [`SvgNode::to_markup`] / [`svg_document`] or to walk it and
//! feed another backend.

use crate::draw::Color;
use crate::geom::Box2d;
use crate::util::fmt_num;
use serde::Serialize;
use std::fmt::Write as _;

/// A single `<path>` with its presentation attributes in insertion order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PathElement {
    pub d: String,
    pub attrs: Vec<(String, String)>,
}

impl PathElement {
    pub fn new(d: impl Into<String>) -> Self {
        Self {
            d: d.into(),
            attrs: Vec::new(),
        }
    }

    /// Builder-style attribute setter; a repeated key overwrites the earlier value.
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((key.to_string(), value)),
        }
        self
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Export tree. Children of a group paint in order: first child is bottom-most.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SvgNode {
    Path(PathElement),
    Group { children: Vec<SvgNode> },
}

impl SvgNode {
    pub fn group(children: Vec<SvgNode>) -> Self {
        SvgNode::Group { children }
    }

    /// All path elements in paint order (bottom first).
    pub fn paths(&self) -> Vec<&PathElement> {
        let mut out = Vec::new();
        self.collect_paths(&mut out);
        out
    }

    fn collect_paths<'a>(&'a self, out: &mut Vec<&'a PathElement>) {
        match self {
            SvgNode::Path(path) => out.push(path),
            SvgNode::Group { children } => {
                for child in children {
                    child.collect_paths(out);
                }
            }
        }
    }

    /// Serializes this node as SVG markup.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out, 0);
        out
    }

    fn write_markup(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        match self {
            SvgNode::Path(path) => {
                let _ = write!(out, "{indent}<path d=\"{}\"", escape(path.d.trim_end()));
                for (key, value) in &path.attrs {
                    let _ = write!(out, " {key}=\"{}\"", escape(value));
                }
                out.push_str("/>\n");
            }
            SvgNode::Group { children } => {
                let _ = writeln!(out, "{indent}<g>");
                for child in children {
                    child.write_markup(out, depth + 1);
                }
                let _ = writeln!(out, "{indent}</g>");
            }
        }
    }
}

/// Wraps `node` in a standalone SVG document whose view box is `bounds`.
pub fn svg_document(node: &SvgNode, bounds: Box2d, background: Option<Color>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"{x} {y} {w} {h}\">",
        x = fmt_num(bounds.x),
        y = fmt_num(bounds.y),
        w = fmt_num(bounds.width),
        h = fmt_num(bounds.height),
    );
    if let Some(bg) = background {
        let _ = writeln!(
            out,
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            fmt_num(bounds.x),
            fmt_num(bounds.y),
            fmt_num(bounds.width),
            fmt_num(bounds.height),
            bg.to_hex()
        );
    }
    node.write_markup(&mut out, 1);
    out.push_str("</svg>\n");
    out
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_overwrites_existing_attribute() {
        let path = PathElement::new("M0,0 L1,1 ")
            .with("fill", "none")
            .with("stroke", "#000000")
            .with("fill", "red");
        assert_eq!(path.attr("fill"), Some("red"));
        assert_eq!(path.attrs.len(), 2);
    }

    #[test]
    fn group_markup_nests_children_in_paint_order() {
        let node = SvgNode::group(vec![
            SvgNode::Path(PathElement::new("M0,0 L1,0").with("fill", "a")),
            SvgNode::Path(PathElement::new("M0,0 L0,1").with("fill", "b")),
        ]);
        let markup = node.to_markup();
        let a = markup.find("fill=\"a\"").expect("first child");
        let b = markup.find("fill=\"b\"").expect("second child");
        assert!(markup.starts_with("<g>\n"));
        assert!(a < b);
        assert_eq!(node.paths().len(), 2);
    }

    #[test]
    fn attribute_values_are_escaped() {
        let node = SvgNode::Path(PathElement::new("M0,0").with("data-x", "a\"<b>&"));
        assert!(node.to_markup().contains("data-x=\"a&quot;&lt;b&gt;&amp;\""));
    }

    #[test]
    fn document_sets_view_box() {
        let node = SvgNode::Path(PathElement::new("M0,0 L1,1"));
        let doc = svg_document(
            &node,
            Box2d {
                x: -2.0,
                y: -2.0,
                width: 14.0,
                height: 14.0,
            },
            None,
        );
        assert!(doc.contains("viewBox=\"-2 -2 14 14\""));
        assert!(doc.trim_end().ends_with("</svg>"));
    }
}
