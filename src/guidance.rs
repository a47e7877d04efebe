//! Structured guidance content and its prose formatters.
//!
//! `behavioral_guidelines` in a recipe is arbitrarily shaped YAML: a bare
//! string, a list of strings, or nested mappings of either. [`GuidanceNode`]
//! models that shape as a closed variant so the formatters can match
//! exhaustively instead of poking at dynamic values.

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// One node of structured guidance content.
///
/// Mapping entries keep their YAML insertion order; output is deterministic
/// for a given document.
#[derive(Debug, Clone, PartialEq)]
pub enum GuidanceNode {
    Scalar(String),
    Sequence(Vec<GuidanceNode>),
    Mapping(Vec<(String, GuidanceNode)>),
    /// Null, bool, number: renders nothing
    Empty,
}

impl<'de> Deserialize<'de> for GuidanceNode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NodeVisitor;

        impl<'de> Visitor<'de> for NodeVisitor {
            type Value = GuidanceNode;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a string, sequence, or mapping of guidance content")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
                Ok(GuidanceNode::Scalar(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Self::Value, E> {
                Ok(GuidanceNode::Scalar(v))
            }

            fn visit_seq<A: SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(GuidanceNode::Sequence(items))
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::new();
                while let Some((key, value)) = map.next_entry::<String, GuidanceNode>()? {
                    entries.push((key, value));
                }
                Ok(GuidanceNode::Mapping(entries))
            }

            fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
                Ok(GuidanceNode::Empty)
            }

            fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
                Ok(GuidanceNode::Empty)
            }

            fn visit_bool<E: de::Error>(self, _: bool) -> std::result::Result<Self::Value, E> {
                Ok(GuidanceNode::Empty)
            }

            fn visit_i64<E: de::Error>(self, _: i64) -> std::result::Result<Self::Value, E> {
                Ok(GuidanceNode::Empty)
            }

            fn visit_u64<E: de::Error>(self, _: u64) -> std::result::Result<Self::Value, E> {
                Ok(GuidanceNode::Empty)
            }

            fn visit_f64<E: de::Error>(self, _: f64) -> std::result::Result<Self::Value, E> {
                Ok(GuidanceNode::Empty)
            }
        }

        deserializer.deserialize_any(NodeVisitor)
    }
}

/// Flatten a guidance node into indented, bulleted prose.
///
/// Scalars become a single bullet; sequence elements become bullets at the
/// same depth; mapping keys become bolded headers with their values
/// recursed one level deeper. Empty nodes emit nothing, so absent or
/// non-text leaves never leave a dangling line.
pub fn flatten(node: &GuidanceNode, depth: usize) -> String {
    let indent = "  ".repeat(depth);
    let mut out = String::new();

    match node {
        GuidanceNode::Scalar(text) => {
            out.push_str(&format!("{indent}- {text}\n"));
        }
        GuidanceNode::Sequence(items) => {
            for item in items {
                if let GuidanceNode::Scalar(text) = item {
                    out.push_str(&format!("{indent}- {text}\n"));
                }
            }
        }
        GuidanceNode::Mapping(entries) => {
            for (key, value) in entries {
                out.push_str(&format!("{indent}**{key}**:\n"));
                out.push_str(&flatten(value, depth + 1));
            }
        }
        GuidanceNode::Empty => {}
    }

    out
}

/// Format the top level of guidance as numbered recipe steps.
///
/// Each top-level mapping key becomes a "Step N" header; its value is
/// rendered one level only (scalars and sequences as bullets, anything
/// deeper is left to the nested flattener used by the analysis document).
/// Non-mapping input produces no steps.
pub fn format_steps(node: &GuidanceNode) -> String {
    let mut out = String::new();

    if let GuidanceNode::Mapping(entries) = node {
        for (idx, (key, value)) in entries.iter().enumerate() {
            out.push_str(&format!("**Step {}: {}**\n", idx + 1, key));
            match value {
                GuidanceNode::Sequence(items) => {
                    for item in items {
                        if let GuidanceNode::Scalar(text) = item {
                            out.push_str(&format!("- {text}\n"));
                        }
                    }
                }
                GuidanceNode::Scalar(text) => {
                    out.push_str(&format!("- {text}\n"));
                }
                _ => {}
            }
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> GuidanceNode {
        serde_yaml::from_str(yaml).expect("valid guidance yaml")
    }

    #[test]
    fn scalar_renders_single_bullet() {
        let node = parse("just one line of advice");
        assert_eq!(flatten(&node, 0), "- just one line of advice\n");
    }

    #[test]
    fn sequence_renders_bullet_per_element() {
        let node = parse("- first\n- second\n- third");
        assert_eq!(flatten(&node, 0), "- first\n- second\n- third\n");
    }

    #[test]
    fn three_level_mapping_indents_each_level() {
        let node = parse(
            "discovery:\n  entry_points:\n    locate:\n      - find main\n      - find config",
        );
        let text = flatten(&node, 0);
        assert_eq!(
            text,
            "**discovery**:\n  **entry_points**:\n    **locate**:\n      - find main\n      - find config\n"
        );
    }

    #[test]
    fn mapping_preserves_insertion_order() {
        let node = parse("zulu: one\nalpha: two\nmike: three");
        let text = flatten(&node, 0);
        let zulu = text.find("**zulu**").unwrap();
        let alpha = text.find("**alpha**").unwrap();
        let mike = text.find("**mike**").unwrap();
        assert!(zulu < alpha && alpha < mike);
    }

    #[test]
    fn null_and_numbers_render_nothing() {
        assert_eq!(flatten(&parse("~"), 0), "");
        assert_eq!(flatten(&parse("42"), 0), "");
        assert_eq!(flatten(&parse("true"), 0), "");
    }

    #[test]
    fn steps_number_top_level_keys() {
        let node = parse(
            "Survey the terrain:\n  - map the modules\n  - note the seams\nDig in: read every test",
        );
        let text = format_steps(&node);
        assert_eq!(
            text,
            "**Step 1: Survey the terrain**\n- map the modules\n- note the seams\n\n**Step 2: Dig in**\n- read every test\n\n"
        );
    }

    #[test]
    fn steps_skip_nested_mapping_bodies() {
        // One level only: a mapping value gets a header but no body
        let node = parse("Outer:\n  inner:\n    - hidden");
        let text = format_steps(&node);
        assert_eq!(text, "**Step 1: Outer**\n\n");
    }

    #[test]
    fn steps_from_non_mapping_are_empty() {
        assert_eq!(format_steps(&parse("- a\n- b")), "");
        assert_eq!(format_steps(&parse("plain text")), "");
    }
}
