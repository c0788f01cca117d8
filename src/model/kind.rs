//! Node kind catalog: kind tags and their property schemas.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of component kinds understood by the renderers.
///
/// Unrecognized tags are kept as [`NodeKind::Custom`] and render as a
/// generic block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    Hero,
    Navbar,
    Form,
    List,
    Card,
    Grid,
    TwoColumn,
    Pricing,
    Testimonial,
    Features,
    Faq,
    Footer,
    Button,
    /// Generic text block, also the fallback for unknown kinds.
    Block,
    Custom(String),
}

/// Property schema for a kind.
#[derive(Debug, Clone, Copy)]
pub struct KindDef {
    /// Tag used in serialized documents (e.g. "two-column").
    pub tag: &'static str,
    /// Properties that are semantically lists.
    pub list_props: &'static [&'static str],
    /// Properties that are semantically numbers.
    pub numeric_props: &'static [&'static str],
    /// Properties holding question/answer pairs.
    pub pair_props: &'static [&'static str],
}

const REGISTRY: &[(NodeKind, KindDef)] = &[
    (
        NodeKind::Hero,
        KindDef {
            tag: "hero",
            list_props: &[],
            numeric_props: &[],
            pair_props: &[],
        },
    ),
    (
        NodeKind::Navbar,
        KindDef {
            tag: "navbar",
            list_props: &["links"],
            numeric_props: &[],
            pair_props: &[],
        },
    ),
    (
        NodeKind::Form,
        KindDef {
            tag: "form",
            list_props: &["fields"],
            numeric_props: &[],
            pair_props: &[],
        },
    ),
    (
        NodeKind::List,
        KindDef {
            tag: "list",
            list_props: &["items"],
            numeric_props: &[],
            pair_props: &[],
        },
    ),
    (
        NodeKind::Card,
        KindDef {
            tag: "card",
            list_props: &[],
            numeric_props: &[],
            pair_props: &[],
        },
    ),
    (
        NodeKind::Grid,
        KindDef {
            tag: "grid",
            list_props: &[],
            numeric_props: &["items"],
            pair_props: &[],
        },
    ),
    (
        NodeKind::TwoColumn,
        KindDef {
            tag: "two-column",
            list_props: &[],
            numeric_props: &[],
            pair_props: &[],
        },
    ),
    (
        NodeKind::Pricing,
        KindDef {
            tag: "pricing",
            list_props: &["plans"],
            numeric_props: &["price"],
            pair_props: &[],
        },
    ),
    (
        NodeKind::Testimonial,
        KindDef {
            tag: "testimonial",
            list_props: &[],
            numeric_props: &[],
            pair_props: &[],
        },
    ),
    (
        NodeKind::Features,
        KindDef {
            tag: "features",
            list_props: &["items"],
            numeric_props: &[],
            pair_props: &[],
        },
    ),
    (
        NodeKind::Faq,
        KindDef {
            tag: "faq",
            list_props: &[],
            numeric_props: &[],
            pair_props: &["questions"],
        },
    ),
    (
        NodeKind::Footer,
        KindDef {
            tag: "footer",
            list_props: &[],
            numeric_props: &[],
            pair_props: &[],
        },
    ),
    (
        NodeKind::Button,
        KindDef {
            tag: "button",
            list_props: &[],
            numeric_props: &[],
            pair_props: &[],
        },
    ),
    (
        NodeKind::Block,
        KindDef {
            tag: "block",
            list_props: &[],
            numeric_props: &[],
            pair_props: &[],
        },
    ),
];

impl NodeKind {
    /// Schema for a built-in kind. `None` for custom kinds.
    pub fn def(&self) -> Option<&'static KindDef> {
        REGISTRY
            .iter()
            .find(|(kind, _)| kind == self)
            .map(|(_, def)| def)
    }

    /// Serialized tag for this kind.
    pub fn tag(&self) -> &str {
        match self {
            NodeKind::Custom(tag) => tag,
            other => other.def().map(|d| d.tag).unwrap_or("block"),
        }
    }

    pub fn is_list_prop(&self, name: &str) -> bool {
        self.def().is_some_and(|d| d.list_props.contains(&name))
    }

    pub fn is_numeric_prop(&self, name: &str) -> bool {
        self.def().is_some_and(|d| d.numeric_props.contains(&name))
    }

    pub fn is_pair_prop(&self, name: &str) -> bool {
        self.def().is_some_and(|d| d.pair_props.contains(&name))
    }
}

impl FromStr for NodeKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let alias = match normalized.as_str() {
            "nav" | "header" | "navigation" => "navbar",
            "twocolumn" | "two_column" | "two column" => "two-column",
            "feature" | "feature-list" => "features",
            "text" | "paragraph" => "block",
            other => other,
        };
        Ok(REGISTRY
            .iter()
            .find(|(_, def)| def.tag == alias)
            .map(|(kind, _)| kind.clone())
            .unwrap_or_else(|| NodeKind::Custom(s.trim().to_string())))
    }
}

impl From<String> for NodeKind {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        kind.tag().to_string()
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
