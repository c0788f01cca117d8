//! Document renderers.
//!
//! All renderers share one dispatch-by-kind step ([`view`]) that builds an
//! element tree; they differ only in how the tree is written out:
//!
//! - **preview**: editable blocks addressed by node index
//! - **markup**: static HTML, blank-line separated
//! - **code**: a `GeneratedUI` JSX component
//!
//! Every interpolated string is escaped for `&`, `<` and `>`.

mod code;
mod element;
mod escape;
mod export;
mod markup;
mod preview;
mod view;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::Document;

pub use code::{render_code, COMPONENT_NAME};
pub use element::{Child, Element};
pub use escape::{escape_attr, escape_text};
pub use export::{export_document, EXPORT_CSS, EXPORT_FILE_NAME};
pub use markup::render_markup;
pub use preview::{render_preview, render_preview_html, PreviewBlock};
pub use view::{grid_titles, view};

/// Which artifact the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Preview,
    Html,
    Jsx,
}

impl OutputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Preview => "preview",
            OutputMode::Html => "html",
            OutputMode::Jsx => "jsx",
        }
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preview" => Ok(OutputMode::Preview),
            "html" | "markup" => Ok(OutputMode::Html),
            "jsx" | "react" | "code" => Ok(OutputMode::Jsx),
            other => Err(format!(
                "Unknown output mode '{}' (expected preview, html or jsx)",
                other
            )),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render `doc` in the given mode as a single string.
pub fn render(doc: &Document, mode: OutputMode) -> String {
    match mode {
        OutputMode::Preview => render_preview_html(doc),
        OutputMode::Html => render_markup(doc),
        OutputMode::Jsx => render_code(doc),
    }
}
