//! Minimal element tree shared by all renderers, plus its text emitter.

use std::fmt::Write;

use super::escape::{escape_attr, escape_text};

/// Property a text region edits in the live preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub prop: String,
    /// Index into a list-valued property.
    pub item: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Text(String),
    Element(Element),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: &'static str,
    classes: Vec<&'static str>,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Child>,
    editable: bool,
    inline: bool,
    binding: Option<Binding>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
            editable: false,
            inline: false,
            binding: None,
        }
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Child::Text(text.into()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Child::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Child::Element));
        self
    }

    /// Text region editable in the preview, not synced to any property.
    pub fn editable(mut self) -> Self {
        self.editable = true;
        self
    }

    /// Keep element children on the same line as the parent tag.
    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }

    /// Editable text region synced to property `prop`.
    pub fn bind(mut self, prop: &str) -> Self {
        self.editable = true;
        self.binding = Some(Binding {
            prop: prop.to_string(),
            item: None,
        });
        self
    }

    /// Editable text region synced to item `item` of list property `prop`.
    pub fn bind_item(mut self, prop: &str, item: usize) -> Self {
        self.editable = true;
        self.binding = Some(Binding {
            prop: prop.to_string(),
            item: Some(item),
        });
        self
    }

    fn is_void(&self) -> bool {
        matches!(self.tag, "input" | "img" | "br" | "hr")
    }

    fn is_inline(&self) -> bool {
        self.inline || self.children.iter().all(|c| matches!(c, Child::Text(_)))
    }
}

/// Output flavor for [`write_element`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct Dialect {
    pub class_attr: &'static str,
    pub void_suffix: &'static str,
    /// Emit `contenteditable` and binding markers.
    pub interactive: bool,
}

pub(crate) const HTML: Dialect = Dialect {
    class_attr: "class",
    void_suffix: ">",
    interactive: false,
};

pub(crate) const PREVIEW: Dialect = Dialect {
    class_attr: "class",
    void_suffix: ">",
    interactive: true,
};

pub(crate) const JSX: Dialect = Dialect {
    class_attr: "className",
    void_suffix: " />",
    interactive: false,
};

/// Write `el` starting at `indent` spaces. No trailing newline.
pub(crate) fn write_element(out: &mut String, el: &Element, indent: usize, dialect: Dialect) {
    let pad = " ".repeat(indent);
    out.push_str(&pad);
    write_open_tag(out, el, dialect);
    if el.is_void() {
        return;
    }

    if el.is_inline() {
        write_inline_children(out, el, dialect);
    } else {
        for child in &el.children {
            out.push('\n');
            match child {
                Child::Text(text) => {
                    let _ = write!(out, "{}  {}", pad, escape_text(text));
                }
                Child::Element(inner) => write_element(out, inner, indent + 2, dialect),
            }
        }
        out.push('\n');
        out.push_str(&pad);
    }
    let _ = write!(out, "</{}>", el.tag);
}

fn write_inline(out: &mut String, el: &Element, dialect: Dialect) {
    write_open_tag(out, el, dialect);
    if el.is_void() {
        return;
    }
    write_inline_children(out, el, dialect);
    let _ = write!(out, "</{}>", el.tag);
}

fn write_inline_children(out: &mut String, el: &Element, dialect: Dialect) {
    for child in &el.children {
        match child {
            Child::Text(text) => out.push_str(&escape_text(text)),
            Child::Element(inner) => write_inline(out, inner, dialect),
        }
    }
}

fn write_open_tag(out: &mut String, el: &Element, dialect: Dialect) {
    let _ = write!(out, "<{}", el.tag);
    if !el.classes.is_empty() {
        let _ = write!(out, " {}=\"{}\"", dialect.class_attr, el.classes.join(" "));
    }
    for (name, value) in &el.attrs {
        let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
    }
    if dialect.interactive && el.editable {
        out.push_str(" contenteditable=\"true\"");
        if let Some(binding) = &el.binding {
            let _ = write!(out, " data-prop=\"{}\"", escape_attr(&binding.prop));
            if let Some(item) = binding.item {
                let _ = write!(out, " data-item=\"{}\"", item);
            }
        }
    }
    if el.is_void() {
        out.push_str(dialect.void_suffix);
    } else {
        out.push('>');
    }
}
