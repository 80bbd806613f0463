use serde::Serialize;
use std::collections::BTreeMap;

const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];
const BLOCK_TAGS: &[&str] = &["div", "p", "section", "article", "header", "footer", "li"];

/// An owned element tree produced by presenter primitives
///
/// Nodes carry just enough structure for renderers to locate the pieces of
/// a generic container by class name and overlay their own content on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub style: Vec<(String, String)>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class: None,
            style: Vec::new(),
            attrs: BTreeMap::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Inline text node
    pub fn span(text: impl Into<String>) -> Self {
        Self::element("span").with_text(text)
    }

    pub fn line_break() -> Self {
        Self::element("br")
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.set_class(class);
        self
    }

    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_style(property, value);
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn set_class(&mut self, class: impl Into<String>) {
        self.class = Some(class.into());
    }

    /// Set an inline style property, replacing an earlier value for it
    pub fn set_style(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.style.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.style.push((property, value)),
        }
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    /// Replace the node's entire text content, dropping any children
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children.clear();
        self.text = Some(text.into());
    }

    /// Append a child and return a handle to it
    pub fn push(&mut self, child: Node) -> &mut Node {
        let index = self.children.len();
        self.children.push(child);
        &mut self.children[index]
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class
            .as_deref()
            .is_some_and(|c| c.split_whitespace().any(|part| part == class))
    }

    /// Depth-first search for the first node carrying `class`
    pub fn find_by_class(&self, class: &str) -> Option<&Node> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_class(class))
    }

    pub fn find_by_class_mut(&mut self, class: &str) -> Option<&mut Node> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|c| c.find_by_class_mut(class))
    }

    pub fn find_all_by_class<'a>(&'a self, class: &str) -> Vec<&'a Node> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Node>) {
        if self.has_class(class) {
            found.push(self);
        }
        for child in &self.children {
            child.collect_by_class(class, found);
        }
    }

    /// Insert `node` as the next sibling of the first descendant carrying `class`
    ///
    /// Gives the node back when no such sibling exists.
    pub fn insert_after_class(&mut self, class: &str, node: Node) -> Result<(), Node> {
        if let Some(index) = self.children.iter().position(|c| c.has_class(class)) {
            self.children.insert(index + 1, node);
            return Ok(());
        }

        let mut node = node;
        for child in &mut self.children {
            match child.insert_after_class(class, node) {
                Ok(()) => return Ok(()),
                Err(returned) => node = returned,
            }
        }
        Err(node)
    }

    /// Concatenated text of this node and all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Serialize to HTML, escaping text and attribute values
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if let Some(class) = &self.class {
            push_attr(out, "class", class);
        }
        for (name, value) in &self.attrs {
            push_attr(out, name, value);
        }
        if !self.style.is_empty() {
            let css = self
                .style
                .iter()
                .map(|(p, v)| format!("{}: {}", p, v))
                .collect::<Vec<_>>()
                .join("; ");
            push_attr(out, "style", &css);
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }

        if let Some(text) = &self.text {
            out.push_str(&escape_html(text));
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }

    /// Plain-text rendering: block elements and line breaks start new lines
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out.lines()
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn write_text(&self, out: &mut String) {
        if self.tag == "br" {
            out.push('\n');
            return;
        }

        let block = BLOCK_TAGS.contains(&self.tag.as_str());
        if block && !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.write_text(out);
        }
        if block && !out.ends_with('\n') {
            out.push('\n');
        }
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_html(value));
    out.push('"');
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
