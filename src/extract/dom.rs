use quick_xml::Reader;
use quick_xml::events::Event;

use crate::core::ExtractError;

/// A parsed XML element with namespace prefixes already stripped.
///
/// eSocial payloads in the wild mix default namespaces, `esocial:` and
/// `ns2:` prefixes depending on the tool that produced and signed them.
/// Keeping only the local name makes every lookup layout-agnostic; name
/// comparisons are additionally case-insensitive.
#[derive(Debug, Clone)]
pub struct Element {
    local_name: String,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// Parse a whole document into an element tree.
    ///
    /// The returned node is a synthetic document node (empty local name)
    /// whose children are the top-level elements, so lookups behave the
    /// same regardless of which wrapper element a producer used.
    pub fn parse(xml: &str) -> Result<Element, ExtractError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<Element> = vec![Element {
            local_name: String::new(),
            text: String::new(),
            children: Vec::new(),
        }];

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    stack.push(Element {
                        local_name: local_name_of(e.name()),
                        text: String::new(),
                        children: Vec::new(),
                    });
                }
                Ok(Event::Empty(ref e)) => {
                    let leaf = Element {
                        local_name: local_name_of(e.name()),
                        text: String::new(),
                        children: Vec::new(),
                    };
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(leaf);
                    }
                }
                Ok(Event::Text(ref e)) => {
                    let text = e.unescape().unwrap_or_default();
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&text);
                    }
                }
                Ok(Event::CData(e)) => {
                    let bytes = e.into_inner();
                    let text = String::from_utf8_lossy(&bytes);
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&text);
                    }
                }
                Ok(Event::End(_)) => {
                    // Mismatched end tags are reported by the reader
                    // itself, so the stack always has a parent here.
                    if stack.len() > 1 {
                        let finished = stack.pop();
                        if let (Some(parent), Some(el)) = (stack.last_mut(), finished) {
                            parent.children.push(el);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(ExtractError::MalformedXml(e.to_string())),
                _ => {}
            }
        }

        let Some(root) = stack.pop() else {
            return Err(ExtractError::MalformedXml("empty document".into()));
        };
        if !stack.is_empty() {
            return Err(ExtractError::MalformedXml("unclosed element".into()));
        }
        if root.children.is_empty() {
            return Err(ExtractError::MalformedXml("document has no root element".into()));
        }
        Ok(root)
    }

    /// Local (unprefixed) tag name. Empty for the document node.
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Direct text content, entities unescaped.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Child elements in document order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// First element in this subtree (self included, depth-first
    /// document order) whose local name matches `name`.
    pub fn find_first(&self, name: &str) -> Option<&Element> {
        if self.local_name.eq_ignore_ascii_case(name) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_first(name))
    }

    /// Every element in this subtree (self included, document order)
    /// whose local name matches `name`.
    pub fn find_all<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut out = Vec::new();
        self.collect_into(name, &mut out);
        out
    }

    fn collect_into<'a>(&'a self, name: &str, out: &mut Vec<&'a Element>) {
        if self.local_name.eq_ignore_ascii_case(name) {
            out.push(self);
        }
        for child in &self.children {
            child.collect_into(name, out);
        }
    }

    /// Text content of the first matching element, verbatim.
    pub fn text_of(&self, name: &str) -> Option<&str> {
        self.find_first(name).map(|el| el.text.as_str())
    }
}

fn local_name_of(name: quick_xml::name::QName<'_>) -> String {
    String::from_utf8_lossy(name.local_name().as_ref()).into_owned()
}
