//! Parsed effective (inheritance-flattened) POM.
//!
//! Maven writes the effective POM as a regular XML document rooted at
//! `<project>`, or at `<projects>` when several reactor modules are
//! rendered together. Values are indexed by their element path below the
//! project, with namespace prefixes dropped:
//!
//! ```text
//! <project><licenses><license><url>..</url>  =>  "licenses/license/url"
//! ```
//!
//! Repeated elements keep every value in document order. Only the first
//! `<project>` of a `<projects>` document is indexed.

use crate::error::{ErrorContext, PomCheckError, Result};
use indexmap::IndexMap;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::path::Path;

/// Element-path index over an effective POM.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectivePom {
    values: IndexMap<String, Vec<String>>,
}

impl EffectivePom {
    /// Parse an effective POM document.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut values: IndexMap<String, Vec<String>> = IndexMap::new();
        let mut stack: Vec<String> = Vec::new();
        let mut texts: Vec<String> = Vec::new();
        let mut root: Option<String> = None;
        let mut projects_seen = 0usize;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    let name = local_name(e.local_name().as_ref());
                    if stack.is_empty() {
                        if root.is_some() {
                            return Err(PomCheckError::xml(
                                "effective POM",
                                "more than one root element",
                            ));
                        }
                        root = Some(name.clone());
                    }
                    if stack.len() == 1 && stack[0] == "projects" && name == "project" {
                        projects_seen += 1;
                    }
                    stack.push(name);
                    texts.push(String::new());
                }
                Ok(Event::Empty(e)) => {
                    if stack.is_empty() && root.is_none() {
                        root = Some(local_name(e.local_name().as_ref()));
                    }
                }
                Ok(Event::Text(e)) => {
                    let text = e.unescape().map_err(|err| {
                        PomCheckError::xml(
                            "effective POM",
                            format!("at byte {}: {err}", reader.buffer_position()),
                        )
                    })?;
                    if let Some(buf) = texts.last_mut() {
                        buf.push_str(&text);
                    }
                }
                Ok(Event::CData(e)) => {
                    if let Some(buf) = texts.last_mut() {
                        buf.push_str(&String::from_utf8_lossy(&e.into_inner()));
                    }
                }
                Ok(Event::End(_)) => {
                    let text = texts.pop().unwrap_or_default();
                    let text = text.trim();
                    if !text.is_empty() {
                        if let Some(key) = project_key(&stack, projects_seen) {
                            values.entry(key).or_default().push(text.to_string());
                        }
                    }
                    stack.pop();
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(PomCheckError::xml(
                        "effective POM",
                        format!("at byte {}: {e}", reader.buffer_position()),
                    ))
                }
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(PomCheckError::xml(
                "effective POM",
                format!("document ends inside <{open}>"),
            ));
        }
        match root.as_deref() {
            Some("project" | "projects") => Ok(Self { values }),
            Some(other) => Err(PomCheckError::xml(
                "effective POM",
                format!("root element is <{other}>, expected <project>"),
            )),
            None => Err(PomCheckError::xml("effective POM", "document has no root element")),
        }
    }

    /// Read and parse an effective POM file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| PomCheckError::io(path, e))?;
        Self::parse(&content).with_context(|| path.display().to_string())
    }

    /// Every value at `path`, in document order.
    #[must_use]
    pub fn values(&self, path: &str) -> &[String] {
        self.values.get(path).map_or(&[], Vec::as_slice)
    }

    /// The first value at `path`.
    #[must_use]
    pub fn first(&self, path: &str) -> Option<&str> {
        self.values(path).first().map(String::as_str)
    }

}

/// Path of the current element relative to the indexed project, if any.
fn project_key(stack: &[String], projects_seen: usize) -> Option<String> {
    match stack.first().map(String::as_str) {
        Some("project") if stack.len() > 1 => Some(stack[1..].join("/")),
        Some("projects") if projects_seen == 1 && stack.len() > 2 && stack[1] == "project" => {
            Some(stack[2..].join("/"))
        }
        _ => None,
    }
}

fn local_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}
