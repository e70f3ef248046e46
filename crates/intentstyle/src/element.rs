//! Text elements: resolved style plus host element and content mode.
//!
//! The host kind and the `display` property are independent: an `inline`
//! intent selects a span host *and* sets `display: inline`, while
//! `inlineText` only sets the property on a paragraph host.

use minijinja::{context, AutoEscape, Environment, Error};

use crate::intent::StyleIntents;
use crate::style::{ResolvedStyle, Resolver};

const ELEMENT_TEMPLATE: &str = r#"<{{ tag }}{% if style %} style="{{ style }}"{% endif %}{% if title %} title="{{ title }}"{% endif %}>{% if raw %}{{ content|safe }}{% else %}{{ content }}{% endif %}</{{ tag }}>"#;

/// The container an element is hosted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Block-level paragraph host.
    Paragraph,
    /// Inline span host.
    Span,
}

impl ElementKind {
    pub fn tag(self) -> &'static str {
        match self {
            ElementKind::Paragraph => "p",
            ElementKind::Span => "span",
        }
    }
}

/// How children are placed in the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Children are text nodes and are escaped.
    Text,
    /// Children are pre-escaped markup injected verbatim.
    Raw,
}

/// A text element request: intents plus content.
///
/// # Example
///
/// ```rust
/// use intentstyle::{ElementKind, Resolver, StyleIntents, TextElement};
///
/// let element = TextElement::new(StyleIntents::new().inline().bold()).children("Save");
/// let rendered = element.render(&Resolver::default());
/// assert_eq!(rendered.kind, ElementKind::Span);
/// assert!(rendered.to_html().unwrap().starts_with("<span style="));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextElement {
    pub intents: StyleIntents,
    pub children: String,
    pub title: Option<String>,
}

impl TextElement {
    pub fn new(intents: StyleIntents) -> Self {
        Self {
            intents,
            children: String::new(),
            title: None,
        }
    }

    pub fn children(mut self, children: impl Into<String>) -> Self {
        self.children = children.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn kind(&self) -> ElementKind {
        if self.intents.inline {
            ElementKind::Span
        } else {
            ElementKind::Paragraph
        }
    }

    pub fn mode(&self) -> RenderMode {
        if self.intents.raw {
            RenderMode::Raw
        } else {
            RenderMode::Text
        }
    }

    /// Resolves the element's style and host.
    pub fn render(&self, resolver: &Resolver) -> RenderedElement {
        RenderedElement {
            kind: self.kind(),
            mode: self.mode(),
            style: resolver.resolve(&self.intents),
            muted: self.intents.muted,
            title: self.title.clone(),
            content: self.children.clone(),
        }
    }
}

/// A resolved element ready for a rendering host.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedElement {
    pub kind: ElementKind,
    pub mode: RenderMode,
    pub style: ResolvedStyle,
    /// `false` unless the caller set `muted`.
    pub muted: bool,
    pub title: Option<String>,
    pub content: String,
}

impl RenderedElement {
    /// Renders the element as an HTML fragment with an inline style.
    ///
    /// Text content and attributes are escaped; raw content is not.
    pub fn to_html(&self) -> Result<String, Error> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.render_str(
            ELEMENT_TEMPLATE,
            context! {
                tag => self.kind.tag(),
                style => self.style.to_css(),
                title => self.title,
                raw => self.mode == RenderMode::Raw,
                content => self.content,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(element: TextElement) -> RenderedElement {
        element.render(&Resolver::default())
    }

    #[test]
    fn host_kind_follows_inline_only() {
        let el = render(TextElement::new(StyleIntents::new().inline()));
        assert_eq!(el.kind, ElementKind::Span);
        assert!(el.style.display().is_some());

        let el = render(TextElement::new(StyleIntents::new().inline_text()));
        assert_eq!(el.kind, ElementKind::Paragraph);
        assert!(el.style.display().is_some());
    }

    #[test]
    fn text_mode_escapes_children() {
        let el = render(TextElement::new(StyleIntents::new()).children("a < b & c"));
        let html = el.to_html().unwrap();
        assert!(html.starts_with("<p style=\"margin: 0;"));
        assert!(html.contains(">a &lt; b &amp; c</p>"));
    }

    #[test]
    fn raw_mode_injects_markup() {
        let el = render(TextElement::new(StyleIntents::new().raw()).children("<b>bold</b>"));
        assert_eq!(el.mode, RenderMode::Raw);
        assert!(!el.muted);
        let html = el.to_html().unwrap();
        assert!(html.contains("><b>bold</b></p>"));
    }

    #[test]
    fn muted_is_reported() {
        let el = render(TextElement::new(StyleIntents::new().muted()));
        assert!(el.muted);
    }

    #[test]
    fn title_attribute_is_escaped() {
        let el = render(TextElement::new(StyleIntents::new()).title("say \"hi\"").children("x"));
        let html = el.to_html().unwrap();
        assert!(html.contains("title=\"say &quot;hi&quot;\""));
    }
}
