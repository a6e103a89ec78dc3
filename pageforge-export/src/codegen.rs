//! Document-to-code generation.
//!
//! A pure transformation: the same document and configuration always produce
//! byte-identical markup and stylesheet text. Both artifacts are built in a
//! single pass over the element sequence, so the `element-<index>` class
//! names cannot drift apart between them.
//!
//! Element text is emitted verbatim, with no escaping of markup-significant
//! characters. That mirrors the builder's "what you typed is what you get"
//! contract and is a known limitation, not a feature.

use std::fmt::Write;

use pageforge_core::{Document, Element, ElementKind};

/// Default page title emitted into the markup head.
pub const DEFAULT_TITLE: &str = "My Webpage";

/// Configuration for code generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenConfig {
    /// Page title for the markup `<title>` tag.
    pub title: String,
    /// Stylesheet filename referenced by the markup's `<link>` tag. Only a
    /// final path segment belongs here; the writer fills it in from the
    /// chosen output path.
    pub stylesheet_href: String,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            stylesheet_href: "webpage.css".to_string(),
        }
    }
}

/// The generated markup/stylesheet pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    /// Complete HTML document.
    pub markup: String,
    /// Companion stylesheet.
    pub stylesheet: String,
}

/// Generates static markup and stylesheet text from a document.
#[derive(Debug, Clone, Default)]
pub struct PageGenerator {
    config: CodegenConfig,
}

impl PageGenerator {
    /// Create a generator with the given configuration.
    #[must_use]
    pub const fn new(config: CodegenConfig) -> Self {
        Self { config }
    }

    /// Create a generator with default title and stylesheet reference.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(CodegenConfig::default())
    }

    /// Generate the markup and stylesheet for a document.
    ///
    /// Deterministic given the document's current state; no side effects and
    /// no dependence on the clock. An empty document produces the page
    /// skeleton and stylesheet boilerplate with no element rules; rejecting
    /// empty exports is the writer's concern.
    #[must_use]
    pub fn generate(&self, document: &Document) -> GeneratedPage {
        let mut stylesheet = String::with_capacity(1024);
        let mut markup = String::with_capacity(1024);

        emit_stylesheet_boilerplate(&mut stylesheet, document);
        self.emit_markup_head(&mut markup);

        for (index, element) in document.elements().iter().enumerate() {
            emit_element_rule(&mut stylesheet, index, element);
            emit_element_tag(&mut markup, index, element);
        }

        emit_markup_tail(&mut markup);

        GeneratedPage { markup, stylesheet }
    }

    fn emit_markup_head(&self, html: &mut String) {
        html.push_str("<!DOCTYPE html>\n");
        html.push_str("<html lang=\"en\">\n");
        html.push_str("<head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        let _ = writeln!(html, "    <title>{}</title>", self.config.title);
        let _ = writeln!(
            html,
            "    <link rel=\"stylesheet\" href=\"{}\">",
            self.config.stylesheet_href
        );
        html.push_str("</head>\n");
        html.push_str("<body>\n");
        html.push_str("    <div class=\"container\">\n");
    }
}

fn emit_stylesheet_boilerplate(css: &mut String, document: &Document) {
    css.push_str("/* Generated by PageForge */\n\n");
    css.push_str("body {\n");
    css.push_str("    margin: 0;\n");
    css.push_str("    padding: 20px;\n");
    css.push_str("    font-family: Arial, sans-serif;\n");
    css.push_str("}\n\n");
    css.push_str(".container {\n");
    css.push_str("    position: relative;\n");
    let _ = writeln!(css, "    width: {}px;", document.canvas_width());
    let _ = writeln!(css, "    min-height: {}px;", document.canvas_height());
    css.push_str("}\n\n");
}

fn emit_markup_tail(html: &mut String) {
    html.push_str("    </div>\n");
    html.push_str("</body>\n");
    html.push_str("</html>\n");
}

/// Emit one `.element-<index>` rule.
fn emit_element_rule(css: &mut String, index: usize, element: &Element) {
    let style = &element.style;
    let _ = writeln!(css, ".element-{index} {{");
    css.push_str("    position: absolute;\n");
    let _ = writeln!(css, "    left: {}px;", element.position.x);
    let _ = writeln!(css, "    top: {}px;", element.position.y);
    let _ = writeln!(css, "    width: {}px;", element.width);
    let _ = writeln!(css, "    height: {}px;", element.height);
    let _ = writeln!(css, "    background-color: {};", style.background);
    let _ = writeln!(css, "    color: {};", style.text_color);
    let _ = writeln!(css, "    font-family: {};", style.font_family);
    let _ = writeln!(css, "    font-size: {}px;", style.font_size);
    let _ = writeln!(css, "    font-weight: {};", style.font_weight);
    let _ = writeln!(css, "    font-style: {};", style.font_style);
    let _ = writeln!(css, "    text-align: {};", style.text_align);
    let _ = writeln!(
        css,
        "    border: {}px solid {};",
        style.border_width, style.border_color
    );
    let _ = writeln!(css, "    border-radius: {}px;", style.border_radius);
    let _ = writeln!(css, "    padding: {}px;", style.padding);
    let _ = writeln!(css, "    margin: {}px;", style.margin);
    // Declared width/height are exact, not content-only.
    css.push_str("    box-sizing: border-box;\n");
    if element.kind == ElementKind::Button {
        css.push_str("    cursor: pointer;\n");
    }
    css.push_str("}\n\n");
}

/// Emit one element tag inside the container wrapper.
fn emit_element_tag(html: &mut String, index: usize, element: &Element) {
    let tag = element.kind.html_tag();
    let _ = writeln!(
        html,
        "        <{tag} class=\"element-{index}\">{}</{tag}>",
        element.text
    );
}
