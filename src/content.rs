//! Typed building blocks for long-form documents.
//!
//! A [`Document`] is a flat sequence of [`ContentBlock`]s. Container blocks
//! (accordions, tabs, two-column layouts, alerts) own nested documents, so a
//! body is a tree that is built fresh every time a detail view renders it and
//! dropped when that view goes away. Blocks never look anything up: every
//! piece of data they show is carried in the block itself.

mod embed;
pub mod interaction;

pub use embed::embed_url;

pub type Document = Vec<ContentBlock>;

/// A run of inline text with optional emphasis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Strong(String),
    Emphasis(String),
    Code(String),
}

pub type RichText = Vec<Inline>;

#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Paragraph(RichText),
    Heading(String),
    Subheading(String),
    Quote(RichText),
    List(Vec<RichText>),
    Code(CodeSnippet),
    Image(Figure),
    Video(VideoEmbed),
    Callout {
        kind: CalloutKind,
        body: RichText,
    },
    Alert {
        variant: AlertVariant,
        title: Option<String>,
        body: Document,
    },
    Accordion(Vec<AccordionItem>),
    Comparison {
        before: ComparisonSide,
        after: ComparisonSide,
    },
    Stats {
        stats: Vec<Stat>,
        columns: GridColumns,
    },
    TwoColumn {
        left: Document,
        right: Document,
        split: ColumnSplit,
    },
    Tabs(Vec<Tab>),
    Timeline(Vec<TimelineItem>),
    Features {
        features: Vec<Feature>,
        columns: GridColumns,
    },
    Divider,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSnippet {
    pub code: String,
    pub language: String,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImageSize {
    Small,
    Medium,
    #[default]
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Figure {
    pub src: String,
    pub alt: String,
    pub caption: Option<String>,
    pub size: ImageSize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoEmbed {
    pub src: String,
    pub title: String,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CalloutKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlertVariant {
    #[default]
    Default,
    Primary,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccordionItem {
    pub title: String,
    pub body: Document,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonSide {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub value: String,
    pub label: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GridColumns {
    Two,
    #[default]
    Three,
    Four,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColumnSplit {
    #[default]
    Equal,
    LeftHeavy,
    RightHeavy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub id: String,
    pub label: String,
    pub body: Document,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineItem {
    pub date: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

// Authoring helpers. Article bodies are written with these so they read close
// to the page they produce.

pub fn text(s: impl Into<String>) -> Inline {
    Inline::Text(s.into())
}

pub fn strong(s: impl Into<String>) -> Inline {
    Inline::Strong(s.into())
}

pub fn em(s: impl Into<String>) -> Inline {
    Inline::Emphasis(s.into())
}

pub fn code(s: impl Into<String>) -> Inline {
    Inline::Code(s.into())
}

pub fn paragraph(s: impl Into<String>) -> ContentBlock {
    ContentBlock::Paragraph(vec![text(s)])
}

pub fn rich(spans: impl IntoIterator<Item = Inline>) -> ContentBlock {
    ContentBlock::Paragraph(spans.into_iter().collect())
}

pub fn heading(s: impl Into<String>) -> ContentBlock {
    ContentBlock::Heading(s.into())
}

pub fn subheading(s: impl Into<String>) -> ContentBlock {
    ContentBlock::Subheading(s.into())
}

pub fn quote(s: impl Into<String>) -> ContentBlock {
    ContentBlock::Quote(vec![text(s)])
}

pub fn list<I, S>(items: I) -> ContentBlock
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ContentBlock::List(items.into_iter().map(|s| vec![text(s)]).collect())
}

pub fn rich_list(items: impl IntoIterator<Item = RichText>) -> ContentBlock {
    ContentBlock::List(items.into_iter().collect())
}

/// Code listing. A missing language falls back to
/// [`CodeSnippet::DEFAULT_LANGUAGE`].
pub fn code_block(
    filename: Option<&str>,
    language: Option<&str>,
    source: impl Into<String>,
) -> ContentBlock {
    let mut snippet = CodeSnippet::new(source);
    if let Some(language) = language {
        snippet.language = language.to_string();
    }
    snippet.filename = filename.map(str::to_string);
    ContentBlock::Code(snippet)
}

pub fn image(
    src: impl Into<String>,
    alt: impl Into<String>,
    caption: Option<&str>,
    size: ImageSize,
) -> ContentBlock {
    ContentBlock::Image(Figure {
        src: src.into(),
        alt: alt.into(),
        caption: caption.map(str::to_string),
        size,
    })
}

pub fn callout(kind: CalloutKind, body: impl IntoIterator<Item = Inline>) -> ContentBlock {
    ContentBlock::Callout {
        kind,
        body: body.into_iter().collect(),
    }
}

impl CodeSnippet {
    pub const DEFAULT_LANGUAGE: &'static str = "typescript";

    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: Self::DEFAULT_LANGUAGE.to_string(),
            filename: None,
        }
    }
}

#[cfg(test)]
impl ContentBlock {
    /// Nested documents owned by this block, in display order.
    pub fn children(&self) -> Vec<&Document> {
        match self {
            ContentBlock::Alert { body, .. } => vec![body],
            ContentBlock::Accordion(items) => items.iter().map(|item| &item.body).collect(),
            ContentBlock::TwoColumn { left, right, .. } => vec![left, right],
            ContentBlock::Tabs(tabs) => tabs.iter().map(|tab| &tab.body).collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
/// Depth-first count of every block in a document, nested ones included.
pub fn block_count(document: &[ContentBlock]) -> usize {
    document
        .iter()
        .map(|block| {
            1 + block
                .children()
                .into_iter()
                .map(|child| block_count(child))
                .sum::<usize>()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_build_expected_variants() {
        assert_eq!(paragraph("hi"), ContentBlock::Paragraph(vec![text("hi")]));
        assert_eq!(heading("H"), ContentBlock::Heading("H".to_string()));
        assert_eq!(
            list(["a", "b"]),
            ContentBlock::List(vec![vec![text("a")], vec![text("b")]])
        );
    }

    #[test]
    fn test_code_snippet_defaults_to_typescript() {
        let snippet = CodeSnippet::new("let x = 1;");
        assert_eq!(snippet.language, "typescript");
        assert!(snippet.filename.is_none());
    }

    #[test]
    fn test_code_block_language_falls_back() {
        let ContentBlock::Code(snippet) = code_block(None, None, "let x = 1;") else {
            panic!("expected a code block");
        };
        assert_eq!(snippet.language, CodeSnippet::DEFAULT_LANGUAGE);
        assert!(snippet.filename.is_none());

        let ContentBlock::Code(snippet) = code_block(Some("main.rs"), Some("rust"), "fn main() {}")
        else {
            panic!("expected a code block");
        };
        assert_eq!(snippet.language, "rust");
        assert_eq!(snippet.filename.as_deref(), Some("main.rs"));
    }

    #[test]
    fn test_block_count_walks_nested_documents() {
        let document = vec![
            paragraph("intro"),
            ContentBlock::TwoColumn {
                left: vec![paragraph("left")],
                right: vec![ContentBlock::Alert {
                    variant: AlertVariant::Warning,
                    title: None,
                    body: vec![paragraph("careful")],
                }],
                split: ColumnSplit::Equal,
            },
            ContentBlock::Tabs(vec![
                Tab {
                    id: "one".to_string(),
                    label: "One".to_string(),
                    body: vec![paragraph("1")],
                },
                Tab {
                    id: "two".to_string(),
                    label: "Two".to_string(),
                    body: Vec::new(),
                },
            ]),
        ];
        // intro, two-column, left, alert, careful, tabs, 1
        assert_eq!(block_count(&document), 7);
    }
}
