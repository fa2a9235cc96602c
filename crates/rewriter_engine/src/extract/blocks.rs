use rewriter_core::{image_placeholder, LINK_MARKER};

/// One editor module of a platform post, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Text { text: String, heading: bool },
    Rule,
    Image {
        src: Option<String>,
        caption: Option<String>,
    },
    Link { text: String },
}

impl ContentBlock {
    pub fn render(&self) -> String {
        match self {
            ContentBlock::Text { text, heading: true } => format!("## {text}"),
            ContentBlock::Text { text, .. } => text.clone(),
            ContentBlock::Rule => "---".to_string(),
            ContentBlock::Image { caption, .. } => image_placeholder(caption.as_deref()),
            ContentBlock::Link { text } => format!("{LINK_MARKER} {text}]"),
        }
    }
}

/// Renders blocks separated by blank lines.
pub fn render_blocks(blocks: &[ContentBlock]) -> String {
    blocks
        .iter()
        .map(ContentBlock::render)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Image sources in block order. Images without a source are skipped.
pub fn image_sources(blocks: &[ContentBlock]) -> Vec<String> {
    blocks
        .iter()
        .filter_map(|block| match block {
            ContentBlock::Image { src, .. } => src.clone(),
            _ => None,
        })
        .collect()
}
