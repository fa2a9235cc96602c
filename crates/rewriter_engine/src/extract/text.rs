use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::ElementRef;

/// Walks an element's subtree and gathers its text nodes, stripped, in
/// document order.
pub(crate) struct TextCollector<'a> {
    skip: &'a [&'a str],
    pieces: Vec<String>,
}

impl<'a> TextCollector<'a> {
    pub(crate) fn new(skip: &'a [&'a str]) -> Self {
        Self {
            skip,
            pieces: Vec::new(),
        }
    }

    /// Visits `root`. `replace` may substitute an element (and its subtree)
    /// with a text piece of its own; returning `None` from it drops nothing
    /// and descends as usual.
    pub(crate) fn collect<'d, F>(&mut self, root: ElementRef<'d>, replace: &mut F)
    where
        F: FnMut(ElementRef<'d>) -> Option<Replacement>,
    {
        for child in root.children() {
            self.visit_node(child, replace);
        }
    }

    pub(crate) fn join(self, separator: &str) -> String {
        self.pieces.join(separator)
    }

    fn visit_node<'d, F>(&mut self, node: NodeRef<'d, Node>, replace: &mut F)
    where
        F: FnMut(ElementRef<'d>) -> Option<Replacement>,
    {
        match node.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    self.pieces.push(trimmed.to_string());
                }
            }
            Node::Element(element) => {
                let name = element.name();
                if self.skip.iter().any(|skip| skip.eq_ignore_ascii_case(name)) {
                    return;
                }
                let Some(element) = ElementRef::wrap(node) else {
                    return;
                };
                match replace(element) {
                    Some(Replacement::Text(text)) => self.pieces.push(text),
                    Some(Replacement::Drop) => {}
                    None => self.collect(element, replace),
                }
            }
            _ => {}
        }
    }
}

/// What to put in place of an element during collection.
pub(crate) enum Replacement {
    Text(String),
    Drop,
}

/// Elements whose text never reaches the reader.
pub(crate) const NON_VISIBLE: &[&str] = &["script", "style", "noscript", "template"];

/// All stripped text nodes under `root`, joined by `separator`.
pub(crate) fn visible_text(root: ElementRef<'_>, separator: &str) -> String {
    let mut collector = TextCollector::new(NON_VISIBLE);
    collector.collect(root, &mut |_| None);
    collector.join(separator)
}
