use html5ever::driver;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Returns the visible text of a raw HTML fragment. Tags, comments and the
/// bodies of script-like elements are dropped.
pub(super) fn text_content(raw: &str) -> String {
    let dom = driver::parse_document(RcDom::default(), Default::default()).one(raw);

    let mut text = String::with_capacity(raw.len());
    collect_text(&dom.document, &mut text);
    text
}

enum Step {
    Visit(Handle),
    // Emitted after the children of a block element.
    EndBlock,
}

// Walks with an explicit stack; element nesting in user HTML is unbounded.
fn collect_text(root: &Handle, out: &mut String) {
    let mut stack: Vec<Step> = Vec::new();
    push_children(root, &mut stack);

    while let Some(step) = stack.pop() {
        let node = match step {
            Step::Visit(node) => node,
            Step::EndBlock => {
                out.push('\n');
                continue;
            }
        };

        match &node.data {
            NodeData::Text { contents } => out.push_str(&contents.borrow()),
            NodeData::Element { name, .. } => {
                let tag = &*name.local;
                if is_silent(tag) {
                    continue;
                }
                if is_block(tag) {
                    stack.push(Step::EndBlock);
                }
                push_children(&node, &mut stack);
            }
            // Comments, doctypes and processing instructions.
            _ => {}
        }
    }
}

fn push_children(node: &Handle, stack: &mut Vec<Step>) {
    let children = node.children.borrow();
    stack.extend(children.iter().rev().cloned().map(Step::Visit));
}

pub(super) fn is_silent(tag: &str) -> bool {
    matches!(tag, "script" | "style" | "template" | "noscript" | "iframe")
}

fn is_block(tag: &str) -> bool {
    matches!(
        tag,
        "p" | "div"
            | "br"
            | "li"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "blockquote"
            | "section"
            | "article"
            | "header"
            | "footer"
            | "tr"
            | "figcaption"
    )
}
