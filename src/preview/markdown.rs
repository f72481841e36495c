use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use super::html;

/// Walks the Markdown event stream and returns the prose it contains, one
/// block per line. Whitespace is not collapsed here.
pub(super) fn extract_text(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut writer = PlainTextWriter::with_capacity(markdown.len());
    for event in Parser::new_ext(markdown, options) {
        writer.handle(event);
    }
    writer.finish()
}

#[derive(Default)]
struct PlainTextWriter {
    out: String,
    // Nesting depth inside a subtree whose content never reaches the preview.
    skip_depth: usize,
    skipping_block: bool,
    // Raw HTML block being accumulated until its end tag.
    html_block: String,
    // Open inline `<script>`-like tag whose body is being dropped.
    silenced_by: Option<String>,
}

impl PlainTextWriter {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            out: String::with_capacity(capacity),
            ..Self::default()
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        if self.skip_depth > 0 {
            match event {
                Event::Start(_) => self.skip_depth += 1,
                Event::End(_) => {
                    self.skip_depth -= 1;
                    if self.skip_depth == 0 && self.skipping_block {
                        self.break_line();
                    }
                }
                _ => {}
            }
            return;
        }

        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) | Event::Code(text) => {
                if self.silenced_by.is_none() {
                    self.push_text(&text);
                }
            }
            Event::Html(raw) => self.html_block.push_str(&raw),
            Event::InlineHtml(raw) => self.inline_html(&raw),
            Event::SoftBreak | Event::HardBreak | Event::Rule => self.break_line(),
            // Footnote references and task list markers carry no prose.
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::CodeBlock(_)
            | Tag::Table(_)
            | Tag::FootnoteDefinition(_)
            | Tag::MetadataBlock(_) => {
                self.break_line();
                self.skip(true);
            }
            Tag::Image { .. } => self.skip(false),
            Tag::Paragraph
            | Tag::Heading { .. }
            | Tag::BlockQuote(_)
            | Tag::List(_)
            | Tag::Item
            | Tag::HtmlBlock => self.break_line(),
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::HtmlBlock => {
                self.flush_html();
                self.break_line();
            }
            TagEnd::Paragraph
            | TagEnd::Heading(_)
            | TagEnd::BlockQuote(_)
            | TagEnd::List(_)
            | TagEnd::Item => {
                // An unclosed inline script never silences the next block.
                self.silenced_by = None;
                self.break_line();
            }
            _ => {}
        }
    }

    /// Inline tags are dropped. Text between an inline `<script>` or
    /// `<style>` and its closing tag is dropped with them.
    fn inline_html(&mut self, raw: &str) {
        if let Some(open) = self.silenced_by.as_deref() {
            let closes = closing_tag_name(raw).is_some_and(|name| name == open);
            if closes {
                self.silenced_by = None;
            }
            return;
        }

        match opening_tag_name(raw) {
            Some(name) if html::is_silent(&name) && !raw.trim_end().ends_with("/>") => {
                self.silenced_by = Some(name);
            }
            _ => {}
        }
    }

    fn skip(&mut self, block: bool) {
        self.skip_depth = 1;
        self.skipping_block = block;
    }

    fn push_text(&mut self, text: &str) {
        if self.at_line_start() {
            self.out.push_str(text.trim_start());
        } else {
            self.out.push_str(text);
        }
    }

    fn flush_html(&mut self) {
        if self.html_block.is_empty() {
            return;
        }
        let raw = std::mem::take(&mut self.html_block);
        let text = html::text_content(&raw);
        self.push_text(&text);
    }

    /// Ends the current line. Repeated calls never stack blank lines.
    fn break_line(&mut self) {
        let kept = self.out.trim_end().len();
        self.out.truncate(kept);
        if !self.out.is_empty() {
            self.out.push('\n');
        }
    }

    fn at_line_start(&self) -> bool {
        self.out.is_empty() || self.out.ends_with('\n')
    }

    fn finish(mut self) -> String {
        self.flush_html();
        self.out
    }
}

fn opening_tag_name(raw: &str) -> Option<String> {
    tag_name(raw.strip_prefix('<')?)
}

fn closing_tag_name(raw: &str) -> Option<String> {
    tag_name(raw.strip_prefix("</")?)
}

fn tag_name(rest: &str) -> Option<String> {
    let name: String = rest
        .chars()
        .take_while(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    (!name.is_empty()).then_some(name)
}
