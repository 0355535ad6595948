//! Markdown to prose.
//!
//! Scoring raw Markdown counts fence markers, table pipes and code as words.
//! [`strip_to_prose`] parses the document with pulldown-cmark and keeps only
//! the running text, one block per line.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip Markdown down to the prose a reader would actually read.
///
/// Dropped: front matter (`---` YAML or `+++` TOML), fenced and indented
/// code, inline code, raw HTML, headings, tables and image alt text.
///
/// Kept, without markup: paragraphs, list items, block quotes, link text and
/// emphasized text. Each paragraph or list item ends up on its own line.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let body = strip_front_matter(text);
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;

    let mut prose = String::with_capacity(body.len() / 2);
    let mut skip_depth = 0usize;

    for event in Parser::new_ext(body, options) {
        match event {
            Event::Start(
                Tag::CodeBlock(_)
                | Tag::Heading { .. }
                | Tag::Table(_)
                | Tag::Image { .. }
                | Tag::HtmlBlock,
            ) => skip_depth += 1,
            Event::End(
                TagEnd::CodeBlock
                | TagEnd::Heading(_)
                | TagEnd::Table
                | TagEnd::Image
                | TagEnd::HtmlBlock,
            ) => skip_depth = skip_depth.saturating_sub(1),

            _ if skip_depth > 0 => {}

            Event::Text(t) => prose.push_str(&t),
            Event::SoftBreak | Event::HardBreak => prose.push(' '),
            Event::End(TagEnd::Paragraph | TagEnd::Item) => end_line(&mut prose),

            _ => {}
        }
    }

    let trimmed_len = prose.trim_end().len();
    prose.truncate(trimmed_len);
    tracing::debug!(prose_len = prose.len(), "extracted prose");
    prose
}

fn end_line(prose: &mut String) {
    let trimmed_len = prose.trim_end_matches(' ').len();
    prose.truncate(trimmed_len);
    if !prose.is_empty() && !prose.ends_with('\n') {
        prose.push('\n');
    }
}

/// Remove a leading `---` or `+++` delimited block.
fn strip_front_matter(text: &str) -> &str {
    let trimmed = text.trim_start();
    for fence in ["---", "+++"] {
        let Some(after_open) = trimmed.strip_prefix(fence) else {
            continue;
        };
        if !after_open.starts_with(['\n', '\r']) {
            continue;
        }
        let closing = format!("\n{fence}");
        if let Some(pos) = after_open.find(&closing) {
            let rest = &after_open[pos + closing.len()..];
            return rest.split_once('\n').map_or("", |(_, body)| body);
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_code_blocks() {
        let out = strip_to_prose("Some text.\n\n```rust\nlet x = 1;\n```\n\nMore text.");
        assert_eq!(out, "Some text.\nMore text.");
    }

    #[test]
    fn drops_yaml_front_matter() {
        let out = strip_to_prose("---\nstatus: accepted\n---\n\nSome text.");
        assert_eq!(out, "Some text.");
    }

    #[test]
    fn drops_toml_front_matter() {
        let out = strip_to_prose("+++\ntitle = \"Post\"\n+++\nBody here.");
        assert_eq!(out, "Body here.");
    }

    #[test]
    fn horizontal_rule_is_not_front_matter() {
        let out = strip_to_prose("---- \n\nJust text.");
        assert_eq!(out, "Just text.");
    }

    #[test]
    fn drops_headings() {
        let out = strip_to_prose("# Title\n\nSome text.\n\n## Part\n\nMore text.");
        assert!(!out.contains("Title"));
        assert!(!out.contains("Part"));
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn keeps_link_text_only() {
        let out = strip_to_prose("Read [the guide](https://example.com) first.");
        assert_eq!(out, "Read the guide first.");
    }

    #[test]
    fn drops_inline_code_and_images() {
        let out = strip_to_prose("Call `run()` now. ![a diagram](d.png) Done.");
        assert!(!out.contains("run()"));
        assert!(!out.contains("diagram"));
        assert!(out.starts_with("Call"));
    }

    #[test]
    fn drops_tables() {
        let out = strip_to_prose("Before.\n\n| A | B |\n|---|---|\n| 1 | 2 |\n\nAfter.");
        assert_eq!(out, "Before.\nAfter.");
    }

    #[test]
    fn list_items_get_their_own_lines() {
        let out = strip_to_prose("- First item\n- Second *item*\n");
        assert_eq!(out, "First item\nSecond item");
    }

    #[test]
    fn keeps_block_quotes() {
        let out = strip_to_prose("> Quoted words.\n\nPlain words.");
        assert_eq!(out, "Quoted words.\nPlain words.");
    }

    #[test]
    fn empty_input() {
        assert!(strip_to_prose("").is_empty());
        assert!(strip_to_prose("```\ncode only\n```").is_empty());
    }
}
