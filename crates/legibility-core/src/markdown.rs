//! Markdown to prose.
//!
//! Readability formulas expect running text. Markdown files are parsed with
//! pulldown-cmark and reduced to the prose a reader would actually read.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip markdown formatting, returning plain prose text.
///
/// Removes code blocks, inline code, HTML, YAML frontmatter, headings,
/// tables and image alt text. Keeps link text, blockquotes, list items and
/// emphasized text (without the markers).
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let text = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options);

    let mut result = String::with_capacity(text.len() / 2);
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(
                Tag::CodeBlock(_) | Tag::Heading { .. } | Tag::Table(_) | Tag::Image { .. },
            ) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Heading(_) | TagEnd::Table | TagEnd::Image) => {
                skip_depth = skip_depth.saturating_sub(1);
            }

            Event::Text(t) if skip_depth == 0 => {
                result.push_str(&t);
            }
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => {
                result.push(' ');
            }

            // Block boundaries become spaces so adjacent blocks don't fuse words
            Event::End(TagEnd::Paragraph | TagEnd::Item) if skip_depth == 0 => {
                result.push(' ');
            }

            _ => {}
        }
    }

    result.trim().to_string()
}

/// Strip YAML frontmatter delimited by `---` lines.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_opening) = trimmed.strip_prefix("---") else {
        return text;
    };

    let Some(close_pos) = after_opening.find("\n---") else {
        return text;
    };

    let remainder = &after_opening[close_pos + 4..];
    remainder.strip_prefix('\n').unwrap_or(remainder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_removes_code_blocks() {
        let input = "Some prose.\n\n```rust\nfn main() {}\n```\n\nMore prose.";
        let result = strip_to_prose(input);
        assert!(result.contains("Some prose."));
        assert!(result.contains("More prose."));
        assert!(!result.contains("fn main"));
    }

    #[test]
    fn strip_removes_frontmatter() {
        let input = "---\ntitle: Test\nauthor: Someone\n---\n\nThe body text.";
        let result = strip_to_prose(input);
        assert!(!result.contains("title"));
        assert_eq!(result, "The body text.");
    }

    #[test]
    fn unterminated_frontmatter_is_kept() {
        assert_eq!(strip_frontmatter("---\nno end"), "---\nno end");
    }

    #[test]
    fn strip_removes_headings() {
        let result = strip_to_prose("# Big Title\n\nBody sentence here.");
        assert!(!result.contains("Big Title"));
        assert!(result.contains("Body sentence here."));
    }

    #[test]
    fn strip_preserves_link_text() {
        let result = strip_to_prose("Read [the guide](https://example.com) first.");
        assert_eq!(result, "Read the guide first.");
    }

    #[test]
    fn strip_removes_inline_code_and_emphasis_markers() {
        let result = strip_to_prose("Call `foo()` with **great** care.");
        assert!(!result.contains("foo"));
        assert!(!result.contains("**"));
        assert!(result.contains("great"));
    }

    #[test]
    fn strip_removes_tables_and_images() {
        let input = "Before.\n\n| a | b |\n|---|---|\n| cell | data |\n\n![diagram of things](x.png)\n\nAfter.";
        let result = strip_to_prose(input);
        assert!(!result.contains("cell"));
        assert!(!result.contains("diagram"));
        assert!(result.contains("Before."));
        assert!(result.contains("After."));
    }

    #[test]
    fn list_items_do_not_fuse() {
        let result = strip_to_prose("- first item\n- second item\n");
        assert!(result.contains("first item second item"));
    }

    #[test]
    fn strip_preserves_blockquote_text() {
        let result = strip_to_prose("> This is a quote.\n\nRegular text.");
        assert!(result.contains("This is a quote."));
        assert!(result.contains("Regular text."));
    }

    #[test]
    fn empty_input_returns_empty() {
        assert!(strip_to_prose("").is_empty());
    }
}
