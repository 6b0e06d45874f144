//! The built-in page layout.

use std::io;
use std::sync::Arc;

use handlebars::html_escape;
use story_graph::Chapter;

use super::{RenderError, SharedTemplate, Template};

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta http-equiv="X-UA-Compatible" content="IE=edge">
    <title>Choose Your Own Adventure</title>
    <meta name="viewport" content="width=device-width, initial-scale=1">
</head>
<body>
"#;

const PAGE_TAIL: &str = "</body>\n</html>\n";

fn write_text(sink: &mut dyn io::Write, value: &str) -> io::Result<()> {
    sink.write_all(html_escape(value).as_bytes())
}

/// Default chapter page: the title as a heading, one block per paragraph, and
/// a list of links, one per choice, pointing at `/{chapter}`.
///
/// All interpolated values are HTML-escaped, so text containing `&`, `<`,
/// `>` or quotes appears in the page in its escaped form (`Tom &amp; Jerry`),
/// not verbatim. Use a [`TextTemplate`](super::TextTemplate) without escaping
/// for a layout that emits values as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlTemplate;

impl HtmlTemplate {
    /// The default template as a shareable value.
    pub fn shared() -> SharedTemplate {
        Arc::new(Self)
    }
}

impl Template for HtmlTemplate {
    fn render(&self, chapter: &Chapter, sink: &mut dyn io::Write) -> Result<(), RenderError> {
        sink.write_all(PAGE_HEAD.as_bytes())?;

        sink.write_all(b"    <h1>")?;
        write_text(sink, &chapter.title)?;
        sink.write_all(b"</h1>\n")?;

        for paragraph in &chapter.paragraphs {
            sink.write_all(b"    <p>")?;
            write_text(sink, paragraph)?;
            sink.write_all(b"</p>\n")?;
        }

        // An ending renders no list at all.
        if !chapter.options.is_empty() {
            sink.write_all(b"    <ul>\n")?;
            for option in &chapter.options {
                sink.write_all(b"      <li><a href=\"/")?;
                write_text(sink, option.chapter.as_str())?;
                sink.write_all(b"\">")?;
                write_text(sink, &option.text)?;
                sink.write_all(b"</a></li>\n")?;
            }
            sink.write_all(b"    </ul>\n")?;
        }

        sink.write_all(PAGE_TAIL.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::render_to_vec;

    fn render(chapter: &Chapter) -> String {
        String::from_utf8(render_to_vec(&HtmlTemplate, chapter).unwrap()).unwrap()
    }

    #[test]
    fn test_renders_title_paragraphs_and_links() {
        let chapter = Chapter::new("Start")
            .with_paragraph("First.")
            .with_paragraph("Second.")
            .with_option("Left", "left-path")
            .with_option("Right", "right-path");

        let page = render(&chapter);

        assert!(page.contains("<h1>Start</h1>"));
        let first = page.find("<p>First.</p>").unwrap();
        let second = page.find("<p>Second.</p>").unwrap();
        assert!(first < second);
        assert!(page.contains(r#"<a href="/left-path">Left</a>"#));
        assert!(page.contains(r#"<a href="/right-path">Right</a>"#));
        assert!(page.find("left-path").unwrap() < page.find("right-path").unwrap());
    }

    #[test]
    fn test_ending_has_no_links() {
        let page = render(&Chapter::new("The End").with_paragraph("Fin."));
        assert!(!page.contains("<a "));
        assert!(!page.contains("<ul>"));
        assert!(page.contains("<p>Fin.</p>"));
    }

    #[test]
    fn test_values_are_escaped() {
        let chapter = Chapter::new("<script>")
            .with_paragraph("Fish & chips")
            .with_option("\"Quote\"", "a\"b");

        let page = render(&chapter);

        assert!(page.contains("<h1>&lt;script&gt;</h1>"));
        assert!(page.contains("<p>Fish &amp; chips</p>"));
        assert!(page.contains(r#"<a href="/a&quot;b">&quot;Quote&quot;</a>"#));
    }

    #[test]
    fn test_escaped_text_does_not_appear_verbatim() {
        let page = render(&Chapter::new("Tom & Jerry's").with_paragraph("a = b"));

        assert!(page.contains("<h1>Tom &amp; Jerry&#x27;s</h1>"));
        assert!(!page.contains("Tom & Jerry's"));
        assert!(page.contains("<p>a &#x3D; b</p>"));
    }

    #[test]
    fn test_is_a_full_document() {
        let page = render(&Chapter::new("Empty"));
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.trim_end().ends_with("</html>"));
    }
}
