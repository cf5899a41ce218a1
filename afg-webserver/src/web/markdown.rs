use maud::{Markup, PreEscaped};
use pulldown_cmark::{html, Event, Options, Parser};

/// Renders user-submitted markdown to HTML.
///
/// Raw HTML blocks are emitted as text so that user content
/// cannot inject markup into the page.
pub fn render(markdown: &str) -> Markup {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(html) => Event::Text(html),
        Event::InlineHtml(html) => Event::Text(html),
        _ => event,
    });
    let mut out = String::new();
    html::push_html(&mut out, parser);
    PreEscaped(out)
}
