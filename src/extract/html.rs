use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use super::document::{ContainerShape, StructuredDocument};
use crate::normalize::{normalize, normalize_lines};

// Selector literals below always parse.
static ALL_ELEMENTS: Lazy<Selector> = Lazy::new(|| Selector::parse("*").unwrap());
static HEADER_CELLS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("th, tr > td:first-child").unwrap());
static TABLE_ROWS: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static LIST_ITEMS: Lazy<Selector> = Lazy::new(|| Selector::parse("li, dt").unwrap());
static BLOCKS: Lazy<Selector> = Lazy::new(|| Selector::parse("div, p, section, dd").unwrap());
static INLINES: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span, b, strong, label").unwrap());

const NON_CONTENT_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// A parsed HTML page or fragment.
#[derive(Debug)]
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }
}

/// Zero-width and bidi control characters that retail pages put around labels.
fn is_invisible(c: char) -> bool {
    matches!(
        c,
        '\u{200B}'..='\u{200F}' | '\u{202A}'..='\u{202E}' | '\u{2066}'..='\u{2069}' | '\u{FEFF}'
    )
}

fn clean(raw: &str) -> String {
    let visible: String = raw.chars().filter(|c| !is_invisible(*c)).collect();
    normalize(&visible)
}

fn is_content(element: ElementRef<'_>) -> bool {
    !NON_CONTENT_TAGS.contains(&element.value().name())
}

/// Inline tags are interchangeable as label/value siblings, as are `dt`/`dd`.
fn sibling_kind(name: &str) -> &str {
    match name {
        "span" | "b" | "strong" | "label" | "em" | "i" => "inline",
        "dt" | "dd" => "definition",
        other => other,
    }
}

fn child_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap)
}

impl StructuredDocument for HtmlDocument {
    type Node<'a> = ElementRef<'a>;

    fn grid_pairs(&self) -> Vec<(ElementRef<'_>, ElementRef<'_>)> {
        self.html
            .select(&ALL_ELEMENTS)
            .filter(|element| is_content(*element))
            .filter_map(|element| {
                let children: Vec<ElementRef<'_>> = child_elements(element).collect();
                match children.as_slice() {
                    [label, value] => Some((*label, *value)),
                    _ => None,
                }
            })
            .collect()
    }

    fn elements(&self, shape: ContainerShape) -> Vec<ElementRef<'_>> {
        let selector: &Selector = match shape {
            ContainerShape::HeaderCell => &HEADER_CELLS,
            ContainerShape::TableRow => &TABLE_ROWS,
            ContainerShape::ListItem => &LIST_ITEMS,
            ContainerShape::Block => &BLOCKS,
            ContainerShape::Inline => &INLINES,
        };
        self.html.select(selector).collect()
    }

    fn text<'a>(&'a self, node: ElementRef<'a>) -> String {
        clean(&node.text().collect::<Vec<_>>().join(" "))
    }

    fn own_text<'a>(&'a self, node: ElementRef<'a>) -> String {
        let mut current = node;
        loop {
            let direct: Vec<&str> = current
                .children()
                .filter_map(|child| child.value().as_text().map(|text| &**text))
                .collect();
            let direct = clean(&direct.join(" "));
            if !direct.is_empty() {
                return direct;
            }
            // `<th><span>Label</span></th>` carries its label one level down.
            let mut children = child_elements(current);
            match (children.next(), children.next()) {
                (Some(only), None) => current = only,
                _ => return String::new(),
            }
        }
    }

    fn is_header_cell<'a>(&'a self, node: ElementRef<'a>) -> bool {
        match node.value().name() {
            "th" => true,
            "td" => node.prev_siblings().all(|sibling| !sibling.value().is_element()),
            _ => false,
        }
    }

    fn adjacent_cell<'a>(&'a self, node: ElementRef<'a>) -> Option<ElementRef<'a>> {
        node.next_siblings()
            .filter_map(ElementRef::wrap)
            .find(|sibling| matches!(sibling.value().name(), "td" | "th"))
    }

    fn next_sibling<'a>(&'a self, node: ElementRef<'a>) -> Option<ElementRef<'a>> {
        let kind = sibling_kind(node.value().name());
        node.next_siblings()
            .filter_map(ElementRef::wrap)
            .next()
            .filter(|sibling| sibling_kind(sibling.value().name()) == kind)
    }

    fn nested_value<'a>(&'a self, node: ElementRef<'a>) -> Option<ElementRef<'a>> {
        node.descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .find(|element| {
                element.value().attrs().any(|(name, value)| {
                    name.to_ascii_lowercase().contains("value")
                        || value.to_ascii_lowercase().contains("value")
                })
            })
    }

    fn full_text(&self) -> String {
        let runs: Vec<String> = self
            .html
            .root_element()
            .descendants()
            .filter(|node| {
                node.parent()
                    .and_then(ElementRef::wrap)
                    .is_some_and(is_content)
            })
            .filter_map(|node| node.value().as_text().map(|text| String::from(&**text)))
            .map(|run| run.chars().filter(|c| !is_invisible(*c)).collect::<String>())
            .collect();
        normalize_lines(&runs.join("\n"))
    }
}
