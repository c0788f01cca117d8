//! Per-kind view construction. Every renderer goes through [`view`].

use crate::generator::{BASE_PRICE, GRID_RANGE};
use crate::model::{format_number, Node, NodeKind, PropValue};

use super::element::Element;

const DEFAULT_GRID_ITEMS: usize = 3;

/// Build the element tree for one node.
pub fn view(node: &Node) -> Element {
    match &node.kind {
        NodeKind::Hero => hero(node),
        NodeKind::Navbar => navbar(node),
        NodeKind::Form => form(node),
        NodeKind::List => list(node),
        NodeKind::Card => card(node),
        NodeKind::Grid => grid(node),
        NodeKind::TwoColumn => two_column(node),
        NodeKind::Pricing => pricing(node),
        NodeKind::Testimonial => testimonial(node),
        NodeKind::Features => features(node),
        NodeKind::Faq => faq(node),
        NodeKind::Footer => footer(node),
        NodeKind::Button => button(node),
        NodeKind::Block | NodeKind::Custom(_) => block(node),
    }
}

fn hero(node: &Node) -> Element {
    Element::new("section")
        .class("hero")
        .child(
            Element::new("h2")
                .bind("title")
                .text(node.text_or("title", "Welcome")),
        )
        .child(
            Element::new("p")
                .bind("subtitle")
                .text(node.text_or("subtitle", "Subtitle text goes here")),
        )
        .child(
            Element::new("button")
                .class("button")
                .attr("type", "button")
                .bind("cta")
                .text(node.text_or("cta", "Get started")),
        )
}

fn navbar(node: &Node) -> Element {
    let links = node
        .list_or("links", &["Home", "About", "Contact"])
        .into_iter()
        .enumerate()
        .map(|(i, link)| {
            Element::new("a")
                .attr("href", "#")
                .bind_item("links", i)
                .text(link)
        });
    Element::new("nav")
        .class("navbar")
        .child(
            Element::new("div")
                .class("navbar-brand")
                .bind("brand")
                .text(node.text_or("brand", "Brand")),
        )
        .child(Element::new("div").class("navbar-links").children(links))
}

fn form(node: &Node) -> Element {
    let fields = node
        .list_or("fields", &["Email", "Password"])
        .into_iter()
        .enumerate()
        .map(|(i, field)| {
            Element::new("div")
                .class("form-field")
                .child(Element::new("label").bind_item("fields", i).text(field.clone()))
                .child(
                    Element::new("input")
                        .class("input")
                        .attr("placeholder", field),
                )
        });
    Element::new("form")
        .class("card")
        .child(
            Element::new("h3")
                .class("card-title")
                .bind("title")
                .text(node.text_or("title", "Form")),
        )
        .children(fields)
        .child(
            Element::new("button")
                .class("button")
                .attr("type", "button")
                .bind("submit")
                .text(node.text_or("submit", "Submit")),
        )
}

fn list(node: &Node) -> Element {
    let items = node
        .list_or("items", &["List item"])
        .into_iter()
        .enumerate()
        .map(|(i, item)| Element::new("li").bind_item("items", i).text(item));
    Element::new("div")
        .class("card")
        .child(Element::new("ul").children(items))
}

fn card(node: &Node) -> Element {
    let has_heading = node.text_opt("title").is_some() || node.text_opt("body").is_some();
    if !has_heading {
        if let Some(text) = node.text_opt("text") {
            return Element::new("div")
                .class("card")
                .child(Element::new("p").bind("text").text(text));
        }
    }

    let mut el = Element::new("div")
        .class("card")
        .child(
            Element::new("h3")
                .class("card-title")
                .bind("title")
                .text(node.text_or("title", "Card title")),
        )
        .child(
            Element::new("p")
                .bind("body")
                .text(node.text_or("body", "Card body")),
        );
    if let Some(cta) = node.text_opt("cta") {
        el = el.child(
            Element::new("button")
                .class("button")
                .attr("type", "button")
                .bind("cta")
                .text(cta),
        );
    }
    el
}

/// Card titles for a grid: one per item of a list-valued `items`, otherwise
/// numbered cards for a numeric `items` clamped to the grid range.
pub fn grid_titles(node: &Node) -> Vec<String> {
    let max = GRID_RANGE.max as usize;
    let min = GRID_RANGE.min as usize;
    if let Some(PropValue::List(titles)) = node.get("items") {
        let titles: Vec<String> = titles
            .iter()
            .filter(|t| !t.trim().is_empty())
            .take(max)
            .cloned()
            .collect();
        if !titles.is_empty() {
            return titles;
        }
    }
    let count = node
        .number("items")
        .filter(|n| n.is_finite())
        .map(|n| (n.round().max(min as f64).min(max as f64)) as usize)
        .unwrap_or(DEFAULT_GRID_ITEMS);
    (1..=count).map(|i| format!("Card {}", i)).collect()
}

fn grid(node: &Node) -> Element {
    let cards = grid_titles(node)
        .into_iter()
        .enumerate()
        .map(|(i, title)| {
            Element::new("div")
                .class("card")
                .child(Element::new("h4").class("card-title").editable().text(title))
                .child(
                    Element::new("p")
                        .editable()
                        .text(format!("Description for card {}", i + 1)),
                )
        });
    Element::new("div").class("grid").children(cards)
}

fn two_column(node: &Node) -> Element {
    Element::new("div")
        .class("two-column")
        .child(
            Element::new("div").class("card").child(
                Element::new("p")
                    .bind("left")
                    .text(node.text_or("left", "Left content (image or text)")),
            ),
        )
        .child(
            Element::new("div").class("card").child(
                Element::new("p")
                    .bind("right")
                    .text(node.text_or("right", "Right content (form or text)")),
            ),
        )
}

fn pricing(node: &Node) -> Element {
    let base = node
        .number("price")
        .filter(|n| n.is_finite())
        .unwrap_or(BASE_PRICE);
    let period = node.text_or("period", "month");
    let tiers = node
        .list_or("plans", &["Starter", "Basic", "Pro"])
        .into_iter()
        .enumerate()
        .map(|(i, plan)| {
            let price = base * (i as f64 + 1.0);
            Element::new("div")
                .class("card")
                .class("pricing-tier")
                .child(
                    Element::new("h3")
                        .class("card-title")
                        .bind_item("plans", i)
                        .text(plan),
                )
                .child(
                    Element::new("p")
                        .class("price")
                        .text(format!("${}/{}", format_number(price), period)),
                )
                .child(
                    Element::new("button")
                        .class("button")
                        .attr("type", "button")
                        .text("Choose plan"),
                )
        });
    Element::new("section")
        .class("pricing")
        .child(
            Element::new("h2")
                .bind("title")
                .text(node.text_or("title", "Pricing")),
        )
        .child(Element::new("div").class("grid").children(tiers))
}

fn testimonial(node: &Node) -> Element {
    Element::new("figure")
        .class("card")
        .class("testimonial")
        .child(
            Element::new("blockquote")
                .bind("quote")
                .text(node.text_or("quote", "A glowing review goes here.")),
        )
        .child(
            Element::new("figcaption")
                .inline()
                .child(
                    Element::new("strong")
                        .bind("author")
                        .text(node.text_or("author", "Anonymous")),
                )
                .text(", ")
                .child(
                    Element::new("span")
                        .bind("role")
                        .text(node.text_or("role", "Customer")),
                ),
        )
}

fn features(node: &Node) -> Element {
    let items = node
        .list_or("items", &["Fast", "Secure", "Easy to use"])
        .into_iter()
        .enumerate()
        .map(|(i, item)| Element::new("li").bind_item("items", i).text(item));
    Element::new("section")
        .class("card")
        .class("features")
        .child(
            Element::new("h3")
                .class("card-title")
                .bind("title")
                .text(node.text_or("title", "Features")),
        )
        .child(Element::new("ul").children(items))
}

fn faq(node: &Node) -> Element {
    let entries = node
        .pairs_or(
            "questions",
            &[("What is this?", "A mock-up generated from your description.")],
        )
        .into_iter()
        .map(|pair| {
            Element::new("div")
                .class("faq-item")
                .child(Element::new("h4").editable().text(pair.question))
                .child(Element::new("p").editable().text(pair.answer))
        });
    Element::new("section")
        .class("card")
        .class("faq")
        .child(
            Element::new("h3")
                .class("card-title")
                .bind("title")
                .text(node.text_or("title", "FAQ")),
        )
        .children(entries)
}

fn footer(node: &Node) -> Element {
    Element::new("footer").class("footer").child(
        Element::new("p")
            .bind("text")
            .text(node.text_or("text", "© 2025 My Website")),
    )
}

fn button(node: &Node) -> Element {
    Element::new("button")
        .class("button")
        .attr("type", "button")
        .bind("text")
        .text(node.text_or("text", "Click me"))
}

fn block(node: &Node) -> Element {
    Element::new("div")
        .class("card")
        .child(Element::new("p").bind("text").text(node.text_or("text", "Block")))
}
