//! Trigger rule catalog: ordered text patterns and the nodes they emit.
//!
//! Rules are evaluated independently against the lowercased prompt. Output
//! order follows catalog order, not keyword position in the prompt.

use std::sync::OnceLock;

use regex::Regex;

use crate::generator::extract::{cta_override, extract_count, title_override, CountRange};
use crate::model::{Node, NodeKind, PropValue, QaPair};

/// Range for repeated cards in a grid.
pub const GRID_RANGE: CountRange = CountRange::new(1, 12);
/// Range for pricing tiers.
pub const PRICING_RANGE: CountRange = CountRange::new(1, 6);
/// Base monthly price of the first pricing tier.
pub const BASE_PRICE: f64 = 19.0;

const TODO_WORDS: &str = r"\b(todo|to-do|to do|tasks?|checklist)\b";

const PLAN_NAMES: [&str; 6] = ["Starter", "Basic", "Pro", "Business", "Premium", "Enterprise"];

/// Prompt text as seen by rule builders.
#[derive(Debug, Clone)]
pub struct Prompt<'a> {
    /// Text exactly as the user typed it.
    pub raw: &'a str,
    /// Lowercased text used for trigger tests.
    pub lowered: String,
}

impl<'a> Prompt<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lowered: raw.to_lowercase(),
        }
    }

    fn has(&self, pattern: &Regex) -> bool {
        pattern.is_match(&self.lowered)
    }
}

/// A trigger rule: a pattern test paired with a node-producing action.
pub struct TriggerRule {
    /// Rule name, for logs.
    pub name: &'static str,
    trigger: Regex,
    /// The rule is suppressed when this pattern matches.
    exclude: Option<Regex>,
    /// Weaker trigger that only fires when its guard does not match.
    guarded: Option<(Regex, Regex)>,
    build: fn(&Prompt<'_>) -> Vec<Node>,
}

impl TriggerRule {
    fn new(name: &'static str, trigger: &str, build: fn(&Prompt<'_>) -> Vec<Node>) -> Self {
        Self {
            name,
            trigger: Regex::new(trigger).expect("valid trigger pattern"),
            exclude: None,
            guarded: None,
            build,
        }
    }

    fn excluding(mut self, pattern: &str) -> Self {
        self.exclude = Some(Regex::new(pattern).expect("valid exclusion pattern"));
        self
    }

    fn or_unless(mut self, trigger: &str, guard: &str) -> Self {
        self.guarded = Some((
            Regex::new(trigger).expect("valid trigger pattern"),
            Regex::new(guard).expect("valid guard pattern"),
        ));
        self
    }

    /// Whether this rule fires for the (lowercased) prompt.
    pub fn matches(&self, prompt: &Prompt<'_>) -> bool {
        let strong =
            prompt.has(&self.trigger) && !self.exclude.as_ref().is_some_and(|ex| prompt.has(ex));
        strong
            || self
                .guarded
                .as_ref()
                .is_some_and(|(weak, guard)| prompt.has(weak) && !prompt.has(guard))
    }

    /// Nodes this rule contributes.
    pub fn emit(&self, prompt: &Prompt<'_>) -> Vec<Node> {
        (self.build)(prompt)
    }
}

/// The full catalog, compiled once.
pub fn trigger_catalog() -> &'static [TriggerRule] {
    static CATALOG: OnceLock<Vec<TriggerRule>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

fn build_catalog() -> Vec<TriggerRule> {
    vec![
        TriggerRule::new("navbar", r"\b(nav|navbar|navigation|header|menu)\b", navbar),
        TriggerRule::new("hero", r"\bhero\b|\bheadline\b|\bbig title\b|\blanding\b", hero),
        TriggerRule::new(
            "two-column",
            r"\btwo[- ]column|\bimage and text\b|\btext and image\b|\bside by side\b",
            two_column,
        ),
        TriggerRule::new(
            "auth-form",
            r"\b(login|log in|sign[ -]?in|sign[ -]?up|register|subscribe|e-?mails?|password)\b",
            auth_form,
        )
        .or_unless(r"\bforms?\b", TODO_WORDS),
        TriggerRule::new("todo", TODO_WORDS, todo),
        TriggerRule::new("grid", r"\bgrid\b|\bcards\b|\bportfolio\b|\bgallery\b", grid),
        TriggerRule::new("card", r"\bcard\b", card).excluding(r"\bcards\b|\bgrid\b"),
        TriggerRule::new("pricing", r"\b(pricing|prices?|plans?|tiers?)\b", pricing),
        TriggerRule::new("testimonial", r"\b(testimonials?|reviews?|quotes?)\b", testimonial),
        TriggerRule::new("features", r"\b(features?|benefits?)\b", features),
        TriggerRule::new("faq", r"\b(faqs?|frequently asked|questions)\b", faq),
        TriggerRule::new("footer", r"\b(footer|copyright)\b", footer),
        TriggerRule::new("button", r"\bbuttons?\b", button),
    ]
}

fn pattern(cell: &'static OnceLock<Regex>, source: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(source).expect("valid pattern"))
}

fn navbar(_: &Prompt<'_>) -> Vec<Node> {
    vec![Node::new(NodeKind::Navbar)
        .with("brand", "Brand")
        .with("links", PropValue::list(["Home", "About", "Contact"]))]
}

fn hero(prompt: &Prompt<'_>) -> Vec<Node> {
    vec![Node::new(NodeKind::Hero)
        .with("title", title_override(prompt.raw).unwrap_or_else(|| "Welcome".into()))
        .with("subtitle", "Short supporting copy")
        .with("cta", cta_override(prompt.raw).unwrap_or_else(|| "Get started".into()))]
}

fn two_column(_: &Prompt<'_>) -> Vec<Node> {
    vec![Node::new(NodeKind::TwoColumn)
        .with("left", "Left content (image or text)")
        .with("right", "Right content (form or text)")]
}

fn auth_form(prompt: &Prompt<'_>) -> Vec<Node> {
    static NAME: OnceLock<Regex> = OnceLock::new();
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    static PASSWORD: OnceLock<Regex> = OnceLock::new();
    static PHONE: OnceLock<Regex> = OnceLock::new();
    static LOGIN: OnceLock<Regex> = OnceLock::new();
    static SIGNUP: OnceLock<Regex> = OnceLock::new();
    static SUBSCRIBE: OnceLock<Regex> = OnceLock::new();

    let mut fields = Vec::new();
    if prompt.has(pattern(&NAME, r"\b(full )?name\b")) {
        fields.push("Full name");
    }
    if prompt.has(pattern(&EMAIL, r"\be-?mails?\b")) {
        fields.push("Email");
    }
    if prompt.has(pattern(&PASSWORD, r"\bpassword\b")) {
        fields.push("Password");
    }
    if prompt.has(pattern(&PHONE, r"\bphone\b")) {
        fields.push("Phone");
    }
    if fields.is_empty() {
        fields.extend(["Email", "Password"]);
    }

    let (title, verb) = if prompt.has(pattern(&LOGIN, r"\b(login|log in|sign[ -]?in)\b")) {
        ("Login", "Login")
    } else if prompt.has(pattern(&SIGNUP, r"\b(sign[ -]?up|register)\b")) {
        ("Sign up", "Sign up")
    } else if prompt.has(pattern(&SUBSCRIBE, r"\bsubscribe\b")) {
        ("Subscribe", "Subscribe")
    } else {
        ("Form", "Submit")
    };

    vec![Node::new(NodeKind::Form)
        .with("title", title)
        .with("fields", PropValue::list(fields))
        .with("submit", cta_override(prompt.raw).unwrap_or_else(|| verb.into()))]
}

fn todo(_: &Prompt<'_>) -> Vec<Node> {
    vec![
        Node::new(NodeKind::Form)
            .with("title", "Todo App")
            .with("fields", PropValue::list(["Task"]))
            .with("submit", "Add"),
        Node::new(NodeKind::List).with("items", PropValue::list(["Sample Task 1", "Sample Task 2"])),
    ]
}

fn grid(prompt: &Prompt<'_>) -> Vec<Node> {
    static COUNT: OnceLock<Regex> = OnceLock::new();
    let count = extract_count(
        pattern(
            &COUNT,
            r"([0-9]+)\s*(?:[a-z-]+\s+){0,2}(?:cards?|items|tiles|projects|photos|images)\b",
        ),
        &prompt.lowered,
        GRID_RANGE,
    );
    vec![Node::new(NodeKind::Grid).with("items", count)]
}

fn card(_: &Prompt<'_>) -> Vec<Node> {
    vec![Node::new(NodeKind::Card)
        .with("title", "Card title")
        .with("body", "Card body")
        .with("cta", "Learn more")]
}

fn pricing(prompt: &Prompt<'_>) -> Vec<Node> {
    static COUNT: OnceLock<Regex> = OnceLock::new();
    let count = extract_count(
        pattern(&COUNT, r"([0-9]+)\s*(?:[a-z-]+\s+){0,2}(?:tiers?|plans?)\b"),
        &prompt.lowered,
        PRICING_RANGE,
    );
    let plans = PLAN_NAMES.iter().take(count as usize).copied();
    vec![Node::new(NodeKind::Pricing)
        .with("title", "Pricing")
        .with("plans", PropValue::list(plans))
        .with("price", BASE_PRICE)
        .with("period", "month")]
}

fn testimonial(_: &Prompt<'_>) -> Vec<Node> {
    vec![Node::new(NodeKind::Testimonial)
        .with("quote", "This product changed how our team works.")
        .with("author", "Jane Doe")
        .with("role", "Product Manager")]
}

fn features(_: &Prompt<'_>) -> Vec<Node> {
    vec![Node::new(NodeKind::Features)
        .with("title", "Features")
        .with("items", PropValue::list(["Fast", "Secure", "Easy to use"]))]
}

fn faq(_: &Prompt<'_>) -> Vec<Node> {
    vec![Node::new(NodeKind::Faq)
        .with("title", "Frequently asked questions")
        .with(
            "questions",
            vec![
                QaPair::new("What is this?", "A mock-up generated from your description."),
                QaPair::new("Can I edit it?", "Yes. Click any block to change its properties."),
            ],
        )]
}

fn footer(_: &Prompt<'_>) -> Vec<Node> {
    vec![Node::new(NodeKind::Footer).with("text", "© 2025 My Website")]
}

fn button(prompt: &Prompt<'_>) -> Vec<Node> {
    vec![Node::new(NodeKind::Button)
        .with("text", cta_override(prompt.raw).unwrap_or_else(|| "Click me".into()))]
}
