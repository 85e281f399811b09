use maud::{html, Markup};

use super::layout::{external, page};
use super::{query_href, Page, PageContext};
use crate::content;
use crate::state::{filter_faqs, Accordion, FaqQuery};

pub fn render(ctx: &PageContext, accordion: Accordion, query: &FaqQuery) -> Markup {
    let faqs = content::faqs();
    let visible = filter_faqs(&faqs, query);

    let body = html! {
        div.container {
            div.section-title {
                h1 { "Support Center" }
                p { "Get help with CrizModo, find answers to common questions, or report issues" }
            }

            section.section {
                div.section-title { h2 { "Get Support" } }
                div.grid {
                    @for channel in content::support_channels(ctx.config) {
                        div.card {
                            div.icon { (channel.icon) }
                            h3 { (channel.title) }
                            p { (channel.description) }
                            (external(&channel.link, "btn btn-primary", channel.action))
                        }
                    }
                }
            }

            section.section {
                div.section-title { h2 { "Troubleshooting Guide" } }
                div.grid {
                    @for issue in content::troubleshooting() {
                        div.card {
                            h3 { (issue.title) }
                            span class={ "badge badge-" (issue.severity.as_str()) } {
                                (issue.severity.as_str().to_uppercase())
                            }
                            p { "Follow these steps to resolve the issue:" }
                            ol.steps {
                                @for step in &issue.steps {
                                    li { (step) }
                                }
                            }
                        }
                    }
                }
            }

            section.section id="faq" {
                div.section-title { h2 { "Frequently Asked Questions" } }
                form method="get" action=(ctx.path) {
                    input.search type="search" name="q" placeholder="Search questions..."
                        value=(query.search);
                }
                @for (index, faq) in &visible {
                    div.faq data-panel=(index) {
                        a.faq-question href=(panel_href(ctx, accordion, query, *index)) {
                            (faq.question)
                            span { @if accordion.is_open(*index) { "▲" } @else { "▼" } }
                        }
                        @if accordion.is_open(*index) {
                            div.faq-answer { p { (faq.answer) } }
                        }
                    }
                }
                @if visible.is_empty() {
                    div.empty { p { "No questions match your search" } }
                }
            }
        }
    };

    page(ctx, Page::Support, body)
}

/// Link to the page with `panel` toggled, keeping the FAQ search.
fn panel_href(ctx: &PageContext, accordion: Accordion, query: &FaqQuery, panel: usize) -> String {
    let faq = accordion
        .toggled(panel)
        .open_panel()
        .map(|p| p.to_string())
        .unwrap_or_default();
    let href = query_href(&ctx.path, &[("q", query.search.as_str()), ("faq", faq.as_str())]);
    format!("{}#faq", href)
}
