use maud::{html, Markup};

use super::layout::page;
use super::{query_href, Page, PageContext};
use crate::content;
use crate::models::{CategoryFilter, CommandDescriptor};
use crate::state::{filter_commands, CommandQuery};

pub const NO_RESULTS: &str = "No commands found";

pub fn render(ctx: &PageContext, query: &CommandQuery) -> Markup {
    let all = content::commands();
    let matches = filter_commands(&all, query);

    let body = html! {
        div.container {
            div.section-title {
                h1 { "Bot Commands" }
                p { "Complete reference for all CrizModo slash commands with detailed options and examples" }
            }

            form method="get" action=(ctx.path) {
                input.search type="search" name="q" placeholder="Search commands..."
                    value=(query.search);
                @if query.category != CategoryFilter::All {
                    input type="hidden" name="category" value=(query.category.as_str());
                }
            }

            nav.tabs {
                @for choice in CategoryFilter::choices() {
                    a.tab.active[choice == query.category]
                        href=(category_href(ctx, query, choice)) {
                        (choice.icon()) " " (choice.label())
                    }
                }
            }

            @for cmd in &matches {
                (command_card(cmd))
            }

            @if matches.is_empty() {
                div.empty {
                    h2 { (NO_RESULTS) }
                    p { "Try adjusting your search terms or filter options" }
                }
            }

            div.card {
                h2 { "Quick Reference" }
                div.grid {
                    @for (title, steps) in content::quick_reference() {
                        div {
                            h3 { (title) }
                            ol.steps {
                                @for step in steps {
                                    li { (step) }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    page(ctx, Page::Commands, body)
}

/// Link selecting `category` while keeping the current search text.
fn category_href(ctx: &PageContext, query: &CommandQuery, category: CategoryFilter) -> String {
    let category = match category {
        CategoryFilter::All => "",
        other => other.as_str(),
    };
    query_href(&ctx.path, &[("q", query.search.as_str()), ("category", category)])
}

fn command_card(cmd: &CommandDescriptor) -> Markup {
    html! {
        article.card data-command=(cmd.name) {
            h2.mono { (cmd.name) }
            span class={ "badge badge-" (cmd.category.as_str()) } { (cmd.category.as_str()) }
            p { (cmd.description) }

            h3 { "Required Permissions:" }
            @for permission in &cmd.permissions {
                span.badge.badge-permission { (permission) } " "
            }

            @if !cmd.options.is_empty() {
                h3 { "Options:" }
                @for option in &cmd.options {
                    div {
                        span.mono { (option.name) } " "
                        span.badge { (option.kind.label()) }
                        @if option.required {
                            " " span.badge.badge-required { "Required" }
                        }
                        p { (option.description) }
                    }
                }
            }

            h3 { "Examples:" }
            @for example in &cmd.examples {
                div.code { (example) }
            }
        }
    }
}
