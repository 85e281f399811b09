use maud::{html, Markup};

use super::layout::{external, page};
use super::{query_href, Page, PageContext};
use crate::content;
use crate::models::DocTab;

pub fn render(ctx: &PageContext, tab: DocTab) -> Markup {
    let body = html! {
        div.container {
            div.section-title {
                h1 { "Documentation" }
                p { "Complete guide to installing, configuring, and using CrizModo Discord Bot" }
            }

            nav.tabs {
                @for candidate in DocTab::ALL {
                    a.tab.active[candidate == tab]
                        href=(query_href(&ctx.path, &[("tab", candidate.slug())])) {
                        (candidate.icon()) " " (candidate.label())
                    }
                }
            }

            div.card data-tab=(tab.slug()) {
                (tab_body(ctx, tab))
            }

            p.section-title {
                (external(&ctx.config.repository_url, "btn btn-primary", "View on GitHub"))
            }
        }
    };

    page(ctx, Page::Documentation, body)
}

fn tab_body(ctx: &PageContext, tab: DocTab) -> Markup {
    match tab {
        DocTab::QuickStart => quick_start(),
        DocTab::Installation => installation(),
        DocTab::Configuration => configuration(ctx),
        DocTab::Architecture => architecture(),
        DocTab::Security => security(),
        DocTab::Database => database(),
    }
}

fn quick_start() -> Markup {
    html! {
        h2 { "Quick Start Guide" }
        div.grid {
            @for (i, step) in content::setup_steps().iter().enumerate() {
                div {
                    h3 { (i + 1) ". " (step.title) }
                    p { (step.description) }
                    pre.code { (step.code) }
                }
            }
        }
    }
}

fn installation() -> Markup {
    html! {
        h2 { "Installation Requirements" }
        h3 { "Prerequisites" }
        ul.bullets {
            @for item in content::prerequisites() {
                li { (item) }
            }
        }
        h3 { "Bot Permissions" }
        div.grid {
            @for permission in content::bot_permissions() {
                div {
                    h4 { (permission.name) }
                    p { (permission.description) }
                    @if permission.required {
                        span.badge.badge-required { "Required" }
                    }
                }
            }
        }
    }
}

fn configuration(ctx: &PageContext) -> Markup {
    html! {
        h2 { "Configuration Guide" }
        h3 { "Discord Bot Setup" }
        ol.steps {
            li {
                "Go to "
                (external("https://discord.com/developers/applications", "mono", "Discord Developer Portal"))
            }
            li { "Create a new application and bot" }
            li { "Copy your bot token and application ID" }
            li {
                "Set up OAuth2 URL with required scopes:"
                div.code { (ctx.config.developer_invite_url()) }
            }
        }
        h3 { "MongoDB Configuration" }
        ul.bullets {
            @for item in content::mongodb_steps() {
                li { (item) }
            }
        }
    }
}

fn architecture() -> Markup {
    html! {
        h2 { "Project Architecture" }
        h3 { "Project Structure" }
        div.grid {
            @for entry in content::architecture() {
                div {
                    h4.mono { (entry.component) }
                    span.badge { (entry.kind.label()) }
                    p { (entry.description) }
                }
            }
        }
        h3 { "Voice Channel Logic" }
        pre.code { (content::VOICE_CHANNEL_LOGIC) }
    }
}

fn security() -> Markup {
    html! {
        h2 { "Security Features" }
        div.grid {
            @for (title, body) in content::security_features() {
                div {
                    h3 { (title) }
                    p { (body) }
                }
            }
        }
    }
}

fn database() -> Markup {
    html! {
        h2 { "Database Models" }
        @for model in content::data_models() {
            div {
                h3 { (model.name) }
                p { (model.summary) }
                ul.bullets {
                    @for field in model.fields {
                        li { (field) }
                    }
                }
            }
        }
    }
}
