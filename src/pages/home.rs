use maud::{html, Markup};

use super::layout::{external, page};
use super::{Page, PageContext};
use crate::content;

pub fn render(ctx: &PageContext) -> Markup {
    let body = html! {
        section.hero {
            h1 { (content::BRAND) }
            h2 { (content::TAGLINE) }
            p { (content::BLURB) }
            a.btn.btn-outline href={ "#" (content::FEATURES_ANCHOR) } { "Learn More" }
            div.stats {
                @for stat in content::hero_stats() {
                    div.stat {
                        strong { (stat.value) }
                        span { (stat.label) }
                    }
                }
            }
        }

        section.section id=(content::FEATURES_ANCHOR) {
            div.container {
                div.section-title {
                    h2 { "Powerful Features" }
                    p { "CrizModo combines productivity tools with advanced Discord server management to create the perfect environment for focused work and collaboration." }
                }
                div.grid {
                    @for feature in content::features() {
                        div.card {
                            div.icon { (feature.icon) }
                            h3 { (feature.title) }
                            p { (feature.description) }
                            ul.bullets {
                                @for detail in &feature.details {
                                    li { (detail) }
                                }
                            }
                        }
                    }
                }
            }
        }

        section.section id="commands" {
            div.container {
                div.section-title {
                    h2 { "Bot Commands" }
                    p { "Comprehensive slash commands for Pomodoro timer management, voice channel control, and server administration." }
                }
                div.grid {
                    @for cmd in content::highlighted_commands() {
                        div.card {
                            h3.mono { (cmd.name) }
                            span class={ "badge badge-" (cmd.category.as_str()) } { (cmd.category.label()) }
                            p { (cmd.description) }
                            @if let Some(example) = cmd.examples.first() {
                                div.code { (example) }
                            }
                        }
                    }
                }
                p.section-title {
                    a.btn.btn-primary href="/commands" { "Full Command Reference" }
                }
            }
        }

        section.section id="documentation" {
            div.container {
                div.section-title {
                    h2 { "Documentation & Setup" }
                    p { "Everything you need to get CrizModo up and running in your Discord server." }
                }
                div.grid {
                    div.card {
                        h3 { "Quick Setup" }
                        ol.steps {
                            @for (title, detail) in content::quick_setup() {
                                li {
                                    strong { (title) }
                                    p { (detail) }
                                }
                            }
                        }
                    }
                    div.card {
                        h3 { "Required Permissions" }
                        ul.bullets {
                            @for permission in content::bot_permissions() {
                                li { (permission.name) " - " (permission.description) }
                            }
                        }
                        (external(&ctx.config.repository_url, "btn btn-outline", "View Full Documentation"))
                    }
                }
            }
        }

        section.hero {
            h2 { "Ready to boost your server's productivity?" }
            p { "Join thousands of Discord servers already using CrizModo for better time management and voice channel organization." }
            (external(&ctx.config.invite_url(), "btn btn-light", "Add CrizModo to Discord"))
        }
    };

    page(ctx, Page::Home, body)
}
