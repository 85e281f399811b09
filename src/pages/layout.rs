use chrono::Datelike;
use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::{Page, PageContext, Theme};
use crate::content;
use crate::state::{Navigator, SCROLL_THRESHOLD_PX};

/// Wrap page content in the document shell, navbar and footer.
pub fn page(ctx: &PageContext, page: Page, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page.title()) }
                style { (PreEscaped(Theme::DEFAULT.stylesheet())) }
            }
            body {
                (navbar(ctx))
                main { (body) }
                (footer())
                script { (PreEscaped(scroll_script())) }
                script { (PreEscaped(FRAGMENT_SCRIPT)) }
            }
        }
    }
}

/// External link opened in a new browsing context.
pub fn external(href: &str, class: &str, label: &str) -> Markup {
    html! {
        a class=(class) href=(href) target="_blank" rel="noopener noreferrer" { (label) }
    }
}

fn navbar(ctx: &PageContext) -> Markup {
    let mut navigator = Navigator::new();
    let mut after_click = ctx.navbar;
    let links: Vec<_> = content::nav_links()
        .into_iter()
        .map(|link| {
            let action = navigator.navigate(&ctx.path, &link, &mut after_click);
            (link.label, action.href())
        })
        .collect();
    let invite = ctx.config.invite_url();

    html! {
        nav.navbar.scrolled[ctx.navbar.is_scrolled()] id="site-nav" {
            div.navbar-inner {
                a.brand href="/" { (content::BRAND) }
                div.nav-links {
                    @for (label, href) in &links {
                        a href=(href) { (label) }
                    }
                    (external(&invite, "btn btn-dark", "Add to Discord"))
                }
                a.menu-toggle href=(ctx.menu_toggle_href()) aria-label="Toggle menu" { "☰" }
            }
        }
        @if ctx.navbar.is_mobile_open() {
            a.drawer-backdrop href=(ctx.menu_toggle_href()) aria-label="Close menu" {}
            div.drawer {
                div {
                    strong { (content::BRAND) }
                    " "
                    a href=(ctx.menu_toggle_href()) aria-label="Close menu" { "✕" }
                }
                @for (label, href) in &links {
                    a href=(href) { (label) }
                }
                (external(&invite, "btn btn-dark", "Add to Discord"))
            }
        }
        div.nav-spacer {}
    }
}

fn footer() -> Markup {
    let year = chrono::Utc::now().year();
    html! {
        footer.footer {
            div.container {
                h3 { (content::BRAND) }
                p { (content::BLURB) }
                div.stats {
                    @for stat in content::footer_stats() {
                        div.stat {
                            strong { (stat.value) }
                            span { (stat.label) }
                        }
                    }
                }
                p {
                    "© " (year) " " (content::BRAND) ". All rights reserved. Built with ❤️ for the Discord community."
                }
            }
        }
    }
}

/// Applies the raised navbar style once the page scrolls past the threshold.
fn scroll_script() -> String {
    format!(
        "(function(){{var n=document.getElementById('site-nav');if(!n)return;\
         function u(){{n.classList.toggle('scrolled',window.scrollY>{});}}\
         window.addEventListener('scroll',u,{{passive:true}});u();}})();",
        SCROLL_THRESHOLD_PX
    )
}

/// Scrolls to the `#anchor` of a cross-page nav link once the new document
/// is parsed. A missing target is a no-op.
const FRAGMENT_SCRIPT: &str = "document.addEventListener('DOMContentLoaded',function(){\
var id=decodeURIComponent(location.hash.slice(1));if(!id)return;\
var t=document.getElementById(id);if(t)t.scrollIntoView({behavior:'smooth'});});";
