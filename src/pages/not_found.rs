use maud::{html, Markup};

use super::layout::page;
use super::{Page, PageContext};

pub fn render(ctx: &PageContext) -> Markup {
    let body = html! {
        div.not-found {
            h1 { "404" }
            h2 { "Page Not Found" }
            p {
                "Sorry, the page you're looking for doesn't exist. You might have mistyped the URL or the page may have been moved."
            }
            p {
                a.btn.btn-primary href="/" { "🏠 Go Home" }
                " "
                a.btn.btn-outline href="javascript:history.back()" { "← Go Back" }
            }
        }
    };

    page(ctx, Page::NotFound, body)
}
