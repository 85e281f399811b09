use axum::http::StatusCode;
use axum_test::TestServer;
use crizmodo_site::api::create_router;
use crizmodo_site::config::SiteConfig;
use serde_json::Value;

fn setup() -> TestServer {
    let app = create_router(SiteConfig::default());
    TestServer::new(app).expect("Failed to create test server")
}

fn command_cards(html: &str) -> usize {
    html.matches("data-command=").count()
}

mod pages {
    use super::*;

    #[tokio::test]
    async fn every_route_renders_with_navbar_and_footer() {
        let server = setup();

        for path in ["/", "/documentation", "/commands", "/support"] {
            let response = server.get(path).await;
            response.assert_status_ok();
            let html = response.text();
            assert!(html.contains("id=\"site-nav\""), "{}", path);
            assert!(html.contains("All rights reserved"), "{}", path);
        }
    }

    #[tokio::test]
    async fn unknown_route_returns_not_found_page() {
        let server = setup();

        let response = server.get("/pricing").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.text().contains("Page Not Found"));
    }

    #[tokio::test]
    async fn home_links_features_in_place() {
        let server = setup();

        let html = server.get("/").await.text();

        assert!(html.contains("id=\"features\""));
        assert!(html.contains("href=\"#features\""));
    }

    #[tokio::test]
    async fn other_pages_link_features_through_home() {
        let server = setup();

        let html = server.get("/support").await.text();

        assert!(html.contains("href=\"/#features\""));
    }

    #[tokio::test]
    async fn home_scrolls_to_fragment_after_load() {
        let server = setup();

        let html = server.get("/").await.text();

        assert!(html.contains("addEventListener('DOMContentLoaded'"));
        assert!(html.contains("getElementById(id)"));
    }

    #[tokio::test]
    async fn invite_link_uses_configured_client_id() {
        let config = SiteConfig {
            client_id: "42".to_string(),
            permissions: 8,
            ..SiteConfig::default()
        };
        let server = TestServer::new(create_router(config)).unwrap();

        let html = server.get("/").await.text();

        assert!(html.contains("client_id=42&amp;permissions=8&amp;scope=bot"));
        assert!(html.contains("target=\"_blank\""));
    }
}

mod mobile_menu {
    use super::*;

    #[tokio::test]
    async fn drawer_is_hidden_by_default() {
        let server = setup();

        let html = server.get("/commands").await.text();

        assert!(!html.contains("class=\"drawer\""));
        assert!(html.contains("href=\"/commands?menu=open\""));
    }

    #[tokio::test]
    async fn drawer_opens_and_toggle_link_closes_it() {
        let server = setup();

        let html = server
            .get("/commands")
            .add_query_param("category", "voice")
            .add_query_param("menu", "open")
            .await
            .text();

        assert!(html.contains("class=\"drawer\""));
        assert!(html.contains("href=\"/commands?category=voice\""));
    }
}

mod commands_page {
    use super::*;

    #[tokio::test]
    async fn lists_every_command_without_filters() {
        let server = setup();

        let html = server.get("/commands").await.text();

        assert_eq!(command_cards(&html), 8);
        assert!(!html.contains("No commands found"));
    }

    #[tokio::test]
    async fn filters_by_search_and_category() {
        let server = setup();

        let html = server
            .get("/commands")
            .add_query_param("q", "Break")
            .add_query_param("category", "pomodoro")
            .await
            .text();

        assert_eq!(command_cards(&html), 2);
        assert!(html.contains("data-command=\"/pomodoro rest\""));
        assert!(html.contains("data-command=\"/pomodoro skip\""));
    }

    #[tokio::test]
    async fn shows_empty_state_when_nothing_matches() {
        let server = setup();

        let html = server
            .get("/commands")
            .add_query_param("q", "ping")
            .add_query_param("category", "voice")
            .await
            .text();

        assert_eq!(command_cards(&html), 0);
        assert!(html.contains("No commands found"));
    }

    #[tokio::test]
    async fn category_tabs_keep_the_search() {
        let server = setup();

        let html = server
            .get("/commands")
            .add_query_param("q", "start")
            .await
            .text();

        assert!(html.contains("href=\"/commands?q=start&amp;category=general\""));
    }

    #[tokio::test]
    async fn unknown_category_shows_everything() {
        let server = setup();

        let html = server
            .get("/commands")
            .add_query_param("category", "moderation")
            .await
            .text();

        assert_eq!(command_cards(&html), 8);
    }
}

mod documentation_page {
    use super::*;

    #[tokio::test]
    async fn defaults_to_quick_start() {
        let server = setup();

        let html = server.get("/documentation").await.text();

        assert!(html.contains("data-tab=\"quick-start\""));
        assert!(html.contains("Quick Start Guide"));
    }

    #[tokio::test]
    async fn selects_tab_by_slug_or_index() {
        let server = setup();

        let by_slug = server
            .get("/documentation")
            .add_query_param("tab", "database")
            .await
            .text();
        let by_index = server
            .get("/documentation")
            .add_query_param("tab", "5")
            .await
            .text();

        assert!(by_slug.contains("RoomActiveCheck Model"));
        assert!(by_index.contains("RoomActiveCheck Model"));
    }

    #[tokio::test]
    async fn unknown_tab_falls_back_to_quick_start() {
        let server = setup();

        let html = server
            .get("/documentation")
            .add_query_param("tab", "changelog")
            .await
            .text();

        assert!(html.contains("data-tab=\"quick-start\""));
    }
}

mod support_page {
    use super::*;

    #[tokio::test]
    async fn all_panels_start_closed() {
        let server = setup();

        let html = server.get("/support").await.text();

        assert!(!html.contains("class=\"faq-answer\""));
        assert!(html.contains("href=\"/support?faq=0#faq\""));
    }

    #[tokio::test]
    async fn open_panel_shows_answer_and_links_to_close() {
        let server = setup();

        let html = server
            .get("/support")
            .add_query_param("faq", "2")
            .await
            .text();

        assert_eq!(html.matches("class=\"faq-answer\"").count(), 1);
        assert!(html.contains("independent timer sessions"));
        // Panel 2 closes, panel 3 replaces it.
        assert!(html.contains("href=\"/support#faq\""));
        assert!(html.contains("href=\"/support?faq=3#faq\""));
    }

    #[tokio::test]
    async fn out_of_range_panel_is_ignored() {
        let server = setup();

        let html = server
            .get("/support")
            .add_query_param("faq", "99")
            .await
            .text();

        assert!(!html.contains("class=\"faq-answer\""));
    }
}

mod repeated_keys {
    use super::*;

    #[tokio::test]
    async fn commands_page_keeps_first_search_and_category() {
        let server = setup();

        let response = server
            .get("/commands?q=Break&q=zzz&category=pomodoro&category=general")
            .await;

        response.assert_status_ok();
        let html = response.text();
        assert_eq!(command_cards(&html), 2);
        assert!(html.contains("data-command=\"/pomodoro rest\""));
    }

    #[tokio::test]
    async fn support_page_keeps_first_open_panel() {
        let server = setup();

        let response = server.get("/support?faq=2&faq=5&q=&q=timer").await;

        response.assert_status_ok();
        let html = response.text();
        assert_eq!(html.matches("class=\"faq-answer\"").count(), 1);
        assert!(html.contains("independent timer sessions"));
    }

    #[tokio::test]
    async fn documentation_page_keeps_first_tab() {
        let server = setup();

        let response = server.get("/documentation?tab=database&tab=security").await;

        response.assert_status_ok();
        assert!(response.text().contains("RoomActiveCheck Model"));
    }

    #[tokio::test]
    async fn home_keeps_first_menu_value() {
        let server = setup();

        let response = server.get("/?menu=open&menu=closed").await;

        response.assert_status_ok();
        assert!(response.text().contains("class=\"drawer\""));
    }

    #[tokio::test]
    async fn commands_endpoint_keeps_first_category() {
        let server = setup();

        let response = server
            .get("/api/v1/commands?category=voice&category=pomodoro")
            .await;

        response.assert_status_ok();
        let body: Vec<Value> = response.json();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0]["category"], "voice");
    }

    #[tokio::test]
    async fn faqs_endpoint_keeps_first_search() {
        let server = setup();

        let response = server.get("/api/v1/faqs?q=restart&q=timer").await;

        response.assert_status_ok();
        let body: Vec<Value> = response.json();
        assert_eq!(body.len(), 1);
    }
}

mod api {
    use super::*;

    #[tokio::test]
    async fn health_reports_ok() {
        let server = setup();

        let response = server.get("/api/v1/health").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn commands_endpoint_applies_filters() {
        let server = setup();

        let response = server
            .get("/api/v1/commands")
            .add_query_param("category", "voice")
            .await;

        response.assert_status_ok();
        let body: Vec<Value> = response.json();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0]["name"], "/enable-roomactivecheck");
        assert_eq!(body[0]["category"], "voice");
        assert_eq!(body[0]["options"][0]["type"], "Boolean");
        assert_eq!(body[0]["options"][0]["required"], true);
    }

    #[tokio::test]
    async fn categories_start_with_all() {
        let server = setup();

        let body: Vec<Value> = server.get("/api/v1/categories").await.json();

        assert_eq!(body.len(), 4);
        assert_eq!(body[0]["id"], "all");
    }

    #[tokio::test]
    async fn faqs_endpoint_filters_by_search() {
        let server = setup();

        let body: Vec<Value> = server
            .get("/api/v1/faqs")
            .add_query_param("q", "restart")
            .await
            .json();

        assert_eq!(body.len(), 1);
        assert_eq!(body[0]["question"], "Are my settings saved if the bot restarts?");
    }

    #[tokio::test]
    async fn static_catalogs_are_served() {
        let server = setup();

        let troubleshooting: Vec<Value> = server.get("/api/v1/troubleshooting").await.json();
        let features: Vec<Value> = server.get("/api/v1/features").await.json();

        assert_eq!(troubleshooting.len(), 4);
        assert_eq!(troubleshooting[0]["severity"], "high");
        assert_eq!(features.len(), 6);
    }
}
