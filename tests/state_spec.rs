use crizmodo_site::content;
use crizmodo_site::models::*;
use crizmodo_site::state::*;
use speculate2::speculate;

fn names(commands: &[&CommandDescriptor]) -> Vec<&'static str> {
    commands.iter().map(|cmd| cmd.name).collect()
}

speculate! {
    before {
        let all = content::commands();
    }

    describe "filter_commands" {
        it "returns the full list for an empty search over all categories" {
            let filtered = filter_commands(&all, &CommandQuery::default());
            assert_eq!(filtered.len(), all.len());
            assert!(filtered.iter().zip(all.iter()).all(|(a, b)| *a == b));
        }

        it "returns exactly the matching subsequence in original order" {
            let query = CommandQuery::new("session", CategoryFilter::Only(CommandCategory::Pomodoro));
            let expected: Vec<_> = all
                .iter()
                .filter(|cmd| {
                    cmd.category == CommandCategory::Pomodoro
                        && (cmd.name.to_lowercase().contains("session")
                            || cmd.description.to_lowercase().contains("session"))
                })
                .map(|cmd| cmd.name)
                .collect();
            assert!(!expected.is_empty());
            assert_eq!(names(&filter_commands(&all, &query)), expected);
        }

        it "ignores case in both the search and the catalog" {
            let lower = filter_commands(&all, &CommandQuery::new("pomodoro", CategoryFilter::All));
            let upper = filter_commands(&all, &CommandQuery::new("POMODORO", CategoryFilter::All));
            assert_eq!(names(&lower), names(&upper));
            assert_eq!(lower.len(), 6);
        }

        it "is idempotent" {
            let query = CommandQuery::new("channel", CategoryFilter::All);
            let once = filter_commands(&all, &query);
            let twice = filter_commands(once.iter().copied(), &query);
            assert_eq!(names(&once), names(&twice));
        }

        it "yields nothing when the category has no match for the search" {
            let query = CommandQuery::new("pomodoro", CategoryFilter::Only(CommandCategory::General));
            assert!(filter_commands(&all, &query).is_empty());
        }

        it "selects only the chosen category when search is empty" {
            let query = CommandQuery::new("", CategoryFilter::Only(CommandCategory::Voice));
            assert_eq!(names(&filter_commands(&all, &query)), vec!["/enable-roomactivecheck"]);
        }
    }

    describe "filter_commands over an empty category" {
        it "is empty for any search" {
            let pomodoro_only: Vec<_> = all
                .iter()
                .filter(|cmd| cmd.category == CommandCategory::Pomodoro)
                .collect();
            for search in ["", "ping", "start"] {
                let query = CommandQuery::new(search, CategoryFilter::Only(CommandCategory::General));
                assert!(filter_commands(pomodoro_only.iter().copied(), &query).is_empty());
            }
        }
    }

    describe "NavbarState" {
        it "starts closed and returns to closed after two toggles" {
            let mut navbar = crizmodo_site::state::NavbarState::default();
            navbar.toggle_mobile_menu();
            assert!(navbar.is_mobile_open());
            navbar.toggle_mobile_menu();
            assert!(!navbar.is_mobile_open());
        }

        it "flips the scrolled flag exactly at the threshold in both directions" {
            let mut navbar = crizmodo_site::state::NavbarState::default();
            assert!(!navbar.on_scroll(SCROLL_THRESHOLD_PX));
            assert!(navbar.on_scroll(SCROLL_THRESHOLD_PX + 1.0));
            assert!(navbar.is_scrolled());
            assert!(!navbar.on_scroll(SCROLL_THRESHOLD_PX + 0.5));
            assert!(navbar.on_scroll(SCROLL_THRESHOLD_PX));
            assert!(!navbar.is_scrolled());
        }
    }

    describe "Accordion" {
        it "keeps a single panel open" {
            let mut accordion = crizmodo_site::state::Accordion::closed();
            accordion.toggle(0);
            assert!(accordion.is_open(0));
            accordion.toggle(4);
            assert!(!accordion.is_open(0));
            assert!(accordion.is_open(4));
        }

        it "closes the open panel when toggled again" {
            let mut accordion = crizmodo_site::state::Accordion::closed();
            accordion.toggle(4);
            accordion.toggle(4);
            assert_eq!(accordion.open_panel(), None);
        }
    }

    describe "Navigator" {
        it "defers the anchor scroll until the home route commits" {
            let mut navigator = crizmodo_site::state::Navigator::new();
            let mut navbar = crizmodo_site::state::NavbarState::new(true);
            let features = content::nav_links()[0];

            let action = navigator.navigate("/commands", &features, &mut navbar);
            assert_eq!(action.href(), "/#features");
            assert!(!navbar.is_mobile_open());
            assert_eq!(navigator.route_committed("/"), Some(content::FEATURES_ANCHOR));
        }

        it "scrolls in place when already on the home page" {
            let mut navigator = crizmodo_site::state::Navigator::new();
            let mut navbar = crizmodo_site::state::NavbarState::default();
            let features = content::nav_links()[0];

            assert_eq!(
                navigator.navigate("/", &features, &mut navbar),
                NavAction::ScrollTo(content::FEATURES_ANCHOR)
            );
        }
    }

    describe "filter_faqs" {
        it "matches questions and answers case-insensitively" {
            let faqs = content::faqs();
            let filtered = filter_faqs(&faqs, &FaqQuery::new("PERMISSION"));
            assert!(filtered.len() >= 2);
            for (index, entry) in filtered {
                assert_eq!(&faqs[index], entry);
            }
        }
    }
}
