use crate::models::{Feature, NavLink, Stat};

pub const BRAND: &str = "CrizModo";
pub const TAGLINE: &str = "Discord Timer & Channel Management Bot";
pub const BLURB: &str = "A comprehensive Discord bot providing Pomodoro timer functionality and dynamic voice channel management. Boost your server's productivity and organization.";

/// Anchor id of the features section on the home page.
pub const FEATURES_ANCHOR: &str = "features";

pub fn nav_links() -> [NavLink; 4] {
    [
        NavLink::section("Features", "/", FEATURES_ANCHOR),
        NavLink::page("Commands", "/commands"),
        NavLink::page("Documentation", "/documentation"),
        NavLink::page("Support", "/support"),
    ]
}

pub fn features() -> Vec<Feature> {
    vec![
        Feature {
            icon: "⏱️",
            title: "Pomodoro Timer System",
            description: "Customizable study sessions with interactive controls, progress tracking, and persistent settings saved to MongoDB.",
            details: vec![
                "Customizable work/break durations",
                "Visual progress bars",
                "Session counters",
                "Smart break management",
            ],
        },
        Feature {
            icon: "🔊",
            title: "Voice Channel Management",
            description: "Dynamic voice channel visibility based on member count with threshold-based control and role management.",
            details: vec![
                "Auto show/hide channels",
                "Configurable thresholds",
                "Role-based access",
                "Edge case protection",
            ],
        },
        Feature {
            icon: "💾",
            title: "MongoDB Integration",
            description: "Persistent data storage for user preferences, configurations, and session data across bot restarts.",
            details: vec![
                "User settings persistence",
                "Configuration backup",
                "Session recovery",
                "Data integrity",
            ],
        },
        Feature {
            icon: "🔒",
            title: "Security & Permissions",
            description: "Comprehensive permission validation, input sanitization, and secure credential management.",
            details: vec![
                "Permission validation",
                "Input sanitization",
                "Secure credentials",
                "Error privacy",
            ],
        },
        Feature {
            icon: "⚡",
            title: "Performance Optimized",
            description: "Built with discord.js v14, optimized for performance with rate limiting and error handling.",
            details: vec![
                "Rate limit handling",
                "Automatic reconnection",
                "Memory optimization",
                "Fast response times",
            ],
        },
        Feature {
            icon: "🎧",
            title: "24/7 Support",
            description: "Comprehensive logging, monitoring, and support system for seamless bot operation.",
            details: vec![
                "Detailed logging",
                "Error tracking",
                "Performance monitoring",
                "Community support",
            ],
        },
    ]
}

pub fn hero_stats() -> [Stat; 4] {
    [
        Stat { value: "50k+", label: "Active Users" },
        Stat { value: "10+", label: "Upcoming features" },
        Stat { value: "99.9%", label: "Uptime" },
        Stat { value: "24/7", label: "Support" },
    ]
}

pub fn footer_stats() -> [Stat; 3] {
    [
        Stat { value: "50k+", label: "Active Users" },
        Stat { value: "99.9%", label: "Uptime" },
        Stat { value: "24/7", label: "Support" },
    ]
}

/// Numbered invite steps for the home page setup card.
pub fn quick_setup() -> [(&'static str, &'static str); 3] {
    [
        ("Invite the Bot", "Click \"Add to Discord\" and select your server"),
        (
            "Configure Permissions",
            "Ensure the bot has Manage Channels and View Channels permissions",
        ),
        (
            "Start Using Commands",
            "Use /pomodoro setup to configure your timer settings",
        ),
    ]
}
