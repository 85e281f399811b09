use crate::config::SiteConfig;
use crate::models::{FaqEntry, Severity, SupportChannel, TroubleshootingEntry};

pub fn support_channels(config: &SiteConfig) -> Vec<SupportChannel> {
    vec![
        SupportChannel {
            icon: "💬",
            title: "Discord Server",
            description: "Join our community server for real-time support and discussions",
            action: "Join Server",
            link: config.discord_invite.clone(),
        },
        SupportChannel {
            icon: "🐛",
            title: "GitHub Issues",
            description: "Report bugs, request features, or contribute to the project",
            action: "Open Issue",
            link: config.repository_url.clone(),
        },
        SupportChannel {
            icon: "📧",
            title: "Email Support",
            description: "Contact us directly for private support or business inquiries",
            action: "Send Email",
            link: config.mailto(),
        },
    ]
}

pub fn troubleshooting() -> Vec<TroubleshootingEntry> {
    vec![
        TroubleshootingEntry {
            title: "Bot Not Responding",
            severity: Severity::High,
            steps: vec![
                "Check if the bot is online in your server",
                "Verify the bot has 'Use Slash Commands' permission",
                "Try using /ping to test connectivity",
                "Ensure the bot role is above the roles it needs to manage",
            ],
        },
        TroubleshootingEntry {
            title: "Commands Not Working",
            severity: Severity::Medium,
            steps: vec![
                "Verify you have the required permissions for the command",
                "Check if the command syntax is correct",
                "Ensure the bot has necessary permissions in the channel",
                "Try refreshing Discord or using a different device",
            ],
        },
        TroubleshootingEntry {
            title: "Voice Channel Management Issues",
            severity: Severity::Medium,
            steps: vec![
                "Verify the bot has 'Manage Channels' permission",
                "Check that the specified channels exist",
                "Ensure the required role exists and is configured correctly",
                "Verify the member count threshold is set appropriately",
            ],
        },
        TroubleshootingEntry {
            title: "Pomodoro Timer Problems",
            severity: Severity::Low,
            steps: vec![
                "Use /pomodoro setup to configure your settings first",
                "Check if you have an active session running",
                "Try stopping the current session with /pomodoro stopsession",
                "Verify the bot can send messages in the channel",
            ],
        },
    ]
}

pub fn faqs() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "How do I add CrizModo to my Discord server?",
            answer: "Click the 'Add to Discord' button on our homepage and select your server. Make sure you have 'Manage Server' permission in the target server.",
        },
        FaqEntry {
            question: "What permissions does the bot need?",
            answer: "CrizModo requires: Manage Channels, View Channels, Use Slash Commands, Send Messages, and Manage Roles. These are automatically requested during the invite process.",
        },
        FaqEntry {
            question: "Can multiple users use the Pomodoro timer simultaneously?",
            answer: "Yes! Each user has their own personal Pomodoro settings and can run independent timer sessions without interfering with others.",
        },
        FaqEntry {
            question: "How does the voice channel management work?",
            answer: "The bot monitors a primary voice channel's member count. When it reaches your threshold, a secondary channel becomes visible to specified roles. When the count drops and the secondary channel is empty, it becomes hidden again.",
        },
        FaqEntry {
            question: "Are my settings saved if the bot restarts?",
            answer: "Yes! All user settings, configurations, and active sessions are saved to MongoDB and will persist through bot restarts or updates.",
        },
        FaqEntry {
            question: "Can I customize the Pomodoro timer durations?",
            answer: "Absolutely! Use /pomodoro setup to set custom work sessions (5-180 min), breaks (1-60 min), long breaks (30-120 min), and session counts (1-10).",
        },
        FaqEntry {
            question: "Is there a limit to how many servers can use the bot?",
            answer: "No, CrizModo can be added to unlimited servers. Each server maintains its own independent configuration and settings.",
        },
        FaqEntry {
            question: "How do I report a bug or request a feature?",
            answer: "You can report bugs or request features through our GitHub repository, Discord server, or by contacting us directly via email.",
        },
    ]
}
