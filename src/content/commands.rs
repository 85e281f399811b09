use crate::models::{CommandCategory, CommandDescriptor, CommandOption, OptionKind};

const USE_APP_COMMANDS: &str = "Use Application Commands";

fn option(
    name: &'static str,
    kind: OptionKind,
    description: &'static str,
    required: bool,
) -> CommandOption {
    CommandOption {
        name,
        kind,
        description,
        required,
    }
}

/// A pomodoro subcommand that takes no options.
fn pomodoro_simple(name: &'static str, description: &'static str) -> CommandDescriptor {
    CommandDescriptor {
        name,
        description,
        category: CommandCategory::Pomodoro,
        permissions: vec![USE_APP_COMMANDS],
        options: vec![],
        examples: vec![name],
    }
}

/// Every documented slash-command, in reference order.
pub fn commands() -> Vec<CommandDescriptor> {
    vec![
        CommandDescriptor {
            name: "/pomodoro setup",
            description: "Configure your personal Pomodoro timer settings with custom durations and session counts.",
            category: CommandCategory::Pomodoro,
            permissions: vec![USE_APP_COMMANDS],
            options: vec![
                option("work", OptionKind::Integer, "Work session duration (5-180 minutes)", false),
                option("break", OptionKind::Integer, "Short break duration (1-60 minutes)", false),
                option("longbreak", OptionKind::Integer, "Long break duration (30-120 minutes)", false),
                option("sessions", OptionKind::Integer, "Sessions before long break (1-10)", false),
                option("max-sessions", OptionKind::Integer, "Maximum total sessions (1-10)", false),
            ],
            examples: vec![
                "/pomodoro setup work:25 break:5 longbreak:15 sessions:4",
                "/pomodoro setup work:50 break:10 max-sessions:6",
                "/pomodoro setup longbreak:30 sessions:3",
            ],
        },
        pomodoro_simple(
            "/pomodoro start",
            "Start a new Pomodoro session using your configured settings with interactive controls.",
        ),
        pomodoro_simple(
            "/pomodoro rest",
            "Take a manual break using your configured short break duration.",
        ),
        pomodoro_simple(
            "/pomodoro skip",
            "Skip the current phase and move to the next work or break session.",
        ),
        pomodoro_simple(
            "/pomodoro stopsession",
            "Stop the current Pomodoro session completely and reset all timers.",
        ),
        pomodoro_simple(
            "/pomodoro help",
            "Get detailed help and usage information about all Pomodoro commands.",
        ),
        CommandDescriptor {
            name: "/enable-roomactivecheck",
            description: "Configure dynamic voice channel visibility based on member count and role management.",
            category: CommandCategory::Voice,
            permissions: vec!["Manage Channels", "Manage Roles"],
            options: vec![
                option("enabled", OptionKind::Boolean, "Enable or disable the feature", true),
                option("primary-channel", OptionKind::Channel, "Voice channel to monitor for member count", true),
                option("secondary-channel", OptionKind::Channel, "Voice channel to show/hide based on activity", false),
                option("required-role", OptionKind::Role, "Role that can see the secondary channel when active", false),
                option("threshold", OptionKind::Integer, "Member count threshold (1-50, default: 10)", false),
            ],
            examples: vec![
                "/enable-roomactivecheck enabled:true primary-channel:#study-hall secondary-channel:#overflow required-role:@Students",
                "/enable-roomactivecheck enabled:true primary-channel:#general threshold:15",
                "/enable-roomactivecheck enabled:false",
            ],
        },
        CommandDescriptor {
            name: "/ping",
            description: "Check if the bot is responsive and view current latency statistics.",
            category: CommandCategory::General,
            permissions: vec![USE_APP_COMMANDS],
            options: vec![],
            examples: vec!["/ping"],
        },
    ]
}

/// Commands highlighted on the home page, in display order.
pub const HIGHLIGHTED_COMMANDS: [&str; 6] = [
    "/pomodoro setup",
    "/pomodoro start",
    "/enable-roomactivecheck",
    "/pomodoro rest",
    "/pomodoro skip",
    "/ping",
];

pub fn highlighted_commands() -> Vec<CommandDescriptor> {
    let all = commands();
    HIGHLIGHTED_COMMANDS
        .iter()
        .filter_map(|name| all.iter().find(|cmd| cmd.name == *name).cloned())
        .collect()
}

/// Numbered workflows shown under the command reference.
pub fn quick_reference() -> [(&'static str, [&'static str; 4]); 3] {
    [
        (
            "Pomodoro Workflow",
            [
                "/pomodoro setup - Configure settings",
                "/pomodoro start - Begin session",
                "Use interactive buttons to control",
                "/pomodoro help - Get assistance",
            ],
        ),
        (
            "Voice Management",
            [
                "Set up channels and roles",
                "/enable-roomactivecheck - Configure",
                "Bot monitors member counts",
                "Automatic visibility control",
            ],
        ),
        (
            "Troubleshooting",
            [
                "/ping - Check bot status",
                "Verify bot permissions",
                "Check channel/role settings",
                "Contact support if needed",
            ],
        ),
    ]
}
