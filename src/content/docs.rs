use crate::models::{ArchitectureEntry, BotPermission, ComponentKind, SetupStep};

pub fn setup_steps() -> [SetupStep; 4] {
    [
        SetupStep {
            title: "Clone the Repository",
            description: "Get the source code from GitHub",
            code: "git clone <repository-url>\ncd \"Timer Bot11\"",
        },
        SetupStep {
            title: "Install Dependencies",
            description: "Install required Node.js packages",
            code: "npm install discord.js mongoose dotenv",
        },
        SetupStep {
            title: "Environment Configuration",
            description: "Create and configure your .env file",
            code: "TOKEN=your_discord_bot_token\nAPPLICATION_ID=your_application_id\nCLIENT_ID=your_client_id\nGUILD_ID=your_test_server_id\nPUBLIC_KEY=your_public_key\nDATABASE_URL=your_mongodb_connection_string",
        },
        SetupStep {
            title: "Run the Bot",
            description: "Start your bot instance",
            code: "npm start\n# or for development\nnpm run dev",
        },
    ]
}

fn required(name: &'static str, description: &'static str) -> BotPermission {
    BotPermission {
        name,
        description,
        required: true,
    }
}

pub fn bot_permissions() -> [BotPermission; 5] {
    [
        required("Manage Channels", "For channel permission management"),
        required("View Channels", "To monitor voice channels"),
        required("Use Slash Commands", "For command functionality"),
        required("Send Messages", "For responses and notifications"),
        required("Manage Roles", "For permission overwrites"),
    ]
}

pub fn prerequisites() -> [&'static str; 4] {
    [
        "Node.js 16.9.0 or higher",
        "MongoDB Atlas account or local MongoDB instance",
        "Discord Bot Token",
        "Discord Server with appropriate permissions",
    ]
}

pub fn mongodb_steps() -> [&'static str; 4] {
    [
        "Create a MongoDB Atlas cluster or set up local MongoDB",
        "Create a database (name is flexible)",
        "The bot will automatically create required collections",
        "Add connection string to .env file",
    ]
}

pub fn architecture() -> [ArchitectureEntry; 6] {
    [
        ArchitectureEntry {
            component: "bot.js",
            description: "Main bot file - Entry point and event handlers",
            kind: ComponentKind::Core,
        },
        ArchitectureEntry {
            component: "commands/",
            description: "Slash command definitions and structure",
            kind: ComponentKind::Commands,
        },
        ArchitectureEntry {
            component: "handlers/",
            description: "Command logic handlers for different features",
            kind: ComponentKind::Logic,
        },
        ArchitectureEntry {
            component: "utils/",
            description: "Utility functions and managers",
            kind: ComponentKind::Utils,
        },
        ArchitectureEntry {
            component: "models/",
            description: "MongoDB data models",
            kind: ComponentKind::Database,
        },
        ArchitectureEntry {
            component: "database/",
            description: "Database connection and configuration",
            kind: ComponentKind::Database,
        },
    ]
}

pub const VOICE_CHANNEL_LOGIC: &str = "if (primary_channel_members >= threshold):
    make_secondary_visible_to_role()
elif (secondary_channel_has_members):
    keep_secondary_visible_to_role()  # Protect active users
else:
    hide_secondary_from_everyone()";

/// Title and body of each security card.
pub fn security_features() -> [(&'static str, &'static str); 4] {
    [
        (
            "Permission Validation",
            "Commands check user permissions before execution to ensure only authorized users can perform sensitive operations.",
        ),
        (
            "Input Sanitization",
            "All user inputs are validated and sanitized to prevent injection attacks and ensure data integrity.",
        ),
        (
            "Secure Credentials",
            "Environment variables protect sensitive credentials and database connection strings.",
        ),
        (
            "Error Privacy",
            "Detailed errors are logged to console while safe messages are sent to users to prevent information leakage.",
        ),
    ]
}

/// A stored model and the fields it keeps.
pub struct DataModel {
    pub name: &'static str,
    pub summary: &'static str,
    pub fields: &'static [&'static str],
}

pub fn data_models() -> [DataModel; 2] {
    [
        DataModel {
            name: "PomodoroUser Model",
            summary: "Stores individual user Pomodoro preferences and settings.",
            fields: &[
                "User ID",
                "Work/break/long break durations",
                "Sessions before long break",
                "Maximum sessions",
                "Creation/update timestamps",
            ],
        },
        DataModel {
            name: "RoomActiveCheck Model",
            summary: "Stores guild-specific channel management settings.",
            fields: &[
                "Guild ID",
                "Feature enabled status",
                "Primary/secondary channel IDs",
                "Required role ID",
                "Member count threshold",
                "Creation/update timestamps",
            ],
        },
    ]
}
