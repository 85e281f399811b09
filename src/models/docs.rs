use serde::Serialize;

/// One step of the self-hosting quick start.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SetupStep {
    pub title: &'static str,
    pub description: &'static str,
    /// Shell snippet or file contents shown in a code block.
    pub code: &'static str,
}

/// A Discord permission the bot requests at invite time.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct BotPermission {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

/// A directory or file in the bot's source tree.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ArchitectureEntry {
    pub component: &'static str,
    pub description: &'static str,
    pub kind: ComponentKind,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ComponentKind {
    Core,
    Commands,
    Logic,
    Utils,
    Database,
}

impl ComponentKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Core => "Core",
            Self::Commands => "Commands",
            Self::Logic => "Logic",
            Self::Utils => "Utils",
            Self::Database => "Database",
        }
    }
}

/// A tab of the documentation page.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DocTab {
    #[default]
    QuickStart,
    Installation,
    Configuration,
    Architecture,
    Security,
    Database,
}

impl DocTab {
    pub const ALL: [DocTab; 6] = [
        Self::QuickStart,
        Self::Installation,
        Self::Configuration,
        Self::Architecture,
        Self::Security,
        Self::Database,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::QuickStart => "quick-start",
            Self::Installation => "installation",
            Self::Configuration => "configuration",
            Self::Architecture => "architecture",
            Self::Security => "security",
            Self::Database => "database",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::QuickStart => "Quick Start",
            Self::Installation => "Installation",
            Self::Configuration => "Configuration",
            Self::Architecture => "Architecture",
            Self::Security => "Security",
            Self::Database => "Database",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::QuickStart => "🚀",
            Self::Installation => "⚙️",
            Self::Configuration => "🔧",
            Self::Architecture => "🏗️",
            Self::Security => "🔒",
            Self::Database => "💾",
        }
    }

    /// Parse a tab from a query value, accepting either the slug or the
    /// zero-based tab index.
    pub fn from_param(value: &str) -> Option<Self> {
        if let Ok(index) = value.parse::<usize>() {
            return Self::ALL.get(index).copied();
        }
        Self::ALL.into_iter().find(|tab| tab.slug() == value)
    }
}
