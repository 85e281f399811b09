use serde::Serialize;

/// Static documentation for one bot slash-command.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CommandDescriptor {
    /// Invocation as typed in Discord, e.g. `/pomodoro setup`.
    pub name: &'static str,
    pub description: &'static str,
    pub category: CommandCategory,
    /// Discord permissions the invoking member needs.
    pub permissions: Vec<&'static str>,
    pub options: Vec<CommandOption>,
    pub examples: Vec<&'static str>,
}

/// A typed argument accepted by a command.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CommandOption {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: OptionKind,
    pub description: &'static str,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum OptionKind {
    Integer,
    Boolean,
    Channel,
    Role,
    String,
}

impl OptionKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::Boolean => "Boolean",
            Self::Channel => "Channel",
            Self::Role => "Role",
            Self::String => "String",
        }
    }
}

/// The group a command is listed under.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CommandCategory {
    Pomodoro,
    Voice,
    General,
}

impl CommandCategory {
    pub const ALL: [CommandCategory; 3] = [Self::Pomodoro, Self::Voice, Self::General];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pomodoro => "pomodoro",
            Self::Voice => "voice",
            Self::General => "general",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pomodoro" => Some(Self::Pomodoro),
            "voice" => Some(Self::Voice),
            "general" => Some(Self::General),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pomodoro => "Pomodoro",
            Self::Voice => "Voice Management",
            Self::General => "General",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Pomodoro => "⏱️",
            Self::Voice => "🔊",
            Self::General => "⚙️",
        }
    }
}

/// Category selection on the command reference.
///
/// `All` is the default and matches every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(CommandCategory),
}

impl CategoryFilter {
    /// Every selectable filter, in tab order.
    pub fn choices() -> [CategoryFilter; 4] {
        [
            Self::All,
            Self::Only(CommandCategory::Pomodoro),
            Self::Only(CommandCategory::Voice),
            Self::Only(CommandCategory::General),
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Self::All),
            other => CommandCategory::from_str(other).map(Self::Only),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Commands",
            Self::Only(category) => category.label(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::All => "📋",
            Self::Only(category) => category.icon(),
        }
    }

    pub fn accepts(&self, category: CommandCategory) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_its_id() {
        for category in CommandCategory::ALL {
            assert_eq!(CommandCategory::from_str(category.as_str()), Some(category));
        }
    }

    #[test]
    fn filter_parses_all_and_rejects_unknown() {
        assert_eq!(CategoryFilter::from_str("all"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::from_str("voice"),
            Some(CategoryFilter::Only(CommandCategory::Voice))
        );
        assert_eq!(CategoryFilter::from_str("moderation"), None);
    }

    #[test]
    fn all_filter_accepts_every_category() {
        for category in CommandCategory::ALL {
            assert!(CategoryFilter::All.accepts(category));
        }
        assert!(!CategoryFilter::Only(CommandCategory::General).accepts(CommandCategory::Voice));
    }
}
