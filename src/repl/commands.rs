//! REPL command table and input tokenizer

/// What a command does; dispatched by [`Repl`](super::Repl).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
    CacheInfo,
}

/// A REPL command as listed by `help`.
#[derive(Debug, Clone, Copy)]
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: CommandKind,
}

/// Every command, in the order `help` prints them.
pub const COMMANDS: &[Command] = &[
    Command {
        name: "help",
        description: "Displays a help message",
        kind: CommandKind::Help,
    },
    Command {
        name: "exit",
        description: "Exit the Pokedex",
        kind: CommandKind::Exit,
    },
    Command {
        name: "map",
        description: "Show the next 20 location areas",
        kind: CommandKind::Map,
    },
    Command {
        name: "mapb",
        description: "Show the previous 20 location areas",
        kind: CommandKind::MapBack,
    },
    Command {
        name: "explore",
        description: "List the Pokemon in an area (explore <area>)",
        kind: CommandKind::Explore,
    },
    Command {
        name: "catch",
        description: "Try to catch a Pokemon (catch <pokemon>)",
        kind: CommandKind::Catch,
    },
    Command {
        name: "inspect",
        description: "Show details of a caught Pokemon (inspect <pokemon>)",
        kind: CommandKind::Inspect,
    },
    Command {
        name: "pokedex",
        description: "List every Pokemon you have caught",
        kind: CommandKind::Pokedex,
    },
    Command {
        name: "cache",
        description: "Show response cache size and ttl",
        kind: CommandKind::CacheInfo,
    },
];

/// Finds a command by name.
pub fn find_command(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|command| command.name == name)
}

/// Splits a line into lowercase whitespace-separated words.
pub fn clean_input(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_input() {
        assert_eq!(
            clean_input("  Explore   Pastoria-City-Area \n"),
            vec!["explore", "pastoria-city-area"]
        );
        assert!(clean_input("   \t ").is_empty());
    }

    #[test]
    fn test_find_command() {
        assert_eq!(find_command("mapb").unwrap().kind, CommandKind::MapBack);
        assert!(find_command("fly").is_none());
        assert!(find_command("MAP").is_none());
    }

    #[test]
    fn test_command_names_unique() {
        for (i, a) in COMMANDS.iter().enumerate() {
            for b in &COMMANDS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
