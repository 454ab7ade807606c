//! Shell command parsing
//!
//! Parses one input line into a `Command`. Keywords are case-insensitive;
//! commands that require an argument parse as `Unknown` without one.

/// Represents a browser command parsed from user input.
#[derive(Debug, PartialEq)]
pub enum Command {
    /// List the open directory
    List,
    /// Create a subfolder
    Mkdir(String),
    /// Import a photo from the given picker file
    Import(String),
    /// Open a subfolder
    Open(String),
    /// Go back to the parent browser
    Up,
    /// Print the open directory path
    Pwd,
    /// Print the stored size of a photo
    Size(String),
    /// Toggle ascending sort
    Sort(bool),
    /// Toggle photo size display
    ShowSize(bool),
    /// Change the passcode
    Chpass(String),
    /// Show the stored passcode
    Passcode,
    /// End the session
    Quit,
    /// Unknown or malformed input
    Unknown,
}

fn parse_switch(arg: &str) -> Option<bool> {
    match arg.to_ascii_uppercase().as_str() {
        "ON" => Some(true),
        "OFF" => Some(false),
        _ => None,
    }
}

/// Parses a raw input line into the `Command` enum.
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();
    let arg = parts.next().unwrap_or("").trim();

    match cmd.as_str() {
        "LIST" | "LS" => Command::List,
        "MKDIR" if !arg.is_empty() => Command::Mkdir(arg.to_string()),
        "IMPORT" if !arg.is_empty() => Command::Import(arg.to_string()),
        "OPEN" if !arg.is_empty() => Command::Open(arg.to_string()),
        "UP" => Command::Up,
        "PWD" => Command::Pwd,
        "SIZE" if !arg.is_empty() => Command::Size(arg.to_string()),
        "SORT" => match parse_switch(arg) {
            Some(value) => Command::Sort(value),
            None => Command::Unknown,
        },
        "SHOWSIZE" => match parse_switch(arg) {
            Some(value) => Command::ShowSize(value),
            None => Command::Unknown,
        },
        "CHPASS" if !arg.is_empty() => Command::Chpass(arg.to_string()),
        "PASSCODE" => Command::Passcode,
        "QUIT" | "Q" => Command::Quit,
        _ => Command::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command("LIST"), Command::List);
        assert_eq!(parse_command("ls"), Command::List);
        assert_eq!(parse_command("UP"), Command::Up);
        assert_eq!(parse_command("PWD"), Command::Pwd);
        assert_eq!(parse_command("PASSCODE"), Command::Passcode);
        assert_eq!(parse_command("QUIT"), Command::Quit);
        assert_eq!(parse_command("Q"), Command::Quit);
    }

    #[test]
    fn test_parse_commands_with_args() {
        assert_eq!(
            parse_command("MKDIR Holiday photos"),
            Command::Mkdir("Holiday photos".to_string())
        );
        assert_eq!(
            parse_command("import /tmp/cat.jpeg"),
            Command::Import("/tmp/cat.jpeg".to_string())
        );
        assert_eq!(parse_command("OPEN inner"), Command::Open("inner".to_string()));
        assert_eq!(parse_command("SIZE a.jpeg"), Command::Size("a.jpeg".to_string()));
        assert_eq!(parse_command("CHPASS 4321"), Command::Chpass("4321".to_string()));
    }

    #[test]
    fn test_parse_switches() {
        assert_eq!(parse_command("SORT ON"), Command::Sort(true));
        assert_eq!(parse_command("sort off"), Command::Sort(false));
        assert_eq!(parse_command("SHOWSIZE ON"), Command::ShowSize(true));
        assert_eq!(parse_command("SHOWSIZE maybe"), Command::Unknown);
    }

    #[test]
    fn test_parse_missing_args_is_unknown() {
        assert_eq!(parse_command("MKDIR"), Command::Unknown);
        assert_eq!(parse_command("OPEN"), Command::Unknown);
        assert_eq!(parse_command("SORT"), Command::Unknown);
        assert_eq!(parse_command("CHPASS"), Command::Unknown);
    }

    #[test]
    fn test_parse_unknown_input() {
        assert_eq!(parse_command(""), Command::Unknown);
        assert_eq!(parse_command("BADCMD"), Command::Unknown);
    }
}
