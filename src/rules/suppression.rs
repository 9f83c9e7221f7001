use crate::config::CommandsConfig;
use crate::lexer::ScanState;

/// In-source command named by a `'BSLint_<command>` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SkipLine,
    SkipFile,
}

impl Command {
    /// Directive names match exactly; anything else is not a command.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "skip_line" => Some(Self::SkipLine),
            "skip_file" => Some(Self::SkipFile),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_enabled(self, commands: &CommandsConfig) -> bool {
        match self {
            Self::SkipLine => commands.skip_line.active,
            Self::SkipFile => commands.skip_file.active,
        }
    }
}

/// Apply a suppression directive found on the cursor's line.
///
/// `trails_code` is true when the directive follows code on the same line;
/// such a `skip_line` covers its own line, a standalone one covers the next.
/// Returns the command that took effect.
pub fn apply_directive(
    command: Option<&str>,
    commands: &CommandsConfig,
    state: &mut ScanState,
    trails_code: bool,
) -> Option<Command> {
    let line = state.cursor.line;
    let Some(command) = command.and_then(Command::parse) else {
        tracing::debug!(line, ?command, "ignoring unknown directive");
        return None;
    };
    if !command.is_enabled(commands) {
        tracing::debug!(line, ?command, "directive disabled by config");
        return None;
    }

    match command {
        Command::SkipLine => {
            let target = if trails_code { line } else { line + 1 };
            state.suppression.suppressed_line = Some(target);
            tracing::debug!(line, target, "suppressing style checks for line");
        }
        Command::SkipFile => {
            state.suppression.file_suppressed = true;
            tracing::debug!(line, "suppressing style checks for rest of file");
        }
    }

    Some(command)
}

#[cfg(test)]
#[path = "suppression_tests.rs"]
mod tests;
