//! Git command cheat sheet.
//!
//! Static reference data grouped by task, with lookup by id and a simple
//! case-insensitive search.

use serde::Serialize;

/// A single documented command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GitCommand {
    /// Stable identifier, e.g. `reset-soft`
    pub id: &'static str,
    /// What the command does
    pub description: &'static str,
    /// The command line itself
    pub command: &'static str,
    /// Rewrites shared history or discards work
    pub destructive: bool,
}

/// Commands that belong to the same task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandGroup {
    pub title: &'static str,
    pub commands: &'static [GitCommand],
}

const fn command(id: &'static str, description: &'static str, command: &'static str) -> GitCommand {
    GitCommand {
        id,
        description,
        command,
        destructive: false,
    }
}

const fn destructive(id: &'static str, description: &'static str, command: &'static str) -> GitCommand {
    GitCommand {
        id,
        description,
        command,
        destructive: true,
    }
}

static GROUPS: &[CommandGroup] = &[
    CommandGroup {
        title: "Rewrite History (Squash / Rebase)",
        commands: &[
            command(
                "squash-n",
                "Interactive rebase the last 3 commits (to squash or edit)",
                "git rebase -i HEAD~3",
            ),
            command(
                "squash-hash",
                "Interactive rebase from a specific commit hash",
                "git rebase -i <hash>",
            ),
            destructive("rebase-branch", "Rebase current branch onto main", "git rebase main"),
        ],
    },
    CommandGroup {
        title: "Reset & Undoing",
        commands: &[
            command(
                "reset-soft",
                "Undo last commit but keep changes staged",
                "git reset --soft HEAD~1",
            ),
            destructive(
                "reset-hard",
                "Undo last commit and DISCARD all changes",
                "git reset --hard HEAD~1",
            ),
            command(
                "reset-hash",
                "Reset branch pointer to a specific hash (mixed)",
                "git reset <hash>",
            ),
        ],
    },
    CommandGroup {
        title: "Commit Modifiers",
        commands: &[
            command(
                "amend-message",
                "Update the message of the last commit",
                "git commit --amend -m \"New message\"",
            ),
            command(
                "amend-no-edit",
                "Add staged files to the last commit without changing message",
                "git commit --amend --no-edit",
            ),
        ],
    },
];

/// Every command group, in display order.
pub fn command_groups() -> &'static [CommandGroup] {
    GROUPS
}

/// Find a command by its id.
pub fn find_command(id: &str) -> Option<&'static GitCommand> {
    GROUPS
        .iter()
        .flat_map(|group| group.commands.iter())
        .find(|cmd| cmd.id == id)
}

/// Commands whose description or command line contains `query`, ignoring case.
///
/// A blank query returns every command.
///
/// # Examples
///
/// ```
/// use devtoolkit::search_commands;
///
/// let found = search_commands("amend");
/// assert_eq!(found.len(), 2);
/// ```
pub fn search_commands(query: &str) -> Vec<&'static GitCommand> {
    let needle = query.trim().to_lowercase();

    GROUPS
        .iter()
        .flat_map(|group| group.commands.iter())
        .filter(|cmd| {
            needle.is_empty()
                || cmd.description.to_lowercase().contains(&needle)
                || cmd.command.to_lowercase().contains(&needle)
        })
        .collect()
}
