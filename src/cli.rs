use std::path::PathBuf;
use structopt::clap::AppSettings;
use structopt::StructOpt;

#[derive(Debug, PartialEq, StructOpt)]
pub enum Command {
    /// Write a new task. Reads one line from stdin when no words are given.
    Add {
        /// The task description text.
        #[structopt()]
        description: Vec<String>,
    },
    /// Mark a task as completed by position.
    #[structopt(alias = "done", setting = AppSettings::AllowNegativeNumbers)]
    Complete {
        #[structopt()]
        position: i64,
    },
    /// Remove a task from the todo file by position.
    #[structopt(alias = "rm", setting = AppSettings::AllowNegativeNumbers)]
    Delete {
        #[structopt()]
        position: i64,
    },
    /// List all tasks in the todo file.
    #[structopt(alias = "ls")]
    List,
}

#[derive(Debug, StructOpt)]
#[structopt(name = "todo", about = "A minimal command-line task list.")]
pub struct CommandLineArgs {
    #[structopt(subcommand)]
    pub action: Option<Command>,

    /// Use a different todo file.
    #[structopt(
        parse(from_os_str),
        short = "f",
        long,
        env = "TODO_FILE",
        default_value = ".todos.json"
    )]
    pub todo_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CommandLineArgs {
        CommandLineArgs::from_iter_safe(args).unwrap()
    }

    #[test]
    fn add_collects_trailing_words() {
        let args = parse(&["todo", "add", "buy", "some", "milk"]);
        assert_eq!(
            args.action,
            Some(Command::Add {
                description: vec!["buy".into(), "some".into(), "milk".into()]
            })
        );
    }

    #[test]
    fn add_without_words() {
        let args = parse(&["todo", "add"]);
        assert_eq!(
            args.action,
            Some(Command::Add {
                description: vec![]
            })
        );
    }

    #[test]
    fn complete_and_delete_take_position() {
        assert_eq!(
            parse(&["todo", "complete", "2"]).action,
            Some(Command::Complete { position: 2 })
        );
        assert_eq!(
            parse(&["todo", "done", "3"]).action,
            Some(Command::Complete { position: 3 })
        );
        assert_eq!(
            parse(&["todo", "rm", "1"]).action,
            Some(Command::Delete { position: 1 })
        );
    }

    #[test]
    fn negative_positions_reach_the_list() {
        assert_eq!(
            parse(&["todo", "delete", "-1"]).action,
            Some(Command::Delete { position: -1 })
        );
        assert_eq!(
            parse(&["todo", "complete", "-4"]).action,
            Some(Command::Complete { position: -4 })
        );
    }

    #[test]
    fn position_must_be_a_number() {
        assert!(CommandLineArgs::from_iter_safe(&["todo", "complete", "first"]).is_err());
        assert!(CommandLineArgs::from_iter_safe(&["todo", "delete"]).is_err());
    }

    #[test]
    fn no_action_is_allowed() {
        assert_eq!(parse(&["todo"]).action, None);
    }

    #[test]
    fn todo_file_option() {
        let args = parse(&["todo", "-f", "/tmp/list.json", "ls"]);
        assert_eq!(args.todo_file, PathBuf::from("/tmp/list.json"));
        assert_eq!(args.action, Some(Command::List));
    }
}
