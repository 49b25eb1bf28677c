use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "boardz", bin_name = "boardz", version)]
#[command(about = "Notes, GitHub profiles, trivia and word counts in the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List notes
    #[command(alias = "ls")]
    List,

    /// Add a note
    #[command(alias = "n")]
    Add {
        /// Title of the note
        title: String,

        /// Content of the note
        content: String,
    },

    /// Edit a note (opens $EDITOR unless --title or --content is given)
    #[command(alias = "e")]
    Edit {
        /// Id of the note
        id: i64,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New content
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Remove a note
    #[command(alias = "rm")]
    Remove {
        /// Id of the note
        id: i64,
    },

    /// Interactive note board (commands read from stdin)
    Board,

    /// Show a GitHub user's profile and repositories
    #[command(alias = "gh")]
    Profile {
        /// GitHub username
        username: String,
    },

    /// Play a multiple-choice trivia quiz
    Quiz {
        /// Number of questions
        #[arg(short, long)]
        amount: Option<u32>,
    },

    /// Count words and characters (reads stdin when TEXT is omitted)
    #[command(alias = "wc")]
    Count {
        /// Text to count
        text: Option<String>,
    },

    /// Show or set configuration
    Config {
        /// Config key (storage-key, github-api, trivia-api, quiz-amount, timeout-secs)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}
