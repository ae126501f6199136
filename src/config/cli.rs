use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "students")]
#[command(about = "Record students and list those with a high average grade")]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Add a new student.
    Add {
        #[command(flatten)]
        file: FileArgs,

        /// The student's full name
        #[arg(short, long)]
        name: String,

        /// The student's group number
        #[arg(short, long)]
        group: String,

        /// The student's grades, separated by spaces
        #[arg(short = 'r', long, allow_hyphen_values = true)]
        grades: String,
    },
    /// Display students whose average grade is above 4.0.
    Display {
        #[command(flatten)]
        file: FileArgs,
    },
}

#[derive(Debug, Clone, Args)]
pub struct FileArgs {
    /// The data file name (falls back to STUDENTS_FILE)
    #[arg(short, long)]
    pub filename: Option<String>,
}

impl Command {
    pub fn filename(&self) -> Option<&str> {
        match self {
            Command::Add { file, .. } | Command::Display { file } => file.filename.as_deref(),
        }
    }
}
