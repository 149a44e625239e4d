use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chatmark")]
#[command(version)]
#[command(about = "Render AI chat Markdown to HTML")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Renders a single answer
    Render {
        /// Markdown file to read (stdin if omitted)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
        /// Emit bare fragments without the answer wrapper
        #[arg(long)]
        raw: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Renders a JSON chat transcript
    Transcript {
        /// JSON file holding an array of {role, content} messages
        #[arg(value_name = "FILE")]
        input: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Default)]
pub struct OutputArgs {
    /// Restrict output to the tags the renderer emits
    #[arg(long)]
    pub sanitize: bool,
    /// File to write HTML to (overrides the config file, stdout if unset)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}
