use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use daiarogu::{confirm, message, prompt, Choice};

#[derive(Parser, Debug)]
#[command(name = "daiarogu")]
#[command(version)]
#[command(about = "Simple blocking dialog boxes for the terminal")]
struct Args {
    /// Show a message box with this text
    #[arg(short, long, value_name = "TEXT")]
    message: Option<String>,

    /// Show a one-line input prompt with this label
    #[arg(short, long, value_name = "TEXT")]
    prompt: Option<String>,

    /// Show a yes/no/cancel confirmation with this question
    #[arg(short, long, value_name = "TEXT")]
    confirm: Option<String>,

    /// Title for the dialog frame
    #[arg(short, long)]
    title: Option<String>,

    /// Initial text for the input prompt
    #[arg(short, long, value_name = "TEXT")]
    default: Option<String>,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let title = args.title.as_deref();

    if let Some(text) = &args.message {
        message(text, title)?;
        if args.json {
            println!("{}", serde_json::json!({ "dialog": "message", "dismissed": true }));
        }
        return Ok(());
    }

    if let Some(text) = &args.prompt {
        let reply = prompt(text, title, args.default.as_deref())?;
        if args.json {
            println!("{}", serde_json::json!({ "dialog": "prompt", "value": &reply }));
        } else if let Some(value) = &reply {
            println!("{}", value);
        }
        // zenity-style: cancelled input exits nonzero
        if reply.is_none() {
            std::process::exit(1);
        }
        return Ok(());
    }

    if let Some(text) = &args.confirm {
        let choice = confirm(text, title)?;
        if args.json {
            println!("{}", serde_json::json!({ "dialog": "confirm", "choice": choice.as_str() }));
        } else {
            println!("{}", choice);
        }
        let code = match choice {
            Choice::Yes => 0,
            Choice::No => 1,
            Choice::Cancel => 2,
        };
        std::process::exit(code);
    }

    Args::command().print_help()?;
    Ok(())
}
