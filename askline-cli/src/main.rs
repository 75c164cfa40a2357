//! # askline
//!
//! Asks one validated question on the console and prints the answer.
//!
//! - `askline bool --prompt "Are you tall?" --default false`
//! - `askline int --prompt "How old are you?" --min 1 --max 100 --default 50`
//! - `askline float --prompt "Enter value for Pi" --min 3.0 --max 3.2`
//! - `askline menu red green blue --prompt "Choose a colour" --default 2`
//! - `askline demo` runs a short tour of all four questions
//!
//! Prompts and the answer go to stdout, logs go to stderr.

use anyhow::Result;
use askline_core::{BoolQuery, FloatQuery, IntQuery, MenuQuery, Query, Terminal};
use clap::{ArgAction, Parser, Subcommand};
use std::io::{BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod output;

use output::{Answer, OutputFormat};

/// askline - validated console prompts
#[derive(Parser)]
#[command(name = "askline")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Ask a validated question on the console and print the answer")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Log filter directive, overrides --verbose (e.g. "askline_core=debug")
    #[arg(long, env = "ASKLINE_LOG", global = true)]
    log: Option<String>,

    /// How the answer is printed
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Yes/no confirmation
    Bool {
        #[arg(long, default_value = BoolQuery::DEFAULT_PROMPT)]
        prompt: String,

        /// Answer used for an empty line
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        default: bool,
    },
    /// Integer within an inclusive range
    Int {
        #[arg(long, default_value = IntQuery::DEFAULT_PROMPT)]
        prompt: String,

        #[arg(long, default_value_t = IntQuery::DEFAULT_MIN, allow_negative_numbers = true)]
        min: i64,

        #[arg(long, default_value_t = IntQuery::DEFAULT_MAX, allow_negative_numbers = true)]
        max: i64,

        /// Value used for an empty line
        #[arg(long, allow_negative_numbers = true)]
        default: Option<i64>,
    },
    /// Floating-point value within an inclusive range
    Float {
        #[arg(long, default_value = FloatQuery::DEFAULT_PROMPT)]
        prompt: String,

        #[arg(long, default_value_t = FloatQuery::DEFAULT_MIN, allow_negative_numbers = true)]
        min: f64,

        #[arg(long, default_value_t = FloatQuery::DEFAULT_MAX, allow_negative_numbers = true)]
        max: f64,

        /// Value used for an empty line
        #[arg(long, allow_negative_numbers = true)]
        default: Option<f64>,
    },
    /// Pick one item from a numbered list
    Menu {
        /// Menu labels, in display order
        items: Vec<String>,

        #[arg(long)]
        prompt: Option<String>,

        /// One-based item used for an empty line
        #[arg(long, default_value_t = MenuQuery::DEFAULT_CHOICE)]
        default: usize,
    },
    /// Walk through every kind of question
    Demo,
}

fn init_tracing(cli: &Cli) -> Result<()> {
    let filter = match &cli.log {
        Some(directive) => EnvFilter::try_new(directive)?,
        None => match cli.verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        },
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    Ok(())
}

fn menu_answer(menu: &MenuQuery, index: Option<usize>) -> Answer {
    Answer::Menu {
        index,
        label: index.and_then(|i| menu.label(i)).map(str::to_string),
    }
}

fn show(answer: &Answer, format: OutputFormat) -> Result<()> {
    info!(?answer, "question answered");
    println!("{}", answer.render(format)?);
    Ok(())
}

fn run<R: BufRead, W: Write>(
    command: Command,
    terminal: &mut Terminal<R, W>,
    format: OutputFormat,
) -> Result<()> {
    let answer = match command {
        Command::Bool { prompt, default } => Answer::Bool {
            value: BoolQuery::new(prompt, default).run(terminal)?,
        },
        Command::Int {
            prompt,
            min,
            max,
            default,
        } => {
            let mut query = IntQuery::new(prompt, min, max);
            query.default = default;
            Answer::Int {
                value: query.run(terminal)?,
            }
        }
        Command::Float {
            prompt,
            min,
            max,
            default,
        } => {
            let mut query = FloatQuery::new(prompt, min, max);
            query.default = default;
            Answer::Float {
                value: query.run(terminal)?,
            }
        }
        Command::Menu {
            items,
            prompt,
            default,
        } => {
            let mut menu = MenuQuery::new(items).with_default(default);
            menu.prompt = prompt;
            let index = menu.run(terminal)?;
            menu_answer(&menu, index)
        }
        Command::Demo => return run_demo(terminal, format),
    };

    show(&answer, format)
}

/// Asks the built-in questions one after the other, printing each answer.
#[allow(clippy::approx_constant)]
fn run_demo<R: BufRead, W: Write>(terminal: &mut Terminal<R, W>, format: OutputFormat) -> Result<()> {
    info!("running demo");

    // Defaults only
    let answer = Answer::Bool {
        value: BoolQuery::default().run(terminal)?,
    };
    show(&answer, format)?;

    let answer = Answer::Int {
        value: IntQuery::default().run(terminal)?,
    };
    show(&answer, format)?;

    let answer = Answer::Float {
        value: FloatQuery::default().run(terminal)?,
    };
    show(&answer, format)?;

    let answer = Answer::Bool {
        value: BoolQuery::new("Are you tall?", false).run(terminal)?,
    };
    show(&answer, format)?;

    let age = IntQuery::new("How old are you?", 1, 100);
    let answer = Answer::Int {
        value: age.run(terminal)?,
    };
    show(&answer, format)?;

    let answer = Answer::Int {
        value: age.with_default(50).run(terminal)?,
    };
    show(&answer, format)?;

    let pi = FloatQuery::new("Enter value for Pi", 3.0, 3.2).with_default(3.14);
    let answer = Answer::Float {
        value: pi.run(terminal)?,
    };
    show(&answer, format)?;

    let colours = ["red", "green", "blue"];
    let menus = [
        MenuQuery::new(colours)
            .with_prompt("Choose a colour")
            .with_default(2),
        MenuQuery::new(colours).with_prompt("Choose a colour"),
        MenuQuery::new(colours),
    ];
    for menu in &menus {
        let index = menu.run(terminal)?;
        show(&menu_answer(menu, index), format)?;
    }

    let empty = MenuQuery::default();
    let index = empty.run(terminal)?;
    let answer = menu_answer(&empty, index);
    match format {
        OutputFormat::Text => println!("Returned index: {}", answer.render(format)?),
        OutputFormat::Json => println!("{}", answer.render(format)?),
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let mut terminal = Terminal::stdio();
    run(cli.command, &mut terminal, cli.format)
}
