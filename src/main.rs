#![doc = include_str!("../README.md")]

use clap::{Parser, Subcommand};
use core::error::Error;
use core::fmt::{self, Display, Formatter};
use html_render::{AttributeInput, DEFAULT_LANG, RenderOptions};
use log::{LevelFilter, debug};
use std::process::exit;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    #[command(subcommand)]
    command: Command,
    /// Becomes verbose.
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Renders a whole document.
    Page {
        /// Document body.
        #[arg(default_value = "")]
        body: String,
        /// Sets a document language.
        #[arg(long, default_value = DEFAULT_LANG)]
        lang: String,
        /// Sets a document title.
        #[arg(long)]
        title: Option<String>,
    },
    /// Renders an element.
    Element {
        /// A tag name.
        tag: String,
        /// Element content.
        #[arg(default_value = "")]
        content: String,
        /// Adds an attribute in a `NAME=VALUE` form.
        #[arg(long = "attribute", short)]
        attributes: Vec<String>,
        /// Uses pre-formatted attribute text.
        #[arg(long, conflicts_with = "attributes")]
        raw: Option<String>,
    },
}

#[derive(Debug, Eq, PartialEq)]
enum ArgumentError {
    InvalidAttribute(String),
}

impl Error for ArgumentError {}

impl Display for ArgumentError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAttribute(attribute) => {
                write!(formatter, "attribute must be in a NAME=VALUE form: {attribute}")
            }
        }
    }
}

fn main() {
    if let Err(error) = run() {
        eprintln!("{error}");
        exit(1)
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let Arguments { command, verbose } = Arguments::parse();

    env_logger::Builder::new()
        .filter_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    debug!("running {command:?}");

    println!("{}", render(command)?);

    Ok(())
}

fn render(command: Command) -> Result<String, ArgumentError> {
    Ok(match command {
        Command::Page { body, lang, title } => {
            let options = RenderOptions::new(lang);
            let options = if let Some(title) = title {
                options.set_title(title)
            } else {
                options
            };

            html_render::page(&options, "", &body)
        }
        Command::Element {
            tag,
            content,
            attributes,
            raw,
        } => html_render::element(&tag, &content, compile_attributes(raw, &attributes)?),
    })
}

fn compile_attributes(
    raw: Option<String>,
    attributes: &[String],
) -> Result<AttributeInput, ArgumentError> {
    if let Some(raw) = raw {
        return Ok(raw.into());
    }

    Ok(AttributeInput::List(
        attributes
            .iter()
            .map(String::as_str)
            .map(parse_attribute)
            .collect::<Result<_, _>>()?,
    ))
}

fn parse_attribute(attribute: &str) -> Result<(String, String), ArgumentError> {
    attribute
        .split_once('=')
        .map(|(name, value)| (name.into(), value.into()))
        .ok_or_else(|| ArgumentError::InvalidAttribute(attribute.into()))
}
