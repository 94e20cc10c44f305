//! CLI for notemark - Markdown engine for note text

use clap::Parser;
use notemark::{has_markdown, highlight_code, render_markdown, strip_markdown, Result};
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input text file (reads stdin if not specified)
    input: Option<PathBuf>,

    /// Output file (optional, prints to stdout if not specified)
    output: Option<PathBuf>,

    /// Strip Markdown markers instead of rendering to HTML
    #[arg(long, conflicts_with_all = ["detect", "highlight"])]
    strip: bool,

    /// Print "true" or "false" depending on whether the input contains Markdown
    #[arg(long, conflicts_with = "highlight")]
    detect: bool,

    /// Treat the whole input as code and emit a highlighted block for LANG
    #[arg(long, value_name = "LANG")]
    highlight: Option<String>,
}

fn run(args: &Args) -> Result<String> {
    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if args.detect {
        Ok(has_markdown(&text).to_string())
    } else if args.strip {
        Ok(strip_markdown(&text))
    } else if let Some(language) = &args.highlight {
        Ok(highlight_code(&text, language))
    } else {
        Ok(render_markdown(&text))
    }
}

fn main() {
    let args = Args::parse();

    match run(&args) {
        Ok(result) => {
            if let Some(output) = &args.output {
                if let Err(e) = std::fs::write(output, &result) {
                    eprintln!("Error writing output: {}", e);
                    std::process::exit(1);
                }
            } else {
                println!("{}", result);
            }
        }
        Err(e) => {
            eprintln!("Error processing input: {}", e);
            std::process::exit(1);
        }
    }
}
