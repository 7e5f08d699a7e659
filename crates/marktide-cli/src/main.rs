use anyhow::{Context, Result};
use marktide_config::Config;
use marktide_engine::{MarkRule, Options, parse, render_html, snapshot};
use std::io::Read;
use std::{env, fs, process};

struct Args {
    input: String,
    level: Option<u8>,
    tokens: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let mut input = None;
    let mut level = None;
    let mut tokens = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--level" => {
                let value = args.next().ok_or("--level needs a value")?;
                let parsed: u8 = value
                    .parse()
                    .map_err(|_| format!("invalid --level value '{value}'"))?;
                if !(1..=6).contains(&parsed) {
                    return Err(format!("--level must be between 1 and 6, got {parsed}"));
                }
                level = Some(parsed);
            }
            "--tokens" => tokens = true,
            _ if arg.starts_with("--") => return Err(format!("unknown option '{arg}'")),
            _ => {
                if input.replace(arg).is_some() {
                    return Err("only one input may be given".to_string());
                }
            }
        }
    }

    let input = input.ok_or("no input given")?;
    Ok(Args {
        input,
        level,
        tokens,
    })
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("failed to read stdin")?;
        Ok(source)
    } else {
        fs::read_to_string(input).with_context(|| format!("failed to read '{input}'"))
    }
}

fn build_options(config: Option<&Config>, level_override: Option<u8>) -> Options {
    let mut opts = Options::default();
    if let Some(config) = config {
        if let Some(level) = config.section_level {
            opts.section_level = level;
        }
        if let Some(markers) = &config.markers {
            opts.rules = markers
                .iter()
                .filter_map(|m| m.marker_byte().map(|b| MarkRule::new(b, m.tag.clone())))
                .collect();
        }
    }
    if let Some(level) = level_override {
        opts.section_level = level;
    }
    opts
}

fn main() -> Result<()> {
    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("Error: {message}");
            eprintln!("Usage: marktide [--level N] [--tokens] <file | ->");
            process::exit(2);
        }
    };

    let config = Config::load().with_context(|| {
        format!(
            "failed to load config file at {}",
            Config::config_path().display()
        )
    })?;
    let opts = build_options(config.as_ref(), args.level);

    let source = read_input(&args.input)?;
    let stream = parse(&source, &opts).context("document has a structural fault")?;

    if args.tokens {
        let snaps = snapshot::normalize(&stream);
        println!("{}", serde_json::to_string_pretty(&snaps)?);
    } else {
        print!("{}", render_html(&stream)?);
    }
    Ok(())
}
