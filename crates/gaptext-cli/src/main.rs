use anyhow::{Context, Result, bail};
use gaptext_config::Config;
use gaptext_engine::{
    Document, DocumentKind, GapFillingPayload, Principle, audit, encode_document, io, scan_markers,
};
use std::{env, path::PathBuf, process};

const USAGE: &str = "\
Usage: gaptext-cli <command> [options] <file>

Commands:
  show        Decode a payload file and print its structure
  audit       Decode a payload file and report consistency findings
  normalize   Decode then re-encode, printing the canonical body
  new         Write a fresh empty payload to <file>

Options:
  --kind <steps|labels|sentences|paragraphs>   Document kind (default from config)
  --config <path>                              Alternate config file";

struct Args {
    command: String,
    file: PathBuf,
    kind: Option<String>,
    config: Option<PathBuf>,
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    match run(&args) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(2);
        }
    }
}

fn parse_args(raw: &[String]) -> Result<Args> {
    let mut positionals = Vec::new();
    let mut kind = None;
    let mut config = None;

    let mut iter = raw.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--kind" => {
                kind = Some(
                    iter.next()
                        .context("--kind needs a value")?
                        .clone(),
                );
            }
            "--config" => {
                config = Some(PathBuf::from(
                    iter.next().context("--config needs a value")?,
                ));
            }
            flag if flag.starts_with("--") => bail!("unknown option: {flag}"),
            _ => positionals.push(arg.clone()),
        }
    }

    let [command, file] = positionals.as_slice() else {
        bail!("expected a command and a file");
    };

    Ok(Args {
        command: command.clone(),
        file: PathBuf::from(file),
        kind,
        config,
    })
}

fn run(args: &Args) -> Result<i32> {
    let config = load_config(args.config.as_deref())?;

    let kind_name = args.kind.as_deref().unwrap_or(&config.default_kind);
    let kind: DocumentKind = kind_name
        .parse()
        .with_context(|| format!("invalid document kind '{kind_name}'"))?;

    match args.command.as_str() {
        "show" => {
            let doc = load_document(&args.file, kind)?;
            print_document(&doc);
            Ok(0)
        }
        "audit" => {
            let doc = load_document(&args.file, kind)?;
            let findings = audit::check(&doc);
            if findings.is_empty() {
                println!("ok: {} gaps, {} answers", doc.question_numbers().len(), doc.answers.len());
                return Ok(0);
            }
            for finding in &findings {
                println!("{finding}");
            }
            Ok(1)
        }
        "normalize" => {
            let doc = load_document(&args.file, kind)?;
            println!("{}", encode_document(&doc));
            Ok(0)
        }
        "new" => {
            let principle: Principle = config
                .default_principle
                .parse()
                .with_context(|| {
                    format!("invalid default principle '{}'", config.default_principle)
                })?;
            let doc = Document::new(kind, principle);
            let payload = GapFillingPayload::from_document(&doc);
            io::write_payload(&args.file, &payload)
                .with_context(|| format!("writing {}", args.file.display()))?;
            println!("wrote {}", args.file.display());
            Ok(0)
        }
        other => bail!("unknown command: {other}\n{USAGE}"),
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };
    Ok(loaded.unwrap_or_default())
}

fn load_document(file: &std::path::Path, kind: DocumentKind) -> Result<Document> {
    let payload = io::read_payload(file).with_context(|| format!("reading {}", file.display()))?;
    Ok(payload.into_document(kind))
}

fn print_document(doc: &Document) {
    println!("kind: {}", doc.kind);
    println!("principle: {} ({})", doc.principle, doc.principle.label());
    if let Some(instruction) = &doc.instruction {
        println!("instruction: {instruction}");
    }
    if let Some(heading) = &doc.heading {
        println!("heading: {heading}");
    }
    if let Some(image) = &doc.image {
        println!("image: {image}");
    }

    println!("blocks:");
    for (index, block) in doc.blocks.iter().enumerate() {
        let gaps = scan_markers(&block.text);
        if gaps.is_empty() {
            println!("  {}. {}", index + 1, block.text);
        } else {
            let gaps: Vec<String> = gaps.iter().map(u32::to_string).collect();
            println!("  {}. {} [gaps: {}]", index + 1, block.text, gaps.join(", "));
        }
    }

    if !doc.options.is_empty() {
        println!("options:");
        for option in &doc.options {
            println!("  - {option}");
        }
    }
    if !doc.answers.is_empty() {
        println!("answers:");
        for answer in &doc.answers {
            println!("  {} → {}", answer.question_number, answer.correct_answer);
        }
    }
}
