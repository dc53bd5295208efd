use spec_analyzer::{default_registry, SpecAnalyzer};
use std::path::{Path, PathBuf};
use std::process;

fn usage() -> ! {
    eprintln!("Usage: spec-analyzer <file>");
    eprintln!("       spec-analyzer --reference <key> [--root <dir>]");
    process::exit(2);
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut reference_key: Option<String> = None;
    let mut root: Option<PathBuf> = None;
    let mut file: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--reference" => {
                i += 1;
                reference_key = Some(args.get(i).cloned().unwrap_or_else(|| usage()));
            }
            "--root" => {
                i += 1;
                root = Some(PathBuf::from(args.get(i).cloned().unwrap_or_else(|| usage())));
            }
            arg if arg.starts_with('-') => usage(),
            arg => file = Some(PathBuf::from(arg)),
        }
        i += 1;
    }

    let root = root.unwrap_or_else(|| PathBuf::from("."));
    let mut analyzer = SpecAnalyzer::new(default_registry(root));

    let structure = match (reference_key, file) {
        (Some(key), None) => {
            if !analyzer.has_reference(&key) {
                eprintln!("Unknown reference key: {}", key);
                process::exit(1);
            }
            analyzer.find_best_reference(&key)
        }
        (None, Some(path)) => analyzer.parse_spec(Path::new(&path)),
        _ => usage(),
    };

    match structure {
        Some(structure) => match serde_json::to_string_pretty(&*structure) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize structure: {}", e);
                process::exit(1);
            }
        },
        None => {
            eprintln!("No parsable reference spec found");
            process::exit(1);
        }
    }
}
