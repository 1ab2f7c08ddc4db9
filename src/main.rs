use quire::{PageKind, Pipeline, PipelineBuilder, PipelineError, RecordingSurface};
use std::env;
use std::process;

/// Lays out a manuscript JSON file and prints the page plan and the index.
fn main() -> Result<(), PipelineError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Lays out a book manuscript and prints the resulting page plan.");
        eprintln!();
        eprintln!(
            "Usage: {} <path/to/manuscript.json> [path/to/layout-config.json]",
            args[0]
        );
        process::exit(1);
    }

    let manuscript = Pipeline::load_manuscript(&args[1])?;
    let mut builder = PipelineBuilder::new();
    if let Some(config_path) = args.get(2) {
        builder = builder.with_config_file(config_path)?;
    }
    let pipeline = builder.build()?;

    let mut surface = RecordingSurface::new();
    let doc = pipeline.render(&manuscript, &mut surface)?;

    println!("{}: {} pages", manuscript.title, doc.page_count());
    for page in &doc.pages {
        let kind = match page.kind {
            PageKind::Cover => "cover".to_string(),
            PageKind::Title => "title".to_string(),
            PageKind::Index => "index".to_string(),
            PageKind::IndexOverflow => "index (continued)".to_string(),
            PageKind::Chapter { ordinal } => format!("chapter {}", ordinal),
        };
        match page.display_number {
            Some(label) => println!("  page {:>3}  {:<18} footer {}", page.number, kind, label),
            None => println!("  page {:>3}  {}", page.number, kind),
        }
    }

    println!();
    for entry in &doc.index_entries {
        println!("  {:02}  {:<50} {:>4}", entry.ordinal, entry.title, entry.page);
    }
    Ok(())
}
