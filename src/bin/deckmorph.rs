use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "deckmorph", version)]
struct Cli {
    /// Increase log verbosity (`-v` info, `-vv` debug).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a deck into a scene timeline JSON.
    Convert(ConvertArgs),
    /// Print the deck's master color map with resolved literals.
    Colors(ColorsArgs),
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input deck JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output timeline JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Directory picture payloads are written to. Kept in memory when omitted.
    #[arg(long)]
    images: Option<PathBuf>,

    /// Pretty-print the output JSON.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct ColorsArgs {
    /// Input deck JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Convert(args) => cmd_convert(args),
        Command::Colors(args) => cmd_colors(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_deck_json(path: &Path) -> anyhow::Result<deckmorph::Deck> {
    let f = File::open(path).with_context(|| format!("open deck '{}'", path.display()))?;
    let r = BufReader::new(f);
    let deck: deckmorph::Deck = serde_json::from_reader(r).with_context(|| "parse deck JSON")?;
    Ok(deck)
}

fn cmd_convert(args: ConvertArgs) -> anyhow::Result<()> {
    let deck = read_deck_json(&args.in_path)?;
    deck.validate()?;

    let mut store: Box<dyn deckmorph::ImageStore> = match &args.images {
        Some(dir) => Box::new(deckmorph::DirImageStore::new(dir)),
        None => Box::new(deckmorph::InMemoryImageStore::new()),
    };
    let timeline = deckmorph::DeckPipeline::run(&deck, store.as_mut())?;

    let mut summary = SummaryEmitter::default();
    deckmorph::emit_timeline(&timeline, &mut summary)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory '{}'", parent.display()))?;
    }
    let f = File::create(&args.out)
        .with_context(|| format!("create output '{}'", args.out.display()))?;
    let mut w = BufWriter::new(f);
    if args.pretty {
        serde_json::to_writer_pretty(&mut w, &timeline)
    } else {
        serde_json::to_writer(&mut w, &timeline)
    }
    .with_context(|| "write timeline JSON")?;
    w.flush().with_context(|| "flush timeline JSON")?;

    eprintln!(
        "wrote {} ({} slides, {} records, {} operations)",
        args.out.display(),
        summary.slides,
        summary.records,
        summary.operations
    );
    Ok(())
}

fn cmd_colors(args: ColorsArgs) -> anyhow::Result<()> {
    let deck = read_deck_json(&args.in_path)?;
    let resolver = deckmorph::ThemeColorResolver::new(&deck.theme, &deck.master_map);
    let map = resolver.resolved_master_map();
    let json = serde_json::to_string_pretty(&map).with_context(|| "serialize color map")?;
    println!("{json}");
    Ok(())
}

/// Counts what flows through the timeline and logs one line per slide.
#[derive(Debug, Default)]
struct SummaryEmitter {
    slides: usize,
    records: usize,
    operations: usize,
}

impl deckmorph::SceneEmitter for SummaryEmitter {
    fn begin(&mut self, cfg: deckmorph::EmitConfig) -> deckmorph::DeckmorphResult<()> {
        tracing::info!(
            width = cfg.frame.width,
            height = cfg.frame.height,
            background = %cfg.background,
            slides = cfg.slide_count,
            "timeline"
        );
        Ok(())
    }

    fn push_slide(
        &mut self,
        slide_index: usize,
        records: &[deckmorph::ShapeRecord],
        operations: &[deckmorph::Operation],
    ) -> deckmorph::DeckmorphResult<()> {
        tracing::info!(
            slide = slide_index,
            records = records.len(),
            operations = operations.len(),
            "slide"
        );
        self.slides += 1;
        self.records += records.len();
        self.operations += operations.len();
        Ok(())
    }

    fn end(&mut self) -> deckmorph::DeckmorphResult<()> {
        Ok(())
    }
}
