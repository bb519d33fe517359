use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::LevelFilter;

use word_freq::chart::render_bar_chart;
use word_freq::{count_words, io, Config, Result, WordFrequencies, WordFreqError, WordsOfInterest, WorkerPool};

#[derive(Parser, Debug)]
#[command(name = "word_freq", about = "Count word frequencies in a document with map/shuffle/reduce")]
struct Cli {
    /// Document to fetch over HTTP
    url: Option<String>,

    /// Read the text from a local file instead of fetching it
    #[arg(long, conflicts_with = "url")]
    file: Option<PathBuf>,

    /// Number of words to show
    #[arg(short = 'n', long)]
    top_n: Option<usize>,

    /// Worker threads for map and reduce (default: one per cpu)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Only count this word (repeatable)
    #[arg(long = "word")]
    words: Vec<String>,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Width of the longest bar
    #[arg(long)]
    width: Option<usize>,

    /// Print all counts as JSON instead of a chart
    #[arg(long)]
    json: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    // file values first, flags on top
    fn into_config(self) -> Result<(Config, Option<PathBuf>, bool)> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        if let Some(url) = self.url {
            config.url = url;
        }
        if let Some(n) = self.top_n {
            config.top_n = n;
        }
        if self.workers.is_some() {
            config.workers = self.workers;
        }
        if !self.words.is_empty() {
            config.words = self.words;
        }
        if let Some(width) = self.width {
            config.chart_width = width;
        }
        config.validate()?;
        return Ok((config, self.file, self.json));
    }
}

fn render_json(frequencies: &WordFrequencies) -> Result<String> {
    return serde_json::to_string_pretty(frequencies).map_err(WordFreqError::Serialize);
}

fn run(cli: Cli) -> Result<()> {
    let (config, file, json) = cli.into_config()?;

    let text = match file {
        Some(path) => io::read_text(path)?,
        None => io::get_text(&config.url, config.timeout()),
    };
    if text.is_empty() {
        log::warn!("no text to analyze");
        return Ok(());
    }

    let pool = WorkerPool::with_workers(config.worker_count())?;
    let words = WordsOfInterest::new(&config.words);
    let frequencies = count_words(&pool, &text, Some(&words));

    if json {
        println!("{}", render_json(&frequencies)?);
    } else {
        print!("{}", render_bar_chart(&frequencies, config.top_n, config.chart_width));
    }
    return Ok(());
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        process::exit(1);
    }
}
