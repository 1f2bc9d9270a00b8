use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use subtab::{
    extract::{extract_subtables, summarize, SubTable, TableSummary},
    select::select_table,
    table::{export::write_table, merge_header_rows, HeaderRows},
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "subtab")]
#[command(version)]
#[command(about = "Extract stacked or side-by-side sub-tables from delimited files")]
struct Args {
    /// Delimited input file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Field delimiter (single ASCII character)
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// 1-based index of the table to export; prompts interactively when omitted
    #[arg(short, long)]
    table: Option<usize>,

    /// Number of leading rows to treat as header; inferred when omitted
    #[arg(long)]
    header_rows: Option<usize>,

    /// Header inference threshold: row 1 is treated as a banner above the real
    /// header when its non-blank cell count is below this fraction of row 2's
    #[arg(long, default_value_t = 0.5)]
    sparse_header_ratio: f64,

    /// Output path [default: <INPUT stem>_selected.csv]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Marker written for missing or non-numeric cells
    #[arg(long, default_value = "NA")]
    missing_value: String,

    /// List detected tables and exit
    #[arg(short, long)]
    list: bool,

    /// Emit the listing as JSON (with --list)
    #[arg(long, requires = "list")]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let args = Args::parse();
    if !args.delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character");
    }
    let delimiter = args.delimiter as u8;

    // ─── 2) read the source document ─────────────────────────────────
    let text = tokio::fs::read_to_string(&args.input)
        .await
        .with_context(|| format!("reading input file {}", args.input.display()))?;

    // ─── 3) locate every sub-table ───────────────────────────────────
    let tables = extract_subtables(&text, delimiter);
    if tables.is_empty() {
        bail!("no tables found in {}", args.input.display());
    }
    info!(count = tables.len(), "detected tables");

    let summaries = summarize(&tables);
    if args.list {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        } else {
            print_listing(&summaries);
        }
        return Ok(());
    }

    // ─── 4) pick one ─────────────────────────────────────────────────
    let selected = match args.table {
        // Non-interactive: an out-of-range index fails fast.
        Some(index) => select_table(&tables, index)?,
        None => prompt_for_table(&tables, &summaries)?,
    };
    info!(name = %selected.name, lines = ?selected.line_span, "selected table");

    // ─── 5) reconcile headers, coerce, prune ─────────────────────────
    let policy = match args.header_rows {
        Some(n) => HeaderRows::Fixed(n),
        None => HeaderRows::Infer {
            sparse_ratio: args.sparse_header_ratio,
        },
    };
    let header_rows = policy.resolve(selected);
    info!(header_rows, "resolved header policy");

    let mut table = merge_header_rows(selected, header_rows);
    if header_rows == 0 {
        table = table.with_positional_labels();
    }
    if table.row_labels.is_empty() {
        bail!("table '{}' has no data rows after pruning", table.name);
    }

    // ─── 6) export ───────────────────────────────────────────────────
    let output = args.output.unwrap_or_else(|| default_output(&args.input));
    write_table(&table, &output, delimiter, &args.missing_value)?;
    println!("wrote '{}' to {}", table.name, output.display());
    Ok(())
}

fn default_output(input: &PathBuf) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "table".to_string());
    input.with_file_name(format!("{}_selected.csv", stem))
}

fn print_listing(summaries: &[TableSummary]) {
    for s in summaries {
        println!(
            "[{}] {} (lines {}-{}, {} rows x {} columns)",
            s.index, s.name, s.first_line, s.last_line, s.rows, s.columns
        );
    }
}

/// Interactive selection: show the listing once, then re-prompt until the user
/// supplies an index that addresses a detected table.
fn prompt_for_table<'a>(
    tables: &'a [SubTable],
    summaries: &[TableSummary],
) -> Result<&'a SubTable> {
    print_listing(summaries);

    let stdin = io::stdin();
    loop {
        print!("select table [1-{}]: ", tables.len());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            bail!("no table selected (stdin closed)");
        }

        match line.trim().parse::<usize>() {
            Ok(index) => match select_table(tables, index) {
                Ok(table) => return Ok(table),
                Err(err) => eprintln!("{}", err),
            },
            Err(_) => eprintln!("enter a number between 1 and {}", tables.len()),
        }
    }
}
