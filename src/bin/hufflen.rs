use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use hufflen::{analyze, code_table, codec, AnalysisConfig, SingleSymbolDepth, SymbolMode};
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(name = "hufflen")]
#[command(about = "Compute optimal Huffman codes and the encoded length of a file")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Report the Huffman-encoded length of the input in bits
    Length {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Print the code assigned to every symbol
    Codes {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Encode the input into a Huffman container
    Encode {
        /// Input file (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output container file (use - for stdout)
        #[arg(short, long)]
        output: PathBuf,

        /// Encode raw bytes instead of the characters of UTF-8 text
        #[arg(long)]
        bytes: bool,

        /// Show verbose statistics
        #[arg(short, long)]
        verbose: bool,
    },
    /// Decode a Huffman container
    Decode {
        /// Input container file (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (use - for stdout)
        #[arg(short, long)]
        output: PathBuf,

        /// Show verbose statistics
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Input file (use - for stdin)
    #[arg(short, long)]
    input: PathBuf,

    /// Count raw bytes instead of the characters of UTF-8 text
    #[arg(long)]
    bytes: bool,

    /// Keep leading and trailing whitespace
    #[arg(long)]
    no_trim: bool,

    /// Charge one bit per symbol when the input has a single distinct symbol
    #[arg(long)]
    single_symbol_one_bit: bool,

    /// Number of counting threads (0 = auto, 1 = single-threaded)
    #[arg(short = 't', long, default_value = "1")]
    threads: usize,

    /// Show verbose statistics
    #[arg(short, long)]
    verbose: bool,
}

impl CommonArgs {
    fn config(&self) -> AnalysisConfig {
        AnalysisConfig {
            symbol_mode: symbol_mode(self.bytes),
            trim_whitespace: !self.no_trim,
            single_symbol_depth: if self.single_symbol_one_bit {
                SingleSymbolDepth::One
            } else {
                SingleSymbolDepth::Zero
            },
            num_threads: self.threads,
            ..Default::default()
        }
    }
}

/// Text is counted by character unless `--bytes` is given
fn symbol_mode(bytes: bool) -> SymbolMode {
    if bytes {
        SymbolMode::Bytes
    } else {
        SymbolMode::Chars
    }
}

/// Exit codes
const EXIT_SUCCESS: u8 = 0;
const EXIT_INVALID_INPUT: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: {}", e);
            let code = match &e {
                CliError::Hufflen(err) if err.is_invalid_input() => EXIT_INVALID_INPUT,
                _ => EXIT_ERROR,
            };
            ExitCode::from(code)
        }
    }
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Hufflen(#[from] hufflen::Error),

    #[error("{}: {}", .path.display(), .source)]
    Io { path: PathBuf, source: io::Error },
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Length { common } => run_length(&common),
        Command::Codes { common } => run_codes(&common),
        Command::Encode { input, output, bytes, verbose } => {
            run_encode(&input, &output, symbol_mode(bytes), verbose)
        }
        Command::Decode { input, output, verbose } => run_decode(&input, &output, verbose),
    }
}

fn run_length(args: &CommonArgs) -> Result<(), CliError> {
    let data = read_input(&args.input)?;
    let config = args.config();

    let start = Instant::now();
    let stats = analyze(&data, &config)?;
    let elapsed = start.elapsed();

    println!(
        "The length of Huffman encoding for the input from '{}' is {} bits.",
        args.input.display(),
        stats.encoding_length_bits
    );

    if args.verbose {
        eprintln!("Analysis complete:");
        eprintln!("  Input bytes:      {}", stats.input_bytes);
        eprintln!("  Symbols:          {}", stats.symbol_count);
        eprintln!("  Distinct symbols: {}", stats.distinct_symbols);
        eprintln!("  Tree height:      {}", stats.tree_height);
        eprintln!("  Fixed-width bits: {}", stats.fixed_width_bits);
        eprintln!("  Bits per symbol:  {:.3}", stats.bits_per_symbol());
        eprintln!("  Ratio:            {:.3}", stats.ratio());
        eprintln!("  Time:             {:.2?}", elapsed);
    }

    Ok(())
}

fn run_codes(args: &CommonArgs) -> Result<(), CliError> {
    let data = read_input(&args.input)?;
    let rows = code_table(&data, &args.config())?;

    let stdout = io::stdout().lock();
    let mut out = BufWriter::new(stdout);
    let io_err = |source| CliError::Io { path: PathBuf::from("-"), source };

    writeln!(out, "{:<10} {:>12} {:>6}  code", "symbol", "count", "bits").map_err(io_err)?;
    for row in &rows {
        writeln!(out, "{:<10} {:>12} {:>6}  {}", row.label, row.count, row.length, row.code)
            .map_err(io_err)?;
    }
    out.flush().map_err(io_err)?;

    if args.verbose {
        eprintln!("{} distinct symbols", rows.len());
    }
    Ok(())
}

fn run_encode(
    input: &Path,
    output: &Path,
    mode: SymbolMode,
    verbose: bool,
) -> Result<(), CliError> {
    let data = read_input(input)?;

    let start = Instant::now();
    let encoded = codec::encode(&data, mode)?;
    let elapsed = start.elapsed();

    write_output(output, &encoded)?;

    if verbose {
        eprintln!("Encoding complete:");
        eprintln!("  Input bytes:      {}", data.len());
        eprintln!("  Payload bits:     {}", codec::payload_bits(&encoded)?);
        eprintln!("  Output bytes:     {}", encoded.len());
        eprintln!("  Time:             {:.2?}", elapsed);
    }
    Ok(())
}

fn run_decode(input: &Path, output: &Path, verbose: bool) -> Result<(), CliError> {
    let data = read_input(input)?;

    let start = Instant::now();
    let decoded = codec::decode(&data)?;
    let elapsed = start.elapsed();

    write_output(output, &decoded)?;

    if verbose {
        eprintln!("Decoding complete:");
        eprintln!("  Input bytes:      {}", data.len());
        eprintln!("  Output bytes:     {}", decoded.len());
        eprintln!("  Time:             {:.2?}", elapsed);
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<Vec<u8>, CliError> {
    let io_err = |source| CliError::Io { path: path.to_path_buf(), source };

    if path.to_str() == Some("-") {
        let mut data = Vec::new();
        io::stdin().lock().read_to_end(&mut data).map_err(io_err)?;
        Ok(data)
    } else {
        let mut file = File::open(path).map_err(io_err)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data).map_err(io_err)?;
        Ok(data)
    }
}

fn write_output(path: &Path, data: &[u8]) -> Result<(), CliError> {
    let io_err = |source| CliError::Io { path: path.to_path_buf(), source };

    if path.to_str() == Some("-") {
        let mut stdout = io::stdout().lock();
        stdout.write_all(data).map_err(io_err)?;
        stdout.flush().map_err(io_err)
    } else {
        let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
        writer.write_all(data).map_err(io_err)?;
        writer.flush().map_err(io_err)
    }
}
