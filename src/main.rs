mod debug_report;

use clap::{Parser, ValueEnum};
use coptic_translit::{
    Options, OutputFormat, StreamSummary, TranslitError, rule_table, transliterate_reader,
    transliterate_reader_parallel, transliterate_verbose_with, transliterate_with,
};
use std::fs;
use std::io::{self, BufRead, BufReader, BufWriter, IsTerminal, Read, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing::Level;

const DEBUG_ENV: &str = "COPTIC_DEBUG_RULES";

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum CliFormat {
    #[default]
    Text,
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => OutputFormat::Text,
            CliFormat::Json => OutputFormat::JsonLines,
        }
    }
}

#[derive(Error, Debug)]
enum CliError {
    #[error("failed to open input file '{path}': {source}")]
    InputFileOpen { path: PathBuf, source: io::Error },

    #[error("failed to create output file '{path}': {source}")]
    OutputFileCreate { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Translit(#[from] TranslitError),
}

impl CliError {
    fn is_broken_pipe(&self) -> bool {
        match self {
            CliError::Io(err) | CliError::Translit(TranslitError::Io(err)) => err.kind() == io::ErrorKind::BrokenPipe,
            _ => false,
        }
    }
}

/// Transliterate Coptic text into Latin script.
#[derive(Parser, Debug)]
#[command(author, version)]
struct Cli {
    /// Text to transliterate. Multiple arguments are joined with spaces.
    #[arg(value_name = "TEXT")]
    direct_input: Vec<String>,

    /// Input file path (default: stdin).
    #[arg(short, long, value_name = "FILE")]
    input_file: Option<PathBuf>,

    /// Output file path (default: stdout).
    #[arg(short, long, value_name = "FILE")]
    output_file: Option<PathBuf>,

    /// Output format. 'json' writes one object per line with the unmapped characters.
    #[arg(short = 'f', long, value_enum, default_value_t = CliFormat::default())]
    format: CliFormat,

    /// Decode Unicode escape notation, e.g. \\u2C81 to ⲁ.
    #[arg(short = 'd', long, action = clap::ArgAction::SetTrue)]
    decode_unicode: bool,

    /// Process input lines in parallel.
    #[arg(short = 'p', long, action = clap::ArgAction::SetTrue)]
    parallel: bool,

    /// Stop after the first n lines of input.
    #[arg(long)]
    max_lines: Option<usize>,

    /// Print a per-pass report instead of the plain output.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    explain: bool,

    /// Print the ordered rewrite rules and exit.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    list_rules: bool,

    /// Force ANSI color in reports.
    #[arg(long, action = clap::ArgAction::SetTrue, conflicts_with = "no_color")]
    color: bool,

    /// Disable ANSI color in reports.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    no_color: bool,

    /// Log every rewrite pass to stderr.
    #[arg(short, long, action = clap::ArgAction::SetTrue, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors.
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    quiet: bool,
}

impl Cli {
    fn options(&self) -> Options {
        Options { report_unmapped: true, decode_escapes: self.decode_unicode, max_lines: self.max_lines }
    }

    fn color(&self) -> bool {
        if self.color {
            true
        } else if self.no_color {
            false
        } else {
            io::stdout().is_terminal()
        }
    }

    fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else if self.verbose || std::env::var_os(DEBUG_ENV).is_some() {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(cli.log_level())
        .with_target(false)
        .without_time()
        .init();

    if let Err(err) = run(&cli) {
        if err.is_broken_pipe() {
            return;
        }
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    if cli.list_rules {
        debug_report::print_rules(&rule_table(), cli.color());
        return Ok(());
    }

    let options = cli.options();

    if cli.explain {
        let input = read_whole_input(cli)?;
        let res = transliterate_verbose_with(&input, &options);
        debug_report::print_run(&res, cli.color());
        return Ok(());
    }

    let mut writer = get_writer(&cli.output_file)?;

    if !cli.direct_input.is_empty() {
        let text = cli.direct_input.join(" ");
        let res = transliterate_with(&text, &options);
        match cli.format {
            CliFormat::Text => writeln!(writer, "{}", res.text)?,
            CliFormat::Json => writeln!(writer, "{}", serde_json::to_string(&res).map_err(TranslitError::from)?)?,
        }
    }

    if cli.input_file.is_some() || cli.direct_input.is_empty() {
        let reader = get_reader(&cli.input_file)?;
        let summary = if cli.parallel {
            transliterate_reader_parallel(reader, &mut writer, &options, cli.format.into())?
        } else {
            transliterate_reader(reader, &mut writer, &options, cli.format.into())?
        };
        report_summary(&summary);
    }

    writer.flush()?;
    Ok(())
}

fn report_summary(summary: &StreamSummary) {
    if summary.lines_with_unmapped > 0 {
        tracing::warn!(
            lines = summary.lines,
            lines_with_unmapped = summary.lines_with_unmapped,
            unmapped_total = summary.unmapped_total,
            "input contained unmapped Coptic characters"
        );
    } else {
        tracing::debug!(lines = summary.lines, "all lines transliterated");
    }
}

fn read_whole_input(cli: &Cli) -> Result<String, CliError> {
    if !cli.direct_input.is_empty() {
        return Ok(cli.direct_input.join(" "));
    }

    let mut buffer = String::new();
    get_reader(&cli.input_file)?.read_to_string(&mut buffer)?;
    Ok(buffer.trim_end_matches(['\n', '\r']).to_string())
}

fn get_reader(path: &Option<PathBuf>) -> Result<Box<dyn BufRead>, CliError> {
    match path {
        Some(p) => {
            let file =
                fs::File::open(p).map_err(|source| CliError::InputFileOpen { path: p.clone(), source })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

fn get_writer(path: &Option<PathBuf>) -> Result<Box<dyn Write>, CliError> {
    match path {
        Some(p) => {
            let file =
                fs::File::create(p).map_err(|source| CliError::OutputFileCreate { path: p.clone(), source })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("coptic-translit-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("coptic-translit").chain(args.iter().copied()))
    }

    #[test]
    fn empty_input_is_accepted_in_every_mode() {
        let input = temp_file("empty-in", "");
        let output = temp_file("empty-out", "stale");
        let (input_arg, output_arg) = (input.to_string_lossy(), output.to_string_lossy());

        for extra in [&[][..], &["-p"][..], &["--explain"][..]] {
            let mut args = vec!["-i", input_arg.as_ref(), "-o", output_arg.as_ref(), "--no-color"];
            args.extend_from_slice(extra);
            assert!(run(&cli(&args)).is_ok(), "args {args:?}");
        }
        assert_eq!(fs::read_to_string(&output).unwrap(), "");

        fs::remove_file(input).unwrap();
        fs::remove_file(output).unwrap();
    }

    #[test]
    fn explain_strips_only_trailing_newlines() {
        let input = temp_file("explain-in", "ⲡⲁ \r\n");
        let parsed = cli(&["-i", input.to_string_lossy().as_ref()]);
        assert_eq!(read_whole_input(&parsed).unwrap(), "ⲡⲁ ");
        fs::remove_file(input).unwrap();
    }

    #[test]
    fn direct_arguments_are_joined() {
        let output = temp_file("direct-out", "");
        let parsed = cli(&["-o", output.to_string_lossy().as_ref(), "ⲡⲛⲟⲩⲧⲉ", "ⲁⲅⲁⲡⲏ"]);
        assert_eq!(read_whole_input(&parsed).unwrap(), "ⲡⲛⲟⲩⲧⲉ ⲁⲅⲁⲡⲏ");
        run(&parsed).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "pnoute ɑːghɑːpee\n");
        fs::remove_file(output).unwrap();
    }
}
