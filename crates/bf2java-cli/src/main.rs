use std::fmt::Write as _;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bf2java_compiler::{
    build, load_source, translate_to_result, BuildOptions, Javac, PipelineError, DEFAULT_JAVAC,
    DEFAULT_OUTPUT,
};
use clap::Parser;
use tracing::{debug, info};

/// Brainfuck to Java translator
#[derive(Parser, Debug)]
#[command(name = "bf2java", version)]
#[command(about = "Translate a Brainfuck program into a Java class and compile it with javac")]
struct Args {
    /// Brainfuck source file
    source: PathBuf,

    /// Java file to write; its name up to the first '.' becomes the class name
    #[arg(default_value = DEFAULT_OUTPUT)]
    outfile: PathBuf,

    /// Class name to emit instead of the output file's stem
    #[arg(long)]
    class_name: Option<String>,

    /// Write the Java file but do not run the Java compiler
    #[arg(long)]
    no_compile: bool,

    /// Java compiler command
    #[arg(long, default_value = DEFAULT_JAVAC)]
    javac: String,

    /// Also write a JSON map from Java lines to Brainfuck source positions
    #[arg(long, value_name = "PATH")]
    source_map: Option<PathBuf>,

    /// Print the translation result as JSON on stdout instead of writing files
    #[arg(long)]
    json: bool,

    /// Log filter (e.g. "info", "bf2java_compiler=debug")
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn build_options(&self) -> BuildOptions {
        let mut options = BuildOptions::new(&self.source)
            .with_output(&self.outfile)
            .with_compile(!self.no_compile);
        if let Some(name) = &self.class_name {
            options = options.with_class_name(name);
        }
        if let Some(path) = &self.source_map {
            options = options.with_source_map(path);
        }
        options
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(&args.log_level)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();

    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprint!("{}", render_error(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let options = args.build_options();
    debug!(?options, "resolved options");

    if args.json {
        return print_json(&options);
    }

    let javac = Javac::new(&args.javac);
    let outcome = build(&options, &javac)?;
    info!(
        class = %outcome.class_name,
        output = %outcome.output.display(),
        "done"
    );
    Ok(ExitCode::SUCCESS)
}

fn print_json(options: &BuildOptions) -> Result<ExitCode> {
    let sf = load_source(&options.source)?;
    let result = translate_to_result(&sf.source, &sf.name, &options.resolved_class_name());
    let json =
        serde_json::to_string_pretty(&result).context("failed to serialize translation result")?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write to stdout")?;
    Ok(if result.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// The text printed on stderr for a failed run.
fn render_error(err: &anyhow::Error) -> String {
    let mut out = String::new();
    if let Some(PipelineError::Translate(errors)) = err.downcast_ref::<PipelineError>() {
        out.push_str("Error: Unmatched square braces.\n");
        out.push_str("Cannot continue.  Please review source.\n");
        for diag in &errors.errors {
            let _ = writeln!(out, "{diag}");
            if !diag.source_line.is_empty() {
                let _ = writeln!(out, "    {}", diag.source_line);
            }
            if let Some(suggestion) = &diag.suggestion {
                let _ = writeln!(out, "    help: {suggestion}");
            }
        }
        return out;
    }
    let _ = writeln!(out, "error: {err:#}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn source_is_required() {
        let err = Args::try_parse_from(["bf2java"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn outfile_defaults_to_bf_java() {
        let args = Args::try_parse_from(["bf2java", "prog.bf"]).unwrap();
        let options = args.build_options();
        assert_eq!(options.output, PathBuf::from("bf.java"));
        assert_eq!(options.resolved_class_name().as_str(), "bf");
        assert!(options.compile);
        assert_eq!(args.javac, "javac");
    }

    #[test]
    fn flags_map_to_options() {
        let args = Args::try_parse_from([
            "bf2java",
            "prog.bf",
            "out/Hello.java",
            "--no-compile",
            "--class-name",
            "Main",
            "--source-map",
            "out/Hello.map.json",
        ])
        .unwrap();
        let options = args.build_options();
        assert_eq!(options.output, PathBuf::from("out/Hello.java"));
        assert!(!options.compile);
        assert_eq!(options.resolved_class_name().as_str(), "Main");
        assert_eq!(
            options.source_map,
            Some(PathBuf::from("out/Hello.map.json"))
        );
    }

    #[test]
    fn unmatched_brackets_render_fixed_header() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("loop.bf");
        std::fs::write(&src, "+\n[").unwrap();
        let options = BuildOptions::new(&src)
            .with_output(dir.path().join("bf.java"))
            .with_compile(false);
        let err: anyhow::Error = build(&options, &Javac::default()).unwrap_err().into();

        let text = render_error(&err);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Error: Unmatched square braces."));
        assert_eq!(lines.next(), Some("Cannot continue.  Please review source."));
        let located = lines.next().unwrap();
        assert!(located.contains(":2:1: E100"), "got {located:?}");
        assert_eq!(lines.next(), Some("    ["));
        assert!(lines.next().unwrap().starts_with("    help: "));
    }

    #[test]
    fn other_errors_render_cause_chain() {
        let err = anyhow::Error::from(PipelineError::Io {
            path: PathBuf::from("out/bf.java"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        });
        assert_eq!(render_error(&err), "error: I/O error on 'out/bf.java': denied\n");
    }

    #[test]
    fn pipeline_errors_are_downcastable() {
        let dir = std::env::temp_dir().join("bf2java-cli-missing-source-test");
        let options = BuildOptions::new(dir.join("nope.bf")).with_compile(false);
        let err: anyhow::Error = build(&options, &Javac::default()).unwrap_err().into();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::MissingSource(_))
        ));
    }
}
