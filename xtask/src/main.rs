use camino::Utf8PathBuf;
use clockback::{BatchRenderer, ExecutionMode, IconConfig};
use tracing_subscriber::EnvFilter;

const DEFAULT_OUT_DIR: &str = "addon/content/icons";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "icons" => icons(&args[2..]),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            usage();
            std::process::exit(1);
        }
    }
}

fn usage() {
    eprintln!("Usage: cargo xtask <command>");
    eprintln!("Commands:");
    eprintln!("  icons [OUT_DIR] [--parallel]   Render the icon set (default: {DEFAULT_OUT_DIR})");
}

fn icons(args: &[String]) {
    let mut out_dir = Utf8PathBuf::from(DEFAULT_OUT_DIR);
    let mut mode = ExecutionMode::Sequential;
    for arg in args {
        match arg.as_str() {
            "--parallel" => mode = ExecutionMode::Parallel,
            flag if flag.starts_with("--") => {
                eprintln!("Unknown flag: {flag}");
                usage();
                std::process::exit(1);
            }
            dir => out_dir = Utf8PathBuf::from(dir),
        }
    }

    let renderer = BatchRenderer::new(IconConfig::default().with_mode(mode));
    let report = match renderer.render_all(&out_dir) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    };

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(path) => println!("Created: {path}"),
            Err(e) => eprintln!("Failed: {}: {e}", outcome.spec.filename),
        }
    }

    println!();
    println!("{} of {} icons written to {out_dir}", report.written(), report.outcomes.len());
    if !report.is_success() {
        std::process::exit(1);
    }
}
