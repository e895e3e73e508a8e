use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lintweave::{
    compose, find_config_file, generate_init_file, load_options, merge_compose_options,
    should_use_colors, CliToggleOptions, Colors, ComposeOptions,
};

#[derive(Parser)]
#[command(name = "lintweave")]
#[command(version, about = "Compose ordered flat-config layers for a lint setup")]
struct Cli {
    /// Enable the type-system layer (default: package detection)
    #[arg(long)]
    typescript: bool,

    /// Enable the vue layer (default: marker-package detection)
    #[arg(long)]
    vue: bool,

    /// Enable the react layer
    #[arg(long)]
    react: bool,

    /// Skip the gitignore-derived layer
    #[arg(long)]
    no_gitignore: bool,

    /// Skip the test layer
    #[arg(long)]
    no_test: bool,

    /// Skip the JSON-like and manifest-sort layers
    #[arg(long)]
    no_jsonc: bool,

    /// Skip the YAML layer
    #[arg(long)]
    no_yaml: bool,

    /// Skip the markdown layer
    #[arg(long)]
    no_markdown: bool,

    /// Skip the formatting re-application layer
    #[arg(long)]
    no_prettier: bool,

    /// Pretty-print the composed sequence
    #[arg(short, long)]
    pretty: bool,

    /// Suppress informational messages
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored messages
    #[arg(long)]
    no_color: bool,

    /// Generate a template lintweave.toml configuration file
    #[arg(long)]
    init: bool,

    /// Specify config file path (overrides auto-discovery)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let colors = Colors::new(should_use_colors(cli.no_color));

    // Handle --init command
    if cli.init {
        return handle_init();
    }

    // Load configuration file, then merge CLI flags over it
    let file_options = load_configuration(&cli.config, cli.quiet);
    let cli_options = build_cli_options(&cli);
    let options = merge_compose_options(&cli_options, file_options);

    match compose(options, Vec::new()).await {
        Ok(sequence) => print_sequence(&sequence, cli.pretty, &colors),
        Err(e) => {
            eprintln!("{}Error:{} {e}", colors.error, colors.reset());
            ExitCode::from(1)
        }
    }
}

fn handle_init() -> ExitCode {
    match generate_init_file() {
        Ok(path) => {
            println!("Created {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn load_configuration(explicit_path: &Option<PathBuf>, quiet: bool) -> Option<ComposeOptions> {
    let config_path = explicit_path.clone().or_else(|| {
        std::env::current_dir()
            .ok()
            .and_then(|d| find_config_file(&d))
    });

    config_path.and_then(|p| match load_options(&p) {
        Ok(options) => {
            if !quiet {
                eprintln!("Using config: {}", p.display());
            }
            Some(options)
        }
        Err(e) => {
            eprintln!("Warning: Failed to load {}: {}", p.display(), e);
            None
        }
    })
}

fn build_cli_options(cli: &Cli) -> CliToggleOptions {
    // Only set options that were explicitly provided on CLI.
    // Boolean flags in clap are always present (default false), so we
    // treat false as "not set" for proper merging with config file.
    CliToggleOptions {
        typescript: cli.typescript.then_some(true),
        vue: cli.vue.then_some(true),
        react: cli.react.then_some(true),
        no_gitignore: cli.no_gitignore.then_some(true),
        no_test: cli.no_test.then_some(true),
        no_jsonc: cli.no_jsonc.then_some(true),
        no_yaml: cli.no_yaml.then_some(true),
        no_markdown: cli.no_markdown.then_some(true),
        no_prettier: cli.no_prettier.then_some(true),
    }
}

fn print_sequence(sequence: &[lintweave::Layer], pretty: bool, colors: &Colors) -> ExitCode {
    let rendered = if pretty {
        serde_json::to_string_pretty(sequence)
    } else {
        serde_json::to_string(sequence)
    };

    match rendered {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}Error:{} {e}", colors.error, colors.reset());
            ExitCode::from(1)
        }
    }
}
