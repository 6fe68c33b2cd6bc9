mod cli;

use cli::Args;
use clap::Parser;
use depviz::adapters::outbound::console::StderrProgressReporter;
use depviz::adapters::outbound::registry::{open_registry, CachingDependencySource};
use depviz::adapters::outbound::renderer::GraphvizRenderer;
use depviz::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use depviz::application::use_cases::{RenderGraphUseCase, ResolveGraphUseCase};
use depviz::config::{
    discover_config, load_config_from_path, resolve_settings, ConfigFile, CONFIG_FILENAME,
};
use depviz::dependency_graph::services::to_graph_description;
use depviz::shared::error::ExitCode;
use depviz::shared::Result;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let args = Args::try_parse().unwrap_or_else(|e| {
        if e.use_stderr() {
            let _ = e.print();
            process::exit(ExitCode::InvalidArguments.as_i32());
        }
        // --help and --version
        e.exit()
    });

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default `warn` level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(args: Args) -> Result<ExitCode> {
    // Load configuration: explicit path, else ./depviz.config.yml when present
    let config = match &args.config {
        Some(path) => load_config_from_path(path)?,
        None => {
            let cwd = std::env::current_dir()?;
            match discover_config(&cwd)? {
                Some(config) => {
                    eprintln!(
                        "📄 Auto-discovered config file: {}",
                        cwd.join(CONFIG_FILENAME).display()
                    );
                    config
                }
                None => ConfigFile::default(),
            }
        }
    };
    let settings = resolve_settings(config, args.overrides())?;
    tracing::debug!(?settings, "effective settings");

    // Create adapters (Dependency Injection)
    let progress_reporter = StderrProgressReporter::new();
    let registry = open_registry(&settings.repository);
    let source = CachingDependencySource::new(registry, &progress_reporter);

    // Resolve
    let use_case = ResolveGraphUseCase::new(source, &progress_reporter);
    let response = use_case.execute(settings.to_request())?;

    // Format and present
    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&response)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));
    presenter.present(&formatted_output)?;

    let mut exit_code = ExitCode::Success;

    // Optional image; the report above is kept even when rendering fails
    if let Some(image) = &settings.image {
        let render_use_case = RenderGraphUseCase::new(
            GraphvizRenderer::new(settings.renderer.clone()),
            &progress_reporter,
        );
        let outcome =
            render_use_case.render_to_image(&to_graph_description(&response.graph), image);
        if !outcome.is_success() {
            exit_code = ExitCode::ApplicationError;
        }
    }

    if args.fail_on_cycles && response.graph.has_cycles() && exit_code == ExitCode::Success {
        eprintln!(
            "❌ {} dependency cycle(s) found and --fail-on-cycles is set",
            response.graph.cycles().len()
        );
        exit_code = ExitCode::CyclesDetected;
    }

    Ok(exit_code)
}
