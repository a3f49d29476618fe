use miette::IntoDiagnostic;
use symlogo::config::OUTPUT_FILE;
use symlogo::{LogoConfig, build_logo};

fn main() -> miette::Result<()> {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let canvas = build_logo(&LogoConfig::default())?;
    canvas.save(OUTPUT_FILE)?;

    let cwd = std::env::current_dir().into_diagnostic()?;
    eprintln!("wrote {} shapes to {}", canvas.len(), cwd.join(OUTPUT_FILE).display());
    Ok(())
}
