use anyhow::Result;
use clap::Parser;
use gtrack_icongen::mipmap::{default_res_dir, generate};
use gtrack_icongen::text::font_system;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Res directory of the android app. Defaults to `android/app/src/main/res`
    /// next to the executable.
    #[clap(long)]
    res_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
    tracing_log::LogTracer::init().ok();
    let env = std::env::var("ICONGEN_LOG").unwrap_or_else(|_| "error".into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_span_events(FmtSpan::ACTIVE | FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    log_panics::init();
    let args = Args::parse();
    let res_dir = match args.res_dir {
        Some(dir) => dir,
        None => default_res_dir()?,
    };
    tracing::debug!("writing icons to {}", res_dir.display());
    generate(font_system(), &res_dir)?;
    println!();
    println!("✅ All icons generated successfully!");
    println!("Rebuild your app to see the new icons:");
    println!("  cd android && ./gradlew clean && cd .. && npm run android");
    Ok(())
}
