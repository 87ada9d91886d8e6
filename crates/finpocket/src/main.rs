#[cfg(feature = "native")]
use clap::Parser;
#[cfg(feature = "native")]
use finpocket::cli::{self, Args};
#[cfg(feature = "native")]
use finpocket::platform::NativeStorage;
#[cfg(feature = "native")]
use finpocket::{Session, Settings, init_logging};
#[cfg(feature = "native")]
use finpocket_core::{SystemClock, Tracker, UuidGenerator};

#[cfg(feature = "native")]
fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(NativeStorage::default_path);

    init_logging(&data_dir, &args.log_level)?;

    let settings = Settings::load_or_default(&data_dir);
    if !Settings::path(&data_dir).exists()
        && let Err(e) = settings.save(&data_dir)
    {
        tracing::warn!(error = %e, "Failed to write default settings");
    }

    let tracker =
        Tracker::new(SystemClock::new(), UuidGenerator).with_labels(settings.weekday_labels);
    let mut session = Session::open(NativeStorage::new(data_dir), tracker);

    let stdin = std::io::stdin();
    let mut ask = |prompt: &str| cli::ask_yes_no(prompt, &mut stdin.lock(), &mut std::io::stdout());
    cli::run(
        args.command,
        &mut session,
        &settings,
        &mut std::io::stdout(),
        &mut ask,
    )?;

    if let Some(e) = session.save_error() {
        return Err(color_eyre::eyre::eyre!("Changes were not saved: {e}"));
    }

    tracing::info!("finpocket exiting");
    Ok(())
}

#[cfg(not(feature = "native"))]
fn main() {
    // Web entry point is handled via wasm_bindgen in web.rs
    // This main() exists only to satisfy the binary target requirement
    panic!(
        "This binary requires the 'native' feature. For web, build the library for wasm32 with the 'web' feature."
    );
}
