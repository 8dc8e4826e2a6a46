use clap::Parser;
use spanmaze::{
    app::{App, AppError},
    config::{Args, Config},
};
use tracing_appender::non_blocking::WorkerGuard;

/// Send logs to `path` if given. The returned guard flushes the writer on drop.
fn init_logging(path: Option<&std::path::Path>) -> Option<WorkerGuard> {
    let path = path?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    let file_name = path.file_name()?;
    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
    Some(guard)
}

fn main() -> Result<(), AppError> {
    let config = match Config::try_from(Args::parse()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };
    let _guard = init_logging(config.log_file.as_deref());

    let app = App::new(config);
    app.run(&mut std::io::stdout())?;
    Ok(())
}
