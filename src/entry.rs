use std::ffi::OsString;
use std::process::ExitCode;
use std::sync::Arc;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use reqprobe::app;
use reqprobe::args::{ProbeArgs, RunMode};
use reqprobe::config::ProbeConfig;
use reqprobe::error::{AppError, AppResult};
use reqprobe::http::{Fetcher, TlsFetcher};

pub(crate) fn run() -> ExitCode {
    let args = match parse_args(std::env::args_os()) {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(err) => return report_failure(&err),
    };

    crate::logger::init_logging(args.verbose, args.no_color);

    match run_probe(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_failure(&err),
    }
}

fn parse_args<I>(raw_args: I) -> AppResult<Option<ProbeArgs>>
where
    I: IntoIterator<Item = OsString>,
{
    match ProbeArgs::try_parse_from(raw_args) {
        Ok(args) => Ok(Some(args)),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

fn run_probe(args: &ProbeArgs) -> AppResult<()> {
    let config = Arc::new(ProbeConfig::from_args(args)?);
    let mode = args.run_mode();
    if mode == RunMode::Skip {
        tracing::debug!("--profile=0: nothing to do.");
        return Ok(());
    }

    let fetcher: Arc<dyn Fetcher> = Arc::new(TlsFetcher::new(config.connect_timeout)?);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    runtime.block_on(app::execute(
        &fetcher,
        &config,
        mode,
        args.output_format,
        &mut out,
    ))
}

fn report_failure(err: &AppError) -> ExitCode {
    if let AppError::Clap { source } = err {
        // clap already appends usage to its own messages.
        drop(source.print());
    } else {
        eprintln!("{}", err);
        eprintln!();
        eprintln!("{}", ProbeArgs::command().render_help());
    }
    ExitCode::FAILURE
}
