// std imports
use std::{
    io::{BufWriter, stdout},
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use wcmatch::{
    App, Options,
    app::exit_status,
    cli, config,
    error::*,
};

const WCMATCH_DEBUG_LOG: &str = "WCMATCH_DEBUG_LOG";
const WCMATCH_DEBUG_LOG_STYLE: &str = "WCMATCH_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(WCMATCH_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(WCMATCH_DEBUG_LOG).write_style(WCMATCH_DEBUG_LOG_STYLE))
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run() -> Result<usize> {
    bootstrap();

    let opt = cli::Opt::parse();

    let (configs, no_default_configs) = config::effective(&opt.config);
    let settings = config::at(configs).no_default(no_default_configs).load()?;
    log::debug!("settings: {:?}", settings);

    let inputs = opt.inputs();
    let options = Options::new(&opt, &settings, inputs.len());
    log::debug!("pattern: {:?}", options.pattern);

    let inputs = inputs.iter().map(|input| input.open()).collect::<Result<Vec<_>>>()?;

    let mut output = BufWriter::new(stdout().lock());
    let selected = App::new(options).run(inputs, &mut output)?;
    log::debug!("{} line(s) selected in total", selected);

    Ok(selected)
}

fn main() {
    let result = run();
    if let Err(err) = &result {
        if !err.is_broken_pipe() {
            eprintln!("{}: error: {}", config::APP_NAME, err);
        }
    }

    process::exit(exit_status(&result));
}
