use clap::Parser;
use log::info;
use plot_qr::cli::Cli;
use plot_qr::config::AppConfig;
use plot_qr::error::AppError;
use plot_qr::estimator::RecursiveEstimator;
use plot_qr::{export, gui};

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut app_config = AppConfig::load_from_file(&cli.config);
    cli.apply(&mut app_config);

    if cli.save_config {
        app_config.save_to_file(&cli.config)?;
    }

    let theta = app_config.estimator.theta;
    let series = RecursiveEstimator::new(app_config.estimator).run();

    for path in &cli.output {
        export::export(path, &series, theta, &app_config.plot)?;
    }

    if app_config.plot.show_window {
        gui::show(&series, theta, &app_config.plot)?;
    } else {
        info!("Plot window disabled");
    }

    Ok(())
}
