use std::path::Path;

use tracing::info;

use crate::catalog::load_catalog;
use crate::cli::Request;
use crate::config::{PlotSettings, Settings};
use crate::dups::{self, DuplicateReport};
use crate::error::AppError;
use crate::stats::{self, PlotData};

mod plot_view;
mod settings;

pub use settings::load_settings;

/// Run whichever analysis `request` names.
pub fn run(request: Request, settings: &Settings) -> Result<(), AppError> {
    match request {
        Request::Stats(path) => plot_stats(&path, settings),
        Request::Dups(path) => find_dups(&path, &settings.report.path).map(|_| ()),
        Request::Nothing => {
            println!("These are not the tracks you are looking for");
            Ok(())
        }
    }
}

/// Load the catalog and compute plot data.
///
/// Returns `Ok(None)` when no record has both a rating and a duration.
fn prepare_stats(path: &Path, plot: &PlotSettings) -> Result<Option<PlotData>, AppError> {
    let catalog = load_catalog(path)?;
    let samples = stats::collect_stats(&catalog);
    if samples.is_empty() {
        return Ok(None);
    }

    let data = PlotData::from_samples(&samples, plot);
    info!(
        "{} of {} tracks have a rating and duration; longest is {:.2} min",
        samples.len(),
        catalog.len(),
        data.max_minutes
    );
    Ok(Some(data))
}

fn plot_stats(path: &Path, settings: &Settings) -> Result<(), AppError> {
    match prepare_stats(path, &settings.plot)? {
        Some(data) => plot_view::show(&data, &settings.ui),
        None => {
            println!("No valid rating/Total Duration");
            Ok(())
        }
    }
}

/// Detect duplicates in `path` and write them to `report_path`.
///
/// The report file is written even when there is nothing to report.
fn find_dups(path: &Path, report_path: &Path) -> Result<DuplicateReport, AppError> {
    println!("Finding duplicate tracks in {}...", path.display());
    let catalog = load_catalog(path)?;
    let report = dups::find_duplicates(&catalog);

    if report.is_empty() {
        println!("No dups found");
    } else {
        println!(
            "Found {} duplicates. Track names saved to {}",
            report.len(),
            report_path.display()
        );
    }

    dups::write_report(report_path, report.duplicates()).map_err(|source| AppError::Report {
        path: report_path.to_path_buf(),
        source,
    })?;
    info!("Wrote {} report lines to {:?}", report.len(), report_path);
    Ok(report)
}
