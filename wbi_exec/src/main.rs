//! # Taxonomy Executable
//!
//! This executable checks and publishes the whole-body interface taxonomy for this software
//! version:
//! - Verifies every enumeration against its cardinality constant and descriptor catalog
//! - Logs the sensor and estimate catalogs
//! - Computes the composite reading buffer layouts for the configured robot
//! - Archives the taxonomy and layouts into the session directory

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Parameters for the taxonomy executable.
mod params;

/// Serialisable taxonomy reports.
mod report;

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

// External
use color_eyre::{eyre::WrapErr, Result};
use log::info;
use wbi_consts::{EstimateType, SensorType};

// Internal
use params::WbiExecParams;
use report::{ReadingLayouts, TaxonomyDump};
use util::{
    logger::{logger_init, LevelFilter},
    session::Session,
};

// ------------------------------------------------------------------------------------------------
// MAIN
// ------------------------------------------------------------------------------------------------

fn main() -> Result<()> {
    color_eyre::install()?;

    // ---- CONSISTENCY CHECK ----

    // Nothing else may start if the taxonomy cannot be trusted
    wbi_consts::check_consistency().wrap_err("The whole-body interface taxonomy is inconsistent")?;

    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session = Session::new("wbi_exec", "sessions").wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(LevelFilter::Trace, &session).wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("Whole-Body Interface Taxonomy Executable\n");
    info!("{}", report::consistency_summary());
    info!("Session directory: {:?}\n", session.session_root);

    // ---- LOAD PARAMETERS ----

    let params: WbiExecParams =
        util::params::load("wbi_exec.toml").wrap_err("Failed to load parameters")?;

    let sensors = params
        .sensor_types()
        .wrap_err("Invalid sensor in parameters")?;
    let estimates = params
        .estimate_types()
        .wrap_err("Invalid estimate in parameters")?;

    info!("Parameters loaded");

    // ---- CATALOGS ----

    report::log_catalog::<SensorType>();
    report::log_catalog::<EstimateType>();

    // ---- LAYOUTS ----

    let layouts = ReadingLayouts::new(&sensors, &estimates);

    report::log_layout("Sensor", &layouts.sensors);
    report::log_layout("Estimate", &layouts.estimates);

    // ---- ARCHIVE ----

    session
        .save_json("arch/layouts.json", &layouts)
        .wrap_err("Failed to archive the reading layouts")?;

    if params.archive_taxonomy {
        let path = session
            .save_json("arch/taxonomy.json", &TaxonomyDump::new())
            .wrap_err("Failed to archive the taxonomy")?;

        info!("Taxonomy archived to {:?}", path);
    }

    info!("Done");

    Ok(())
}
