//! # Whole-body interface constants
//!
//! The shared vocabulary between the whole-body interface and its backends (motor drivers,
//! estimators, planners): control modes, control law parameters, sensor types, estimates and
//! estimation parameters.
//!
//! Every enumeration implements [`Taxonomy`], and its values are encoded on the wire as their
//! ordinal. Sensor types and estimate types are additionally [`Described`] by a compiled-in
//! catalog giving the name, payload size and joint/Cartesian classification of each value.
//!
//! Enumerations, cardinality constants and catalogs are checked against each other at compile
//! time. Executables should also call [`check_consistency`] before initialising anything else.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

#[macro_use]
pub mod registry;

#[macro_use]
pub mod catalog;

pub mod control;
pub mod estimate;
pub mod sensor;

// ------------------------------------------------------------------------------------------------
// REEXPORTS
// ------------------------------------------------------------------------------------------------

pub use catalog::{BufferLayout, Catalog, Described, Slot, TypeDescription};
pub use control::*;
pub use estimate::*;
pub use registry::{check_taxonomy, ConsistencyError, OutOfRangeError, Taxonomy, UnknownNameError};
#[allow(deprecated)]
pub use sensor::SENSOR_ENCODER;
pub use sensor::{SensorType, SensorTypeDescription, SENSOR_TYPE_DESCRIPTIONS, SENSOR_TYPE_SIZE};

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Version of the taxonomy.
///
/// Must be incremented whenever a value is added to, or removed from, any enumeration, since the
/// ordinals are persisted by external protocols and logs.
pub const TAXONOMY_VERSION: u32 = 1;

// ------------------------------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Check every enumeration against its cardinality constant and every catalog against its
/// enumeration.
///
/// Executables shall call this before initialising any other subsystem, and abort on error.
pub fn check_consistency() -> Result<(), ConsistencyError> {
    check_taxonomy::<ControlMode>()?;
    check_taxonomy::<ControlParam>()?;
    check_taxonomy::<SensorType>()?;
    check_taxonomy::<EstimateType>()?;
    check_taxonomy::<EstimationParameter>()?;

    Catalog::new(&SENSOR_TYPE_DESCRIPTIONS)?;
    Catalog::new(&ESTIMATE_TYPE_DESCRIPTIONS)?;

    Ok(())
}
