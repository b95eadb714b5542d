//! # Taxonomy reports
//!
//! Serialisable views of the taxonomy, archived by the executable so that logs and recordings made
//! with this software version can be decoded later.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use log::{debug, info};
use serde::Serialize;
use wbi_consts::{
    BufferLayout, ControlMode, ControlParam, Described, EstimateType, EstimationParameter,
    SensorType, Taxonomy, TypeDescription, TAXONOMY_VERSION,
};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// One value of a bare (catalog-less) enumeration.
#[derive(Debug, Serialize, PartialEq)]
pub struct Entry {
    pub ordinal: usize,
    pub name: &'static str,
}

/// The complete taxonomy of this software version.
#[derive(Debug, Serialize)]
pub struct TaxonomyDump {
    pub version: u32,
    pub control_modes: Vec<Entry>,
    pub control_params: Vec<Entry>,
    pub sensor_types: Vec<&'static TypeDescription<SensorType>>,
    pub estimate_types: Vec<&'static TypeDescription<EstimateType>>,
    pub estimation_params: Vec<Entry>,
}

/// Buffer layouts for the robot's configured composite readings.
#[derive(Debug, Serialize)]
pub struct ReadingLayouts {
    pub sensors: BufferLayout<SensorType>,
    pub estimates: BufferLayout<EstimateType>,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl TaxonomyDump {
    pub fn new() -> Self {
        Self {
            version: TAXONOMY_VERSION,
            control_modes: entries::<ControlMode>(),
            control_params: entries::<ControlParam>(),
            sensor_types: SensorType::catalog().all().collect(),
            estimate_types: EstimateType::catalog().all().collect(),
            estimation_params: entries::<EstimationParameter>(),
        }
    }
}

impl ReadingLayouts {
    pub fn new(sensors: &[SensorType], estimates: &[EstimateType]) -> Self {
        Self {
            sensors: SensorType::catalog().layout(sensors),
            estimates: EstimateType::catalog().layout(estimates),
        }
    }
}

// ------------------------------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// One line summary of the taxonomy, logged once the consistency check has passed.
pub fn consistency_summary() -> String {
    format!(
        "Taxonomy v{} consistent: {} control modes, {} control params, {} sensor types, \
         {} estimate types, {} estimation params",
        TAXONOMY_VERSION,
        ControlMode::SIZE,
        ControlParam::SIZE,
        SensorType::SIZE,
        EstimateType::SIZE,
        EstimationParameter::SIZE
    )
}

/// Log every descriptor of a catalog.
pub fn log_catalog<T: Described>() {
    let catalog = T::catalog();

    info!(
        "{}: {} types, {} joint, {} Cartesian, {} values in total",
        T::NAME,
        catalog.len(),
        catalog.joint().count(),
        catalog.cartesian().count(),
        catalog.total_data_size()
    );

    for desc in catalog.all() {
        debug!(
            "    {:>2} {:<32} {:>2} {} {}",
            desc.id.ordinal(),
            desc.id,
            desc.data_size,
            if desc.is_joint { "joint" } else { "cart " },
            desc.name
        );
    }
}

/// Log a buffer layout.
pub fn log_layout<T: Taxonomy>(label: &str, layout: &BufferLayout<T>) {
    info!(
        "{} buffer: {} readings, {} values",
        label,
        layout.slots().len(),
        layout.len()
    );

    for slot in layout.slots() {
        debug!("    {:?} {}", slot.range(), slot.id);
    }
}

// ------------------------------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ------------------------------------------------------------------------------------------------

fn entries<T: Taxonomy>() -> Vec<Entry> {
    T::all()
        .iter()
        .map(|v| Entry {
            ordinal: v.ordinal(),
            name: v.name(),
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_dump() {
        let dump = TaxonomyDump::new();

        assert_eq!(dump.version, TAXONOMY_VERSION);
        assert_eq!(dump.control_modes.len(), wbi_consts::CTRL_MODE_SIZE);
        assert_eq!(dump.control_params.len(), wbi_consts::CTRL_PARAM_SIZE);
        assert_eq!(dump.sensor_types.len(), wbi_consts::SENSOR_TYPE_SIZE);
        assert_eq!(dump.estimate_types.len(), wbi_consts::ESTIMATE_TYPE_SIZE);
        assert_eq!(dump.estimation_params.len(), wbi_consts::ESTIMATION_PARAM_SIZE);
        assert_eq!(
            dump.control_modes[5],
            Entry {
                ordinal: 5,
                name: "CTRL_MODE_TORQUE"
            }
        );

        let json = serde_json::to_value(&dump).unwrap();
        assert_eq!(json["sensor_types"][6]["name"], "IMU");
        assert_eq!(json["sensor_types"][6]["data_size"], 13);
        assert_eq!(json["estimate_types"][20]["id"], 20);
    }

    #[test]
    fn test_consistency_summary() {
        assert_eq!(
            consistency_summary(),
            format!(
                "Taxonomy v{} consistent: 6 control modes, 8 control params, 10 sensor types, \
                 21 estimate types, 5 estimation params",
                TAXONOMY_VERSION
            )
        );
    }

    #[test]
    fn test_layouts() {
        let layouts = ReadingLayouts::new(
            &[SensorType::EncoderPos, SensorType::Imu],
            &[EstimateType::BasePos, EstimateType::BaseVel],
        );

        assert_eq!(layouts.sensors.len(), 14);
        assert_eq!(layouts.estimates.len(), 18);
        assert_eq!(
            layouts.estimates.slot(EstimateType::BaseVel).map(|s| s.range()),
            Some(12..18)
        );
    }
}
