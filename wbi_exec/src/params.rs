//! # Taxonomy Executable Parameters

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::Deserialize;
use wbi_consts::{EstimateType, SensorType, UnknownNameError};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default)]
pub struct WbiExecParams {
    /// Sensors making up one composite reading of the robot, in buffer order.
    ///
    /// Given as tags, for example `"SENSOR_IMU"`. Deprecated tags are accepted.
    pub sensors: Vec<String>,

    /// Estimates making up one composite estimate of the robot, in buffer order.
    pub estimates: Vec<String>,

    /// If true the full taxonomy is archived into the session directory.
    #[serde(default)]
    pub archive_taxonomy: bool,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl WbiExecParams {
    /// Resolve the configured sensor tags.
    pub fn sensor_types(&self) -> Result<Vec<SensorType>, UnknownNameError> {
        self.sensors.iter().map(|s| s.parse()).collect()
    }

    /// Resolve the configured estimate tags.
    pub fn estimate_types(&self) -> Result<Vec<EstimateType>, UnknownNameError> {
        self.estimates.iter().map(|s| s.parse()).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_resolve() {
        let params = WbiExecParams {
            sensors: vec![String::from("SENSOR_ENCODER"), String::from("SENSOR_IMU")],
            estimates: vec![String::from("ESTIMATE_BASE_VEL")],
            archive_taxonomy: false,
        };

        assert_eq!(
            params.sensor_types().unwrap(),
            vec![SensorType::EncoderPos, SensorType::Imu]
        );
        assert_eq!(params.estimate_types().unwrap(), vec![EstimateType::BaseVel]);
    }

    #[test]
    fn test_unknown_tag() {
        let params = WbiExecParams {
            sensors: vec![String::from("SENSOR_LIDAR")],
            ..Default::default()
        };

        let err = params.sensor_types().unwrap_err();
        assert_eq!(err.name, "SENSOR_LIDAR");
        assert_eq!(err.taxonomy, "SensorType");
    }
}
