//! # Sensor types
//!
//! Physical measurements a robot can produce, and the catalog describing the shape of each
//! reading.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use crate::catalog::{Catalog, Described, TypeDescription};

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Number of elements in the [`SensorType`] enum.
pub const SENSOR_TYPE_SIZE: usize = 10;

/// Legacy name of [`SensorType::EncoderPos`].
#[deprecated(since = "0.1.0", note = "Renamed to `SensorType::EncoderPos`")]
pub const SENSOR_ENCODER: SensorType = SensorType::EncoderPos;

/// Descriptions of the available sensor types, indexed by ordinal.
pub static SENSOR_TYPE_DESCRIPTIONS: [SensorTypeDescription; SENSOR_TYPE_SIZE] =
    SENSOR_TYPE_TABLE;

const SENSOR_TYPE_TABLE: [SensorTypeDescription; SENSOR_TYPE_SIZE] = [
    TypeDescription::new(
        SensorType::EncoderPos,
        "Encoder position",
        1,
        true,
        "Joint encoder position",
    ),
    TypeDescription::new(
        SensorType::EncoderSpeed,
        "Encoder speed",
        1,
        true,
        "Joint encoder speed",
    ),
    TypeDescription::new(
        SensorType::EncoderAcceleration,
        "Encoder acceleration",
        1,
        true,
        "Joint encoder acceleration",
    ),
    TypeDescription::new(
        SensorType::Pwm,
        "PWM",
        1,
        true,
        "Motor PWM (proportional to motor voltage)",
    ),
    TypeDescription::new(SensorType::Current, "Current", 1, true, "Motor current"),
    TypeDescription::new(SensorType::Torque, "Torque", 1, true, "Joint torque"),
    TypeDescription::new(
        SensorType::Imu,
        "IMU",
        13,
        false,
        "Inertial measurement unit: axis-angle orientation (4, rad), linear acceleration (3, \
         m/s^2), angular velocity (3, rad/s), magnetometer (3)",
    ),
    TypeDescription::new(
        SensorType::ForceTorque,
        "Force-torque",
        6,
        false,
        "6-axis force/torque",
    ),
    TypeDescription::new(
        SensorType::Accelerometer,
        "Accelerometer",
        3,
        false,
        "3d linear acceleration",
    ),
    TypeDescription::new(
        SensorType::Gyroscope,
        "Gyroscope",
        3,
        false,
        "3d angular velocity",
    ),
];

assert_catalog!(SENSOR_TYPE_TABLE);

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

taxonomy! {
    /// List of available sensor types.
    pub enum SensorType: SENSOR_TYPE_SIZE {
        // ---- JOINT SPACE SENSORS ----

        /// Joint encoder position
        EncoderPos => "SENSOR_ENCODER_POS",
        /// Joint encoder speed
        EncoderSpeed => "SENSOR_ENCODER_SPEED",
        /// Joint encoder acceleration
        EncoderAcceleration => "SENSOR_ENCODER_ACCELERATION",
        /// Motor PWM (proportional to motor voltage)
        Pwm => "SENSOR_PWM",
        /// Motor current
        Current => "SENSOR_CURRENT",
        /// Joint torque
        Torque => "SENSOR_TORQUE",

        // ---- CARTESIAN SPACE SENSORS ----

        /// 13d inertial measurement unit
        Imu => "SENSOR_IMU",
        /// 6-axis force/torque
        ForceTorque => "SENSOR_FORCE_TORQUE",
        /// 3d linear acceleration
        Accelerometer => "SENSOR_ACCELEROMETER",
        /// 3d angular velocity
        Gyroscope => "SENSOR_GYROSCOPE",
    }
    aliases {
        "SENSOR_ENCODER" => EncoderPos,
    }
}

// ------------------------------------------------------------------------------------------------
// TYPES
// ------------------------------------------------------------------------------------------------

/// Collection of data to describe a sensor type.
pub type SensorTypeDescription = TypeDescription<SensorType>;

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Described for SensorType {
    fn catalog() -> Catalog<'static, Self> {
        Catalog::verified(&SENSOR_TYPE_DESCRIPTIONS)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::registry::{OutOfRangeError, Taxonomy};
    use std::collections::HashSet;
    use std::convert::TryFrom;

    #[test]
    fn test_lookup_is_identity() {
        for &s in SensorType::all() {
            assert_eq!(SensorType::catalog().lookup(s).id, s);
            assert_eq!(s.descriptor().id, s);
        }
    }

    #[test]
    fn test_catalog_size() {
        let catalog = SensorType::catalog();

        assert_eq!(SENSOR_TYPE_SIZE, 10);
        assert_eq!(catalog.len(), SENSOR_TYPE_SIZE);
        assert_eq!(catalog.all().count(), SENSOR_TYPE_SIZE);
        assert_eq!(SensorType::Gyroscope.ordinal() + 1, SENSOR_TYPE_SIZE);
    }

    #[test]
    fn test_no_duplicate_ids() {
        let ids: HashSet<_> = SensorType::catalog().all().map(|d| d.id).collect();
        assert_eq!(ids.len(), SENSOR_TYPE_SIZE);

        for (i, d) in SENSOR_TYPE_DESCRIPTIONS.iter().enumerate() {
            assert_eq!(d.id.ordinal(), i);
        }
    }

    #[test]
    fn test_joint_classification() {
        assert!(SensorType::EncoderPos.is_joint());
        assert!(SensorType::Torque.is_joint());
        assert!(!SensorType::Imu.is_joint());
        assert!(!SensorType::Gyroscope.is_joint());

        let catalog = SensorType::catalog();
        assert_eq!(catalog.joint().count(), 6);
        assert_eq!(catalog.cartesian().count(), 4);
        assert!(catalog.cartesian().all(|d| d.id.ordinal() >= SensorType::Imu.ordinal()));
    }

    #[test]
    fn test_data_sizes() {
        assert_eq!(SensorType::Imu.data_size(), 13);
        assert_eq!(SensorType::ForceTorque.data_size(), 6);
        assert_eq!(SensorType::Accelerometer.data_size(), 3);
        assert_eq!(SensorType::catalog().data_size(SensorType::Current), 1);

        // 6 joint sensors of size 1, plus 13 + 6 + 3 + 3
        assert_eq!(SensorType::catalog().total_data_size(), 31);
    }

    #[test]
    #[allow(deprecated)]
    fn test_legacy_alias() {
        let catalog = SensorType::catalog();

        assert_eq!(SENSOR_ENCODER, SensorType::EncoderPos);
        assert_eq!(
            catalog.lookup(SENSOR_ENCODER),
            catalog.lookup(SensorType::EncoderPos)
        );
        assert_eq!(
            "SENSOR_ENCODER".parse::<SensorType>(),
            Ok(SensorType::EncoderPos)
        );

        // The alias never has a tag of its own
        assert_eq!(SENSOR_ENCODER.to_string(), "SENSOR_ENCODER_POS");
    }

    #[test]
    fn test_raw_value_out_of_range() {
        assert_eq!(SensorType::try_from(9u32), Ok(SensorType::Gyroscope));
        assert_eq!(
            SensorType::try_from(10u32),
            Err(OutOfRangeError {
                taxonomy: "SensorType",
                value: 10,
                size: 10,
            })
        );
        assert!(SensorType::catalog().lookup_ordinal(10).is_err());
    }

    #[test]
    fn test_all_is_restartable() {
        let catalog = SensorType::catalog();
        let first: Vec<_> = catalog.all().map(|d| (d.id, d.name, d.data_size)).collect();
        let second: Vec<_> = catalog.all().map(|d| (d.id, d.name, d.data_size)).collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), SENSOR_TYPE_SIZE);
    }

    #[test]
    fn test_find_by_name() {
        let catalog = SensorType::catalog();

        assert_eq!(
            catalog.find_by_name("Force-torque").map(|d| d.id),
            Some(SensorType::ForceTorque)
        );
        assert!(catalog.find_by_name("force-torque").is_none());
    }

    #[test]
    fn test_wire_encoding() {
        assert_eq!(serde_json::to_string(&SensorType::Imu).unwrap(), "6");
        assert_eq!(
            serde_json::from_str::<Vec<SensorType>>("[0, 9]").unwrap(),
            vec![SensorType::EncoderPos, SensorType::Gyroscope]
        );

        let err = serde_json::from_str::<SensorType>("10").unwrap_err();
        assert!(err.to_string().contains("not a valid SensorType"));
    }

    #[test]
    fn test_descriptor_serialisation() {
        let json = serde_json::to_value(SensorType::ForceTorque.descriptor()).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Force-torque");
        assert_eq!(json["data_size"], 6);
        assert_eq!(json["is_joint"], false);
    }
}
