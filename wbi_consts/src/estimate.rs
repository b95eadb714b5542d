//! # Estimates and estimation parameters
//!
//! Estimates are quantities derived from one or more sensors (filtered, differentiated or fused).
//! Like sensor types they are catalog-backed, so buffers for them can be sized up front.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use crate::catalog::{Catalog, Described, TypeDescription};

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Number of elements in the [`EstimateType`] enum.
pub const ESTIMATE_TYPE_SIZE: usize = 21;

/// Number of elements in the [`EstimationParameter`] enum.
pub const ESTIMATION_PARAM_SIZE: usize = 5;

/// Descriptions of the available estimate types, indexed by ordinal.
pub static ESTIMATE_TYPE_DESCRIPTIONS: [EstimateTypeDescription; ESTIMATE_TYPE_SIZE] =
    ESTIMATE_TYPE_TABLE;

const ESTIMATE_TYPE_TABLE: [EstimateTypeDescription; ESTIMATE_TYPE_SIZE] = [
    // ---- JOINT SPACE ----
    TypeDescription::new(EstimateType::JointPos, "Joint position", 1, true, ""),
    TypeDescription::new(EstimateType::JointVel, "Joint velocity", 1, true, ""),
    TypeDescription::new(EstimateType::JointAcc, "Joint acceleration", 1, true, ""),
    TypeDescription::new(EstimateType::JointTorque, "Joint torque", 1, true, ""),
    TypeDescription::new(
        EstimateType::JointTorqueDerivative,
        "Joint torque derivative",
        1,
        true,
        "",
    ),
    TypeDescription::new(
        EstimateType::JointForceTorque,
        "Joint force-torque",
        6,
        true,
        "6-axis force/torque transmitted through a joint",
    ),
    // ---- MOTOR SPACE ----
    TypeDescription::new(EstimateType::MotorPos, "Motor position", 1, true, ""),
    TypeDescription::new(EstimateType::MotorVel, "Motor velocity", 1, true, ""),
    TypeDescription::new(EstimateType::MotorAcc, "Motor acceleration", 1, true, ""),
    TypeDescription::new(EstimateType::MotorTorque, "Motor torque", 1, true, ""),
    TypeDescription::new(
        EstimateType::MotorTorqueDerivative,
        "Motor torque derivative",
        1,
        true,
        "",
    ),
    TypeDescription::new(
        EstimateType::MotorPwm,
        "Motor PWM",
        1,
        true,
        "Motor PWM (proportional to motor voltage)",
    ),
    TypeDescription::new(EstimateType::MotorCurrent, "Motor current", 1, true, ""),
    // ---- CARTESIAN SPACE ----
    TypeDescription::new(
        EstimateType::ForceTorqueSensor,
        "Force-torque sensor",
        6,
        false,
        "6-axis force/torque sensor",
    ),
    TypeDescription::new(
        EstimateType::Imu,
        "IMU",
        13,
        false,
        "Filtered inertial measurement unit, same layout as the IMU sensor",
    ),
    TypeDescription::new(
        EstimateType::Acceleration,
        "Acceleration",
        3,
        false,
        "3d linear acceleration",
    ),
    TypeDescription::new(
        EstimateType::AngVelocity,
        "Angular velocity",
        3,
        false,
        "3d angular velocity",
    ),
    TypeDescription::new(
        EstimateType::BasePos,
        "Base position",
        12,
        false,
        "Pose of the robot base: rotation matrix (9, row major) then position (3, m)",
    ),
    TypeDescription::new(
        EstimateType::BaseVel,
        "Base velocity",
        6,
        false,
        "Linear (3, m/s) then angular (3, rad/s) velocity of the robot base",
    ),
    TypeDescription::new(
        EstimateType::BaseAcc,
        "Base acceleration",
        6,
        false,
        "Linear (3, m/s^2) then angular (3, rad/s^2) acceleration of the robot base",
    ),
    TypeDescription::new(
        EstimateType::ExternalForceTorque,
        "External force-torque",
        6,
        false,
        "6-axis external force/torque acting on a link",
    ),
];

assert_catalog!(ESTIMATE_TYPE_TABLE);

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

taxonomy! {
    /// List of available estimates.
    pub enum EstimateType: ESTIMATE_TYPE_SIZE {
        // ---- JOINT SPACE ESTIMATES ----
        JointPos => "ESTIMATE_JOINT_POS",
        JointVel => "ESTIMATE_JOINT_VEL",
        JointAcc => "ESTIMATE_JOINT_ACC",
        JointTorque => "ESTIMATE_JOINT_TORQUE",
        JointTorqueDerivative => "ESTIMATE_JOINT_TORQUE_DERIVATIVE",
        JointForceTorque => "ESTIMATE_JOINT_FORCE_TORQUE",

        // ---- MOTOR SPACE ESTIMATES ----
        MotorPos => "ESTIMATE_MOTOR_POS",
        MotorVel => "ESTIMATE_MOTOR_VEL",
        MotorAcc => "ESTIMATE_MOTOR_ACC",
        MotorTorque => "ESTIMATE_MOTOR_TORQUE",
        MotorTorqueDerivative => "ESTIMATE_MOTOR_TORQUE_DERIVATIVE",
        /// Motor PWM (proportional to motor voltage)
        MotorPwm => "ESTIMATE_MOTOR_PWM",
        MotorCurrent => "ESTIMATE_MOTOR_CURRENT",

        // ---- CARTESIAN SPACE ESTIMATES ----
        /// 6-axis force/torque sensor
        ForceTorqueSensor => "ESTIMATE_FORCE_TORQUE_SENSOR",
        /// Same as the IMU sensor, but filtered
        Imu => "ESTIMATE_IMU",
        /// 3d linear acceleration
        Acceleration => "ESTIMATE_ACCELERATION",
        /// 3d angular velocity
        AngVelocity => "ESTIMATE_ANGVELOCITY",
        /// Position of the base of the robot
        BasePos => "ESTIMATE_BASE_POS",
        /// Velocity of the base of the robot
        BaseVel => "ESTIMATE_BASE_VEL",
        /// Acceleration of the base of the robot
        BaseAcc => "ESTIMATE_BASE_ACC",
        /// 6-axis external force/torque acting on a link
        ExternalForceTorque => "ESTIMATE_EXTERNAL_FORCE_TORQUE",
    }
}

taxonomy! {
    /// List of parameters of estimation algorithms.
    pub enum EstimationParameter: ESTIMATION_PARAM_SIZE {
        AdaptiveWindowMaxSize => "ESTIMATION_PARAM_ADAPTIVE_WINDOW_MAX_SIZE",
        AdaptiveWindowThreshold => "ESTIMATION_PARAM_ADAPTIVE_WINDOW_THRESHOLD",
        LowPassFilterCutFreq => "ESTIMATION_PARAM_LOW_PASS_FILTER_CUT_FREQ",
        EnableOmegaImuDomegaImu => "ESTIMATION_PARAM_ENABLE_OMEGA_IMU_DOMEGA_IMU",
        MinTaxel => "ESTIMATION_PARAM_MIN_TAXEL",
    }
}

// ------------------------------------------------------------------------------------------------
// TYPES
// ------------------------------------------------------------------------------------------------

/// Collection of data to describe an estimate type.
pub type EstimateTypeDescription = TypeDescription<EstimateType>;

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Described for EstimateType {
    fn catalog() -> Catalog<'static, Self> {
        Catalog::verified(&ESTIMATE_TYPE_DESCRIPTIONS)
    }
}
