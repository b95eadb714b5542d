//! # Control modes and control law parameters

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Number of elements in the [`ControlMode`] enum.
pub const CTRL_MODE_SIZE: usize = 6;

/// Number of elements in the [`ControlParam`] enum.
pub const CTRL_PARAM_SIZE: usize = 8;

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

taxonomy! {
    /// List of available joint control modes.
    pub enum ControlMode: CTRL_MODE_SIZE {
        Unknown => "CTRL_MODE_UNKNOWN",
        /// Motor PWM
        MotorPwm => "CTRL_MODE_MOTOR_PWM",
        /// Joint position
        Pos => "CTRL_MODE_POS",
        /// Joint direct position (without trajectory generator)
        DirectPosition => "CTRL_MODE_DIRECT_POSITION",
        /// Joint velocity
        Vel => "CTRL_MODE_VEL",
        /// Joint torque
        Torque => "CTRL_MODE_TORQUE",
    }
}

taxonomy! {
    /// List of available parameters for the various control modes.
    pub enum ControlParam: CTRL_PARAM_SIZE {
        /// Proportional gain of PID
        Kp => "CTRL_PARAM_KP",
        /// Integral gain of PID
        Ki => "CTRL_PARAM_KI",
        /// Derivative gain of PID
        Kd => "CTRL_PARAM_KD",
        /// Offset for the control
        Offset => "CTRL_PARAM_OFFSET",
        /// Stiffness of impedance controller
        Stiffness => "CTRL_PARAM_STIFFNESS",
        /// Damping of impedance controller
        Damping => "CTRL_PARAM_DAMPING",
        /// Reference velocity for trajectory generator
        RefVel => "CTRL_PARAM_REF_VEL",
        /// Reference acceleration for trajectory generator
        RefAcc => "CTRL_PARAM_REF_ACC",
    }
}

impl Default for ControlMode {
    fn default() -> Self {
        ControlMode::Unknown
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::registry::{check_taxonomy, Taxonomy};

    #[test]
    fn test_control_mode() {
        assert_eq!(ControlMode::all().len(), CTRL_MODE_SIZE);
        assert_eq!(ControlMode::default(), ControlMode::Unknown);
        assert_eq!(ControlMode::Unknown.ordinal(), 0);
        assert_eq!(ControlMode::Torque.ordinal(), 5);
        assert_eq!(ControlMode::DirectPosition.to_string(), "CTRL_MODE_DIRECT_POSITION");
        assert_eq!(check_taxonomy::<ControlMode>(), Ok(()));
    }

    #[test]
    fn test_control_param() {
        assert_eq!(ControlParam::all().len(), CTRL_PARAM_SIZE);
        assert_eq!(ControlParam::from_ordinal(7), Ok(ControlParam::RefAcc));
        assert!(ControlParam::from_ordinal(CTRL_PARAM_SIZE).is_err());
        assert_eq!("CTRL_PARAM_KD".parse::<ControlParam>(), Ok(ControlParam::Kd));
        assert!("CTRL_PARAM_KX".parse::<ControlParam>().is_err());
        assert_eq!(check_taxonomy::<ControlParam>(), Ok(()));
    }

    #[test]
    fn test_ordering_follows_declaration() {
        assert!(ControlParam::Kp < ControlParam::Ki);
        assert!(ControlMode::Pos < ControlMode::Vel);
    }
}
