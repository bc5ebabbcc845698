//! Pull charge and launch model
//!
//! Pure functions from stick deflection to charge and velocity. The player
//! update decides when each one applies.

use glam::Vec2;

use crate::tuning::Tuning;

/// A loaded pull: signed deflection plus its normalized strength
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pull {
    /// Signed stick deflection, magnitude clamped to `[pull_min, pull_max]`
    pub deflection: i8,
    /// Strength in `[0, 1]` over the pull band
    pub charge: f32,
}

/// Update the pull from this tick's stick reading.
///
/// A stick resting inside the deadzone keeps the previous pull, so letting
/// the stick spring back before releasing the button does not drop the charge.
pub fn charge_pull(stick_x: i8, previous: Pull, tuning: &Tuning) -> Pull {
    if stick_x.unsigned_abs() <= tuning.deadzone.unsigned_abs() {
        return previous;
    }
    let magnitude = f32::from(stick_x)
        .abs()
        .clamp(f32::from(tuning.pull_min), f32::from(tuning.pull_max));
    // A collapsed band saturates instead of dividing by zero
    let range = tuning.pull_range();
    let charge = if range > 0.0 {
        ((magnitude - f32::from(tuning.pull_min)) / range).clamp(0.0, 1.0)
    } else {
        1.0
    };
    Pull {
        deflection: (magnitude as i8) * stick_x.signum(),
        charge,
    }
}

/// True once the stick is deflected far enough to load a pull
#[inline]
pub fn reaches_pull(stick_x: i8, tuning: &Tuning) -> bool {
    stick_x.unsigned_abs() >= tuning.pull_min.unsigned_abs()
}

/// Velocity applied at the moment of release.
///
/// Slingshot: the launch goes opposite the pull, `stick_y` tilts it
/// vertically. Speed scales linearly over the charge.
pub fn launch_velocity(pull: Pull, stick_y: i8, tuning: &Tuning) -> Vec2 {
    let direction =
        -Vec2::new(f32::from(pull.deflection), f32::from(stick_y)).normalize_or_zero();
    let speed_span = tuning.launch_speed_max - tuning.launch_speed_min;
    let speed = tuning.launch_speed_min + pull.charge * speed_span;
    direction * speed
}

/// Direct horizontal velocity while moving. No deadzone: centered means stopped.
#[inline]
pub fn moving_velocity_x(stick_x: i8, tuning: &Tuning) -> f32 {
    f32::from(stick_x) * tuning.move_scale
}

/// True when an idle player should start moving
#[inline]
pub fn leaves_deadzone(stick_x: i8, tuning: &Tuning) -> bool {
    stick_x.unsigned_abs() > tuning.deadzone.unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_clamps_to_band() {
        let tuning = Tuning::default();
        let low = charge_pull(12, Pull::default(), &tuning);
        assert_eq!(low.deflection, 20);
        assert_eq!(low.charge, 0.0);

        let high = charge_pull(-100, Pull::default(), &tuning);
        assert_eq!(high.deflection, -60);
        assert_eq!(high.charge, 1.0);

        let mid = charge_pull(40, Pull::default(), &tuning);
        assert!((mid.charge - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_centered_stick_keeps_previous_pull() {
        let tuning = Tuning::default();
        let loaded = charge_pull(50, Pull::default(), &tuning);
        assert_eq!(charge_pull(3, loaded, &tuning), loaded);
    }

    #[test]
    fn test_launch_opposes_pull() {
        let tuning = Tuning::default();
        let pull = charge_pull(60, Pull::default(), &tuning);
        let vel = launch_velocity(pull, 0, &tuning);
        assert!((vel.x + tuning.launch_speed_max).abs() < 1e-5);
        assert_eq!(vel.y, 0.0);

        let weak = charge_pull(-20, Pull::default(), &tuning);
        let vel = launch_velocity(weak, 0, &tuning);
        assert!((vel.x - tuning.launch_speed_min).abs() < 1e-5);
    }

    #[test]
    fn test_collapsed_band_stays_finite() {
        let tuning = Tuning {
            pull_min: 40,
            pull_max: 40,
            ..Default::default()
        };
        let pull = charge_pull(55, Pull::default(), &tuning);
        assert_eq!(pull.deflection, 40);
        assert_eq!(pull.charge, 1.0);
        assert!(launch_velocity(pull, 0, &tuning).is_finite());
    }

    #[test]
    fn test_empty_pull_launches_nowhere() {
        let tuning = Tuning::default();
        assert_eq!(launch_velocity(Pull::default(), 0, &tuning), Vec2::ZERO);
    }

    #[test]
    fn test_moving_velocity_is_linear() {
        let tuning = Tuning::default();
        assert!((moving_velocity_x(40, &tuning) - 2.0).abs() < 1e-6);
        assert_eq!(moving_velocity_x(0, &tuning), 0.0);
        assert!(leaves_deadzone(6, &tuning));
        assert!(!leaves_deadzone(-5, &tuning));
    }
}
