//! Unit tests for fleet-core primitives.

#[cfg(test)]
mod ids {
    use crate::EntityId;

    #[test]
    fn index_roundtrip() {
        let id = EntityId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(EntityId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(EntityId(0) < EntityId(1));
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(EntityId::INVALID.0, u32::MAX);
        assert_eq!(EntityId::default(), EntityId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(EntityId(7).to_string(), "EntityId(7)");
    }
}

#[cfg(test)]
mod vec3 {
    use crate::Vec3;

    #[test]
    fn distance_345() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 4.0, 0.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn zero_distance() {
        let p = Vec3::new(1.5, -2.0, 9.0);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn normalized_unit_length() {
        let v = Vec3::new(10.0, 0.0, -10.0).normalized();
        assert!((v.magnitude() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_vector_normalizes_to_itself() {
        assert_eq!(Vec3::ZERO.normalized(), Vec3::ZERO);
    }

    #[test]
    fn rotated_y_quarter_turn() {
        let v = Vec3::new(1.0, 0.0, 0.0).rotated_y(std::f64::consts::FRAC_PI_2);
        assert!(v.x.abs() < 1e-12);
        assert!((v.z - -1.0).abs() < 1e-12);
    }

    #[test]
    fn rotation_preserves_length() {
        let v = Vec3::new(3.0, 7.0, -2.0);
        let r = v.rotated_y(1.234);
        assert!((v.magnitude() - r.magnitude()).abs() < 1e-12);
    }

    #[test]
    fn operators() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(0.5, 0.5, 0.5);
        assert_eq!(a + b, Vec3::new(1.5, 2.5, 3.5));
        assert_eq!(a - b, Vec3::new(0.5, 1.5, 2.5));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
    }
}

#[cfg(test)]
mod color {
    use crate::Color;

    #[test]
    fn thresholds_while_delivering() {
        assert_eq!(Color::from_charge(100.0, true), Color::Green);
        assert_eq!(Color::from_charge(70.1, true), Color::Green);
        assert_eq!(Color::from_charge(70.0, true), Color::Yellow);
        assert_eq!(Color::from_charge(35.1, true), Color::Yellow);
        assert_eq!(Color::from_charge(35.0, true), Color::Red);
        assert_eq!(Color::from_charge(0.0, true), Color::Red);
    }

    #[test]
    fn never_red_while_idle() {
        assert_eq!(Color::from_charge(35.0, false), Color::Yellow);
        assert_eq!(Color::from_charge(1.0, false), Color::Yellow);
        assert_eq!(Color::from_charge(71.0, false), Color::Green);
    }

    #[test]
    fn display_lowercase() {
        assert_eq!(Color::Green.to_string(), "green");
        assert_eq!(Color::Yellow.to_string(), "yellow");
        assert_eq!(Color::Red.to_string(), "red");
    }
}
