//! Unit tests for dts-core primitives.

#[cfg(test)]
mod ids {
    use crate::{CarId, EventSeq};

    #[test]
    fn first_car_is_one() {
        assert_eq!(CarId::FIRST, CarId(1));
        assert_eq!(CarId::FIRST.next(), CarId(2));
    }

    #[test]
    fn ordering() {
        assert!(CarId(1) < CarId(2));
        assert!(EventSeq(100) > EventSeq(99));
    }

    #[test]
    fn display() {
        assert_eq!(CarId(7).to_string(), "CarId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimTime};

    #[test]
    fn time_arithmetic() {
        let t = SimTime(10);
        assert_eq!(t + 5, SimTime(15));
        assert_eq!(t.offset(3), SimTime(13));
        assert_eq!(SimTime(15) - SimTime(10), 5u64);
        assert_eq!(SimTime(15).since(SimTime(10)), 5u64);
        assert_eq!(t.checked_offset(5), Some(SimTime(15)));
        assert_eq!(SimTime(u64::MAX).checked_offset(1), None);
    }

    #[test]
    fn hms_split() {
        assert_eq!(SimTime(3_725).hms(), (1, 2, 5));
        assert_eq!(SimTime::ZERO.hms(), (0, 0, 0));
    }

    #[test]
    fn clock_advances() {
        let mut clock = SimClock::new();
        assert_eq!(clock.now(), SimTime::ZERO);
        clock.advance_to(SimTime(60));
        clock.advance_to(SimTime(60));
        assert_eq!(clock.now(), SimTime(60));
        assert_eq!(clock.to_string(), "60s (00:01:00)");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "clock moved backwards")]
    fn clock_rejects_going_back() {
        let mut clock = SimClock::new();
        clock.advance_to(SimTime(10));
        clock.advance_to(SimTime(9));
    }
}

#[cfg(test)]
mod rng {
    use crate::{SimRng, UniformRange};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.uniform_int(30, 120), r2.uniform_int(30, 120));
        }
    }

    #[test]
    fn uniform_int_is_inclusive_and_in_bounds() {
        let mut rng = SimRng::new(7);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..2_000 {
            let v = rng.uniform_int(1, 5);
            assert!((1..=5).contains(&v));
            seen_min |= v == 1;
            seen_max |= v == 5;
        }
        assert!(seen_min && seen_max, "both endpoints should be reachable");
    }

    #[test]
    fn fixed_range_always_yields_value() {
        let mut rng = SimRng::new(0);
        let range = UniformRange::fixed(90u64);
        for _ in 0..50 {
            assert_eq!(rng.sample(&range), 90);
        }
    }

    #[test]
    fn uniform_float_bounds() {
        let mut rng = SimRng::new(3);
        for _ in 0..1_000 {
            let v = rng.uniform_float(0.5, 1.5);
            assert!((0.5..1.5).contains(&v));
        }
        assert_eq!(rng.uniform_float(2.0, 2.0), 2.0);
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, StationConfig, UniformRange};

    #[test]
    fn defaults_match_station_parameters() {
        let cfg = StationConfig::default();
        assert_eq!(cfg.simulation_duration_secs, 7_200);
        assert_eq!(cfg.arrival_interval_secs, UniformRange::new(30, 120));
        assert_eq!(cfg.check_duration_secs, UniformRange::new(60, 120));
        assert_eq!(cfg.test_duration_per_person_secs, 240);
        assert_eq!(cfg.max_queue_size, 10);
        assert_eq!(cfg.people_per_car, UniformRange::new(1, 5));
        assert!(!cfg.log_to_console);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn inverted_people_range_rejected() {
        let cfg = StationConfig {
            people_per_car: UniformRange::new(5, 1),
            ..StationConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn zero_arrival_gap_rejected() {
        let cfg = StationConfig {
            arrival_interval_secs: UniformRange::new(0, 10),
            ..StationConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_queue_and_empty_cars_rejected() {
        let no_queue = StationConfig::default().with_queue_size(0);
        assert!(no_queue.validate().is_err());

        let empty_cars = StationConfig {
            people_per_car: UniformRange::new(0, 3),
            ..StationConfig::default()
        };
        assert!(empty_cars.validate().is_err());
    }

    #[test]
    fn zero_check_delay_allowed() {
        let cfg = StationConfig {
            check_duration_secs: UniformRange::fixed(0),
            ..StationConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_duration_scales_with_people() {
        let cfg = StationConfig::default();
        assert_eq!(cfg.test_duration_secs(3), 720);
        assert_eq!(cfg.visit_secs(3), Some(840));
    }

    #[test]
    fn overflowing_durations_rejected() {
        let huge_test = StationConfig {
            test_duration_per_person_secs: u64::MAX / 2 + 1,
            check_duration_secs: UniformRange::fixed(0),
            ..StationConfig::default()
        };
        assert!(huge_test.validate().is_err());
        assert_eq!(huge_test.test_duration_secs(2), u64::MAX);
        assert_eq!(huge_test.visit_secs(2), None);

        let huge_horizon = StationConfig {
            simulation_duration_secs: u64::MAX - 100,
            ..StationConfig::default()
        };
        assert!(huge_horizon.validate().is_err());

        let huge_check = StationConfig {
            check_duration_secs: UniformRange::new(60, u64::MAX),
            ..StationConfig::default()
        };
        assert!(huge_check.validate().is_err());
    }

    #[test]
    fn explicit_seed_is_kept() {
        let cfg = StationConfig { seed: Some(99), ..StationConfig::default() };
        assert_eq!(cfg.resolve_seed(), 99);
    }
}
