use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thrust_estimator::{
    compute_delta_v, compute_thrust, errors::EstimatorError, generate_delta_v_sweep,
    parse_positive, parse_sweep, BurnScenario, PhysicsConfig, ScenarioInput, SweepPoint,
    SweepReport, GRAVITY,
};

// Helper to build raw input the way a form would hand it over
fn raw_input(isp: &str, fuel: &str, dry: &str, flow: &str) -> ScenarioInput {
    ScenarioInput {
        specific_impulse: isp.to_string(),
        fuel_mass: fuel.to_string(),
        dry_mass: dry.to_string(),
        mass_flow_rate: flow.to_string(),
    }
}

#[test]
fn test_calculate_from_raw_text() {
    let scenario = BurnScenario::parse(&raw_input("300", "5000", "1000", "20"))
        .expect("Default inputs should validate");
    let result = scenario
        .evaluate(&PhysicsConfig::default())
        .expect("Positive fuel mass should evaluate");

    assert_relative_eq!(result.delta_v, 300.0 * GRAVITY * 6.0_f64.ln());
    assert_relative_eq!(result.thrust, 58860.0);
    assert_eq!(result.to_string(), "Δv: 5273.15 m/s\nThrust: 58860.00 N");
}

#[test]
fn test_invalid_inputs_are_rejected_with_field() {
    for bad in ["0", "-5", "abc"] {
        match parse_positive(bad, "X") {
            Err(EstimatorError::InvalidInput { field, .. }) => assert_eq!(field, "X"),
            other => panic!("'{}' should be rejected, got {:?}", bad, other),
        }
    }
    assert_eq!(parse_positive("300", "X"), Ok(300.0));

    let err = BurnScenario::parse(&raw_input("300", "5000", "1000", "fast")).unwrap_err();
    assert_eq!(err.field(), Some("Mass Flow Rate"));
}

#[test]
fn test_engine_guards_mass_invariant() {
    assert!(matches!(
        compute_delta_v(300.0, 0.0, 1000.0),
        Err(EstimatorError::InvalidScenario(_))
    ));
    assert!(matches!(
        compute_delta_v(300.0, -250.0, 1000.0),
        Err(EstimatorError::InvalidScenario(_))
    ));
}

#[test]
fn test_sweep_matches_point_calculations() {
    let points: Vec<SweepPoint> = generate_delta_v_sweep(300.0, 1000.0, 7500.0).collect();
    let expected_fuel: Vec<f64> = (1..=74).map(|i| i as f64 * 100.0).collect();
    let actual_fuel: Vec<f64> = points.iter().map(|p| p.fuel_mass).collect();
    assert_eq!(actual_fuel, expected_fuel);

    for point in &points {
        assert_eq!(
            point.delta_v,
            compute_delta_v(300.0, point.fuel_mass, 1000.0).unwrap()
        );
    }
}

#[test]
fn test_sweep_from_raw_input_feeds_report() {
    let sweep = parse_sweep(&ScenarioInput::default(), &PhysicsConfig::default())
        .expect("Default inputs should produce a sweep");
    let report = SweepReport::new(sweep.clone());

    assert_eq!(report.len(), 74);
    assert_eq!(report.points, sweep.collect::<Vec<_>>());
    assert!(report.render().starts_with("--- Delta-V vs Fuel Mass ---"));
}

#[test]
fn test_custom_sweep_step() {
    let config = PhysicsConfig::new(GRAVITY, 250.0, 250.0).unwrap();
    let fuel: Vec<f64> = config
        .delta_v_sweep(300.0, 1000.0, 1000.0)
        .map(|p| p.fuel_mass)
        .collect();
    assert_eq!(fuel, vec![250.0, 500.0, 750.0]);
}

#[test]
fn test_delta_v_positive_and_monotonic_in_fuel() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..500 {
        let isp = rng.gen_range(50.0..500.0);
        let dry = rng.gen_range(1.0..50_000.0);
        let fuel = rng.gen_range(0.001..100_000.0);
        let extra = rng.gen_range(0.5..10_000.0);

        let lower = compute_delta_v(isp, fuel, dry).unwrap();
        let higher = compute_delta_v(isp, fuel + extra, dry).unwrap();
        assert!(lower > 0.0, "Δv should be positive for isp={isp}, fuel={fuel}, dry={dry}");
        assert!(higher > lower, "Δv should grow with fuel mass");
    }
}

#[test]
fn test_repeated_calls_are_bit_identical() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..100 {
        let isp = rng.gen_range(100.0..450.0);
        let fuel = rng.gen_range(1.0..20_000.0);
        let dry = rng.gen_range(1.0..5_000.0);
        let flow = rng.gen_range(0.1..500.0);

        let first = compute_delta_v(isp, fuel, dry).unwrap();
        let second = compute_delta_v(isp, fuel, dry).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
        assert_eq!(
            compute_thrust(isp, flow).to_bits(),
            compute_thrust(isp, flow).to_bits()
        );
        assert_eq!(compute_thrust(isp, flow), flow * GRAVITY * isp);
    }

    let a: Vec<SweepPoint> = generate_delta_v_sweep(310.0, 750.0, 4000.0).collect();
    let b: Vec<SweepPoint> = generate_delta_v_sweep(310.0, 750.0, 4000.0).collect();
    assert_eq!(a, b);
}
