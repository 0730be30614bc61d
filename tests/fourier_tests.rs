use approx::{assert_abs_diff_eq, assert_relative_eq};
use fourier_epicycles::storage::premade;
use fourier_epicycles::{
    phasor_sum, BezierCurve, Complex, ComplexFunction, FrequencyRange, Vector2,
};

#[test]
fn test_from_cartesian_drei_vier_fuenf() {
    let c = Complex::from_cartesian(3.0, 4.0);
    assert_relative_eq!(c.amplitude, 5.0);
    assert_relative_eq!(c.phase, 4.0_f64.atan2(3.0));
    let v = c.to_vector();
    assert_relative_eq!(v.x, 3.0, epsilon = 1e-12);
    assert_relative_eq!(v.y, 4.0, epsilon = 1e-12);
}

#[test]
fn test_kreis_zerlegung() {
    let center = Vector2::new(400.0, 300.0);
    let curve = premade::circle(center, 100.0);
    let function = ComplexFunction::from_curve(&curve, 0.001);
    assert!(function.is_closed());

    let (function, warning) = function
        .with_phasors(FrequencyRange::new(-10, 10), 0.001)
        .expect("Koeffizienten-Berechnung fehlgeschlagen");
    assert_eq!(warning, None);

    for p in function.phasors() {
        match p.frequency {
            0 => assert_relative_eq!(p.amplitude, center.length(), max_relative = 0.01),
            1 => assert_relative_eq!(p.amplitude, 100.0, max_relative = 0.02),
            _ => assert!(p.amplitude < 5.0, "k={} amp={}", p.frequency, p.amplitude),
        }
    }

    let start = phasor_sum(function.phasors(), 0.0);
    assert!(
        start.distance(Vector2::new(500.0, 300.0)) < 2.0,
        "Start {}",
        start
    );
}

#[test]
fn test_konstante_kurve_ergibt_gleichanteil() {
    let p = [30.0, 40.0];
    let curve = BezierCurve::from_flat(&[p, p, p, p]);
    let mut function = ComplexFunction::from_curve(&curve, 0.001);

    let warning = function
        .compute_phasors(FrequencyRange::new(-1, 1), 0.0005)
        .unwrap();

    assert_eq!(warning, None);
    assert_eq!(function.phasors().len(), 3);
    assert_relative_eq!(function.phasors()[1].amplitude, 50.0, max_relative = 1e-9);
    assert_abs_diff_eq!(function.phasors()[0].amplitude, 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(function.phasors()[2].amplitude, 0.0, epsilon = 1e-6);
}

#[test]
fn test_breiterer_bereich_naehert_besser_an() {
    let curve = BezierCurve::from_flat(&[
        [0.0, 0.0],
        [0.0, 0.0],
        [200.0, 0.0],
        [200.0, 0.0],
        [200.0, 0.0],
        [100.0, 150.0],
        [100.0, 150.0],
        [100.0, 150.0],
        [0.0, 0.0],
        [0.0, 0.0],
    ]);
    let function = ComplexFunction::from_curve(&curve, 0.001);
    assert!(function.is_closed());

    let target = function.value_at(0.3).unwrap().to_vector();
    let error_for = |count: u32| {
        let (f, _) = function
            .with_phasors(FrequencyRange::from_vector_count(count), 0.001)
            .unwrap();
        phasor_sum(f.phasors(), 0.3).distance(target)
    };

    let coarse = error_for(4);
    let fine = error_for(80);
    assert!(fine < coarse, "fein {} vs grob {}", fine, coarse);
    assert!(fine < 3.0, "Abweichung {}", fine);
}
