use super::*;
use crate::core::phasor::phasor_sum;
use approx::{assert_abs_diff_eq, assert_relative_eq};
use std::f64::consts::TAU;

const STEP: f64 = 0.001;

/// Geschlossenes Quadrat (Ecken bei ±100), Handles liegen auf den Ankern.
fn closed_square() -> BezierCurve {
    let c = [[100.0, 100.0], [-100.0, 100.0], [-100.0, -100.0], [100.0, -100.0]];
    let coords = vec![
        c[0], c[0], // A0, Cout0
        c[1], c[1], c[1], // A1, Cin1, Cout1
        c[2], c[2], c[2], // A2, Cin2, Cout2
        c[3], c[3], c[3], // A3, Cin3, Cout3
        c[0], c[0], // A4 (= A0), Cin4
    ];
    BezierCurve::from_flat(&coords)
}

/// Kreis mit Radius `r`, letzte Stützstelle identisch zur ersten.
fn circle_function(r: f64, n: usize) -> ComplexFunction {
    let mut polyline: Vec<Vector2> = (0..n - 1)
        .map(|i| Vector2::from_angle(TAU * i as f64 / (n - 1) as f64, r))
        .collect();
    polyline.push(polyline[0]);
    ComplexFunction::from_polyline(&polyline)
}

#[test]
fn test_leere_funktion_schlaegt_fehl() {
    let mut f = ComplexFunction::new();
    assert_eq!(f.value_at(0.5), Err(CoreError::EmptyFunction));
    assert_eq!(
        f.compute_phasors(FrequencyRange::new(-1, 1), STEP),
        Err(CoreError::EmptyFunction)
    );
    assert!(f.outline(0.1).is_err());
}

#[test]
fn test_add_mapping_verlangt_monotonie() {
    let mut f = ComplexFunction::new();
    f.add_mapping(0.0, Complex::new(1.0, 0.0)).unwrap();
    f.add_mapping(0.5, Complex::new(2.0, 0.0)).unwrap();
    f.add_mapping(0.5, Complex::new(3.0, 0.0)).unwrap();
    assert_eq!(
        f.add_mapping(0.25, Complex::new(4.0, 0.0)),
        Err(CoreError::NonMonotonicDomain {
            previous: 0.5,
            input: 0.25
        })
    );
    assert_eq!(f.len(), 3);
}

#[test]
fn test_value_at_raender_und_stufen() {
    let mut f = ComplexFunction::new();
    for i in 0..5 {
        f.add_mapping(i as f64 / 4.0, Complex::new(i as f64, 0.0))
            .unwrap();
    }
    assert_eq!(f.value_at(-1.0).unwrap().amplitude, 0.0);
    assert_eq!(f.value_at(0.0).unwrap().amplitude, 0.0);
    assert_eq!(f.value_at(1.0).unwrap().amplitude, 4.0);
    assert_eq!(f.value_at(7.0).unwrap().amplitude, 4.0);
    // Erste Stützstelle ≥ t, keine Interpolation
    assert_eq!(f.value_at(0.25).unwrap().amplitude, 1.0);
    assert_eq!(f.value_at(0.3).unwrap().amplitude, 2.0);
}

#[test]
fn test_value_at_monoton_im_index() {
    let polyline: Vec<Vector2> = (0..200).map(|i| Vector2::new(i as f64, 0.0)).collect();
    let f = ComplexFunction::from_polyline(&polyline);
    let mut previous = -1.0;
    for i in 0..=1000 {
        let x = f.value_at(i as f64 / 1000.0).unwrap().re();
        assert!(x >= previous);
        previous = x;
    }
    assert_eq!(f.value_at(0.0).unwrap(), f.samples()[0]);
    assert_eq!(f.value_at(1.0).unwrap(), *f.samples().last().unwrap());
}

#[test]
fn test_reparametrisierung_gleichmaessig() {
    let curve = closed_square();
    let f = ComplexFunction::from_curve(&curve, 0.01);
    // 4 Segmente à 101 Abtastwerte
    assert_eq!(f.len(), 404);
    assert_eq!(f.domain()[0], 0.0);
    assert_eq!(*f.domain().last().unwrap(), 1.0);
    assert_relative_eq!(f.domain()[1], 1.0 / 403.0);
    assert!(f.is_closed());
}

#[test]
fn test_konstante_funktion_nur_gleichanteil() {
    let p = [50.0, 0.0];
    let curve = BezierCurve::from_flat(&[p, p, p, p]);
    let mut f = ComplexFunction::from_curve(&curve, STEP);
    assert!(f.is_closed());

    let warning = f
        .compute_phasors(FrequencyRange::new(-1, 1), 0.0005)
        .unwrap();
    assert_eq!(warning, None);

    let phasors = f.phasors();
    assert_eq!(phasors.len(), 3);
    assert_eq!(
        phasors.iter().map(|p| p.frequency).collect::<Vec<_>>(),
        vec![-1, 0, 1]
    );
    assert_relative_eq!(phasors[1].amplitude, 50.0, max_relative = 1e-9);
    assert!(phasors[0].amplitude < 1e-6);
    assert!(phasors[2].amplitude < 1e-6);
}

#[test]
fn test_kreis_ergibt_einen_zeiger() {
    let mut f = circle_function(80.0, 2001);
    f.compute_phasors(FrequencyRange::new(-3, 3), 0.0005).unwrap();
    for p in f.phasors() {
        if p.frequency == 1 {
            assert_relative_eq!(p.amplitude, 80.0, max_relative = 1e-6);
            assert_abs_diff_eq!(p.initial_phase, 0.0, epsilon = 1e-6);
        } else {
            assert!(p.amplitude < 1e-6, "k={} amp={}", p.frequency, p.amplitude);
        }
    }
}

#[test]
fn test_offene_kurve_liefert_warnung() {
    let curve = BezierCurve::from_flat(&[[0.0, 0.0], [0.0, -60.0], [100.0, 0.0], [100.0, 60.0]]);
    let mut f = ComplexFunction::from_curve(&curve, STEP);
    assert!(!f.is_closed());
    let warning = f.compute_phasors(FrequencyRange::new(-2, 2), STEP).unwrap();
    assert_eq!(warning, Some(ExtractionWarning::NonClosedCurve));
    assert_eq!(f.phasors().len(), 5);
}

#[test]
fn test_leerer_frequenzbereich() {
    let mut f = circle_function(1.0, 101);
    f.compute_phasors(FrequencyRange::new(2, 1), STEP).unwrap();
    assert!(f.phasors().is_empty());
}

#[test]
fn test_rekonstruktion_konvergiert_bei_geschlossener_kurve() {
    let f = ComplexFunction::from_curve(&closed_square(), STEP);
    let start = f.value_at(0.0).unwrap().to_vector();

    let (narrow, _) = f.with_phasors(FrequencyRange::new(-1, 1), STEP).unwrap();
    let (wide, warning) = f.with_phasors(FrequencyRange::new(-50, 50), STEP).unwrap();
    assert_eq!(warning, None);
    // Original bleibt unverändert
    assert!(f.phasors().is_empty());

    let narrow_error = phasor_sum(narrow.phasors(), 0.0).distance(start);
    let wide_error = phasor_sum(wide.phasors(), 0.0).distance(start);
    assert!(wide_error < narrow_error);
    assert!(wide_error < 2.0, "Abweichung {}", wide_error);

    let at_zero = phasor_sum(wide.phasors(), 0.0);
    let just_before_one = phasor_sum(wide.phasors(), 1.0 - 1e-4);
    assert!(at_zero.distance(just_before_one) < 1.0);
}

#[test]
fn test_integrate_with_phasor_entspricht_koeffizient() {
    let mut f = circle_function(10.0, 1001);
    let c = f
        .integrate_with_phasor(&Phasor::new(1.0, -1, 0.0), STEP)
        .unwrap();
    f.compute_phasors(FrequencyRange::new(1, 1), STEP).unwrap();
    assert_relative_eq!(c.amplitude, f.phasors()[0].amplitude);
}

#[test]
fn test_frequenzbereich_aus_zeigeranzahl() {
    assert_eq!(FrequencyRange::from_vector_count(100), FrequencyRange::new(-50, 50));
    assert_eq!(FrequencyRange::from_vector_count(5), FrequencyRange::new(-2, 3));
    assert_eq!(FrequencyRange::from_vector_count(0), FrequencyRange::new(0, 0));
    assert_eq!(FrequencyRange::new(-2, 3).len(), 6);
    assert!(FrequencyRange::new(3, -2).is_empty());
}

#[test]
fn test_outline() {
    let f = circle_function(5.0, 101);
    let outline = f.outline(0.01).unwrap();
    assert_eq!(outline.len(), 101);
    assert!(outline[0].approx_eq(Vector2::new(5.0, 0.0), 1e-9));
}
