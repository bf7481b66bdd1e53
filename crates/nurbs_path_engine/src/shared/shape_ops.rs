//! Vektor-Hilfsfunktionen für Querschnitte und Skript-Plugins (3D, `f64`).

use glam::{DQuat, DVec3};

/// Verschiebt einen Punkt um `offset`.
pub fn translate(p: DVec3, offset: DVec3) -> DVec3 {
    p + offset
}

/// Skaliert komponentenweise.
pub fn scale(p: DVec3, factors: DVec3) -> DVec3 {
    p * factors
}

/// Dreht `p` um `degrees` Grad um `axis`.
///
/// Die Achse wird als Rotationsvektor interpretiert: Ihre Länge skaliert
/// den Winkel. Für einen reinen Winkel muss sie normiert sein.
pub fn rotate(p: DVec3, degrees: f64, axis: DVec3) -> DVec3 {
    DQuat::from_scaled_axis(axis * degrees.to_radians()) * p
}

pub fn translate_all(points: &[DVec3], offset: DVec3) -> Vec<DVec3> {
    points.iter().map(|&p| translate(p, offset)).collect()
}

pub fn scale_all(points: &[DVec3], factors: DVec3) -> Vec<DVec3> {
    points.iter().map(|&p| scale(p, factors)).collect()
}

pub fn rotate_all(points: &[DVec3], degrees: f64, axis: DVec3) -> Vec<DVec3> {
    points.iter().map(|&p| rotate(p, degrees, axis)).collect()
}

/// Einheitsvektor; Null-Vektor bleibt Null.
pub fn unit_vector(v: DVec3) -> DVec3 {
    v.normalize_or_zero()
}

/// Winkel zwischen zwei Vektoren in Grad, robust gegen Rundung (`acos` geklemmt).
pub fn angle_between(a: DVec3, b: DVec3) -> f64 {
    unit_vector(a)
        .dot(unit_vector(b))
        .clamp(-1.0, 1.0)
        .acos()
        .to_degrees()
}

/// Winkel zwischen zwei Vektoren in Grad ohne Klemmung.
///
/// Liefert NaN bei Null-Vektoren oder wenn Rundung den Kosinus über 1 treibt.
pub fn angle(a: DVec3, b: DVec3) -> f64 {
    (a.dot(b) / (a.length() * b.length())).acos().to_degrees()
}

/// Punkt auf einer Ellipse mit Halbachsen `a`, `b` bei `t_degrees` (z = 0).
pub fn ellipse_point(t_degrees: f64, a: f64, b: f64) -> DVec3 {
    let t = t_degrees.to_radians();
    DVec3::new(a * t.cos(), b * t.sin(), 0.0)
}

/// Halbelliptischer Querschnitt in der YZ-Ebene.
///
/// 11 Punkte von 360° bis 180° in −18°-Schritten auf einer Ellipse mit
/// Halbachsen `radius * ratio` und `radius`, zentriert und um −90° um Y gedreht.
pub fn elliptic_shape(radius: f64, ratio: f64) -> Vec<DVec3> {
    let height = radius * 2.0;
    let width = height * ratio * 2.0;

    let shape: Vec<DVec3> = (0..=10)
        .map(|i| ellipse_point(360.0 - 18.0 * i as f64, radius * ratio, radius))
        .collect();

    let shape = translate_all(&shape, DVec3::new(width * 0.5, height, 0.0));
    let centered = translate_all(&shape, DVec3::new(-0.5 * width, -0.5 * height, 0.0));
    rotate_all(&centered, -90.0, DVec3::Y)
}
