//! Integration tests for colors module

use proximity_glow::colors::{self, Color};
use proximity_glow::{BLUE, GREEN, OFF, RED, WHITE};

fn channels_close(a: Color, b: Color) -> bool {
    a.red.abs_diff(b.red) <= 1 && a.green.abs_diff(b.green) <= 1 && a.blue.abs_diff(b.blue) <= 1
}

#[test]
fn hsv_creates_primary_colors() {
    assert!(channels_close(colors::hsv(0.0, 1.0, 1.0), RED));
    assert!(channels_close(colors::hsv(120.0, 1.0, 1.0), GREEN));
    assert!(channels_close(colors::hsv(240.0, 1.0, 1.0), BLUE));
}

#[test]
fn hsv_zero_value_is_off() {
    assert_eq!(colors::hsv(0.0, 1.0, 0.0), OFF);
}

#[test]
fn hsv_zero_saturation_is_gray() {
    let gray = colors::hsv(0.0, 0.0, 0.5);
    assert_eq!(gray.red, gray.green);
    assert_eq!(gray.green, gray.blue);
    assert!(gray.red >= 127 && gray.red <= 128);
}

#[test]
fn scale_truncates_each_channel() {
    assert_eq!(colors::scale(Color::new(10, 11, 255), 0.5), Color::new(5, 5, 127));
}

#[test]
fn scale_is_clamped() {
    assert_eq!(colors::scale(WHITE, 2.0), WHITE);
    assert_eq!(colors::scale(WHITE, -1.0), OFF);
}

#[test]
fn scale_fraction_is_exact() {
    assert_eq!(colors::scale_fraction(Color::new(108, 95, 255), 7, 12), Color::new(63, 55, 148));
    assert_eq!(colors::scale_fraction(Color::new(95, 0, 0), 3, 19), Color::new(15, 0, 0));
}

#[test]
fn scale_fraction_caps_and_handles_zero_denominator() {
    assert_eq!(colors::scale_fraction(WHITE, 5, 4), WHITE);
    assert_eq!(colors::scale_fraction(WHITE, 1, 0), OFF);
}
