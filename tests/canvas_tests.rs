//! Integration tests for Canvas, PixelArray and segments

mod common;
use common::*;

use proximity_glow::{Canvas, Color, ConfigError, OFF, Pixel, RED, WHITE};

type TestCanvas = Canvas<MockStrip, 32, 4>;

#[test]
fn set_pixel_mirrors_to_strip() {
    let log = new_log();
    let mut canvas = TestCanvas::new(MockStrip::new(&log), 8).unwrap();

    canvas.set_pixel(3, RED, 1.0);

    assert_eq!(canvas.pixels().get(3), Some(&Pixel::new(RED, 1.0)));
    assert_eq!(events(&log), vec![Event::SetPixel(3, RED)]);
}

#[test]
fn set_pixel_applies_brightness_on_output() {
    let log = new_log();
    let mut canvas = TestCanvas::new(MockStrip::new(&log), 8).unwrap();

    canvas.set_pixel(0, Color::new(200, 100, 50), 0.5);

    // Model keeps the full color; the strip gets the scaled one
    assert_eq!(canvas.pixels().get(0).unwrap().color, Color::new(200, 100, 50));
    assert_eq!(events(&log), vec![Event::SetPixel(0, Color::new(100, 50, 25))]);
}

#[test]
fn out_of_range_set_pixel_is_noop() {
    let log = new_log();
    let mut canvas = TestCanvas::new(MockStrip::new(&log), 8).unwrap();
    let before = canvas.pixels().clone();

    canvas.set_pixel(8, RED, 1.0);
    canvas.set_pixel(usize::MAX, RED, 1.0);

    assert_eq!(canvas.pixels().as_slice(), before.as_slice());
    assert!(events(&log).is_empty());
}

#[test]
fn fill_sets_every_pixel_and_strip() {
    let log = new_log();
    let mut canvas = TestCanvas::new(MockStrip::new(&log), 4).unwrap();

    canvas.set_pixel(1, RED, 0.25);
    canvas.fill(OFF);

    assert!(
        canvas
            .pixels()
            .as_slice()
            .iter()
            .all(|p| *p == Pixel::new(OFF, 1.0))
    );
    assert_eq!(events(&log).last(), Some(&Event::Fill(OFF)));
}

#[test]
fn nothing_is_flushed_until_show() {
    let log = new_log();
    let mut canvas = TestCanvas::new(MockStrip::new(&log), 4).unwrap();

    canvas.fill(WHITE);
    canvas.set_pixel(2, OFF, 1.0);
    assert!(!events(&log).contains(&Event::Show));

    canvas.show();
    assert_eq!(events(&log).last(), Some(&Event::Show));
}

#[test]
fn inverted_segment_is_rejected() {
    let log = new_log();
    let mut canvas = TestCanvas::new(MockStrip::new(&log), 8).unwrap();

    assert!(!canvas.define_segment("x", 5, 2));
    assert!(!canvas.segments().contains("x"));
}

#[test]
fn out_of_range_segment_is_rejected() {
    let log = new_log();
    let mut canvas = TestCanvas::new(MockStrip::new(&log), 8).unwrap();

    assert!(!canvas.define_segment("tail", 6, 8));
    assert!(canvas.segment("tail").is_none());
}

#[test]
fn set_segment_color_writes_range_and_flushes_once() {
    let log = new_log();
    let mut canvas = TestCanvas::new(MockStrip::new(&log), 8).unwrap();

    assert!(canvas.define_segment("middle", 2, 4));
    canvas.set_segment_color("middle", RED);

    assert_eq!(
        events(&log),
        vec![
            Event::SetPixel(2, RED),
            Event::SetPixel(3, RED),
            Event::SetPixel(4, RED),
            Event::Show,
        ]
    );
    assert_eq!(canvas.pixels().get(1).unwrap().color, WHITE);
    assert_eq!(canvas.pixels().get(5).unwrap().color, WHITE);
}

#[test]
fn set_segment_color_on_undefined_segment_is_noop() {
    let log = new_log();
    let mut canvas = TestCanvas::new(MockStrip::new(&log), 8).unwrap();

    canvas.set_segment_color("missing", RED);

    assert!(events(&log).is_empty());
    assert!(canvas.pixels().as_slice().iter().all(|p| p.color == WHITE));
}

#[test]
fn redefining_segment_overwrites_range() {
    let log = new_log();
    let mut canvas = TestCanvas::new(MockStrip::new(&log), 8).unwrap();

    canvas.define_segment("s", 0, 1);
    canvas.define_segment("s", 6, 7);
    canvas.set_segment_color("s", RED);

    assert_eq!(
        events(&log),
        vec![Event::SetPixel(6, RED), Event::SetPixel(7, RED), Event::Show]
    );
}

#[test]
fn pixel_count_is_validated() {
    let log = new_log();
    assert!(matches!(
        TestCanvas::new(MockStrip::new(&log), 0),
        Err(ConfigError::NoPixels)
    ));
    assert!(matches!(
        TestCanvas::new(MockStrip::new(&log), 33),
        Err(ConfigError::TooManyPixels { requested: 33, max: 32 })
    ));
}

#[test]
fn global_brightness_goes_to_strip() {
    let log = new_log();
    let mut canvas = TestCanvas::new(MockStrip::new(&log), 8).unwrap();

    canvas.set_global_brightness(10);
    assert_eq!(events(&log), vec![Event::Brightness(10)]);
}
