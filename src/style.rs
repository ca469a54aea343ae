//! Fixed palette and text styles. The widget is compile-time configured;
//! none of these are runtime options.

use super::geom::{Color, Stroke, TextAlign, TextStyle};

pub const BACKGROUND: Color = Color::BLACK;
pub const CLEAR: Color = Color::TRANSPARENT;

pub const AXIS: Stroke = Stroke::new(2.0, Color::rgb(211, 211, 211));
pub const MAJOR_TICK: Stroke = Stroke::new(2.0, Color::rgb(255, 255, 255));
pub const MINOR_TICK: Stroke = Stroke::new(1.0, Color::rgb(80, 80, 80));

pub const TICK_LABEL: TextStyle =
    TextStyle::new(14.0, Color::rgb(211, 211, 211), TextAlign::Center);

pub const WAVEFORM: Stroke = Stroke::new(2.0, Color::rgb(0xff, 0xff, 0x00));

pub const FPS_TEXT: TextStyle =
    TextStyle::new(16.0, Color::rgb(144, 238, 144), TextAlign::Right);

pub const FALLBACK_TEXT: Color = Color::BLACK;
