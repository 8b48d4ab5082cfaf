//! Shared livery and detail colors.

use bevy::prelude::*;

pub const METRO_A_BLUE: Color = Color::srgb(0.145, 0.388, 0.922);
pub const GONDOLA_AMBER: Color = Color::srgb(0.961, 0.620, 0.043);
pub const TRAM_PURPLE: Color = Color::srgb(0.545, 0.361, 0.965);

pub const WINDOW_GLASS: Color = Color::srgb(0.118, 0.227, 0.373);
pub const CAB_DARK: Color = Color::srgb(0.122, 0.161, 0.216);
pub const ROOF_GREY: Color = Color::srgb(0.420, 0.447, 0.502);
pub const STEEL: Color = Color::srgb(0.216, 0.255, 0.318);
pub const STRIPE_WHITE: Color = Color::WHITE;
pub const STRIPE_YELLOW: Color = Color::srgb(0.984, 0.749, 0.141);
pub const HEADLIGHT: Color = Color::srgb(0.996, 0.941, 0.541);

/// Convert an `[r, g, b]` sRGB triple from the network data.
pub fn from_rgb(rgb: [u8; 3]) -> Color {
    Color::srgb_u8(rgb[0], rgb[1], rgb[2])
}
