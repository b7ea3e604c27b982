// Simple color struct, created from an unsigned 32 representing RRGGBBAA

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

// Ambient particle colors: teal, cyan, violet
pub const FIELD_PALETTE: [Color; 3] = [
    Color::from_u32(0x27a6aaff),
    Color::from_u32(0x00f5ffff),
    Color::from_u32(0x9338d4ff),
];

pub const CONFETTI_PALETTE: [Color; 4] = [
    Color::from_u32(0x27a6aaff),
    Color::from_u32(0x00f5ffff),
    Color::from_u32(0x9338d4ff),
    Color::from_u32(0x9d4eddff),
];

impl Color {
    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // Canvas style string. Alpha is not encoded, transparency goes through
    // the context's global alpha.
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
