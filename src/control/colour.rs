//! Status indicator palette.

/// Colour as (R, G, B) tuple, each 0–255.
pub type Rgb = (u8, u8, u8);

/// Discrete colours the status indicator can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColour {
    /// Shown once at power-up, before the first decision.
    Startup,
    /// Mode is OFF.
    Off,
    /// Estimate is below the band.
    TooCold,
    /// Estimate is above the band.
    TooHot,
    /// Estimate is inside the band.
    InBand,
}

impl StatusColour {
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Startup => (255, 255, 255),
            Self::Off => (128, 0, 128),
            Self::TooCold => (0, 0, 255),
            Self::TooHot => (255, 0, 0),
            Self::InBand => (0, 255, 0),
        }
    }

    /// Packed `0x00RRGGBB` form used by addressable LED drivers.
    pub const fn packed(self) -> u32 {
        let (r, g, b) = self.rgb();
        ((r as u32) << 16) | ((g as u32) << 8) | b as u32
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Startup => "white",
            Self::Off => "purple",
            Self::TooCold => "blue",
            Self::TooHot => "red",
            Self::InBand => "green",
        }
    }
}
