use std::fmt;

/// Opaque 8-bit RGB triple.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` (case-insensitive, leading `#` required).
    pub fn parse_hex(raw: &str) -> Option<Self> {
        let digits = raw.strip_prefix('#')?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Leaf color value of the palette. Alpha is a percentage in `0..=100`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ColorToken {
    Opaque(Rgb),
    Translucent { rgb: Rgb, alpha: u8 },
}

impl ColorToken {
    pub const TRANSPARENT: Self = Self::Translucent {
        rgb: Rgb::new(0, 0, 0),
        alpha: 0,
    };

    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Opaque(rgb) | Self::Translucent { rgb, .. } => rgb,
        }
    }

    pub const fn alpha(self) -> u8 {
        match self {
            Self::Opaque(_) => 100,
            Self::Translucent { alpha, .. } => alpha,
        }
    }

    pub const fn is_transparent(self) -> bool {
        self.alpha() == 0
    }

    pub fn to_css(self) -> String {
        match self {
            Self::Opaque(rgb) => rgb.to_hex(),
            Self::Translucent { alpha: 0, .. } => "transparent".to_string(),
            Self::Translucent { rgb, alpha } => format!(
                "rgba({}, {}, {}, {:.2})",
                rgb.r,
                rgb.g,
                rgb.b,
                f32::from(alpha) / 100.0
            ),
        }
    }

    #[cfg(feature = "render")]
    pub fn to_hsla(self) -> gpui::Hsla {
        let rgb = self.rgb();
        gpui::Rgba {
            r: f32::from(rgb.r) / 255.0,
            g: f32::from(rgb.g) / 255.0,
            b: f32::from(rgb.b) / 255.0,
            a: f32::from(self.alpha()) / 100.0,
        }
        .into()
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Hue ramps of the core layer.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum CoreHue {
    Neutral,
    Blue,
    LightBlue,
    Green,
    Red,
    Yellow,
    Orange,
    Violet,
    Pink,
}

impl CoreHue {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Blue => "blue",
            Self::LightBlue => "lightblue",
            Self::Green => "green",
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Violet => "violet",
            Self::Pink => "pink",
        }
    }
}

pub const CORE_HUES: [CoreHue; 9] = [
    CoreHue::Neutral,
    CoreHue::Blue,
    CoreHue::LightBlue,
    CoreHue::Green,
    CoreHue::Red,
    CoreHue::Yellow,
    CoreHue::Orange,
    CoreHue::Violet,
    CoreHue::Pink,
];

/// Base colors of the alpha layer. Independent of the core ramps.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum AlphaHue {
    Black,
    White,
    Blue,
    Gray,
}

impl AlphaHue {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::White => "white",
            Self::Blue => "blue",
            Self::Gray => "gray",
        }
    }

    pub const fn base(self) -> Rgb {
        match self {
            Self::Black => Rgb::new(11, 13, 17),
            Self::White => Rgb::new(255, 255, 255),
            Self::Blue => Rgb::new(65, 109, 240),
            Self::Gray => Rgb::new(140, 152, 161),
        }
    }
}

pub const ALPHA_STEPS: [u8; 8] = [8, 12, 24, 32, 48, 60, 80, 96];

/// `(step, hex)` pairs of one core ramp, ordered by step.
pub type CoreRamp = &'static [(u8, &'static str)];

pub struct PaletteCatalog;

impl PaletteCatalog {
    pub const fn core(hue: CoreHue) -> CoreRamp {
        match hue {
            CoreHue::Neutral => &[
                (0, "#FFFFFF"),
                (5, "#F1F4F8"),
                (10, "#E3E8ED"),
                (20, "#D4DCE2"),
                (30, "#C6D0D7"),
                (40, "#ABB6BF"),
                (50, "#8C98A1"),
                (60, "#6A747C"),
                (70, "#545D64"),
                (80, "#394046"),
                (90, "#202427"),
                (100, "#0B0D11"),
            ],
            CoreHue::Blue => &[
                (5, "#F3F6FF"),
                (10, "#DAE3FF"),
                (20, "#B7C8FF"),
                (30, "#8EABFF"),
                (40, "#628AFF"),
                (50, "#416DF0"),
                (60, "#2856E0"),
                (70, "#1942BC"),
                (80, "#0E2F91"),
                (90, "#082271"),
            ],
            CoreHue::LightBlue => &[
                (5, "#EDF8FC"),
                (10, "#D2EFFA"),
                (20, "#B4E6FB"),
                (30, "#8DDAF9"),
                (40, "#57C7F3"),
                (50, "#15B2F1"),
                (60, "#049EDC"),
                (70, "#007DAF"),
                (80, "#045F84"),
                (90, "#06435B"),
            ],
            CoreHue::Green => &[
                (5, "#ECF8F3"),
                (10, "#DAF1E5"),
                (20, "#B5E3CB"),
                (30, "#8FD5B0"),
                (40, "#6AC796"),
                (50, "#45B97C"),
                (60, "#269E5F"),
                (70, "#167D46"),
                (80, "#145E37"),
                (90, "#0A4325"),
            ],
            CoreHue::Red => &[
                (5, "#FEF5F5"),
                (10, "#FCDEDF"),
                (20, "#F9B8BB"),
                (30, "#F68D91"),
                (40, "#F4686D"),
                (50, "#E14D52"),
                (60, "#CA383E"),
                (70, "#A32429"),
                (80, "#7E0A0E"),
                (90, "#570407"),
            ],
            CoreHue::Yellow => &[
                (5, "#FFF8E7"),
                (10, "#FFF1D0"),
                (20, "#FEE3A1"),
                (30, "#FED571"),
                (40, "#FECA4A"),
                (50, "#FDB913"),
                (60, "#D89A00"),
                (70, "#A37402"),
                (80, "#6B4D03"),
                (90, "#503800"),
            ],
            CoreHue::Orange => &[
                (5, "#FEF1E9"),
                (10, "#FDE3D3"),
                (20, "#FAC7A6"),
                (30, "#F8AB7A"),
                (40, "#F58F4D"),
                (50, "#F37321"),
                (60, "#DA6113"),
                (70, "#A54D16"),
                (80, "#6E330D"),
                (90, "#482815"),
            ],
            CoreHue::Violet => &[
                (5, "#F6F2FC"),
                (10, "#EBE3FB"),
                (20, "#DED2F8"),
                (30, "#CEBBF8"),
                (40, "#B58DF9"),
                (50, "#9B6BF4"),
                (60, "#8154D4"),
                (70, "#6944AF"),
                (80, "#503585"),
                (90, "#392462"),
            ],
            CoreHue::Pink => &[
                (5, "#FFF3FB"),
                (10, "#FFE2F5"),
                (20, "#FFC7EC"),
                (30, "#FFA6D8"),
                (40, "#FD80CB"),
                (50, "#FC60B4"),
                (60, "#DE4397"),
                (70, "#AC3A77"),
                (80, "#832759"),
                (90, "#5B143A"),
            ],
        }
    }

    pub fn alpha(hue: AlphaHue, step: u8) -> ColorToken {
        ColorToken::Translucent {
            rgb: hue.base(),
            alpha: step,
        }
    }
}

// Button metrics, in logical pixels.
pub const BUTTON_PILL_RADIUS: f32 = 9999.0;
pub const BUTTON_GHOST_RADIUS: f32 = 8.0;
pub const BUTTON_MAX_WIDTH: f32 = 480.0;
pub const BUTTON_BORDER_WIDTH: f32 = 1.0;
pub const BUTTON_FONT_WEIGHT: u16 = 500;
pub const BUTTON_LINE_HEIGHT: f32 = 1.44;
pub const DISABLED_OPACITY: f32 = 0.6;
