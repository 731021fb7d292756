use ratatui::style::{Color, Style};

use crate::app::settings::{PaletteSettings, Settings};
use crate::errors::AppError;

/// Base palette. Concrete widget styles are derived from it in
/// `ui::colors`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    /// Balances the user owes.
    pub owe: Color,
    /// Balances owed to the user.
    pub owed: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(11, 12, 13),
            fg: Color::Gray,
            accent: Color::Cyan,
            owe: Color::LightRed,
            owed: Color::LightGreen,
        }
    }

    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            accent: Color::Blue,
            owe: Color::Red,
            owed: Color::Green,
        }
    }

    pub fn style_fg(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn by_name(name: &str) -> Result<Self, AppError> {
        match name {
            "dark" => Ok(Self::dark()),
            "light" => Ok(Self::light()),
            other => Err(AppError::UnknownTheme(other.to_string())),
        }
    }

    /// Built-in theme named in `settings`, with the optional palette
    /// applied on top.
    pub fn from_settings(settings: &Settings) -> Result<Self, AppError> {
        let mut theme = Self::by_name(&settings.theme)?;
        if let Some(p) = &settings.palette {
            theme.apply_palette(p)?;
        }
        Ok(theme)
    }

    fn apply_palette(&mut self, p: &PaletteSettings) -> Result<(), AppError> {
        self.bg = parse_hex(&p.bg)?;
        self.fg = parse_hex(&p.fg)?;
        self.accent = parse_hex(&p.accent)?;
        if let Some(c) = &p.owe {
            self.owe = parse_hex(c)?;
        }
        if let Some(c) = &p.owed {
            self.owed = parse_hex(c)?;
        }
        Ok(())
    }
}

/// Parse `#RRGGBB` (leading `#` optional).
pub fn parse_hex(s: &str) -> Result<Color, AppError> {
    let hex = s.trim_start_matches('#');
    let bad = || AppError::InvalidColor(s.to_string());
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(bad());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
    Ok(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}
