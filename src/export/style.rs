use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder};

/// Couleur de fond d'une cellule de données.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fill {
    LightGreen,
    LightOrange,
    White,
    LightYellow,
    LightRed,
    LightBlue,
}

impl Fill {
    pub const ALL: [Fill; 6] = [
        Fill::LightGreen,
        Fill::LightOrange,
        Fill::White,
        Fill::LightYellow,
        Fill::LightRed,
        Fill::LightBlue,
    ];

    pub fn rgb(&self) -> u32 {
        match self {
            Fill::LightGreen => 0xC6EFCE,
            Fill::LightOrange => 0xFFEB9C,
            Fill::White => 0xFFFFFF,
            Fill::LightYellow => 0xFFFF99,
            Fill::LightRed => 0xFFC7CE,
            Fill::LightBlue => 0xDDEBF7,
        }
    }
}

/// Fond associé au texte d'une cellule. Toute valeur inconnue (y compris `-`)
/// retombe sur le blanc : l'export ne doit jamais échouer pour un détail visuel.
pub fn fill_for_value(value: &str) -> Fill {
    match value {
        "SA" => Fill::LightGreen,
        "SB" => Fill::LightOrange,
        "SC" => Fill::White,
        "WO" => Fill::LightYellow,
        "Leave" => Fill::LightRed,
        "WFH" => Fill::LightBlue,
        _ => Fill::White,
    }
}

/// Style d'une cellule du plan de feuille.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellStyle {
    /// En-têtes (dates, jours) et colonne des membres : gras, bordé.
    Header,
    Data(Fill),
}

/// Formats xlsx précalculés, un par style.
pub(super) struct Formats {
    header: Format,
    fills: Vec<(Fill, Format)>,
}

impl Formats {
    pub(super) fn new() -> Self {
        let header = Format::new()
            .set_bold()
            .set_text_wrap()
            .set_align(FormatAlign::Top)
            .set_border(FormatBorder::Thin);
        let fills = Fill::ALL
            .into_iter()
            .map(|fill| {
                let format = Format::new()
                    .set_background_color(Color::RGB(fill.rgb()))
                    .set_border(FormatBorder::Thin);
                (fill, format)
            })
            .collect();
        Self { header, fills }
    }

    pub(super) fn get(&self, style: CellStyle) -> &Format {
        match style {
            CellStyle::Header => &self.header,
            CellStyle::Data(fill) => self
                .fills
                .iter()
                .find(|(f, _)| *f == fill)
                .map(|(_, format)| format)
                .unwrap_or(&self.header),
        }
    }
}
