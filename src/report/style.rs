use rust_xlsxwriter::{Color, Format, FormatAlign, FormatPattern};

/// 25 % grey used behind the header row.
pub const HEADER_FILL: u32 = 0xC0C0C0;
pub const BODY_FILL: u32 = 0xFFFFFF;
pub const HEADER_FONT_SIZE: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
}

/// Font weight, alignment, wrapping and fill of one kind of cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellStyle {
    pub bold: bool,
    pub font_size: Option<f64>,
    pub align: HorizontalAlign,
    pub wrap_text: bool,
    /// Solid fill as `0xRRGGBB`.
    pub fill: u32,
}

impl CellStyle {
    pub fn to_format(&self) -> Format {
        let mut format = Format::new();

        if self.bold {
            format = format.set_bold();
        }
        if let Some(size) = self.font_size {
            format = format.set_font_size(size);
        }

        format = format.set_align(match self.align {
            HorizontalAlign::Left => FormatAlign::Left,
            HorizontalAlign::Center => FormatAlign::Center,
        });

        if self.wrap_text {
            format = format.set_text_wrap();
        }

        format
            .set_pattern(FormatPattern::Solid)
            .set_background_color(Color::RGB(self.fill))
    }
}

/// The two styles used by a report. Built once per workbook.
#[derive(Debug, Clone)]
pub struct StyleSheet {
    pub header: Format,
    pub body: Format,
}

impl StyleSheet {
    pub const HEADER: CellStyle = CellStyle {
        bold: true,
        font_size: Some(HEADER_FONT_SIZE),
        align: HorizontalAlign::Center,
        wrap_text: true,
        fill: HEADER_FILL,
    };

    pub const BODY: CellStyle = CellStyle {
        bold: false,
        font_size: None,
        align: HorizontalAlign::Left,
        wrap_text: true,
        fill: BODY_FILL,
    };

    pub fn new() -> Self {
        StyleSheet {
            header: Self::HEADER.to_format(),
            body: Self::BODY.to_format(),
        }
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self::new()
    }
}
