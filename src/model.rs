use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
    Mono,
}

pub const TEXT: [u8; 3] = [0x11, 0x18, 0x27];
pub const MUTED: [u8; 3] = [0x6b, 0x72, 0x80];
pub const ACCENT: [u8; 3] = [0x05, 0x96, 0x69];
pub const HEADER_SHADE: [u8; 3] = [0xf3, 0xf4, 0xf6];
pub const SUBHEADER_SHADE: [u8; 3] = [0xf9, 0xfa, 0xfb];
pub const NOTE_SHADE: [u8; 3] = [0xfe, 0xf3, 0xc7];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Run {
    pub text: String,
    pub font_size: f32,
    pub style: FontStyle,
    pub color: Option<[u8; 3]>, // None = default text color
}

impl Run {
    pub fn plain(text: impl Into<String>, font_size: f32) -> Self {
        Self {
            text: text.into(),
            font_size,
            style: FontStyle::Regular,
            color: None,
        }
    }

    pub fn bold(text: impl Into<String>, font_size: f32) -> Self {
        Self {
            style: FontStyle::Bold,
            ..Self::plain(text, font_size)
        }
    }

    pub fn italic(text: impl Into<String>, font_size: f32) -> Self {
        Self {
            style: FontStyle::Italic,
            ..Self::plain(text, font_size)
        }
    }

    pub fn mono(text: impl Into<String>, font_size: f32) -> Self {
        Self {
            style: FontStyle::Mono,
            ..Self::plain(text, font_size)
        }
    }

    /// Grey field caption, e.g. `Nimi: `.
    pub fn label(text: impl Into<String>, font_size: f32) -> Self {
        Self {
            color: Some(MUTED),
            ..Self::plain(text, font_size)
        }
    }

    pub fn with_color(mut self, color: [u8; 3]) -> Self {
        self.color = Some(color);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub alignment: Alignment,
    pub space_before: f32,
    pub space_after: f32,
    pub shading: Option<[u8; 3]>,
}

impl Paragraph {
    pub fn new(runs: Vec<Run>) -> Self {
        Self {
            runs,
            alignment: Alignment::Left,
            space_before: 0.0,
            space_after: 0.0,
            shading: None,
        }
    }

    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn spaced(mut self, before: f32, after: f32) -> Self {
        self.space_before = before;
        self.space_after = after;
        self
    }

    pub fn shaded(mut self, color: [u8; 3]) -> Self {
        self.shading = Some(color);
        self
    }

    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Which part of the contract a table renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TableRole {
    ContractNumber,
    Lessee,
    Lessor,
    Seller,
    LeaseObjects,
    Delivery,
    Rent,
    LeasePeriod,
    SpecialConditions,
    BankDetails,
    DeliveryDate,
    Confirmation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum RowKind {
    /// Section title spanning the table.
    Title,
    ColumnHeadings,
    /// One repeating entry: a leased object or a rent installment.
    Item,
    Detail,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableCell {
    pub paragraphs: Vec<Paragraph>,
    pub grid_span: u16,
    pub shading: Option<[u8; 3]>,
}

impl TableCell {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self {
            paragraphs,
            grid_span: 1,
            shading: None,
        }
    }

    pub fn runs(runs: Vec<Run>) -> Self {
        Self::new(vec![Paragraph::new(runs)])
    }

    pub fn spanning(mut self, span: u16) -> Self {
        self.grid_span = span;
        self
    }

    pub fn shaded(mut self, color: [u8; 3]) -> Self {
        self.shading = Some(color);
        self
    }

    pub fn aligned(mut self, alignment: Alignment) -> Self {
        for p in &mut self.paragraphs {
            p.alignment = alignment;
        }
        self
    }

    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableRow {
    pub kind: RowKind,
    pub cells: Vec<TableCell>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Table {
    pub role: TableRole,
    /// Relative column widths; the renderer scales them to the text width.
    pub col_widths: Vec<f32>,
    pub rows: Vec<TableRow>,
    /// Shrink to content and align right instead of spanning the text width.
    pub compact: bool,
}

impl Table {
    pub fn rows_of(&self, kind: RowKind) -> impl Iterator<Item = &TableRow> {
        self.rows.iter().filter(move |r| r.kind == kind)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Logo {
    /// Caller-supplied image reference (file path or URI). The monogram is
    /// drawn instead when the image cannot be loaded.
    Image { uri: String, monogram: char },
    Monogram(char),
}

impl Logo {
    pub fn monogram(&self) -> char {
        match self {
            Logo::Image { monogram, .. } | Logo::Monogram(monogram) => *monogram,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Header {
    pub logo: Option<Logo>,
    pub company_name: Option<String>,
    pub business_id: Option<String>,
    pub title: String,
    pub contract_number: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ElectronicSignature {
    pub label: String,
    pub signed_on: String,
}

/// Fill-in area with place/date, signature and name lines. `None` fields
/// render as blank lines.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SignatureBlock {
    pub title: String,
    pub place_and_date: Option<String>,
    pub signature: Option<ElectronicSignature>,
    pub signer_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Footer {
    pub logo: Option<Logo>,
    pub lines: Vec<Paragraph>,
    pub initials: bool,
    pub page_label: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Block {
    Header(Header),
    Paragraph(Paragraph),
    Table(Table),
    /// Signature blocks laid out side by side.
    Signatures(Vec<SignatureBlock>),
    Footer(Footer),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PageKind {
    Contract,
    GeneralTerms,
    Signatures,
    DeliveryConfirmation,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page {
    pub kind: PageKind,
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    pub fn table(&self, role: TableRole) -> Option<&Table> {
        self.tables().find(|t| t.role == role)
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Paragraph(p) => Some(p),
            _ => None,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Document {
    pub pages: Vec<Page>,
}

impl Document {
    pub fn page(&self, kind: PageKind) -> Option<&Page> {
        self.pages.iter().find(|p| p.kind == kind)
    }
}
