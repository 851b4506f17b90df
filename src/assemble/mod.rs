mod rows;
mod sections;
mod terms;

use crate::contract::{
    ApplicationRecord, ContractRecord, ContractStatus, Locale, PresentationDefaults, non_empty,
};
use crate::model::{
    Alignment, Block, Document, ElectronicSignature, Footer, HEADER_SHADE, Header, Logo,
    NOTE_SHADE, Page, PageKind, Paragraph, RowKind, Run, SUBHEADER_SHADE, SignatureBlock, Table,
    TableCell, TableRow, TableRole,
};

pub use rows::{LabelStyle, ObjectRow, condition_label, expand_rows};
pub use sections::{
    Sections, has_advance_payment, has_bank_details, has_lessor_address, has_other_delivery_terms,
    has_seller, has_seller_address, has_special_conditions,
};
pub use terms::GENERAL_TERMS;

pub const DOCUMENT_TITLE: &str = "Rahoitusleasingsopimus";
pub const DELIVERY_CONFIRMATION_TITLE: &str = "Toimituksen Hyväksymisilmoitus";
pub const SIGNED_ELECTRONICALLY: &str = "Allekirjoitettu sähköisesti";

const BODY: f32 = 9.0;
const SMALL: f32 = 8.0;
const HEADING: f32 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct AssembleOptions {
    /// Logo image reference. Without one a monogram of the lessor is drawn.
    pub logo: Option<String>,
    pub delivery_confirmation: bool,
    pub locale: Locale,
    pub defaults: PresentationDefaults,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            logo: None,
            delivery_confirmation: true,
            locale: Locale::FI,
            defaults: PresentationDefaults::FI,
        }
    }
}

/// Lay out the contract as three pages, plus the delivery confirmation page
/// when enabled. Missing optional data never fails: it falls back to a
/// placeholder or drops the section.
pub fn assemble(
    contract: &ContractRecord,
    application: &ApplicationRecord,
    options: &AssembleOptions,
) -> Document {
    let asm = Assembler::new(contract, application, options);

    let mut pages = vec![asm.contract_page(), asm.terms_page(), asm.signature_page()];
    if asm.sections.delivery_confirmation {
        pages.push(asm.delivery_confirmation_page());
    }

    log::debug!(
        "Assembled {} page(s) for contract {}: {:?}",
        pages.len(),
        asm.contract_number,
        asm.sections,
    );

    Document { pages }
}

/// Cells of the contract-number box, one per character.
pub fn contract_number_cells(
    contract_number: Option<&str>,
    defaults: &PresentationDefaults,
) -> Vec<char> {
    contract_number
        .filter(|s| !s.is_empty())
        .unwrap_or(defaults.contract_number_placeholder)
        .chars()
        .collect()
}

struct Assembler<'a> {
    c: &'a ContractRecord,
    app: &'a ApplicationRecord,
    locale: &'a Locale,
    defaults: &'a PresentationDefaults,
    logo: Logo,
    sections: Sections,
    contract_number: String,
}

fn text(field: &Option<String>) -> String {
    field.clone().unwrap_or_default()
}

fn or_default(field: &Option<String>, fallback: &str) -> String {
    non_empty(field).unwrap_or(fallback).to_string()
}

fn postal_line(postal_code: &Option<String>, city: &Option<String>) -> String {
    format!("{} {}", text(postal_code), text(city)).trim().to_string()
}

fn field(label: &str, value: Run) -> TableCell {
    TableCell::runs(vec![Run::label(format!("{label}: "), BODY), value])
}

fn title_row(title: &str, span: u16) -> TableRow {
    TableRow {
        kind: RowKind::Title,
        cells: vec![
            TableCell::runs(vec![Run::bold(title, HEADING)])
                .spanning(span)
                .shaded(HEADER_SHADE),
        ],
    }
}

fn heading_row(headings: &[&str]) -> TableRow {
    TableRow {
        kind: RowKind::ColumnHeadings,
        cells: headings
            .iter()
            .map(|h| TableCell::runs(vec![Run::bold(*h, SMALL)]).shaded(SUBHEADER_SHADE))
            .collect(),
    }
}

fn detail(cells: Vec<TableCell>) -> TableRow {
    TableRow {
        kind: RowKind::Detail,
        cells,
    }
}

fn item(cells: Vec<TableCell>) -> TableRow {
    TableRow {
        kind: RowKind::Item,
        cells,
    }
}

fn table(role: TableRole, col_widths: &[f32], rows: Vec<TableRow>) -> Block {
    Block::Table(Table {
        role,
        col_widths: col_widths.to_vec(),
        rows,
        compact: false,
    })
}

fn note(body: &str) -> Block {
    Block::Paragraph(Paragraph::new(vec![Run::label(body, SMALL)]).spaced(2.0, 10.0))
}

fn heading(title: &str) -> Block {
    Block::Paragraph(
        Paragraph::new(vec![Run::bold(title, 12.0)])
            .aligned(Alignment::Center)
            .spaced(4.0, 8.0),
    )
}

const HALF: [f32; 2] = [50.0, 50.0];

impl<'a> Assembler<'a> {
    fn new(
        c: &'a ContractRecord,
        app: &'a ApplicationRecord,
        options: &'a AssembleOptions,
    ) -> Self {
        let defaults = &options.defaults;
        let monogram = c.lessor_company_name.chars().next().unwrap_or(defaults.monogram);
        let logo = match &options.logo {
            Some(uri) if !uri.is_empty() => Logo::Image {
                uri: uri.clone(),
                monogram,
            },
            _ => Logo::Monogram(monogram),
        };
        let contract_number: String =
            contract_number_cells(c.contract_number.as_deref(), defaults).into_iter().collect();

        Self {
            c,
            app,
            locale: &options.locale,
            defaults,
            logo,
            sections: Sections::select(c, options.delivery_confirmation),
            contract_number,
        }
    }

    fn money(&self, value: Option<f64>) -> String {
        self.locale.format_currency(value)
    }

    fn date(&self, value: &Option<String>) -> String {
        self.locale.format_date(value.as_deref())
    }

    fn lessor_name(&self) -> &str {
        if self.c.lessor_company_name.is_empty() {
            self.defaults.lessor_name
        } else {
            &self.c.lessor_company_name
        }
    }

    fn compact_header(&self) -> Block {
        Block::Header(Header {
            logo: None,
            company_name: None,
            business_id: None,
            title: DOCUMENT_TITLE.to_string(),
            contract_number: Some(self.contract_number.clone()),
        })
    }

    fn lessor_lines(&self) -> Vec<Paragraph> {
        let mut lines = vec![Paragraph::new(vec![Run::bold(self.lessor_name(), BODY)])];
        if let Some(bid) = non_empty(&self.c.lessor_business_id) {
            lines.push(Paragraph::new(vec![Run::label(format!("Y-tunnus: {bid}"), BODY)]));
        }
        if let Some(street) = non_empty(&self.c.lessor_street_address) {
            let postal = postal_line(&self.c.lessor_postal_code, &self.c.lessor_city);
            lines.push(Paragraph::new(vec![Run::label(format!("{street}, {postal}"), BODY)]));
        }
        lines
    }

    // ---- page 1 ----

    fn contract_page(&self) -> Page {
        let mut blocks = vec![
            Block::Header(Header {
                logo: Some(self.logo.clone()),
                company_name: Some(self.lessor_name().to_string()),
                business_id: non_empty(&self.c.lessor_business_id).map(str::to_string),
                title: DOCUMENT_TITLE.to_string(),
                contract_number: Some(self.contract_number.clone()),
            }),
            self.contract_number_box(),
            self.lessee_table(field(
                "Verotusmaa",
                Run::plain(or_default(&self.c.lessee_tax_country, self.defaults.tax_country), BODY),
            )),
            self.lessor_table(),
        ];
        if self.sections.seller {
            blocks.push(self.seller_table());
        }
        blocks.push(self.lease_object_table());
        blocks.push(self.delivery_table());
        blocks.push(note(
            "Vuokralleottajan tulee toimittaa allekirjoittamansa toimitusvahvistus vuokralleantajalle välittömästi vuokrakohteen toimituksen jälkeen.",
        ));
        blocks.push(self.rent_table());
        blocks.push(note(
            "Vuokraan ja muihin tämän rahoitusleasingsopimuksen mukaisiin palkkioihin lisätään arvonlisävero kulloinkin voimassaolevien säännösten mukaan. Järjestelypalkkio lisätään ensimmäiseen vuokraerään ja käsittelymaksu lisätään jokaiseen vuokraerään.",
        ));
        blocks.push(self.lease_period_table());
        blocks.push(note("Vuokra-aika alkaa vuokrakohteen toimituspäivänä."));
        if self.sections.special_conditions {
            blocks.push(self.special_conditions_table());
        }
        blocks.push(Block::Footer(Footer {
            logo: None,
            lines: Vec::new(),
            initials: true,
            page_label: Some("Sivu 1/3".to_string()),
        }));

        Page {
            kind: PageKind::Contract,
            blocks,
        }
    }

    fn contract_number_box(&self) -> Block {
        let label = TableCell::runs(vec![Run::bold("Sopimusnumero", SMALL)]).shaded(HEADER_SHADE);
        let mut cells = vec![label];
        cells.extend(self.contract_number.chars().map(|ch| {
            TableCell::runs(vec![Run::mono(ch.to_string(), 11.0)]).aligned(Alignment::Center)
        }));
        let mut col_widths = vec![80.0];
        col_widths.extend(std::iter::repeat_n(18.0, cells.len() - 1));

        Block::Table(Table {
            role: TableRole::ContractNumber,
            col_widths,
            rows: vec![item(cells)],
            compact: true,
        })
    }

    /// The lessee table; the last cell differs between the contract page and
    /// the delivery confirmation page.
    fn lessee_table(&self, last_cell: TableCell) -> Block {
        let c = self.c;
        let rows = vec![
            title_row("VUOKRALLEOTTAJA", 2),
            detail(vec![
                field("Nimi", Run::bold(c.lessee_company_name.clone(), BODY)),
                field("Y-tunnus", Run::mono(text(&c.lessee_business_id), BODY)),
            ]),
            detail(vec![
                field("Katuosoite", Run::plain(text(&c.lessee_street_address), BODY)),
                field(
                    "Postinumero ja -toimipaikka",
                    Run::plain(postal_line(&c.lessee_postal_code, &c.lessee_city), BODY),
                ),
            ]),
            detail(vec![
                field("Yhteyshenkilö", Run::plain(text(&c.lessee_contact_person), BODY)),
                field("Puhelinnumero", Run::plain(text(&c.lessee_phone), BODY)),
            ]),
            detail(vec![
                field("Sähköpostiosoite", Run::plain(text(&c.lessee_email), BODY)),
                last_cell,
            ]),
        ];
        table(TableRole::Lessee, &HALF, rows)
    }

    fn lessor_table(&self) -> Block {
        let c = self.c;
        let mut rows = vec![
            title_row("VUOKRALLEANTAJA", 2),
            detail(vec![
                field("Nimi", Run::bold(c.lessor_company_name.clone(), BODY)),
                field(
                    "Y-tunnus",
                    Run::mono(
                        or_default(&c.lessor_business_id, self.defaults.missing_business_id),
                        BODY,
                    ),
                ),
            ]),
        ];
        if self.sections.lessor_address {
            rows.push(detail(vec![
                field("Katuosoite", Run::plain(text(&c.lessor_street_address), BODY)),
                field(
                    "Postinumero ja -toimipaikka",
                    Run::plain(postal_line(&c.lessor_postal_code, &c.lessor_city), BODY),
                ),
            ]));
        }
        table(TableRole::Lessor, &HALF, rows)
    }

    fn seller_table(&self) -> Block {
        let c = self.c;
        let mut rows = vec![
            title_row("MYYJÄ", 2),
            detail(vec![
                field("Nimi", Run::bold(text(&c.seller_company_name), BODY)),
                field(
                    "Y-tunnus",
                    Run::mono(
                        or_default(&c.seller_business_id, self.defaults.missing_business_id),
                        BODY,
                    ),
                ),
            ]),
        ];
        if self.sections.seller_address {
            rows.push(detail(vec![
                field("Katuosoite", Run::plain(text(&c.seller_street_address), BODY)),
                field(
                    "Postinumero ja -toimipaikka",
                    Run::plain(postal_line(&c.seller_postal_code, &c.seller_city), BODY),
                ),
            ]));
        }
        rows.push(detail(vec![
            field("Yhteyshenkilö", Run::plain(text(&c.seller_contact_person), BODY)),
            field("Puhelinnumero", Run::plain(text(&c.seller_phone), BODY)),
        ]));
        rows.push(detail(vec![
            field("Sähköpostiosoite", Run::plain(text(&c.seller_email), BODY)),
            field(
                "Verotusmaa",
                Run::plain(or_default(&c.seller_tax_country, self.defaults.tax_country), BODY),
            ),
        ]));
        table(TableRole::Seller, &HALF, rows)
    }

    fn lease_object_table(&self) -> Block {
        let mut rows = vec![
            title_row("VUOKRAKOHDE", 5),
            heading_row(&[
                "Uusi/Käytetty",
                "Merkki ja malli",
                "Lisävarusteet",
                "Sarja-/Rekisterinumero",
                "Vuosimalli",
            ]),
        ];
        rows.extend(
            expand_rows(&self.c.lease_objects, self.app, LabelStyle::Separate)
                .into_iter()
                .map(|r| {
                    item(vec![
                        TableCell::runs(vec![Run::plain(r.condition, BODY)]),
                        TableCell::runs(vec![Run::bold(r.brand_model, BODY)]),
                        TableCell::runs(vec![Run::plain(r.accessories, BODY)]),
                        TableCell::runs(vec![Run::mono(r.serial, SMALL)]),
                        TableCell::runs(vec![Run::plain(r.model_year, BODY)])
                            .aligned(Alignment::Center),
                    ])
                }),
        );
        rows.push(detail(vec![
            field(
                "Käyttöpaikka",
                Run::plain(or_default(&self.c.usage_location, self.defaults.usage_location), BODY),
            )
            .spanning(5),
        ]));
        table(TableRole::LeaseObjects, &[12.0, 30.0, 20.0, 23.0, 15.0], rows)
    }

    fn delivery_table(&self) -> Block {
        let c = self.c;
        let mut rows = vec![
            title_row("TOIMITUS", 2),
            detail(vec![
                field(
                    "Toimitustapa",
                    Run::plain(or_default(&c.delivery_method, self.defaults.delivery_method), BODY),
                ),
                field(
                    "Arvioitu toimituspäivä",
                    Run::plain(self.date(&c.estimated_delivery_date), BODY),
                ),
            ]),
        ];
        if self.sections.other_delivery_terms {
            rows.push(detail(vec![
                field("Muut toimitusehdot", Run::plain(text(&c.other_delivery_terms), BODY))
                    .spanning(2),
            ]));
        }
        table(TableRole::Delivery, &HALF, rows)
    }

    fn rent_table(&self) -> Block {
        let c = self.c;
        let d = self.defaults;
        let mut rows = vec![
            title_row("VUOKRAN MÄÄRÄ", 4),
            title_row("Vuokraerät:", 4),
            heading_row(&[
                "Nro.",
                "Vuokrajakson pituus",
                "Arvioitu eräpäivä",
                "Vuokraerä (ALV 0%)",
            ]),
        ];
        if self.sections.advance_payment {
            rows.push(item(vec![
                TableCell::runs(vec![Run::plain("Ennakkovuokra", BODY)]),
                TableCell::runs(vec![]),
                TableCell::runs(vec![]),
                TableCell::runs(vec![Run::bold(self.money(c.advance_payment), BODY)])
                    .aligned(Alignment::Right),
            ]));
        }

        let first = c.rent_installments_start.filter(|&n| n != 0).unwrap_or(d.first_installment);
        let last = c.rent_installments_end.filter(|&n| n != 0).unwrap_or(c.lease_period_months);
        let due = match non_empty(&c.lease_start_date) {
            Some(_) => self.date(&c.lease_start_date),
            None => d.due_date_without_start.to_string(),
        };
        rows.push(item(vec![
            TableCell::runs(vec![Run::bold(format!("{first}-{last}"), BODY)]),
            TableCell::runs(vec![Run::plain(format!("{} kk", c.lease_period_months), BODY)]),
            TableCell::runs(vec![Run::plain(due, BODY)]),
            TableCell::runs(vec![Run::bold(self.money(Some(c.monthly_rent)), 11.0)])
                .aligned(Alignment::Right),
        ]));

        rows.push(detail(vec![
            TableCell::runs(vec![Run::bold(
                format!(
                    "Jäännösarvo varsinaisen vuokra-ajan päättyessä (alv 0%) {}",
                    self.money(c.residual_value)
                ),
                BODY,
            )])
            .spanning(4)
            .shaded(SUBHEADER_SHADE),
        ]));

        let processing_fee = c.processing_fee.filter(|&f| f != 0.0).unwrap_or(d.processing_fee);
        let arrangement_fee = c.arrangement_fee.filter(|&f| f != 0.0).unwrap_or(d.arrangement_fee);
        rows.push(detail(vec![
            field("Käsittelymaksu/vuokraerä", Run::bold(self.money(Some(processing_fee)), BODY))
                .spanning(2),
            field("Järjestelypalkkio", Run::bold(self.money(Some(arrangement_fee)), BODY)),
            field(
                "Laskutustapa",
                Run::bold(or_default(&c.invoicing_method, d.invoicing_method), BODY),
            ),
        ]));

        table(TableRole::Rent, &[25.0; 4], rows)
    }

    fn lease_period_table(&self) -> Block {
        let c = self.c;
        let start = match non_empty(&c.lease_start_date) {
            Some(_) => self.date(&c.lease_start_date),
            None => self.defaults.lease_start_pending.to_string(),
        };
        let rows = vec![
            title_row("VUOKRA-AIKA", 2),
            detail(vec![
                field("Vuokra-aika/kk", Run::bold(c.lease_period_months.to_string(), 14.0)),
                field("Vuokra-ajan alkamispäivä", Run::bold(start, BODY)),
            ]),
        ];
        table(TableRole::LeasePeriod, &HALF, rows)
    }

    fn special_conditions_table(&self) -> Block {
        let c = self.c;
        let mut lines = Vec::new();
        if let Some(kind) = non_empty(&c.guarantee_type) {
            lines.push(
                Paragraph::new(vec![Run::label("Vakuuden tyyppi: ", BODY), Run::bold(kind, BODY)])
                    .spaced(0.0, 4.0),
            );
        }
        if let Some(guarantees) = non_empty(&c.guarantees) {
            lines.push(
                Paragraph::new(vec![Run::label("Vakuudet: ", BODY), Run::plain(guarantees, BODY)])
                    .spaced(0.0, 4.0),
            );
        }
        if let Some(conditions) = non_empty(&c.special_conditions) {
            lines.push(Paragraph::new(vec![
                Run::label("Erityisehdot: ", BODY),
                Run::plain(conditions, BODY),
            ]));
        }
        let rows = vec![
            title_row("ERITYISEHDOT JA VAKUUDET", 1),
            detail(vec![TableCell::new(lines)]),
        ];
        table(TableRole::SpecialConditions, &[100.0], rows)
    }

    // ---- page 2 ----

    fn terms_page(&self) -> Page {
        let mut blocks = vec![self.compact_header(), heading("Yleiset sopimusehdot")];
        blocks.extend(GENERAL_TERMS.iter().enumerate().map(|(i, (title, body))| {
            Block::Paragraph(
                Paragraph::new(vec![
                    Run::bold(format!("{}. {title}\n", i + 1), SMALL),
                    Run::plain(*body, SMALL),
                ])
                .aligned(Alignment::Justify)
                .spaced(0.0, 6.0),
            )
        }));
        blocks.push(Block::Footer(Footer {
            logo: None,
            lines: Vec::new(),
            initials: true,
            page_label: Some("Sivu 2/3".to_string()),
        }));

        Page {
            kind: PageKind::GeneralTerms,
            blocks,
        }
    }

    // ---- page 3 ----

    fn signature_page(&self) -> Page {
        let c = self.c;
        let mut blocks = vec![
            self.compact_header(),
            Block::Paragraph(
                Paragraph::new(vec![Run::plain(
                    "Tämä sopimus on laadittu kahtena samansisältöisenä kappaleena, yksi kummallekin osapuolelle. Allekirjoituksellaan osapuolet vahvistavat tutustuneensa sopimuksen ehtoihin ja sitoutuvat noudattamaan niitä.",
                    BODY,
                )])
                .shaded(SUBHEADER_SHADE)
                .spaced(6.0, 12.0),
            ),
            heading("Allekirjoitukset"),
            Block::Signatures(vec![
                SignatureBlock {
                    title: "VUOKRALLEOTTAJAN ALLEKIRJOITUS".to_string(),
                    place_and_date: self
                        .place_and_date(&c.lessee_signature_place, &c.lessee_signature_date),
                    signature: self.electronic_signature(),
                    signer_name: non_empty(&c.lessee_signer_name).map(str::to_string),
                },
                SignatureBlock {
                    title: "VUOKRALLEANTAJAN ALLEKIRJOITUS".to_string(),
                    place_and_date: self
                        .place_and_date(&c.lessor_signature_place, &c.lessor_signature_date),
                    signature: None,
                    signer_name: non_empty(&c.lessor_signer_name).map(str::to_string),
                },
            ]),
        ];
        if self.sections.bank_details {
            blocks.push(self.bank_table());
        }

        let mut lines = self.lessor_lines();
        lines.push(
            Paragraph::new(vec![
                Run::label(
                    format!(
                        "Sopimus luotu {}-palvelussa \u{2022} {}",
                        self.defaults.service_name,
                        self.date(&c.created_at)
                    ),
                    SMALL,
                ),
            ])
            .spaced(10.0, 0.0),
        );
        blocks.push(Block::Footer(Footer {
            logo: Some(self.logo.clone()),
            lines,
            initials: false,
            page_label: Some("Sivu 3/3".to_string()),
        }));

        Page {
            kind: PageKind::Signatures,
            blocks,
        }
    }

    fn place_and_date(&self, place: &Option<String>, date: &Option<String>) -> Option<String> {
        let place = non_empty(place)?;
        non_empty(date)?;
        Some(format!("{place}, {}", self.date(date)))
    }

    /// Shown only for a signed contract with a named lessee signer.
    fn electronic_signature(&self) -> Option<ElectronicSignature> {
        if self.c.status != ContractStatus::Signed
            || non_empty(&self.c.lessee_signer_name).is_none()
        {
            return None;
        }
        Some(ElectronicSignature {
            label: SIGNED_ELECTRONICALLY.to_string(),
            signed_on: self.date(&self.c.signed_at),
        })
    }

    fn bank_table(&self) -> Block {
        let c = self.c;
        let mut rows = vec![
            title_row("MAKSUTIEDOT", 2),
            detail(vec![
                field("Pankki", Run::bold(text(&c.bank_name), BODY)),
                field("IBAN", Run::mono(text(&c.bank_iban), BODY)),
            ]),
        ];
        if let Some(bic) = non_empty(&c.bank_bic) {
            rows.push(detail(vec![field("BIC/SWIFT", Run::mono(bic, BODY)).spanning(2)]));
        }
        table(TableRole::BankDetails, &HALF, rows)
    }

    // ---- page 4 ----

    fn delivery_confirmation_page(&self) -> Page {
        let c = self.c;
        let d = self.defaults;
        let email = or_default(&c.lessee_email, d.instruction_email);

        let mut object_rows = vec![
            title_row("VUOKRAKOHDE", 3),
            heading_row(&[
                "Vuokrakohteen nimi, laatu, merkki ja malli",
                "Lisävarusteet",
                "Sarja-/Rekisterinumero",
            ]),
        ];
        object_rows.extend(
            expand_rows(&c.lease_objects, self.app, LabelStyle::Combined)
                .into_iter()
                .map(|r| {
                    item(vec![
                        TableCell::runs(vec![Run::bold(r.brand_model, BODY)]),
                        TableCell::runs(vec![Run::plain(r.accessories, BODY)]),
                        TableCell::runs(vec![Run::mono(r.serial, BODY)]),
                    ])
                }),
        );

        let delivery_date = Some(self.date(&c.estimated_delivery_date))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| d.blank_line.to_string());

        let blocks = vec![
            Block::Header(Header {
                logo: Some(self.logo.clone()),
                company_name: Some(self.lessor_name().to_string()),
                business_id: None,
                title: DELIVERY_CONFIRMATION_TITLE.to_string(),
                contract_number: None,
            }),
            Block::Paragraph(
                Paragraph::new(vec![
                    Run::bold("Ohje:", BODY),
                    Run::plain(
                        format!(
                            " Allekirjoita ja palauta tämä asiakirja välittömästi kohteen toimituksen jälkeen sähköpostitse osoitteeseen: {email}"
                        ),
                        BODY,
                    ),
                ])
                .shaded(NOTE_SHADE)
                .spaced(4.0, 12.0),
            ),
            self.lessee_table(field(
                "Sopimusnumero",
                Run::mono(self.contract_number.clone(), BODY),
            )),
            table(TableRole::LeaseObjects, &[45.0, 25.0, 30.0], object_rows),
            table(
                TableRole::DeliveryDate,
                &HALF,
                vec![
                    title_row("TOIMITUS", 2),
                    detail(vec![
                        field("Toimituspäivä", Run::bold(delivery_date, BODY)),
                        field(
                            "Toimituspaikka",
                            Run::bold(or_default(&c.usage_location, d.blank_line), BODY),
                        ),
                    ]),
                ],
            ),
            table(
                TableRole::Confirmation,
                &[100.0],
                vec![
                    title_row("VAHVISTUS JA HYVÄKSYNTÄ", 1),
                    detail(vec![TableCell::runs(vec![Run::italic(
                        "Vahvistamme, että yllä mainittu vuokrakohde on toimitettu meille sovitun mukaisesti. Olemme huolellisesti tarkastaneet vuokrakohteen ja hyväksymme sen allekirjoittamalla tämän toimituksen hyväksymisilmoituksen.",
                        BODY,
                    )])]),
                ],
            ),
            Block::Signatures(vec![SignatureBlock {
                title: "VUOKRALLEOTTAJAN ALLEKIRJOITUS".to_string(),
                place_and_date: None,
                signature: None,
                signer_name: None,
            }]),
            Block::Footer(Footer {
                logo: None,
                lines: self.lessor_lines(),
                initials: false,
                page_label: None,
            }),
        ];

        Page {
            kind: PageKind::DeliveryConfirmation,
            blocks,
        }
    }
}
