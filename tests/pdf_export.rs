mod common;

use std::fs;

use leasedoc_pdf::model::{Block, Document, PageKind, Paragraph, Run};
use leasedoc_pdf::{AssembleOptions, Error, assemble, render_pdf};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn renders_one_sheet_per_page() {
    init_logger();
    let doc = assemble(
        &common::full_contract(),
        &common::application(),
        &AssembleOptions::default(),
    );
    let bytes = render_pdf(&doc).expect("render");
    assert!(bytes.starts_with(b"%PDF-"));
    assert_eq!(common::pdf_page_count(&bytes), 4);

    let options = AssembleOptions {
        delivery_confirmation: false,
        ..AssembleOptions::default()
    };
    let doc = assemble(&common::minimal_contract(), &common::application(), &options);
    let bytes = render_pdf(&doc).expect("render");
    assert_eq!(common::pdf_page_count(&bytes), 3);
}

#[test]
fn overflow_continues_on_another_sheet() {
    init_logger();
    let mut c = common::full_contract();
    c.lease_objects = (0..60)
        .map(|i| common::lease_object(&format!("Trukki {i}"), Some(2020)))
        .collect();
    let doc = assemble(&c, &common::application(), &AssembleOptions::default());
    let bytes = render_pdf(&doc).expect("render");
    assert!(common::pdf_page_count(&bytes) > doc.pages.len());
}

#[test]
fn long_contract_number_stays_within_margins() {
    init_logger();
    let mut c = common::full_contract();
    c.contract_number = Some("AB".repeat(20));
    let doc = assemble(&c, &common::application(), &AssembleOptions::default());
    let bytes = render_pdf(&doc).expect("render");

    let rects = common::content_rects(&bytes);
    assert!(!rects.is_empty());
    for [x, _, w, _] in rects {
        assert!(x >= 56.0, "rect starts at {x}");
        assert!(x + w <= 539.5, "rect ends at {}", x + w);
    }
}

#[test]
fn empty_document_is_an_error() {
    let err = render_pdf(&Document { pages: Vec::new() }).expect_err("no pages");
    assert!(matches!(err, Error::Pdf(_)));
}

#[test]
fn unreadable_logo_falls_back_to_monogram() {
    init_logger();
    let options = AssembleOptions {
        logo: Some("tests/fixtures/no-such-logo.png".into()),
        ..AssembleOptions::default()
    };
    let doc = assemble(&common::minimal_contract(), &common::application(), &options);
    let bytes = render_pdf(&doc).expect("render without logo file");
    assert_eq!(common::pdf_page_count(&bytes), 4);
    assert!(!bytes.windows(b"/XObject".len()).any(|w| w == b"/XObject"));
}

#[test]
fn png_logo_is_embedded_as_image() {
    init_logger();
    let dir = common::output_dir("png_logo");
    let logo_path = dir.join("logo.png");
    let logo = image::RgbaImage::from_fn(8, 4, |x, _| {
        if x < 4 {
            image::Rgba([0x05, 0x96, 0x69, 0xff])
        } else {
            image::Rgba([0xff, 0xff, 0xff, 0x00])
        }
    });
    logo.save(&logo_path).expect("write logo");

    let options = AssembleOptions {
        logo: Some(logo_path.to_string_lossy().into_owned()),
        ..AssembleOptions::default()
    };
    let doc = assemble(&common::full_contract(), &common::application(), &options);
    let bytes = render_pdf(&doc).expect("render with logo");
    assert!(bytes.windows(b"/Subtype /Image".len()).any(|w| w == b"/Subtype /Image"));
    assert!(bytes.windows(b"/SMask".len()).any(|w| w == b"/SMask"));
}

#[test]
fn text_outside_winansi_does_not_fail() {
    let mut doc = assemble(
        &common::minimal_contract(),
        &common::application(),
        &AssembleOptions::default(),
    );
    doc.pages[0]
        .blocks
        .push(Block::Paragraph(Paragraph::new(vec![Run::plain(
            "Käyttäjä ✓ 漢字 Ωmega",
            9.0,
        )])));
    assert!(doc.page(PageKind::Contract).is_some());
    let bytes = render_pdf(&doc).expect("render");
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn converts_fixture_bundle_to_file() {
    init_logger();
    let dir = common::output_dir("convert_full");
    let output = dir.join("full.pdf");
    let _ = fs::remove_file(&output);

    leasedoc_pdf::convert_contract_to_pdf(
        &common::fixture("full.json"),
        &output,
        &AssembleOptions::default(),
    )
    .expect("convert full.json");
    let bytes = fs::read(&output).expect("read output");
    assert!(bytes.starts_with(b"%PDF-"));
    assert_eq!(common::pdf_page_count(&bytes), 4);

    let input = fs::read(common::fixture("minimal.json")).expect("read minimal.json");
    let output = dir.join("minimal.pdf");
    leasedoc_pdf::convert_contract_bytes_to_pdf(&input, &output, &AssembleOptions::default())
        .expect("convert minimal.json");
    assert!(output.exists());
}

#[test]
fn invalid_bundle_writes_nothing() {
    let dir = common::output_dir("convert_invalid");
    let output = dir.join("invalid.pdf");
    let _ = fs::remove_file(&output);

    let err = leasedoc_pdf::convert_contract_to_pdf(
        &common::fixture("invalid_rent.json"),
        &output,
        &AssembleOptions::default(),
    )
    .expect_err("invalid bundle");
    assert!(matches!(err, Error::InvalidRecord(_)));
    assert!(!output.exists());
}
