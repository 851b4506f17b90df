use std::collections::HashMap;
use std::path::Path;

use pdf_writer::{Filter, Pdf, Ref};

use crate::model::{Block, Document, Logo};

#[derive(Clone, Copy, Debug, PartialEq)]
enum ImageFormat {
    Jpeg,
    Png,
}

/// An embedded logo image, addressable from any page's resources.
pub(super) struct LogoImage {
    pub(super) pdf_name: String,
    pub(super) xobj_ref: Ref,
    /// Pixel width over pixel height.
    pub(super) aspect: f32,
}

pub(super) type LogoSet = HashMap<String, LogoImage>;

fn image_dimensions(data: &[u8]) -> Option<(u32, u32, ImageFormat)> {
    // JPEG: starts with FF D8
    if data.len() >= 2 && data[0] == 0xFF && data[1] == 0xD8 {
        let mut i = 2;
        while i + 4 < data.len() {
            if data[i] != 0xFF {
                return None;
            }
            let marker = data[i + 1];
            if marker == 0xD9 {
                break;
            }
            let len = u16::from_be_bytes([data[i + 2], data[i + 3]]) as usize;
            if (marker == 0xC0 || marker == 0xC1 || marker == 0xC2) && i + 9 < data.len() {
                let height = u16::from_be_bytes([data[i + 5], data[i + 6]]) as u32;
                let width = u16::from_be_bytes([data[i + 7], data[i + 8]]) as u32;
                return Some((width, height, ImageFormat::Jpeg));
            }
            i += 2 + len;
        }
        return None;
    }

    // PNG: dimensions in IHDR chunk at bytes 16-23
    if data.len() >= 24 && data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        let width = u32::from_be_bytes([data[16], data[17], data[18], data[19]]);
        let height = u32::from_be_bytes([data[20], data[21], data[22], data[23]]);
        return Some((width, height, ImageFormat::Png));
    }

    None
}

fn read_logo(uri: &str) -> Option<Vec<u8>> {
    if uri.starts_with("http://") || uri.starts_with("https://") {
        log::warn!("Logo {uri} is remote; only local files are embedded");
        return None;
    }
    let path = Path::new(uri.strip_prefix("file://").unwrap_or(uri));
    match std::fs::read(path) {
        Ok(data) => Some(data),
        Err(e) => {
            log::warn!("Cannot read logo {}: {e}", path.display());
            None
        }
    }
}

fn logo_uris(doc: &Document) -> Vec<&str> {
    let mut uris: Vec<&str> = Vec::new();
    for block in doc.pages.iter().flat_map(|p| p.blocks.iter()) {
        let logo = match block {
            Block::Header(h) => h.logo.as_ref(),
            Block::Footer(f) => f.logo.as_ref(),
            _ => None,
        };
        if let Some(Logo::Image { uri, .. }) = logo {
            if !uris.contains(&uri.as_str()) {
                uris.push(uri);
            }
        }
    }
    uris
}

/// Embed every distinct logo image the document references. Images that
/// cannot be read or decoded are left out, and their blocks fall back to
/// the monogram.
pub(super) fn embed_logos(
    doc: &Document,
    pdf: &mut Pdf,
    alloc: &mut impl FnMut() -> Ref,
) -> LogoSet {
    let mut logos = LogoSet::new();

    for uri in logo_uris(doc) {
        let Some(data) = read_logo(uri) else {
            continue;
        };
        let Some((pixel_width, pixel_height, format)) = image_dimensions(&data) else {
            log::warn!("Logo {uri} is neither PNG nor JPEG");
            continue;
        };
        if pixel_width == 0 || pixel_height == 0 {
            log::warn!("Logo {uri} has no pixels");
            continue;
        }

        let xobj_ref = alloc();
        match format {
            ImageFormat::Jpeg => {
                let mut xobj = pdf.image_xobject(xobj_ref, &data);
                xobj.filter(Filter::DctDecode);
                xobj.width(pixel_width as i32);
                xobj.height(pixel_height as i32);
                xobj.color_space().device_rgb();
                xobj.bits_per_component(8);
            }
            ImageFormat::Png => {
                let cursor = std::io::Cursor::new(&data);
                let reader = image::ImageReader::with_format(
                    std::io::BufReader::new(cursor),
                    image::ImageFormat::Png,
                );
                let decoded = match reader.decode() {
                    Ok(decoded) => decoded,
                    Err(e) => {
                        log::warn!("Cannot decode logo {uri}: {e}");
                        continue;
                    }
                };
                let rgba: image::RgbaImage = decoded.to_rgba8();
                let (w, h) = (rgba.width(), rgba.height());
                let has_alpha = rgba.pixels().any(|p| p.0[3] < 255);

                let rgb_data: Vec<u8> = rgba
                    .pixels()
                    .flat_map(|p| [p.0[0], p.0[1], p.0[2]])
                    .collect();
                let compressed_rgb = miniz_oxide::deflate::compress_to_vec_zlib(&rgb_data, 6);

                let smask_ref = if has_alpha {
                    let alpha_data: Vec<u8> = rgba.pixels().map(|p| p.0[3]).collect();
                    let compressed_alpha =
                        miniz_oxide::deflate::compress_to_vec_zlib(&alpha_data, 6);
                    let mask_ref = alloc();
                    let mut mask = pdf.image_xobject(mask_ref, &compressed_alpha);
                    mask.filter(Filter::FlateDecode);
                    mask.width(w as i32);
                    mask.height(h as i32);
                    mask.color_space().device_gray();
                    mask.bits_per_component(8);
                    Some(mask_ref)
                } else {
                    None
                };

                let mut xobj = pdf.image_xobject(xobj_ref, &compressed_rgb);
                xobj.filter(Filter::FlateDecode);
                xobj.width(w as i32);
                xobj.height(h as i32);
                xobj.color_space().device_rgb();
                xobj.bits_per_component(8);
                if let Some(mask_ref) = smask_ref {
                    xobj.s_mask(mask_ref);
                }
            }
        }

        let pdf_name = format!("Im{}", logos.len() + 1);
        log::debug!("embed_logos: {pdf_name} = {uri} ({pixel_width}x{pixel_height} {format:?})");
        logos.insert(
            uri.to_string(),
            LogoImage {
                pdf_name,
                xobj_ref,
                aspect: pixel_width as f32 / pixel_height as f32,
            },
        );
    }

    logos
}
