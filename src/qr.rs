//! QR codes pointing at the page that validates a certificate.

use crate::error::CertificateError;
use crate::models::ParticipantId;
use image::{DynamicImage, GrayImage, Luma};
use qrcode::{Color, EcLevel, QrCode};

/// Blank modules around the code, as scanners expect
pub const QUIET_ZONE: u32 = 4;
/// Pixels per module; the code is printed at a few centimetres, so this stays crisp
pub const MODULE_PIXELS: u32 = 8;

/// The URL a participant's QR code points at
pub fn validation_url(base: &str, participant_id: ParticipantId) -> String {
    format!("{}/{participant_id}", base.trim_end_matches('/'))
}

/// Encode `url` as a square greyscale image at error-correction level M
pub fn render_qr(url: &str) -> Result<DynamicImage, CertificateError> {
    let code = QrCode::with_error_correction_level(url.as_bytes(), EcLevel::M)?;
    let modules = code.width() as u32;
    let colours = code.to_colors();

    let side = (modules + 2 * QUIET_ZONE) * MODULE_PIXELS;
    let image = GrayImage::from_fn(side, side, |x, y| {
        let mx = (x / MODULE_PIXELS) as i64 - QUIET_ZONE as i64;
        let my = (y / MODULE_PIXELS) as i64 - QUIET_ZONE as i64;
        let inside = (0..modules as i64).contains(&mx) && (0..modules as i64).contains(&my);
        let dark =
            inside && colours[(my as usize) * modules as usize + mx as usize] == Color::Dark;
        if dark {
            Luma([0u8])
        } else {
            Luma([255u8])
        }
    });

    log::debug!("Encoded {url} as a {modules}x{modules} QR code");
    Ok(DynamicImage::ImageLuma8(image))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(image: &DynamicImage) -> String {
        let grey = image.to_luma8();
        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
            grey.width() as usize,
            grey.height() as usize,
            |x, y| grey.get_pixel(x as u32, y as u32).0[0],
        );
        let grids = prepared.detect_grids();
        assert_eq!(grids.len(), 1);
        let (_, content) = grids[0].decode().expect("can decode QR code");
        content
    }

    #[test]
    fn urls_join_without_double_slashes() {
        assert_eq!(
            validation_url("https://example.org/validar/", 42),
            "https://example.org/validar/42"
        );
        assert_eq!(validation_url("http://x", 7), "http://x/7");
    }

    #[test]
    fn codes_decode_to_the_url() {
        let url = "https://certificados.example.org/validate/certificate/1234";
        let image = render_qr(url).expect("can render");
        let grey = image.to_luma8();
        assert_eq!(grey.width(), grey.height());
        assert_eq!(grey.width() % MODULE_PIXELS, 0);
        assert_eq!(decode(&image), url);
    }

    #[test]
    fn same_url_same_image() {
        let a = render_qr("https://example.org/1").expect("can render");
        let b = render_qr("https://example.org/1").expect("can render");
        assert_eq!(a.to_luma8().as_raw(), b.to_luma8().as_raw());
    }

    #[test]
    fn quiet_zone_is_blank() {
        let image = render_qr("https://example.org/1").expect("can render").to_luma8();
        let border = QUIET_ZONE * MODULE_PIXELS;
        for x in 0..image.width() {
            for y in 0..border {
                assert_eq!(image.get_pixel(x, y).0[0], 255);
            }
        }
    }
}
