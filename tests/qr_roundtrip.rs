mod common;

use cert_gen::{generate_certificate, render_qr, validation_url, CertificateRequest};
use common::{context, hex, store};

fn decode_grey(width: usize, height: usize, pixel: impl Fn(usize, usize) -> u8) -> String {
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(width, height, pixel);
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "exactly one QR code is found");
    let (_, content) = grids[0].decode().expect("QR code decodes");
    content
}

#[test]
fn rendered_codes_decode_to_the_url() {
    let url = validation_url("https://eventos.example.org/validate/certificate", 100);
    let image = render_qr(&url).expect("can render").to_luma8();
    let decoded = decode_grey(image.width() as usize, image.height() as usize, |x, y| {
        image.get_pixel(x as u32, y as u32).0[0]
    });
    assert_eq!(decoded, "https://eventos.example.org/validate/certificate/100");
}

#[test]
fn certificates_embed_a_scannable_code() {
    let dir = tempfile::tempdir().expect("can create temp dir");
    let request = CertificateRequest::new(100)
        .template(Some(1))
        .validation_url("https://eventos.example.org/validar/");

    let certificate =
        generate_certificate(&context(dir.path()), &store(), &request).expect("certificate is generated");

    let bytes = std::fs::read(&certificate.filepath).expect("can read certificate");
    let raw = String::from_utf8_lossy(&bytes);
    assert!(raw.contains(&hex("Validar certificado")));
    assert!(raw.contains(&hex("ID 100-")));

    let pdf = lopdf::Document::load_mem(&bytes).expect("certificate is a valid PDF");
    let images: Vec<_> = pdf
        .objects
        .values()
        .filter_map(|object| object.as_stream().ok())
        .filter(|stream| {
            stream
                .dict
                .get(b"Subtype")
                .and_then(|subtype| subtype.as_name())
                .map(|name| name == b"Image")
                .unwrap_or(false)
        })
        .collect();
    assert_eq!(images.len(), 1, "only the QR code is embedded");

    let qr = images[0];
    let width = qr.dict.get(b"Width").and_then(|w| w.as_i64()).expect("has width") as usize;
    let height = qr.dict.get(b"Height").and_then(|h| h.as_i64()).expect("has height") as usize;
    let rgb = qr.decompressed_content().expect("image data inflates");
    assert_eq!(rgb.len(), width * height * 3);

    let decoded = decode_grey(width, height, |x, y| rgb[(y * width + x) * 3]);
    assert_eq!(decoded, "https://eventos.example.org/validar/100");
}
