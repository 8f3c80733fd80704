use crate::error::CertificateError;
use crate::refs::{ObjectReferences, RefType};
use image::codecs::jpeg::JpegDecoder;
use image::{DynamicImage, ExtendedColorType, GenericImageView, ImageDecoder};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};
use std::io::Cursor;
use std::path::{Path, PathBuf};

pub enum RasterImageType {
    /// Baseline RGB JPEGs are copied into the PDF untouched
    DirectlyEmbeddableJpeg(PathBuf),
    Image(DynamicImage),
}

/// A raster image (logo, seal or QR code) that can be placed on a page
pub struct Image {
    pub image: RasterImageType,
    /// width in pixels
    pub width: f32,
    /// height in pixels
    pub height: f32,
}

/// Whether the file itself holds RGB samples. CMYK and greyscale JPEGs decode to
/// RGB too, but their raw bytes cannot be labelled DeviceRGB.
fn is_rgb_jpeg(data: &[u8]) -> Result<bool, CertificateError> {
    let decoder = JpegDecoder::new(Cursor::new(data))?;
    Ok(decoder.original_color_type() == ExtendedColorType::Rgb8)
}

struct EncodeOutput {
    filter: Filter,
    bytes: Vec<u8>,
    mask: Option<Vec<u8>>,
}

impl Image {
    pub fn new_from_disk<P: AsRef<Path>>(path: P) -> Result<Image, CertificateError> {
        let path = path.as_ref();
        let data = std::fs::read(path)?;

        let format = image::guess_format(&data)?;
        let image = image::load_from_memory_with_format(&data, format)?;

        if format == image::ImageFormat::Jpeg && is_rgb_jpeg(&data)? {
            let width = image.width() as f32;
            let height = image.height() as f32;

            return Ok(Image {
                image: RasterImageType::DirectlyEmbeddableJpeg(path.to_path_buf()),
                width,
                height,
            });
        }
        Ok(Self::new_raster(image))
    }

    pub fn new_raster(image: DynamicImage) -> Image {
        let width = image.width() as f32;
        let height = image.height() as f32;
        Image {
            image: RasterImageType::Image(image),
            width,
            height,
        }
    }

    /// width / height of the image in pixels
    pub fn aspect_ratio(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    fn encode(&self) -> Result<EncodeOutput, CertificateError> {
        match &self.image {
            RasterImageType::DirectlyEmbeddableJpeg(path) => {
                let bytes = std::fs::read(path)?;
                Ok(EncodeOutput {
                    filter: Filter::DctDecode,
                    bytes,
                    mask: None,
                })
            }
            RasterImageType::Image(image) => {
                let level = CompressionLevel::DefaultLevel as u8;

                // transparent logos keep their transparency through a soft mask
                let mask = image.color().has_alpha().then(|| {
                    let alphas: Vec<_> = image.pixels().map(|p| (p.2).0[3]).collect();
                    compress_to_vec_zlib(&alphas, level)
                });

                let bytes = compress_to_vec_zlib(image.to_rgb8().as_raw(), level);

                Ok(EncodeOutput {
                    filter: Filter::FlateDecode,
                    bytes,
                    mask,
                })
            }
        }
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        image_index: usize,
        writer: &mut Pdf,
    ) -> Result<(), CertificateError> {
        let id = refs.gen(RefType::Image(image_index));
        let encoded = self.encode()?;

        let mut image = writer.image_xobject(id, encoded.bytes.as_slice());
        image.filter(encoded.filter);
        image.width(self.width as i32);
        image.height(self.height as i32);
        image.color_space().device_rgb();
        image.bits_per_component(8);

        let mask_id = encoded
            .mask
            .as_ref()
            .map(|_| refs.gen(RefType::ImageMask(image_index)));
        if let Some(mask_id) = mask_id {
            image.s_mask(mask_id);
        }
        image.finish();

        if let (Some(mask_id), Some(mask)) = (mask_id, encoded.mask.as_ref()) {
            let mut s_mask = writer.image_xobject(mask_id, mask.as_slice());
            s_mask.filter(Filter::FlateDecode);
            s_mask.width(self.width as i32);
            s_mask.height(self.height as i32);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
        }

        Ok(())
    }
}
