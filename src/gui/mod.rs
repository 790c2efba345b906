pub mod context_menu;
pub mod links;
pub mod menu;
pub mod settings;
pub mod state;
pub mod widgets;
pub mod window;

use std::io;

pub fn png_to_rgba(data: &[u8]) -> Result<(Vec<u8>, (usize, usize)), io::Error> {
    let into_io_error = |e: png::DecodingError| io::Error::new(io::ErrorKind::InvalidData, e.to_string());

    let decoder = png::Decoder::new(io::Cursor::new(data));
    let mut reader = decoder.read_info().map_err(into_io_error)?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).map_err(into_io_error)?;
    buf.truncate(info.buffer_size());

    if !matches!(info.bit_depth, png::BitDepth::Eight) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "only 8-bit PNG images are supported",
        ));
    }

    let rgba = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&v| [v, v, v, 255]).collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0], px[1]])
            .collect(),
        png::ColorType::Indexed => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "indexed PNG images are not supported",
            ))
        }
    };
    Ok((rgba, (info.width as usize, info.height as usize)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_png(color_type: png::ColorType, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, 2, 1);
            encoder.set_color(color_type);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        out
    }

    #[test]
    fn grayscale_pixels_are_expanded_to_opaque_rgba() {
        let image = encode_png(png::ColorType::Grayscale, &[0, 255]);
        let (rgba, (width, height)) = png_to_rgba(&image).unwrap();
        assert_eq!((width, height), (2, 1));
        assert_eq!(rgba, vec![0, 0, 0, 255, 255, 255, 255, 255]);
    }

    #[test]
    fn rgb_pixels_gain_an_alpha_channel() {
        let image = encode_png(png::ColorType::Rgb, &[1, 2, 3, 4, 5, 6]);
        let (rgba, _) = png_to_rgba(&image).unwrap();
        assert_eq!(rgba, vec![1, 2, 3, 255, 4, 5, 6, 255]);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(png_to_rgba(b"not a png").is_err());
    }
}
