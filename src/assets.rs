use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::warn;

/// Loads every image in `dir` into a texture keyed by file stem
/// ("speed.jpg" -> "speed"). A missing or unreadable directory is tolerated:
/// the page draws placeholder art for any key it cannot find. Individual
/// unreadable files are logged and skipped.
pub fn load_art(rl: &mut RaylibHandle, thread: &RaylibThread, dir: &Path) -> HashMap<String, Texture2D> {
    let mut art = HashMap::new();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("assets directory {:?} unavailable, using placeholder art: {}", dir, e);
            return art;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()).map(str::to_lowercase) else {
            continue;
        };
        match ext.as_str() {
            "png" | "jpg" | "jpeg" | "bmp" | "gif" => {}
            _ => continue,
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        match load_texture_with_exif_rotation(rl, thread, &path) {
            Ok(texture) => {
                art.insert(stem.to_string(), texture);
            }
            Err(e) => warn!("skipping {:?}: {:#}", path.file_name().unwrap_or_default(), e),
        }
    }
    art
}

/// Loads an image and bakes its EXIF orientation into the texture so slides
/// and showcase art never render sideways.
fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes =
        fs::read(image_path).with_context(|| format!("failed to read {:?}", image_path))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // EXIF is only read reliably from JPEG containers.
    let mut orientation = 1;
    if extension == "jpg" || extension == "jpeg" {
        match Reader::new().read_from_container(&mut Cursor::new(&file_bytes)) {
            Ok(exif) => {
                if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                    if let Value::Short(values) = &field.value {
                        if let Some(value) = values.first() {
                            orientation = *value;
                        }
                    }
                }
            }
            Err(e) => {
                warn!("no EXIF data for {:?}: {}", image_path.file_name().unwrap_or_default(), e);
            }
        }
    }

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| anyhow::anyhow!("failed to decode {:?}: {}", image_path, e))?;

    // 1 = normal, 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW.
    // Orientations involving flips are ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow::anyhow!("failed to create texture for {:?}: {}", image_path, e))
}
