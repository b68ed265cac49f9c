use eframe::egui::{self, ImageSource};

use crate::data::model::ImageRef;

// ---------------------------------------------------------------------------
// Bundled image lookup
// ---------------------------------------------------------------------------

/// Resolve a catalog image reference to its bundled asset.
///
/// Resolution is synchronous and infallible for every reference the catalog
/// produces; a missing file fails the build. A reference outside the bundled
/// range resolves to `None` and the card renders without a picture.
pub fn tip_image(image: ImageRef) -> Option<ImageSource<'static>> {
    let source = match image.0 {
        1 => egui::include_image!("../../assets/tips/breakfast1.png"),
        2 => egui::include_image!("../../assets/tips/breakfast2.png"),
        3 => egui::include_image!("../../assets/tips/breakfast3.png"),
        4 => egui::include_image!("../../assets/tips/breakfast4.png"),
        5 => egui::include_image!("../../assets/tips/breakfast5.png"),
        6 => egui::include_image!("../../assets/tips/breakfast6.png"),
        7 => egui::include_image!("../../assets/tips/breakfast7.png"),
        8 => egui::include_image!("../../assets/tips/breakfast8.png"),
        9 => egui::include_image!("../../assets/tips/breakfast9.png"),
        10 => egui::include_image!("../../assets/tips/breakfast10.png"),
        11 => egui::include_image!("../../assets/tips/breakfast11.png"),
        12 => egui::include_image!("../../assets/tips/breakfast12.png"),
        13 => egui::include_image!("../../assets/tips/breakfast13.png"),
        14 => egui::include_image!("../../assets/tips/breakfast14.png"),
        15 => egui::include_image!("../../assets/tips/breakfast15.png"),
        16 => egui::include_image!("../../assets/tips/breakfast16.png"),
        17 => egui::include_image!("../../assets/tips/breakfast17.png"),
        18 => egui::include_image!("../../assets/tips/breakfast18.png"),
        19 => egui::include_image!("../../assets/tips/breakfast19.png"),
        20 => egui::include_image!("../../assets/tips/breakfast20.png"),
        21 => egui::include_image!("../../assets/tips/breakfast21.png"),
        22 => egui::include_image!("../../assets/tips/breakfast22.png"),
        23 => egui::include_image!("../../assets/tips/breakfast23.png"),
        24 => egui::include_image!("../../assets/tips/breakfast24.png"),
        25 => egui::include_image!("../../assets/tips/breakfast25.png"),
        26 => egui::include_image!("../../assets/tips/breakfast26.png"),
        27 => egui::include_image!("../../assets/tips/breakfast27.png"),
        28 => egui::include_image!("../../assets/tips/breakfast28.png"),
        29 => egui::include_image!("../../assets/tips/breakfast29.png"),
        30 => egui::include_image!("../../assets/tips/breakfast30.png"),
        _ => return None,
    };
    Some(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog;

    #[test]
    fn test_every_catalog_image_resolves() {
        for tip in catalog::builtin().iter() {
            assert!(
                tip_image(tip.image).is_some(),
                "tip {} has no bundled image",
                tip.id
            );
        }
    }

    #[test]
    fn test_out_of_range_ref_is_a_gap() {
        assert!(tip_image(ImageRef(0)).is_none());
        assert!(tip_image(ImageRef(31)).is_none());
    }
}
