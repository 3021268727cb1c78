/// Bin color lookup
///
/// The color-coded sort category decides which bin icon is drawn:
/// - Recycle → blue
/// - Organic → green
/// - Non-Recycle → red
/// - Hazardous → yellow
///
/// Values the service isn't supposed to return fall back to a grey bin.

use tracing::warn;

use crate::ui::assets;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinColor {
    Blue,
    Green,
    Red,
    Yellow,
    /// Fallback for unmapped color-sort values
    Grey,
}

const COLOR_MAP: [(&str, BinColor); 4] = [
    ("recycle", BinColor::Blue),
    ("organic", BinColor::Green),
    ("non-recycle", BinColor::Red),
    ("hazardous", BinColor::Yellow),
];

impl BinColor {
    pub fn name(&self) -> &'static str {
        match self {
            BinColor::Blue => "blue",
            BinColor::Green => "green",
            BinColor::Red => "red",
            BinColor::Yellow => "yellow",
            BinColor::Grey => "grey",
        }
    }

    /// Relative path of the bin icon for this color
    pub fn icon_path(&self) -> String {
        assets::trash_bin(self.name())
    }
}

/// Case-insensitive lookup of a color-sort value
pub fn bin_color_for(color_sort: &str) -> BinColor {
    let key = color_sort.trim().to_lowercase();
    match COLOR_MAP.iter().find(|(name, _)| *name == key) {
        Some((_, color)) => *color,
        None => {
            warn!("⚠️  Unmapped color sort {:?}, using grey bin", color_sort);
            BinColor::Grey
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(bin_color_for("RECYCLE"), BinColor::Blue);
        assert_eq!(bin_color_for("Recycle"), BinColor::Blue);
        assert_eq!(bin_color_for("recycle"), BinColor::Blue);
        assert_eq!(bin_color_for("NON-Recycle"), BinColor::Red);
    }

    #[test]
    fn test_every_contract_value_is_mapped() {
        for value in ["Organic", "Recycle", "Non-Recycle", "Hazardous"] {
            assert_ne!(bin_color_for(value), BinColor::Grey, "{} fell back", value);
        }
        assert_eq!(bin_color_for("Organic"), BinColor::Green);
        assert_eq!(bin_color_for("Hazardous"), BinColor::Yellow);
    }

    #[test]
    fn test_unmapped_falls_back_to_grey() {
        assert_eq!(bin_color_for("Compost"), BinColor::Grey);
        assert_eq!(bin_color_for(""), BinColor::Grey);
        assert_eq!(BinColor::Grey.icon_path(), "./assets/trash-bin-grey.svg");
    }

    #[test]
    fn test_icon_paths() {
        assert_eq!(BinColor::Green.icon_path(), "./assets/trash-bin-green.svg");
        assert_eq!(BinColor::Blue.icon_path(), "./assets/trash-bin-blue.svg");
    }
}
