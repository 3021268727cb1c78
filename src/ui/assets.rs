/// Icons shipped next to the binary, referenced relative to the working directory

pub const CHECKED: &str = "./assets/checked.svg";

/// Shown inside the loading indicator
pub const LOADING: &str = "./assets/bin.svg";

/// Bin icon for a lowercase color name (e.g., "green")
pub fn trash_bin(color: &str) -> String {
    format!("./assets/trash-bin-{}.svg", color)
}
