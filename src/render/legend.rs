/// Names of this many characters or more are shortened in the legend.
pub const MAX_LEGEND_NAME_LEN: usize = 64;

/// Shortens long solver names for display in the legend.
///
/// A name of [`MAX_LEGEND_NAME_LEN`] or more characters keeps its first
/// `MAX_LEGEND_NAME_LEN - 4` characters followed by `" ..."`.
pub fn legend_label(name: &str) -> String {
    if name.chars().count() >= MAX_LEGEND_NAME_LEN {
        let kept: String = name.chars().take(MAX_LEGEND_NAME_LEN - 4).collect();
        format!("{kept} ...")
    } else {
        name.to_string()
    }
}
