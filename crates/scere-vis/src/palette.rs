//! Fixed palette of the per-chromosome 3D view.

/// One color per chromosome, 1..=16.
pub const CHROMOSOME_COLORS: [&str; 16] = [
    "darkred",
    "red",
    "darkorange",
    "orange",
    "gold",
    "green",
    "mediumseagreen",
    "turquoise",
    "deepskyblue",
    "dodgerblue",
    "blueviolet",
    "purple",
    "magenta",
    "deeppink",
    "crimson",
    "black",
];

/// (values, colors) pairs for coloring by chromosome id.
pub fn chromosome_palette() -> (Vec<String>, Vec<String>) {
    let values = (1..=16).map(|id: u8| id.to_string()).collect();
    let colors = CHROMOSOME_COLORS.iter().map(|color| color.to_string()).collect();
    (values, colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_covers_all_sixteen_chromosomes() {
        let (values, colors) = chromosome_palette();
        assert_eq!(values.len(), 16);
        assert_eq!(colors.len(), 16);
        assert_eq!(values[0], "1");
        assert_eq!(colors[15], "black");
    }
}
