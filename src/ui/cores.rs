const CORES_PER_ROW: usize = 4;
const GAP: &str = "  ";

/// One box per core, four to a row, remainder on a shorter last row.
pub fn core_diagram(cores: usize) -> String {
    let full_rows = cores / CORES_PER_ROW;
    let remainder = cores % CORES_PER_ROW;
    let widths = std::iter::repeat_n(CORES_PER_ROW, full_rows)
        .chain((remainder > 0).then_some(remainder));

    let mut out = String::new();
    for width in widths {
        for part in ["+---+", "|   |", "+---+"] {
            out.push_str(&vec![part; width].join(GAP));
            out.push('\n');
        }
    }
    out
}
