use crate::pipeline::word_count::WordFrequencies;

const BAR: char = '█';


/// Horizontal bar chart of the `top_n` most frequent words, most frequent on top.
///
/// The longest bar is `width` columns; the others are scaled to it. Every listed word
/// gets at least one column.
pub fn render_bar_chart(frequencies: &WordFrequencies, top_n: usize, width: usize) -> String {
    let top = frequencies.top_n(top_n);
    let mut out = format!("Top {} Most Frequent Words\n", top_n);
    if top.is_empty() {
        out.push_str("(no words)\n");
        return out;
    }

    let label_width = top.iter().map(|(w, _)| w.chars().count()).max().unwrap_or(0);
    let max_count = top[0].1;

    for (word, count) in top.iter() {
        let bar: String = std::iter::repeat(BAR).take(bar_len(*count, max_count, width)).collect();
        let pad = " ".repeat(label_width - word.chars().count());
        out.push_str(&format!("{}{} | {} {}\n", word, pad, bar, count));
    }

    // x axis
    let margin = " ".repeat(label_width);
    out.push_str(&format!("{} +{}\n", margin, "-".repeat(width + 1)));
    out.push_str(&format!("{}   Frequency\n", margin));
    return out;
}

fn bar_len(count: u64, max_count: u64, width: usize) -> usize {
    if max_count == 0 {
        return 0;
    }
    let scaled = (count as f64 / max_count as f64 * width as f64).round() as usize;
    return scaled.max(1);
}
