//! Plaintext rendering of alignments.
//!
//! [`vertical_alignment`] lays out one step per line: the source element
//! (blank for insertions), a one-character operator, the target element
//! (blank for deletions), and the step's incremental cost. Column widths are
//! sized to the widest element in each column, measured in display cells so
//! that combining diacritics do not skew the table.

use std::fmt::Display;

use unicode_width::UnicodeWidthStr;

use crate::path::{AlignmentPath, AlignmentStep, Operation};

/// Approximate width of `text` in a monospaced font.
///
/// Combining marks occupy no display cell, so precomposed and decomposed
/// representations of the same visible character measure equally:
///
/// ```
/// use levalign::print_width;
///
/// assert_eq!(print_width("abc"), 3);
/// assert_eq!(print_width("abb\u{e9}"), 4); // é precomposed
/// assert_eq!(print_width("abbe\u{301}"), 4); // e + combining acute
/// ```
pub fn print_width(text: &str) -> usize {
    text.width()
}

fn rendered<T: Display>(element: &Option<T>) -> String {
    // An absent element still occupies one display cell, so a column that is
    // absent in every step keeps width 1.
    element.as_ref().map_or_else(|| " ".to_string(), |e| e.to_string())
}

fn column_width<T: Display>(steps: &[AlignmentStep<T>], source_side: bool) -> usize {
    steps
        .iter()
        .map(|step| {
            let text = if source_side {
                rendered(&step.source)
            } else {
                rendered(&step.target)
            };
            print_width(&text)
        })
        .max()
        .unwrap_or(0)
}

fn operator<T: PartialEq>(step: &AlignmentStep<T>) -> char {
    match step.operation {
        Operation::Insert => '<',
        Operation::Delete => '>',
        Operation::Substitute => {
            if step.source == step.target {
                '='
            } else {
                '~'
            }
        }
        Operation::Start => unreachable!("start never appears in a step"),
    }
}

/// Render a cost as an integer when it has no fractional part, else as its
/// natural decimal representation. `f64` Display already does exactly this
/// (`2.0` prints as `2`, `0.2` as `0.2`), at any magnitude.
fn rendered_cost(cost: f64) -> String {
    format!("{cost}")
}

/// Pad `text` on the left to `width` display cells.
fn left_padded(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(print_width(text));
    format!("{}{}", " ".repeat(pad), text)
}

/// Pad `text` on the right to `width` display cells.
fn right_padded(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(print_width(text));
    format!("{}{}", text, " ".repeat(pad))
}

/// Render a path as a fixed-column plaintext table, one step per line.
///
/// Each line shows the left-padded source element (blank for an insertion),
/// the operator (`<` insert, `>` delete, `=` substitute of equal elements,
/// `~` substitute of unequal ones), the right-padded target element (blank
/// for a deletion), two spaces, and the step's incremental cost. Lines are
/// joined with newlines, without a trailing one.
///
/// ```
/// use levalign::{align_one, vertical_alignment};
///
/// let source: Vec<char> = "dag".chars().collect();
/// let target: Vec<char> = "doge".chars().collect();
/// let table = vertical_alignment(&align_one(&source, &target));
/// assert_eq!(table, "d = d  0\na ~ o  2\ng = g  0\n  < e  1");
/// ```
pub fn vertical_alignment<T: Display + PartialEq>(path: &AlignmentPath<T>) -> String {
    let steps = path.steps();
    let source_width = column_width(steps, true);
    let target_width = column_width(steps, false);

    let lines: Vec<String> = steps
        .iter()
        .map(|step| {
            format!(
                "{} {} {}  {}",
                left_padded(&rendered(&step.source), source_width),
                operator(step),
                right_padded(&rendered(&step.target), target_width),
                rendered_cost(step.cost)
            )
        })
        .collect();
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align_one;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn print_width_ignores_combining_marks() {
        assert_eq!(print_width("a"), 1);
        assert_eq!(print_width(""), 0);
        assert_eq!(print_width("e\u{30c}"), 1); // e + combining caron
        assert_eq!(print_width("\u{11b}"), 1); // ě precomposed
    }

    #[test]
    fn cost_renders_integer_when_whole() {
        assert_eq!(rendered_cost(0.0), "0");
        assert_eq!(rendered_cost(2.0), "2");
        assert_eq!(rendered_cost(0.2), "0.2");
        assert_eq!(rendered_cost(std::f64::consts::SQRT_2), "1.4142135623730951");
        // Whole values beyond i64 range still render exactly.
        assert_eq!(rendered_cost(1.0e19), "10000000000000000000");
    }

    #[test]
    fn fully_absent_column_occupies_one_cell() {
        let source = chars("cat");
        let target: Vec<char> = Vec::new();
        assert_eq!(
            vertical_alignment(&align_one(&source, &target)),
            "c >    1\na >    1\nt >    1"
        );
        assert_eq!(
            vertical_alignment(&align_one(&target, &source)),
            "\u{20} < c  1\n\u{20} < a  1\n\u{20} < t  1"
        );
    }

    #[test]
    fn canonical_intention_execution_table() {
        let table = vertical_alignment(&align_one(&chars("intention"), &chars("execution")));
        assert_eq!(
            table,
            "i >    1\n\
             n ~ e  2\n\
             t ~ x  2\n\
             e = e  0\n\
             \u{20} < c  1\n\
             n ~ u  2\n\
             t = t  0\n\
             i = i  0\n\
             o = o  0\n\
             n = n  0"
        );
    }

    #[test]
    fn wide_elements_align_into_columns() {
        let source = ["ll", "a", "ch"];
        let target = ["ll", "a", "m"];
        let table = vertical_alignment(&align_one(&source, &target));
        assert_eq!(table, "ll = ll  0\n a = a   0\nch ~ m   2");
    }

    #[test]
    fn numeric_elements_format_through_display() {
        let source = [6u32, 78, 5];
        let target = [6u32, 79, 5];
        let table = vertical_alignment(&align_one(&source, &target));
        assert_eq!(table, " 6 = 6   0\n78 ~ 79  2\n 5 = 5   0");
    }

    #[test]
    fn empty_path_renders_empty_string() {
        let source: Vec<char> = Vec::new();
        let target: Vec<char> = Vec::new();
        assert_eq!(vertical_alignment(&align_one(&source, &target)), "");
    }
}
