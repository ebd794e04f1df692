//! End-to-end checks of the tabular engine and formatter against the
//! classic worked examples.

use levalign::{
    align_one, align_one_with, edit_distance, edit_distance_with, vertical_alignment, Cell,
    CostFns, Coordinates, DistanceMatrix, Operation, UnitCost,
};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[test]
fn intention_execution() {
    // Jurafsky & Martin, 2nd ed., pp. 73-77.
    let source = chars("intention");
    let target = chars("execution");
    let matrix = DistanceMatrix::build(&source, &target, &UnitCost);
    assert_eq!(
        *matrix.cell(Coordinates::new(9, 9)),
        Cell {
            cost: 0.0,
            cumulative: 8.0,
            operation: Operation::Substitute,
        }
    );
    assert_eq!(matrix.min_cost(), 8.0);
    assert_eq!(
        vertical_alignment(&matrix.backtrace()),
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
fn identity_is_all_equal_substitutes() {
    let s = chars("intention");
    assert_eq!(edit_distance(&s, &s), 0.0);
    assert_eq!(
        vertical_alignment(&align_one(&s, &s)),
        "i = i  0\n\
         n = n  0\n\
         t = t  0\n\
         e = e  0\n\
         n = n  0\n\
         t = t  0\n\
         i = i  0\n\
         o = o  0\n\
         n = n  0"
    );
}

#[test]
fn llach_llam() {
    let source = chars("llach");
    let target = chars("llam");
    assert_eq!(edit_distance(&source, &target), 3.0);
    assert_eq!(
        vertical_alignment(&align_one(&source, &target)),
        "l = l  0\n\
         l = l  0\n\
         a = a  0\n\
         c >    1\n\
         h ~ m  2"
    );
}

#[test]
fn dag_doge() {
    let source = chars("dag");
    let target = chars("doge");
    assert_eq!(edit_distance(&source, &target), 3.0);
    assert_eq!(
        vertical_alignment(&align_one(&source, &target)),
        "d = d  0\n\
         a ~ o  2\n\
         g = g  0\n\
         \u{20} < e  1"
    );
}

#[test]
fn cat_coats_backtrace_steps() {
    let source = chars("cat");
    let target = chars("coats");
    let path = align_one(&source, &target);
    let steps = path.steps();
    assert_eq!(steps[0].source, Some('c'));
    assert_eq!(steps[0].target, Some('c'));
    assert_eq!(steps[0].operation, Operation::Substitute);
    assert_eq!(steps[0].cumulative, 0.0);
    assert_eq!(steps[1].source, None);
    assert_eq!(steps[1].target, Some('o'));
    assert_eq!(steps[1].operation, Operation::Insert);
    assert_eq!(steps[1].cumulative, 1.0);
    assert_eq!(steps[2].source, Some('a'));
    assert_eq!(steps[2].target, Some('a'));
    assert_eq!(steps[2].cumulative, 1.0);
}

#[test]
fn letter_sensitive_insert_costs() {
    // Inserting non-letter symbols is nearly free.
    let costs = CostFns {
        insert: |c: &char| if c.is_alphabetic() { 1.0 } else { 0.2 },
        delete: |_: &char| 1.0,
        substitute: |a: &char, b: &char| if a == b { 0.0 } else { 2.0 },
    };
    let source = chars("cowgirl");
    let target = chars("cow-girls");
    assert_eq!(edit_distance_with(&source, &target, &costs), 1.2);
    assert_eq!(
        vertical_alignment(&align_one_with(&source, &target, &costs)),
        "c = c  0\n\
         o = o  0\n\
         w = w  0\n\
         \u{20} < -  0.2\n\
         g = g  0\n\
         i = i  0\n\
         r = r  0\n\
         l = l  0\n\
         \u{20} < s  1"
    );
}

#[test]
fn cheap_deletion_of_combining_circumflex() {
    let costs = CostFns {
        insert: |_: &char| 1.0,
        delete: |c: &char| if *c == '\u{302}' { 0.3 } else { 1.0 },
        substitute: |a: &char, b: &char| if a == b { 0.0 } else { 2.0 },
    };
    // "être" in decomposed form: the circumflex is its own element.
    let source = chars("e\u{302}tre");
    let target = chars("etr");
    assert_eq!(edit_distance_with(&source, &target, &costs), 1.3);
    assert_eq!(
        vertical_alignment(&align_one_with(&source, &target, &costs)),
        "e = e  0\n\
         \u{20}\u{302} >    0.3\n\
         t = t  0\n\
         r = r  0\n\
         e >    1"
    );
}

#[test]
fn euclidean_substitution_cost() {
    let costs = CostFns {
        insert: |_: &char| 1.0,
        delete: |_: &char| 1.0,
        substitute: |a: &char, b: &char| {
            if a == b {
                0.0
            } else {
                std::f64::consts::SQRT_2
            }
        },
    };
    let source = chars("bard");
    let target = chars("bart");
    assert_eq!(
        edit_distance_with(&source, &target, &costs),
        std::f64::consts::SQRT_2
    );
    assert_eq!(
        vertical_alignment(&align_one_with(&source, &target, &costs)),
        "b = b  0\n\
         a = a  0\n\
         r = r  0\n\
         d ~ t  1.4142135623730951"
    );
}

#[test]
fn grapheme_units_and_numbers() {
    assert_eq!(
        vertical_alignment(&align_one(&["ll", "a", "ch"], &["ll", "a", "m"])),
        "ll = ll  0\n\
         \u{20}a = a   0\n\
         ch ~ m   2"
    );
    assert_eq!(
        vertical_alignment(&align_one(&[6u32, 78, 5], &[6u32, 79, 5])),
        "\u{20}6 = 6   0\n\
         78 ~ 79  2\n\
         \u{20}5 = 5   0"
    );
}
