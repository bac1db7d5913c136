//! Order tickets within a bucket.
//!
//! Every function here returns a fresh sequence; the caller's slice is never
//! reordered, so previously derived buckets stay intact.

use std::cmp::Ordering;

use feruca::Collator;

use crate::types::{OrderDimension, Ticket};

/// Order tickets by the given dimension (stable).
pub fn order<'a>(tickets: &[&'a Ticket], dimension: OrderDimension) -> Vec<&'a Ticket> {
    let mut ordered = tickets.to_vec();
    match dimension {
        OrderDimension::Priority => ordered.sort_by_key(|t| t.priority_level().rank()),
        OrderDimension::Title => {
            let mut collator = Collator::default();
            ordered.sort_by(|a, b| collate_titles(&mut collator, &a.title, &b.title));
        }
    }
    ordered
}

/// Locale-aware title comparison using the Unicode Collation Algorithm
/// with the CLDR root collation.
///
/// Base letters decide first, so accented letters sort with their
/// unaccented forms (`"éclair" < "fig"`). Accents and then case break ties,
/// with lowercase first (`"a" < "A"`), and raw code point order breaks any
/// remaining tie.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    collate_titles(&mut Collator::default(), a, b)
}

fn collate_titles(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator.collate(a, b).then_with(|| a.cmp(b))
}
