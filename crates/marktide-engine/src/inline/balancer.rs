//! Matches closing delimiter candidates to compatible openers.
//!
//! This is the core pairing algorithm. It walks a nesting group's descriptors
//! left to right and, for every eligible closer, searches backward for the
//! nearest compatible opener. Two shortcuts keep the pass amortized linear on
//! adversarial input instead of quadratic: consumed regions are hopped over
//! via each descriptor's `jump` distance, and a per-bucket floor remembers
//! how far down an earlier failed search already looked.

use std::collections::HashMap;

use super::delimiter::{Delimiter, NestingGroup};

/// Populates `end` on every matched opener/closer pair in one group.
///
/// Matching is intra-group by construction; callers balance each group
/// separately and no descriptor ever references another group.
pub fn balance(group: &mut NestingGroup) {
    let delims = &mut group.delimiters;
    // Lowest index still worth searching, per (marker, class mod 3) bucket.
    let mut openers_bottom: HashMap<(u8, usize), isize> = HashMap::new();

    for closer_idx in 0..delims.len() {
        if !delims[closer_idx].close || delims[closer_idx].end.is_some() {
            continue;
        }
        let marker = delims[closer_idx].marker;
        let bucket = (marker, delims[closer_idx].class % 3);
        let floor = *openers_bottom.get(&bucket).unwrap_or(&-1);

        let search_start = closer_idx as isize - delims[closer_idx].jump as isize - 1;
        let mut opener_idx = search_start;
        let mut found = None;

        while opener_idx > floor {
            let opener = &delims[opener_idx as usize];
            if opener.marker == marker
                && opener.open
                && opener.end.is_none()
                && !is_odd_match(opener, &delims[closer_idx])
            {
                found = Some(opener_idx as usize);
                break;
            }
            opener_idx -= delims[opener_idx as usize].jump as isize + 1;
        }

        match found {
            Some(oi) => {
                // Later backward scans hop straight over the consumed region.
                let last_jump = if oi > 0 && !delims[oi - 1].open {
                    delims[oi - 1].jump + 1
                } else {
                    0
                };
                delims[closer_idx].jump = closer_idx - oi + last_jump;
                delims[closer_idx].open = false;
                delims[closer_idx].end = Some(oi);
                delims[oi].end = Some(closer_idx);
                delims[oi].jump = last_jump;
                delims[oi].close = false;
            }
            None => {
                // Nothing at or below the start of this failed search can
                // match the bucket for any later closer either.
                openers_bottom.insert(bucket, search_start);
            }
        }
    }
}

/// Rule-of-three exclusion for length-sensitive runs.
///
/// When either side of a candidate pair could both open and close, a combined
/// length divisible by three is rejected unless both lengths are themselves
/// divisible by three. Multiplicity-insensitive descriptors (`class == 0`)
/// are never excluded.
fn is_odd_match(opener: &Delimiter, closer: &Delimiter) -> bool {
    if !(opener.close || closer.open) {
        return false;
    }
    (opener.class + closer.class) % 3 == 0
        && !(opener.class % 3 == 0 && closer.class % 3 == 0)
}
