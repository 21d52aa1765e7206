//! Per-host guest tallies, as shown in the guest-list summary.

use crate::models::{Family, Guest, PlusOne};

/// Guests invited by `host`, in the order they appear in `guests`.
pub fn host_guests(host: &str, guests: &[Guest]) -> Vec<Guest> {
    guests
        .iter()
        .filter(|g| g.guest_of == host)
        .cloned()
        .collect()
}

/// Number of family guests. Filtering to one host is up to the caller.
pub fn family_count(guests: &[Guest]) -> usize {
    guests.iter().filter(|g| g.family() == Family::Yes).count()
}

/// Fewest people who can show up: every guest, plus confirmed plus-ones.
pub fn min_attendance(guests: &[Guest]) -> usize {
    guests
        .iter()
        .map(|g| match g.plus_one() {
            PlusOne::Confirmed => 2,
            _ => 1,
        })
        .sum()
}

/// Most people who can show up: unconfirmed plus-ones count too.
pub fn max_attendance(guests: &[Guest]) -> usize {
    guests
        .iter()
        .map(|g| match g.plus_one() {
            PlusOne::Confirmed | PlusOne::Unknown => 2,
            _ => 1,
        })
        .sum()
}

/// Attendance for the summary line: a single number when exact, otherwise
/// "min-max".
pub fn attendance_range(guests: &[Guest]) -> String {
    let min = min_attendance(guests);
    let max = max_attendance(guests);
    if min == max {
        max.to_string()
    } else {
        format!("{min}-{max}")
    }
}
