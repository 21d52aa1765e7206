use indexmap::IndexMap;
use std::sync::RwLock;

use crate::models::Guest;

/// In-memory guest book, held as Rocket managed state for the lifetime of
/// the server process.
///
/// Rocket dispatches handlers from a thread pool, so the map sits behind
/// an `RwLock`; each method holds the lock for a single map operation.
pub struct GuestBook {
    guests: RwLock<IndexMap<String, Guest>>,
}

impl GuestBook {
    pub fn new() -> GuestBook {
        GuestBook {
            guests: RwLock::new(IndexMap::new()),
        }
    }

    /// Inserts or overwrites the entry under `guest.name`. An overwrite
    /// keeps the guest's original position in listing order.
    pub fn put(&self, guest: Guest) {
        self.guests
            .write()
            .unwrap()
            .insert(guest.name.clone(), guest);
    }

    pub fn get(&self, name: &str) -> Option<Guest> {
        self.guests.read().unwrap().get(name).cloned()
    }

    /// Every guest, in the order first added.
    pub fn list(&self) -> Vec<Guest> {
        self.guests.read().unwrap().values().cloned().collect()
    }

    /// Empties the book. Test hook only; no route reaches it.
    pub fn clear(&self) {
        self.guests.write().unwrap().clear();
    }
}

impl Default for GuestBook {
    fn default() -> GuestBook {
        GuestBook::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guest(name: &str, restriction: &str) -> Guest {
        Guest {
            name: name.to_string(),
            guest_of: "Molly".to_string(),
            is_family: String::new(),
            restriction: restriction.to_string(),
            p1: "1?".to_string(),
            p1_name: String::new(),
            p1_restriction: String::new(),
        }
    }

    #[test]
    fn put_then_get_round_trips() {
        let book = GuestBook::new();
        assert_eq!(book.get("anna"), None);

        book.put(guest("anna", "none"));
        assert_eq!(book.get("anna"), Some(guest("anna", "none")));
        assert_eq!(book.get("ann"), None);
    }

    #[test]
    fn list_follows_insertion_order() {
        let book = GuestBook::new();
        assert!(book.list().is_empty());

        book.put(guest("anna", "none"));
        book.put(guest("bea", "none"));
        book.put(guest("carl", "none"));
        let names: Vec<String> = book.list().into_iter().map(|g| g.name).collect();
        assert_eq!(names, ["anna", "bea", "carl"]);
    }

    #[test]
    fn overwrite_replaces_in_place() {
        let book = GuestBook::new();
        book.put(guest("anna", "none"));
        book.put(guest("bea", "none"));
        book.put(guest("anna", "vegan"));

        let listed = book.list();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0], guest("anna", "vegan"));
        assert_eq!(listed[1], guest("bea", "none"));
    }

    #[test]
    fn clear_empties_the_book() {
        let book = GuestBook::new();
        book.put(guest("anna", "none"));
        book.clear();
        assert!(book.list().is_empty());
        assert_eq!(book.get("anna"), None);
    }
}
