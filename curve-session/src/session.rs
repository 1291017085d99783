//! Material comparison session: an ordered, capped list of named curve
//! results with a visibility flag each.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CurveError, CurveResult};

/// Default number of materials a session can hold before it must be cleared
pub const DEFAULT_CAPACITY: usize = 10;

/// One point of a stress-strain curve as returned by the calculation service
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub strain: f64,
    pub stress: f64,
}

impl CurvePoint {
    pub fn new(strain: f64, stress: f64) -> Self {
        Self { strain, stress }
    }
}

/// Entry identifier: creation time in milliseconds since the Unix epoch,
/// bumped when two entries land in the same millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntryId(pub i64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One named calculation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialEntry {
    pub id: EntryId,
    pub name: String,
    pub data: Vec<CurvePoint>,
    pub visible: bool,
}

/// Yes/no prompt consulted before destructive actions
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// Ticket for a calculation in flight. Carries the name typed when the
/// request was issued and the clear generation it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEntry {
    name: String,
    generation: u64,
}

impl PendingEntry {
    pub fn name(&self) -> &str {
        &self.name
    }
}

pub const CLEAR_PROMPT: &str = "Remove all materials from the comparison?";

/// In-memory session owned by a single UI for its lifetime
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    entries: Vec<MaterialEntry>,
    capacity: usize,
    last_id: Option<EntryId>,
    generation: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
            last_id: None,
            generation: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[MaterialEntry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&MaterialEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn visible_entries(&self) -> impl Iterator<Item = &MaterialEntry> {
        self.entries.iter().filter(|e| e.visible)
    }

    /// Most recently added entry that is currently shown
    pub fn latest_visible(&self) -> Option<&MaterialEntry> {
        self.entries.iter().rev().find(|e| e.visible)
    }

    /// Append a new visible entry. Fails without touching the session when it
    /// is already at capacity.
    pub fn add_entry(&mut self, name: &str, points: Vec<CurvePoint>) -> CurveResult<&MaterialEntry> {
        if self.is_full() {
            tracing::warn!("Session full ({} materials), refusing new entry", self.len());
            return Err(CurveError::Capacity(self.capacity));
        }

        let name = resolve_name(name, self.entries.len());
        let id = self.next_id();
        tracing::info!("Adding material '{}' ({} points) as {}", name, points.len(), id);

        self.entries.push(MaterialEntry {
            id,
            name,
            data: points,
            visible: true,
        });
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Flip visibility of the entry with `id`. Returns false if there is none.
    pub fn toggle_visibility(&mut self, id: EntryId) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.visible = !entry.visible;
                tracing::debug!("Material {} visible={}", id, entry.visible);
                true
            }
            None => false,
        }
    }

    /// Empty the session after the user agrees. Returns whether it was cleared.
    pub fn clear(&mut self, confirm: &mut impl Confirm) -> bool {
        if !confirm.confirm(CLEAR_PROMPT) {
            return false;
        }
        tracing::info!("Clearing session ({} materials)", self.entries.len());
        self.entries.clear();
        self.generation += 1;
        true
    }

    /// Start a calculation. Blocked up front when the session is full.
    pub fn begin_request(&self, name: &str) -> CurveResult<PendingEntry> {
        if self.is_full() {
            return Err(CurveError::Capacity(self.capacity));
        }
        Ok(PendingEntry {
            name: name.to_string(),
            generation: self.generation,
        })
    }

    /// Land the result of a calculation started with [`Session::begin_request`].
    /// Results of requests issued before a clear are dropped and `Ok(None)`
    /// is returned.
    pub fn complete(
        &mut self,
        pending: PendingEntry,
        points: Vec<CurvePoint>,
    ) -> CurveResult<Option<&MaterialEntry>> {
        if pending.generation != self.generation {
            tracing::info!(
                "Discarding result for '{}': session was cleared while it was in flight",
                pending.name
            );
            return Ok(None);
        }
        self.add_entry(&pending.name, points).map(Some)
    }

    fn next_id(&mut self) -> EntryId {
        let now = chrono::Utc::now().timestamp_millis();
        let id = match self.last_id {
            Some(EntryId(last)) if now <= last => EntryId(last + 1),
            _ => EntryId(now),
        };
        self.last_id = Some(id);
        id
    }
}

/// Explicit name if it has any non-blank text, otherwise "Material {n}"
pub fn resolve_name(explicit: &str, count: usize) -> String {
    let trimmed = explicit.trim();
    if trimmed.is_empty() {
        format!("Material {}", count + 1)
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(n: usize) -> Vec<CurvePoint> {
        (0..n).map(|i| CurvePoint::new(i as f64 * 0.01, i as f64 * 10.0)).collect()
    }

    #[test]
    fn add_entry_names_and_shows_new_material() {
        let mut session = Session::new();
        let first = session.add_entry("", curve(3)).unwrap().clone();
        assert_eq!(first.name, "Material 1");
        assert!(first.visible);
        assert_eq!(first.data.len(), 3);

        let second = session.add_entry("  S355  ", curve(2)).unwrap();
        assert_eq!(second.name, "S355");
        assert_eq!(session.len(), 2);
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut session = Session::new();
        for _ in 0..5 {
            session.add_entry("", Vec::new()).unwrap();
        }
        let ids: Vec<_> = session.entries().iter().map(|e| e.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn capacity_is_never_exceeded() {
        let mut session = Session::new();
        for _ in 0..DEFAULT_CAPACITY {
            session.add_entry("", curve(1)).unwrap();
        }
        let before = session.clone();

        let err = session.add_entry("Eleventh", curve(1)).unwrap_err();
        assert!(matches!(err, CurveError::Capacity(10)));
        assert_eq!(session, before);
        assert!(session.is_full());
        assert!(matches!(session.begin_request(""), Err(CurveError::Capacity(_))));
    }

    #[test]
    fn double_toggle_restores_visibility() {
        let mut session = Session::new();
        let id = session.add_entry("A", curve(1)).unwrap().id;

        assert!(session.toggle_visibility(id));
        assert!(!session.get(id).unwrap().visible);
        assert!(session.toggle_visibility(id));
        assert!(session.get(id).unwrap().visible);
    }

    #[test]
    fn toggle_of_unknown_id_is_noop() {
        let mut session = Session::new();
        session.add_entry("A", curve(1)).unwrap();
        let before = session.clone();
        assert!(!session.toggle_visibility(EntryId(-1)));
        assert_eq!(session, before);
    }

    #[test]
    fn clear_requires_confirmation() {
        let mut session = Session::new();
        session.add_entry("A", curve(1)).unwrap();
        session.add_entry("B", curve(1)).unwrap();

        let mut asked = Vec::new();
        let cleared = session.clear(&mut |msg: &str| {
            asked.push(msg.to_string());
            false
        });
        assert!(!cleared);
        assert_eq!(session.len(), 2);
        assert_eq!(asked, vec![CLEAR_PROMPT.to_string()]);

        assert!(session.clear(&mut |_: &str| true));
        assert!(session.is_empty());
    }

    #[test]
    fn latest_visible_skips_hidden_entries() {
        let mut session = Session::new();
        let a = session.add_entry("A", curve(1)).unwrap().id;
        let b = session.add_entry("B", curve(2)).unwrap().id;
        assert_eq!(session.latest_visible().unwrap().id, b);

        session.toggle_visibility(b);
        assert_eq!(session.latest_visible().unwrap().id, a);
        session.toggle_visibility(a);
        assert!(session.latest_visible().is_none());
        assert_eq!(session.visible_entries().count(), 0);
    }

    #[test]
    fn result_in_flight_during_clear_is_discarded() {
        let mut session = Session::new();
        session.add_entry("A", curve(1)).unwrap();
        let pending = session.begin_request("B").unwrap();

        assert!(session.clear(&mut |_: &str| true));
        let landed = session.complete(pending, curve(4)).unwrap();
        assert!(landed.is_none());
        assert!(session.is_empty());
    }

    #[test]
    fn completed_request_uses_name_from_request_time() {
        let mut session = Session::new();
        let pending = session.begin_request("").unwrap();
        session.add_entry("Other", curve(1)).unwrap();

        let entry = session.complete(pending, curve(2)).unwrap().unwrap();
        assert_eq!(entry.name, "Material 2");
    }

    #[test]
    fn completion_still_respects_capacity() {
        let mut session = Session::with_capacity(1);
        let first = session.begin_request("A").unwrap();
        let second = session.begin_request("B").unwrap();
        session.complete(first, curve(1)).unwrap();
        assert!(matches!(
            session.complete(second, curve(1)),
            Err(CurveError::Capacity(1))
        ));
        assert_eq!(session.len(), 1);
    }
}
