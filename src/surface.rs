//! In-memory presentation surface.
//!
//! Stands in for whatever page or screen hosts the walkthrough: a set of
//! named text regions plus named clickable controls. The contract is
//! deliberately narrow: look an element up by id, attach one click
//! listener, replace a region's text content.

use std::collections::BTreeMap;

/// A click listener. Listeners receive the surface so they can write back
/// to its regions.
pub type ClickHandler = fn(&mut TextSurface);

struct Region {
    text: String,
    writes: usize,
}

pub struct TextSurface {
    regions: BTreeMap<String, Region>,
    listeners: BTreeMap<String, ClickHandler>,
}

impl TextSurface {
    /// Create a surface with the given text regions, all initially empty.
    pub fn new(region_ids: &[&str]) -> Self {
        let mut regions = BTreeMap::new();
        for id in region_ids {
            regions.insert(
                (*id).to_string(),
                Region {
                    text: String::new(),
                    writes: 0,
                },
            );
        }

        TextSurface {
            regions,
            listeners: BTreeMap::new(),
        }
    }

    /// Attach a click listener to the control named `id`
    ///
    /// At most one listener per control; registering again replaces the
    /// earlier listener.
    pub fn add_click_listener(&mut self, id: &str, handler: ClickHandler) {
        self.listeners.insert(id.to_string(), handler);
    }

    /// Deliver one activation to the control named `id`
    ///
    /// The listener runs to completion before this returns. Returns whether
    /// a listener ran; a control nobody listens on swallows the click.
    pub fn click(&mut self, id: &str) -> bool {
        let handler = match self.listeners.get(id) {
            Some(handler) => *handler,
            None => return false,
        };

        handler(self);

        true
    }

    /// Replace the text content of the region named `id`
    ///
    /// Writes to unknown regions are dropped.
    pub fn set_text(&mut self, id: &str, text: &str) {
        if let Some(region) = self.regions.get_mut(id) {
            region.text = text.to_string();
            region.writes += 1;
        }
    }

    /// Current text content of the region named `id`
    pub fn text(&self, id: &str) -> Option<&str> {
        self.regions.get(id).map(|r| r.text.as_str())
    }

    /// Number of writes the region named `id` has received so far
    pub fn write_count(&self, id: &str) -> usize {
        self.regions.get(id).map_or(0, |r| r.writes)
    }
}

#[cfg(test)]
fn write_greeting(surface: &mut TextSurface) {
    surface.set_text("banner", "hi there");
}

#[cfg(test)]
fn write_farewell(surface: &mut TextSurface) {
    surface.set_text("banner", "bye now");
}

#[test]
fn test_click_runs_listener() {
    let mut surface = TextSurface::new(&["banner"]);
    surface.add_click_listener("button", write_greeting);

    assert!(surface.click("button"));
    assert_eq!(surface.text("banner"), Some("hi there"));
    assert_eq!(surface.write_count("banner"), 1);
}

#[test]
fn test_click_without_listener_is_a_noop() {
    let mut surface = TextSurface::new(&["banner"]);

    assert!(!surface.click("button"));
    assert_eq!(surface.text("banner"), Some(""));
    assert_eq!(surface.write_count("banner"), 0);
}

#[test]
fn test_registering_again_replaces_listener() {
    let mut surface = TextSurface::new(&["banner"]);
    surface.add_click_listener("button", write_greeting);
    surface.add_click_listener("button", write_farewell);

    assert!(surface.click("button"));
    assert_eq!(surface.text("banner"), Some("bye now"));
}

#[test]
fn test_writes_to_unknown_regions_are_dropped() {
    let mut surface = TextSurface::new(&["banner"]);
    surface.set_text("nonexistent", "lost");

    assert_eq!(surface.text("nonexistent"), None);
    assert_eq!(surface.write_count("nonexistent"), 0);
}
