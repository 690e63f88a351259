//! Toolbar
//!
//! ARIA toolbar container: a horizontal or vertical group of controls with
//! a single Tab stop, where the arrow keys move focus between controls.
//!
//! # Usage
//!
//! ```ignore
//! let mut toolbar = Toolbar::new(host);
//! toolbar.connect(&mut tree);
//!
//! let mut event = KeyboardEvent::key_down("ArrowRight", target);
//! toolbar.keydown_handler(&mut tree, &mut event);
//! ```

use rove_a11y::{AriaRole, Orientation};
use rove_dom::{
    Direction, FocusEvent, KeyboardEvent, MouseEvent, MutationRecord, NodeId, Slot,
};

use crate::candidate::CandidatePredicate;
use crate::config::ToolbarConfig;
use crate::host::FocusHost;
use crate::navigator::{Decision, DirectionalNavigator};
use crate::roster::FocusRoster;
use crate::ToolbarError;

/// Slot holding the toolbar's label content
pub const LABEL_SLOT: &str = "label";
/// Decorative content placed before the controls
pub const START_SLOT: &str = "start";
/// Decorative content placed after the controls
pub const END_SLOT: &str = "end";

/// ARIA toolbar bound to a host element
#[derive(Debug)]
pub struct Toolbar {
    host: NodeId,
    config: ToolbarConfig,
    navigator: DirectionalNavigator,
    roster: FocusRoster,
    slotted_items: Vec<NodeId>,
    slotted_label: Vec<NodeId>,
    slotted_start: Vec<NodeId>,
    slotted_end: Vec<NodeId>,
    connected: bool,
}

impl Toolbar {
    pub fn new(host: NodeId) -> Self {
        Self::with_config(host, ToolbarConfig::default())
    }

    pub fn with_config(host: NodeId, config: ToolbarConfig) -> Self {
        Self::with_predicate(host, config, CandidatePredicate::toolbar())
    }

    /// Toolbar with a custom candidate predicate
    pub fn with_predicate(host: NodeId, config: ToolbarConfig, predicate: CandidatePredicate) -> Self {
        Self {
            host,
            navigator: DirectionalNavigator::new(
                config.orientation,
                config.direction.unwrap_or_default(),
            ),
            config,
            roster: FocusRoster::with_predicate(host, predicate),
            slotted_items: Vec::new(),
            slotted_label: Vec::new(),
            slotted_start: Vec::new(),
            slotted_end: Vec::new(),
            connected: false,
        }
    }

    pub fn host(&self) -> NodeId {
        self.host
    }

    pub fn config(&self) -> &ToolbarConfig {
        &self.config
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn orientation(&self) -> Orientation {
        self.navigator.orientation
    }

    pub fn direction(&self) -> Direction {
        self.navigator.direction
    }

    pub fn roster(&self) -> &FocusRoster {
        &self.roster
    }

    /// Mutable roster access, e.g. to subscribe to changes
    pub fn roster_mut(&mut self) -> &mut FocusRoster {
        &mut self.roster
    }

    pub fn active_index(&self) -> usize {
        self.roster.active_index()
    }

    /// Elements in the default slot
    pub fn slotted_items(&self) -> &[NodeId] {
        &self.slotted_items
    }

    /// Elements in the label slot
    pub fn slotted_label(&self) -> &[NodeId] {
        &self.slotted_label
    }

    /// Elements in the start slot. Never part of arrow navigation.
    pub fn slotted_start(&self) -> &[NodeId] {
        &self.slotted_start
    }

    /// Elements in the end slot. Never part of arrow navigation.
    pub fn slotted_end(&self) -> &[NodeId] {
        &self.slotted_end
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// The host was inserted into a live document
    pub fn connect<H: FocusHost + ?Sized>(&mut self, dom: &mut H) {
        if self.connected {
            return;
        }
        if !dom.is_connected(self.host) {
            tracing::debug!(host = %self.host, "host is not in a live document, staying detached");
            return;
        }
        self.connected = true;

        if let Some(value) = dom.attribute(self.host, "orientation") {
            match value.parse::<Orientation>() {
                Ok(orientation) => self.navigator.orientation = orientation,
                Err(err) => tracing::warn!(host = %self.host, %err, "ignoring orientation attribute"),
            }
        }
        self.navigator.direction = self
            .config
            .direction
            .unwrap_or_else(|| dom.text_direction(self.host));

        self.reflect_host_attributes(dom);
        tracing::debug!(
            host = %self.host,
            orientation = %self.navigator.orientation,
            direction = self.navigator.direction.as_str(),
            "toolbar connected"
        );

        self.roster.attach();
        dom.watch_children(self.host);
        self.slot_changed(dom);
    }

    /// The host was removed from the document. Control handles are released.
    pub fn disconnect<H: FocusHost + ?Sized>(&mut self, dom: &mut H) {
        if !self.connected {
            return;
        }
        self.connected = false;
        dom.unwatch_children(self.host);
        self.roster.detach();
        self.slotted_items.clear();
        self.slotted_label.clear();
        self.slotted_start.clear();
        self.slotted_end.clear();
        tracing::debug!(host = %self.host, "toolbar disconnected");
    }

    fn reflect_host_attributes<H: FocusHost + ?Sized>(&self, dom: &mut H) {
        let orientation = self.navigator.orientation.as_str();
        dom.set_attribute(self.host, "role", AriaRole::Toolbar.as_str());
        dom.set_attribute(self.host, "orientation", orientation);
        dom.set_attribute(self.host, "aria-orientation", orientation);
        for (name, value) in self.config.aria.attributes() {
            dom.set_attribute(self.host, name, &value);
        }
    }

    // ------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------

    pub fn set_orientation<H: FocusHost + ?Sized>(&mut self, dom: &mut H, orientation: Orientation) {
        self.navigator.orientation = orientation;
        self.config.orientation = orientation;
        if self.connected {
            dom.set_attribute(self.host, "orientation", orientation.as_str());
            dom.set_attribute(self.host, "aria-orientation", orientation.as_str());
        }
    }

    /// `orientation` attribute changed on the host
    pub fn orientation_attribute_changed<H: FocusHost + ?Sized>(
        &mut self,
        dom: &mut H,
        value: &str,
    ) -> Result<(), ToolbarError> {
        let orientation = value.parse::<Orientation>()?;
        self.set_orientation(dom, orientation);
        Ok(())
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.navigator.direction = direction;
    }

    // ------------------------------------------------------------------
    // Structural changes
    // ------------------------------------------------------------------

    /// Re-read every slot from the host and rebuild the candidate list
    pub fn slot_changed<H: FocusHost + ?Sized>(&mut self, dom: &mut H) {
        let items = dom.slotted_elements(self.host, &Slot::default_slot());
        self.slotted_label = dom.slotted_elements(self.host, &Slot::new(LABEL_SLOT));
        self.slotted_start = dom.slotted_elements(self.host, &Slot::new(START_SLOT));
        self.slotted_end = dom.slotted_elements(self.host, &Slot::new(END_SLOT));
        self.slotted_items_changed(dom, items);
    }

    /// New default-slot contents
    pub fn slotted_items_changed<H: FocusHost + ?Sized>(&mut self, dom: &mut H, items: Vec<NodeId>) {
        self.slotted_items = items;
        if self.connected {
            self.roster.rebuild_candidates(dom, &self.slotted_items);
        }
    }

    /// Apply queued child-list records; returns whether any concerned this toolbar
    pub fn handle_mutations<H: FocusHost + ?Sized>(
        &mut self,
        dom: &mut H,
        records: &[MutationRecord],
    ) -> bool {
        let relevant = records.iter().any(|r| r.target == self.host);
        if relevant {
            self.slot_changed(dom);
        }
        relevant
    }

    // ------------------------------------------------------------------
    // Event handlers
    //
    // Each returns `true` when the event should go on propagating with
    // its default handling left alone.
    // ------------------------------------------------------------------

    /// `click`: make the clicked control the active one. Always `true`.
    pub fn click_handler<H: FocusHost + ?Sized>(&mut self, dom: &mut H, event: &MouseEvent) -> bool {
        self.roster.on_pointer_activate(dom, event.target)
    }

    /// `focusin`: focus arriving from outside lands on the active control.
    /// The event is always consumed.
    pub fn focusin_handler<H: FocusHost + ?Sized>(&mut self, dom: &mut H, event: &FocusEvent) -> bool {
        self.roster.on_focus_enter(dom, event.related_target);
        false
    }

    /// `keydown`: arrow keys move the active control along the toolbar axis
    pub fn keydown_handler<H: FocusHost + ?Sized>(
        &mut self,
        dom: &mut H,
        event: &mut KeyboardEvent,
    ) -> bool {
        let delta = match self.navigator.decide(event) {
            Decision::NotApplicable => return true,
            Decision::Delta(delta) => delta,
        };

        if delta == 0 {
            // Arrow keys across the axis belong to an enclosing radio group
            return dom.closest_role(event.target, &AriaRole::RadioGroup).is_none();
        }

        let next = self.roster.active_index() as isize + delta as isize;
        if self.roster.has_candidate_at(next) {
            event.prevent_default();
        }
        tracing::trace!(host = %self.host, key = %event.key, next, "arrow navigation");
        self.roster.focus_active(dom, Some(next));
        true
    }
}
