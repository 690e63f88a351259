//! Property-based tests for the roving tab stop
//!
//! Random interleavings of structural changes and input events must always
//! leave exactly one Tab-reachable control, and index requests of any size
//! clamp into range.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use rove_dom::{DomTree, FocusEvent, KeyboardEvent, MouseEvent, NodeId};
use rove_toolbar::{FocusRoster, Toolbar, clamp_index};

const KEYS: [&str; 5] = ["ArrowUp", "ArrowDown", "ArrowLeft", "ArrowRight", "Enter"];

/// One thing that can happen to a connected toolbar
#[derive(Debug, Clone)]
enum Step {
    AddControl,
    RemoveControl(usize),
    Key { key: usize, target: usize, shift: bool },
    Click(usize),
    FocusFromOutside,
    FocusFromInside(usize),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        2 => Just(Step::AddControl),
        2 => any::<usize>().prop_map(Step::RemoveControl),
        5 => (0..KEYS.len(), any::<usize>(), any::<bool>())
            .prop_map(|(key, target, shift)| Step::Key { key, target, shift }),
        2 => any::<usize>().prop_map(Step::Click),
        1 => Just(Step::FocusFromOutside),
        1 => any::<usize>().prop_map(Step::FocusFromInside),
    ]
}

struct Page {
    tree: DomTree,
    host: NodeId,
    outside: NodeId,
    controls: Vec<NodeId>,
}

impl Page {
    fn new(count: usize) -> Self {
        let mut tree = DomTree::new();
        let body = tree.create_element("body");
        let outside = tree.create_element("input");
        let host = tree.create_element("rove-toolbar");
        tree.append_child(tree.root(), body).unwrap();
        tree.append_child(body, outside).unwrap();
        tree.append_child(body, host).unwrap();

        let mut page = Self {
            tree,
            host,
            outside,
            controls: Vec::new(),
        };
        for _ in 0..count {
            page.add_control();
        }
        page
    }

    fn add_control(&mut self) {
        let button = self.tree.create_element("button");
        self.tree.append_child(self.host, button).unwrap();
        self.controls.push(button);
    }

    /// A control, or the host itself when `pick` lands past the end
    fn target(&self, pick: usize) -> NodeId {
        self.controls
            .get(pick % (self.controls.len() + 1))
            .copied()
            .unwrap_or(self.host)
    }

    fn apply(&mut self, toolbar: &mut Toolbar, step: &Step) {
        match *step {
            Step::AddControl => self.add_control(),
            Step::RemoveControl(pick) => {
                if !self.controls.is_empty() {
                    let control = self.controls.remove(pick % self.controls.len());
                    self.tree.remove_child(self.host, control).unwrap();
                }
            }
            Step::Key { key, target, shift } => {
                let mut event = KeyboardEvent::key_down(KEYS[key], self.target(target));
                if shift {
                    event = event.with_shift();
                }
                toolbar.keydown_handler(&mut self.tree, &mut event);
            }
            Step::Click(pick) => {
                let event = MouseEvent::click(self.target(pick));
                toolbar.click_handler(&mut self.tree, &event);
            }
            Step::FocusFromOutside => {
                let event = FocusEvent::focus_in(self.host, Some(self.outside));
                toolbar.focusin_handler(&mut self.tree, &event);
            }
            Step::FocusFromInside(pick) => {
                let target = self.target(pick);
                let event = FocusEvent::focus_in(target, Some(self.host));
                toolbar.focusin_handler(&mut self.tree, &event);
            }
        }

        let records = self.tree.take_records();
        toolbar.handle_mutations(&mut self.tree, &records);
    }

    fn check_single_tab_stop(&self, toolbar: &Toolbar) -> Result<(), TestCaseError> {
        let candidates = toolbar.roster().candidates();
        prop_assert_eq!(candidates, self.controls.as_slice());
        if candidates.is_empty() {
            return Ok(());
        }

        let stops: Vec<usize> = candidates
            .iter()
            .enumerate()
            .filter(|&(_, &c)| self.tree.tab_index(c) == Some(0))
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(stops, vec![toolbar.active_index()]);
        prop_assert!(candidates
            .iter()
            .all(|&c| matches!(self.tree.tab_index(c), Some(0) | Some(-1))));
        Ok(())
    }
}

/// Property: after every structural change or input event, exactly one
/// control carries `tabindex=0`, and it is the one at the active index.
#[test]
fn prop_single_tab_stop_after_any_sequence() {
    proptest!(|(
        initial in 0usize..6,
        steps in prop::collection::vec(step_strategy(), 1..60),
    )| {
        let mut page = Page::new(initial);
        let mut toolbar = Toolbar::new(page.host);
        toolbar.connect(&mut page.tree);
        page.check_single_tab_stop(&toolbar)?;

        for step in &steps {
            page.apply(&mut toolbar, step);
            page.check_single_tab_stop(&toolbar)?;
        }
    });
}

/// Property: arrow keys never move focus out of the candidate list
#[test]
fn prop_focus_stays_on_candidates() {
    proptest!(|(
        initial in 1usize..6,
        steps in prop::collection::vec(step_strategy(), 1..40),
    )| {
        let mut page = Page::new(initial);
        let mut toolbar = Toolbar::new(page.host);
        toolbar.connect(&mut page.tree);

        for step in &steps {
            page.apply(&mut toolbar, step);
            if let Some(focused) = page.tree.active_element() {
                prop_assert!(
                    focused == page.outside || page.controls.contains(&focused),
                    "focus landed on {}",
                    focused
                );
            }
        }
    });
}

/// Property: `clamp_index` equals `max(0, min(n, len - 1))` for any pair
#[test]
fn prop_clamp_index_any_pair() {
    proptest!(|(requested in any::<isize>(), len in any::<usize>())| {
        let clamped = clamp_index(requested, len);
        if len == 0 {
            prop_assert_eq!(clamped, 0);
        } else {
            let expected = (requested as i128).clamp(0, len as i128 - 1);
            prop_assert_eq!(clamped as i128, expected);
            prop_assert!(clamped < len);
        }
    });
}

/// Property: `set_active_index` on a live roster stores the clamped request
#[test]
fn prop_set_active_index_clamps() {
    proptest!(|(count in 1usize..8, requested in any::<isize>())| {
        let page = Page::new(count);
        let mut tree = page.tree;
        let mut roster = FocusRoster::new(page.host);
        roster.attach();
        roster.rebuild_candidates(&mut tree, &page.controls);

        roster.set_active_index(requested);
        prop_assert_eq!(roster.active_index(), clamp_index(requested, count));
        prop_assert!(roster.active_index() < count);
    });
}
