//! Scroll-triggered reveal state.
//!
//! A single [`RevealController`] tracks every reveal target on the landing
//! page. The targets are declared up front in a [`RevealPlan`] rather than
//! discovered from the rendered document, so the front end only forwards
//! intersection deliveries for the targets the plan observes.
//!
//! Visibility is level-triggered: each delivery sets a target's flag to the
//! delivered intersection state, so scrolling back into view reveals the
//! element again.

use std::collections::BTreeSet;

use crate::watch::Watcher;

/// Class every reveal target carries from mount.
pub const HIDDEN_CLASS: &str = "hidden";

/// Class added while a target is in view.
pub const VISIBLE_CLASS: &str = "visible";

/// An element whose presentation follows its scroll visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RevealTarget {
    /// The text block overlaid on the about image.
    AboutText,
    /// Biography next to the first founder.
    FoundersLeftText,
    /// First founder card. Sentinel for the founders group.
    FirstFounder,
    /// Second founder card.
    SecondFounder,
    /// Biography next to the second founder.
    FoundersRightText,
    /// A card in the project grid, by position.
    ProjectCard(usize),
}

impl RevealTarget {
    /// Entrance animation modifier, if the target has one.
    pub fn entrance_class(&self) -> Option<&'static str> {
        match self {
            RevealTarget::FirstFounder => Some("slide-in-left"),
            RevealTarget::SecondFounder => Some("slide-in-right"),
            RevealTarget::ProjectCard(1) => Some("slide-down"),
            RevealTarget::ProjectCard(_) => Some("slide-up"),
            _ => None,
        }
    }
}

/// Targets that change together whenever the sentinel's visibility does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealGroup {
    pub sentinel: RevealTarget,
    pub members: Vec<RevealTarget>,
}

/// The statically-known set of reveal targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealPlan {
    singles: Vec<RevealTarget>,
    groups: Vec<RevealGroup>,
}

impl RevealPlan {
    /// An empty plan.
    pub fn new() -> Self {
        Self {
            singles: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Observes a target on its own.
    pub fn single(mut self, target: RevealTarget) -> Self {
        self.singles.push(target);
        self
    }

    /// Observes `sentinel` and moves every member (the sentinel included)
    /// with it.
    pub fn group(mut self, sentinel: RevealTarget, members: &[RevealTarget]) -> Self {
        let mut members = members.to_vec();
        if !members.contains(&sentinel) {
            members.insert(0, sentinel);
        }
        self.groups.push(RevealGroup { sentinel, members });
        self
    }

    /// The landing page: about text, the founders group, and `cards` project cards.
    pub fn landing(cards: usize) -> Self {
        let mut plan = RevealPlan::new().single(RevealTarget::AboutText).group(
            RevealTarget::FirstFounder,
            &[
                RevealTarget::FirstFounder,
                RevealTarget::SecondFounder,
                RevealTarget::FoundersLeftText,
                RevealTarget::FoundersRightText,
            ],
        );
        for index in 0..cards {
            plan = plan.single(RevealTarget::ProjectCard(index));
        }
        plan
    }

    /// Targets the platform should deliver intersections for.
    pub fn observed(&self) -> impl Iterator<Item = RevealTarget> + '_ {
        self.singles
            .iter()
            .copied()
            .chain(self.groups.iter().map(|g| g.sentinel))
    }

    /// Whether deliveries for `target` are accepted.
    pub fn observes(&self, target: RevealTarget) -> bool {
        self.observed().any(|t| t == target)
    }

    fn affected(&self, target: RevealTarget) -> Vec<RevealTarget> {
        if let Some(group) = self.groups.iter().find(|g| g.sentinel == target) {
            return group.members.clone();
        }
        if self.singles.contains(&target) {
            return vec![target];
        }
        Vec::new()
    }
}

impl Default for RevealPlan {
    fn default() -> Self {
        Self::new()
    }
}

/// One intersection delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub target: RevealTarget,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn enter(target: RevealTarget) -> Self {
        Self {
            target,
            is_intersecting: true,
        }
    }

    pub fn leave(target: RevealTarget) -> Self {
        Self {
            target,
            is_intersecting: false,
        }
    }
}

/// Visibility flags for every target in a plan.
#[derive(Debug, Clone)]
pub struct RevealController {
    plan: RevealPlan,
    visible: BTreeSet<RevealTarget>,
}

impl RevealController {
    /// Creates a controller with every target hidden.
    pub fn new(plan: RevealPlan) -> Self {
        Self {
            plan,
            visible: BTreeSet::new(),
        }
    }

    /// Applies one delivery. Returns `true` if any flag changed.
    pub fn apply(&mut self, entry: IntersectionEntry) -> bool {
        let affected = self.plan.affected(entry.target);
        if affected.is_empty() {
            tracing::debug!(reveal_target = ?entry.target, "ignoring delivery for unobserved target");
            return false;
        }

        let mut changed = false;
        for target in affected {
            changed |= if entry.is_intersecting {
                self.visible.insert(target)
            } else {
                self.visible.remove(&target)
            };
        }
        changed
    }

    pub fn is_visible(&self, target: RevealTarget) -> bool {
        self.visible.contains(&target)
    }

    /// Full class list for a target: its base classes, the entrance
    /// modifier, `hidden`, and `visible` while in view.
    pub fn class_list(&self, target: RevealTarget, base: &str) -> String {
        let mut classes: Vec<&str> = base.split_whitespace().collect();
        if let Some(entrance) = target.entrance_class() {
            classes.push(entrance);
        }
        classes.push(HIDDEN_CLASS);
        if self.is_visible(target) {
            classes.push(VISIBLE_CLASS);
        }
        classes.join(" ")
    }
}

impl Watcher for RevealController {
    type Event = Vec<IntersectionEntry>;

    fn handle(&mut self, entries: Vec<IntersectionEntry>) -> bool {
        let mut changed = false;
        for entry in entries {
            changed |= self.apply(entry);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOUNDERS: [RevealTarget; 4] = [
        RevealTarget::FirstFounder,
        RevealTarget::SecondFounder,
        RevealTarget::FoundersLeftText,
        RevealTarget::FoundersRightText,
    ];

    #[test]
    fn test_starts_hidden() {
        let controller = RevealController::new(RevealPlan::landing(3));
        assert!(!controller.is_visible(RevealTarget::AboutText));
        assert_eq!(
            controller.class_list(RevealTarget::AboutText, "about-overlay-text"),
            "about-overlay-text hidden"
        );
    }

    #[test]
    fn test_sentinel_moves_group_in_lockstep() {
        let mut controller = RevealController::new(RevealPlan::landing(3));

        assert!(controller.apply(IntersectionEntry::enter(RevealTarget::FirstFounder)));
        assert!(FOUNDERS.iter().all(|t| controller.is_visible(*t)));

        assert!(controller.apply(IntersectionEntry::leave(RevealTarget::FirstFounder)));
        assert!(FOUNDERS.iter().all(|t| !controller.is_visible(*t)));
    }

    #[test]
    fn test_group_members_are_not_observed() {
        let plan = RevealPlan::landing(3);
        let observed: Vec<_> = plan.observed().collect();
        assert!(observed.contains(&RevealTarget::FirstFounder));
        assert!(!observed.contains(&RevealTarget::SecondFounder));

        let mut controller = RevealController::new(plan);
        assert!(!controller.apply(IntersectionEntry::enter(RevealTarget::SecondFounder)));
        assert!(!controller.is_visible(RevealTarget::SecondFounder));
    }

    #[test]
    fn test_level_triggered_reentry() {
        let mut controller = RevealController::new(RevealPlan::landing(3));
        let card = RevealTarget::ProjectCard(2);

        controller.apply(IntersectionEntry::enter(card));
        controller.apply(IntersectionEntry::leave(card));
        assert!(!controller.is_visible(card));
        controller.apply(IntersectionEntry::enter(card));
        assert!(controller.is_visible(card));

        // Repeating the same state is not a change
        assert!(!controller.apply(IntersectionEntry::enter(card)));
    }

    #[test]
    fn test_targets_are_independent() {
        let mut controller = RevealController::new(RevealPlan::landing(3));
        controller.handle(vec![
            IntersectionEntry::enter(RevealTarget::AboutText),
            IntersectionEntry::enter(RevealTarget::ProjectCard(0)),
        ]);
        assert!(controller.is_visible(RevealTarget::AboutText));
        assert!(controller.is_visible(RevealTarget::ProjectCard(0)));
        assert!(!controller.is_visible(RevealTarget::ProjectCard(1)));
        assert!(!controller.is_visible(RevealTarget::FirstFounder));
    }

    #[test]
    fn test_cards_beyond_plan_ignored() {
        let mut controller = RevealController::new(RevealPlan::landing(2));
        assert!(!controller.apply(IntersectionEntry::enter(RevealTarget::ProjectCard(2))));
    }

    #[test]
    fn test_card_entrance_classes() {
        let mut controller = RevealController::new(RevealPlan::landing(3));
        controller.apply(IntersectionEntry::enter(RevealTarget::ProjectCard(1)));

        assert_eq!(
            controller.class_list(RevealTarget::ProjectCard(0), "project-card"),
            "project-card slide-up hidden"
        );
        assert_eq!(
            controller.class_list(RevealTarget::ProjectCard(1), "project-card"),
            "project-card slide-down hidden visible"
        );
    }

    #[test]
    fn test_group_adds_missing_sentinel() {
        let plan = RevealPlan::new().group(RevealTarget::FirstFounder, &[RevealTarget::SecondFounder]);
        let mut controller = RevealController::new(plan);
        controller.apply(IntersectionEntry::enter(RevealTarget::FirstFounder));
        assert!(controller.is_visible(RevealTarget::FirstFounder));
        assert!(controller.is_visible(RevealTarget::SecondFounder));
    }
}
