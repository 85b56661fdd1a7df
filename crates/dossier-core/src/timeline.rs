//! Story timeline: node data, card reveal and scroll-in animation
//!
//! Cards sit next to their timeline node and are revealed on hover (mouse) or
//! tap (touch). Leaving a node hides its card only after a short grace period
//! so the pointer can travel from the node onto the card.

use std::collections::HashSet;
use std::time::Duration;

/// Grace period after the pointer leaves a node
pub const NODE_LEAVE_DELAY: Duration = Duration::from_millis(300);

/// Grace period after the pointer leaves a card
pub const CARD_LEAVE_DELAY: Duration = Duration::from_millis(200);

/// Visible fraction of an element needed to play its entrance animation
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// The viewport is shrunk by this much at the bottom for reveal checks
pub const REVEAL_BOTTOM_MARGIN: f64 = 50.0;

pub const REVEAL_ALL_LABEL: &str = "一键展开故事";
pub const COLLAPSE_ALL_LABEL: &str = "收起所有故事";

/// One event on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryNode {
    pub year: u16,
    pub title: &'static str,
    pub summary: &'static str,
}

/// The timeline, oldest first.
pub const STORY_NODES: [StoryNode; 12] = [
    StoryNode { year: 1980, title: "高城出生", summary: "档案编号 8008-C。军人家庭的长子。" },
    StoryNode { year: 1983, title: "高雀出生", summary: "档案编号 8308-Q。比哥哥小三岁。" },
    StoryNode { year: 1998, title: "入伍", summary: "高城进入军校，从此一身军装。" },
    StoryNode { year: 2001, title: "文工团", summary: "高雀考入文工团，站上舞台。" },
    StoryNode { year: 2003, title: "特种连", summary: "高雀转入特种连，换下演出服。" },
    StoryNode { year: 2006, title: "上尉", summary: "兄妹同年授衔，各自带兵。" },
    StoryNode { year: 2007, title: "血舌", summary: "那一年的任务，档案里只留下两个字。" },
    StoryNode { year: 2008, title: "退役", summary: "高雀离开部队，换上了自己的衣服。" },
    StoryNode { year: 2010, title: "联姻", summary: "高城的婚礼，西装代替了军装。" },
    StoryNode { year: 2011, title: "重逢", summary: "多年后的一次见面，谁都没有提起过去。" },
    StoryNode { year: 2012, title: "中校", summary: "高城晋升，仍旧笔挺。" },
    StoryNode { year: 2013, title: "封存", summary: "档案封存，留言板开放。" },
];

/// A scheduled "hide this card" check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "pass to TimelineState::release after its delay"]
pub struct HoverRelease {
    pub node: usize,
    pub delay: Duration,
    token: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct NodeState {
    active: bool,
    hovering: bool,
    token: u64,
}

/// Reveal state of every card on the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineState {
    nodes: Vec<NodeState>,
    reveal_all: bool,
}

impl TimelineState {
    pub fn new(node_count: usize) -> Self {
        Self {
            nodes: vec![NodeState::default(); node_count],
            reveal_all: false,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node has its hover/tap state set.
    pub fn is_active(&self, node: usize) -> bool {
        self.nodes.get(node).is_some_and(|n| n.active)
    }

    /// Card is shown, either individually or through "reveal all".
    pub fn is_revealed(&self, node: usize) -> bool {
        self.reveal_all || self.is_active(node)
    }

    pub fn reveal_all(&self) -> bool {
        self.reveal_all
    }

    /// Label for the reveal-all button.
    pub fn reveal_label(&self) -> &'static str {
        if self.reveal_all {
            COLLAPSE_ALL_LABEL
        } else {
            REVEAL_ALL_LABEL
        }
    }

    /// Pointer entered a node or its card.
    pub fn enter(&mut self, node: usize) {
        if let Some(state) = self.nodes.get_mut(node) {
            state.hovering = true;
            state.active = true;
            // Invalidate any pending release
            state.token += 1;
        }
    }

    /// Pointer left the node itself.
    pub fn leave_node(&mut self, node: usize) -> Option<HoverRelease> {
        self.leave(node, NODE_LEAVE_DELAY)
    }

    /// Pointer left the node's card.
    pub fn leave_card(&mut self, node: usize) -> Option<HoverRelease> {
        self.leave(node, CARD_LEAVE_DELAY)
    }

    fn leave(&mut self, node: usize, delay: Duration) -> Option<HoverRelease> {
        let state = self.nodes.get_mut(node)?;
        state.hovering = false;
        state.token += 1;
        Some(HoverRelease {
            node,
            delay,
            token: state.token,
        })
    }

    /// Hide the card unless the pointer came back since `release` was issued.
    pub fn release(&mut self, release: HoverRelease) {
        if let Some(state) = self.nodes.get_mut(release.node) {
            if state.token == release.token && !state.hovering {
                state.active = false;
            }
        }
    }

    /// Touch tap on a node (not on its card): toggle it, close the rest.
    pub fn tap(&mut self, node: usize) {
        let Some(was_active) = self.nodes.get(node).map(|n| n.active) else {
            return;
        };
        self.clear_active();
        if !was_active {
            self.nodes[node].active = true;
        }
    }

    /// Touch tap anywhere outside the timeline nodes.
    pub fn tap_outside(&mut self) {
        self.clear_active();
    }

    /// Flip "reveal all". Expanding clears individual hover state.
    ///
    /// Returns the new setting.
    pub fn toggle_reveal_all(&mut self) -> bool {
        self.reveal_all = !self.reveal_all;
        if self.reveal_all {
            self.clear_active();
        }
        self.reveal_all
    }

    fn clear_active(&mut self) {
        for state in &mut self.nodes {
            state.active = false;
            state.token += 1;
        }
    }
}

impl Default for TimelineState {
    fn default() -> Self {
        Self::new(STORY_NODES.len())
    }
}

/// Vertical extent of an element relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRect {
    pub top: f64,
    pub height: f64,
}

/// Fraction of `rect` inside `[0, viewport_height - REVEAL_BOTTOM_MARGIN]`.
pub fn visible_ratio(rect: ElementRect, viewport_height: f64) -> f64 {
    let root_bottom = viewport_height - REVEAL_BOTTOM_MARGIN;
    let bottom = rect.top + rect.height;
    let overlap = bottom.min(root_bottom) - rect.top.max(0.0);

    if rect.height <= 0.0 {
        return if rect.top >= 0.0 && rect.top <= root_bottom { 1.0 } else { 0.0 };
    }
    (overlap / rect.height).clamp(0.0, 1.0)
}

/// Elements that have played their entrance animation. Once visible, always
/// visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollReveal {
    visible: HashSet<String>,
}

impl ScrollReveal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check an element against the viewport. Returns `true` the first time it
    /// crosses the threshold.
    pub fn observe(&mut self, id: &str, rect: ElementRect, viewport_height: f64) -> bool {
        if self.visible.contains(id) {
            return false;
        }
        if visible_ratio(rect, viewport_height) >= REVEAL_THRESHOLD {
            self.visible.insert(id.to_string());
            return true;
        }
        false
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.contains(id)
    }
}
