//! Drag-to-reorder code blocks.
//!
//! A [`ReorderWidget`] holds a fixed set of blocks in their current visual
//! order. Pointer gestures are fed in through the six drag phases (start,
//! over, enter, leave, drop, end); after every committed drop the order is
//! validated against the key each block was authored with.

use std::cmp::Ordering;
use std::rc::Rc;

use crate::host::WidgetHost;

/// Expected-order key authored on a block.
///
/// Two keys that both parse as integers compare numerically, so `"9"` sorts
/// before `"10"`. Any other pair compares as plain strings. Not [`Ord`]:
/// mixing numeric and textual keys is not transitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderKey(String);

impl OrderKey {
    /// Parse a raw attribute value. Missing, empty or whitespace-only values
    /// yield `None`.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let trimmed = raw?.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The key as authored, without surrounding whitespace.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compare with another key.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.0.parse::<i64>(), other.0.parse::<i64>()) {
            (Ok(a), Ok(b)) => a.cmp(&b),
            _ => self.0.cmp(&other.0),
        }
    }
}

/// Check that a sequence of keys is in ascending order.
///
/// Every adjacent pair must carry two keys with the first not greater than
/// the second. A missing key anywhere in a pair fails the whole sequence.
/// Empty and single-element sequences are trivially ordered.
pub fn check_order<'a, I>(keys: I) -> bool
where
    I: IntoIterator<Item = Option<&'a OrderKey>>,
{
    let mut keys = keys.into_iter();
    let Some(mut previous) = keys.next() else {
        return true;
    };
    for current in keys {
        match (previous, current) {
            (Some(a), Some(b)) if a.compare(b) != Ordering::Greater => {}
            _ => return false,
        }
        previous = current;
    }
    true
}

/// Stable identity of a block: its position when the widget was built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(usize);

impl BlockId {
    /// Create an identifier from a discovery position.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Discovery position of the block.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Visual state flags of a block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockFlags {
    /// Block is being dragged.
    pub dragged: bool,
    /// Drop would land before this block (it precedes the drag origin).
    pub dragover_before: bool,
    /// Drop would land after this block (it follows the drag origin).
    pub dragover_after: bool,
}

impl BlockFlags {
    fn clear_dragover(&mut self) {
        self.dragover_before = false;
        self.dragover_after = false;
    }
}

/// A reorderable block.
#[derive(Debug, Clone)]
pub struct Block {
    id: BlockId,
    key: Option<OrderKey>,
    flags: BlockFlags,
}

impl Block {
    pub fn id(&self) -> BlockId {
        self.id
    }

    pub fn key(&self) -> Option<&OrderKey> {
        self.key.as_ref()
    }

    pub fn flags(&self) -> BlockFlags {
        self.flags
    }
}

/// Operation a hovered drop target accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    Move,
}

impl DropEffect {
    /// Name understood by the platform's drag-and-drop API.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Move => "move",
        }
    }
}

/// Result of a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Nothing was dragged, or the block was dropped onto itself.
    Ignored,
    /// The dragged block moved.
    Moved {
        /// Position before the move.
        from: usize,
        /// Position after the move.
        to: usize,
        /// Whether the new order validates.
        correct: bool,
    },
}

/// The drag in progress.
#[derive(Debug, Clone, Copy)]
struct DragState {
    block: BlockId,
    /// Position of the block when the drag started.
    origin: usize,
}

/// Drag-and-drop reordering state for one code container.
pub struct ReorderWidget {
    /// Blocks in current visual order.
    blocks: Vec<Block>,
    drag: Option<DragState>,
    /// Whether the container carries the `correct` mark.
    correct: bool,
    host: Rc<dyn WidgetHost>,
}

impl ReorderWidget {
    /// Build a widget from the raw key of each block, in document order.
    pub fn new<I, S>(keys: I, host: Rc<dyn WidgetHost>) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let blocks = keys
            .into_iter()
            .enumerate()
            .map(|(index, raw)| Block {
                id: BlockId::new(index),
                key: OrderKey::parse(raw.as_ref().map(|s| s.as_ref())),
                flags: BlockFlags::default(),
            })
            .collect();
        Self {
            blocks,
            drag: None,
            correct: false,
            host,
        }
    }

    /// Blocks in current order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Block identities in current order.
    pub fn order(&self) -> Vec<BlockId> {
        self.blocks.iter().map(|b| b.id).collect()
    }

    /// Current position of a block.
    pub fn position(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    /// Block currently being dragged.
    pub fn dragged(&self) -> Option<BlockId> {
        self.drag.map(|d| d.block)
    }

    /// Whether the container is marked correct.
    pub fn is_correct(&self) -> bool {
        self.correct
    }

    /// Validate the current order. Pure: does not touch the `correct` mark.
    pub fn check_order(&self) -> bool {
        check_order(self.blocks.iter().map(Block::key))
    }

    fn block_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    /// A drag started on `id`.
    pub fn drag_start(&mut self, id: BlockId) {
        let Some(origin) = self.position(id) else {
            return;
        };
        // Only one block may carry the dragged flag.
        if let Some(previous) = self.drag.take() {
            if let Some(block) = self.block_mut(previous.block) {
                block.flags.dragged = false;
            }
        }
        if let Some(block) = self.block_mut(id) {
            block.flags.dragged = true;
        }
        self.drag = Some(DragState { block: id, origin });
        log::debug!("Drag started on block {} at position {}", id.index(), origin);
    }

    /// The pointer hovers a block mid-drag. Every block accepts a move.
    pub fn drag_over(&self) -> DropEffect {
        DropEffect::Move
    }

    /// The pointer entered `id`: highlight which side the drop would land on.
    pub fn drag_enter(&mut self, id: BlockId) {
        let Some(drag) = self.drag else {
            return;
        };
        let Some(target) = self.position(id) else {
            return;
        };
        let Some(block) = self.block_mut(id) else {
            return;
        };
        match target.cmp(&drag.origin) {
            Ordering::Less => {
                block.flags.dragover_before = true;
                block.flags.dragover_after = false;
            }
            Ordering::Greater => {
                block.flags.dragover_after = true;
                block.flags.dragover_before = false;
            }
            Ordering::Equal => {}
        }
        log::trace!("Drag entered block {} at position {}", id.index(), target);
    }

    /// The pointer left `id`.
    pub fn drag_leave(&mut self, id: BlockId) {
        if let Some(block) = self.block_mut(id) {
            block.flags.clear_dragover();
        }
    }

    /// The dragged block was dropped onto `target`.
    ///
    /// The dragged block is taken out and reinserted at the target's
    /// position as it was before removal, or appended when that position no
    /// longer exists. Every committed move is revalidated.
    pub fn drop(&mut self, target: BlockId) -> DropOutcome {
        let Some(drag) = self.drag else {
            return DropOutcome::Ignored;
        };
        if drag.block == target {
            return DropOutcome::Ignored;
        }
        let (Some(from), Some(target_index)) = (self.position(drag.block), self.position(target))
        else {
            return DropOutcome::Ignored;
        };

        self.blocks[target_index].flags.clear_dragover();

        let moved = self.blocks.remove(from);
        let to = if target_index >= self.blocks.len() {
            self.blocks.push(moved);
            self.blocks.len() - 1
        } else {
            self.blocks.insert(target_index, moved);
            target_index
        };
        self.host.play_action_sound();

        let correct = self.check_order();
        self.correct = correct;
        log::debug!(
            "Moved block {} from {} to {} (order {})",
            drag.block.index(),
            from,
            to,
            if correct { "correct" } else { "incorrect" }
        );
        if correct {
            self.host.play_correct_sound();
            self.host.celebrate();
        }

        DropOutcome::Moved { from, to, correct }
    }

    /// The drag finished, whether or not it dropped anywhere.
    pub fn drag_end(&mut self) {
        if let Some(drag) = self.drag.take() {
            if let Some(block) = self.block_mut(drag.block) {
                block.flags.dragged = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::recording::RecordingHost;
    use proptest::prelude::*;

    fn widget(keys: &[&str]) -> (ReorderWidget, Rc<RecordingHost>) {
        let host = Rc::new(RecordingHost::new());
        let widget = ReorderWidget::new(keys.iter().map(|k| Some(*k)), host.clone());
        (widget, host)
    }

    fn keys(widget: &ReorderWidget) -> Vec<&str> {
        widget
            .blocks()
            .iter()
            .map(|b| b.key().map(OrderKey::as_str).unwrap_or(""))
            .collect()
    }

    /// Drag the block currently at `from` and drop it onto the block at `onto`.
    fn drag(widget: &mut ReorderWidget, from: usize, onto: usize) -> DropOutcome {
        let dragged = widget.blocks()[from].id();
        let target = widget.blocks()[onto].id();
        widget.drag_start(dragged);
        widget.drag_enter(target);
        let outcome = widget.drop(target);
        widget.drag_end();
        outcome
    }

    fn key(raw: &str) -> OrderKey {
        OrderKey::parse(Some(raw)).unwrap()
    }

    #[test]
    fn test_order_key_parse() {
        assert_eq!(OrderKey::parse(None), None);
        assert_eq!(OrderKey::parse(Some("")), None);
        assert_eq!(OrderKey::parse(Some("   ")), None);
        assert_eq!(OrderKey::parse(Some(" 4 ")).unwrap().as_str(), "4");
    }

    #[test]
    fn test_order_key_numeric_comparison() {
        assert_eq!(key("9").compare(&key("10")), Ordering::Less);
        assert_eq!(key("10").compare(&key("10")), Ordering::Equal);
        assert_eq!(key("-1").compare(&key("0")), Ordering::Less);
    }

    #[test]
    fn test_order_key_text_comparison() {
        assert_eq!(key("a").compare(&key("b")), Ordering::Less);
        assert_eq!(key("b2").compare(&key("b10")), Ordering::Greater);
        assert_eq!(key("10").compare(&key("9a")), Ordering::Less);
    }

    #[test]
    fn test_check_order_trivial() {
        assert!(check_order(std::iter::empty()));
        assert!(check_order([None]));
        assert!(check_order([Some(&key("3"))]));
    }

    #[test]
    fn test_check_order_ascending_and_equal() {
        let (a, b, c) = (key("1"), key("2"), key("2"));
        assert!(check_order([Some(&a), Some(&b), Some(&c)]));
        assert!(!check_order([Some(&b), Some(&a)]));
    }

    #[test]
    fn test_check_order_missing_key_fails_closed() {
        let (a, b) = (key("1"), key("2"));
        assert!(!check_order([Some(&a), None, Some(&b)]));
        assert!(!check_order([None, Some(&a)]));
        assert!(!check_order([Some(&a), None]));
    }

    #[test]
    fn test_check_order_double_digit_keys() {
        let keys: Vec<_> = (1..=12).map(|i| key(&i.to_string())).collect();
        assert!(check_order(keys.iter().map(Some)));
    }

    #[test]
    fn test_check_order_is_idempotent() {
        let (widget, host) = widget(&["2", "1", "3"]);
        assert_eq!(widget.check_order(), widget.check_order());
        assert!(!widget.check_order());
        assert!(!widget.is_correct());
        assert_eq!(host.total(), 0);
    }

    #[test]
    fn test_drag_start_marks_single_block() {
        let (mut widget, _) = widget(&["1", "2", "3"]);
        let first = widget.blocks()[0].id();
        let second = widget.blocks()[1].id();

        widget.drag_start(first);
        assert!(widget.blocks()[0].flags().dragged);
        assert_eq!(widget.dragged(), Some(first));

        // A second start without an end moves the flag rather than duplicating it.
        widget.drag_start(second);
        let dragged: Vec<_> = widget.blocks().iter().filter(|b| b.flags().dragged).collect();
        assert_eq!(dragged.len(), 1);
        assert_eq!(dragged[0].id(), second);
    }

    #[test]
    fn test_drag_over_accepts_move() {
        let (widget, _) = widget(&["1", "2"]);
        assert_eq!(widget.drag_over(), DropEffect::Move);
        assert_eq!(widget.drag_over().as_str(), "move");
    }

    #[test]
    fn test_drag_enter_highlights_side() {
        let (mut widget, _) = widget(&["1", "2", "3"]);
        let ids = widget.order();

        widget.drag_start(ids[1]);
        widget.drag_enter(ids[0]);
        widget.drag_enter(ids[2]);
        widget.drag_enter(ids[1]);

        let flags: Vec<_> = widget.blocks().iter().map(Block::flags).collect();
        assert!(flags[0].dragover_before && !flags[0].dragover_after);
        assert!(flags[2].dragover_after && !flags[2].dragover_before);
        assert!(!flags[1].dragover_before && !flags[1].dragover_after);
    }

    #[test]
    fn test_drag_enter_without_drag_is_ignored() {
        let (mut widget, _) = widget(&["1", "2"]);
        let ids = widget.order();
        widget.drag_enter(ids[0]);
        assert_eq!(widget.blocks()[0].flags(), BlockFlags::default());
    }

    #[test]
    fn test_drag_leave_clears_highlight() {
        let (mut widget, _) = widget(&["1", "2", "3"]);
        let ids = widget.order();
        widget.drag_start(ids[0]);
        widget.drag_enter(ids[2]);
        assert!(widget.blocks()[2].flags().dragover_after);

        widget.drag_leave(ids[2]);
        assert!(!widget.blocks()[2].flags().dragover_after);
        assert!(!widget.blocks()[2].flags().dragover_before);
    }

    #[test]
    fn test_drop_without_drag_is_ignored() {
        let (mut widget, host) = widget(&["2", "1"]);
        let ids = widget.order();
        assert_eq!(widget.drop(ids[0]), DropOutcome::Ignored);
        assert_eq!(widget.order(), ids);
        assert_eq!(host.total(), 0);
    }

    #[test]
    fn test_drop_onto_self_is_noop() {
        let (mut widget, host) = widget(&["2", "1", "3"]);
        let before = widget.order();

        assert_eq!(drag(&mut widget, 1, 1), DropOutcome::Ignored);
        assert_eq!(widget.order(), before);
        assert_eq!(host.total(), 0);
    }

    #[test]
    fn test_drop_upward_lands_before_target() {
        let (mut widget, host) = widget(&["a", "b", "c", "d"]);
        drag(&mut widget, 3, 1);
        assert_eq!(keys(&widget), vec!["a", "d", "b", "c"]);
        assert_eq!(host.action_sounds.get(), 1);
    }

    #[test]
    fn test_drop_downward_lands_after_target() {
        let (mut widget, _) = widget(&["a", "b", "c", "d"]);
        assert_eq!(
            drag(&mut widget, 0, 1),
            DropOutcome::Moved { from: 0, to: 1, correct: false }
        );
        assert_eq!(keys(&widget), vec!["b", "a", "c", "d"]);

        // Onto the last block: its position no longer exists, so append.
        assert_eq!(
            drag(&mut widget, 0, 3),
            DropOutcome::Moved { from: 0, to: 3, correct: false }
        );
        assert_eq!(keys(&widget), vec!["a", "c", "d", "b"]);
    }

    #[test]
    fn test_drop_clears_target_highlight() {
        let (mut widget, _) = widget(&["1", "2", "3"]);
        let ids = widget.order();
        widget.drag_start(ids[2]);
        widget.drag_enter(ids[0]);
        widget.drop(ids[0]);
        let target = widget.position(ids[0]).unwrap();
        assert!(!widget.blocks()[target].flags().dragover_before);
    }

    #[test]
    fn test_drag_end_clears_drag() {
        let (mut widget, _) = widget(&["1", "2"]);
        let ids = widget.order();
        widget.drag_start(ids[0]);
        widget.drag_end();

        assert_eq!(widget.dragged(), None);
        assert!(widget.blocks().iter().all(|b| !b.flags().dragged));
        // A stray drop after the drag ended does nothing.
        assert_eq!(widget.drop(ids[1]), DropOutcome::Ignored);
    }

    #[test]
    fn test_three_block_scenario() {
        let (mut widget, host) = widget(&["3", "1", "2"]);

        // Drag "1" onto "3".
        let outcome = drag(&mut widget, 1, 0);
        assert_eq!(outcome, DropOutcome::Moved { from: 1, to: 0, correct: false });
        assert_eq!(keys(&widget), vec!["1", "3", "2"]);
        assert!(!widget.check_order());
        assert!(!widget.is_correct());
        assert_eq!(host.celebrations.get(), 0);

        // Drag "2" onto "3".
        let outcome = drag(&mut widget, 2, 1);
        assert_eq!(outcome, DropOutcome::Moved { from: 2, to: 1, correct: true });
        assert_eq!(keys(&widget), vec!["1", "2", "3"]);
        assert!(widget.check_order());
        assert!(widget.is_correct());
        assert_eq!(host.action_sounds.get(), 2);
        assert_eq!(host.correct_sounds.get(), 1);
        assert_eq!(host.celebrations.get(), 1);
    }

    #[test]
    fn test_correct_mark_cleared_when_order_breaks() {
        let (mut widget, host) = widget(&["2", "1"]);
        drag(&mut widget, 1, 0);
        assert!(widget.is_correct());

        drag(&mut widget, 0, 1);
        assert!(!widget.is_correct());
        assert_eq!(host.celebrations.get(), 1);
    }

    #[test]
    fn test_missing_key_never_validates() {
        let host = Rc::new(RecordingHost::new());
        let mut widget = ReorderWidget::new([Some("2"), None, Some("1")], host.clone());
        drag(&mut widget, 2, 0);
        drag(&mut widget, 2, 1);
        assert!(!widget.is_correct());
        assert_eq!(host.celebrations.get(), 0);
        assert_eq!(host.action_sounds.get(), 2);
    }

    proptest! {
        #[test]
        fn prop_sorting_marks_correct_exactly_once(
            keys in Just((1..=9).collect::<Vec<u32>>()).prop_shuffle()
        ) {
            let host = Rc::new(RecordingHost::new());
            let raw: Vec<_> = keys.iter().map(|k| Some(k.to_string())).collect();
            let mut widget = ReorderWidget::new(raw, host.clone());
            let key_of = |w: &ReorderWidget, i: usize| {
                w.blocks()[i].key().unwrap().as_str().parse::<u32>().unwrap()
            };

            // Selection sort by dragging: bring each next-smallest block up to
            // its final slot.
            for slot in 0..keys.len() {
                let from = (slot..keys.len())
                    .min_by_key(|&i| key_of(&widget, i))
                    .unwrap();
                if from == slot {
                    continue;
                }
                prop_assert!(!widget.is_correct());
                drag(&mut widget, from, slot);
                prop_assert_eq!(widget.is_correct(), widget.check_order());
            }

            prop_assert!(widget.check_order());
            let was_sorted = keys.windows(2).all(|w| w[0] <= w[1]);
            let expected = if was_sorted { 0 } else { 1 };
            prop_assert_eq!(host.celebrations.get(), expected);
            prop_assert_eq!(widget.is_correct(), !was_sorted);
        }
    }
}
