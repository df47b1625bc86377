use golfguide_core::{CollectionChange, Group, GroupFields, Item, ItemFields, TOP_ITEMS_CAP};
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

const GROUP_ID: &str = "Group-1";

fn group() -> Group {
    Group::new(GroupFields::new(GROUP_ID, "Golf Directions"))
}

/// Item `n` is 1-based to match how articles are numbered in the guide.
fn item(n: usize) -> Item {
    Item::new(ItemFields::new(
        format!("item{n}"),
        GROUP_ID,
        format!("Article {n}"),
    ))
}

fn group_with(count: usize) -> Group {
    let mut group = group();
    for n in 1..=count {
        group.push_item(item(n)).unwrap();
    }
    group
}

fn ids(items: &[Rc<Item>]) -> Vec<String> {
    items.iter().map(|item| item.unique_id().to_string()).collect()
}

fn names(numbers: impl IntoIterator<Item = usize>) -> Vec<String> {
    numbers.into_iter().map(|n| format!("item{n}")).collect()
}

fn assert_prefix_invariant(group: &Group) {
    let expected_len = group.items().len().min(TOP_ITEMS_CAP);
    assert_eq!(group.top_items().len(), expected_len);
    for (top, full) in group.top_items().iter().zip(group.items()) {
        assert!(Rc::ptr_eq(top, full), "top items diverged from items prefix");
    }
}

/// Rebuilds `top_items` purely from its change events, the way a bound list
/// view would, and records the mirrored length after every event.
struct TopItemsMirror {
    ids: Rc<RefCell<Vec<String>>>,
    lengths: Rc<RefCell<Vec<usize>>>,
}

impl TopItemsMirror {
    fn attach(group: &mut Group) -> Self {
        let mirrored = Rc::new(RefCell::new(ids(group.top_items())));
        let lengths = Rc::new(RefCell::new(Vec::new()));
        let (ids_sink, lengths_sink) = (Rc::clone(&mirrored), Rc::clone(&lengths));
        group.subscribe_top_items(move |change| {
            let mut mirror = ids_sink.borrow_mut();
            match change {
                CollectionChange::Insert { index, value } => {
                    mirror.insert(index, value.unique_id().to_string());
                }
                CollectionChange::Move { from, to } => {
                    let moved = mirror.remove(from);
                    mirror.insert(to, moved);
                }
                CollectionChange::Remove { index } => {
                    mirror.remove(index);
                }
                CollectionChange::Replace { index, value } => {
                    mirror[index] = value.unique_id().to_string();
                }
                CollectionChange::Reset { values } => *mirror = ids(values),
            }
            lengths_sink.borrow_mut().push(mirror.len());
        });
        Self {
            ids: mirrored,
            lengths,
        }
    }
}

#[test]
fn boundary_patches_are_observed_at_full_length() {
    let mut group = group_with(15);
    let mirror = TopItemsMirror::attach(&mut group);

    group.insert_item(0, item(16)).unwrap();
    group.move_item(0, 14).unwrap();
    group.remove_item(3).unwrap();

    assert_eq!(*mirror.lengths.borrow(), vec![TOP_ITEMS_CAP; 3]);
    assert_eq!(*mirror.ids.borrow(), ids(group.top_items()));
}

#[test]
fn single_step_patches_keep_their_own_event() {
    let mut group = group_with(5);
    let actions = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&actions);
    group.subscribe_top_items(move |change| sink.borrow_mut().push(change.action()));

    group.insert_item(2, item(6)).unwrap();
    group.move_item(0, 4).unwrap();
    group.replace_item(1, item(7)).unwrap();
    group.remove_item(0).unwrap();

    assert_eq!(*actions.borrow(), vec!["insert", "move", "replace", "remove"]);
}

#[test]
fn unsubscribed_top_items_observer_hears_nothing() {
    let mut group = group_with(3);
    let hits = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&hits);
    let id = group.subscribe_top_items(move |_| *sink.borrow_mut() += 1);

    group.push_item(item(4)).unwrap();
    assert!(group.unsubscribe_top_items(id));
    assert!(!group.unsubscribe_top_items(id));
    group.push_item(item(5)).unwrap();

    assert_eq!(*hits.borrow(), 1);
}

#[test]
fn unsubscribed_items_observer_hears_nothing() {
    let mut group = group_with(13);
    let hits = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&hits);
    let id = group.subscribe_items(move |_| *sink.borrow_mut() += 1);

    group.remove_item(12).unwrap();
    assert!(group.unsubscribe_items(id));
    group.remove_item(0).unwrap();

    assert_eq!(*hits.borrow(), 1);
}

#[derive(Debug, Clone)]
enum GroupOp {
    Insert(usize),
    Move(usize, usize),
    Remove(usize),
    Replace(usize),
    Reset(usize),
    Clear,
}

fn group_op() -> impl Strategy<Value = GroupOp> {
    prop_oneof![
        4 => any::<usize>().prop_map(GroupOp::Insert),
        3 => (any::<usize>(), any::<usize>()).prop_map(|(from, to)| GroupOp::Move(from, to)),
        3 => any::<usize>().prop_map(GroupOp::Remove),
        1 => any::<usize>().prop_map(GroupOp::Replace),
        1 => (0..25usize).prop_map(GroupOp::Reset),
        1 => Just(GroupOp::Clear),
    ]
}

proptest! {
    #[test]
    fn top_items_follow_items_through_any_group_mutations(
        initial in 0..25usize,
        ops in proptest::collection::vec(group_op(), 0..150)
    ) {
        let mut group = group_with(initial);
        let mirror = TopItemsMirror::attach(&mut group);
        let mut next = 1_000;

        for op in ops {
            let len = group.items().len();
            next += 1;
            match op {
                GroupOp::Insert(seed) => {
                    group.insert_item(seed % (len + 1), item(next)).unwrap();
                }
                GroupOp::Move(from, to) if len > 0 => {
                    group.move_item(from % len, to % len).unwrap();
                }
                GroupOp::Remove(seed) if len > 0 => {
                    group.remove_item(seed % len).unwrap();
                }
                GroupOp::Replace(seed) if len > 0 => {
                    group.replace_item(seed % len, item(next)).unwrap();
                }
                GroupOp::Reset(count) => {
                    group.reset_items((0..count).map(|n| item(next * 100 + n))).unwrap();
                }
                GroupOp::Clear => group.clear_items(),
                GroupOp::Move(..) | GroupOp::Remove(_) | GroupOp::Replace(_) => {}
            }

            assert_prefix_invariant(&group);
            prop_assert_eq!(&*mirror.ids.borrow(), &ids(group.top_items()));
        }

        let expected = group.top_items().len();
        prop_assert!(mirror.lengths.borrow().iter().all(|length| *length <= TOP_ITEMS_CAP));
        prop_assert!(mirror.lengths.borrow().last().map_or(true, |length| *length == expected));
    }
}

#[test]
fn append_growth_keeps_first_twelve() {
    let mut group = group();

    for n in 1..=15 {
        group.push_item(item(n)).unwrap();
        assert_prefix_invariant(&group);
        if n == 13 {
            assert_eq!(ids(group.top_items()), names(1..=12));
        }
    }

    assert_eq!(group.items().len(), 15);
    assert_eq!(ids(group.top_items()), names(1..=12));
}

#[test]
fn move_across_boundary_into_window() {
    let mut group = group_with(15);

    group.move_item(13, 0).unwrap();

    let mut expected = names([14]);
    expected.extend(names(1..=11));
    assert_eq!(ids(group.top_items()), expected);
    assert!(!ids(group.top_items()).contains(&"item12".to_string()));
    assert!(!ids(group.top_items()).contains(&"item13".to_string()));
    assert_prefix_invariant(&group);
}

#[test]
fn move_across_boundary_out_of_window() {
    let mut group = group_with(15);

    group.move_item(0, 14).unwrap();

    assert_eq!(ids(group.top_items()), names(2..=13));
    assert_prefix_invariant(&group);
}

#[test]
fn move_within_window_reorders() {
    let mut group = group_with(15);

    group.move_item(2, 9).unwrap();

    assert_prefix_invariant(&group);
    assert_eq!(group.top_items()[9].unique_id(), "item3");
}

#[test]
fn remove_inside_window_backfills_from_items() {
    let mut group = group_with(15);

    let removed = group.remove_item(5).unwrap();

    assert_eq!(removed.unique_id(), "item6");
    let mut expected = names(1..=5);
    expected.extend(names(7..=13));
    assert_eq!(ids(group.top_items()), expected);
    assert_prefix_invariant(&group);
}

#[test]
fn removing_last_of_twelve_leaves_eleven() {
    let mut group = group_with(12);

    group.remove_item(11).unwrap();

    assert_eq!(group.top_items().len(), 11);
    assert_prefix_invariant(&group);
}

#[test]
fn replace_overwrites_in_place() {
    let mut group = group_with(15);

    let previous = group.replace_item(4, item(99)).unwrap();
    group.replace_item(14, item(98)).unwrap();

    assert_eq!(previous.unique_id(), "item5");
    assert_eq!(group.top_items().len(), TOP_ITEMS_CAP);
    assert_eq!(group.top_items()[4].unique_id(), "item99");
    assert_prefix_invariant(&group);
}

#[test]
fn reset_rebuilds_from_new_contents() {
    let mut group = group_with(15);

    group.clear_items();
    assert!(group.top_items().is_empty());

    group.reset_items([item(1), item(2), item(3)]).unwrap();

    assert_eq!(ids(group.top_items()), names(1..=3));
    assert_prefix_invariant(&group);
}

#[test]
fn insert_at_front_pushes_twelfth_out() {
    let mut group = group_with(12);

    group.insert_item(0, item(0)).unwrap();

    assert_eq!(ids(group.top_items()), names(0..=11));
    assert_prefix_invariant(&group);
}

#[test]
fn rejected_reset_keeps_previous_contents() {
    let mut group = group_with(3);
    let foreign = Item::new(ItemFields::new("x", "Group-9", "Foreign"));

    assert!(group.reset_items([item(7), foreign]).is_err());

    assert_eq!(ids(group.items()), names(1..=3));
    assert_prefix_invariant(&group);
}

#[test]
fn top_items_never_exceed_cap_during_mixed_mutations() {
    let mut group = group_with(20);
    let mut counter = 100;

    for round in 0..60 {
        let len = group.items().len();
        match round % 5 {
            0 => {
                counter += 1;
                group.insert_item(round % (len + 1), item(counter)).unwrap();
            }
            1 => group.move_item(len - 1, round % len).unwrap(),
            2 => group.move_item(round % len, len - 1).unwrap(),
            3 => {
                group.remove_item((round * 7) % len).unwrap();
            }
            _ => {
                counter += 1;
                group.replace_item(round % len, item(counter)).unwrap();
            }
        }
        assert_prefix_invariant(&group);
    }
}
