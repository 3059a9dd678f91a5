//! End-to-end scenarios for browsing and editing one tile's item stack.

use map_core::{Item, Position, Selection, Tile, TileItemList};

fn abc_tile() -> Tile {
    Tile::new(Position::new(32000, 32000, 7))
        .with_ground(Item::with_id(4526, "G"))
        .with_item(Item::with_id(1, "A"))
        .with_item(Item::with_id(2, "B"))
        .with_item(Item::with_id(3, "C"))
}

fn display(list: &TileItemList, tile: &Tile) -> Vec<String> {
    list.iter(tile).map(|item| item.name.clone()).collect()
}

#[test]
fn projection_size_matches_tile() {
    let tiles = [
        Tile::default(),
        Tile::default().with_ground(Item::with_id(1, "g")),
        Tile::default().with_item(Item::with_id(2, "x")),
        abc_tile(),
    ];

    for tile in &tiles {
        let list = TileItemList::build(tile);
        assert_eq!(
            list.len(),
            tile.items.len() + usize::from(tile.ground.is_some())
        );
    }
}

#[test]
fn first_row_is_top_of_stack_and_last_row_is_ground() {
    let tile = abc_tile();
    let list = TileItemList::build(&tile);

    assert_eq!(list.item(&tile, 0), tile.items.last());
    assert_eq!(list.item(&tile, list.len() - 1), tile.ground.as_ref());
}

#[test]
fn reorder_then_delete_session() {
    let mut tile = abc_tile();
    let mut list = TileItemList::build(&tile);
    let mut selection = Selection::new();

    assert_eq!(display(&list, &tile), ["C", "B", "A", "G"]);

    // B to the top.
    selection.set_single(1);
    assert!(list.move_selected_up(&mut tile, &mut selection));
    assert_eq!(display(&list, &tile), ["B", "C", "A", "G"]);
    assert_eq!(selection.single(), Some(0));

    // A can not sink below the ground.
    selection.set_single(2);
    assert!(!list.move_selected_down(&mut tile, &mut selection));
    assert_eq!(display(&list, &tile), ["B", "C", "A", "G"]);

    // Delete C and the ground together.
    let mut selection: Selection = [1, 3].into_iter().collect();
    let removed = list.remove_selected(&mut tile, &mut selection);
    let removed: Vec<_> = removed.into_iter().map(|item| item.name).collect();

    assert_eq!(removed, ["G", "C"]);
    assert!(selection.is_empty());
    assert_eq!(display(&list, &tile), ["B", "A"]);
    assert_eq!(tile.item_count(), 2);
}

#[test]
fn controls_track_each_step() {
    let mut tile = abc_tile();
    let mut list = TileItemList::build(&tile);
    let mut selection = Selection::single_row(1);

    let controls = list.controls(&selection);
    assert!(controls.move_up && controls.move_down);

    list.move_selected_up(&mut tile, &mut selection);
    let controls = list.controls(&selection);
    assert!(!controls.move_up && controls.move_down);

    list.remove_selected(&mut tile, &mut selection);
    let controls = list.controls(&selection);
    assert!(!controls.delete && !controls.select_raw);
}
