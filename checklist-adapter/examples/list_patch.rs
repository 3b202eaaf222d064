// Example: patch a console "list view" from successive checklist snapshots.
use checklist::ChecklistItem;
use checklist_adapter::{ListController, RowSurface};

/// Prints every operation the controller applies, like a UI toolkit logging its list updates.
#[derive(Default)]
struct ConsoleSurface;

impl RowSurface for ConsoleSurface {
    fn insert_row(&mut self, position: usize, item: &ChecklistItem) {
        println!("insert row {position}: {:?}", item.description_or_empty());
    }

    fn remove_row(&mut self, position: usize) {
        println!("remove row {position}");
    }

    fn update_row(&mut self, position: usize, item: &ChecklistItem) {
        println!("update row {position}: {:?}", item.description_or_empty());
    }
}

fn main() {
    let mut controller = ListController::new(ConsoleSurface);
    controller.set_on_row_click(Some(|row: usize, id| {
        println!("tapped row {row} -> item id {id}");
    }));

    println!("-- first snapshot --");
    controller.submit_list(vec![
        ChecklistItem::new(1, "Milk", false),
        ChecklistItem::new(2, "Eggs", true),
    ]);

    println!("-- second snapshot: Milk leaves, Bread arrives --");
    controller.submit_list(vec![
        ChecklistItem::new(2, "Eggs", true),
        ChecklistItem::new(3, "Bread", false),
    ]);

    controller.click(1);
}
