// Example: reconcile two checklist snapshots into a minimal edit script.
use checklist::{ChecklistItem, compute_edit_script};

fn main() {
    let on_screen = [
        ChecklistItem::new(1, "Milk", false),
        ChecklistItem::new(2, "Eggs", true),
    ];
    let from_storage = [
        ChecklistItem::new(2, "Eggs", true),
        ChecklistItem::new(3, "Bread", false),
    ];

    // Milk leaves, Bread arrives, and the Eggs row is left untouched.
    for edit in compute_edit_script(&on_screen, &from_storage) {
        println!("{edit:?}");
    }
}
