//! Property-based invariant tests for palette layout and selection.
//!
//! 1. Concatenating the columns reproduces the palette.
//! 2. Every column but the last is full; the last holds the remainder.
//! 3. Applying the same palette twice is the same as applying it once.
//! 4. Any palette member can be selected.
//! 5. Non-members are rejected and the selection is left alone.

use proptest::prelude::*;
use swatchgrid_engine::{RecordingRenderer, SelectionController, layout};
use swatchgrid_types::{PaletteError, Rgb};

// ── Helpers ─────────────────────────────────────────────────────────────

fn rgb_strategy() -> impl Strategy<Value = Rgb> {
    any::<(u8, u8, u8)>().prop_map(Rgb::from)
}

/// Palettes with unique colors, in a generated order.
fn palette_strategy() -> impl Strategy<Value = Vec<Rgb>> {
    proptest::collection::vec(rgb_strategy(), 0..40).prop_map(|colors| {
        let mut unique = Vec::with_capacity(colors.len());
        for color in colors {
            if !unique.contains(&color) {
                unique.push(color);
            }
        }
        unique
    })
}

fn non_empty_palette_strategy() -> impl Strategy<Value = Vec<Rgb>> {
    palette_strategy().prop_filter("palette must not be empty", |palette| !palette.is_empty())
}

fn controller(capacity: usize) -> SelectionController<RecordingRenderer> {
    SelectionController::new(capacity, RecordingRenderer::default()).unwrap()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Coverage
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn columns_concatenate_to_palette(palette in palette_strategy(), capacity in 1usize..12) {
        let grid = layout(&palette, capacity).unwrap();
        prop_assert_eq!(grid.flatten(), palette);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Column sizing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn only_last_column_may_be_short(palette in palette_strategy(), capacity in 1usize..12) {
        let grid = layout(&palette, capacity).unwrap();
        let remainder = palette.len() % capacity;
        let full = palette.len() / capacity;

        let expected_columns = full + usize::from(remainder != 0);
        prop_assert_eq!(grid.len(), expected_columns);

        for (index, column) in grid.columns().iter().enumerate() {
            prop_assert!(!column.is_empty(), "column {} is empty", index);
            if index + 1 < grid.len() || remainder == 0 {
                prop_assert_eq!(column.len(), capacity);
            } else {
                prop_assert_eq!(column.len(), remainder);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Idempotent palette change
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn applying_palette_twice_matches_once(palette in palette_strategy(), capacity in 1usize..8) {
        let mut once = controller(capacity);
        once.set_available_colors(&palette);

        let mut twice = controller(capacity);
        twice.set_available_colors(&palette);
        if let Some(&first) = palette.first() {
            twice.select(first).unwrap();
        }
        twice.set_available_colors(&palette);

        prop_assert_eq!(once.grid(), twice.grid());
        prop_assert_eq!(once.selected(), None);
        prop_assert_eq!(twice.selected(), None);
        for &color in &palette {
            prop_assert_eq!(once.column_of(color), twice.column_of(color));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Members are selectable
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn every_member_can_be_selected(
        (palette, index) in non_empty_palette_strategy()
            .prop_flat_map(|palette| { let len = palette.len(); (Just(palette), 0..len) }),
        capacity in 1usize..8,
    ) {
        let mut controller = controller(capacity);
        controller.set_available_colors(&palette);
        let color = palette[index];

        controller.select(color).unwrap();
        prop_assert_eq!(controller.selected(), Some(color));

        let column = controller.column_of(color).unwrap();
        prop_assert!(controller.grid().column(column).unwrap().contains(&color));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Non-members are rejected
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn non_member_is_rejected_without_state_change(
        palette in palette_strategy(),
        outsider in rgb_strategy(),
        preselect in any::<bool>(),
    ) {
        prop_assume!(!palette.contains(&outsider));
        let mut controller = controller(3);
        controller.set_available_colors(&palette);
        if preselect && let Some(&first) = palette.first() {
            controller.select(first).unwrap();
        }
        let before = controller.selected();

        prop_assert_eq!(controller.select(outsider), Err(PaletteError::NotRegistered(outsider)));
        prop_assert_eq!(controller.selected(), before);
    }
}
