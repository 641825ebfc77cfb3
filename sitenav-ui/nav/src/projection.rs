use std::collections::HashSet;

use crate::model::NavItem;

/// Entries to render in the sidebar body, in registry order.
///
/// An entry is shown when it is statically pinned, dynamically pinned, or is
/// the dropdown. The three conditions are independent, so a statically pinned
/// entry stays visible whatever `pinned` holds.
pub fn visible_items<'a>(
    items: &'a [NavItem],
    pinned: &HashSet<String>,
) -> Vec<&'a NavItem> {
    items
        .iter()
        .filter(|item| {
            item.is_pinned() || pinned.contains(item.id()) || item.is_dropdown()
        })
        .collect()
}

/// Entries listed inside the dropdown: hidden and eligible for pinning.
pub fn hidden_items<'a>(
    items: &'a [NavItem],
    pinned: &HashSet<String>,
) -> Vec<&'a NavItem> {
    items
        .iter()
        .filter(|item| {
            !(item.is_pinned()
                || pinned.contains(item.id())
                || item.is_dropdown()
                || !item.is_pinnable())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::{Just, Strategy, any, prop, prop_oneof};
    use proptest::proptest;

    use super::{hidden_items, visible_items};
    use crate::model::NavItem;

    fn ids<'a>(items: &[&'a NavItem]) -> Vec<&'a str> {
        items.iter().map(|item| item.id()).collect()
    }

    fn pins(values: &[&str]) -> HashSet<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    fn scenario() -> Vec<NavItem> {
        vec![
            NavItem::leaf("a", "A", "/a").pinned(true),
            NavItem::leaf("b", "B", "/b"),
            NavItem::dropdown("more", "More"),
        ]
    }

    #[test]
    fn given_no_dynamic_pins_when_projecting_then_static_and_dropdown_visible() {
        let items = scenario();
        let pinned = pins(&[]);

        assert_eq!(ids(&visible_items(&items, &pinned)), vec!["a", "more"]);
        assert_eq!(ids(&hidden_items(&items, &pinned)), vec!["b"]);
    }

    #[test]
    fn given_dynamic_pin_when_projecting_then_item_moves_out_of_dropdown() {
        let items = scenario();
        let pinned = pins(&["b"]);

        assert_eq!(
            ids(&visible_items(&items, &pinned)),
            vec!["a", "b", "more"]
        );
        assert!(hidden_items(&items, &pinned).is_empty());
    }

    #[test]
    fn given_empty_registry_when_projecting_then_both_sets_are_empty() {
        let pinned = pins(&["a"]);

        assert!(visible_items(&[], &pinned).is_empty());
        assert!(hidden_items(&[], &pinned).is_empty());
    }

    #[test]
    fn given_unpinned_non_pinnable_item_when_projecting_then_not_offered_in_dropdown()
     {
        // Not a valid registry, but the projection itself stays total.
        let items = vec![NavItem::leaf("audit", "Audit", "/audit").pinnable(false)];

        assert!(visible_items(&items, &pins(&[])).is_empty());
        assert!(hidden_items(&items, &pins(&[])).is_empty());
    }

    #[test]
    fn given_unknown_pin_ids_when_projecting_then_they_are_ignored() {
        let items = scenario();

        assert_eq!(
            ids(&visible_items(&items, &pins(&["ghost"]))),
            vec!["a", "more"]
        );
    }

    fn arb_item(index: usize) -> impl Strategy<Value = NavItem> {
        let id = format!("item-{index}");
        prop_oneof![
            (any::<bool>(), any::<bool>()).prop_map({
                let id = id.clone();
                move |(pinned, pinnable)| {
                    NavItem::leaf(id.clone(), id.clone(), "/")
                        .pinned(pinned || !pinnable)
                        .pinnable(pinnable)
                }
            }),
            Just(NavItem::dropdown(id.clone(), id)),
        ]
    }

    fn arb_items() -> impl Strategy<Value = Vec<NavItem>> {
        (0usize..12).prop_flat_map(|len| {
            (0..len).map(arb_item).collect::<Vec<_>>()
        })
    }

    fn arb_pins() -> impl Strategy<Value = HashSet<String>> {
        prop::collection::hash_set(
            (0usize..16).prop_map(|index| format!("item-{index}")),
            0..8,
        )
    }

    proptest! {
        #[test]
        fn visible_items_keep_registry_order(
            items in arb_items(),
            pinned in arb_pins(),
        ) {
            let visible = visible_items(&items, &pinned);
            let positions: Vec<usize> = visible
                .iter()
                .map(|item| {
                    items
                        .iter()
                        .position(|candidate| candidate.id() == item.id())
                        .unwrap_or(usize::MAX)
                })
                .collect();

            assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        }

        #[test]
        fn static_pins_and_dropdowns_are_always_visible(
            items in arb_items(),
            pinned in arb_pins(),
        ) {
            let visible = ids(&visible_items(&items, &pinned));

            for item in &items {
                if item.is_pinned() || item.is_dropdown() {
                    assert!(visible.contains(&item.id()));
                }
            }
        }

        #[test]
        fn visible_and_hidden_never_overlap(
            items in arb_items(),
            pinned in arb_pins(),
        ) {
            let visible = ids(&visible_items(&items, &pinned));
            let hidden = ids(&hidden_items(&items, &pinned));

            assert!(hidden.iter().all(|id| !visible.contains(id)));
        }

        #[test]
        fn every_pinnable_item_is_either_visible_or_hidden(
            items in arb_items(),
            pinned in arb_pins(),
        ) {
            let visible = ids(&visible_items(&items, &pinned));
            let hidden = ids(&hidden_items(&items, &pinned));

            for item in items.iter().filter(|item| item.is_pinnable()) {
                assert!(
                    visible.contains(&item.id()) || hidden.contains(&item.id())
                );
            }
        }
    }
}
