//! # Terminal Rendering
//!
//! Text the cashier sees. Formatting lives here so `grocer-core` never has to
//! know what a terminal looks like.
//!
//! ```text
//! [1]Apple                 Beer
//! [2]Potato                Unit Price: $12.00
//! ...                      ABV: 5.0%
//! [0]Cancel                Alcohol Tax: 5%
//! Input number of your     Total Price: $12.60
//! item:
//!        menu()                 item_block()
//! ```

use grocer_core::catalog::{self, CANCEL_CODE};
use grocer_core::Item;

/// The menu prompt, built from the catalog so new entries show up on their own.
pub fn menu() -> String {
    let entries: String = catalog::entries()
        .iter()
        .map(|entry| format!("[{}]{} \n", entry.code, entry.name))
        .collect();
    format!("{}[{}]Cancel \nInput number of your item: ", entries, CANCEL_CODE)
}

/// One item as printed when it is rung up. No surrounding blank lines.
pub fn item_block(item: &Item) -> String {
    let details = match item {
        Item::Produce(produce) => format!("Weight: {} lbs.", produce.weight()),
        Item::Alcohol(alcohol) => format!(
            "ABV: {}%\nAlcohol Tax: {}",
            alcohol.abv(),
            alcohol.tax_rate()
        ),
        Item::Frozen(frozen) => format!("Quantity: {}", frozen.quantity()),
    };

    format!(
        "{}\nUnit Price: {}\n{}\nTotal Price: {}",
        item.name(),
        item.unit_price(),
        details,
        item.total_price()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use grocer_core::catalog::select;
    use grocer_core::Weight;

    fn item(code: &str) -> Item {
        select(code, Some(Weight::from_pounds(3)))
            .unwrap()
            .into_item()
            .unwrap()
    }

    #[test]
    fn test_menu_lists_every_code() {
        let menu = menu();
        assert!(menu.starts_with("[1]Apple \n[2]Potato \n[3]Cilantro \n"));
        assert!(menu.contains("[7]Ice Cream \n[8]TV Dinner \n[9]Pizza Rolls \n"));
        assert!(menu.ends_with("[0]Cancel \nInput number of your item: "));
    }

    #[test]
    fn test_produce_block() {
        assert_eq!(
            item_block(&item("1")),
            "Apple\nUnit Price: $0.75\nWeight: 3.00 lbs.\nTotal Price: $2.25"
        );
    }

    #[test]
    fn test_alcohol_block() {
        assert_eq!(
            item_block(&item("4")),
            "Beer\nUnit Price: $12.00\nABV: 5.0%\nAlcohol Tax: 5%\nTotal Price: $12.60"
        );
        assert!(item_block(&item("6")).contains("Alcohol Tax: 20%\nTotal Price: $46.80"));
    }

    #[test]
    fn test_frozen_block() {
        assert_eq!(
            item_block(&item("8")),
            "TV Dinner\nUnit Price: $5.00\nQuantity: 1\nTotal Price: $5.00"
        );
    }
}
