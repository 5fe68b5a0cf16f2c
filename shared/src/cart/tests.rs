use super::*;

// =========================================================
// 辅助函数
// =========================================================

fn product(id: u32, price: f64, stock: u32) -> Product {
    Product {
        id,
        title: format!("producto-{id}"),
        description: String::new(),
        price,
        stock,
        category: "test".to_string(),
        thumbnail: String::new(),
        rating: 0.0,
        discount_percentage: 0.0,
        brand: None,
        images: Vec::new(),
    }
}

// =========================================================
// add_item 测试
// =========================================================

#[test]
fn test_add_item_appends_new_line_with_quantity_one() {
    let mut cart = CartState::new();
    cart.add_item(product(1, 10.0, 5));

    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].quantity, 1);
    assert_eq!(cart.total(), 10.0);
}

#[test]
fn test_add_item_ignores_out_of_stock_product() {
    let mut cart = CartState::new();
    cart.add_item(product(1, 10.0, 0));

    assert!(cart.is_empty());
    assert_eq!(cart.total(), 0.0);
}

#[test]
fn test_repeated_add_item_increments_until_stock_ceiling() {
    let mut cart = CartState::new();
    for _ in 0..10 {
        cart.add_item(product(1, 2.5, 3));
    }

    // 数量收敛于库存，总价始终等于 单价 × 数量
    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].quantity, 3);
    assert_eq!(cart.total(), 7.5);
}

#[test]
fn test_add_item_preserves_insertion_order() {
    let mut cart = CartState::new();
    cart.add_item(product(3, 1.0, 9));
    cart.add_item(product(1, 1.0, 9));
    cart.add_item(product(2, 1.0, 9));
    cart.add_item(product(1, 1.0, 9));

    let ids: Vec<u32> = cart.items().iter().map(|l| l.product.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert_eq!(cart.items_count(), 4);
}

// =========================================================
// remove / increment / decrement 测试
// =========================================================

#[test]
fn test_remove_item_drops_whole_line() {
    let mut cart = CartState::new();
    cart.add_item(product(1, 10.0, 5));
    cart.add_item(product(2, 4.0, 5));
    cart.add_item(product(2, 4.0, 5));

    cart.remove_item(2);

    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].product.id, 1);
    assert_eq!(cart.total(), 10.0);
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let mut cart = CartState::new();
    cart.add_item(product(1, 10.0, 5));

    cart.remove_item(99);

    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.total(), 10.0);
}

#[test]
fn test_increment_clamps_to_stock() {
    let mut cart = CartState::new();
    cart.add_item(product(1, 5.0, 2));
    cart.increment_item(1);
    cart.increment_item(1);
    cart.increment_item(1);

    assert_eq!(cart.items()[0].quantity, 2);
    assert_eq!(cart.total(), 10.0);
}

#[test]
fn test_increment_unknown_id_is_noop() {
    let mut cart = CartState::new();
    cart.increment_item(7);
    assert!(cart.is_empty());
}

#[test]
fn test_decrement_at_quantity_one_removes_line_and_restores_total() {
    let mut cart = CartState::new();
    cart.add_item(product(1, 10.0, 5));
    let total_before = cart.total();

    cart.add_item(product(2, 3.0, 5));
    cart.decrement_item(2);

    // 数量 1 再减一次即整行消失，总价回到加入前
    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.total(), total_before);
}

#[test]
fn test_decrement_reduces_quantity() {
    let mut cart = CartState::new();
    cart.add_item(product(1, 2.0, 5));
    cart.add_item(product(1, 2.0, 5));
    cart.add_item(product(1, 2.0, 5));

    cart.decrement_item(1);

    assert_eq!(cart.items()[0].quantity, 2);
    assert_eq!(cart.total(), 4.0);
}

#[test]
fn test_decrement_unknown_id_is_noop() {
    let mut cart = CartState::new();
    cart.add_item(product(1, 2.0, 5));
    cart.decrement_item(42);
    assert_eq!(cart.items_count(), 1);
}

// =========================================================
// update_quantity 测试
// =========================================================

#[test]
fn test_update_quantity_sets_exact_value() {
    let mut cart = CartState::new();
    cart.add_item(product(1, 3.0, 10));

    cart.update_quantity(1, 4);

    assert_eq!(cart.items()[0].quantity, 4);
    assert_eq!(cart.total(), 12.0);
}

#[test]
fn test_update_quantity_clamps_to_stock() {
    let mut cart = CartState::new();
    cart.add_item(product(1, 3.0, 4));

    cart.update_quantity(1, 100);

    assert_eq!(cart.items()[0].quantity, 4);
    assert_eq!(cart.total(), 12.0);
}

#[test]
fn test_update_quantity_zero_removes_line() {
    let mut cart = CartState::new();
    cart.add_item(product(1, 3.0, 4));
    cart.add_item(product(2, 1.0, 4));

    cart.update_quantity(1, 0);

    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items_count(), 1);
    assert_eq!(cart.total(), 1.0);
}

#[test]
fn test_update_quantity_unknown_id_is_noop() {
    let mut cart = CartState::new();
    cart.add_item(product(1, 3.0, 4));

    cart.update_quantity(9, 2);

    assert_eq!(cart.items()[0].quantity, 1);
    assert_eq!(cart.total(), 3.0);
}

// =========================================================
// clear / 派生值测试
// =========================================================

#[test]
fn test_clear_resets_to_empty() {
    let mut cart = CartState::new();
    cart.add_item(product(1, 3.0, 4));
    cart.add_item(product(2, 1.0, 4));

    cart.clear();

    assert!(cart.is_empty());
    assert_eq!(cart.total(), 0.0);
    assert_eq!(cart.items_count(), 0);
}

#[test]
fn test_items_count_sums_quantities_across_lines() {
    let mut cart = CartState::new();
    cart.add_item(product(1, 3.0, 9));
    cart.add_item(product(1, 3.0, 9));
    cart.add_item(product(2, 1.0, 9));

    assert_eq!(cart.items_count(), 3);
}

#[test]
fn test_total_is_recomputed_not_drifted() {
    let mut cart = CartState::new();
    cart.add_item(product(1, 0.1, 100));
    for _ in 0..9 {
        cart.increment_item(1);
    }

    // 完整重算：0.1 × 10，而非九次增量相加
    assert_eq!(cart.total(), 0.1 * 10.0);
}
