use std::collections::HashMap;

use fueleu::{
    error::AccountingErrorKind,
    ids::SequentialIdGenerator,
    pooling::{check_exit_conditions, create_pool},
};

fn member(pool: &fueleu::pooling::PoolAllocation, ship_id: &str) -> fueleu::pooling::PoolMember {
    pool.members
        .iter()
        .find(|m| m.ship_id == ship_id)
        .cloned()
        .expect("member should exist")
}

#[test]
fn given_surplus_covering_deficits_when_pooled_then_allocation_matches_greedy_order() {
    let ids = SequentialIdGenerator::new("pool");
    let member_cbs = vec![
        ("S1".to_string(), 1000.0),
        ("S2".to_string(), -500.0),
        ("S3".to_string(), -300.0),
    ];

    let allocation = create_pool(2024, &member_cbs, &ids);

    assert!(allocation.valid);
    assert_eq!(allocation.pool_sum, 200.0);
    assert_eq!(allocation.pool_id, "pool:1");
    assert_eq!(allocation.members.len(), 3);
    assert_eq!(member(&allocation, "S1").cb_after, 200.0);
    assert_eq!(member(&allocation, "S2").cb_after, 0.0);
    assert_eq!(member(&allocation, "S3").cb_after, 0.0);
}

#[test]
fn given_collective_deficit_when_pooled_then_rejected_with_no_members() {
    let ids = SequentialIdGenerator::new("pool");
    let member_cbs = vec![("S1".to_string(), -1000.0), ("S2".to_string(), -500.0)];

    let allocation = create_pool(2024, &member_cbs, &ids);

    assert!(!allocation.valid);
    assert_eq!(allocation.pool_sum, -1500.0);
    assert!(allocation.pool_id.is_empty());
    assert!(allocation.members.is_empty());
}

#[test]
fn given_valid_pool_then_total_cb_is_conserved() {
    let ids = SequentialIdGenerator::new("pool");
    let member_cbs = vec![
        ("S1".to_string(), 400.0),
        ("S2".to_string(), 250.0),
        ("S3".to_string(), -600.0),
        ("S4".to_string(), -40.0),
    ];

    let allocation = create_pool(2024, &member_cbs, &ids);

    assert!(allocation.valid);
    let before: f64 = allocation.members.iter().map(|m| m.cb_before).sum();
    let after: f64 = allocation.members.iter().map(|m| m.cb_after).sum();
    assert_eq!(before, after);
    assert_eq!(before, allocation.pool_sum);
}

#[test]
fn given_valid_pool_then_exit_conditions_hold_for_every_member() {
    let ids = SequentialIdGenerator::new("pool");
    let member_cbs = vec![
        ("S1".to_string(), 100.0),
        ("S2".to_string(), 900.0),
        ("S3".to_string(), -450.0),
        ("S4".to_string(), -200.0),
    ];

    let allocation = create_pool(2024, &member_cbs, &ids);

    assert!(allocation.valid);
    for m in &allocation.members {
        if m.cb_before < 0.0 {
            assert!(m.cb_after >= m.cb_before, "deficit member must not exit worse");
        }
        if m.cb_before > 0.0 {
            assert!(m.cb_after >= 0.0, "surplus member must not exit negative");
        }
    }
}

#[test]
fn given_zero_cb_member_when_pooled_then_it_is_left_untouched() {
    let ids = SequentialIdGenerator::new("pool");
    let member_cbs = vec![
        ("S1".to_string(), 500.0),
        ("S2".to_string(), 0.0),
        ("S3".to_string(), -500.0),
    ];

    let allocation = create_pool(2024, &member_cbs, &ids);

    assert!(allocation.valid);
    let neutral = member(&allocation, "S2");
    assert_eq!(neutral.cb_before, 0.0);
    assert_eq!(neutral.cb_after, 0.0);
}

#[test]
fn given_largest_surplus_first_then_it_is_drained_before_the_next() {
    let ids = SequentialIdGenerator::new("pool");
    let member_cbs = vec![
        ("small".to_string(), 100.0),
        ("large".to_string(), 300.0),
        ("sink".to_string(), -350.0),
    ];

    let allocation = create_pool(2024, &member_cbs, &ids);

    assert!(allocation.valid);
    // Descending CB order drains the 300 surplus first, then 50 of the 100.
    assert_eq!(member(&allocation, "large").cb_after, 0.0);
    assert_eq!(member(&allocation, "small").cb_after, 50.0);
    assert_eq!(member(&allocation, "sink").cb_after, 0.0);
}

#[test]
fn given_equal_cbs_when_sorted_then_input_order_breaks_the_tie() {
    let ids = SequentialIdGenerator::new("pool");
    let member_cbs = vec![
        ("first".to_string(), 200.0),
        ("second".to_string(), 200.0),
        ("sink".to_string(), -150.0),
    ];

    let allocation = create_pool(2024, &member_cbs, &ids);

    assert!(allocation.valid);
    // Stable sort keeps "first" ahead of "second", so only "first" is drawn.
    assert_eq!(member(&allocation, "first").cb_after, 50.0);
    assert_eq!(member(&allocation, "second").cb_after, 200.0);
}

#[test]
fn given_all_zero_members_when_pooled_then_valid_with_no_transfers() {
    let ids = SequentialIdGenerator::new("pool");
    let member_cbs = vec![("S1".to_string(), 0.0), ("S2".to_string(), 0.0)];

    let allocation = create_pool(2024, &member_cbs, &ids);

    assert!(allocation.valid);
    assert_eq!(allocation.pool_sum, 0.0);
    for m in &allocation.members {
        assert_eq!(m.cb_before, m.cb_after);
    }
}

#[test]
fn given_deficit_member_ending_worse_when_checked_then_invalid_pool() {
    let original = vec![("S1".to_string(), 300.0), ("S2".to_string(), -100.0)];
    let finals = HashMap::from([("S1", 350.0), ("S2", -150.0)]);

    let err = check_exit_conditions(&original, &finals)
        .expect_err("worsened deficit member must be rejected");

    assert_eq!(err.kind, AccountingErrorKind::InvalidPool);
    assert!(err.message.contains("S2"), "message should name the member: {}", err.message);
}

#[test]
fn given_surplus_member_ending_negative_when_checked_then_invalid_pool() {
    let original = vec![("S1".to_string(), 200.0), ("S2".to_string(), -150.0)];
    let finals = HashMap::from([("S1", -50.0), ("S2", 100.0)]);

    let err = check_exit_conditions(&original, &finals)
        .expect_err("surplus member driven negative must be rejected");

    assert_eq!(err.kind, AccountingErrorKind::InvalidPool);
    assert!(err.message.contains("S1"), "message should name the member: {}", err.message);
}

#[test]
fn given_member_missing_from_final_map_when_checked_then_its_cb_is_unchanged() {
    let original = vec![("S1".to_string(), 500.0), ("S2".to_string(), -500.0)];
    let finals = HashMap::from([("S1", 0.0)]);

    check_exit_conditions(&original, &finals).expect("untouched member keeps its starting CB");
}

#[test]
fn given_members_then_output_preserves_input_order() {
    let ids = SequentialIdGenerator::new("pool");
    let member_cbs = vec![
        ("S3".to_string(), -100.0),
        ("S1".to_string(), 400.0),
        ("S2".to_string(), -200.0),
    ];

    let allocation = create_pool(2024, &member_cbs, &ids);

    assert!(allocation.valid);
    let order: Vec<&str> = allocation.members.iter().map(|m| m.ship_id.as_str()).collect();
    assert_eq!(order, vec!["S3", "S1", "S2"]);
}
