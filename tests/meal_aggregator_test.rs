// ABOUTME: Integration tests for dish, meal, and day nutrition aggregation
// ABOUTME: Verifies the zero identity, order and chunking independence, and per-slot totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use nutrition_tracker::intelligence::{aggregate, aggregate_day, day_total};
use nutrition_tracker::models::{Dish, MealType, NutritionData};

mod common;

use common::{date, day_with, dish};

fn sample_dishes() -> Vec<Dish> {
    vec![
        dish("oats", 150, 27.3, 5.1, 2.7),
        dish("banana", 89, 22.8, 1.1, 0.3),
        dish("chicken", 165, 0.0, 31.0, 3.6),
        dish("rice", 130, 28.2, 2.7, 0.3),
        dish("olive-oil", 119, 0.0, 0.0, 13.5),
        dish("yogurt", 61, 4.7, 3.5, 3.3),
    ]
}

#[test]
fn test_empty_list_is_zero() {
    assert_eq!(aggregate(std::iter::empty::<&Dish>()), NutritionData::ZERO);
    assert_eq!(aggregate(Vec::<Dish>::new().iter()), NutritionData::default());
}

#[test]
fn test_single_dish_carries_its_values() {
    let toast = dish("toast", 200, 10.0, 5.0, 3.0);
    let total = aggregate([&toast]);
    assert_eq!(total.calories, 200);
    assert!((total.carb - 10.0).abs() < 1e-9);
    assert!((total.protein - 5.0).abs() < 1e-9);
    assert!((total.fat - 3.0).abs() < 1e-9);
}

#[test]
fn test_sum_of_calories_matches_dishes() {
    let dishes = sample_dishes();
    let total = aggregate(&dishes);
    let expected: u32 = dishes.iter().map(|d| d.kcal).sum();
    assert_eq!(total.calories, expected);
}

#[test]
fn test_order_does_not_change_total() {
    let dishes = sample_dishes();
    let forward = aggregate(&dishes);
    let backward = aggregate(dishes.iter().rev());

    let mut rotated = dishes.clone();
    rotated.rotate_left(2);

    assert_eq!(forward, backward);
    assert_eq!(forward, aggregate(&rotated));
}

#[test]
fn test_partitioned_aggregation_matches_whole() {
    let dishes = sample_dishes();
    let whole = aggregate(&dishes);

    for split in 0..=dishes.len() {
        let (left, right) = dishes.split_at(split);
        assert_eq!(aggregate(left) + aggregate(right), whole, "split at {split}");
    }

    let chunked: NutritionData = dishes.chunks(4).map(aggregate).sum();
    assert_eq!(chunked, whole);
}

#[test]
fn test_day_total_matches_concatenated_slots() {
    let dishes = sample_dishes();
    let day = day_with(
        date(2024, 6, 12),
        &[
            (MealType::Breakfast, dishes[0].clone()),
            (MealType::Breakfast, dishes[1].clone()),
            (MealType::Lunch, dishes[2].clone()),
            (MealType::Lunch, dishes[3].clone()),
            (MealType::Dinner, dishes[4].clone()),
            (MealType::Snacks, dishes[5].clone()),
        ],
    );

    assert_eq!(day_total(&day), aggregate(&dishes));
    assert_eq!(day_total(&day), aggregate(day.all_dishes()));
}

#[test]
fn test_aggregate_day_buckets_by_slot() {
    let day = day_with(
        date(2024, 6, 12),
        &[
            (MealType::Breakfast, dish("eggs", 140, 1.0, 12.0, 10.0)),
            (MealType::Snacks, dish("apple", 52, 14.0, 0.3, 0.2)),
        ],
    );

    let per_meal = aggregate_day(&day);
    assert_eq!(per_meal.get(MealType::Breakfast).calories, 140);
    assert_eq!(per_meal.get(MealType::Lunch), NutritionData::ZERO);
    assert_eq!(per_meal.get(MealType::Dinner), NutritionData::ZERO);
    assert_eq!(per_meal.get(MealType::Snacks).calories, 52);
    assert_eq!(per_meal.total().calories, 192);
}

#[test]
fn test_calories_saturate_instead_of_wrapping() {
    let huge = dish("huge", u32::MAX, 0.0, 0.0, 0.0);
    let extra = dish("extra", 10, 0.0, 0.0, 0.0);
    assert_eq!(aggregate([&huge, &extra]).calories, u32::MAX);
}
