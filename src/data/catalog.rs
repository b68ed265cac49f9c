use super::model::{Catalog, ImageRef, Tip};

// ---------------------------------------------------------------------------
// The built-in 30-day program
// ---------------------------------------------------------------------------

fn tip(id: u32, day: &'static str, title: &'static str, description: &'static str) -> Tip {
    Tip {
        id,
        day,
        title,
        description,
        image: ImageRef(id),
    }
}

/// The compiled-in tip catalog: thirty entries, one per day, in program
/// order. Pure and idempotent; every call returns the same value.
pub fn builtin() -> Catalog {
    Catalog::from_tips(vec![
        tip(
            1,
            "Day 1",
            "Greek Yogurt Parfait",
            "Layer Greek yogurt with fresh berries and granola for a delicious and nutritious breakfast.",
        ),
        tip(
            2,
            "Day 2",
            "Oatmeal with Almonds and Honey",
            "Cook up a bowl of oatmeal and top it with sliced almonds and a drizzle of honey for a satisfying meal.",
        ),
        tip(
            3,
            "Day 3",
            "Scrambled Eggs with Spinach",
            "Whisk together eggs and sauté with spinach for a protein-packed breakfast that's also high in vitamins.",
        ),
        tip(
            4,
            "Day 4",
            "Smoothie Bowl",
            "Blend your favorite fruits and Greek yogurt into a thick smoothie, then top with nuts and seeds.",
        ),
        tip(
            5,
            "Day 5",
            "Whole Wheat Pancakes",
            "Make pancakes using whole wheat flour and serve with a side of fresh fruit and a drizzle of maple syrup.",
        ),
        tip(
            6,
            "Day 6",
            "Avocado Toast",
            "Spread mashed avocado on whole-grain toast and add a pinch of salt and pepper for a quick and healthy breakfast.",
        ),
        tip(
            7,
            "Day 7",
            "Chia Seed Pudding",
            "Mix chia seeds with almond milk and let it sit overnight. Top with fresh fruit and nuts in the morning.",
        ),
        tip(
            8,
            "Day 8",
            "Fruit Salad",
            "Toss together a variety of fresh fruits for a colorful and refreshing breakfast salad.",
        ),
        tip(
            9,
            "Day 9",
            "Peanut Butter Banana Toast",
            "Spread peanut butter on whole-grain toast and add banana slices for a tasty and filling breakfast.",
        ),
        tip(
            10,
            "Day 10",
            "Yogurt and Berry Parfait",
            "Layer yogurt with mixed berries and a sprinkle of granola for a simple and nutritious breakfast.",
        ),
        tip(
            11,
            "Day 11",
            "Vegetable Omelette",
            "Whisk eggs and sauté with diced vegetables of your choice for a hearty and veggie-packed breakfast.",
        ),
        tip(
            12,
            "Day 12",
            "Cottage Cheese with Pineapple",
            "Top cottage cheese with fresh pineapple chunks for a protein-rich and tropical breakfast.",
        ),
        tip(
            13,
            "Day 13",
            "Whole Grain Cereal",
            "Choose a whole grain cereal and enjoy it with low-fat milk or a dairy-free alternative.",
        ),
        tip(
            14,
            "Day 14",
            "Egg and Vegetable Wrap",
            "Scramble eggs and add sautéed vegetables, then wrap it all in a whole wheat tortilla for a portable breakfast.",
        ),
        tip(
            15,
            "Day 15",
            "Peach and Almond Smoothie",
            "Blend peaches, almond milk, and a scoop of protein powder for a peachy and protein-rich breakfast.",
        ),
        tip(
            16,
            "Day 16",
            "Whole Grain Waffles",
            "Make waffles using whole grain flour and top them with fresh berries and a dollop of yogurt.",
        ),
        tip(
            17,
            "Day 17",
            "Spinach and Feta Omelette",
            "Whisk eggs and fill your omelette with spinach and crumbled feta cheese for a flavorful breakfast.",
        ),
        tip(
            18,
            "Day 18",
            "Cherry Almond Oatmeal",
            "Add dried cherries and chopped almonds to your oatmeal for a delightful and nutty twist.",
        ),
        tip(
            19,
            "Day 19",
            "Banana Walnut Muffins",
            "Bake banana walnut muffins using whole wheat flour for a grab-and-go breakfast option.",
        ),
        tip(
            20,
            "Day 20",
            "Sliced Apple with Almond Butter",
            "Spread almond butter on apple slices for a simple and crunchy breakfast.",
        ),
        tip(
            21,
            "Day 21",
            "Quinoa Breakfast Bowl",
            "Cook quinoa and top it with sliced banana, chopped nuts, and a drizzle of honey for a hearty breakfast bowl.",
        ),
        tip(
            22,
            "Day 22",
            "Mixed Berry Smoothie",
            "Blend mixed berries, Greek yogurt, and a touch of honey for a vibrant and creamy smoothie.",
        ),
        tip(
            23,
            "Day 23",
            "Peanut Butter and Jelly Sandwich",
            "Spread natural peanut butter and low-sugar jelly on whole-grain bread for a nostalgic breakfast.",
        ),
        tip(
            24,
            "Day 24",
            "Egg White Scramble",
            "Whisk egg whites and cook with diced vegetables for a low-fat and protein-rich breakfast.",
        ),
        tip(
            25,
            "Day 25",
            "Mango and Spinach Smoothie",
            "Blend mango, spinach, and coconut water for a tropical and nutritious breakfast drink.",
        ),
        tip(
            26,
            "Day 26",
            "Whole Grain Cinnamon Toast",
            "Toast whole-grain bread and sprinkle with cinnamon and a touch of honey for a simple yet flavorful breakfast.",
        ),
        tip(
            27,
            "Day 27",
            "Fruit and Nut Oatmeal",
            "Add your favorite fruits and a handful of nuts to your morning oatmeal for added flavor and texture.",
        ),
        tip(
            28,
            "Day 28",
            "Cottage Cheese and Berries",
            "Pair cottage cheese with a variety of fresh berries for a protein-packed and fruity breakfast.",
        ),
        tip(
            29,
            "Day 29",
            "Veggie Breakfast Burrito",
            "Scramble eggs with diced vegetables and wrap them in a whole wheat tortilla for a satisfying breakfast burrito.",
        ),
        tip(
            30,
            "Day 30",
            "Avocado Toast with Poached Egg",
            "Spread mashed avocado on whole-grain toast and top it with a poached egg for a protein-packed breakfast.",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_catalog_has_thirty_tips() {
        assert_eq!(builtin().len(), 30);
    }

    #[test]
    fn test_ids_are_contiguous_from_one() {
        for (i, tip) in builtin().iter().enumerate() {
            assert_eq!(tip.id as usize, i + 1);
        }
    }

    #[test]
    fn test_titles_and_descriptions_are_nonempty() {
        for tip in builtin().iter() {
            assert!(!tip.title.is_empty(), "tip {} has an empty title", tip.id);
            assert!(
                !tip.description.is_empty(),
                "tip {} has an empty description",
                tip.id
            );
        }
    }

    #[test]
    fn test_day_labels_match_ids() {
        for tip in builtin().iter() {
            assert_eq!(tip.day, format!("Day {}", tip.id));
        }
    }

    #[test]
    fn test_first_tip_contents() {
        let catalog = builtin();
        let first = catalog.get(1).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(first.day, "Day 1");
        assert_eq!(first.title, "Greek Yogurt Parfait");
        assert_eq!(
            first.description,
            "Layer Greek yogurt with fresh berries and granola for a delicious and nutritious breakfast."
        );
    }

    #[test]
    fn test_repeated_calls_are_value_equal() {
        assert_eq!(builtin(), builtin());
    }

    #[test]
    fn test_image_refs_are_unique() {
        let refs: BTreeSet<_> = builtin().iter().map(|t| t.image).collect();
        assert_eq!(refs.len(), 30);
    }
}
