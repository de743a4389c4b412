use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::cart::DishId;

/// A menu item as the backend defines it: integer id, display name, unit
/// price, and the optional media a card can offer (photo, AR model).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub ar_model_url: Option<String>,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

impl Dish {
    /// The URL the dish viewer should present, preferring the AR model and
    /// falling back to the photo.
    pub fn viewer_url(&self) -> Option<&str> {
        self.ar_model_url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .or_else(|| self.image_url.as_deref().filter(|u| !u.trim().is_empty()))
    }

    pub fn has_model(&self) -> bool {
        self.ar_model_url
            .as_deref()
            .is_some_and(|u| !u.trim().is_empty())
    }
}

/// The menu: an ordered dish list plus an id index for cart lookups.
///
/// Order is display order; the index only serves `get`, so a hash map is
/// fine there.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    dishes: Vec<Dish>,
    by_id: HashMap<DishId, usize>,
}

impl Catalog {
    pub fn new(dishes: Vec<Dish>) -> Self {
        let by_id = dishes
            .iter()
            .enumerate()
            .map(|(idx, dish)| (dish.id, idx))
            .collect();
        Self { dishes, by_id }
    }

    /// Parse a host-supplied menu (a JSON array of dishes).
    pub fn from_json(raw: &str) -> Result<Self, String> {
        let dishes: Vec<Dish> =
            serde_json::from_str(raw).map_err(|e| format!("catalog: {e}"))?;
        Ok(Self::new(dishes))
    }

    pub fn get(&self, id: DishId) -> Option<&Dish> {
        self.by_id.get(&id).map(|&idx| &self.dishes[idx])
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// Distinct categories in first-appearance order, for the filter tabs.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for dish in &self.dishes {
            if !dish.category.is_empty() && !seen.contains(&dish.category.as_str()) {
                seen.push(&dish.category);
            }
        }
        seen
    }

    /// The menu view: available dishes whose name or description contains
    /// `search` (case-insensitive), cut to `category` unless that is empty
    /// or `"all"`.
    pub fn filtered(&self, search: &str, category: &str) -> Vec<&Dish> {
        let needle = search.trim().to_lowercase();
        self.dishes
            .iter()
            .filter(|d| d.is_available)
            .filter(|d| category.is_empty() || category == "all" || d.category == category)
            .filter(|d| {
                needle.is_empty()
                    || d.name.to_lowercase().contains(&needle)
                    || d.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// The stock demo menu, used when the host page does not supply one.
    pub fn builtin_menu() -> Self {
        fn dish(
            id: DishId,
            name: &str,
            price: f64,
            description: &str,
            category: &str,
            image: &str,
            model: &str,
        ) -> Dish {
            Dish {
                id,
                name: name.to_string(),
                price,
                description: description.to_string(),
                category: category.to_string(),
                image_url: if image.is_empty() {
                    None
                } else {
                    Some(image.to_string())
                },
                ar_model_url: if model.is_empty() {
                    None
                } else {
                    Some(model.to_string())
                },
                is_available: true,
            }
        }

        Self::new(vec![
            dish(
                1,
                "Classic Burger",
                12.99,
                "Juicy beef patty with lettuce, tomato, onion, and our special sauce",
                "lunch",
                "/static/images/dishes/burger.jpg",
                "/static/images/ar-models/burger.glb",
            ),
            dish(
                2,
                "Caesar Salad",
                9.99,
                "Fresh romaine lettuce with Caesar dressing, croutons, and parmesan cheese",
                "lunch",
                "/static/images/dishes/caesar_salad.jpg",
                "",
            ),
            dish(
                3,
                "French Fries",
                4.99,
                "Crispy golden fries served with ketchup",
                "sides",
                "/static/images/dishes/fries.jpg",
                "",
            ),
            dish(
                4,
                "Chocolate Milkshake",
                6.99,
                "Creamy chocolate milkshake topped with whipped cream",
                "drinks",
                "/static/images/dishes/milkshake.jpg",
                "",
            ),
            dish(
                5,
                "Pancake Breakfast",
                8.99,
                "Fluffy pancakes served with maple syrup and butter",
                "breakfast",
                "/static/images/dishes/pancakes.jpg",
                "",
            ),
            dish(
                6,
                "Fresh Orange Juice",
                3.99,
                "Freshly squeezed orange juice",
                "breakfast",
                "/static/images/dishes/orange_juice.jpg",
                "",
            ),
            dish(
                7,
                "Bacon and Eggs",
                10.99,
                "Crispy bacon with two eggs any style and toast",
                "breakfast",
                "/static/images/dishes/bacon_eggs.jpg",
                "",
            ),
            dish(
                8,
                "Coffee",
                2.99,
                "Freshly brewed coffee",
                "drinks",
                "/static/images/dishes/coffee.jpg",
                "",
            ),
            dish(
                9,
                "Steak Dinner",
                24.99,
                "Grilled steak with roasted vegetables and mashed potatoes",
                "dinner",
                "/static/images/dishes/steak.jpg",
                "/static/images/ar-models/steak.glb",
            ),
            dish(
                10,
                "Red Wine",
                8.99,
                "Glass of house red wine",
                "drinks",
                "/static/images/dishes/red_wine.jpg",
                "",
            ),
            dish(
                11,
                "Garlic Bread",
                5.99,
                "Toasted bread with garlic butter",
                "sides",
                "/static/images/dishes/garlic_bread.jpg",
                "",
            ),
            dish(
                12,
                "Chocolate Cake",
                7.99,
                "Rich chocolate cake with chocolate frosting",
                "dessert",
                "/static/images/dishes/chocolate_cake.jpg",
                "",
            ),
            dish(
                13,
                "Ice Cream",
                5.99,
                "Vanilla ice cream with chocolate sauce",
                "dessert",
                "/static/images/dishes/ice_cream.jpg",
                "",
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_menu_is_complete_and_indexed() {
        let menu = Catalog::builtin_menu();
        assert_eq!(menu.len(), 13);

        let steak = menu.get(9).expect("steak exists");
        assert_eq!(steak.name, "Steak Dinner");
        assert_eq!(steak.price, 24.99);
        assert!(steak.has_model());

        assert!(menu.get(99).is_none());
    }

    #[test]
    fn search_matches_name_and_description_case_insensitively() {
        let menu = Catalog::builtin_menu();

        let by_name: Vec<_> = menu.filtered("BURGER", "").iter().map(|d| d.id).collect();
        assert_eq!(by_name, vec![1]);

        // "squeezed" only appears in the orange juice description.
        let by_desc: Vec<_> = menu.filtered("squeezed", "").iter().map(|d| d.id).collect();
        assert_eq!(by_desc, vec![6]);

        assert!(menu.filtered("no such dish", "").is_empty());
    }

    #[test]
    fn category_filter_cuts_the_list_and_all_disables_it() {
        let menu = Catalog::builtin_menu();

        let drinks: Vec<_> = menu.filtered("", "drinks").iter().map(|d| d.id).collect();
        assert_eq!(drinks, vec![4, 8, 10]);

        assert_eq!(menu.filtered("", "all").len(), menu.len());
        assert_eq!(menu.filtered("", "").len(), menu.len());
    }

    #[test]
    fn unavailable_dishes_never_render() {
        let dishes = vec![
            Dish {
                id: 1,
                name: "Soup of the Day".to_string(),
                price: 6.50,
                description: String::new(),
                category: "lunch".to_string(),
                image_url: None,
                ar_model_url: None,
                is_available: true,
            },
            Dish {
                id: 2,
                name: "Retired Special".to_string(),
                price: 19.00,
                description: String::new(),
                category: "lunch".to_string(),
                image_url: None,
                ar_model_url: None,
                is_available: false,
            },
        ];
        let menu = Catalog::new(dishes);

        let shown: Vec<_> = menu.filtered("", "").iter().map(|d| d.id).collect();
        assert_eq!(shown, vec![1]);

        // Lookup by id still works for hidden dishes.
        assert!(menu.get(2).is_some());
    }

    #[test]
    fn parses_a_host_supplied_menu() {
        let raw = r#"[
            {"id": 21, "name": "Margherita", "price": 11.0, "category": "dinner"},
            {"id": 22, "name": "Tiramisu", "price": 6.5,
             "ar_model_url": "/models/tiramisu.glb", "is_available": false}
        ]"#;
        let menu = Catalog::from_json(raw).expect("valid menu json");

        assert_eq!(menu.len(), 2);
        let margherita = menu.get(21).expect("present");
        assert!(margherita.is_available, "availability defaults to true");
        assert!(menu.get(22).expect("present").has_model());

        assert!(Catalog::from_json("not json").is_err());
    }

    #[test]
    fn categories_come_out_in_first_appearance_order() {
        let menu = Catalog::builtin_menu();
        assert_eq!(
            menu.categories(),
            vec!["lunch", "sides", "drinks", "breakfast", "dinner", "dessert"]
        );
    }

    #[test]
    fn viewer_url_prefers_the_model_over_the_photo() {
        let menu = Catalog::builtin_menu();

        let burger = menu.get(1).expect("present");
        assert_eq!(burger.viewer_url(), Some("/static/images/ar-models/burger.glb"));

        let salad = menu.get(2).expect("present");
        assert_eq!(salad.viewer_url(), Some("/static/images/dishes/caesar_salad.jpg"));
    }
}
