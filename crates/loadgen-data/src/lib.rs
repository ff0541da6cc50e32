//! Random identity and catalog-item synthesis for shop-loadgen.
//!
//! All generation is pure: given the same `Rng` state, the same values come
//! out. Fragment pools and numeric ranges are injected at construction so
//! tests can pin them down (e.g. single-element pools for deterministic
//! names). Duplicate names across calls are expected and not deduplicated.

pub mod pools;

use rand::Rng;
use std::ops::Range;

pub use pools::{DESCRIPTORS, FIRST_NAMES, LAST_NAMES, PRODUCTS};

/// Domain appended to generated user emails.
const EMAIL_DOMAIN: &str = "gmail.com";

/// Fragment pools and numeric ranges used to synthesize shop data.
#[derive(Debug, Clone)]
pub struct DataModel {
    /// First-name fragments for person names.
    pub first_names: Vec<String>,
    /// Last-name fragments for person names.
    pub last_names: Vec<String>,
    /// Adjective fragments for item names.
    pub descriptors: Vec<String>,
    /// Product-noun fragments for item names.
    pub products: Vec<String>,
    /// Item price range (inclusive-exclusive).
    pub price_range: Range<f64>,
    /// Daily inventory range (inclusive-exclusive).
    pub inventory_range: Range<i32>,
}

impl Default for DataModel {
    fn default() -> Self {
        Self {
            first_names: pools::to_owned(FIRST_NAMES),
            last_names: pools::to_owned(LAST_NAMES),
            descriptors: pools::to_owned(DESCRIPTORS),
            products: pools::to_owned(PRODUCTS),
            price_range: 5.0..500.0,
            inventory_range: 10..1000,
        }
    }
}

impl DataModel {
    /// Synthesize a person name from one first-name and one last-name
    /// fragment, joined with a space.
    pub fn person_name<R: Rng>(&self, rng: &mut R) -> String {
        let first = pick(rng, &self.first_names);
        let last = pick(rng, &self.last_names);
        format!("{first} {last}")
    }

    /// Derive an email address from a person name: lowercased, spaces
    /// replaced by dots, at a fixed domain.
    pub fn email(&self, name: &str) -> String {
        format!("{}@{EMAIL_DOMAIN}", name.to_lowercase().replace(' ', "."))
    }

    /// Synthesize an item display name, e.g. "The Timeless Fedora".
    pub fn item_name<R: Rng>(&self, rng: &mut R) -> String {
        let descriptor = pick(rng, &self.descriptors);
        let product = pick(rng, &self.products);
        format!("The {descriptor} {product}")
    }

    /// Draw an item price uniformly from the configured range.
    pub fn price<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.price_range.clone())
    }

    /// Draw a daily inventory count uniformly from the configured range.
    pub fn inventory<R: Rng>(&self, rng: &mut R) -> i32 {
        rng.gen_range(self.inventory_range.clone())
    }

    /// Draw the VIP flag with a fixed 1-in-10 probability.
    pub fn is_vip<R: Rng>(&self, rng: &mut R) -> bool {
        rng.gen_range(0..10) == 9
    }
}

fn pick<'a, R: Rng>(rng: &mut R, pool: &'a [String]) -> &'a str {
    &pool[rng.gen_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pinned_model() -> DataModel {
        DataModel {
            first_names: vec!["Ada".to_string()],
            last_names: vec!["Lovelace".to_string()],
            descriptors: vec!["Timeless".to_string()],
            products: vec!["Fedora".to_string()],
            ..DataModel::default()
        }
    }

    #[test]
    fn test_person_name_from_pinned_pools() {
        let model = pinned_model();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(model.person_name(&mut rng), "Ada Lovelace");
    }

    #[test]
    fn test_email_lowercases_and_dots() {
        let model = DataModel::default();
        assert_eq!(model.email("Ada Lovelace"), "ada.lovelace@gmail.com");
    }

    #[test]
    fn test_item_name_format() {
        let model = pinned_model();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(model.item_name(&mut rng), "The Timeless Fedora");
    }

    #[test]
    fn test_price_and_inventory_in_range() {
        let model = DataModel::default();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let price = model.price(&mut rng);
            assert!((5.0..500.0).contains(&price));

            let inventory = model.inventory(&mut rng);
            assert!((10..1000).contains(&inventory));
        }
    }

    #[test]
    fn test_default_pool_sizes() {
        let model = DataModel::default();
        assert_eq!(model.first_names.len(), 20);
        assert_eq!(model.last_names.len(), 20);
        assert_eq!(model.descriptors.len(), 20);
        assert_eq!(model.products.len(), 15);
    }

    #[test]
    fn test_deterministic_given_seed() {
        let model = DataModel::default();
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            assert_eq!(model.person_name(&mut a), model.person_name(&mut b));
            assert_eq!(model.price(&mut a), model.price(&mut b));
        }
    }

    #[test]
    fn test_is_vip_roughly_one_in_ten() {
        let model = DataModel::default();
        let mut rng = StdRng::seed_from_u64(42);

        let vips = (0..10_000).filter(|_| model.is_vip(&mut rng)).count();
        assert!((700..1300).contains(&vips), "vip count out of range: {vips}");
    }
}
