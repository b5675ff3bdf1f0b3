use std::cmp::Ordering;

use unidecode::unidecode;

use crate::models::products::{Category, Product, SortKey};

/// Filters `products` by category and orders the survivors by `sort`.
///
/// Works on a vector of references; the catalog itself is never reordered. The sort is
/// stable, so products that compare equal keep their catalog order.
pub fn product_list<'a>(
  products: &'a [Product],
  category: Category,
  sort: SortKey,
) -> Vec<&'a Product> {
  let mut list: Vec<&Product> = products.iter().filter(|p| category.matches(p)).collect();
  list.sort_by(|a, b| compare(a, b, sort));
  list
}

/// Featured products in catalog order, at most `limit` of them.
pub fn featured_products(products: &[Product], limit: usize) -> Vec<&Product> {
  products.iter().filter(|p| p.is_featured).take(limit).collect()
}

fn compare(a: &Product, b: &Product, sort: SortKey) -> Ordering {
  match sort {
    SortKey::PriceLow => a.price.cmp(&b.price),
    SortKey::PriceHigh => b.price.cmp(&a.price),
    SortKey::Rating => b.rating.total_cmp(&a.rating),
    SortKey::Name => compare_names(&a.name, &b.name),
    SortKey::Featured => b.is_featured.cmp(&a.is_featured),
  }
}

// Accents and case only matter when the names are otherwise equal.
fn compare_names(a: &str, b: &str) -> Ordering {
  let fold = |s: &str| unidecode(s).to_lowercase();
  fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}
