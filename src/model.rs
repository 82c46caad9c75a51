//! Data Model
//!
//! Types delivered by the marketplace API and the chart-ready shapes derived
//! from them.

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category name to item count, in the order the server delivered it.
///
/// The bar chart lists categories in this order, so keys are never sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDistribution {
    entries: Vec<(String, u64)>,
}

impl CategoryDistribution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a category. An existing key keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, count: u64) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = count,
            None => self.entries.push((name, count)),
        }
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for CategoryDistribution {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut distribution = Self::new();
        for (name, count) in iter {
            distribution.insert(name, count);
        }
        distribution
    }
}

impl Serialize for CategoryDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, count) in &self.entries {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CategoryDistribution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DistributionVisitor;

        impl<'de> Visitor<'de> for DistributionVisitor {
            type Value = CategoryDistribution;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category names to non-negative counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut distribution = CategoryDistribution::new();
                while let Some((name, count)) = access.next_entry::<String, u64>()? {
                    distribution.insert(name, count);
                }
                Ok(distribution)
            }
        }

        deserializer.deserialize_map(DistributionVisitor)
    }
}

/// Body of `GET /metrics/category_distribution`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDistributionResponse {
    pub distribution: CategoryDistribution,
    /// Row count reported by the server; the summary panel sums the
    /// distribution instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_products: Option<u64>,
}

/// One bar of the category chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartDatum {
    pub name: String,
    pub value: u64,
}

/// Totals shown next to the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DistributionSummary {
    pub category_count: usize,
    pub total_items: u64,
}

/// Opaque product identifier.
///
/// The reference server emits integers, but nothing here relies on that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Always written as text, so ids like `007` come back unchanged
impl Serialize for ProductId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Unsigned(u64),
            Signed(i64),
            Text(String),
        }

        match RawId::deserialize(deserializer) {
            Ok(RawId::Unsigned(id)) => Ok(ProductId(id.to_string())),
            Ok(RawId::Signed(id)) => Ok(ProductId(id.to_string())),
            Ok(RawId::Text(id)) => Ok(ProductId(id)),
            Err(_) => Err(de::Error::custom("product id must be an integer or a string")),
        }
    }
}

/// A product suggested for the queried one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedProduct {
    pub product_id: ProductId,
    pub title: String,
    pub category: String,
    pub price: f64,
    pub rating: f64,
    pub reviews_count: u64,
    /// In `[0, 1]`
    pub similarity_score: f64,
}

/// Body of `GET /products/{id}/recommendations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub recommendations: Vec<RecommendedProduct>,
}
