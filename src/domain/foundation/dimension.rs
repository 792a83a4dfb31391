//! DimensionOrder - the fixed sequence of measurement axes.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// The seven measurement dimensions of the full assessment, in
/// presentation order: visual, auditory, verbal, memory, ideation,
/// kinesthetic, athletic.
pub const DEFAULT_DIMENSIONS: &[&str] = &["看", "听", "说", "记", "想", "做", "运动"];

/// Ordered list of dimension names.
///
/// Position in this list is the primary key of the canonical question order
/// and decides which dimension a milestone names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DimensionOrder(Vec<String>);

impl DimensionOrder {
    /// Creates an order from names, rejecting empty lists, blank names and duplicates.
    pub fn new<I, S>(names: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(ValidationError::empty_field("dimension_order"));
        }
        for (i, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ValidationError::empty_field("dimension_order"));
            }
            if names[..i].contains(name) {
                return Err(ValidationError::invalid_format(
                    "dimension_order",
                    format!("duplicate dimension '{}'", name),
                ));
            }
        }
        Ok(Self(names))
    }

    /// Position of a dimension, if it is part of the order.
    pub fn position(&self, dimension: &str) -> Option<usize> {
        self.0.iter().position(|d| d == dimension)
    }

    /// Sort rank of a dimension; unknown dimensions rank after every known one.
    pub fn rank(&self, dimension: &str) -> usize {
        self.position(dimension).unwrap_or(self.0.len())
    }

    /// Dimension at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for DimensionOrder {
    fn default() -> Self {
        Self(DEFAULT_DIMENSIONS.iter().map(|d| d.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_seven_dimensions() {
        let order = DimensionOrder::default();
        assert_eq!(order.len(), 7);
        assert_eq!(order.get(0), Some("看"));
        assert_eq!(order.get(6), Some("运动"));
    }

    #[test]
    fn unknown_dimension_ranks_last() {
        let order = DimensionOrder::default();
        assert_eq!(order.rank("听"), 1);
        assert_eq!(order.rank("未知"), 7);
        assert!(order.rank("运动") < order.rank("未知"));
    }

    #[test]
    fn rejects_empty_order() {
        let empty: Vec<String> = vec![];
        assert!(DimensionOrder::new(empty).is_err());
    }

    #[test]
    fn rejects_duplicates() {
        let result = DimensionOrder::new(["看", "听", "看"]);
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }

    #[test]
    fn rejects_blank_names() {
        assert!(DimensionOrder::new(["看", " "]).is_err());
    }

    #[test]
    fn get_out_of_range_is_none() {
        assert_eq!(DimensionOrder::default().get(7), None);
    }
}
